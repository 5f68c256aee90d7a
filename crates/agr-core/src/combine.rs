use agr_model::{AggregateResponse, ErrorList, SafeResponse};

/// Reduce several responses to a single verdict.
///
/// The result is a success only if every input is; otherwise it is a failure holding
/// all input errors concatenated in input order. An empty input is a success.
///
/// ```
/// use agr_core::combine_safe_responses;
/// use agr_model::{RequestError, SafeResponse};
///
/// let all_ok: Vec<SafeResponse<()>> = vec![SafeResponse::Success(()), SafeResponse::Success(())];
/// assert!(combine_safe_responses(all_ok).is_success());
///
/// let mixed: Vec<SafeResponse<()>> = vec![
///     SafeResponse::Success(()),
///     SafeResponse::failed(RequestError::new("error 1")),
/// ];
/// assert_eq!(combine_safe_responses(mixed).errors().len(), 1);
/// ```
pub fn combine_safe_responses<T, R>(responses: R) -> AggregateResponse
where
    R: IntoIterator<Item = SafeResponse<T>>,
{
    let mut errors: Option<ErrorList> = None;
    for res in responses {
        if let SafeResponse::Failure(list) = res {
            match errors.as_mut() {
                Some(acc) => acc.append(list),
                None => errors = Some(list),
            }
        }
    }

    match errors {
        Some(errors) => SafeResponse::Failure(errors),
        None => SafeResponse::Success(()),
    }
}
