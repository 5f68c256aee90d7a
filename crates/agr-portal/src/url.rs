use agr_model::{DEFAULT_PORTAL_URL, RequestOptions};

/// Sharing REST root for `options`, without a trailing slash.
///
/// Falls back to [`DEFAULT_PORTAL_URL`] when no portal is set.
pub fn portal_url(options: &RequestOptions) -> &str {
    options
        .portal
        .as_deref()
        .unwrap_or(DEFAULT_PORTAL_URL)
        .trim_end_matches('/')
}
