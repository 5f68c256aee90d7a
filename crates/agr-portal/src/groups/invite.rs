use agr_core::{PortalClient, base_options_factory, combine_safe_responses};
use agr_model::{AggregateResponse, KeyValue, RequestOptions, SafeResponse};
use serde::{Deserialize, Serialize, de::IgnoredAny};
use tracing::{info, instrument};

use crate::{PortalError, groups::InviteRole, portal_url};

/// Parameter carrying the chunk of user names.
const PARAM_USERS: &str = "users";

/// Options for [`invite_group_users`].
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InviteGroupUsersOptions {
    /// Group id.
    pub id: String,
    /// User names to invite.
    pub users: Vec<String>,
    /// Role granted on acceptance.
    #[serde(default)]
    pub role: InviteRole,
    /// Minutes until the invitation expires.
    pub expiration: u32,
    /// Portal, token and any extra parameters.
    #[serde(default)]
    pub request: RequestOptions,
}

/// Invite users to join a group.
///
/// Users are sent in batches (the client's batch size, 25 by default), one request
/// per batch, all concurrently. The per-batch results are folded into one
/// [`AggregateResponse`]: a success, or a failure listing every batch error.
/// An empty user list sends nothing and succeeds.
#[instrument(level = "debug", skip(client, options), fields(group = %options.id, users = options.users.len()))]
pub async fn invite_group_users(
    client: &PortalClient,
    options: &InviteGroupUsersOptions,
) -> Result<AggregateResponse, PortalError> {
    let url = format!(
        "{}/community/groups/{}/invite",
        portal_url(&options.request),
        options.id
    );
    let base = options.request.with_params(&[
        KeyValue::new("role", options.role.as_str()),
        KeyValue::new("expiration", options.expiration),
    ]);

    let results: Vec<SafeResponse<IgnoredAny>> = client
        .send_batch(&url, &options.users, base_options_factory(base, PARAM_USERS), None)
        .await?;

    let combined = combine_safe_responses(results);
    info!(
        success = combined.is_success(),
        errors = combined.errors().len(),
        "group invitations sent"
    );
    Ok(combined)
}
