//! Well-known defaults shared by the request layer and the endpoint wrappers.

/// Number of items sent per request when a batch size is not given explicitly.
///
/// Portal endpoints that accept lists (user invitations, group membership changes)
/// cap the number of entries per call; 25 is the conservative limit used across them.
pub const DEFAULT_BATCH_SIZE: usize = 25;

/// Sharing REST root used when [`crate::RequestOptions::portal`] is not set.
pub const DEFAULT_PORTAL_URL: &str = "https://www.arcgis.com/sharing/rest";
