//! Portal endpoint wrappers built on the `agr-core` batch layer.
mod error;
pub use error::PortalError;

mod config;
pub use config::ClientConfig;

mod url;
pub use url::portal_url;

pub mod groups;
pub use groups::{InviteGroupUsersOptions, InviteRole, invite_group_users};

#[cfg(feature = "http")]
pub mod http;
#[cfg(feature = "http")]
pub use http::{ReqwestTransport, connect};
