mod role;
pub use role::InviteRole;

mod invite;
pub use invite::{InviteGroupUsersOptions, invite_group_users};
