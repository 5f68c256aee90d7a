use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::PortalError;

/// Role granted to invited users.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InviteRole {
    #[default]
    GroupMember,
    GroupAdmin,
}

impl InviteRole {
    /// Wire value expected by the portal.
    pub const fn as_str(&self) -> &'static str {
        match self {
            InviteRole::GroupMember => "group_member",
            InviteRole::GroupAdmin => "group_admin",
        }
    }
}

impl FromStr for InviteRole {
    type Err = PortalError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "group_member" => Ok(Self::GroupMember),
            "group_admin" => Ok(Self::GroupAdmin),
            _ => Err(PortalError::UnknownRole(s.to_string())),
        }
    }
}

impl fmt::Display for InviteRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
