use serde::{Deserialize, Serialize};

use toolcrib_core::{AppUserId, OwnerId};

use crate::role::Role;

/// An application account.
///
/// The password is an opaque string at this layer; no hashing contract is
/// made here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppUser {
    pub id: AppUserId,
    pub username: String,
    pub password: String,
    pub role: Role,
    /// Set when the account belongs to someone who also owns tools; used
    /// to pre-fill the report owner context for technicians.
    pub tool_owner_id: Option<OwnerId>,
}

impl AppUser {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            id: AppUserId::new(),
            username: username.into(),
            password: password.into(),
            role,
            tool_owner_id: None,
        }
    }

    pub fn with_tool_owner(mut self, owner_id: impl Into<OwnerId>) -> Self {
        self.tool_owner_id = Some(owner_id.into());
        self
    }
}
