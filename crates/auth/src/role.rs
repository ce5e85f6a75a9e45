use serde::{Deserialize, Serialize};

/// Application role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Supervisor,
    Technician,
}

impl Role {
    /// Whether reports submitted under this role must attach photographic
    /// evidence. Only unprivileged submitters are held to it.
    pub fn photo_required(&self) -> bool {
        matches!(self, Role::Technician)
    }

    /// Whether this role may approve or reject reports and perform
    /// handovers.
    pub fn is_privileged(&self) -> bool {
        matches!(self, Role::Admin | Role::Supervisor)
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Role::Admin => f.write_str("Admin"),
            Role::Supervisor => f.write_str("Supervisor"),
            Role::Technician => f.write_str("Technician"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_technicians_need_photo_evidence() {
        assert!(Role::Technician.photo_required());
        assert!(!Role::Supervisor.photo_required());
        assert!(!Role::Admin.photo_required());
    }

    #[test]
    fn privilege_splits_on_supervisor_and_above() {
        assert!(Role::Admin.is_privileged());
        assert!(Role::Supervisor.is_privileged());
        assert!(!Role::Technician.is_privileged());
    }
}
