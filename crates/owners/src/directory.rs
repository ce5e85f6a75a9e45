use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use toolcrib_core::{DomainError, DomainResult, OwnerId, OwnerRecordId};

use crate::profile::OwnerProfile;

/// In-memory owner directory.
///
/// Iteration order is insertion order. Interior locking so a shared
/// directory can be read while workflows run; none of the workflow
/// operations write here.
#[derive(Debug, Default)]
pub struct OwnerDirectory {
    entries: RwLock<Vec<OwnerProfile>>,
}

impl OwnerDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    fn read_guard(&self) -> DomainResult<RwLockReadGuard<'_, Vec<OwnerProfile>>> {
        self.entries
            .read()
            .map_err(|_| DomainError::internal("owner directory lock poisoned"))
    }

    fn write_guard(&self) -> DomainResult<RwLockWriteGuard<'_, Vec<OwnerProfile>>> {
        self.entries
            .write()
            .map_err(|_| DomainError::internal("owner directory lock poisoned"))
    }

    /// Look up a profile by business owner id, case-insensitively.
    ///
    /// Returns the canonical stored profile, so a caller that accepted
    /// `e123` from a form gets back the directory's `E123` casing.
    pub fn find(&self, owner_id: &OwnerId) -> DomainResult<Option<OwnerProfile>> {
        let entries = self.read_guard()?;
        Ok(entries.iter().find(|p| p.owner_id == *owner_id).cloned())
    }

    pub fn list(&self) -> DomainResult<Vec<OwnerProfile>> {
        Ok(self.read_guard()?.clone())
    }

    pub fn insert_many(&self, profiles: Vec<OwnerProfile>) -> DomainResult<()> {
        self.write_guard()?.extend(profiles);
        Ok(())
    }

    /// Replace the profile with the same row key, or append if new.
    pub fn upsert(&self, profile: OwnerProfile) -> DomainResult<()> {
        let mut entries = self.write_guard()?;
        match entries.iter_mut().find(|p| p.id == profile.id) {
            Some(existing) => *existing = profile,
            None => entries.push(profile),
        }
        Ok(())
    }

    /// Remove a directory row. Tool records keep whatever owner fields they
    /// already carry; nothing is cascaded.
    pub fn remove(&self, id: OwnerRecordId) -> DomainResult<bool> {
        let mut entries = self.write_guard()?;
        let before = entries.len();
        entries.retain(|p| p.id != id);
        Ok(entries.len() < before)
    }

    /// Drop everything and install the given rows. Used by the admin
    /// clear-all-data operation.
    pub fn replace_all(&self, profiles: Vec<OwnerProfile>) -> DomainResult<()> {
        *self.write_guard()? = profiles;
        Ok(())
    }
}
