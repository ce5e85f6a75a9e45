use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use toolcrib_core::{AppUserId, DomainError, DomainResult};

use crate::user::AppUser;

/// In-memory application user store.
#[derive(Debug, Default)]
pub struct UserStore {
    users: RwLock<Vec<AppUser>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read_guard(&self) -> DomainResult<RwLockReadGuard<'_, Vec<AppUser>>> {
        self.users
            .read()
            .map_err(|_| DomainError::internal("user store lock poisoned"))
    }

    fn write_guard(&self) -> DomainResult<RwLockWriteGuard<'_, Vec<AppUser>>> {
        self.users
            .write()
            .map_err(|_| DomainError::internal("user store lock poisoned"))
    }

    pub fn list(&self) -> DomainResult<Vec<AppUser>> {
        Ok(self.read_guard()?.clone())
    }

    pub fn get(&self, id: AppUserId) -> DomainResult<Option<AppUser>> {
        let users = self.read_guard()?;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    pub fn find_by_username(&self, username: &str) -> DomainResult<Option<AppUser>> {
        let users = self.read_guard()?;
        Ok(users.iter().find(|u| u.username == username).cloned())
    }

    pub fn insert_many(&self, users: Vec<AppUser>) -> DomainResult<()> {
        self.write_guard()?.extend(users);
        Ok(())
    }

    pub fn upsert(&self, user: AppUser) -> DomainResult<()> {
        let mut users = self.write_guard()?;
        match users.iter_mut().find(|u| u.id == user.id) {
            Some(existing) => *existing = user,
            None => users.push(user),
        }
        Ok(())
    }

    /// Remove an account. Users cannot remove their own account, so the
    /// acting user must be named.
    pub fn remove(&self, id: AppUserId, acting_user: AppUserId) -> DomainResult<bool> {
        if id == acting_user {
            return Err(DomainError::validation(
                "users cannot remove their own account",
            ));
        }
        let mut users = self.write_guard()?;
        let before = users.len();
        users.retain(|u| u.id != id);
        Ok(users.len() < before)
    }

    /// Drop everything and install the given accounts. Used by the admin
    /// clear-all-data operation.
    pub fn replace_all(&self, users: Vec<AppUser>) -> DomainResult<()> {
        *self.write_guard()? = users;
        Ok(())
    }
}
