//! `toolcrib-auth` — application users and role policy.
//!
//! Users are a read-only input to the workflow core: the core never mutates
//! them, it only derives policy (who needs photo evidence, who may approve)
//! from the role. Credential handling is opaque at this layer.

pub mod role;
pub mod store;
pub mod user;

pub use role::Role;
pub use store::UserStore;
pub use user::AppUser;
