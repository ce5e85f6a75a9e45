//! `toolcrib-owners` — owner profiles and the owner directory.
//!
//! The directory is the source of truth for who an owner is. Tool records
//! carry denormalized copies of these fields; the directory itself is never
//! mutated by registry operations.

pub mod directory;
pub mod profile;

pub use directory::OwnerDirectory;
pub use profile::OwnerProfile;
