//! `toolcrib-registry` — the authoritative store of current tool state.
//!
//! Every other workflow crate mutates tool records through the registry.
//! The registry itself enforces no cross-entity invariants; the workflow
//! operations that call it are responsible for keeping the defect flag,
//! report number and owner fields consistent.

pub mod record;
pub mod stats;
pub mod store;
pub mod sync;

pub use record::ToolRecord;
pub use stats::RegistryStats;
pub use store::ToolRegistry;
pub use sync::reconcile_owners;
