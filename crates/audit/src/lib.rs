//! `toolcrib-audit` — annual audit scheduling.

pub mod scheduler;

pub use scheduler::{PerformAudit, due_for_audit, perform_audit};
