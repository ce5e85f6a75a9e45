//! `toolcrib-app` — the process-wide application context.
//!
//! One [`AppContext`] owns every store and the clock, and the UI layer
//! reaches the workflow operations through it. No ambient singletons: tests
//! construct isolated contexts.

pub mod context;

pub use context::{AppContext, Seed};

pub use toolcrib_audit::PerformAudit;
pub use toolcrib_auth::{AppUser, Role, UserStore};
pub use toolcrib_core::{
    Clock, DefectType, DomainError, DomainResult, FixedClock, OwnerId, ReportId, SystemClock,
    ToolId, ToolRecordId, ToolStatus,
};
pub use toolcrib_handover::Transfer;
pub use toolcrib_observability::init as init_tracing;
pub use toolcrib_owners::{OwnerDirectory, OwnerProfile};
pub use toolcrib_registry::{RegistryStats, ToolRecord, ToolRegistry};
pub use toolcrib_reports::{
    DecideReport, DefectReport, ReportHeader, ReportLine, ReportStatus, ReportStore, SubmitReport,
};
