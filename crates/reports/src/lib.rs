//! `toolcrib-reports` — defect report snapshots and their workflow.
//!
//! A report freezes a copy of the selected tool entries at submission time.
//! The live registry is reconciled *from* that snapshot — when the report
//! is submitted and again when it is approved or rejected — and the
//! snapshot itself is never written after creation, apart from its status.

pub mod report;
pub mod store;
pub mod workflow;

pub use report::{DefectReport, ReportHeader, ReportLine, ReportStatus};
pub use store::ReportStore;
pub use workflow::{DecideReport, SubmitReport, decide, submit};
