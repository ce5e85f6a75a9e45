//! `toolcrib-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no store or workflow
//! concerns): the error model, strongly-typed identifiers, tool status and
//! defect classification enums, calendar arithmetic, and the clock seam.

pub mod calendar;
pub mod clock;
pub mod error;
pub mod id;
pub mod status;

pub use calendar::next_annual;
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{DomainError, DomainResult};
pub use id::{AppUserId, OwnerId, OwnerRecordId, ReportId, ReportLineId, ToolId, ToolRecordId};
pub use status::{DefectType, ToolStatus};
