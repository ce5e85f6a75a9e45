use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use toolcrib_core::{DomainError, DomainResult, ToolRecordId, next_annual};
use toolcrib_registry::{ToolRecord, ToolRegistry};

/// Command: record that a tool was audited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformAudit {
    pub record_id: ToolRecordId,
    pub audit_date: NaiveDate,
    pub auditor: String,
    pub comment: String,
}

/// Records whose next audit is due on or before `as_of`, in registry
/// (insertion) order.
pub fn due_for_audit(registry: &ToolRegistry, as_of: NaiveDate) -> DomainResult<Vec<ToolRecord>> {
    let records = registry.list()?;
    Ok(records
        .into_iter()
        .filter(|r| r.next_audit_due.is_some_and(|due| due <= as_of))
        .collect())
}

/// Stamp the audit onto the record and schedule the next one a calendar
/// year out (Feb 29 rolls to Mar 1 in a non-leap year).
///
/// The audit comment is appended to the record's comment as a new line,
/// prefixed with the audit date; prior comment text is preserved.
pub fn perform_audit(registry: &ToolRegistry, cmd: PerformAudit) -> DomainResult<()> {
    let next_due = next_annual(cmd.audit_date);
    let updated = registry.update_where(
        |record| record.id == cmd.record_id,
        |record| {
            record.last_audit = Some(cmd.audit_date);
            record.auditor = cmd.auditor.clone();
            let entry = format!("Audit on {}: {}", cmd.audit_date, cmd.comment);
            record.comment = if record.comment.is_empty() {
                entry
            } else {
                format!("{}\n{}", record.comment, entry)
            }
            .trim()
            .to_string();
            record.next_audit_due = Some(next_due);
        },
    )?;

    if updated == 0 {
        return Err(DomainError::not_found());
    }

    info!(
        record_id = %cmd.record_id,
        audit_date = %cmd.audit_date,
        next_due = %next_due,
        "audit performed"
    );
    Ok(())
}
