use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::info;

use toolcrib_core::{Clock, DomainError, DomainResult, ToolRecordId};
use toolcrib_owners::OwnerProfile;
use toolcrib_registry::ToolRegistry;

/// Command: hand a set of tools over to a new owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    /// Registry row keys. Handover matches by row key, unlike report
    /// reconciliation which matches by business tool id.
    pub record_ids: HashSet<ToolRecordId>,
    pub to_owner: OwnerProfile,
}

/// Re-attribute every selected record to `to_owner` and stamp today's date
/// as the handover date.
///
/// Touches only the owner attribution and handover date: status, defect
/// flag and audit fields pass to the new owner unchanged. The previous
/// owner is not recorded on the tool itself. Returns the number of records
/// updated.
pub fn transfer(
    registry: &ToolRegistry,
    clock: &dyn Clock,
    cmd: Transfer,
) -> DomainResult<usize> {
    if cmd.record_ids.is_empty() {
        return Err(DomainError::validation("no tools selected for handover"));
    }
    if !cmd.to_owner.is_resolved() {
        return Err(DomainError::validation("handover target owner is not resolved"));
    }

    let today = clock.today();
    let updated = registry.update_where(
        |record| cmd.record_ids.contains(&record.id),
        |record| {
            record.owner_id = cmd.to_owner.owner_id.clone();
            record.copy_owner_fields(&cmd.to_owner);
            record.handover_date = Some(today);
        },
    )?;

    info!(
        to_owner = %cmd.to_owner.owner_id,
        selected = cmd.record_ids.len(),
        updated,
        "tools handed over"
    );
    Ok(updated)
}
