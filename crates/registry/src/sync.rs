//! Owner sync: batch reconciliation of denormalized owner fields.
//!
//! Submission and handover denormalize owner fields at their own narrow
//! moments; directory edits made afterwards reach already-issued records
//! only through this pass.

use std::collections::HashMap;

use tracing::info;

use toolcrib_core::{DomainResult, OwnerId};
use toolcrib_owners::{OwnerDirectory, OwnerProfile};

use crate::store::ToolRegistry;

/// Re-copy current directory fields onto every registry record whose owner
/// id matches a directory entry (case-insensitively, via `OwnerId`
/// equality). Records with no matching entry are left untouched, not
/// cleared. Returns how many records were rewritten.
pub fn reconcile_owners(
    registry: &ToolRegistry,
    directory: &OwnerDirectory,
) -> DomainResult<usize> {
    let by_owner: HashMap<OwnerId, OwnerProfile> = directory
        .list()?
        .into_iter()
        .map(|p| (p.owner_id.clone(), p))
        .collect();

    let updated = registry.update_where(
        |record| by_owner.contains_key(&record.owner_id),
        |record| {
            if let Some(profile) = by_owner.get(&record.owner_id) {
                record.copy_owner_fields(profile);
            }
        },
    )?;

    info!(updated, "owner sync reconciled registry records");
    Ok(updated)
}
