use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use toolcrib_core::{DomainResult, ToolStatus};

use crate::store::ToolRegistry;

/// Headline counts for the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistryStats {
    pub total_tools: usize,
    /// In service and not flagged defective.
    pub active_tools: usize,
    pub defective_tools: usize,
    pub scrap_tools: usize,
    /// Audit due date strictly in the past as of the given date. The audit
    /// work queue itself uses `<=`; the dashboard highlights only what is
    /// already overdue.
    pub audit_overdue: usize,
    pub total_asset_cost: f64,
}

impl ToolRegistry {
    pub fn stats(&self, as_of: NaiveDate) -> DomainResult<RegistryStats> {
        let records = self.list()?;

        let mut stats = RegistryStats {
            total_tools: records.len(),
            active_tools: 0,
            defective_tools: 0,
            scrap_tools: 0,
            audit_overdue: 0,
            total_asset_cost: 0.0,
        };

        for record in &records {
            if record.status == Some(ToolStatus::InService) && !record.defect_flag {
                stats.active_tools += 1;
            }
            if record.defect_flag {
                stats.defective_tools += 1;
            }
            if record.status == Some(ToolStatus::Scrap) {
                stats.scrap_tools += 1;
            }
            if record.next_audit_due.is_some_and(|due| due < as_of) {
                stats.audit_overdue += 1;
            }
            stats.total_asset_cost += record.cost;
        }

        Ok(stats)
    }
}
