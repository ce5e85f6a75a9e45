use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use toolcrib_core::{DomainError, DomainResult, ReportId};

use crate::report::{DefectReport, ReportHeader, ReportLine, ReportStatus};

/// In-memory defect report store, in submission order.
///
/// Report numbering is count-based, so the next id is computed and the
/// report appended under one write-lock acquisition; two concurrent
/// submissions can never mint the same number.
#[derive(Debug, Default)]
pub struct ReportStore {
    reports: RwLock<Vec<DefectReport>>,
}

impl ReportStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read_guard(&self) -> DomainResult<RwLockReadGuard<'_, Vec<DefectReport>>> {
        self.reports
            .read()
            .map_err(|_| DomainError::internal("report store lock poisoned"))
    }

    fn write_guard(&self) -> DomainResult<RwLockWriteGuard<'_, Vec<DefectReport>>> {
        self.reports
            .write()
            .map_err(|_| DomainError::internal("report store lock poisoned"))
    }

    pub fn count(&self) -> DomainResult<usize> {
        Ok(self.read_guard()?.len())
    }

    pub fn list(&self) -> DomainResult<Vec<DefectReport>> {
        Ok(self.read_guard()?.clone())
    }

    pub fn get(&self, id: &ReportId) -> DomainResult<Option<DefectReport>> {
        let reports = self.read_guard()?;
        Ok(reports.iter().find(|r| r.id() == id).cloned())
    }

    /// Reports awaiting a decision, for the approvals view.
    pub fn pending(&self) -> DomainResult<Vec<DefectReport>> {
        let reports = self.read_guard()?;
        Ok(reports
            .iter()
            .filter(|r| r.status() == ReportStatus::PendingApproval)
            .cloned()
            .collect())
    }

    /// Mint the next report number and append the report it identifies,
    /// atomically. Returns the stored report.
    pub fn append_numbered(
        &self,
        header: ReportHeader,
        submitted_by: String,
        items: Vec<ReportLine>,
        photo: Option<String>,
    ) -> DomainResult<DefectReport> {
        let mut reports = self.write_guard()?;
        let id = ReportId::from_sequence(reports.len() + 1);
        let report = DefectReport::new(id, header, submitted_by, items, photo);
        reports.push(report.clone());
        Ok(report)
    }

    /// Move a pending report to a terminal status. Fails with `NotFound`
    /// for an unknown id and `InvalidState` for an already-decided report,
    /// so a second decision can never re-run reconciliation.
    pub fn transition(
        &self,
        id: &ReportId,
        status: ReportStatus,
    ) -> DomainResult<DefectReport> {
        let mut reports = self.write_guard()?;
        let report = reports
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(DomainError::not_found)?;

        if report.status().is_terminal() {
            return Err(DomainError::invalid_state(format!(
                "report {} has already been decided",
                report.id()
            )));
        }

        report.set_status(status);
        Ok(report.clone())
    }

    /// Drop all reports. Used by the admin clear-all-data operation; the
    /// count-based numbering restarts, which is the preserved behaviour.
    pub fn clear(&self) -> DomainResult<()> {
        self.write_guard()?.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use toolcrib_core::OwnerId;

    fn header() -> ReportHeader {
        ReportHeader {
            dfr_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            owner_id: OwnerId::new("E123"),
            owner_name: "John Doe".to_string(),
            department: "Maintenance".to_string(),
            shift: "Day".to_string(),
        }
    }

    fn line() -> ReportLine {
        ReportLine::draft_from(&toolcrib_registry::ToolRecord::new(
            "WR-001", "SN-1", "Wrench",
        ))
    }

    #[test]
    fn numbering_follows_store_count() {
        let store = ReportStore::new();
        let first = store
            .append_numbered(header(), "tech".to_string(), vec![line()], None)
            .unwrap();
        let second = store
            .append_numbered(header(), "tech".to_string(), vec![line()], None)
            .unwrap();

        assert_eq!(first.id().as_str(), "DFR-001");
        assert_eq!(second.id().as_str(), "DFR-002");
        assert_eq!(store.count().unwrap(), 2);
    }

    #[test]
    fn transition_rejects_unknown_report() {
        let store = ReportStore::new();
        let err = store
            .transition(&ReportId::new("DFR-999"), ReportStatus::Approved)
            .unwrap_err();
        match err {
            DomainError::NotFound => {}
            _ => panic!("Expected NotFound for unknown report"),
        }
    }

    #[test]
    fn transition_rejects_second_decision() {
        let store = ReportStore::new();
        let report = store
            .append_numbered(header(), "tech".to_string(), vec![line()], None)
            .unwrap();

        store
            .transition(report.id(), ReportStatus::Approved)
            .unwrap();
        let err = store
            .transition(report.id(), ReportStatus::Rejected)
            .unwrap_err();
        match err {
            DomainError::InvalidState(msg) if msg.contains("already been decided") => {}
            _ => panic!("Expected InvalidState for re-deciding a report"),
        }

        // The first decision stands.
        let stored = store.get(report.id()).unwrap().unwrap();
        assert_eq!(stored.status(), ReportStatus::Approved);
    }

    #[test]
    fn pending_filters_decided_reports() {
        let store = ReportStore::new();
        let first = store
            .append_numbered(header(), "tech".to_string(), vec![line()], None)
            .unwrap();
        store
            .append_numbered(header(), "tech".to_string(), vec![line()], None)
            .unwrap();

        store.transition(first.id(), ReportStatus::Rejected).unwrap();

        let pending = store.pending().unwrap();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id().as_str(), "DFR-002");
    }
}
