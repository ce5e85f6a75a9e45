//! Submission and decision: the two operations that reconcile a report
//! snapshot with the live registry.

use serde::{Deserialize, Serialize};
use tracing::info;

use toolcrib_core::{DomainError, DomainResult, ReportId, ToolStatus};
use toolcrib_registry::ToolRegistry;

use crate::report::{DefectReport, ReportHeader, ReportLine, ReportStatus};
use crate::store::ReportStore;

/// Command: submit a defect report from a working set of tool entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitReport {
    pub header: ReportHeader,
    pub items: Vec<ReportLine>,
    pub photo: Option<String>,
    /// Policy flag supplied by the caller: true for unprivileged
    /// submitters, whose reports need photographic evidence.
    pub photo_required: bool,
    pub submitted_by: String,
}

/// Command: approve or reject a pending report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecideReport {
    pub report_id: ReportId,
    pub approved: bool,
}

/// Create a report from the working set and flag the affected registry
/// records as defective.
///
/// Validates everything before touching either store. Registry records are
/// matched by business tool id; where a tool id appears on several lines,
/// the first line's disposition wins.
pub fn submit(
    reports: &ReportStore,
    registry: &ToolRegistry,
    cmd: SubmitReport,
) -> DomainResult<DefectReport> {
    if !cmd.header.is_resolved() {
        return Err(DomainError::validation("report owner is not resolved"));
    }
    if cmd.items.is_empty() {
        return Err(DomainError::validation("report has no tool entries"));
    }
    if cmd.photo_required && cmd.photo.is_none() {
        return Err(DomainError::validation("photo evidence is required"));
    }

    let report = reports.append_numbered(cmd.header, cmd.submitted_by, cmd.items, cmd.photo)?;

    let report_id = report.id().clone();
    let flagged = registry.update_where(
        |record| report.line_for_tool(&record.tool_id).is_some(),
        |record| {
            if let Some(line) = report.line_for_tool(&record.tool_id) {
                record.defect_flag = true;
                record.status = Some(line.status.unwrap_or(ToolStatus::NeedsInspection));
                record.defect_report_number = Some(report_id.clone());
                record.defect_type = line.defect_type;
            }
        },
    )?;

    info!(
        report_id = %report.id(),
        lines = report.items().len(),
        flagged,
        "defect report submitted"
    );
    Ok(report)
}

/// Apply the supervisor's decision to a pending report and reconcile the
/// registry from the frozen snapshot.
///
/// Approval trusts the submitted disposition: each matched record takes
/// its line's snapshot status, and a `Scrap` line additionally stamps the
/// record's scrap date with the report's submission date. Rejection always
/// restores the pre-defect state regardless of what the snapshot said.
///
/// Lock order is fixed: report store first, then registry.
pub fn decide(
    reports: &ReportStore,
    registry: &ToolRegistry,
    cmd: DecideReport,
) -> DomainResult<DefectReport> {
    let status = if cmd.approved {
        ReportStatus::Approved
    } else {
        ReportStatus::Rejected
    };
    let report = reports.transition(&cmd.report_id, status)?;

    let reconciled = if cmd.approved {
        registry.update_where(
            |record| report.line_for_tool(&record.tool_id).is_some(),
            |record| {
                if let Some(line) = report.line_for_tool(&record.tool_id) {
                    record.status = line.status;
                    if line.status == Some(ToolStatus::Scrap) {
                        record.scrap_date = Some(report.dfr_date());
                    }
                }
            },
        )?
    } else {
        registry.update_where(
            |record| report.line_for_tool(&record.tool_id).is_some(),
            |record| {
                record.status = Some(ToolStatus::InService);
                record.defect_flag = false;
                record.defect_report_number = None;
                record.defect_type = None;
            },
        )?
    };

    info!(
        report_id = %report.id(),
        approved = cmd.approved,
        reconciled,
        "defect report decided"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use toolcrib_core::{DefectType, OwnerId, ToolId};
    use toolcrib_registry::ToolRecord;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn header() -> ReportHeader {
        ReportHeader {
            dfr_date: date(2024, 3, 1),
            owner_id: OwnerId::new("E123"),
            owner_name: "John Doe".to_string(),
            department: "Maintenance".to_string(),
            shift: "Day".to_string(),
        }
    }

    fn in_service(tool_id: &str) -> ToolRecord {
        let mut record = ToolRecord::new(tool_id, "SN-1", "A tool");
        record.status = Some(ToolStatus::InService);
        record
    }

    fn line_for(registry: &ToolRegistry, tool_id: &str, status: ToolStatus) -> ReportLine {
        let record = registry
            .get_by_tool_id(&ToolId::new(tool_id))
            .unwrap()
            .unwrap();
        let mut line = ReportLine::draft_from(&record);
        line.status = Some(status);
        line
    }

    fn submit_one(
        reports: &ReportStore,
        registry: &ToolRegistry,
        items: Vec<ReportLine>,
    ) -> DefectReport {
        submit(
            reports,
            registry,
            SubmitReport {
                header: header(),
                items,
                photo: None,
                photo_required: false,
                submitted_by: "supervisor".to_string(),
            },
        )
        .unwrap()
    }

    #[test]
    fn submit_rejects_unresolved_owner() {
        let reports = ReportStore::new();
        let registry = ToolRegistry::new();
        registry.insert_many(vec![in_service("WR-001")]).unwrap();
        let line = line_for(&registry, "WR-001", ToolStatus::Repairable);

        let mut empty_owner = header();
        empty_owner.owner_id = OwnerId::empty();
        let err = submit(
            &reports,
            &registry,
            SubmitReport {
                header: empty_owner,
                items: vec![line],
                photo: None,
                photo_required: false,
                submitted_by: "tech".to_string(),
            },
        )
        .unwrap_err();

        match err {
            DomainError::Validation(msg) if msg.contains("owner") => {}
            _ => panic!("Expected Validation for unresolved owner"),
        }
        assert_eq!(reports.count().unwrap(), 0);
    }

    #[test]
    fn submit_rejects_empty_working_set() {
        let reports = ReportStore::new();
        let registry = ToolRegistry::new();

        let err = submit(
            &reports,
            &registry,
            SubmitReport {
                header: header(),
                items: Vec::new(),
                photo: None,
                photo_required: false,
                submitted_by: "tech".to_string(),
            },
        )
        .unwrap_err();

        match err {
            DomainError::Validation(msg) if msg.contains("no tool entries") => {}
            _ => panic!("Expected Validation for empty working set"),
        }
    }

    #[test]
    fn submit_requires_photo_for_unprivileged_submitters() {
        let reports = ReportStore::new();
        let registry = ToolRegistry::new();
        registry.insert_many(vec![in_service("WR-001")]).unwrap();
        let line = line_for(&registry, "WR-001", ToolStatus::Repairable);

        let err = submit(
            &reports,
            &registry,
            SubmitReport {
                header: header(),
                items: vec![line.clone()],
                photo: None,
                photo_required: true,
                submitted_by: "tech".to_string(),
            },
        )
        .unwrap_err();
        match err {
            DomainError::Validation(msg) if msg.contains("photo") => {}
            _ => panic!("Expected Validation for missing photo"),
        }

        // With a photo attached, the same submission goes through.
        let report = submit(
            &reports,
            &registry,
            SubmitReport {
                header: header(),
                items: vec![line],
                photo: Some("data:image/png;base64,xyz".to_string()),
                photo_required: true,
                submitted_by: "tech".to_string(),
            },
        )
        .unwrap();
        assert_eq!(report.status(), ReportStatus::PendingApproval);
        assert!(report.photo().is_some());
    }

    #[test]
    fn submit_numbers_from_prior_count_and_flags_records() {
        let reports = ReportStore::new();
        let registry = ToolRegistry::new();
        registry
            .insert_many(vec![in_service("WR-001"), in_service("DR-005")])
            .unwrap();

        let report = submit_one(
            &reports,
            &registry,
            vec![
                line_for(&registry, "WR-001", ToolStatus::Repairable),
                line_for(&registry, "DR-005", ToolStatus::Scrap),
            ],
        );
        assert_eq!(report.id().as_str(), "DFR-001");

        for record in registry.list().unwrap() {
            assert!(record.defect_flag);
            assert_eq!(record.defect_report_number.as_ref(), Some(report.id()));
        }
        let wrench = registry
            .get_by_tool_id(&ToolId::new("WR-001"))
            .unwrap()
            .unwrap();
        assert_eq!(wrench.status, Some(ToolStatus::Repairable));
    }

    #[test]
    fn submit_defaults_unset_line_status_to_needs_inspection() {
        let reports = ReportStore::new();
        let registry = ToolRegistry::new();
        registry.insert_many(vec![in_service("WR-001")]).unwrap();

        let mut line = line_for(&registry, "WR-001", ToolStatus::New);
        line.status = None;
        submit_one(&reports, &registry, vec![line]);

        let record = registry
            .get_by_tool_id(&ToolId::new("WR-001"))
            .unwrap()
            .unwrap();
        assert_eq!(record.status, Some(ToolStatus::NeedsInspection));
    }

    #[test]
    fn submit_carries_defect_type_onto_the_record() {
        let reports = ReportStore::new();
        let registry = ToolRegistry::new();
        let mut record = in_service("WR-001");
        record.defect_type = Some(DefectType::Misuse);
        registry.insert_many(vec![record]).unwrap();

        // The line carries no defect type, so the record's is cleared.
        submit_one(
            &reports,
            &registry,
            vec![line_for(&registry, "WR-001", ToolStatus::Repairable)],
        );
        let stored = registry
            .get_by_tool_id(&ToolId::new("WR-001"))
            .unwrap()
            .unwrap();
        assert_eq!(stored.defect_type, None);
    }

    #[test]
    fn submit_leaves_unrelated_records_alone() {
        let reports = ReportStore::new();
        let registry = ToolRegistry::new();
        let untouched = in_service("HM-002");
        registry
            .insert_many(vec![in_service("WR-001"), untouched.clone()])
            .unwrap();

        submit_one(
            &reports,
            &registry,
            vec![line_for(&registry, "WR-001", ToolStatus::Repairable)],
        );

        let stored = registry.get(untouched.id).unwrap().unwrap();
        assert_eq!(stored, untouched);
    }

    #[test]
    fn approval_applies_snapshot_status_and_scrap_date() {
        let reports = ReportStore::new();
        let registry = ToolRegistry::new();
        registry
            .insert_many(vec![in_service("WR-001"), in_service("DR-005")])
            .unwrap();

        let report = submit_one(
            &reports,
            &registry,
            vec![
                line_for(&registry, "WR-001", ToolStatus::Repairable),
                line_for(&registry, "DR-005", ToolStatus::Scrap),
            ],
        );

        decide(
            &reports,
            &registry,
            DecideReport {
                report_id: report.id().clone(),
                approved: true,
            },
        )
        .unwrap();

        let wrench = registry
            .get_by_tool_id(&ToolId::new("WR-001"))
            .unwrap()
            .unwrap();
        assert_eq!(wrench.status, Some(ToolStatus::Repairable));
        assert_eq!(wrench.scrap_date, None);
        // Approval does not clear the defect linkage.
        assert!(wrench.defect_flag);

        let drill = registry
            .get_by_tool_id(&ToolId::new("DR-005"))
            .unwrap()
            .unwrap();
        assert_eq!(drill.status, Some(ToolStatus::Scrap));
        assert_eq!(drill.scrap_date, Some(date(2024, 3, 1)));
    }

    #[test]
    fn approval_with_non_scrap_status_keeps_prior_scrap_date() {
        let reports = ReportStore::new();
        let registry = ToolRegistry::new();
        let mut record = in_service("WR-001");
        record.scrap_date = Some(date(2020, 1, 1));
        registry.insert_many(vec![record]).unwrap();

        let report = submit_one(
            &reports,
            &registry,
            vec![line_for(&registry, "WR-001", ToolStatus::Repairable)],
        );
        decide(
            &reports,
            &registry,
            DecideReport {
                report_id: report.id().clone(),
                approved: true,
            },
        )
        .unwrap();

        let stored = registry
            .get_by_tool_id(&ToolId::new("WR-001"))
            .unwrap()
            .unwrap();
        assert_eq!(stored.scrap_date, Some(date(2020, 1, 1)));
    }

    #[test]
    fn approval_does_not_rederive_owner_attribution() {
        let reports = ReportStore::new();
        let registry = ToolRegistry::new();
        let mut record = in_service("WR-001");
        record.owner_name = "Original Owner".to_string();
        registry.insert_many(vec![record]).unwrap();

        let report = submit_one(
            &reports,
            &registry,
            vec![line_for(&registry, "WR-001", ToolStatus::Repairable)],
        );
        decide(
            &reports,
            &registry,
            DecideReport {
                report_id: report.id().clone(),
                approved: true,
            },
        )
        .unwrap();

        let stored = registry
            .get_by_tool_id(&ToolId::new("WR-001"))
            .unwrap()
            .unwrap();
        assert_eq!(stored.owner_name, "Original Owner");
    }

    #[test]
    fn rejection_restores_pre_defect_state_even_for_scrap_lines() {
        let reports = ReportStore::new();
        let registry = ToolRegistry::new();
        registry.insert_many(vec![in_service("WR-001")]).unwrap();

        let report = submit_one(
            &reports,
            &registry,
            vec![line_for(&registry, "WR-001", ToolStatus::Scrap)],
        );

        decide(
            &reports,
            &registry,
            DecideReport {
                report_id: report.id().clone(),
                approved: false,
            },
        )
        .unwrap();

        let record = registry
            .get_by_tool_id(&ToolId::new("WR-001"))
            .unwrap()
            .unwrap();
        assert_eq!(record.status, Some(ToolStatus::InService));
        assert!(!record.defect_flag);
        assert_eq!(record.defect_report_number, None);
        assert_eq!(record.defect_type, None);
        assert_eq!(record.scrap_date, None);
    }

    #[test]
    fn second_decision_fails_and_leaves_registry_unchanged() {
        let reports = ReportStore::new();
        let registry = ToolRegistry::new();
        registry.insert_many(vec![in_service("WR-001")]).unwrap();

        let report = submit_one(
            &reports,
            &registry,
            vec![line_for(&registry, "WR-001", ToolStatus::Scrap)],
        );
        let cmd = DecideReport {
            report_id: report.id().clone(),
            approved: true,
        };

        decide(&reports, &registry, cmd.clone()).unwrap();
        let after_first = registry.list().unwrap();

        let err = decide(
            &reports,
            &registry,
            DecideReport {
                report_id: report.id().clone(),
                approved: false,
            },
        )
        .unwrap_err();
        match err {
            DomainError::InvalidState(_) => {}
            _ => panic!("Expected InvalidState for a second decision"),
        }
        assert_eq!(registry.list().unwrap(), after_first);
    }

    #[test]
    fn decide_unknown_report_is_not_found() {
        let reports = ReportStore::new();
        let registry = ToolRegistry::new();

        let err = decide(
            &reports,
            &registry,
            DecideReport {
                report_id: ReportId::new("DFR-404"),
                approved: true,
            },
        )
        .unwrap_err();
        match err {
            DomainError::NotFound => {}
            _ => panic!("Expected NotFound for unknown report"),
        }
    }
}
