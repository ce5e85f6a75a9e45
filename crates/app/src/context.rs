use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use toolcrib_audit::{PerformAudit, due_for_audit, perform_audit};
use toolcrib_auth::{AppUser, UserStore};
use toolcrib_core::{Clock, DomainResult, SystemClock};
use toolcrib_handover::{Transfer, transfer};
use toolcrib_owners::OwnerDirectory;
use toolcrib_registry::{RegistryStats, ToolRecord, ToolRegistry, reconcile_owners};
use toolcrib_reports::{
    DecideReport, DefectReport, ReportHeader, ReportStore, SubmitReport, decide, submit,
};

/// Seed data for constructing or resetting a context.
#[derive(Debug, Default)]
pub struct Seed {
    pub tools: Vec<ToolRecord>,
    pub owners: Vec<toolcrib_owners::OwnerProfile>,
    pub users: Vec<AppUser>,
}

/// The process-wide application context: every store plus the clock.
///
/// Workflow operations are exposed as methods so the UI layer has a single
/// surface; each delegates to its workflow crate. Lock classes are only
/// ever taken one at a time, except report decision which takes the report
/// store then the registry, in that fixed order.
pub struct AppContext {
    pub registry: ToolRegistry,
    pub directory: OwnerDirectory,
    pub reports: ReportStore,
    pub users: UserStore,
    clock: Arc<dyn Clock>,
}

impl AppContext {
    /// A context on the system clock with empty stores.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            registry: ToolRegistry::new(),
            directory: OwnerDirectory::new(),
            reports: ReportStore::new(),
            users: UserStore::new(),
            clock,
        }
    }

    pub fn seeded(seed: Seed, clock: Arc<dyn Clock>) -> DomainResult<Self> {
        let context = Self::with_clock(clock);
        context.registry.insert_many(seed.tools)?;
        context.directory.insert_many(seed.owners)?;
        context.users.insert_many(seed.users)?;
        Ok(context)
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    // ── workflow surface ────────────────────────────────────────────────

    pub fn submit_report(&self, cmd: SubmitReport) -> DomainResult<DefectReport> {
        submit(&self.reports, &self.registry, cmd)
    }

    pub fn decide_report(&self, cmd: DecideReport) -> DomainResult<DefectReport> {
        decide(&self.reports, &self.registry, cmd)
    }

    pub fn transfer_tools(&self, cmd: Transfer) -> DomainResult<usize> {
        transfer(&self.registry, self.clock.as_ref(), cmd)
    }

    /// Tools whose next audit falls due today or earlier.
    pub fn due_for_audit(&self) -> DomainResult<Vec<ToolRecord>> {
        due_for_audit(&self.registry, self.clock.today())
    }

    pub fn due_for_audit_as_of(&self, as_of: NaiveDate) -> DomainResult<Vec<ToolRecord>> {
        due_for_audit(&self.registry, as_of)
    }

    pub fn perform_audit(&self, cmd: PerformAudit) -> DomainResult<()> {
        perform_audit(&self.registry, cmd)
    }

    /// Batch pass re-copying current directory fields onto matching
    /// registry records. Manually triggered.
    pub fn sync_owners(&self) -> DomainResult<usize> {
        reconcile_owners(&self.registry, &self.directory)
    }

    pub fn stats(&self) -> DomainResult<RegistryStats> {
        self.registry.stats(self.clock.today())
    }

    // ── owner context resolution ────────────────────────────────────────

    /// Pre-fill a report owner context for a user linked to a tool owner,
    /// dated today. `None` when the user has no linked owner or the link
    /// points at no directory entry.
    pub fn report_header_for(&self, user: &AppUser) -> DomainResult<Option<ReportHeader>> {
        let Some(owner_id) = &user.tool_owner_id else {
            return Ok(None);
        };
        let Some(profile) = self.directory.find(owner_id)? else {
            return Ok(None);
        };
        Ok(Some(ReportHeader {
            dfr_date: self.clock.today(),
            owner_id: profile.owner_id,
            owner_name: profile.name,
            department: profile.department,
            shift: profile.shift,
        }))
    }

    // ── administration ──────────────────────────────────────────────────

    /// Clear everything and restore the given seed. Reports are dropped
    /// outright, so report numbering restarts from `DFR-001` — the
    /// preserved behaviour of count-based numbering. The admin-only gate
    /// and password confirmation live in the calling layer.
    pub fn reset(&self, seed: Seed) -> DomainResult<()> {
        self.registry.replace_all(seed.tools)?;
        self.directory.replace_all(seed.owners)?;
        self.users.replace_all(seed.users)?;
        self.reports.clear()?;
        info!("all application data reset to seed");
        Ok(())
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}
