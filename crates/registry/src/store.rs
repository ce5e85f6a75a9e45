use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use toolcrib_core::{DomainError, DomainResult, ToolId, ToolRecordId};

use crate::record::ToolRecord;

/// In-memory tool registry.
///
/// Records are kept in insertion order, and `list`/`update_where` iterate
/// in that order; the audit view depends on it being stable. Methods take
/// `&self`: a write-lock is held for the whole of any multi-field update,
/// so concurrent readers never observe a partially applied mutation.
///
/// Not optimized for large inventories; lookups are linear, matching the
/// scale this models (one workshop's tool crib).
#[derive(Debug, Default)]
pub struct ToolRegistry {
    records: RwLock<Vec<ToolRecord>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn read_guard(&self) -> DomainResult<RwLockReadGuard<'_, Vec<ToolRecord>>> {
        self.records
            .read()
            .map_err(|_| DomainError::internal("tool registry lock poisoned"))
    }

    fn write_guard(&self) -> DomainResult<RwLockWriteGuard<'_, Vec<ToolRecord>>> {
        self.records
            .write()
            .map_err(|_| DomainError::internal("tool registry lock poisoned"))
    }

    pub fn get(&self, id: ToolRecordId) -> DomainResult<Option<ToolRecord>> {
        let records = self.read_guard()?;
        Ok(records.iter().find(|r| r.id == id).cloned())
    }

    /// First record carrying the given business tool id, if any. Duplicate
    /// tool ids are possible; callers that care use `update_where`.
    pub fn get_by_tool_id(&self, tool_id: &ToolId) -> DomainResult<Option<ToolRecord>> {
        let records = self.read_guard()?;
        Ok(records.iter().find(|r| r.tool_id == *tool_id).cloned())
    }

    pub fn list(&self) -> DomainResult<Vec<ToolRecord>> {
        Ok(self.read_guard()?.clone())
    }

    pub fn len(&self) -> DomainResult<usize> {
        Ok(self.read_guard()?.len())
    }

    pub fn is_empty(&self) -> DomainResult<bool> {
        Ok(self.read_guard()?.is_empty())
    }

    /// Bulk add, the entry point for CSV import and the add-tool form. The
    /// caller is expected to hand over well-formed records.
    pub fn insert_many(&self, records: Vec<ToolRecord>) -> DomainResult<()> {
        self.write_guard()?.extend(records);
        Ok(())
    }

    /// Replace the record with the same row key, or append if new.
    pub fn upsert(&self, record: ToolRecord) -> DomainResult<()> {
        let mut records = self.write_guard()?;
        match records.iter_mut().find(|r| r.id == record.id) {
            Some(existing) => *existing = record,
            None => records.push(record),
        }
        Ok(())
    }

    /// Uncontrolled removal, for privileged callers only. No invariant is
    /// checked: a record can be removed while named by a pending report.
    pub fn remove(&self, id: ToolRecordId) -> DomainResult<bool> {
        let mut records = self.write_guard()?;
        let before = records.len();
        records.retain(|r| r.id != id);
        Ok(records.len() < before)
    }

    /// Apply `mutate` to every record matching `predicate`, under a single
    /// write-lock acquisition. Returns how many records matched.
    pub fn update_where<P, M>(&self, predicate: P, mut mutate: M) -> DomainResult<usize>
    where
        P: Fn(&ToolRecord) -> bool,
        M: FnMut(&mut ToolRecord),
    {
        let mut records = self.write_guard()?;
        let mut matched = 0;
        for record in records.iter_mut().filter(|r| predicate(r)) {
            mutate(record);
            matched += 1;
        }
        Ok(matched)
    }

    /// Drop everything and install the given records. Used by the admin
    /// clear-all-data operation.
    pub fn replace_all(&self, records: Vec<ToolRecord>) -> DomainResult<()> {
        *self.write_guard()? = records;
        Ok(())
    }
}
