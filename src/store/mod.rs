//! Local record cache per module
//!
//! The authoritative copy of every record lives on the backend; the store
//! holds a transient local copy for display, refreshed on demand or patched
//! after a successful write. Patches go through one reducer instead of ad hoc
//! splicing at each call site.

use crate::HrClient;
use crate::api::HrModule;
use crate::error::Error;
use crate::model::Record;
use crate::model::RecordId;

/// A patch applied to the local record list after a successful write.
#[derive(Debug, Clone)]
pub enum Mutation {
    /// A record was created; the server's copy is appended.
    Created(Record),
    /// A record was updated; the server's copy replaces the old one in place.
    Updated(Record),
    /// A record was deleted.
    Deleted(RecordId),
}

/// Applies a mutation to a record list.
///
/// `Updated` replaces in place, keeping the record's position, so relative
/// order is preserved and the view's stable sort holds across patches. An
/// update for an id the list has never seen is appended. `Deleted` matches
/// ids by their string-coerced form; records without an id are never deleted.
pub fn apply_mutation(records: &mut Vec<Record>, mutation: Mutation) {
    match mutation {
        Mutation::Created(record) => {
            records.push(record);
        }
        Mutation::Updated(record) => {
            let position = record
                .id()
                .and_then(|id| records.iter().position(|r| r.has_id(id)));
            match position {
                Some(index) => records[index] = record,
                None => records.push(record),
            }
        }
        Mutation::Deleted(id) => {
            records.retain(|r| !r.has_id(&id));
        }
    }
}

/// The local record cache for one HR module.
///
/// Writes are pessimistic: each mutation waits for the API response and
/// merges the server's copy, so the cache never holds a record the backend
/// has not acknowledged.
#[derive(Debug)]
pub struct ModuleStore {
    module: HrModule,
    records: Vec<Record>,
}

impl ModuleStore {
    /// Creates an empty store for the given module.
    pub fn new(module: HrModule) -> Self {
        Self {
            module,
            records: Vec::new(),
        }
    }

    /// Returns the module this store caches.
    pub fn module(&self) -> HrModule {
        self.module
    }

    /// Returns the cached records.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Replaces the cache with a fresh listing from the backend.
    pub async fn refresh(&mut self, client: &HrClient) -> Result<(), Error> {
        self.records = client.list(self.module).await?;
        Ok(())
    }

    /// Creates a record and merges the server's copy into the cache.
    pub async fn create(&mut self, client: &HrClient, record: &Record) -> Result<(), Error> {
        let created = client.create(self.module, record).await?;
        self.apply(Mutation::Created(created));
        Ok(())
    }

    /// Updates a record and merges the server's copy into the cache.
    pub async fn update(
        &mut self,
        client: &HrClient,
        id: &RecordId,
        record: &Record,
    ) -> Result<(), Error> {
        let updated = client.update(self.module, id, record).await?;
        self.apply(Mutation::Updated(updated));
        Ok(())
    }

    /// Deletes a record and drops it from the cache.
    pub async fn delete(&mut self, client: &HrClient, id: &RecordId) -> Result<(), Error> {
        client.delete(self.module, id).await?;
        self.apply(Mutation::Deleted(id.clone()));
        Ok(())
    }

    /// Applies a mutation to the cached records directly.
    pub fn apply(&mut self, mutation: Mutation) {
        apply_mutation(&mut self.records, mutation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, title: &str) -> Record {
        Record::with_id(id).set("title", title)
    }

    #[test]
    fn test_created_appends() {
        let mut records = vec![record(1, "a")];
        apply_mutation(&mut records, Mutation::Created(record(2, "b")));

        assert_eq!(records.len(), 2);
        assert_eq!(records[1].display_text("title"), Some("b".to_string()));
    }

    #[test]
    fn test_updated_replaces_in_place() {
        let mut records = vec![record(1, "a"), record(2, "b"), record(3, "c")];
        apply_mutation(&mut records, Mutation::Updated(record(2, "b2")));

        // Position preserved, content replaced.
        assert_eq!(records.len(), 3);
        assert_eq!(records[1].display_text("title"), Some("b2".to_string()));
        assert_eq!(records[2].display_text("title"), Some("c".to_string()));
    }

    #[test]
    fn test_updated_unseen_id_appends() {
        let mut records = vec![record(1, "a")];
        apply_mutation(&mut records, Mutation::Updated(record(9, "new")));

        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_deleted_removes_by_coerced_id() {
        let mut records = vec![record(1, "a"), record(2, "b")];
        apply_mutation(&mut records, Mutation::Deleted(RecordId::from("2")));

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].display_text("title"), Some("a".to_string()));
    }

    #[test]
    fn test_deleted_ignores_records_without_id() {
        let mut records = vec![Record::new().set("title", "draft")];
        apply_mutation(&mut records, Mutation::Deleted(RecordId::from(1)));

        assert_eq!(records.len(), 1);
    }
}
