use crate::error::{StoreError, StoreResult};
use crate::model::{Entity, EntityId};
use crate::registry::EntityKind;
use log::debug;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

/// Database operations struct that provides unified access to the record
/// keyspace.
///
/// All rows live in a single sled tree under typed key prefixes:
///
/// * `row:{entity}:{id}` - serialized rows, ids zero-padded for ordered scans
/// * `seq:{entity}` - last assigned id per entity
/// * `uniq:{entity}:{field}:{value}` - unique-index entries mapping a value
///   to the owning row id
///
/// Reads are lock-free. Writers go through [`WriteGuard`], which serializes
/// mutations on an internal lock and stages every change into one
/// `sled::Batch`, so a logical mutation is applied atomically and its
/// existence/uniqueness checks observe a consistent snapshot.
pub struct DbOperations {
    db: sled::Db,
    records: sled::Tree,
    write_lock: Mutex<()>,
}

fn row_key(kind: EntityKind, id: EntityId) -> String {
    format!("row:{}:{:012}", kind.key_prefix(), id)
}

fn row_prefix(kind: EntityKind) -> String {
    format!("row:{}:", kind.key_prefix())
}

fn seq_key(kind: EntityKind) -> String {
    format!("seq:{}", kind.key_prefix())
}

fn uniq_key(kind: EntityKind, field: &str, value: &str) -> String {
    format!("uniq:{}:{}:{}", kind.key_prefix(), field, value)
}

impl DbOperations {
    /// Creates a new DbOperations instance over an opened sled database.
    pub fn new(db: sled::Db) -> Result<Self, sled::Error> {
        let records = db.open_tree("records")?;
        Ok(Self {
            db,
            records,
            write_lock: Mutex::new(()),
        })
    }

    /// Gets a reference to the underlying database.
    pub fn db(&self) -> &sled::Db {
        &self.db
    }

    /// Retrieves a typed row by id.
    pub fn get_row<T: Entity>(&self, id: EntityId) -> StoreResult<Option<T>> {
        match self.records.get(row_key(T::KIND, id).as_bytes())? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes).map_err(|e| {
                StoreError::Corrupt(format!(
                    "{} row {} failed to deserialize: {}",
                    T::KIND.wire_name(),
                    id,
                    e
                ))
            })?)),
            None => Ok(None),
        }
    }

    /// Retrieves a row by entity kind and id as raw JSON.
    pub fn get_value(&self, kind: EntityKind, id: EntityId) -> StoreResult<Option<Value>> {
        match self.records.get(row_key(kind, id).as_bytes())? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes).map_err(|e| {
                StoreError::Corrupt(format!(
                    "{} row {} failed to deserialize: {}",
                    kind.wire_name(),
                    id,
                    e
                ))
            })?)),
            None => Ok(None),
        }
    }

    /// Checks whether a row of the given kind exists.
    pub fn exists(&self, kind: EntityKind, id: EntityId) -> StoreResult<bool> {
        Ok(self.records.contains_key(row_key(kind, id).as_bytes())?)
    }

    /// Lists every row of an entity type. Result order follows key order and
    /// is not part of any contract.
    pub fn scan_rows<T: Entity>(&self) -> StoreResult<Vec<T>> {
        self.scan_filter(|_: &T| true)
    }

    /// Lists rows of an entity type matching a predicate.
    pub fn scan_filter<T: Entity>(&self, pred: impl Fn(&T) -> bool) -> StoreResult<Vec<T>> {
        let mut rows = Vec::new();
        for item in self.records.scan_prefix(row_prefix(T::KIND).as_bytes()) {
            let (key, bytes) = item?;
            let row: T = serde_json::from_slice(&bytes).map_err(|e| {
                StoreError::Corrupt(format!(
                    "record {} failed to deserialize: {}",
                    String::from_utf8_lossy(&key),
                    e
                ))
            })?;
            if pred(&row) {
                rows.push(row);
            }
        }
        Ok(rows)
    }

    /// Ids of all rows of `child` whose `fk_field` equals `parent_id`.
    pub fn child_ids(
        &self,
        child: EntityKind,
        fk_field: &str,
        parent_id: EntityId,
    ) -> StoreResult<Vec<EntityId>> {
        let mut ids = Vec::new();
        for item in self.records.scan_prefix(row_prefix(child).as_bytes()) {
            let (key, bytes) = item?;
            let row: Value = serde_json::from_slice(&bytes).map_err(|e| {
                StoreError::Corrupt(format!(
                    "record {} failed to deserialize: {}",
                    String::from_utf8_lossy(&key),
                    e
                ))
            })?;
            if row.get(fk_field).and_then(Value::as_i64) == Some(parent_id) {
                let id = row.get(child.id_field()).and_then(Value::as_i64).ok_or_else(|| {
                    StoreError::Corrupt(format!(
                        "record {} is missing its {} field",
                        String::from_utf8_lossy(&key),
                        child.id_field()
                    ))
                })?;
                ids.push(id);
            }
        }
        Ok(ids)
    }

    /// Id of the row currently owning a unique value, if any.
    pub fn unique_owner(
        &self,
        kind: EntityKind,
        field: &str,
        value: &str,
    ) -> StoreResult<Option<EntityId>> {
        match self.records.get(uniq_key(kind, field, value).as_bytes())? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes).map_err(|e| {
                StoreError::Corrupt(format!("unique index entry for {} corrupt: {}", field, e))
            })?)),
            None => Ok(None),
        }
    }

    fn current_seq(&self, kind: EntityKind) -> StoreResult<EntityId> {
        match self.records.get(seq_key(kind).as_bytes())? {
            Some(bytes) => Ok(serde_json::from_slice(&bytes).map_err(|e| {
                StoreError::Corrupt(format!("sequence for {} corrupt: {}", kind.key_prefix(), e))
            })?),
            None => Ok(0),
        }
    }

    /// Starts a logical mutation. Held until `commit` or drop; other writers
    /// block, readers do not.
    pub fn begin_write(&self) -> StoreResult<WriteGuard<'_>> {
        let lock = self
            .write_lock
            .lock()
            .map_err(|_| StoreError::Database("write lock poisoned".to_string()))?;
        Ok(WriteGuard {
            ops: self,
            _lock: lock,
            batch: sled::Batch::default(),
            staged_seq: HashMap::new(),
        })
    }
}

/// A single logical mutation in progress.
///
/// Changes are staged into a batch and nothing is visible until `commit`,
/// which applies the batch atomically and flushes it to disk. Dropping the
/// guard without committing discards all staged changes.
pub struct WriteGuard<'a> {
    ops: &'a DbOperations,
    _lock: MutexGuard<'a, ()>,
    batch: sled::Batch,
    staged_seq: HashMap<EntityKind, EntityId>,
}

impl<'a> WriteGuard<'a> {
    /// Assigns the next id for an entity type and stages the sequence bump.
    pub fn allocate_id(&mut self, kind: EntityKind) -> StoreResult<EntityId> {
        let next = match self.staged_seq.get(&kind) {
            Some(last) => last + 1,
            None => self.ops.current_seq(kind)? + 1,
        };
        self.staged_seq.insert(kind, next);
        self.batch
            .insert(seq_key(kind).into_bytes(), serde_json::to_vec(&next)?);
        Ok(next)
    }

    /// Stages a typed row write (insert or overwrite).
    pub fn put_row<T: Entity>(&mut self, row: &T) -> StoreResult<()> {
        self.batch.insert(
            row_key(T::KIND, row.id()).into_bytes(),
            serde_json::to_vec(row)?,
        );
        Ok(())
    }

    /// Stages a row removal.
    pub fn delete_row(&mut self, kind: EntityKind, id: EntityId) {
        self.batch.remove(row_key(kind, id).into_bytes());
    }

    /// Stages a unique-index entry pointing a value at its owning row.
    pub fn put_unique(
        &mut self,
        kind: EntityKind,
        field: &str,
        value: &str,
        id: EntityId,
    ) -> StoreResult<()> {
        self.batch.insert(
            uniq_key(kind, field, value).into_bytes(),
            serde_json::to_vec(&id)?,
        );
        Ok(())
    }

    /// Stages removal of a unique-index entry.
    pub fn delete_unique(&mut self, kind: EntityKind, field: &str, value: &str) {
        self.batch.remove(uniq_key(kind, field, value).into_bytes());
    }

    /// Applies all staged changes atomically and makes them durable.
    pub fn commit(self) -> StoreResult<()> {
        self.ops.records.apply_batch(self.batch)?;
        self.ops.records.flush()?;
        debug!("write batch committed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Class;

    fn temp_ops() -> DbOperations {
        let db = sled::Config::new()
            .temporary(true)
            .open()
            .expect("failed to open temporary database");
        DbOperations::new(db).expect("failed to create DbOperations")
    }

    fn sample_class(id: EntityId) -> Class {
        Class {
            class_id: id,
            class_name: format!("Class {}", id),
            class_level: 3,
            school_year: "2024-2025".to_string(),
        }
    }

    #[test]
    fn put_and_get_row_round_trips() {
        let ops = temp_ops();
        let mut guard = ops.begin_write().unwrap();
        let id = guard.allocate_id(EntityKind::Class).unwrap();
        let class = sample_class(id);
        guard.put_row(&class).unwrap();
        guard.commit().unwrap();

        let fetched: Class = ops.get_row(id).unwrap().unwrap();
        assert_eq!(fetched, class);
        assert!(ops.exists(EntityKind::Class, id).unwrap());
        assert!(ops.get_row::<Class>(id + 1).unwrap().is_none());
    }

    #[test]
    fn allocated_ids_are_monotonic_per_entity() {
        let ops = temp_ops();
        let mut guard = ops.begin_write().unwrap();
        let a = guard.allocate_id(EntityKind::Class).unwrap();
        let b = guard.allocate_id(EntityKind::Class).unwrap();
        let other = guard.allocate_id(EntityKind::Teacher).unwrap();
        guard.commit().unwrap();

        assert_eq!(a, 1);
        assert_eq!(b, 2);
        assert_eq!(other, 1);

        let mut guard = ops.begin_write().unwrap();
        assert_eq!(guard.allocate_id(EntityKind::Class).unwrap(), 3);
    }

    #[test]
    fn uncommitted_guard_leaves_no_trace() {
        let ops = temp_ops();
        {
            let mut guard = ops.begin_write().unwrap();
            let id = guard.allocate_id(EntityKind::Class).unwrap();
            guard.put_row(&sample_class(id)).unwrap();
            // dropped without commit
        }
        assert!(ops.scan_rows::<Class>().unwrap().is_empty());
        let mut guard = ops.begin_write().unwrap();
        assert_eq!(guard.allocate_id(EntityKind::Class).unwrap(), 1);
    }

    #[test]
    fn unique_index_tracks_owner() {
        let ops = temp_ops();
        let mut guard = ops.begin_write().unwrap();
        guard
            .put_unique(EntityKind::Teacher, "email_address", "a@school.org", 7)
            .unwrap();
        guard.commit().unwrap();

        assert_eq!(
            ops.unique_owner(EntityKind::Teacher, "email_address", "a@school.org")
                .unwrap(),
            Some(7)
        );
        assert_eq!(
            ops.unique_owner(EntityKind::Teacher, "email_address", "b@school.org")
                .unwrap(),
            None
        );

        let mut guard = ops.begin_write().unwrap();
        guard.delete_unique(EntityKind::Teacher, "email_address", "a@school.org");
        guard.commit().unwrap();
        assert_eq!(
            ops.unique_owner(EntityKind::Teacher, "email_address", "a@school.org")
                .unwrap(),
            None
        );
    }

    #[test]
    fn scan_filter_selects_matching_rows() {
        let ops = temp_ops();
        let mut guard = ops.begin_write().unwrap();
        for level in [3, 4, 5] {
            let id = guard.allocate_id(EntityKind::Class).unwrap();
            let mut class = sample_class(id);
            class.class_level = level;
            guard.put_row(&class).unwrap();
        }
        guard.commit().unwrap();

        let high: Vec<Class> = ops.scan_filter(|c: &Class| c.class_level >= 4).unwrap();
        assert_eq!(high.len(), 2);
    }
}
