//! Cross-entity referential integrity: foreign-key existence checks, unique
//! keys, and the registry-driven delete engine.

use crate::campusdb::CampusDb;
use crate::db_operations::WriteGuard;
use crate::error::{ResolveError, ResolveResult};
use crate::model::EntityId;
use crate::registry::{DeletePolicy, EntityKind, Relation};
use log::{debug, info};
use serde_json::Value;

impl CampusDb {
    /// Verifies that a belongs-to reference resolves to an existing row.
    pub(crate) fn ensure_reference(&self, relation: &Relation, id: EntityId) -> ResolveResult<()> {
        if self.db_ops().exists(relation.target, id)? {
            Ok(())
        } else {
            Err(ResolveError::ReferenceNotFound {
                relation: relation.name,
                id,
            })
        }
    }

    /// Verifies that a unique value is free, or owned by `exclude` (the row
    /// being updated).
    pub(crate) fn ensure_unique(
        &self,
        kind: EntityKind,
        field: &'static str,
        value: &str,
        exclude: Option<EntityId>,
    ) -> ResolveResult<()> {
        match self.db_ops().unique_owner(kind, field, value)? {
            Some(owner) if Some(owner) != exclude => Err(ResolveError::DuplicateKey {
                field,
                value: value.to_string(),
            }),
            _ => Ok(()),
        }
    }

    /// Stages the removal of a row and everything the delete policy says
    /// must go with it.
    ///
    /// Walks the entity's has-many relations from the registry: a restrict
    /// relation with live dependents aborts the whole delete, a cascade
    /// relation pulls dependents (recursively) into the plan. Unique-index
    /// entries of every planned row are removed alongside it. Nothing is
    /// visible until the caller commits the guard.
    pub(crate) fn stage_delete(
        &self,
        guard: &mut WriteGuard<'_>,
        kind: EntityKind,
        id: EntityId,
    ) -> ResolveResult<()> {
        let mut plan: Vec<(EntityKind, EntityId)> = Vec::new();
        self.collect_delete(kind, id, &mut plan)?;

        for (row_kind, row_id) in &plan {
            let schema = self.registry().describe(*row_kind);
            if !schema.unique_keys.is_empty() {
                if let Some(row) = self.db_ops().get_value(*row_kind, *row_id)? {
                    for key in schema.unique_keys {
                        if let Some(value) = row.get(*key).and_then(Value::as_str) {
                            guard.delete_unique(*row_kind, key, value);
                        }
                    }
                }
            }
            guard.delete_row(*row_kind, *row_id);
        }

        if plan.len() > 1 {
            info!(
                "deleting {} {} cascades to {} dependent row(s)",
                kind.wire_name(),
                id,
                plan.len() - 1
            );
        }
        Ok(())
    }

    fn collect_delete(
        &self,
        kind: EntityKind,
        id: EntityId,
        plan: &mut Vec<(EntityKind, EntityId)>,
    ) -> ResolveResult<()> {
        for relation in self.registry().describe(kind).has_many() {
            let dependents = self.db_ops().child_ids(relation.target, relation.fk_field, id)?;
            if dependents.is_empty() {
                continue;
            }
            match relation.on_delete {
                DeletePolicy::Restrict => {
                    debug!(
                        "delete of {} {} blocked by {} {} dependent(s)",
                        kind.wire_name(),
                        id,
                        dependents.len(),
                        relation.name
                    );
                    return Err(ResolveError::ReferentialConflict {
                        entity: kind.wire_name(),
                        id,
                        relation: relation.name,
                        dependents: dependents.len(),
                    });
                }
                DeletePolicy::Cascade => {
                    for dependent in dependents {
                        self.collect_delete(relation.target, dependent, plan)?;
                    }
                }
            }
        }
        plan.push((kind, id));
        Ok(())
    }
}
