//! Eager relation loading for result shapes.
//!
//! Every query result carries the relations its declared shape names,
//! populated one level deep. The helpers here are driven by registry
//! metadata so traversal stays in one place.

use crate::campusdb::CampusDb;
use crate::error::{ResolveError, ResolveResult};
use crate::model::{Entity, EntityId};
use crate::registry::{EntityKind, Relation};

impl CampusDb {
    /// Loads the rows of a has-many relation for one parent.
    pub(crate) fn load_children<C: Entity>(
        &self,
        relation: &Relation,
        parent_id: EntityId,
    ) -> ResolveResult<Vec<C>> {
        let fk = relation.fk_field;
        Ok(self
            .db_ops()
            .scan_filter(|child: &C| child.foreign_key(fk) == Some(parent_id))?)
    }

    /// Loads the parent row of a belongs-to relation. A dangling reference
    /// here means the store violated its own integrity rules.
    pub(crate) fn load_parent<P: Entity>(&self, id: EntityId) -> ResolveResult<P> {
        self.db_ops().get_row(id)?.ok_or_else(|| {
            ResolveError::StoreUnavailable(format!(
                "dangling {} reference {}",
                P::KIND.wire_name(),
                id
            ))
        })
    }

    /// Relation metadata for a declared relation name; a miss is a
    /// programming error, surfaced as an unknown-entity failure.
    pub(crate) fn relation(&self, kind: EntityKind, name: &str) -> ResolveResult<Relation> {
        self.registry()
            .describe(kind)
            .relation(name)
            .cloned()
            .ok_or_else(|| {
                ResolveError::UnknownEntity(format!("{}.{}", kind.wire_name(), name))
            })
    }
}
