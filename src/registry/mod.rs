// Internal modules
pub(crate) mod core;
pub(crate) mod types;

// Public re-exports
pub use self::core::EntityRegistry;
pub use types::{DeletePolicy, EntityKind, EntitySchema, Relation, RelationKind};
