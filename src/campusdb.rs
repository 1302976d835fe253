use crate::config::NodeConfig;
use crate::db_operations::DbOperations;
use crate::error::ResolveResult;
use crate::registry::EntityRegistry;
use log::info;
use std::path::Path;

/// The database handle tying the entity registry to the record store.
///
/// One CampusDb is constructed at startup and passed (usually behind an
/// `Arc`) into every resolver invocation; it is never reached through
/// ambient global state. Resolver handlers are implemented as methods on
/// this type, grouped per entity in the `resolver` module.
pub struct CampusDb {
    registry: EntityRegistry,
    db_ops: DbOperations,
}

impl CampusDb {
    /// Opens (or creates) a database at the given path.
    pub fn new<P: AsRef<Path>>(path: P) -> ResolveResult<Self> {
        let db = sled::open(path)?;
        let db_ops = DbOperations::new(db)?;
        info!("campus database opened");
        Ok(Self {
            registry: EntityRegistry::bootstrap(),
            db_ops,
        })
    }

    /// Opens a database from a node configuration.
    pub fn load(config: NodeConfig) -> ResolveResult<Self> {
        Self::new(&config.storage_path)
    }

    pub fn registry(&self) -> &EntityRegistry {
        &self.registry
    }

    pub fn db_ops(&self) -> &DbOperations {
        &self.db_ops
    }
}
