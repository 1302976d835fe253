// Internal modules
pub(crate) mod core;

// Public re-exports
pub use self::core::{DbOperations, WriteGuard};
