//! CLI command implementations

pub mod create;

pub use create::{CreateCommand, Created};
