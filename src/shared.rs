pub mod types;
pub mod settings;
pub mod errors;
pub mod error;


// Re-export CommandError for convenience
pub use errors::{CommandError, CommandResult};
