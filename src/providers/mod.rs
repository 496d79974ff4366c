pub mod database;
pub mod logging;

pub use database::Database;
pub use logging::StructuredLogger;
