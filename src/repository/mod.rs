pub mod user;

pub use user::{PgUserRepository, UserRepository};
