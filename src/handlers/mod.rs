pub mod api_server;
pub mod welcome;

pub use api_server::{ApiServer, ApiServerTrait, AppState};
