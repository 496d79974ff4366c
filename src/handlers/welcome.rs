use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};

use crate::handlers::api_server::AppState;
use crate::models::WelcomeInfo;
use crate::utils::response::ApiResponse;

pub async fn welcome_handler(State(state): State<AppState>) -> impl IntoResponse {
    let info = WelcomeInfo {
        app_versions: state.config.app.version.clone(),
        app_name: state.config.app.name.clone(),
    };

    (StatusCode::OK, Json(ApiResponse::success("success", info)))
}
