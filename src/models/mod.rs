use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WelcomeInfo {
    pub app_versions: String,
    pub app_name: String,
}
