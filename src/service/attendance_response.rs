use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AttendanceResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
}
