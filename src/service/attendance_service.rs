use crate::domain::AttendanceRecord;
use crate::service::{AttendanceResponse, ServiceError};
use async_trait::async_trait;
use reqwest::Client;
use std::fmt::Debug;
use tracing::{info, instrument, warn};

/// Stores attendance records. A submission is never retried: the service has no idempotency key.
#[async_trait]
pub trait AttendanceService: Debug + Send + Sync {
    async fn submit(&self, record: &AttendanceRecord) -> Result<AttendanceResponse, ServiceError>;
}

#[derive(Debug)]
pub struct HttpAttendanceService {
    client: Client,
    url: String,
}

impl HttpAttendanceService {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        HttpAttendanceService { client, url: url.into() }
    }
}

#[async_trait]
impl AttendanceService for HttpAttendanceService {
    #[instrument(skip_all, fields(employee = record.employee_name(), attendance_type = record.attendance_type().wire_name()))]
    async fn submit(&self, record: &AttendanceRecord) -> Result<AttendanceResponse, ServiceError> {
        info!("📨 Submitting attendance...");

        let response = self.client.post(&self.url).json(record).send().await?;
        let status = response.status();

        // The service reports failures in the body, a non-2xx status still carries a JSON response
        if !status.is_success() {
            warn!(status_code = %status, "⚠️ Attendance service responded with an error status");
        }

        let attendance_response = response.json::<AttendanceResponse>().await?;
        info!(success = attendance_response.success, "📨 Submitting attendance... OK");

        Ok(attendance_response)
    }
}
