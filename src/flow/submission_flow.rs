use crate::app_config::Office;
use crate::capture::{CameraSource, CameraStream};
use crate::domain::{AttendanceRecord, AttendanceType, SubmissionResult, SubmissionStatus};
use crate::flow::verdict::interpret_response;
use crate::flow::{SubmissionError, SubmissionState};
use crate::geofence::Geofence;
use crate::location::LocationSource;
use crate::service::AttendanceService;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task;
use tracing::{debug, info, instrument, warn};

#[derive(Clone, Debug)]
pub struct FlowSettings {
    geofence: Geofence,
    unit: String,
}

impl FlowSettings {
    pub fn new(geofence: Geofence, unit: impl Into<String>) -> Self {
        FlowSettings { geofence, unit: unit.into() }
    }
}

impl From<&Office> for FlowSettings {
    fn from(office: &Office) -> Self {
        FlowSettings::new(Geofence::from(office), office.unit())
    }
}

/// Drives one attendance attempt at a time: validate, locate, capture, submit and interpret.
///
/// The camera is opened when the flow is mounted and released when it is dropped.
#[derive(Debug)]
pub struct AttendanceSubmissionFlow {
    settings: FlowSettings,
    camera: Option<CameraStream>,
    location: Option<Arc<dyn LocationSource>>,
    service: Arc<dyn AttendanceService>,
    state_tx: watch::Sender<SubmissionState>,
}

impl AttendanceSubmissionFlow {
    /// Opens the camera, if any. A camera that fails to open leaves the flow usable; the failure is reported
    /// as the initial state and every attempt ends with "camera unavailable".
    #[instrument(skip_all)]
    pub async fn mount(
        settings: FlowSettings,
        camera_source: Option<&dyn CameraSource>,
        location: Option<Arc<dyn LocationSource>>,
        service: Arc<dyn AttendanceService>,
    ) -> Self {
        let (camera, initial_state) = match camera_source {
            None => (None, SubmissionState::Idle),
            Some(source) => match source.open().await {
                Ok(stream) => (Some(stream), SubmissionState::Idle),
                Err(e) => {
                    warn!("⚠️ Unable to access the camera: {}", e);
                    let status = SubmissionStatus {
                        result: SubmissionResult::rejected(format!("failed to access camera: {}", e)),
                        distance: None,
                        unit: settings.unit.clone(),
                    };
                    (None, SubmissionState::Resolved(status))
                }
            },
        };

        let (state_tx, _) = watch::channel(initial_state);
        AttendanceSubmissionFlow {
            settings,
            camera,
            location,
            service,
            state_tx,
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.state_tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SubmissionState> {
        self.state_tx.subscribe()
    }

    /// Runs a single attempt. A call made while another attempt is in flight is rejected without touching it.
    #[instrument(skip(self))]
    pub async fn submit(&self, employee_name: &str, attendance_type: AttendanceType) -> SubmissionStatus {
        let Some(_guard) = self.begin() else {
            warn!("⚠️ Rejected attendance for '{}', another submission is in progress", employee_name.trim());
            return self.status(Err(SubmissionError::Busy), None);
        };

        let mut distance = None;
        let result = self.attempt(employee_name, attendance_type, &mut distance).await;
        match &result {
            Ok(_) => info!("✅ Attendance {} for '{}'... OK", attendance_type, employee_name.trim()),
            Err(e) => warn!("❌ Attendance {} for '{}'... failed, {}", attendance_type, employee_name.trim(), e),
        }

        let status = self.status(result, distance);
        self.state_tx.send_replace(SubmissionState::Resolved(status.clone()));
        status
    }

    /// Like [`submit`](Self::submit), reporting every in-flight state it observes before the status is returned.
    /// States set within one step of the attempt may be coalesced; "submitting" is always reported before the request resolves.
    pub async fn submit_with_progress(
        &self,
        employee_name: &str,
        attendance_type: AttendanceType,
        mut on_progress: impl FnMut(&SubmissionState),
    ) -> SubmissionStatus {
        let mut state_rx = self.subscribe();
        let submission = self.submit(employee_name, attendance_type);
        tokio::pin!(submission);

        loop {
            tokio::select! {
                biased;
                Ok(()) = state_rx.changed() => {
                    let state = state_rx.borrow_and_update().clone();
                    if state.is_in_flight() {
                        on_progress(&state);
                    }
                }
                status = &mut submission => return status,
            }
        }
    }

    async fn attempt(&self, employee_name: &str, attendance_type: AttendanceType, distance: &mut Option<f64>) -> Result<String, SubmissionError> {
        if employee_name.trim().is_empty() {
            return Err(SubmissionError::NameRequired);
        }

        let location = self.location.as_ref().ok_or(SubmissionError::GeolocationUnsupported)?;
        self.transition(SubmissionState::LocatingPosition);
        let position = location.current_position().await?;

        let distance_to_office = self.settings.geofence.distance_to_office(position);
        *distance = Some(distance_to_office);
        debug!(?position, distance = distance_to_office, "📍 Located position");

        self.transition(SubmissionState::CapturingImage { distance: distance_to_office });
        let frame = self.camera.as_ref().and_then(CameraStream::current_frame).ok_or(SubmissionError::CameraUnavailable)?;
        debug!(width = frame.width(), height = frame.height(), "📷 Captured frame");
        let image_data = task::spawn_blocking(move || frame.to_data_uri()).await??;

        let record = AttendanceRecord::new(employee_name, position, attendance_type, image_data);
        self.transition(SubmissionState::Submitting { distance: distance_to_office });
        let response = self.service.submit(&record).await?;

        interpret_response(&self.settings.geofence, distance_to_office, &response, attendance_type)
    }

    fn begin(&self) -> Option<AttemptGuard<'_>> {
        let started = self.state_tx.send_if_modified(|state| {
            if state.is_in_flight() {
                return false;
            }
            *state = SubmissionState::Validating;
            true
        });

        started.then(|| AttemptGuard { state_tx: &self.state_tx })
    }

    fn transition(&self, state: SubmissionState) {
        self.state_tx.send_replace(state);
    }

    fn status(&self, result: Result<String, SubmissionError>, distance: Option<f64>) -> SubmissionStatus {
        let result = match result {
            Ok(message) => SubmissionResult::accepted(message),
            Err(e) => SubmissionResult::rejected(e.to_string()),
        };

        SubmissionStatus {
            result,
            distance,
            unit: self.settings.unit.clone(),
        }
    }
}

/// Returns the flow to idle when an attempt is dropped before it resolved.
struct AttemptGuard<'a> {
    state_tx: &'a watch::Sender<SubmissionState>,
}

impl Drop for AttemptGuard<'_> {
    fn drop(&mut self) {
        self.state_tx.send_if_modified(|state| {
            if !state.is_in_flight() {
                return false;
            }
            *state = SubmissionState::Idle;
            true
        });
    }
}
