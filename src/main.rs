use crate::app_config::AppConfig;
use crate::capture::{CameraSource, ImageFileCamera};
use crate::domain::AttendanceType;
use crate::flow::{AttendanceSubmissionFlow, FlowSettings, SubmissionState};
use crate::location::{FixedLocation, LocationSource};
use crate::service::{AttendanceService, HttpAttendanceService};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;

mod app_config;
mod capture;
mod coordinate_deserializer;
mod domain;
mod flow;
mod geofence;
mod location;
mod service;

/// Records an employee check-in or check-out at the office.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Name of the employee
    #[arg(short, long)]
    name: String,

    /// masuk (check-in) or pulang (check-out)
    #[arg(short = 't', long = "type", default_value = "masuk")]
    attendance_type: AttendanceType,

    /// Current latitude in degrees, without a position the device has no location support
    #[arg(long, requires = "longitude", allow_hyphen_values = true)]
    latitude: Option<f64>,

    /// Current longitude in degrees
    #[arg(long, requires = "latitude", allow_hyphen_values = true)]
    longitude: Option<f64>,

    /// Image used as the camera frame
    #[arg(short, long)]
    image: Option<PathBuf>,

    /// Configuration file, without extension
    #[arg(short, long, default_value = "config")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    let args = Args::parse();
    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load(&args.config)?;
    info!("✅  Loaded configuration");

    let location: Option<Arc<dyn LocationSource>> = match (args.latitude, args.longitude) {
        (Some(latitude), Some(longitude)) => Some(Arc::new(FixedLocation::new(latitude, longitude))),
        _ => None,
    };
    let camera = args.image.map(ImageFileCamera::new);
    let client = service::new_client()?;
    let attendance_service: Arc<dyn AttendanceService> = Arc::new(HttpAttendanceService::new(client, config.service().url()));

    let flow = AttendanceSubmissionFlow::mount(
        FlowSettings::from(config.office()),
        camera.as_ref().map(|c| c as &dyn CameraSource),
        location,
        attendance_service,
    )
    .await;
    if let SubmissionState::Resolved(status) = flow.state() {
        println!("{}", status);
    }

    let status = flow.submit_with_progress(&args.name, args.attendance_type, |state| println!("{}", state)).await;
    println!("{}", status);

    Ok(if status.result.accepted { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
