use crate::domain::AttendanceType;
use crate::flow::SubmissionError;
use crate::geofence::Geofence;
use crate::service::AttendanceResponse;

pub fn check_geofence(geofence: &Geofence, distance: f64) -> Result<(), SubmissionError> {
    if geofence.within_office(distance) { Ok(()) } else { Err(SubmissionError::OutsideOffice) }
}

pub fn check_service_response(response: &AttendanceResponse) -> Result<&str, SubmissionError> {
    if response.success { Ok(&response.message) } else { Err(SubmissionError::SaveFailed) }
}

/// Accepts the record only when it was taken inside the geofence and the service stored it.
/// An out-of-range position wins over a failure reported by the service.
pub fn interpret_response(
    geofence: &Geofence,
    distance: f64,
    response: &AttendanceResponse,
    attendance_type: AttendanceType,
) -> Result<String, SubmissionError> {
    check_geofence(geofence, distance)?;
    let message = check_service_response(response)?;

    let recorded = format!("{} recorded.", attendance_type);
    if message.is_empty() { Ok(recorded) } else { Ok(format!("{} {}", recorded, message)) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn response(success: bool) -> AttendanceResponse {
        AttendanceResponse { success, message: "ok".to_string() }
    }

    #[rstest]
    #[case(true, 0.0, Ok("check-in recorded. ok"))]
    #[case(true, 500.0, Ok("check-in recorded. ok"))]
    #[case(true, 500.5, Err("outside office area"))]
    #[case(false, 500.5, Err("outside office area"))]
    #[case(false, 12.0, Err("failed to save attendance"))]
    fn interpret_response_combines_both_checks(#[case] success: bool, #[case] distance: f64, #[case] expected: Result<&str, &str>) {
        let result = interpret_response(&Geofence::default(), distance, &response(success), AttendanceType::CheckIn);

        assert_eq!(result.as_deref().map_err(|e| e.to_string()), expected.map_err(str::to_string));
    }

    #[test]
    fn interpret_response_without_a_server_message() {
        let response = AttendanceResponse { success: true, message: String::new() };

        let result = interpret_response(&Geofence::default(), 1.0, &response, AttendanceType::CheckOut);

        assert_eq!(result.ok().as_deref(), Some("check-out recorded."));
    }

    #[test]
    fn check_service_response_ignores_the_geofence() {
        assert!(check_service_response(&response(true)).is_ok());
        assert!(matches!(check_service_response(&response(false)), Err(SubmissionError::SaveFailed)));
    }

    #[test]
    fn check_geofence_ignores_the_service() {
        assert!(check_geofence(&Geofence::default(), 499.0).is_ok());
        assert!(matches!(check_geofence(&Geofence::default(), 501.0), Err(SubmissionError::OutsideOffice)));
    }
}
