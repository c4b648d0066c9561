use crate::domain::{AttendanceType, Coordinate};
use serde::Serialize;
use std::fmt::{Debug, Formatter};

/// A single attendance submission as sent to the attendance service.
#[derive(Clone, PartialEq, Serialize)]
pub struct AttendanceRecord {
    #[serde(rename = "nama_guru")]
    employee_name: String,
    #[serde(flatten)]
    coordinate: Coordinate,
    #[serde(rename = "jenis_absen")]
    attendance_type: AttendanceType,
    #[serde(rename = "gambar")]
    image_data: String,
}

impl AttendanceRecord {
    pub fn new(employee_name: &str, coordinate: Coordinate, attendance_type: AttendanceType, image_data: String) -> Self {
        AttendanceRecord {
            employee_name: employee_name.trim().to_string(),
            coordinate,
            attendance_type,
            image_data,
        }
    }

    pub fn employee_name(&self) -> &str {
        &self.employee_name
    }

    pub fn attendance_type(&self) -> AttendanceType {
        self.attendance_type
    }
}

// The image is a data URI of several hundred kilobytes, keep it out of the logs
impl Debug for AttendanceRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AttendanceRecord")
            .field("employee_name", &self.employee_name)
            .field("coordinate", &self.coordinate)
            .field("attendance_type", &self.attendance_type)
            .field("image_data", &format_args!("<{} bytes>", self.image_data.len()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn record() -> AttendanceRecord {
        AttendanceRecord::new(
            "  Siti Rahma ",
            Coordinate { latitude: -7.37, longitude: 108.9 },
            AttendanceType::CheckOut,
            "data:image/jpeg;base64,AAAA".to_string(),
        )
    }

    #[test]
    fn new_trims_the_employee_name() {
        assert_eq!(record().employee_name(), "Siti Rahma");
    }

    #[test]
    fn serializes_to_the_service_payload() -> Result<(), serde_json::Error> {
        let value = serde_json::to_value(record())?;

        assert_eq!(
            value,
            json!({
                "nama_guru": "Siti Rahma",
                "latitude": -7.37,
                "longitude": 108.9,
                "jenis_absen": "Pulang",
                "gambar": "data:image/jpeg;base64,AAAA",
            })
        );
        Ok(())
    }

    #[test]
    fn debug_omits_the_image_data() {
        let debug = format!("{:?}", record());

        assert!(!debug.contains("AAAA"));
        assert!(debug.contains("<27 bytes>"));
    }
}
