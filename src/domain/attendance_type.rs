use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttendanceType {
    #[default]
    #[serde(rename = "Masuk")]
    CheckIn,
    #[serde(rename = "Pulang")]
    CheckOut,
}

impl AttendanceType {
    /// The label the attendance service uses for this type.
    pub fn wire_name(&self) -> &'static str {
        match self {
            AttendanceType::CheckIn => "Masuk",
            AttendanceType::CheckOut => "Pulang",
        }
    }
}

impl Display for AttendanceType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            AttendanceType::CheckIn => write!(f, "check-in"),
            AttendanceType::CheckOut => write!(f, "check-out"),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
#[error("unknown attendance type '{0}', expected 'masuk' or 'pulang'")]
pub struct ParseAttendanceTypeError(String);

impl FromStr for AttendanceType {
    type Err = ParseAttendanceTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "masuk" | "check-in" | "checkin" | "in" => Ok(AttendanceType::CheckIn),
            "pulang" | "check-out" | "checkout" | "out" => Ok(AttendanceType::CheckOut),
            _ => Err(ParseAttendanceTypeError(s.to_string())),
        }
    }
}
