use std::fmt::{Display, Formatter};

#[derive(Clone, Debug, PartialEq)]
pub struct SubmissionResult {
    pub accepted: bool,
    pub message: String,
}

impl SubmissionResult {
    pub fn accepted(message: impl Into<String>) -> Self {
        SubmissionResult { accepted: true, message: message.into() }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        SubmissionResult { accepted: false, message: message.into() }
    }
}

/// What the front end shows after an attempt: the outcome and, once it is known, the distance to the office.
#[derive(Clone, Debug, PartialEq)]
pub struct SubmissionStatus {
    pub result: SubmissionResult,
    pub distance: Option<f64>,
    pub unit: String,
}

impl Display for SubmissionStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let icon = if self.result.accepted { "✅" } else { "❌" };
        write!(f, "{} {}", icon, self.result.message)?;
        if let Some(distance) = self.distance {
            write!(f, "\nDistance from office: {:.2} {}", distance, self.unit)?;
        }
        Ok(())
    }
}
