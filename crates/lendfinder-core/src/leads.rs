use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A lead captured by the locator's contact form.
///
/// Everything except the four contact fields is optional free text; the form
/// posts empty strings for untouched inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeadSubmission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub loan_amount: String,
    pub purpose: String,
    pub preferred_location: String,
    pub store_id: String,
    pub loan_type: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LeadError {
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
}

impl LeadSubmission {
    /// Checks that first name, last name, email and phone are non-blank.
    ///
    /// # Errors
    ///
    /// Returns [`LeadError::MissingFields`] naming every blank required field.
    pub fn validate(&self) -> Result<(), LeadError> {
        let required = [
            ("firstName", &self.first_name),
            ("lastName", &self.last_name),
            ("email", &self.email),
            ("phone", &self.phone),
        ];
        let missing: Vec<&'static str> = required
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| *name)
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(LeadError::MissingFields(missing))
        }
    }
}
