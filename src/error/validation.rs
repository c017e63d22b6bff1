//! Input validation errors for the contact form.

use thiserror::Error;

/// Rejected contact-form input. No request is sent when validation fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    MissingField { field: &'static str },

    #[error("{value:?} is not a valid email address")]
    InvalidEmail { value: String },
}

impl ValidationError {
    pub fn user_message(&self) -> String {
        match self {
            ValidationError::MissingField { field } => {
                format!("Please fill in your {}.", field)
            }
            ValidationError::InvalidEmail { .. } => {
                "Please enter a valid email address.".to_string()
            }
        }
    }
}
