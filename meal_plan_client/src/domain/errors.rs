use reqwest::StatusCode;
use std::fmt;

// Failures of a single add-to-meal-plan exchange.
#[derive(Debug)]
pub enum MealPlanError {
    InvalidBaseUrl(url::ParseError),
    InvalidEndpoint(url::ParseError),
    Transport(reqwest::Error),
    Rejected {
        status: StatusCode,
        message: Option<String>,
    },
    Decode(reqwest::Error),
}

impl MealPlanError {
    // Server-provided text worth showing to the user, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            MealPlanError::Rejected {
                message: Some(message),
                ..
            } => Some(message),
            _ => None,
        }
    }

    // Diagnostic line written when a call fails.
    pub fn log_line(&self) -> String {
        format!("Error: {self}")
    }
}

impl fmt::Display for MealPlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MealPlanError::InvalidBaseUrl(err) => write!(f, "invalid meal plan base url: {err}"),
            MealPlanError::InvalidEndpoint(err) => write!(f, "invalid meal plan endpoint: {err}"),
            MealPlanError::Transport(err) => write!(f, "meal plan transport error: {err}"),
            MealPlanError::Rejected { status, message } => {
                if let Some(message) = message {
                    write!(f, "meal plan upstream error {status}: {message}")
                } else {
                    write!(f, "meal plan upstream error {status}")
                }
            }
            MealPlanError::Decode(err) => write!(f, "meal plan response decode error: {err}"),
        }
    }
}

impl std::error::Error for MealPlanError {}
