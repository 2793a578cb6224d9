use crate::domain::MealPlanError;
use async_trait::async_trait;
use serde::Deserialize;
use std::fmt;

// Day of the custom meal plan. Opaque: the server decides what is valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Day(String);

impl Day {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Human-readable meal name, passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealTitle(String);

impl MealTitle {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MealTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// The serialization within this layer is a dependency leak, but its a pragmatic approach.
// Acknowledgement returned by the meal plan server. Only `message` is consumed;
// anything else in the payload is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MealPlanAck {
    pub message: String,
}

// The use case depends on this trait, not the concrete reqwest client.
#[async_trait]
pub trait MealPlanProvider: Send + Sync {
    async fn add_to_custom_meal_plan(
        &self,
        day: &Day,
        meal_title: &MealTitle,
    ) -> Result<MealPlanAck, MealPlanError>;
}

// Where results end up for the user. `alert` is synchronous and may block.
pub trait Notifier: Send + Sync {
    fn alert(&self, message: &str);
    fn report_failure(&self, err: &MealPlanError);
}
