// Domain layer: meal plan value types, errors and ports.

mod errors;
mod meal_plan;

// Re-export the domain boundary types and ports.
pub use errors::MealPlanError;
pub use meal_plan::{Day, MealPlanAck, MealPlanProvider, MealTitle, Notifier};
