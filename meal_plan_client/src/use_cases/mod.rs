// Use cases layer: application workflows for the meal plan client.

pub mod add_to_custom_meal_plan;

pub use add_to_custom_meal_plan::AddToCustomMealPlanUseCase;
