use std::env;

// Flask's development default, where the companion meal plan server listens.
pub const DEFAULT_MEAL_PLAN_BASE_URL: &str = "http://127.0.0.1:5000";

pub fn meal_plan_base_url() -> String {
    env::var("MEAL_PLAN_BASE_URL").unwrap_or_else(|_| DEFAULT_MEAL_PLAN_BASE_URL.to_string())
}

// An explicit flag wins over the environment.
pub fn resolve_base_url(flag: Option<String>) -> String {
    flag.unwrap_or_else(meal_plan_base_url)
}
