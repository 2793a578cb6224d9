use clap::Parser;

/// Add a meal to the custom meal plan
#[derive(Debug, Parser)]
#[command(name = "meal_plan_client")]
#[command(about = "Add a meal to a day of the custom meal plan", long_about = None)]
pub struct Cli {
    /// Day of the meal plan (e.g. "Monday"), sent as-is
    pub day: String,

    /// Title of the meal to add, sent as-is
    pub meal_title: String,

    /// Meal plan server origin (overrides MEAL_PLAN_BASE_URL)
    #[arg(long)]
    pub base_url: Option<String>,
}
