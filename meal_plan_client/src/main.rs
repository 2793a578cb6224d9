#[tokio::main]
async fn main() {
    meal_plan_client::run().await;
}
