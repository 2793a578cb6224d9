use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::domain::{Day, MealPlanAck, MealPlanError, MealPlanProvider, MealTitle, Notifier};

// Add-to-custom-meal-plan use case with injected dependencies.
pub struct AddToCustomMealPlanUseCase<P: ?Sized, N: ?Sized> {
    pub provider: Arc<P>,
    pub notifier: Arc<N>,
}

impl<P: ?Sized, N: ?Sized> Clone for AddToCustomMealPlanUseCase<P, N> {
    fn clone(&self) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
            notifier: Arc::clone(&self.notifier),
        }
    }
}

impl<P, N> AddToCustomMealPlanUseCase<P, N>
where
    P: MealPlanProvider + ?Sized + 'static,
    N: Notifier + ?Sized + 'static,
{
    pub fn new(provider: Arc<P>, notifier: Arc<N>) -> Self {
        Self { provider, notifier }
    }

    // Send the request and hand the outcome back to the caller.
    #[tracing::instrument(name = "add_to_custom_meal_plan", skip_all, fields(day = %day, meal_title = %meal_title))]
    pub async fn execute(
        &self,
        day: &Day,
        meal_title: &MealTitle,
    ) -> Result<MealPlanAck, MealPlanError> {
        let ack = self.provider.add_to_custom_meal_plan(day, meal_title).await?;
        tracing::debug!(message = %ack.message, "meal added to custom meal plan.");
        Ok(ack)
    }

    // Fire-and-forget: alert on success, report on failure. Nothing is returned
    // to the caller beyond the task handle, and errors never propagate.
    pub fn spawn(&self, day: Day, meal_title: MealTitle) -> JoinHandle<()> {
        let use_case = self.clone();
        tokio::spawn(async move {
            let outcome = use_case.execute(&day, &meal_title).await;
            use_case.present(outcome);
        })
    }

    fn present(&self, outcome: Result<MealPlanAck, MealPlanError>) {
        match outcome {
            Ok(ack) => self.notifier.alert(&ack.message),
            Err(err) => match err.server_message() {
                // The server explained itself; show that the same way a success is shown.
                Some(message) => {
                    tracing::warn!(error = %err, "meal plan server rejected the meal.");
                    self.notifier.alert(message);
                }
                None => self.notifier.report_failure(&err),
            },
        }
    }
}
