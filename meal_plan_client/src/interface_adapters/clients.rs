use crate::domain::{Day, MealPlanAck, MealPlanError, MealPlanProvider, MealTitle};
use async_trait::async_trait;
use reqwest::Client;
use url::Url;

// Path template on the meal plan server; `{day}` and `{meal_title}` are spliced in as-is.
const ADD_TO_CUSTOM_MEAL_PLAN_PATH: &str = "/add_to_custom_meal_plan";

// Thin wrapper around reqwest for meal plan server calls.
// Cloning shares the underlying connection pool.
#[derive(Clone)]
pub struct MealPlanClient {
    http: Client,
    base_url: Url,
}

impl MealPlanClient {
    // No timeout is configured; whatever reqwest defaults to applies.
    pub fn new(base_url: &str) -> Result<Self, MealPlanError> {
        let base_url = Url::parse(base_url).map_err(MealPlanError::InvalidBaseUrl)?;
        Ok(Self {
            http: Client::new(),
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // Resolve the endpoint against the server origin. Encoding is left to the
    // WHATWG URL parser, the same one a browser applies to a relative fetch.
    pub fn endpoint(&self, day: &Day, meal_title: &MealTitle) -> Result<Url, MealPlanError> {
        let path = format!("{ADD_TO_CUSTOM_MEAL_PLAN_PATH}/{day}/{meal_title}");
        self.base_url
            .join(&path)
            .map_err(MealPlanError::InvalidEndpoint)
    }
}

#[async_trait]
impl MealPlanProvider for MealPlanClient {
    async fn add_to_custom_meal_plan(
        &self,
        day: &Day,
        meal_title: &MealTitle,
    ) -> Result<MealPlanAck, MealPlanError> {
        // Plain GET: no query string, no body.
        let url = self.endpoint(day, meal_title)?;
        tracing::debug!(%url, "adding meal to custom meal plan.");
        let res = self
            .http
            .get(url)
            .send()
            .await
            .map_err(MealPlanError::Transport)?;
        let status = res.status();

        // Keep upstream status/message so callers can still show what the server said.
        if !status.is_success() {
            let message = res
                .json::<MealPlanAck>()
                .await
                .ok()
                .map(|payload| payload.message);
            return Err(MealPlanError::Rejected { status, message });
        }

        res.json::<MealPlanAck>()
            .await
            .map_err(MealPlanError::Decode)
    }
}
