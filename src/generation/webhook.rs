//! Fire-and-forget lead notification webhook.
//!
//! After a successful generation the submission and the generated text are
//! posted to a workflow-automation endpoint for CRM/logging. Failures here
//! are logged and swallowed; they never reach the primary flow.

use std::time::Duration;

use serde::Serialize;
use url::Url;

use crate::recipe::error::{RecipeError, RecipeResult};
use crate::recipe::form::FormSubmission;

/// Timeout for the notification call.
const NOTIFY_TIMEOUT: Duration = Duration::from_secs(10);

/// Payload posted to the lead webhook. Field names match the workflow the
/// endpoint was built around.
#[derive(Debug, Serialize)]
struct LeadPayload {
    nombre: String,
    contacto: String,
    tipo_receta: String,
    ingredientes: String,
    restricciones: String,
    sabor: String,
    productos_herbalife: String,
    receta_generada: String,
}

impl LeadPayload {
    fn new(submission: &FormSubmission, generated: &str) -> Self {
        let (ingredientes, restricciones, sabor, productos) = match submission {
            FormSubmission::HealthyFood(request) => (
                request.ingredients.clone(),
                request.restrictions.clone(),
                request.flavor.as_str().to_string(),
                "ninguno".to_string(),
            ),
            FormSubmission::HerbalifeDrink(request) => (
                request.extras.join(", "),
                String::new(),
                request.flavor.as_str().to_string(),
                request
                    .products
                    .iter()
                    .map(|p| p.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
        };

        Self {
            nombre: submission.name().to_string(),
            contacto: submission.contact().to_string(),
            tipo_receta: submission.category().as_str().to_string(),
            ingredientes,
            restricciones,
            sabor,
            productos_herbalife: productos,
            receta_generada: generated.to_string(),
        }
    }
}

/// Client for the secondary lead webhook.
pub struct LeadNotifier {
    client: reqwest::Client,
    endpoint: Url,
}

impl LeadNotifier {
    /// Build a notifier for the given endpoint.
    ///
    /// # Errors
    /// Returns an error if the URL is invalid or the HTTP client cannot be
    /// constructed.
    pub fn new(endpoint: &str) -> RecipeResult<Self> {
        let endpoint = Url::parse(endpoint)?;
        let client = reqwest::Client::builder()
            .timeout(NOTIFY_TIMEOUT)
            .build()
            .map_err(|e| RecipeError::Config(e.to_string()))?;

        Ok(Self { client, endpoint })
    }

    /// Post the submission and generated text, detached from the caller.
    /// Any failure is logged and dropped.
    pub fn notify(&self, submission: &FormSubmission, generated: &str) {
        let payload = LeadPayload::new(submission, generated);
        let client = self.client.clone();
        let endpoint = self.endpoint.clone();

        tokio::spawn(async move {
            match client.post(endpoint).json(&payload).send().await {
                Ok(response) if !response.status().is_success() => {
                    tracing::warn!(status = %response.status(), "lead webhook rejected the payload");
                }
                Ok(_) => tracing::debug!("lead webhook notified"),
                Err(err) => tracing::warn!("lead webhook unreachable: {err}"),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::form::{
        BaseMedium, DrinkFlavor, DrinkTemperature, FoodFlavor, HealthyFoodRequest,
        HerbalifeDrinkRequest, HerbalifeProduct, MealType, Objective,
    };

    #[test]
    fn healthy_payload_reproduces_submission_fields() {
        let submission = FormSubmission::HealthyFood(HealthyFoodRequest {
            meal_type: MealType::Comida,
            ingredients: "pollo, arroz".to_string(),
            restrictions: "sin gluten".to_string(),
            flavor: FoodFlavor::Salado,
            name: "Ana".to_string(),
            contact: "ana@x.com".to_string(),
        });
        let payload = LeadPayload::new(&submission, "receta generada");

        assert_eq!(payload.nombre, "Ana");
        assert_eq!(payload.contacto, "ana@x.com");
        assert_eq!(payload.tipo_receta, "healthy-food");
        assert_eq!(payload.ingredientes, "pollo, arroz");
        assert_eq!(payload.restricciones, "sin gluten");
        assert_eq!(payload.sabor, "salado");
        assert_eq!(payload.productos_herbalife, "ninguno");
        assert_eq!(payload.receta_generada, "receta generada");
    }

    #[test]
    fn drink_payload_joins_products_and_extras() {
        let submission = FormSubmission::HerbalifeDrink(HerbalifeDrinkRequest {
            temperature: DrinkTemperature::Fria,
            objectives: vec![Objective::Energia],
            products: vec![HerbalifeProduct::Formula1, HerbalifeProduct::Te],
            base: BaseMedium::Agua,
            flavor: DrinkFlavor::Fresa,
            extras: vec!["hielo".to_string(), "menta".to_string()],
            name: "Luis".to_string(),
            contact: "555-1234".to_string(),
        });
        let payload = LeadPayload::new(&submission, "texto");

        assert_eq!(payload.tipo_receta, "herbalife-drink");
        assert_eq!(payload.productos_herbalife, "Fórmula 1, Té");
        assert_eq!(payload.ingredientes, "hielo, menta");
        assert_eq!(payload.sabor, "fresa");
    }
}
