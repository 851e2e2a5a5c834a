//! Local recipe templates used when the remote pipeline fails.
//!
//! Same submission fields, same structural template: only the record id and
//! timestamp differ between invocations.

use super::form::{DrinkTemperature, FormSubmission, HealthyFoodRequest, HerbalifeDrinkRequest};
use super::record::RecipeRecord;

/// Synthesize a complete recipe from the submission alone.
#[must_use]
pub fn fallback_recipe(submission: &FormSubmission) -> RecipeRecord {
    match submission {
        FormSubmission::HealthyFood(request) => healthy_template(request),
        FormSubmission::HerbalifeDrink(request) => drink_template(request),
    }
}

fn healthy_template(request: &HealthyFoodRequest) -> RecipeRecord {
    RecipeRecord::new(
        format!("{} Saludable y Nutritiva", capitalize(request.meal_type.as_str())),
        vec![
            "2 tazas de vegetales frescos de temporada".to_string(),
            "1 porción de proteína magra (pollo, pescado o legumbres)".to_string(),
            "1 cucharada de aceite de oliva extra virgen".to_string(),
            "Hierbas frescas al gusto".to_string(),
            "Especias naturales para realzar el sabor".to_string(),
        ],
        vec![
            "Lava y prepara todos los vegetales cortándolos en trozos uniformes".to_string(),
            "Cocina la proteína de tu elección con un mínimo de aceite".to_string(),
            "Saltea los vegetales manteniendo su textura crujiente".to_string(),
            "Combina todos los ingredientes y sazona con hierbas y especias".to_string(),
            "Sirve inmediatamente para conservar todos los nutrientes".to_string(),
        ],
        "Esta receta combina proteínas de alta calidad con vegetales ricos en vitaminas y \
         minerales, proporcionando una comida balanceada que nutre tu cuerpo y te da energía \
         sostenida."
            .to_string(),
        "Cada comida saludable es una inversión en tu futuro más brillante".to_string(),
    )
}

fn drink_template(request: &HerbalifeDrinkRequest) -> RecipeRecord {
    let product = request
        .products
        .first()
        .map_or("Fórmula 1", |p| p.as_str());
    let base = request.base.as_str();

    let mut ingredients = vec![
        format!("2 scoops de {product} Herbalife"),
        format!("1 taza de {base}"),
        "1/2 taza de fruta fresca de temporada".to_string(),
        "1 cucharadita de miel natural (opcional)".to_string(),
    ];
    let serving_step = match request.temperature {
        DrinkTemperature::Fria => {
            ingredients.push("Hielo al gusto".to_string());
            "Sirve inmediatamente con hielo para una experiencia refrescante"
        }
        DrinkTemperature::Caliente => {
            "Sirve caliente y disfruta de inmediato para conservar sus nutrientes"
        }
    };

    let mut instructions = vec![
        format!("Vierte la taza de {base} en la licuadora"),
        format!("Incorpora los scoops de {product}"),
        "Añade la fruta fresca y la miel si deseas mayor dulzura".to_string(),
        "Licúa por 30-45 segundos hasta obtener consistencia cremosa".to_string(),
    ];
    instructions.push(serving_step.to_string());

    RecipeRecord::new(
        format!(
            "Batido Energético {} con Herbalife",
            capitalize(request.flavor.as_str())
        ),
        ingredients,
        instructions,
        "Esta bebida combina la nutrición completa de Herbalife con ingredientes naturales, \
         proporcionando proteínas, vitaminas y minerales esenciales para apoyar tu bienestar \
         diario."
            .to_string(),
        "Cada sorbo es un paso hacia la mejor versión de ti mismo".to_string(),
    )
}

/// Uppercase the first character for display.
fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::form::{
        BaseMedium, DrinkFlavor, FoodFlavor, HerbalifeProduct, MealType, Objective,
    };

    fn healthy(meal_type: MealType) -> FormSubmission {
        FormSubmission::HealthyFood(HealthyFoodRequest {
            meal_type,
            ingredients: String::new(),
            restrictions: String::new(),
            flavor: FoodFlavor::Dulce,
            name: "Ana".to_string(),
            contact: "ana@x.com".to_string(),
        })
    }

    fn drink() -> FormSubmission {
        FormSubmission::HerbalifeDrink(HerbalifeDrinkRequest {
            temperature: DrinkTemperature::Fria,
            objectives: vec![Objective::Energia],
            products: vec![HerbalifeProduct::ProteinaGold],
            base: BaseMedium::LecheVegetal,
            flavor: DrinkFlavor::Mango,
            extras: vec![],
            name: "Luis".to_string(),
            contact: "555-1234".to_string(),
        })
    }

    #[test]
    fn healthy_fallback_interpolates_meal_type() {
        let record = fallback_recipe(&healthy(MealType::Desayuno));
        assert!(record.title.contains("Desayuno"));
        assert!(!record.ingredients.is_empty());
        assert!(!record.instructions.is_empty());
        assert!(!record.nutritional_tip.is_empty());
        assert!(!record.motivational_quote.is_empty());
    }

    #[test]
    fn drink_fallback_interpolates_product_flavor_and_base() {
        let record = fallback_recipe(&drink());
        assert!(record.title.contains("Mango"));
        assert!(record.ingredients.iter().any(|i| i.contains("Proteína Gold")));
        assert!(record.ingredients.iter().any(|i| i.contains("leche vegetal")));
        assert!(record.instructions.iter().any(|i| i.contains("Proteína Gold")));
    }

    #[test]
    fn cold_drinks_get_ice_and_hot_drinks_do_not() {
        let cold = fallback_recipe(&drink());
        assert!(cold.ingredients.iter().any(|i| i.contains("Hielo")));

        let hot = match drink() {
            FormSubmission::HerbalifeDrink(mut request) => {
                request.temperature = DrinkTemperature::Caliente;
                FormSubmission::HerbalifeDrink(request)
            }
            FormSubmission::HealthyFood(_) => unreachable!(),
        };
        let record = fallback_recipe(&hot);
        assert!(!record.ingredients.iter().any(|i| i.contains("Hielo")));
        assert!(record.instructions.iter().any(|i| i.contains("caliente")));
    }

    #[test]
    fn same_submission_yields_same_template() {
        let first = fallback_recipe(&drink());
        let second = fallback_recipe(&drink());
        assert_eq!(first.title, second.title);
        assert_eq!(first.ingredients, second.ingredients);
        assert_eq!(first.instructions, second.instructions);
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn capitalize_handles_accents_and_empty_input() {
        assert_eq!(capitalize("desayuno"), "Desayuno");
        assert_eq!(capitalize("árbol"), "Árbol");
        assert_eq!(capitalize(""), "");
    }
}
