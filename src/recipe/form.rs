//! Form submission types for the two recipe-request variants.
//!
//! The wire format matches the web wizard: an internally tagged object with
//! `type` set to `healthy-food` or `herbalife-drink`, camelCase field names,
//! and lowercase Spanish enum values.

use serde::{Deserialize, Serialize};

use super::error::ValidationError;

/// Recipe category selected on the welcome screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecipeCategory {
    /// Full healthy meal.
    HealthyFood,
    /// Drink prepared with Herbalife products.
    HerbalifeDrink,
}

impl RecipeCategory {
    /// Wire tag of the category, as the wizard sends it.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HealthyFood => "healthy-food",
            Self::HerbalifeDrink => "herbalife-drink",
        }
    }
}

/// Meal slot for the healthy-food variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    /// Breakfast.
    Desayuno,
    /// Main midday meal.
    Comida,
    /// Dinner.
    Cena,
    /// Snack between meals.
    Snack,
}

impl MealType {
    /// Display value as shown in the form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Desayuno => "desayuno",
            Self::Comida => "comida",
            Self::Cena => "cena",
            Self::Snack => "snack",
        }
    }
}

/// Flavor preference for the healthy-food variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodFlavor {
    /// Savory.
    Salado,
    /// Sweet.
    Dulce,
    /// Light.
    Ligero,
    /// Spiced.
    Especiado,
}

impl FoodFlavor {
    /// Display value as shown in the form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Salado => "salado",
            Self::Dulce => "dulce",
            Self::Ligero => "ligero",
            Self::Especiado => "especiado",
        }
    }
}

/// Serving temperature for the Herbalife-drink variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrinkTemperature {
    /// Cold drink.
    Fria,
    /// Hot drink.
    Caliente,
}

impl DrinkTemperature {
    /// Display value, with accents restored for prompt and recipe text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fria => "fría",
            Self::Caliente => "caliente",
        }
    }
}

/// Objective the drink should serve. A submission selects one or more.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Objective {
    /// Sustained energy during the day.
    Energia,
    /// Consumed before a workout.
    AntesDelEjercicio,
    /// Consumed during a workout.
    DuranteElEjercicio,
    /// Consumed after a workout.
    DespuesDelEjercicio,
    /// Weight management.
    ControlDePeso,
    /// Hydration.
    Hidratacion,
}

impl Objective {
    /// Display value as shown in the form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Energia => "energía",
            Self::AntesDelEjercicio => "antes del ejercicio",
            Self::DuranteElEjercicio => "durante el ejercicio",
            Self::DespuesDelEjercicio => "después del ejercicio",
            Self::ControlDePeso => "control de peso",
            Self::Hidratacion => "hidratación",
        }
    }
}

/// Herbalife product available to the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HerbalifeProduct {
    /// Fórmula 1 nutritional shake mix.
    #[serde(rename = "formula-1")]
    Formula1,
    /// Proteína Gold protein powder.
    ProteinaGold,
    /// Aloe concentrate.
    Aloe,
    /// Herbal tea concentrate.
    Te,
    /// NRG guarana blend.
    Nrg,
    /// Collagen supplement.
    Colageno,
    /// CR7 Drive sports hydration mix.
    Cr7Drive,
}

impl HerbalifeProduct {
    /// Products suitable for consumption while exercising.
    pub const IN_EXERCISE: &'static [Self] = &[Self::Cr7Drive, Self::Aloe];

    /// Recovery-oriented products for after a workout.
    pub const RECOVERY: &'static [Self] = &[Self::ProteinaGold, Self::Formula1];

    /// Energizing products for before a workout.
    pub const ENERGIZING: &'static [Self] = &[Self::Nrg, Self::Te];

    /// Display name as printed in recipes and prompts.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Formula1 => "Fórmula 1",
            Self::ProteinaGold => "Proteína Gold",
            Self::Aloe => "Aloe",
            Self::Te => "Té",
            Self::Nrg => "NRG",
            Self::Colageno => "Colágeno",
            Self::Cr7Drive => "CR7 Drive",
        }
    }

    /// Whether the product carries caffeine.
    #[must_use]
    pub const fn is_caffeinated(self) -> bool {
        matches!(self, Self::Te | Self::Nrg)
    }
}

/// Liquid base the drink is prepared with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BaseMedium {
    /// Plain water.
    Agua,
    /// Skim milk.
    LecheDescremada,
    /// Plant-based milk.
    LecheVegetal,
    /// Natural juice.
    Jugo,
}

impl BaseMedium {
    /// Display value as printed in recipes and prompts.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Agua => "agua",
            Self::LecheDescremada => "leche descremada",
            Self::LecheVegetal => "leche vegetal",
            Self::Jugo => "jugo natural",
        }
    }
}

/// Principal flavor for the Herbalife-drink variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrinkFlavor {
    /// Chocolate.
    Chocolate,
    /// Vanilla.
    Vainilla,
    /// Mango.
    Mango,
    /// Strawberry.
    Fresa,
    /// Any other flavor.
    Otro,
}

impl DrinkFlavor {
    /// Display value as shown in the form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Chocolate => "chocolate",
            Self::Vainilla => "vainilla",
            Self::Mango => "mango",
            Self::Fresa => "fresa",
            Self::Otro => "otro",
        }
    }
}

/// Healthy-food request fields.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthyFoodRequest {
    /// Meal slot the recipe is for.
    pub meal_type: MealType,
    /// Free-text available ingredients; may be blank.
    #[serde(default)]
    pub ingredients: String,
    /// Free-text dietary restrictions or preferences; may be blank.
    #[serde(default)]
    pub restrictions: String,
    /// Flavor preference.
    pub flavor: FoodFlavor,
    /// Contact name.
    pub name: String,
    /// Phone or email.
    pub contact: String,
}

/// Herbalife-drink request fields.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HerbalifeDrinkRequest {
    /// Serving temperature.
    pub temperature: DrinkTemperature,
    /// One or more objectives the drink should serve.
    pub objectives: Vec<Objective>,
    /// One or more Herbalife products available to the user.
    pub products: Vec<HerbalifeProduct>,
    /// Preparation base.
    pub base: BaseMedium,
    /// Principal flavor.
    pub flavor: DrinkFlavor,
    /// Optional natural extras (fruit, spices, ice...).
    #[serde(default)]
    pub extras: Vec<String>,
    /// Contact name.
    pub name: String,
    /// Phone or email.
    pub contact: String,
}

/// A validated user request for a generated recipe.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FormSubmission {
    /// Healthy-food variant.
    #[serde(rename = "healthy-food")]
    HealthyFood(HealthyFoodRequest),
    /// Herbalife-drink variant.
    #[serde(rename = "herbalife-drink")]
    HerbalifeDrink(HerbalifeDrinkRequest),
}

impl FormSubmission {
    /// Category tag of this submission.
    #[must_use]
    pub const fn category(&self) -> RecipeCategory {
        match self {
            Self::HealthyFood(_) => RecipeCategory::HealthyFood,
            Self::HerbalifeDrink(_) => RecipeCategory::HerbalifeDrink,
        }
    }

    /// Contact name of the requester.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::HealthyFood(r) => &r.name,
            Self::HerbalifeDrink(r) => &r.name,
        }
    }

    /// Contact info of the requester.
    #[must_use]
    pub fn contact(&self) -> &str {
        match self {
            Self::HealthyFood(r) => &r.contact,
            Self::HerbalifeDrink(r) => &r.contact,
        }
    }

    /// Check the submission invariants: required scalar fields non-blank,
    /// required sets non-empty.
    ///
    /// # Errors
    /// Returns the first violated field's error, with the same message the
    /// form shows next to that field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name().trim().is_empty() {
            return Err(ValidationError::MissingName);
        }
        if self.contact().trim().is_empty() {
            return Err(ValidationError::MissingContact);
        }
        if let Self::HerbalifeDrink(request) = self {
            if request.objectives.is_empty() {
                return Err(ValidationError::NoObjectives);
            }
            if request.products.is_empty() {
                return Err(ValidationError::NoProducts);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn healthy_request() -> HealthyFoodRequest {
        HealthyFoodRequest {
            meal_type: MealType::Desayuno,
            ingredients: "avena, plátano".to_string(),
            restrictions: String::new(),
            flavor: FoodFlavor::Dulce,
            name: "Ana".to_string(),
            contact: "ana@x.com".to_string(),
        }
    }

    fn drink_request() -> HerbalifeDrinkRequest {
        HerbalifeDrinkRequest {
            temperature: DrinkTemperature::Fria,
            objectives: vec![Objective::Energia],
            products: vec![HerbalifeProduct::Formula1],
            base: BaseMedium::Agua,
            flavor: DrinkFlavor::Mango,
            extras: vec![],
            name: "Luis".to_string(),
            contact: "555-1234".to_string(),
        }
    }

    #[test]
    fn valid_submissions_pass() {
        assert!(FormSubmission::HealthyFood(healthy_request()).validate().is_ok());
        assert!(FormSubmission::HerbalifeDrink(drink_request()).validate().is_ok());
    }

    #[test]
    fn blank_name_is_rejected() {
        let mut request = healthy_request();
        request.name = "   ".to_string();
        assert_eq!(
            FormSubmission::HealthyFood(request).validate(),
            Err(ValidationError::MissingName)
        );
    }

    #[test]
    fn empty_required_sets_are_rejected() {
        let mut request = drink_request();
        request.objectives.clear();
        assert_eq!(
            FormSubmission::HerbalifeDrink(request).validate(),
            Err(ValidationError::NoObjectives)
        );

        let mut request = drink_request();
        request.products.clear();
        assert_eq!(
            FormSubmission::HerbalifeDrink(request).validate(),
            Err(ValidationError::NoProducts)
        );
    }

    #[test]
    fn wire_format_matches_the_wizard() {
        let json = r#"{
            "type": "herbalife-drink",
            "temperature": "fria",
            "objectives": ["durante-el-ejercicio", "hidratacion"],
            "products": ["te", "cr7-drive"],
            "base": "agua",
            "flavor": "mango",
            "extras": ["hielo"],
            "name": "Luis",
            "contact": "555-1234"
        }"#;

        let submission: FormSubmission =
            serde_json::from_str(json).expect("submission should deserialize");
        match submission {
            FormSubmission::HerbalifeDrink(request) => {
                assert_eq!(request.temperature, DrinkTemperature::Fria);
                assert_eq!(request.objectives, vec![
                    Objective::DuranteElEjercicio,
                    Objective::Hidratacion
                ]);
                assert!(request.products.contains(&HerbalifeProduct::Te));
            }
            FormSubmission::HealthyFood(_) => panic!("wrong variant"),
        }
    }

    #[test]
    fn caffeinated_products_are_flagged() {
        assert!(HerbalifeProduct::Te.is_caffeinated());
        assert!(HerbalifeProduct::Nrg.is_caffeinated());
        assert!(!HerbalifeProduct::Formula1.is_caffeinated());
        assert!(!HerbalifeProduct::Cr7Drive.is_caffeinated());
    }
}
