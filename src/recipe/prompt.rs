//! Prompt construction for the generation webhook.
//!
//! Pure string building: a submission always yields a prompt, with neutral
//! placeholders standing in for blank optional fields.

use super::form::{
    FormSubmission, HealthyFoodRequest, HerbalifeDrinkRequest, HerbalifeProduct, Objective,
};

/// Canonical Coach 80/20 motivational phrase.
pub const COACH_QUOTE: &str = "Pequeños cambios generan grandes transformaciones";

/// Placeholder when no ingredients were listed.
const NO_INGREDIENTS: &str = "ingredientes de temporada";
/// Placeholder when no restrictions were listed.
const NO_RESTRICTIONS: &str = "ninguna restricción especial";
/// Placeholder when no extras were listed.
const NO_EXTRAS: &str = "ninguno";

/// Build the natural-language instruction for a validated submission.
#[must_use]
pub fn build_prompt(submission: &FormSubmission) -> String {
    let mut out = String::with_capacity(768);
    out.push_str("Actúa como un chef experto en nutrición saludable. ");

    match submission {
        FormSubmission::HealthyFood(request) => push_healthy_clause(&mut out, request),
        FormSubmission::HerbalifeDrink(request) => push_drink_clauses(&mut out, request),
    }

    out.push_str("Prepara la receta para ");
    out.push_str(submission.name());
    out.push_str(" (contacto: ");
    out.push_str(submission.contact());
    out.push_str(").\n\n");

    push_closing_checklist(&mut out);
    out
}

fn push_healthy_clause(out: &mut String, request: &HealthyFoodRequest) {
    out.push_str("Genera una receta en español para un usuario que desea una ");
    out.push_str(request.meal_type.as_str());
    out.push_str(". Ingredientes disponibles: ");
    out.push_str(or_placeholder(&request.ingredients, NO_INGREDIENTS));
    out.push_str(". Restricciones o preferencias: ");
    out.push_str(or_placeholder(&request.restrictions, NO_RESTRICTIONS));
    out.push_str(". Sabor preferido: ");
    out.push_str(request.flavor.as_str());
    out.push_str(". ");
}

fn push_drink_clauses(out: &mut String, request: &HerbalifeDrinkRequest) {
    out.push_str("Genera una receta en español para una bebida ");
    out.push_str(request.temperature.as_str());
    out.push_str(" con productos Herbalife. Objetivos: ");
    out.push_str(&join(request.objectives.iter().map(|o| o.as_str())));
    out.push_str(". Productos Herbalife disponibles: ");
    out.push_str(&join(request.products.iter().map(|p| p.as_str())));
    out.push_str(". Base de preparación: ");
    out.push_str(request.base.as_str());
    out.push_str(". Sabor principal: ");
    out.push_str(request.flavor.as_str());
    out.push_str(". Extras: ");
    let extras = join(request.extras.iter().map(String::as_str));
    out.push_str(or_placeholder(&extras, NO_EXTRAS));
    out.push_str(". ");

    let during = request.objectives.contains(&Objective::DuranteElEjercicio);

    if during {
        out.push_str(
            "La bebida se consumirá durante el ejercicio: sugiere únicamente productos aptos \
             para consumo durante el entrenamiento (",
        );
        out.push_str(&join(HerbalifeProduct::IN_EXERCISE.iter().map(|p| p.as_str())));
        out.push_str("). ");
    }
    if request.objectives.contains(&Objective::DespuesDelEjercicio) {
        out.push_str(
            "La bebida es para después del ejercicio: prioriza productos orientados a la \
             recuperación (",
        );
        out.push_str(&join(HerbalifeProduct::RECOVERY.iter().map(|p| p.as_str())));
        out.push_str("). ");
    }
    if request.objectives.contains(&Objective::AntesDelEjercicio) {
        out.push_str("La bebida es para antes del ejercicio: prioriza productos energizantes (");
        out.push_str(&join(HerbalifeProduct::ENERGIZING.iter().map(|p| p.as_str())));
        out.push_str("). ");
    }
    if during && request.products.iter().any(|p| p.is_caffeinated()) {
        out.push_str(
            "Precaución: se seleccionaron productos con cafeína; incluye una advertencia sobre \
             el consumo de cafeína durante el ejercicio. ",
        );
    }
}

fn push_closing_checklist(out: &mut String) {
    out.push_str("✅ La receta debe:\n");
    out.push_str("- Usar solo ingredientes fáciles de conseguir en México.\n");
    out.push_str("- Evitar cualquier preparación frita o capeada.\n");
    out.push_str("- Ser sencilla, práctica y con buen sabor.\n\n");
    out.push_str("✅ Incluye:\n");
    out.push_str("1. Título atractivo\n");
    out.push_str("2. Lista clara de ingredientes con cantidades exactas\n");
    out.push_str("3. Instrucciones paso a paso sencillas\n");
    out.push_str("4. Tip nutricional breve\n");
    out.push_str("5. Frase motivadora estilo Coach 80/20 como: \"");
    out.push_str(COACH_QUOTE);
    out.push_str("\".\n");
    out.push_str("Al final agrega recomendaciones opcionales.");
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    let trimmed = value.trim();
    if trimmed.is_empty() { placeholder } else { trimmed }
}

fn join<'a>(values: impl Iterator<Item = &'a str>) -> String {
    values.collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::form::{
        BaseMedium, DrinkFlavor, DrinkTemperature, FoodFlavor, MealType, Objective,
    };

    fn healthy() -> FormSubmission {
        FormSubmission::HealthyFood(HealthyFoodRequest {
            meal_type: MealType::Cena,
            ingredients: "pollo, brócoli".to_string(),
            restrictions: String::new(),
            flavor: FoodFlavor::Salado,
            name: "Ana".to_string(),
            contact: "ana@x.com".to_string(),
        })
    }

    fn drink(objectives: Vec<Objective>, products: Vec<HerbalifeProduct>) -> FormSubmission {
        FormSubmission::HerbalifeDrink(HerbalifeDrinkRequest {
            temperature: DrinkTemperature::Fria,
            objectives,
            products,
            base: BaseMedium::LecheVegetal,
            flavor: DrinkFlavor::Chocolate,
            extras: vec!["plátano".to_string()],
            name: "Luis".to_string(),
            contact: "555-1234".to_string(),
        })
    }

    #[test]
    fn healthy_prompt_contains_every_required_field() {
        let prompt = build_prompt(&healthy());
        for expected in ["cena", "salado", "Ana", "ana@x.com"] {
            assert!(prompt.contains(expected), "missing {expected}: {prompt}");
        }
    }

    #[test]
    fn blank_optionals_use_placeholders() {
        let submission = FormSubmission::HealthyFood(HealthyFoodRequest {
            meal_type: MealType::Desayuno,
            ingredients: String::new(),
            restrictions: "  ".to_string(),
            flavor: FoodFlavor::Dulce,
            name: "Ana".to_string(),
            contact: "ana@x.com".to_string(),
        });
        let prompt = build_prompt(&submission);
        assert!(prompt.contains("ingredientes de temporada"));
        assert!(prompt.contains("ninguna restricción especial"));
    }

    #[test]
    fn drink_prompt_contains_every_required_field() {
        let prompt = build_prompt(&drink(
            vec![Objective::Energia, Objective::ControlDePeso],
            vec![HerbalifeProduct::Formula1, HerbalifeProduct::Colageno],
        ));
        for expected in [
            "fría",
            "energía",
            "control de peso",
            "Fórmula 1",
            "Colágeno",
            "leche vegetal",
            "chocolate",
            "plátano",
            "Luis",
            "555-1234",
        ] {
            assert!(prompt.contains(expected), "missing {expected}: {prompt}");
        }
    }

    #[test]
    fn during_exercise_restricts_products() {
        let prompt = build_prompt(&drink(
            vec![Objective::DuranteElEjercicio],
            vec![HerbalifeProduct::Cr7Drive],
        ));
        assert!(prompt.contains("durante el entrenamiento"));
        assert!(prompt.contains("CR7 Drive"));
        assert!(!prompt.contains("Precaución"));
    }

    #[test]
    fn caffeine_caution_requires_both_conditions() {
        let with_caution = build_prompt(&drink(
            vec![Objective::DuranteElEjercicio],
            vec![HerbalifeProduct::Te],
        ));
        assert!(with_caution.contains("Precaución"));

        let caffeinated_but_not_during = build_prompt(&drink(
            vec![Objective::Energia],
            vec![HerbalifeProduct::Te, HerbalifeProduct::Nrg],
        ));
        assert!(!caffeinated_but_not_during.contains("Precaución"));

        let during_but_not_caffeinated = build_prompt(&drink(
            vec![Objective::DuranteElEjercicio],
            vec![HerbalifeProduct::Aloe],
        ));
        assert!(!during_but_not_caffeinated.contains("Precaución"));
    }

    #[test]
    fn before_and_after_exercise_clauses() {
        let prompt = build_prompt(&drink(
            vec![Objective::AntesDelEjercicio, Objective::DespuesDelEjercicio],
            vec![HerbalifeProduct::ProteinaGold],
        ));
        assert!(prompt.contains("energizantes"));
        assert!(prompt.contains("recuperación"));
    }

    #[test]
    fn closing_checklist_always_present() {
        for submission in [
            healthy(),
            drink(vec![Objective::Energia], vec![HerbalifeProduct::Aloe]),
        ] {
            let prompt = build_prompt(&submission);
            assert!(prompt.contains("cantidades exactas"));
            assert!(prompt.contains("recomendaciones opcionales"));
            assert!(prompt.contains(COACH_QUOTE));
        }
    }
}
