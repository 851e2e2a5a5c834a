//! Wizard screen flow, modeled as an explicit state machine.
//!
//! The UI renders whatever step this machine is in; transitions are pure, so
//! any frontend (web, desktop, tests) can drive them.

use serde::{Deserialize, Serialize};

use crate::recipe::form::RecipeCategory;

/// Progress labels shown above the form.
pub const STEP_LABELS: [&str; 3] = ["Bienvenida", "Formulario", "Receta"];

/// Current wizard screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WizardStep {
    /// Category selection screen.
    #[default]
    Welcome,
    /// Healthy-food form.
    HealthyForm,
    /// Herbalife-drink form.
    HerbalifeForm,
    /// Generated recipe display.
    Recipe,
}

impl WizardStep {
    /// Move from the welcome screen to the form for the chosen category.
    /// Selecting a category anywhere else restarts at that category's form.
    #[must_use]
    pub const fn select_category(self, category: RecipeCategory) -> Self {
        match category {
            RecipeCategory::HealthyFood => Self::HealthyForm,
            RecipeCategory::HerbalifeDrink => Self::HerbalifeForm,
        }
    }

    /// A recipe finished generating; show it. Only meaningful from a form,
    /// but total: any step moves to the recipe screen.
    #[must_use]
    pub const fn recipe_ready(self) -> Self {
        Self::Recipe
    }

    /// Go back one screen.
    #[must_use]
    pub const fn back(self) -> Self {
        match self {
            Self::Welcome | Self::HealthyForm | Self::HerbalifeForm => Self::Welcome,
            Self::Recipe => Self::Welcome,
        }
    }

    /// Start over ("new recipe").
    #[must_use]
    pub const fn reset(self) -> Self {
        Self::Welcome
    }

    /// One-based progress position of this step, out of [`STEP_LABELS`].
    #[must_use]
    pub const fn progress(self) -> (u8, u8) {
        let current = match self {
            Self::Welcome => 1,
            Self::HealthyForm | Self::HerbalifeForm => 2,
            Self::Recipe => 3,
        };
        (current, STEP_LABELS.len() as u8)
    }
}
