//! The canonical structured recipe and its share renderings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Footer appended to every shared recipe.
const SHARE_FOOTER: &str = "Generado por Recetas 80/20 - Nutre y Transforma";

/// A fully populated recipe. Every field is non-empty; the parser and the
/// fallback factory both guarantee this.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRecord {
    /// Unique identifier of this generation.
    pub id: Uuid,
    /// Recipe title.
    pub title: String,
    /// Ordered ingredient list.
    pub ingredients: Vec<String>,
    /// Ordered preparation steps.
    pub instructions: Vec<String>,
    /// Short nutritional tip.
    pub nutritional_tip: String,
    /// Coach 80/20 style motivational phrase.
    pub motivational_quote: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl RecipeRecord {
    /// Assemble a record with a fresh id and timestamp.
    #[must_use]
    pub fn new(
        title: String,
        ingredients: Vec<String>,
        instructions: Vec<String>,
        nutritional_tip: String,
        motivational_quote: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            ingredients,
            instructions,
            nutritional_tip,
            motivational_quote,
            created_at: Utc::now(),
        }
    }

    /// Plain text block for copy-to-clipboard.
    #[must_use]
    pub fn share_text(&self) -> String {
        let mut out = String::with_capacity(256);
        out.push_str(&self.title);
        out.push_str("\n\nINGREDIENTES:\n");
        for ingredient in &self.ingredients {
            out.push_str("• ");
            out.push_str(ingredient);
            out.push('\n');
        }
        out.push_str("\nINSTRUCCIONES:\n");
        for (index, step) in self.instructions.iter().enumerate() {
            out.push_str(&(index + 1).to_string());
            out.push_str(". ");
            out.push_str(step);
            out.push('\n');
        }
        out.push_str("\nTIP NUTRICIONAL:\n");
        out.push_str(&self.nutritional_tip);
        out.push_str("\n\n");
        out.push_str(&self.motivational_quote);
        out.push_str("\n\n---\n");
        out.push_str(SHARE_FOOTER);
        out
    }

    /// Text block with WhatsApp markup (bold headers, italic quote).
    #[must_use]
    pub fn whatsapp_text(&self) -> String {
        let mut out = String::with_capacity(256);
        out.push_str("🍽️ *");
        out.push_str(&self.title);
        out.push_str("*\n\n*INGREDIENTES:*\n");
        for ingredient in &self.ingredients {
            out.push_str("• ");
            out.push_str(ingredient);
            out.push('\n');
        }
        out.push_str("\n*INSTRUCCIONES:*\n");
        for (index, step) in self.instructions.iter().enumerate() {
            out.push_str(&(index + 1).to_string());
            out.push_str(". ");
            out.push_str(step);
            out.push('\n');
        }
        out.push_str("\n*💡 TIP NUTRICIONAL:*\n");
        out.push_str(&self.nutritional_tip);
        out.push_str("\n\n✨ _");
        out.push_str(&self.motivational_quote);
        out.push_str("_\n\n---\n🌟 ");
        out.push_str(SHARE_FOOTER);
        out
    }

    /// `wa.me` link that opens WhatsApp with the recipe prefilled.
    #[must_use]
    pub fn whatsapp_share_url(&self) -> String {
        format!(
            "https://wa.me/?text={}",
            urlencoding::encode(&self.whatsapp_text())
        )
    }
}
