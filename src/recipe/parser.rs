//! Heuristic parser for generated recipe text.
//!
//! The remote service replies with free-form Spanish text. A single pass
//! over its lines drives a small state machine: keyword triggers open a
//! section, following lines feed it. Keyword lists come from
//! [`ParserConfig`], so they are configuration, not a format guarantee.
//! The parser never fails; fields the text does not yield get fixed
//! defaults.

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::prompt::COACH_QUOTE;
use super::record::RecipeRecord;

/// Default title when none could be located.
const DEFAULT_TITLE: &str = "Receta Nutritiva Especial";
/// Default single-entry ingredient list.
const DEFAULT_INGREDIENT: &str = "Ingredientes según disponibilidad";
/// Default single-entry instruction list.
const DEFAULT_INSTRUCTION: &str = "Combinar ingredientes según preferencias";
/// Default nutritional tip.
const DEFAULT_TIP: &str = "Esta receta aporta nutrientes esenciales para tu bienestar diario.";

/// Section the parser is currently filling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Section {
    Ingredients,
    Instructions,
    Tip,
    Quote,
}

/// Keyword lists that map reply lines to sections.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Substrings that open the ingredients section.
    pub ingredient_keywords: Vec<String>,
    /// Substrings that open the instructions section.
    pub instruction_keywords: Vec<String>,
    /// Substrings that open the nutritional-tip section.
    pub tip_keywords: Vec<String>,
    /// Substrings that open the motivational-quote section.
    pub quote_keywords: Vec<String>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        let list = |words: &[&str]| words.iter().map(ToString::to_string).collect();
        Self {
            ingredient_keywords: list(&["ingredientes", "materiales"]),
            instruction_keywords: list(&["instrucciones", "preparación", "pasos"]),
            tip_keywords: list(&["tip", "consejo", "nutricional"]),
            quote_keywords: list(&["motivadora", "transformación", "coach"]),
        }
    }
}

/// Line-oriented section parser producing a fully populated [`RecipeRecord`].
pub struct ResponseParser {
    rules: Vec<(Vec<String>, Section)>,
    marker: Regex,
    heading: Regex,
}

impl ResponseParser {
    /// Build a parser from a keyword table.
    ///
    /// # Errors
    /// Returns an error if the marker patterns fail to compile.
    pub fn new(config: ParserConfig) -> Result<Self, regex::Error> {
        let lower = |words: Vec<String>| {
            words
                .into_iter()
                .map(|w| w.to_lowercase())
                .collect::<Vec<_>>()
        };
        let rules = vec![
            (lower(config.ingredient_keywords), Section::Ingredients),
            (lower(config.instruction_keywords), Section::Instructions),
            (lower(config.tip_keywords), Section::Tip),
            (lower(config.quote_keywords), Section::Quote),
        ];

        Ok(Self {
            rules,
            marker: Regex::new(r"^(?:[-•*]\s*|\d+[.)]\s*)+")?,
            heading: Regex::new(r"^(?:#+\s*|\d+[.)]\s*)+")?,
        })
    }

    /// Build a parser with the default keyword table.
    ///
    /// # Errors
    /// Returns an error if the marker patterns fail to compile.
    pub fn with_defaults() -> Result<Self, regex::Error> {
        Self::new(ParserConfig::default())
    }

    /// Parse a raw reply into a recipe. Never fails; unlocatable fields
    /// receive their fixed defaults.
    #[must_use]
    pub fn parse(&self, raw: &str) -> RecipeRecord {
        let mut title: Option<String> = None;
        let mut ingredients: Vec<String> = Vec::new();
        let mut instructions: Vec<String> = Vec::new();
        let mut tip = String::new();
        let mut quote = String::new();
        let mut section: Option<Section> = None;

        for line in raw.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let lowered = line.to_lowercase();

            if let Some(matched) = self.match_section(&lowered) {
                section = Some(matched);
                // Content trailing the heading colon belongs to the new
                // section ("Tip nutricional: Rico en potasio").
                if let Some((_, rest)) = line.split_once(':') {
                    let rest = rest.trim();
                    if !rest.is_empty() {
                        push_content(matched, rest, &mut ingredients, &mut instructions, &mut tip, &mut quote);
                    }
                }
                continue;
            }

            if title.is_none() {
                title = Some(self.heading.replace(line, "").trim().to_string());
                continue;
            }

            if let Some(current) = section {
                let content = self.marker.replace(line, "");
                let content = content.trim();
                if !content.is_empty() {
                    push_content(current, content, &mut ingredients, &mut instructions, &mut tip, &mut quote);
                }
            }
        }

        let title = match title {
            Some(t) if !t.is_empty() => t,
            _ => DEFAULT_TITLE.to_string(),
        };
        if ingredients.is_empty() {
            ingredients.push(DEFAULT_INGREDIENT.to_string());
        }
        if instructions.is_empty() {
            instructions.push(DEFAULT_INSTRUCTION.to_string());
        }
        if tip.is_empty() {
            tip = DEFAULT_TIP.to_string();
        }
        if quote.is_empty() {
            quote = COACH_QUOTE.to_string();
        }

        RecipeRecord::new(title, ingredients, instructions, tip, quote)
    }

    fn match_section(&self, lowered_line: &str) -> Option<Section> {
        self.rules
            .iter()
            .find(|(keywords, _)| keywords.iter().any(|k| lowered_line.contains(k.as_str())))
            .map(|(_, section)| *section)
    }
}

fn push_content(
    section: Section,
    content: &str,
    ingredients: &mut Vec<String>,
    instructions: &mut Vec<String>,
    tip: &mut String,
    quote: &mut String,
) {
    match section {
        Section::Ingredients => ingredients.push(content.to_string()),
        Section::Instructions => instructions.push(content.to_string()),
        Section::Tip => {
            if !tip.is_empty() {
                tip.push(' ');
            }
            tip.push_str(content);
        }
        Section::Quote => {
            let cleaned: String = content.chars().filter(|c| !matches!(c, '"' | '“' | '”')).collect();
            let cleaned = cleaned.trim();
            if cleaned.is_empty() {
                return;
            }
            if !quote.is_empty() {
                quote.push(' ');
            }
            quote.push_str(cleaned);
        }
    }
}
