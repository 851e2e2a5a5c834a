//! Error types for the recipe-generation pipeline.

use thiserror::Error;

/// Errors produced while requesting, transporting, or surfacing a recipe.
///
/// Each variant is constructed at its point of failure; nothing downstream
/// inspects error shapes at runtime.
#[derive(Debug, Error)]
pub enum RecipeError {
    /// The generation endpoint could not be reached (DNS, connection, timeout).
    #[error("could not reach the generation service: {0}")]
    Network(String),

    /// The generation endpoint answered with a non-success status.
    #[error("generation service returned status {status}: {body}")]
    Transport {
        /// HTTP status code of the reply.
        status: u16,
        /// Response body text, kept for diagnostics.
        body: String,
    },

    /// A successful response carried no extractable text.
    #[error("generation service reply contained no usable text")]
    EmptyReply,

    /// Invalid configuration or unsupported values.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Endpoint URL could not be parsed.
    #[error("invalid endpoint url: {0}")]
    Url(#[from] url::ParseError),

    /// Regex in the parser keyword table failed to compile.
    #[error("invalid parser pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Generation failed and the deployment surfaces errors instead of
    /// substituting a fallback recipe. Carries the user-facing message.
    #[error("{0}")]
    Generation(String),
}

impl RecipeError {
    /// Spanish message suitable for direct display in the UI.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::Network(_) => {
                "No pudimos conectar con el servicio de recetas. Revisa tu conexión e inténtalo de nuevo."
            }
            _ => "No pudimos generar tu receta en este momento. Por favor, inténtalo de nuevo.",
        }
    }
}

/// Convenience result alias for recipe operations.
pub type RecipeResult<T> = Result<T, RecipeError>;

/// Rejections raised by form validation before the core is invoked.
///
/// Display strings match the messages the form shows next to each field.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Contact name is blank.
    #[error("El nombre es requerido")]
    MissingName,
    /// Contact info is blank.
    #[error("El contacto es requerido")]
    MissingContact,
    /// Herbalife submission selected no objective.
    #[error("Selecciona al menos un objetivo")]
    NoObjectives,
    /// Herbalife submission selected no product.
    #[error("Selecciona al menos un producto Herbalife")]
    NoProducts,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_user_message_mentions_connectivity() {
        let err = RecipeError::Network("dns failure".to_string());
        assert!(err.user_message().contains("conectar"));
    }

    #[test]
    fn transport_display_carries_status_and_body() {
        let err = RecipeError::Transport {
            status: 502,
            body: "upstream down".to_string(),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("502"));
        assert!(rendered.contains("upstream down"));
    }
}
