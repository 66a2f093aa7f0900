//! Picks one description out of a localized set.

use thiserror::Error;

use super::types::LocalizedDescriptionEntry;

/// Text used when no entry matches the requested language.
pub const FALLBACK_DESCRIPTION: &str = "description unavailable";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DescriptionError {
    #[error("No description for language '{language}'")]
    NoMatch { language: String },
}

/// Pure description selection by language code.
pub struct DescriptionSelector;

impl DescriptionSelector {
    /// First entry whose language code equals `language_code` exactly.
    pub fn try_select<'a>(
        entries: &'a [LocalizedDescriptionEntry],
        language_code: &str,
    ) -> Result<&'a str, DescriptionError> {
        entries
            .iter()
            .find(|entry| entry.language_code == language_code)
            .map(|entry| entry.text.as_str())
            .ok_or_else(|| DescriptionError::NoMatch {
                language: language_code.to_string(),
            })
    }

    /// Like [`try_select`](Self::try_select), recovering with
    /// [`FALLBACK_DESCRIPTION`].
    pub fn select(entries: &[LocalizedDescriptionEntry], language_code: &str) -> String {
        match Self::try_select(entries, language_code) {
            Ok(text) => text.to_string(),
            Err(err) => {
                tracing::debug!(error = %err, entries = entries.len(), "Using fallback description");
                FALLBACK_DESCRIPTION.to_string()
            }
        }
    }
}
