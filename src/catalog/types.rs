use serde::{Deserialize, Serialize};

/// A creature record merged from both lookups.
///
/// `description` stays empty until the description step fills it in.
/// Published entities always carry a non-empty description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub id: u32,
    pub name: String,
    pub image_url: String,
    pub height: u32,
    pub weight: u32,
    #[serde(default)]
    pub description: String,
}

impl Entity {
    /// Returns the entity with its description attached.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// One language-tagged description snippet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedDescriptionEntry {
    pub text: String,
    pub language_code: String,
}

impl LocalizedDescriptionEntry {
    pub fn new(text: impl Into<String>, language_code: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            language_code: language_code.into(),
        }
    }
}

/// Primary lookup response body.
#[derive(Debug, Deserialize)]
pub(crate) struct EntityRecord {
    id: u32,
    name: String,
    sprites: SpriteSet,
    height: u32,
    weight: u32,
}

#[derive(Debug, Deserialize)]
struct SpriteSet {
    front_default: Option<String>,
}

impl From<EntityRecord> for Entity {
    fn from(record: EntityRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            image_url: record.sprites.front_default.unwrap_or_default(),
            height: record.height,
            weight: record.weight,
            description: String::new(),
        }
    }
}

/// Description lookup response body.
#[derive(Debug, Deserialize)]
pub(crate) struct SpeciesRecord {
    flavor_text_entries: Vec<FlavorTextRecord>,
}

#[derive(Debug, Deserialize)]
struct FlavorTextRecord {
    flavor_text: String,
    language: NamedResource,
}

#[derive(Debug, Deserialize)]
struct NamedResource {
    name: String,
}

impl SpeciesRecord {
    pub(crate) fn into_entries(self) -> Vec<LocalizedDescriptionEntry> {
        self.flavor_text_entries
            .into_iter()
            .map(|entry| LocalizedDescriptionEntry {
                text: entry.flavor_text,
                language_code: entry.language.name,
            })
            .collect()
    }
}
