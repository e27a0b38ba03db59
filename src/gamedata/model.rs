//! Game-definition datasets and the cross-dataset lookup index.

use std::collections::HashMap;

use serde::Deserialize;

use crate::error::LoadError;

/// One furniture definition
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FurniInfo {
    pub id: i64,
    #[serde(rename = "classname")]
    pub class_name: String,
    #[serde(default)]
    pub revision: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize)]
struct FurniTypeList {
    #[serde(rename = "furnitype", default)]
    furni_types: Vec<FurniInfo>,
}

#[derive(Debug, Deserialize)]
struct FurniDataDocument {
    #[serde(rename = "roomitemtypes")]
    room_item_types: FurniTypeList,
    #[serde(rename = "wallitemtypes")]
    wall_item_types: FurniTypeList,
}

/// Furniture definition dataset, parsed from the hotel's furnidata document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FurniData {
    pub room_items: Vec<FurniInfo>,
    pub wall_items: Vec<FurniInfo>,
}

impl FurniData {
    /// Parse furnidata from its JSON document form.
    ///
    /// # Arguments
    ///
    /// * `json` - The furnidata document body
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let document: FurniDataDocument =
            serde_json::from_str(json).map_err(|e| LoadError::Parse {
                dataset: "furni",
                message: e.to_string(),
            })?;

        Ok(Self {
            room_items: document.room_item_types.furni_types,
            wall_items: document.wall_item_types.furni_types,
        })
    }

    /// Iterate over all furniture definitions, room items first
    pub fn iter(&self) -> impl Iterator<Item = &FurniInfo> {
        self.room_items.iter().chain(self.wall_items.iter())
    }

    /// Total number of furniture definitions
    pub fn len(&self) -> usize {
        self.room_items.len() + self.wall_items.len()
    }

    /// Whether the dataset holds no definitions
    pub fn is_empty(&self) -> bool {
        self.room_items.is_empty() && self.wall_items.is_empty()
    }
}

/// Localized text definitions, parsed from the hotel's `key=value` document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExternalTexts {
    entries: HashMap<String, String>,
}

impl ExternalTexts {
    /// Parse external texts from their line-oriented `key=value` form.
    ///
    /// Lines without a `=` separator are skipped; values may contain further
    /// `=` characters.
    pub fn from_text(text: &str) -> Self {
        let entries = text
            .lines()
            .filter_map(|line| {
                let (key, value) = line.split_once('=')?;
                Some((key.trim().to_string(), value.to_string()))
            })
            .collect();

        Self { entries }
    }

    /// Look up the text for a key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of text entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dataset holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Cross-dataset lookup index joining furniture definitions with their
/// localized display names.
///
/// Built exactly once per load generation, only after both datasets are
/// present. External texts may override a furni's display name via a
/// `furni.{classname}.name` entry; otherwise the furnidata name is used.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FurniIndex {
    names: HashMap<String, String>,
}

impl FurniIndex {
    /// Build the index from both required datasets.
    ///
    /// # Arguments
    ///
    /// * `furni` - Furniture definitions
    /// * `texts` - Localized text definitions
    pub fn build(furni: &FurniData, texts: &ExternalTexts) -> Self {
        let names = furni
            .iter()
            .map(|info| {
                let key = format!("furni.{}.name", info.class_name);
                let name = texts
                    .get(&key)
                    .map(str::to_string)
                    .unwrap_or_else(|| info.name.clone());
                (info.class_name.clone(), name)
            })
            .collect();

        Self { names }
    }

    /// Display name for a furni class, if known
    pub fn display_name(&self, class_name: &str) -> Option<&str> {
        self.names.get(class_name).map(String::as_str)
    }

    /// Number of indexed furni classes
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the index holds no entries
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
