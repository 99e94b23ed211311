//! Seed catalog
//!
//! The values, strengths, welcome moment and prompts every store starts
//! from. A copy is embedded at build time; a config may point at a
//! replacement file with the same schema.

use crate::domain::{
    ColorToken, Icon, ImageRef, Moment, Mood, Prompt, Strength, Value,
};
use crate::error::{JournalError, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Schema version this build understands
pub const SCHEMA_VERSION: u32 = 1;

const BUILTIN_CATALOG: &str = include_str!("../../seed/catalog.toml");

#[derive(Debug, Clone, Deserialize)]
pub struct SeedCatalog {
    pub schema_version: u32,
    #[serde(default)]
    pub values: Vec<SeedValue>,
    #[serde(default)]
    pub strengths: Vec<SeedStrength>,
    #[serde(default)]
    pub moments: Vec<SeedMoment>,
    #[serde(default)]
    pub prompts: Vec<Prompt>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedValue {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image: ImageRef,
    pub questions: [String; 3],
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub color: Option<ColorToken>,
    #[serde(default)]
    pub icon: Option<Icon>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedStrength {
    pub id: String,
    pub name: String,
    pub description: String,
    pub color: ColorToken,
    #[serde(default)]
    pub activities: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedMoment {
    pub id: String,
    pub title: String,
    pub description: String,
    pub reflection: String,
    pub image: ImageRef,
    #[serde(default)]
    pub values: Vec<String>,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub mood: Mood,
    #[serde(default)]
    pub is_default: bool,
}

impl SeedCatalog {
    /// The catalog compiled into the binary
    pub fn builtin() -> Result<Self> {
        Self::parse(BUILTIN_CATALOG)
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            JournalError::Catalog(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self> {
        let catalog: SeedCatalog = toml::from_str(contents)
            .map_err(|e| JournalError::Catalog(format!("Failed to parse catalog: {}", e)))?;
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<()> {
        if self.schema_version != SCHEMA_VERSION {
            return Err(JournalError::Catalog(format!(
                "Unsupported schema_version {} (this build reads version {})",
                self.schema_version, SCHEMA_VERSION
            )));
        }

        check_unique("values", self.values.iter().map(|v| v.id.as_str()))?;
        check_unique("strengths", self.strengths.iter().map(|s| s.id.as_str()))?;
        check_unique("moments", self.moments.iter().map(|m| m.id.as_str()))?;
        check_unique("prompts", self.prompts.iter().map(|p| p.id.as_str()))?;

        Ok(())
    }

    /// Materialize seed values, stamped with `now`
    pub fn values(&self, now: DateTime<Utc>) -> Vec<Value> {
        self.values
            .iter()
            .map(|v| Value {
                id: v.id.clone(),
                name: v.name.clone(),
                description: v.description.clone(),
                image: v.image.clone(),
                timestamp: now,
                questions: v.questions.clone(),
                category: v.category.clone(),
                color: v.color,
                icon: v.icon,
            })
            .collect()
    }

    pub fn strengths(&self) -> Vec<Strength> {
        self.strengths
            .iter()
            .map(|s| Strength {
                id: s.id.clone(),
                name: s.name.clone(),
                description: s.description.clone(),
                color: s.color,
                activities: s.activities.clone(),
                reflections: Vec::new(),
            })
            .collect()
    }

    pub fn moments(&self, now: DateTime<Utc>) -> Vec<Moment> {
        self.moments
            .iter()
            .map(|m| Moment {
                id: m.id.clone(),
                title: m.title.clone(),
                description: m.description.clone(),
                reflection: m.reflection.clone(),
                image: m.image.clone(),
                values: m.values.clone(),
                strengths: m.strengths.clone(),
                timestamp: now,
                mood: m.mood,
                is_default: m.is_default,
            })
            .collect()
    }
}

fn check_unique<'a>(collection: &str, ids: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(JournalError::Catalog(format!(
                "Duplicate id '{}' in {}",
                id, collection
            )));
        }
    }
    Ok(())
}
