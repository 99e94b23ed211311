//! Personal values

use crate::domain::{ColorToken, Icon, ImageRef};
use chrono::{DateTime, Utc};

/// A guiding principle with reflection prompts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Value {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image: ImageRef,
    pub timestamp: DateTime<Utc>,
    pub questions: [String; 3],
    pub category: Option<String>,
    pub color: Option<ColorToken>,
    pub icon: Option<Icon>,
}

/// Fields submitted when adding or editing a value
#[derive(Debug, Clone, Default)]
pub struct ValueInput {
    pub name: String,
    pub description: String,
    pub image: Option<ImageRef>,
    pub questions: Option<[String; 3]>,
    pub category: Option<String>,
    pub color: Option<ColorToken>,
    pub icon: Option<Icon>,
}

impl ValueInput {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        ValueInput {
            name: name.into(),
            description: description.into(),
            ..Default::default()
        }
    }
}

/// Reflection questions for a value that was authored without any
pub fn default_questions(name: &str) -> [String; 3] {
    [
        format!("What does {} mean to you?", name),
        format!("When did you last act on {}?", name),
        format!("How could you honor {} more often?", name),
    ]
}
