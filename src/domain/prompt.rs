//! Journaling prompts

use crate::domain::ImageRef;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which tab a prompt belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptKind {
    /// Suggests a moment to record
    Moment,
    /// Suggests a situation that reveals a value
    Value,
}

impl FromStr for PromptKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "moment" | "moments" => Ok(PromptKind::Moment),
            "value" | "values" => Ok(PromptKind::Value),
            _ => Err(format!(
                "Invalid prompt kind: '{}'. Valid kinds are: moment, value",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    pub id: String,
    pub kind: PromptKind,
    pub title: String,
    pub description: String,
    pub image: ImageRef,
    pub question: String,
}
