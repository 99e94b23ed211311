//! Journaled moments

use crate::domain::ImageRef;
use crate::error::{JournalError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Mood score from 1 (low) to 5 (high)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Mood(u8);

impl Mood {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(score: u8) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&score) {
            Ok(Mood(score))
        } else {
            Err(JournalError::InvalidMood(score))
        }
    }

    pub fn score(&self) -> u8 {
        self.0
    }
}

impl Default for Mood {
    fn default() -> Self {
        Mood(3)
    }
}

impl TryFrom<u8> for Mood {
    type Error = JournalError;

    fn try_from(score: u8) -> Result<Self> {
        Mood::new(score)
    }
}

impl From<Mood> for u8 {
    fn from(mood: Mood) -> u8 {
        mood.0
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}

/// A journaled event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Moment {
    pub id: String,
    pub title: String,
    /// What happened
    pub description: String,
    /// Why it was meaningful
    pub reflection: String,
    pub image: ImageRef,
    pub values: Vec<String>,
    pub strengths: Vec<String>,
    pub timestamp: DateTime<Utc>,
    pub mood: Mood,
    /// Seed entries are shown but never edited
    pub is_default: bool,
}

/// Fields submitted when adding or editing a moment
#[derive(Debug, Clone, Default)]
pub struct MomentInput {
    pub title: String,
    pub description: String,
    pub reflection: String,
    /// A newly picked image; `None` keeps the current one on edit
    pub image: Option<ImageRef>,
    pub values: Vec<String>,
    pub strengths: Vec<String>,
    pub mood: Option<Mood>,
}

impl MomentInput {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        reflection: impl Into<String>,
    ) -> Self {
        MomentInput {
            title: title.into(),
            description: description.into(),
            reflection: reflection.into(),
            ..Default::default()
        }
    }

    /// Pre-fill an edit form from an existing moment. The image is left
    /// unset so an edit keeps the stored one.
    pub fn from_moment(moment: &Moment) -> Self {
        MomentInput {
            title: moment.title.clone(),
            description: moment.description.clone(),
            reflection: moment.reflection.clone(),
            image: None,
            values: moment.values.clone(),
            strengths: moment.strengths.clone(),
            mood: Some(moment.mood),
        }
    }
}
