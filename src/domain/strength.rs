//! Character strengths and their reflections

use crate::domain::ColorToken;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Activities given to strengths the user adds
pub const GENERIC_ACTIVITIES: [&str; 3] = [
    "Explore this strength",
    "Practice in daily life",
    "Reflect on your progress",
];

/// How a strength was used in a reflected situation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Usage {
    Overuse,
    Underuse,
    Balanced,
}

impl Usage {
    /// Canned insight shown after a reflection
    pub fn insight(&self) -> &'static str {
        match self {
            Usage::Overuse => {
                "It seems you might be overusing this strength. Consider finding ways to moderate its use."
            }
            Usage::Underuse => {
                "You might be underusing this strength. Try to find more opportunities to apply it."
            }
            Usage::Balanced => {
                "Great job! You're using this strength in a balanced way. Keep it up!"
            }
        }
    }

    /// Plot score: underuse 1, balanced 2, overuse 3
    pub fn score(&self) -> u8 {
        match self {
            Usage::Underuse => 1,
            Usage::Balanced => 2,
            Usage::Overuse => 3,
        }
    }
}

impl fmt::Display for Usage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format!("{:?}", self).to_lowercase())
    }
}

/// Classify a usage answer.
///
/// Ordered first match on the lowercased text: overuse phrases win over
/// underuse phrases, and no match means balanced.
pub fn determine_usage(answer: &str) -> Usage {
    let lower = answer.to_lowercase();
    if lower.contains("too much") || lower.contains("overwhelmed") {
        Usage::Overuse
    } else if lower.contains("not enough") || lower.contains("could have done more") {
        Usage::Underuse
    } else {
        Usage::Balanced
    }
}

/// Second wizard question for a strength name
pub fn usage_question(name: &str) -> String {
    format!("How did you use your {} in this situation?", name)
}

/// Third wizard question for a strength name
pub fn balance_question(name: &str) -> String {
    format!(
        "What might help you balance your use of {} in the future?",
        name
    )
}

/// A completed self-assessment, owned by its strength
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reflection {
    pub id: String,
    pub moment: String,
    pub question1: String,
    pub question2: String,
    pub answer1: String,
    pub answer2: String,
    pub usage: Usage,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Strength {
    pub id: String,
    pub name: String,
    pub description: String,
    pub color: ColorToken,
    pub activities: Vec<String>,
    pub reflections: Vec<Reflection>,
}

#[derive(Debug, Clone, Default)]
pub struct StrengthInput {
    pub name: String,
    pub description: String,
}

impl StrengthInput {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        StrengthInput {
            name: name.into(),
            description: description.into(),
        }
    }
}

impl Strength {
    pub fn usage_question(&self) -> String {
        usage_question(&self.name)
    }

    pub fn balance_question(&self) -> String {
        balance_question(&self.name)
    }

    /// Reflection progress in percent, ten per reflection
    pub fn progress(&self) -> u8 {
        (self.reflections.len().saturating_mul(10)).min(100) as u8
    }

    /// Usage score per reflection, oldest first
    pub fn usage_trend(&self) -> Vec<(NaiveDate, u8)> {
        self.reflections
            .iter()
            .map(|r| (r.timestamp.date_naive(), r.usage.score()))
            .collect()
    }

    /// Activities worth suggesting: only when the latest reflection was underuse
    pub fn suggested_activities(&self) -> Option<&[String]> {
        match self.reflections.last() {
            Some(r) if r.usage == Usage::Underuse => Some(&self.activities),
            _ => None,
        }
    }
}
