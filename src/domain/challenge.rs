//! Weekly challenges tied to strengths

use crate::domain::Strength;
use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

/// A time-boxed suggested action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Challenge {
    pub id: String,
    /// Not checked against the strength list; may dangle
    pub strength_id: String,
    pub description: String,
    pub completed: bool,
    pub due: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct ChallengeInput {
    pub strength_id: String,
    pub description: String,
}

impl ChallengeInput {
    pub fn new(strength_id: impl Into<String>, description: impl Into<String>) -> Self {
        ChallengeInput {
            strength_id: strength_id.into(),
            description: description.into(),
        }
    }
}

impl Challenge {
    pub fn new(input: ChallengeInput, now: DateTime<Utc>, window: Duration) -> Self {
        Challenge {
            id: Uuid::new_v4().to_string(),
            strength_id: input.strength_id,
            description: input.description,
            completed: false,
            due: now + window,
        }
    }

    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        !self.completed && now > self.due
    }
}

/// Build one challenge per strength, seeded from its first activity.
pub fn generate_weekly(
    strengths: &[Strength],
    now: DateTime<Utc>,
    window: Duration,
) -> Vec<Challenge> {
    strengths
        .iter()
        .map(|strength| {
            let description = match strength.activities.first() {
                Some(activity) => {
                    format!("Practice {} this week: {}", strength.name, activity)
                }
                None => format!("Practice {} this week", strength.name),
            };
            Challenge::new(
                ChallengeInput::new(strength.id.clone(), description),
                now,
                window,
            )
        })
        .collect()
}
