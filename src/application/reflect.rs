//! Guided reflection use case

use crate::domain::{ReflectionWizard, Usage};
use crate::error::{JournalError, Result};
use crate::infrastructure::EntityStore;

/// What the user sees after finishing a reflection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insight {
    pub strength_name: String,
    pub usage: Usage,
    pub message: &'static str,
    pub moment: String,
    pub usage_answer: String,
    pub balance_answer: String,
}

/// Open a wizard on one strength
pub fn start_reflection(store: &EntityStore, strength_id: &str) -> Result<ReflectionWizard> {
    let strength = store
        .strength(strength_id)
        .ok_or_else(|| JournalError::StrengthNotFound(strength_id.to_string()))?;
    Ok(ReflectionWizard::new(strength))
}

/// Finish the wizard and append the reflection to its strength.
///
/// On error nothing is recorded and the wizard can still be used.
pub fn finish_reflection(store: &mut EntityStore, wizard: &ReflectionWizard) -> Result<Insight> {
    let reflection = wizard.finish(store.now())?;

    let insight = Insight {
        strength_name: wizard.strength_name().to_string(),
        usage: reflection.usage,
        message: reflection.usage.insight(),
        moment: reflection.moment.clone(),
        usage_answer: reflection.answer1.clone(),
        balance_answer: reflection.answer2.clone(),
    };

    store.record_reflection(wizard.strength_id(), reflection)?;
    Ok(insight)
}
