//! Guided reflection wizard
//!
//! A three-step linear sequence for one strength:
//!
//! 1. `RecallMoment` - describe a situation where the strength was used
//! 2. `AssessUsage` - how was it used?
//! 3. `PlanBalance` - what would balance future use?
//!
//! Steps move only one at a time. Finishing is allowed from the last step
//! once every answer is filled in; the wizard is dropped to cancel.

use crate::domain::strength::{balance_question, usage_question};
use crate::domain::{determine_usage, Reflection, Strength};
use crate::error::{JournalError, Result};
use chrono::{DateTime, Utc};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WizardStep {
    RecallMoment,
    AssessUsage,
    PlanBalance,
}

impl WizardStep {
    pub fn index(&self) -> usize {
        match self {
            WizardStep::RecallMoment => 0,
            WizardStep::AssessUsage => 1,
            WizardStep::PlanBalance => 2,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::RecallMoment => "Recall a Moment",
            WizardStep::AssessUsage => "Reflect on Your Use",
            WizardStep::PlanBalance => "Consider Future Balance",
        }
    }

    fn next(&self) -> Option<WizardStep> {
        match self {
            WizardStep::RecallMoment => Some(WizardStep::AssessUsage),
            WizardStep::AssessUsage => Some(WizardStep::PlanBalance),
            WizardStep::PlanBalance => None,
        }
    }

    fn previous(&self) -> Option<WizardStep> {
        match self {
            WizardStep::RecallMoment => None,
            WizardStep::AssessUsage => Some(WizardStep::RecallMoment),
            WizardStep::PlanBalance => Some(WizardStep::AssessUsage),
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            WizardStep::RecallMoment => "moment",
            WizardStep::AssessUsage => "usage",
            WizardStep::PlanBalance => "future balance",
        };
        f.write_str(label)
    }
}

/// In-progress reflection on one strength
#[derive(Debug, Clone)]
pub struct ReflectionWizard {
    strength_id: String,
    strength_name: String,
    step: WizardStep,
    moment: String,
    answer1: String,
    answer2: String,
}

impl ReflectionWizard {
    pub fn new(strength: &Strength) -> Self {
        ReflectionWizard {
            strength_id: strength.id.clone(),
            strength_name: strength.name.clone(),
            step: WizardStep::RecallMoment,
            moment: String::new(),
            answer1: String::new(),
            answer2: String::new(),
        }
    }

    pub fn strength_id(&self) -> &str {
        &self.strength_id
    }

    pub fn strength_name(&self) -> &str {
        &self.strength_name
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn is_last_step(&self) -> bool {
        self.step == WizardStep::PlanBalance
    }

    /// Prompt for the current step
    pub fn question(&self) -> String {
        match self.step {
            WizardStep::RecallMoment => format!(
                "Think of a time when you used your {} strength.",
                self.strength_name
            ),
            WizardStep::AssessUsage => usage_question(&self.strength_name),
            WizardStep::PlanBalance => balance_question(&self.strength_name),
        }
    }

    /// Current answer for the active step
    pub fn current_answer(&self) -> &str {
        match self.step {
            WizardStep::RecallMoment => &self.moment,
            WizardStep::AssessUsage => &self.answer1,
            WizardStep::PlanBalance => &self.answer2,
        }
    }

    /// Store the answer for the active step, replacing any previous text
    pub fn answer(&mut self, text: impl Into<String>) {
        let text = text.into();
        match self.step {
            WizardStep::RecallMoment => self.moment = text,
            WizardStep::AssessUsage => self.answer1 = text,
            WizardStep::PlanBalance => self.answer2 = text,
        }
    }

    /// Advance one step. Returns false on the last step.
    pub fn next(&mut self) -> bool {
        match self.step.next() {
            Some(step) => {
                tracing::debug!(strength = %self.strength_id, ?step, "reflection step forward");
                self.step = step;
                true
            }
            None => false,
        }
    }

    /// Go back one step. Returns false on the first step.
    pub fn previous(&mut self) -> bool {
        match self.step.previous() {
            Some(step) => {
                tracing::debug!(strength = %self.strength_id, ?step, "reflection step back");
                self.step = step;
                true
            }
            None => false,
        }
    }

    /// Steps whose answer is still blank
    pub fn missing_steps(&self) -> Vec<WizardStep> {
        [
            (WizardStep::RecallMoment, &self.moment),
            (WizardStep::AssessUsage, &self.answer1),
            (WizardStep::PlanBalance, &self.answer2),
        ]
        .into_iter()
        .filter(|(_, text)| text.trim().is_empty())
        .map(|(step, _)| step)
        .collect()
    }

    /// Build the finished reflection.
    ///
    /// The wizard is left untouched on error so the caller can keep
    /// collecting answers.
    pub fn finish(&self, now: DateTime<Utc>) -> Result<Reflection> {
        if !self.is_last_step() {
            return Err(JournalError::Wizard(format!(
                "cannot finish from step {} of 3; use 'next' to reach the last step",
                self.step.index() + 1
            )));
        }

        let missing = self.missing_steps();
        if !missing.is_empty() {
            return Err(JournalError::IncompleteReflection(missing));
        }

        Ok(Reflection {
            id: Uuid::new_v4().to_string(),
            moment: self.moment.clone(),
            question1: usage_question(&self.strength_name),
            question2: balance_question(&self.strength_name),
            answer1: self.answer1.clone(),
            answer2: self.answer2.clone(),
            usage: determine_usage(&self.answer1),
            timestamp: now,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ColorToken, Usage};

    fn bravery() -> Strength {
        Strength {
            id: "6".to_string(),
            name: "Bravery".to_string(),
            description: String::new(),
            color: ColorToken::Navy,
            activities: Vec::new(),
            reflections: Vec::new(),
        }
    }

    fn filled() -> ReflectionWizard {
        let mut wizard = ReflectionWizard::new(&bravery());
        wizard.answer("Spoke up in the meeting");
        wizard.next();
        wizard.answer("Maybe too much, I interrupted people");
        wizard.next();
        wizard.answer("Wait for a pause before speaking");
        wizard
    }

    #[test]
    fn test_linear_navigation() {
        let mut wizard = ReflectionWizard::new(&bravery());
        assert_eq!(wizard.step(), WizardStep::RecallMoment);
        assert!(!wizard.previous());

        assert!(wizard.next());
        assert_eq!(wizard.step(), WizardStep::AssessUsage);
        assert!(wizard.next());
        assert_eq!(wizard.step(), WizardStep::PlanBalance);
        assert!(!wizard.next());
        assert_eq!(wizard.step(), WizardStep::PlanBalance);

        assert!(wizard.previous());
        assert_eq!(wizard.step(), WizardStep::AssessUsage);
    }

    #[test]
    fn test_answers_survive_navigation() {
        let mut wizard = filled();
        wizard.previous();
        wizard.previous();
        assert_eq!(wizard.current_answer(), "Spoke up in the meeting");
    }

    #[test]
    fn test_questions_follow_step() {
        let mut wizard = ReflectionWizard::new(&bravery());
        assert!(wizard.question().contains("Think of a time"));
        wizard.next();
        assert_eq!(
            wizard.question(),
            "How did you use your Bravery in this situation?"
        );
    }

    #[test]
    fn test_finish_classifies_usage() {
        let reflection = filled().finish(Utc::now()).unwrap();
        assert_eq!(reflection.usage, Usage::Overuse);
        assert_eq!(reflection.moment, "Spoke up in the meeting");
        assert_eq!(
            reflection.question2,
            "What might help you balance your use of Bravery in the future?"
        );
    }

    #[test]
    fn test_finish_with_blank_final_answer() {
        let mut wizard = filled();
        wizard.answer("   ");
        match wizard.finish(Utc::now()) {
            Err(JournalError::IncompleteReflection(missing)) => {
                assert_eq!(missing, vec![WizardStep::PlanBalance]);
            }
            other => panic!("Expected IncompleteReflection, got {:?}", other),
        }
        assert_eq!(wizard.step(), WizardStep::PlanBalance);
    }

    #[test]
    fn test_finish_before_last_step() {
        let mut wizard = ReflectionWizard::new(&bravery());
        wizard.answer("Something");
        assert!(matches!(
            wizard.finish(Utc::now()),
            Err(JournalError::Wizard(_))
        ));
    }
}
