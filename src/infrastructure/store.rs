//! In-memory journal store
//!
//! Holds the four collections (values, moments, strengths, challenges) and
//! every operation that mutates them. Nothing outlives the process: a new
//! store always starts from the seed catalog.

use crate::domain::value::default_questions;
use crate::domain::strength::GENERIC_ACTIVITIES;
use crate::domain::{
    generate_weekly, Challenge, ChallengeInput, Clock, ColorToken, Icon, ImageRef, Moment,
    MomentInput, Mood, Prompt, PromptKind, Reflection, Strength, StrengthInput, SystemClock,
    Value, ValueInput,
};
use crate::error::{JournalError, Result};
use crate::infrastructure::{Config, SeedCatalog};
use chrono::Duration;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Tunables the store applies to submissions
#[derive(Debug, Clone)]
pub struct StoreSettings {
    pub default_mood: Mood,
    pub challenge_window: Duration,
    pub moment_placeholder: ImageRef,
    pub value_placeholder: ImageRef,
}

impl Default for StoreSettings {
    fn default() -> Self {
        StoreSettings::from(&Config::default())
    }
}

impl From<&Config> for StoreSettings {
    fn from(config: &Config) -> Self {
        StoreSettings {
            default_mood: config.default_mood(),
            challenge_window: config.challenge_window(),
            moment_placeholder: config.moment_placeholder(),
            value_placeholder: config.value_placeholder(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Added,
    Updated,
}

/// User-facing confirmation of an add or update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub body: String,
}

impl Notice {
    fn new(kind: NoticeKind, entity: &str) -> Self {
        let (title, body) = match kind {
            NoticeKind::Added => (
                format!("{} added", entity),
                format!(
                    "Your new {} has been successfully added.",
                    entity.to_lowercase()
                ),
            ),
            NoticeKind::Updated => (
                format!("{} updated", entity),
                format!(
                    "Your {} has been successfully updated.",
                    entity.to_lowercase()
                ),
            ),
        };
        Notice { kind, title, body }
    }
}

/// Everything a moment links to that still exists
#[derive(Debug)]
pub struct MomentLinks<'a> {
    pub values: Vec<&'a Value>,
    pub strengths: Vec<&'a Strength>,
}

#[derive(Debug)]
pub struct EntityStore {
    values: Vec<Value>,
    moments: Vec<Moment>,
    strengths: Vec<Strength>,
    challenges: Vec<Challenge>,
    prompts: Vec<Prompt>,
    notices: Vec<Notice>,
    settings: StoreSettings,
    clock: Box<dyn Clock>,
}

impl EntityStore {
    /// Build a store from a seed catalog, then generate the first batch of
    /// weekly challenges
    pub fn new(catalog: &SeedCatalog, settings: StoreSettings, clock: Box<dyn Clock>) -> Self {
        let now = clock.now();
        let mut store = EntityStore {
            values: catalog.values(now),
            moments: catalog.moments(now),
            strengths: catalog.strengths(),
            challenges: Vec::new(),
            prompts: catalog.prompts.clone(),
            notices: Vec::new(),
            settings,
            clock,
        };
        store.ensure_weekly_challenges();
        info!(
            values = store.values.len(),
            strengths = store.strengths.len(),
            moments = store.moments.len(),
            "journal store seeded"
        );
        store
    }

    /// Build a store from config: its catalog override or the built-in one
    pub fn from_config(config: &Config) -> Result<Self> {
        let catalog = match &config.catalog {
            Some(path) => SeedCatalog::load_from_file(path)?,
            None => SeedCatalog::builtin()?,
        };
        Ok(Self::new(
            &catalog,
            StoreSettings::from(config),
            Box::new(SystemClock),
        ))
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Newest user moments first, seed moments last
    pub fn moments(&self) -> &[Moment] {
        &self.moments
    }

    pub fn strengths(&self) -> &[Strength] {
        &self.strengths
    }

    /// Every challenge, including ones whose strength is unknown
    pub fn challenges(&self) -> &[Challenge] {
        &self.challenges
    }

    pub fn prompts(&self, kind: Option<PromptKind>) -> Vec<&Prompt> {
        self.prompts
            .iter()
            .filter(|p| kind.map_or(true, |k| p.kind == k))
            .collect()
    }

    pub fn value(&self, id: &str) -> Option<&Value> {
        self.values.iter().find(|v| v.id == id)
    }

    pub fn moment(&self, id: &str) -> Option<&Moment> {
        self.moments.iter().find(|m| m.id == id)
    }

    pub fn strength(&self, id: &str) -> Option<&Strength> {
        self.strengths.iter().find(|s| s.id == id)
    }

    pub fn challenge(&self, id: &str) -> Option<&Challenge> {
        self.challenges.iter().find(|c| c.id == id)
    }

    pub fn now(&self) -> chrono::DateTime<chrono::Utc> {
        self.clock.now()
    }

    /// Drain pending notices, oldest first
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    fn notify(&mut self, notice: Notice) {
        info!(title = %notice.title, "{}", notice.body);
        self.notices.push(notice);
    }

    /// Add a new moment, or replace the moment named by `editing`.
    ///
    /// An edit keeps the original id and timestamp, and keeps the stored
    /// image unless the input carries a new one. Default moments are never
    /// edited.
    pub fn add_or_edit_moment(
        &mut self,
        input: MomentInput,
        editing: Option<&str>,
    ) -> Result<&Moment> {
        let mood = input.mood.unwrap_or(self.settings.default_mood);

        match editing {
            Some(id) => {
                let index = self
                    .moments
                    .iter()
                    .position(|m| m.id == id)
                    .ok_or_else(|| JournalError::MomentNotFound(id.to_string()))?;

                let existing = &self.moments[index];
                if existing.is_default {
                    warn!(moment = %id, "refused edit of default moment");
                    return Err(JournalError::DefaultMomentLocked(id.to_string()));
                }

                let updated = Moment {
                    id: existing.id.clone(),
                    title: input.title,
                    description: input.description,
                    reflection: input.reflection,
                    image: input.image.unwrap_or_else(|| existing.image.clone()),
                    values: input.values,
                    strengths: input.strengths,
                    timestamp: existing.timestamp,
                    mood,
                    is_default: false,
                };
                self.moments[index] = updated;
                self.notify(Notice::new(NoticeKind::Updated, "Moment"));
                Ok(&self.moments[index])
            }
            None => {
                let moment = Moment {
                    id: Uuid::new_v4().to_string(),
                    title: input.title,
                    description: input.description,
                    reflection: input.reflection,
                    image: input
                        .image
                        .unwrap_or_else(|| self.settings.moment_placeholder.clone()),
                    values: input.values,
                    strengths: input.strengths,
                    timestamp: self.clock.now(),
                    mood,
                    is_default: false,
                };
                self.moments.insert(0, moment);
                self.notify(Notice::new(NoticeKind::Added, "Moment"));
                Ok(&self.moments[0])
            }
        }
    }

    /// Add a new value, or replace the value named by `editing`.
    ///
    /// Color and icon are picked at random for new values that do not name
    /// them; an edit keeps whatever the input leaves unset.
    pub fn add_or_edit_value(&mut self, input: ValueInput, editing: Option<&str>) -> Result<&Value> {
        match editing {
            Some(id) => {
                let index = self
                    .values
                    .iter()
                    .position(|v| v.id == id)
                    .ok_or_else(|| JournalError::ValueNotFound(id.to_string()))?;

                let existing = &self.values[index];
                let updated = Value {
                    id: existing.id.clone(),
                    name: input.name,
                    description: input.description,
                    image: input.image.unwrap_or_else(|| existing.image.clone()),
                    timestamp: existing.timestamp,
                    questions: input
                        .questions
                        .unwrap_or_else(|| existing.questions.clone()),
                    category: input.category.or_else(|| existing.category.clone()),
                    color: input.color.or(existing.color),
                    icon: input.icon.or(existing.icon),
                };
                self.values[index] = updated;
                self.notify(Notice::new(NoticeKind::Updated, "Value"));
                Ok(&self.values[index])
            }
            None => {
                let questions = input
                    .questions
                    .unwrap_or_else(|| default_questions(&input.name));
                let value = Value {
                    id: Uuid::new_v4().to_string(),
                    name: input.name,
                    description: input.description,
                    image: input
                        .image
                        .unwrap_or_else(|| self.settings.value_placeholder.clone()),
                    timestamp: self.clock.now(),
                    questions,
                    category: input.category,
                    color: Some(input.color.unwrap_or_else(ColorToken::random)),
                    icon: Some(input.icon.unwrap_or_else(Icon::random)),
                };
                self.values.push(value);
                self.notify(Notice::new(NoticeKind::Added, "Value"));
                Ok(&self.values[self.values.len() - 1])
            }
        }
    }

    /// Replace a value's image. Returns false, changing nothing, when no
    /// value has this id.
    pub fn update_value_image(&mut self, id: &str, image: ImageRef) -> bool {
        match self.values.iter_mut().find(|v| v.id == id) {
            Some(value) => {
                debug!(value = %id, image = %image, "value image replaced");
                value.image = image;
                true
            }
            None => false,
        }
    }

    pub fn add_new_strength(&mut self, input: StrengthInput) -> &Strength {
        let strength = Strength {
            id: Uuid::new_v4().to_string(),
            name: input.name,
            description: input.description,
            color: ColorToken::random(),
            activities: GENERIC_ACTIVITIES.iter().map(|a| a.to_string()).collect(),
            reflections: Vec::new(),
        };
        self.strengths.push(strength);
        self.notify(Notice::new(NoticeKind::Added, "Strength"));
        &self.strengths[self.strengths.len() - 1]
    }

    /// Append a challenge. The strength id is not checked; see
    /// `active_challenges` for the filtered view.
    pub fn add_new_challenge(&mut self, input: ChallengeInput) -> &Challenge {
        if self.strength(&input.strength_id).is_none() {
            warn!(strength = %input.strength_id, "challenge added for unknown strength");
        }
        let challenge = Challenge::new(input, self.clock.now(), self.settings.challenge_window);
        self.challenges.push(challenge);
        self.notify(Notice::new(NoticeKind::Added, "Challenge"));
        &self.challenges[self.challenges.len() - 1]
    }

    /// Flip a challenge's completion. Returns the new state, or `None` when
    /// no challenge has this id.
    pub fn toggle_challenge_completion(&mut self, id: &str) -> Option<bool> {
        let challenge = self.challenges.iter_mut().find(|c| c.id == id)?;
        challenge.completed = !challenge.completed;
        debug!(challenge = %id, completed = challenge.completed, "challenge toggled");
        Some(challenge.completed)
    }

    /// Append a finished reflection to its strength
    pub fn record_reflection(&mut self, strength_id: &str, reflection: Reflection) -> Result<&Strength> {
        let strength = self
            .strengths
            .iter_mut()
            .find(|s| s.id == strength_id)
            .ok_or_else(|| JournalError::StrengthNotFound(strength_id.to_string()))?;
        info!(strength = %strength_id, usage = %reflection.usage, "reflection recorded");
        strength.reflections.push(reflection);
        Ok(&*strength)
    }

    /// Generate one challenge per strength when there are no challenges.
    /// Returns how many were generated.
    pub fn ensure_weekly_challenges(&mut self) -> usize {
        if !self.challenges.is_empty() {
            return 0;
        }
        self.challenges = generate_weekly(
            &self.strengths,
            self.clock.now(),
            self.settings.challenge_window,
        );
        debug!(count = self.challenges.len(), "weekly challenges generated");
        self.challenges.len()
    }

    /// Challenges paired with their strength. Challenges whose strength is
    /// unknown are skipped.
    pub fn active_challenges(&self) -> Vec<(&Challenge, &Strength)> {
        self.challenges
            .iter()
            .filter_map(|c| match self.strength(&c.strength_id) {
                Some(s) => Some((c, s)),
                None => {
                    warn!(challenge = %c.id, strength = %c.strength_id, "skipping dangling challenge");
                    None
                }
            })
            .collect()
    }

    /// Resolve a moment's value and strength ids, skipping unknown ones
    pub fn moment_links(&self, id: &str) -> Result<MomentLinks<'_>> {
        let moment = self
            .moment(id)
            .ok_or_else(|| JournalError::MomentNotFound(id.to_string()))?;
        Ok(MomentLinks {
            values: moment.values.iter().filter_map(|v| self.value(v)).collect(),
            strengths: moment
                .strengths
                .iter()
                .filter_map(|s| self.strength(s))
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FixedClock, ReflectionWizard, Usage};
    use chrono::{TimeZone, Utc};

    fn now() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 17, 12, 0, 0).unwrap()
    }

    fn store() -> EntityStore {
        let catalog = SeedCatalog::builtin().unwrap();
        EntityStore::new(
            &catalog,
            StoreSettings::default(),
            Box::new(FixedClock(now())),
        )
    }

    fn add_moment(store: &mut EntityStore, title: &str) -> String {
        store
            .add_or_edit_moment(MomentInput::new(title, "what", "why"), None)
            .unwrap()
            .id
            .clone()
    }

    #[test]
    fn test_seeded_collections() {
        let store = store();
        assert_eq!(store.values().len(), 13);
        assert_eq!(store.strengths().len(), 24);
        assert_eq!(store.moments().len(), 1);
        assert_eq!(store.moments()[0].id, "welcome");
        assert_eq!(store.challenges().len(), 24);
        assert!(store.moments().iter().all(|m| m.timestamp == now()));
    }

    #[test]
    fn test_new_moment_is_prepended_with_defaults() {
        let mut store = store();
        let first = add_moment(&mut store, "First");
        let second = add_moment(&mut store, "Second");

        assert_eq!(store.moments()[0].id, second);
        assert_eq!(store.moments()[1].id, first);
        assert_eq!(store.moments()[2].id, "welcome");

        let moment = store.moment(&second).unwrap();
        assert_eq!(moment.mood.score(), 3);
        assert_eq!(
            moment.image.as_str(),
            "/placeholder.svg?height=200&width=200"
        );
        assert!(!moment.is_default);
    }

    #[test]
    fn test_edit_keeps_id_timestamp_and_image() {
        let mut store = store();
        let mut input = MomentInput::new("Hike", "Ridge", "Alive");
        input.image = Some(ImageRef::new("blob:session/abc/ridge.jpg"));
        let id = store.add_or_edit_moment(input, None).unwrap().id.clone();
        let created = store.moment(&id).unwrap().timestamp;

        let mut edit = MomentInput::new("Hike (edited)", "Ridge", "Alive");
        edit.mood = Some(Mood::new(5).unwrap());
        store.add_or_edit_moment(edit, Some(&id)).unwrap();

        let moment = store.moment(&id).unwrap();
        assert_eq!(moment.title, "Hike (edited)");
        assert_eq!(moment.timestamp, created);
        assert_eq!(moment.image.as_str(), "blob:session/abc/ridge.jpg");
        assert_eq!(moment.mood.score(), 5);
        assert_eq!(store.moments().len(), 2);
    }

    #[test]
    fn test_edit_with_new_image_replaces_it() {
        let mut store = store();
        let id = add_moment(&mut store, "Walk");

        let mut edit = MomentInput::new("Walk", "what", "why");
        edit.image = Some(ImageRef::new("blob:session/new/park.png"));
        store.add_or_edit_moment(edit, Some(&id)).unwrap();

        assert_eq!(
            store.moment(&id).unwrap().image.as_str(),
            "blob:session/new/park.png"
        );
    }

    #[test]
    fn test_default_moment_rejects_edit() {
        let mut store = store();
        let before = store.moments().to_vec();

        let result = store.add_or_edit_moment(MomentInput::new("Hijack", "x", "y"), Some("welcome"));

        assert!(matches!(result, Err(JournalError::DefaultMomentLocked(_))));
        assert_eq!(store.moments(), before.as_slice());
        assert!(store.take_notices().is_empty());
    }

    #[test]
    fn test_edit_unknown_moment() {
        let mut store = store();
        let result = store.add_or_edit_moment(MomentInput::new("a", "b", "c"), Some("nope"));
        assert!(matches!(result, Err(JournalError::MomentNotFound(_))));
    }

    #[test]
    fn test_notices_distinguish_add_and_update() {
        let mut store = store();
        let id = add_moment(&mut store, "One");
        store
            .add_or_edit_moment(MomentInput::new("One!", "what", "why"), Some(&id))
            .unwrap();

        let notices = store.take_notices();
        assert_eq!(notices.len(), 2);
        assert_eq!(notices[0].kind, NoticeKind::Added);
        assert_eq!(notices[0].title, "Moment added");
        assert_eq!(notices[0].body, "Your new moment has been successfully added.");
        assert_eq!(notices[1].title, "Moment updated");
        assert!(store.take_notices().is_empty());
    }

    #[test]
    fn test_new_value_gets_tokens_and_questions() {
        let mut store = store();
        let value = store
            .add_or_edit_value(ValueInput::new("Courage", "Acting despite fear"), None)
            .unwrap();

        assert!(value.color.is_some());
        assert!(value.icon.is_some());
        assert_eq!(value.questions[0], "What does Courage mean to you?");
        assert_eq!(value.image.as_str(), "/placeholder.svg?height=400&width=600");
        assert_eq!(store.values().len(), 14);
    }

    #[test]
    fn test_edit_value_keeps_unset_fields() {
        let mut store = store();
        let mut input = ValueInput::new("Family", "People first");
        input.color = Some(ColorToken::Green);
        input.icon = Some(Icon::Heart);
        input.category = Some("relationships".to_string());
        let id = store.add_or_edit_value(input, None).unwrap().id.clone();

        store
            .add_or_edit_value(ValueInput::new("Family", "People always first"), Some(&id))
            .unwrap();

        let value = store.value(&id).unwrap();
        assert_eq!(value.description, "People always first");
        assert_eq!(value.color, Some(ColorToken::Green));
        assert_eq!(value.icon, Some(Icon::Heart));
        assert_eq!(value.category.as_deref(), Some("relationships"));
    }

    #[test]
    fn test_update_value_image() {
        let mut store = store();
        assert!(store.update_value_image("1", ImageRef::new("blob:session/x/growth.png")));
        assert_eq!(store.value("1").unwrap().image.as_str(), "blob:session/x/growth.png");

        let before = store.values().to_vec();
        assert!(!store.update_value_image("missing", ImageRef::new("x")));
        assert_eq!(store.values(), before.as_slice());
    }

    #[test]
    fn test_add_new_strength() {
        let mut store = store();
        let strength = store.add_new_strength(StrengthInput::new("Patience", "Waiting calmly"));

        assert!(strength.reflections.is_empty());
        assert_eq!(
            strength.activities,
            vec![
                "Explore this strength",
                "Practice in daily life",
                "Reflect on your progress"
            ]
        );
        assert!(ColorToken::ALL.contains(&strength.color));
        assert_eq!(store.strengths().len(), 25);
    }

    #[test]
    fn test_challenges_generated_once() {
        let mut store = store();
        assert_eq!(store.ensure_weekly_challenges(), 0);
        store.add_new_strength(StrengthInput::new("Patience", "Waiting"));
        assert_eq!(store.ensure_weekly_challenges(), 0);
        assert_eq!(store.challenges().len(), 24);

        for challenge in store.challenges() {
            assert_eq!(challenge.due, now() + Duration::days(7));
        }
        assert_eq!(
            store.challenges()[0].description,
            "Practice Creativity 💡 this week: Try a new hobby or artistic pursuit"
        );
    }

    #[test]
    fn test_generation_with_no_strengths() {
        let catalog = SeedCatalog::parse("schema_version = 1\n").unwrap();
        let mut store = EntityStore::new(
            &catalog,
            StoreSettings::default(),
            Box::new(FixedClock(now())),
        );
        assert!(store.challenges().is_empty());
        assert_eq!(store.ensure_weekly_challenges(), 0);

        store.add_new_strength(StrengthInput::new("Hope", "Optimism"));
        assert_eq!(store.ensure_weekly_challenges(), 1);
    }

    #[test]
    fn test_dangling_challenge_is_kept_but_not_active() {
        let mut store = store();
        store.add_new_challenge(ChallengeInput::new("does-not-exist", "Ghost task"));

        assert_eq!(store.challenges().len(), 25);
        assert_eq!(store.active_challenges().len(), 24);
    }

    #[test]
    fn test_toggle_challenge() {
        let mut store = store();
        let id = store.challenges()[0].id.clone();
        assert_eq!(store.toggle_challenge_completion(&id), Some(true));
        assert_eq!(store.toggle_challenge_completion(&id), Some(false));
        assert_eq!(store.toggle_challenge_completion("missing"), None);
    }

    #[test]
    fn test_record_reflection_from_wizard() {
        let mut store = store();
        let mut wizard = ReflectionWizard::new(store.strength("2").unwrap());
        wizard.answer("Read about tides");
        wizard.next();
        wizard.answer("Not enough, I stopped early");
        wizard.next();
        wizard.answer("Schedule reading time");

        let reflection = wizard.finish(now()).unwrap();
        let strength = store.record_reflection("2", reflection).unwrap();
        assert_eq!(strength.reflections.len(), 1);
        assert_eq!(strength.reflections[0].usage, Usage::Underuse);
        assert!(strength.suggested_activities().is_some());
    }

    #[test]
    fn test_moment_links_skip_unknown_ids() {
        let mut store = store();
        let mut input = MomentInput::new("Linked", "what", "why");
        input.values = vec!["1".to_string(), "ghost".to_string()];
        input.strengths = vec!["6".to_string()];
        let id = store.add_or_edit_moment(input, None).unwrap().id.clone();

        let links = store.moment_links(&id).unwrap();
        assert_eq!(links.values.len(), 1);
        assert_eq!(links.values[0].id, "1");
        assert_eq!(links.strengths[0].id, "6");
    }

    #[test]
    fn test_prompts_by_kind() {
        let store = store();
        assert_eq!(store.prompts(None).len(), 25);
        assert_eq!(store.prompts(Some(PromptKind::Value)).len(), 12);
    }
}
