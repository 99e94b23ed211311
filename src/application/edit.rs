//! Partial edits of moments and values
//!
//! An edit form starts out filled with the stored entry; a patch carries only
//! the fields the user changed and is merged onto that form before it goes to
//! the store.

use crate::domain::{ColorToken, Icon, ImageRef, MomentInput, Mood, ValueInput};
use crate::error::{JournalError, Result};
use crate::infrastructure::EntityStore;

#[derive(Debug, Clone, Default)]
pub struct MomentPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub reflection: Option<String>,
    pub image: Option<ImageRef>,
    pub values: Option<Vec<String>>,
    pub strengths: Option<Vec<String>>,
    pub mood: Option<Mood>,
}

#[derive(Debug, Clone, Default)]
pub struct ValuePatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<ImageRef>,
    pub category: Option<String>,
    pub color: Option<ColorToken>,
    pub icon: Option<Icon>,
}

/// Apply a patch to a stored moment
pub fn edit_moment(store: &mut EntityStore, id: &str, patch: MomentPatch) -> Result<String> {
    let existing = store
        .moment(id)
        .ok_or_else(|| JournalError::MomentNotFound(id.to_string()))?;

    let mut input = MomentInput::from_moment(existing);
    if let Some(title) = patch.title {
        input.title = title;
    }
    if let Some(description) = patch.description {
        input.description = description;
    }
    if let Some(reflection) = patch.reflection {
        input.reflection = reflection;
    }
    if let Some(values) = patch.values {
        input.values = values;
    }
    if let Some(strengths) = patch.strengths {
        input.strengths = strengths;
    }
    if patch.mood.is_some() {
        input.mood = patch.mood;
    }
    input.image = patch.image;

    Ok(store.add_or_edit_moment(input, Some(id))?.id.clone())
}

/// Apply a patch to a stored value
pub fn edit_value(store: &mut EntityStore, id: &str, patch: ValuePatch) -> Result<String> {
    let existing = store
        .value(id)
        .ok_or_else(|| JournalError::ValueNotFound(id.to_string()))?;

    let input = ValueInput {
        name: patch.name.unwrap_or_else(|| existing.name.clone()),
        description: patch
            .description
            .unwrap_or_else(|| existing.description.clone()),
        image: patch.image,
        questions: None,
        category: patch.category,
        color: patch.color,
        icon: patch.icon,
    };

    Ok(store.add_or_edit_value(input, Some(id))?.id.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FixedClock;
    use crate::infrastructure::{SeedCatalog, StoreSettings};
    use chrono::Utc;

    fn store() -> EntityStore {
        EntityStore::new(
            &SeedCatalog::builtin().unwrap(),
            StoreSettings::default(),
            Box::new(FixedClock(Utc::now())),
        )
    }

    #[test]
    fn test_moment_patch_changes_only_given_fields() {
        let mut store = store();
        let mut input = MomentInput::new("Swim", "Lake at dawn", "Calm");
        input.values = vec!["6".to_string()];
        input.image = Some(ImageRef::new("blob:session/1/lake.jpg"));
        let id = store.add_or_edit_moment(input, None).unwrap().id.clone();

        let patch = MomentPatch {
            reflection: Some("Calm and brave".to_string()),
            ..Default::default()
        };
        let edited = edit_moment(&mut store, &id, patch).unwrap();
        assert_eq!(edited, id);

        let moment = store.moment(&id).unwrap();
        assert_eq!(moment.title, "Swim");
        assert_eq!(moment.reflection, "Calm and brave");
        assert_eq!(moment.values, vec!["6".to_string()]);
        assert_eq!(moment.image.as_str(), "blob:session/1/lake.jpg");
    }

    #[test]
    fn test_moment_patch_on_default_moment() {
        let mut store = store();
        let patch = MomentPatch {
            title: Some("Changed".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            edit_moment(&mut store, "welcome", patch),
            Err(JournalError::DefaultMomentLocked(_))
        ));
        assert_eq!(
            store.moment("welcome").unwrap().title,
            "Beginning My Personal Growth Journey"
        );
    }

    #[test]
    fn test_value_patch_keeps_questions() {
        let mut store = store();
        let before = store.value("3").unwrap().questions.clone();
        let patch = ValuePatch {
            category: Some("drive".to_string()),
            ..Default::default()
        };
        edit_value(&mut store, "3", patch).unwrap();

        let value = store.value("3").unwrap();
        assert_eq!(value.questions, before);
        assert_eq!(value.category.as_deref(), Some("drive"));
        assert_eq!(value.name, "Ambition 🚀");
    }

    #[test]
    fn test_value_patch_unknown_id() {
        let mut store = store();
        assert!(matches!(
            edit_value(&mut store, "nope", ValuePatch::default()),
            Err(JournalError::ValueNotFound(_))
        ));
    }
}
