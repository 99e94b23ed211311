//! Interactive session
//!
//! Reads one command per line, applies it to a single in-memory store and
//! prints the result. A failing command is reported on the error stream and
//! the session carries on.

use crate::application::{
    edit_moment, edit_value, finish_reflection, start_reflection, MomentPatch, ValuePatch,
};
use crate::cli::commands::{
    split_line, ChallengeAction, MomentAction, ReflectAction, SessionCommand, SessionLine,
    StrengthAction, ValueAction,
};
use crate::cli::output::{
    format_challenge_list, format_insight, format_moment_detail, format_moment_list,
    format_notice, format_prompt_list, format_strength_detail, format_strength_list,
    format_value_detail, format_value_list, format_wizard,
};
use crate::domain::{
    ChallengeInput, ImageRef, MomentInput, Mood, ReflectionWizard, StrengthInput, ValueFilter,
    ValueInput,
};
use crate::error::{JournalError, Result};
use crate::infrastructure::EntityStore;
use clap::error::ErrorKind;
use clap::Parser;
use std::io::{BufRead, Write};

/// Result of one session line
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Reply {
    pub output: String,
    pub quit: bool,
}

impl Reply {
    fn text(output: impl Into<String>) -> Self {
        Reply {
            output: output.into(),
            quit: false,
        }
    }
}

#[derive(Debug)]
pub struct Session {
    store: EntityStore,
    reflection: Option<ReflectionWizard>,
}

impl Session {
    pub fn new(store: EntityStore) -> Self {
        Session {
            store,
            reflection: None,
        }
    }

    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    pub fn reflection(&self) -> Option<&ReflectionWizard> {
        self.reflection.as_ref()
    }

    /// Run until `quit` or end of input
    pub fn run<R: BufRead, W: Write, E: Write>(
        &mut self,
        input: R,
        out: &mut W,
        err: &mut E,
    ) -> Result<()> {
        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            match self.handle_line(trimmed) {
                Ok(reply) => {
                    write!(out, "{}", ensure_newline(&reply.output))?;
                    for notice in self.store.take_notices() {
                        write!(out, "{}", format_notice(&notice))?;
                    }
                    if reply.quit {
                        break;
                    }
                }
                Err(e) => {
                    writeln!(err, "Error: {}", e.display_with_suggestions())?;
                }
            }
        }
        out.flush()?;
        Ok(())
    }

    /// Parse and execute one line
    pub fn handle_line(&mut self, line: &str) -> Result<Reply> {
        let words = split_line(line)?;
        let parsed = match SessionLine::try_parse_from(words) {
            Ok(parsed) => parsed,
            Err(e) => match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                    return Ok(Reply::text(e.to_string()));
                }
                _ => return Err(JournalError::Command(e.to_string().trim_end().to_string())),
            },
        };

        let reply = self.execute(parsed.command)?;
        let generated = self.store.ensure_weekly_challenges();
        if generated > 0 {
            tracing::debug!(generated, "challenge list refilled");
        }
        Ok(reply)
    }

    pub fn execute(&mut self, command: SessionCommand) -> Result<Reply> {
        match command {
            SessionCommand::Moments => Ok(Reply::text(format_moment_list(self.store.moments()))),
            SessionCommand::Moment { action } => self.moment(action),
            SessionCommand::Values { search, category } => {
                let filter = match category {
                    Some(category) => ValueFilter::new(search).with_category(category),
                    None => ValueFilter::new(search),
                };
                let values = filter.apply(self.store.values());
                Ok(Reply::text(format_value_list(&values)))
            }
            SessionCommand::Value { action } => self.value(action),
            SessionCommand::Strengths => {
                Ok(Reply::text(format_strength_list(self.store.strengths())))
            }
            SessionCommand::Strength { action } => self.strength(action),
            SessionCommand::Challenges => Ok(Reply::text(format_challenge_list(
                &self.store.active_challenges(),
                self.store.now(),
            ))),
            SessionCommand::Challenge { action } => self.challenge(action),
            SessionCommand::Prompts { kind } => {
                Ok(Reply::text(format_prompt_list(&self.store.prompts(kind))))
            }
            SessionCommand::Reflect { action } => self.reflect(action),
            SessionCommand::Quit => Ok(Reply {
                output: String::new(),
                quit: true,
            }),
        }
    }

    fn moment(&mut self, action: MomentAction) -> Result<Reply> {
        match action {
            MomentAction::Show { id } => {
                let moment = self
                    .store
                    .moment(&id)
                    .ok_or_else(|| JournalError::MomentNotFound(id.clone()))?;
                let links = self.store.moment_links(&id)?;
                Ok(Reply::text(format_moment_detail(moment, &links)))
            }
            MomentAction::Add {
                title,
                description,
                reflection,
                image,
                values,
                strengths,
                mood,
            } => {
                let input = MomentInput {
                    title,
                    description,
                    reflection,
                    image: image.as_deref().map(ImageRef::upload),
                    values,
                    strengths,
                    mood: mood.map(Mood::new).transpose()?,
                };
                let moment = self.store.add_or_edit_moment(input, None)?;
                Ok(Reply::text(format!("{}\n", moment.id)))
            }
            MomentAction::Edit {
                id,
                title,
                description,
                reflection,
                image,
                values,
                strengths,
                mood,
            } => {
                let patch = MomentPatch {
                    title,
                    description,
                    reflection,
                    image: image.as_deref().map(ImageRef::upload),
                    values: non_empty(values),
                    strengths: non_empty(strengths),
                    mood: mood.map(Mood::new).transpose()?,
                };
                let id = edit_moment(&mut self.store, &id, patch)?;
                Ok(Reply::text(format!("{}\n", id)))
            }
        }
    }

    fn value(&mut self, action: ValueAction) -> Result<Reply> {
        match action {
            ValueAction::Show { id } => {
                let value = self
                    .store
                    .value(&id)
                    .ok_or_else(|| JournalError::ValueNotFound(id.clone()))?;
                Ok(Reply::text(format_value_detail(value)))
            }
            ValueAction::Add {
                name,
                description,
                category,
                icon,
                color,
                image,
            } => {
                let input = ValueInput {
                    image: image.as_deref().map(ImageRef::upload),
                    category,
                    icon,
                    color,
                    ..ValueInput::new(name, description)
                };
                let value = self.store.add_or_edit_value(input, None)?;
                Ok(Reply::text(format!("{}\n", value.id)))
            }
            ValueAction::Edit {
                id,
                name,
                description,
                category,
                icon,
                color,
                image,
            } => {
                let patch = ValuePatch {
                    name,
                    description,
                    image: image.as_deref().map(ImageRef::upload),
                    category,
                    color,
                    icon,
                };
                let id = edit_value(&mut self.store, &id, patch)?;
                Ok(Reply::text(format!("{}\n", id)))
            }
            ValueAction::Image { id, path } => {
                if self.store.update_value_image(&id, ImageRef::upload(&path)) {
                    Ok(Reply::text(format!("Image updated for value {}\n", id)))
                } else {
                    Ok(Reply::text(format!("No value with id {}; nothing changed\n", id)))
                }
            }
        }
    }

    fn strength(&mut self, action: StrengthAction) -> Result<Reply> {
        match action {
            StrengthAction::Show { id } => {
                let strength = self
                    .store
                    .strength(&id)
                    .ok_or_else(|| JournalError::StrengthNotFound(id.clone()))?;
                Ok(Reply::text(format_strength_detail(strength)))
            }
            StrengthAction::Add { name, description } => {
                let strength = self
                    .store
                    .add_new_strength(StrengthInput::new(name, description));
                Ok(Reply::text(format!("{}\n", strength.id)))
            }
        }
    }

    fn challenge(&mut self, action: ChallengeAction) -> Result<Reply> {
        match action {
            ChallengeAction::Add {
                strength,
                description,
            } => {
                let challenge = self
                    .store
                    .add_new_challenge(ChallengeInput::new(strength, description));
                Ok(Reply::text(format!("{}\n", challenge.id)))
            }
            ChallengeAction::Toggle { id } => {
                let Some(completed) = self.store.toggle_challenge_completion(&id) else {
                    return Ok(Reply::text(format!(
                        "No challenge with id {}; nothing changed\n",
                        id
                    )));
                };
                let description = self
                    .store
                    .challenge(&id)
                    .map(|c| c.description.as_str())
                    .unwrap_or_default();
                let state = if completed { "Completed" } else { "Reopened" };
                Ok(Reply::text(format!("{}: {}\n", state, description)))
            }
        }
    }

    fn reflect(&mut self, action: ReflectAction) -> Result<Reply> {
        match action {
            ReflectAction::Start { strength_id } => {
                let wizard = start_reflection(&self.store, &strength_id)?;
                let output = format_wizard(&wizard);
                self.reflection = Some(wizard);
                Ok(Reply::text(output))
            }
            ReflectAction::Cancel => match self.reflection.take() {
                Some(_) => Ok(Reply::text("Reflection discarded\n")),
                None => Ok(Reply::text("No reflection in progress\n")),
            },
            ReflectAction::Answer { text } => {
                let wizard = active(&mut self.reflection)?;
                wizard.answer(text.join(" "));
                Ok(Reply::text(format_wizard(wizard)))
            }
            ReflectAction::Next => {
                let wizard = active(&mut self.reflection)?;
                if !wizard.next() {
                    return Err(JournalError::Wizard(
                        "already on the last step; use 'reflect finish'".to_string(),
                    ));
                }
                Ok(Reply::text(format_wizard(wizard)))
            }
            ReflectAction::Prev => {
                let wizard = active(&mut self.reflection)?;
                if !wizard.previous() {
                    return Err(JournalError::Wizard("already on the first step".to_string()));
                }
                Ok(Reply::text(format_wizard(wizard)))
            }
            ReflectAction::Status => Ok(Reply::text(format_wizard(active(&mut self.reflection)?))),
            ReflectAction::Finish => {
                let insight = finish_reflection(&mut self.store, active(&mut self.reflection)?)?;
                self.reflection = None;
                Ok(Reply::text(format_insight(&insight)))
            }
        }
    }
}

fn active(reflection: &mut Option<ReflectionWizard>) -> Result<&mut ReflectionWizard> {
    reflection.as_mut().ok_or_else(|| {
        JournalError::Wizard(
            "no reflection in progress; start one with 'reflect start <STRENGTH_ID>'".to_string(),
        )
    })
}

fn non_empty(ids: Vec<String>) -> Option<Vec<String>> {
    if ids.is_empty() {
        None
    } else {
        Some(ids)
    }
}

fn ensure_newline(text: &str) -> String {
    if text.is_empty() || text.ends_with('\n') {
        text.to_string()
    } else {
        format!("{}\n", text)
    }
}
