//! CLI command definitions

use crate::domain::{ColorToken, Icon, PromptKind};
use crate::error::{JournalError, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "growth-journal")]
#[command(about = "Personal growth journal: moments, values and strengths", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: $GROWTH_JOURNAL_CONFIG, then built-in defaults)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start an interactive session reading commands from stdin (default)
    Session,

    /// Print the seed catalog
    Catalog {
        /// Section to print (default: all)
        #[arg(value_enum)]
        section: Option<CatalogSection>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CatalogSection {
    Values,
    Strengths,
    Prompts,
}

/// One line typed into a session
#[derive(Parser, Debug)]
#[command(name = "growth-journal", no_binary_name = true, disable_version_flag = true)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: SessionCommand,
}

#[derive(Subcommand, Debug)]
pub enum SessionCommand {
    /// List moments, newest first
    Moments,

    /// Show, add or edit a moment
    Moment {
        #[command(subcommand)]
        action: MomentAction,
    },

    /// List values, optionally filtered
    Values {
        /// Case-insensitive text to find in name or description
        #[arg(short, long, default_value = "")]
        search: String,

        /// Exact category to require
        #[arg(long)]
        category: Option<String>,
    },

    /// Show, add or edit a value
    Value {
        #[command(subcommand)]
        action: ValueAction,
    },

    /// List strengths with reflection progress
    Strengths,

    /// Show or add a strength
    Strength {
        #[command(subcommand)]
        action: StrengthAction,
    },

    /// List this week's challenges
    Challenges,

    /// Add or toggle a challenge
    Challenge {
        #[command(subcommand)]
        action: ChallengeAction,
    },

    /// List journaling prompts
    Prompts {
        /// Only prompts of this kind (moment, value)
        #[arg(short, long)]
        kind: Option<PromptKind>,
    },

    /// Guided reflection on a strength
    Reflect {
        #[command(subcommand)]
        action: ReflectAction,
    },

    /// End the session
    #[command(alias = "exit")]
    Quit,
}

#[derive(Subcommand, Debug)]
pub enum MomentAction {
    /// Show one moment with its linked values and strengths
    Show { id: String },

    /// Record a new moment
    Add {
        #[arg(long)]
        title: String,

        /// What happened?
        #[arg(long)]
        description: String,

        /// Why was this meaningful?
        #[arg(long)]
        reflection: String,

        /// Image file to attach (kept for this session only)
        #[arg(long)]
        image: Option<PathBuf>,

        /// Linked value id (repeatable)
        #[arg(long = "value")]
        values: Vec<String>,

        /// Linked strength id (repeatable)
        #[arg(long = "strength")]
        strengths: Vec<String>,

        /// Mood from 1 to 5
        #[arg(long)]
        mood: Option<u8>,
    },

    /// Edit a moment; omitted fields keep their current value
    Edit {
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        reflection: Option<String>,

        #[arg(long)]
        image: Option<PathBuf>,

        /// Replace linked value ids (repeatable)
        #[arg(long = "value")]
        values: Vec<String>,

        /// Replace linked strength ids (repeatable)
        #[arg(long = "strength")]
        strengths: Vec<String>,

        #[arg(long)]
        mood: Option<u8>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ValueAction {
    /// Show one value with its reflection questions
    Show { id: String },

    /// Define a new value
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        description: String,

        #[arg(long)]
        category: Option<String>,

        /// heart, sparkles, trophy, dumbbell, scale (default: random)
        #[arg(long)]
        icon: Option<Icon>,

        /// hot-pink, orange, royal-blue, navy, green (default: random)
        #[arg(long)]
        color: Option<ColorToken>,

        #[arg(long)]
        image: Option<PathBuf>,
    },

    /// Edit a value; omitted fields keep their current value
    Edit {
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        icon: Option<Icon>,

        #[arg(long)]
        color: Option<ColorToken>,

        #[arg(long)]
        image: Option<PathBuf>,
    },

    /// Replace a value's image
    Image { id: String, path: PathBuf },
}

#[derive(Subcommand, Debug)]
pub enum StrengthAction {
    /// Show one strength with its reflections
    Show { id: String },

    /// Track a new strength
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        description: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ChallengeAction {
    /// Add a challenge for a strength
    Add {
        #[arg(long)]
        strength: String,

        #[arg(long)]
        description: String,
    },

    /// Mark a challenge done, or not done
    Toggle { id: String },
}

#[derive(Subcommand, Debug)]
pub enum ReflectAction {
    /// Begin reflecting on a strength
    Start { strength_id: String },

    /// Answer the current step
    Answer {
        #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Go to the next step
    Next,

    /// Go back one step
    Prev,

    /// Save the reflection (last step only)
    Finish,

    /// Discard the reflection in progress
    Cancel,

    /// Show the current step
    Status,
}

/// Split a session line into words.
///
/// Whitespace separates words. Single quotes keep text literally; double
/// quotes keep whitespace and honor backslash escapes.
pub fn split_line(line: &str) -> Result<Vec<String>> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match c {
            '\'' => {
                in_word = true;
                loop {
                    match chars.next() {
                        Some('\'') => break,
                        Some(ch) => current.push(ch),
                        None => return Err(unterminated('\'')),
                    }
                }
            }
            '"' => {
                in_word = true;
                loop {
                    match chars.next() {
                        Some('"') => break,
                        Some('\\') => match chars.next() {
                            Some(ch) => current.push(ch),
                            None => return Err(unterminated('"')),
                        },
                        Some(ch) => current.push(ch),
                        None => return Err(unterminated('"')),
                    }
                }
            }
            '\\' => {
                in_word = true;
                if let Some(ch) = chars.next() {
                    current.push(ch);
                }
            }
            c if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            c => {
                in_word = true;
                current.push(c);
            }
        }
    }

    if in_word {
        words.push(current);
    }

    Ok(words)
}

fn unterminated(quote: char) -> JournalError {
    JournalError::Command(format!("Unterminated {} quote", quote))
}
