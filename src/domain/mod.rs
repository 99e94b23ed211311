//! Domain layer - Journal entities and the rules that mutate them

pub mod challenge;
pub mod clock;
pub mod image;
pub mod moment;
pub mod palette;
pub mod prompt;
pub mod search;
pub mod strength;
pub mod value;
pub mod wizard;

pub use challenge::{generate_weekly, Challenge, ChallengeInput};
pub use clock::{Clock, FixedClock, SystemClock};
pub use image::ImageRef;
pub use moment::{Moment, MomentInput, Mood};
pub use palette::{ColorToken, Icon};
pub use prompt::{Prompt, PromptKind};
pub use search::ValueFilter;
pub use strength::{determine_usage, Reflection, Strength, StrengthInput, Usage};
pub use value::{Value, ValueInput};
pub use wizard::{ReflectionWizard, WizardStep};
