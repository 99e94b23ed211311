//! Color and icon tokens for cards

use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fixed color palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorToken {
    HotPink,
    Orange,
    RoyalBlue,
    Navy,
    Green,
}

impl ColorToken {
    pub const ALL: [ColorToken; 5] = [
        ColorToken::HotPink,
        ColorToken::Orange,
        ColorToken::RoyalBlue,
        ColorToken::Navy,
        ColorToken::Green,
    ];

    /// Hex code for this token
    pub fn hex(&self) -> &'static str {
        match self {
            ColorToken::HotPink => "#FF1F7D",
            ColorToken::Orange => "#FF5C00",
            ColorToken::RoyalBlue => "#4B4AEF",
            ColorToken::Navy => "#1F2261",
            ColorToken::Green => "#00DC82",
        }
    }

    /// Pick a token at random
    pub fn random() -> Self {
        *Self::ALL
            .choose(&mut rand::thread_rng())
            .unwrap_or(&ColorToken::Navy)
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColorToken::HotPink => "hot-pink",
            ColorToken::Orange => "orange",
            ColorToken::RoyalBlue => "royal-blue",
            ColorToken::Navy => "navy",
            ColorToken::Green => "green",
        };
        f.write_str(name)
    }
}

impl FromStr for ColorToken {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorToken::ALL
            .into_iter()
            .find(|c| c.to_string() == s.to_lowercase())
            .ok_or_else(|| {
                format!(
                    "Invalid color: '{}'. Valid colors are: hot-pink, orange, royal-blue, navy, green",
                    s
                )
            })
    }
}

/// Icon shown next to a value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    Heart,
    Sparkles,
    Trophy,
    Dumbbell,
    Scale,
}

impl Icon {
    pub const ALL: [Icon; 5] = [
        Icon::Heart,
        Icon::Sparkles,
        Icon::Trophy,
        Icon::Dumbbell,
        Icon::Scale,
    ];

    pub fn random() -> Self {
        *Self::ALL
            .choose(&mut rand::thread_rng())
            .unwrap_or(&Icon::Heart)
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format!("{:?}", self).to_lowercase())
    }
}

impl FromStr for Icon {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "heart" => Ok(Icon::Heart),
            "sparkles" => Ok(Icon::Sparkles),
            "trophy" => Ok(Icon::Trophy),
            "dumbbell" => Ok(Icon::Dumbbell),
            "scale" => Ok(Icon::Scale),
            _ => Err(format!(
                "Invalid icon: '{}'. Valid icons are: heart, sparkles, trophy, dumbbell, scale",
                s
            )),
        }
    }
}
