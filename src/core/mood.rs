//! Mood indicator: the guesser's cosmetic "emotional" state.
//!
//! A [`Mood`] is never stored on its own; it is recomputed on every
//! transition and resolved to an image reference for display.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of moods the guesser can show.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    #[default]
    Normal,
    Thinking,
    Happy,
    Surprised,
}

impl Mood {
    pub const ALL: [Mood; 4] = [Mood::Normal, Mood::Thinking, Mood::Happy, Mood::Surprised];

    /// Canonical lowercase tag.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Thinking => "thinking",
            Self::Happy => "happy",
            Self::Surprised => "surprised",
        }
    }

    /// Map any tag to a mood. Unrecognized tags fall back to [`Mood::Normal`].
    ///
    /// ```rust
    /// use guesswork::core::Mood;
    ///
    /// assert_eq!(Mood::from_tag("surprised"), Mood::Surprised);
    /// assert_eq!(Mood::from_tag("sleepy"), Mood::Normal);
    /// ```
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "thinking" => Self::Thinking,
            "happy" => Self::Happy,
            "surprised" => Self::Surprised,
            _ => Self::Normal,
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Image reference for each mood.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoodImages {
    pub normal: String,
    pub thinking: String,
    pub happy: String,
    pub surprised: String,
}

impl Default for MoodImages {
    fn default() -> Self {
        Self {
            normal: "images/normal.png".to_string(),
            thinking: "images/thinking.png".to_string(),
            happy: "images/happy.png".to_string(),
            surprised: "images/surprised.png".to_string(),
        }
    }
}

impl MoodImages {
    pub fn image_for(&self, mood: Mood) -> &str {
        match mood {
            Mood::Normal => &self.normal,
            Mood::Thinking => &self.thinking,
            Mood::Happy => &self.happy,
            Mood::Surprised => &self.surprised,
        }
    }
}

/// The displayed mood image, owned by one game client.
#[derive(Clone, Debug, Default)]
pub struct MoodIndicator {
    images: MoodImages,
    current: Mood,
}

impl MoodIndicator {
    pub fn new(images: MoodImages) -> Self {
        Self {
            images,
            current: Mood::Normal,
        }
    }

    /// Resolve a mood tag to its image reference. Never fails.
    pub fn resolve(&self, tag: &str) -> &str {
        self.images.image_for(Mood::from_tag(tag))
    }

    /// Display `mood`, returning the image reference now shown.
    pub fn show(&mut self, mood: Mood) -> &str {
        self.current = mood;
        self.images.image_for(mood)
    }

    pub fn current(&self) -> Mood {
        self.current
    }

    pub fn image(&self) -> &str {
        self.images.image_for(self.current)
    }
}
