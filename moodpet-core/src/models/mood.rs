use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Valid intensity values accepted by the backend.
pub const INTENSITY_RANGE: RangeInclusive<u8> = 1..=10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Happy,
    Sad,
    Angry,
    Anxious,
    Calm,
    Excited,
}

impl Emotion {
    pub const ALL: [Emotion; 6] = [
        Emotion::Happy,
        Emotion::Sad,
        Emotion::Angry,
        Emotion::Anxious,
        Emotion::Calm,
        Emotion::Excited,
    ];

    pub fn icon(&self) -> &'static str {
        match self {
            Emotion::Happy => "😊",
            Emotion::Sad => "😢",
            Emotion::Angry => "😠",
            Emotion::Anxious => "😰",
            Emotion::Calm => "😌",
            Emotion::Excited => "🤩",
        }
    }

    /// Positive emotions raise the pet's happiness on the backend.
    pub fn is_positive(&self) -> bool {
        matches!(self, Emotion::Happy | Emotion::Calm | Emotion::Excited)
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Emotion::Happy => write!(f, "happy"),
            Emotion::Sad => write!(f, "sad"),
            Emotion::Angry => write!(f, "angry"),
            Emotion::Anxious => write!(f, "anxious"),
            Emotion::Calm => write!(f, "calm"),
            Emotion::Excited => write!(f, "excited"),
        }
    }
}

impl FromStr for Emotion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "happy" => Ok(Emotion::Happy),
            "sad" => Ok(Emotion::Sad),
            "angry" => Ok(Emotion::Angry),
            "anxious" => Ok(Emotion::Anxious),
            "calm" => Ok(Emotion::Calm),
            "excited" => Ok(Emotion::Excited),
            _ => Err(format!(
                "Invalid emotion '{}'. Valid options: happy, sad, angry, anxious, calm, excited",
                s
            )),
        }
    }
}

/// A logged mood, owned by a single pet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub id: String,
    pub pet_id: String,
    pub emotion: Emotion,
    pub intensity: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// Request body for `POST /moods`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewMood {
    pub emotion: Emotion,
    pub intensity: u8,
    pub pet_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl NewMood {
    pub fn new(
        emotion: Emotion,
        intensity: u8,
        pet_id: impl Into<String>,
    ) -> Result<Self, String> {
        if !INTENSITY_RANGE.contains(&intensity) {
            return Err(format!(
                "Intensity {} out of range {}-{}",
                intensity,
                INTENSITY_RANGE.start(),
                INTENSITY_RANGE.end()
            ));
        }
        Ok(Self {
            emotion,
            intensity,
            pet_id: pet_id.into(),
            note: None,
        })
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// Sorts moods most-recent-first.
pub fn sort_recent_first(moods: &mut [MoodEntry]) {
    moods.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
}
