use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::pet::Pet;

/// Care actions the backend exposes under `/pets/{id}/{action}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetAction {
    Feed,
    Play,
    Train,
}

impl PetAction {
    pub const ALL: [PetAction; 3] = [PetAction::Feed, PetAction::Play, PetAction::Train];

    /// Path segment used by the backend route.
    pub fn path(&self) -> &'static str {
        match self {
            PetAction::Feed => "feed",
            PetAction::Play => "play",
            PetAction::Train => "train",
        }
    }

    /// Phrase used in failure notifications.
    pub fn verb(&self) -> &'static str {
        match self {
            PetAction::Feed => "feed pet",
            PetAction::Play => "play with pet",
            PetAction::Train => "train pet",
        }
    }
}

impl fmt::Display for PetAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for PetAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "feed" => Ok(PetAction::Feed),
            "play" => Ok(PetAction::Play),
            "train" => Ok(PetAction::Train),
            _ => Err(format!(
                "Invalid action '{}'. Valid options: feed, play, train",
                s
            )),
        }
    }
}

/// Response of an action endpoint: the authoritative pet plus a message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionOutcome {
    pub pet: Pet,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_paths() {
        let paths: Vec<_> = PetAction::ALL.iter().map(|a| a.path()).collect();
        assert_eq!(paths, vec!["feed", "play", "train"]);
    }

    #[test]
    fn test_action_outcome_deserialize() {
        let json = r#"{"message":"Yum!","pet":{"id":"p1","name":"MoodPet","coins":5,"happiness":60,"health":100,"experience":10,"stage":"egg"}}"#;
        let outcome: ActionOutcome = serde_json::from_str(json).unwrap();
        assert_eq!(outcome.message, "Yum!");
        assert_eq!(outcome.pet.happiness, 60);
    }

    #[test]
    fn test_action_from_str() {
        assert_eq!(PetAction::from_str("TRAIN").unwrap(), PetAction::Train);
        assert!(PetAction::from_str("sleep").is_err());
    }
}
