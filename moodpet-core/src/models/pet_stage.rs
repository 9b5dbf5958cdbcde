use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Growth level of a pet, driven by accumulated experience on the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetStage {
    #[default]
    Egg,
    Baby,
    Adult,
    Legendary,
}

impl PetStage {
    pub fn icon(&self) -> &'static str {
        match self {
            PetStage::Egg => "🥚",
            PetStage::Baby => "🐣",
            PetStage::Adult => "🐕",
            PetStage::Legendary => "🦄",
        }
    }

    /// The stage this one evolves into, if any.
    pub fn next(&self) -> Option<PetStage> {
        match self {
            PetStage::Egg => Some(PetStage::Baby),
            PetStage::Baby => Some(PetStage::Adult),
            PetStage::Adult => Some(PetStage::Legendary),
            PetStage::Legendary => None,
        }
    }

    /// Experience at which the backend evolves a pet out of this stage.
    ///
    /// Informational only: evolution itself is decided server side.
    pub fn evolution_threshold(&self) -> Option<u32> {
        match self {
            PetStage::Egg => Some(50),
            PetStage::Baby => Some(150),
            PetStage::Adult => Some(300),
            PetStage::Legendary => None,
        }
    }
}

impl fmt::Display for PetStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PetStage::Egg => write!(f, "egg"),
            PetStage::Baby => write!(f, "baby"),
            PetStage::Adult => write!(f, "adult"),
            PetStage::Legendary => write!(f, "legendary"),
        }
    }
}

impl FromStr for PetStage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "egg" => Ok(PetStage::Egg),
            "baby" => Ok(PetStage::Baby),
            "adult" => Ok(PetStage::Adult),
            "legendary" => Ok(PetStage::Legendary),
            _ => Err(format!(
                "Invalid pet stage '{}'. Valid options: egg, baby, adult, legendary",
                s
            )),
        }
    }
}
