use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::pet_stage::PetStage;

/// Upper bound for happiness and health.
pub const STAT_CAP: u32 = 100;

/// Experience that corresponds to a full progress bar.
pub const PROGRESS_THRESHOLD: u32 = 300;

/// Snapshot of the tracked pet as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pet {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub stage: PetStage,
    #[serde(default)]
    pub happiness: u32,
    #[serde(default)]
    pub health: u32,
    #[serde(default)]
    pub coins: u32,
    #[serde(default)]
    pub experience: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_fed: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_played: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_trained: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Pet {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            stage: PetStage::Egg,
            happiness: 50,
            health: 100,
            coins: 0,
            experience: 0,
            last_fed: None,
            last_played: None,
            last_trained: None,
            created_at: None,
        }
    }

    pub fn with_stage(mut self, stage: PetStage) -> Self {
        self.stage = stage;
        self
    }

    pub fn with_stats(mut self, happiness: u32, health: u32, coins: u32, experience: u32) -> Self {
        self.happiness = happiness;
        self.health = health;
        self.coins = coins;
        self.experience = experience;
        self
    }

    /// Experience progress in `[0.0, 1.0]`.
    pub fn progress(&self) -> f64 {
        (self.experience as f64 / PROGRESS_THRESHOLD as f64).clamp(0.0, 1.0)
    }

    pub fn display_happiness(&self) -> u32 {
        self.happiness.min(STAT_CAP)
    }

    pub fn display_health(&self) -> u32 {
        self.health.min(STAT_CAP)
    }

    /// Experience still needed before the backend evolves this pet.
    pub fn experience_to_next_stage(&self) -> Option<u32> {
        self.stage
            .evolution_threshold()
            .map(|threshold| threshold.saturating_sub(self.experience))
    }
}

impl fmt::Display for Pet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {} ({})", self.stage.icon(), self.name, self.stage)?;
        writeln!(f, "Happiness:  {}/{}", self.display_happiness(), STAT_CAP)?;
        writeln!(f, "Health:     {}/{}", self.display_health(), STAT_CAP)?;
        writeln!(f, "Coins:      {}", self.coins)?;
        write!(f, "Experience: {}", self.experience)
    }
}
