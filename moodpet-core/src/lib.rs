//! MoodPet Core Library
//!
//! Data model, backend API client, app state store and the synchronization
//! controller shared by MoodPet front ends.

pub mod api;
pub mod controller;
pub mod models;
pub mod state;

pub use api::{ApiError, HttpClient, PetApi};
pub use controller::{pick_intensity, Controller, SessionSettings, DEFAULT_PET_NAME};
pub use models::{
    Achievement, ActionOutcome, Emotion, MoodEntry, NewMood, Pet, PetAction, PetStage, ShopItem,
};
pub use state::{reduce, AppState, Event, Modal};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
