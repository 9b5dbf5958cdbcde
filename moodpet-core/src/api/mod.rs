//! Backend REST API access.
//!
//! [`PetApi`] has one operation per backend resource. [`HttpClient`] is the
//! reqwest implementation used by the binary; tests substitute in-memory
//! implementations.

mod client;
mod error;

pub use client::HttpClient;
pub use error::ApiError;

use crate::models::{Achievement, ActionOutcome, MoodEntry, NewMood, Pet, PetAction, ShopItem};

/// Contract of the MoodPet backend.
///
/// No operation retries; failures are returned to the caller as-is.
#[allow(async_fn_in_trait)]
pub trait PetApi {
    /// `GET /pets`
    async fn list_pets(&self) -> Result<Vec<Pet>, ApiError>;

    /// `POST /pets`
    async fn create_pet(&self, name: &str) -> Result<Pet, ApiError>;

    /// `GET /pets/{id}`
    async fn get_pet(&self, id: &str) -> Result<Pet, ApiError>;

    /// `PUT /pets/{id}`
    async fn update_pet(&self, id: &str, name: &str) -> Result<Pet, ApiError>;

    /// `POST /pets/{id}/{action}`
    async fn perform_action(&self, id: &str, action: PetAction)
        -> Result<ActionOutcome, ApiError>;

    /// `GET /moods/{pet_id}`
    async fn list_moods(&self, pet_id: &str) -> Result<Vec<MoodEntry>, ApiError>;

    /// `POST /moods`
    async fn create_mood(&self, mood: &NewMood) -> Result<MoodEntry, ApiError>;

    /// `GET /achievements/{pet_id}`
    async fn list_achievements(&self, pet_id: &str) -> Result<Vec<Achievement>, ApiError>;

    /// `GET /shop`
    async fn list_shop(&self) -> Result<Vec<ShopItem>, ApiError>;
}
