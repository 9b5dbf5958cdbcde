//! App state store.
//!
//! [`AppState`] is a plain, serializable snapshot. Every transition goes
//! through [`reduce`], which replaces whole values and never patches lists
//! incrementally, so the store always equals the latest fetched snapshot.

use serde::{Deserialize, Serialize};

use crate::models::{
    sort_recent_first, Achievement, ActionOutcome, Emotion, MoodEntry, Pet, PetAction, ShopItem,
};

/// Which overlay view is open. At most one at a time; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modal {
    #[default]
    None,
    Mood,
    Shop,
    Achievements,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    /// `None` until bootstrap completes.
    pub pet: Option<Pet>,
    pub moods: Vec<MoodEntry>,
    pub achievements: Vec<Achievement>,
    pub shop: Vec<ShopItem>,
    pub modal: Modal,
    /// Single visible notification; a new one replaces it.
    pub notification: Option<String>,
    /// Action whose visual pulse is currently playing.
    pub pulse: Option<PetAction>,
}

impl AppState {
    pub fn is_loaded(&self) -> bool {
        self.pet.is_some()
    }

    pub fn pet_id(&self) -> Option<&str> {
        self.pet.as_ref().map(|p| p.id.as_str())
    }
}

/// State transitions.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    PetLoaded(Pet),
    CollectionsLoaded {
        moods: Vec<MoodEntry>,
        achievements: Vec<Achievement>,
        shop: Vec<ShopItem>,
    },
    ActionCompleted {
        action: PetAction,
        outcome: ActionOutcome,
    },
    PetRenamed(String),
    MoodLogged(Emotion),
    ModalOpened(Modal),
    ModalClosed,
    Notified(String),
    NotificationExpired,
    PulseExpired,
}

/// Text shown after a mood was logged.
pub fn mood_logged_message(emotion: Emotion) -> String {
    format!("Mood logged: {}!", emotion)
}

/// Pure transition from `(state, event)` to the next state.
pub fn reduce(state: &AppState, event: Event) -> AppState {
    let mut next = state.clone();
    match event {
        Event::PetLoaded(pet) => {
            next.pet = Some(pet);
        }
        Event::CollectionsLoaded {
            mut moods,
            achievements,
            shop,
        } => {
            sort_recent_first(&mut moods);
            next.moods = moods;
            next.achievements = achievements;
            next.shop = shop;
        }
        Event::ActionCompleted { action, outcome } => {
            next.pet = Some(outcome.pet);
            next.notification = Some(outcome.message);
            next.pulse = Some(action);
        }
        Event::PetRenamed(name) => {
            if let Some(pet) = next.pet.as_mut() {
                pet.name = name;
            }
        }
        Event::MoodLogged(emotion) => {
            next.modal = Modal::None;
            next.notification = Some(mood_logged_message(emotion));
        }
        Event::ModalOpened(modal) => {
            // Interactive views need a loaded pet.
            if next.pet.is_some() {
                next.modal = modal;
            }
        }
        Event::ModalClosed => {
            next.modal = Modal::None;
        }
        Event::Notified(text) => {
            next.notification = Some(text);
        }
        Event::NotificationExpired => {
            next.notification = None;
        }
        Event::PulseExpired => {
            next.pulse = None;
        }
    }
    next
}
