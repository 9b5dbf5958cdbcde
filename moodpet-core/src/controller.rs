//! Synchronization controller.
//!
//! Owns the [`AppState`] and keeps it consistent with the backend. Every
//! operation catches API failures at its boundary, logs them, and turns them
//! into a single notification; nothing is returned to the presentation layer.
//!
//! Expiry timers (notification, action pulse) run as spawned tokio tasks that
//! only send an [`Event`] back; callers feed those into the store with
//! [`Controller::next_timer_event`] or [`Controller::drain_timer_events`].
//! Operations must therefore run inside a tokio runtime.

use std::ops::RangeInclusive;
use std::time::Duration;

use rand::Rng;
use tokio::sync::mpsc;

use crate::api::{ApiError, PetApi};
use crate::models::{find_item, Emotion, NewMood, Pet, PetAction, INTENSITY_RANGE};
use crate::state::{reduce, AppState, Event, Modal};

pub const DEFAULT_PET_NAME: &str = "MoodPet";
pub const DEFAULT_NOTIFICATION_DURATION: Duration = Duration::from_millis(3000);
pub const DEFAULT_PULSE_DURATION: Duration = Duration::from_millis(1000);
/// Intensities picked on the user's behalf are always in this range.
pub const FAVORABLE_INTENSITY: RangeInclusive<u8> = 5..=10;

const PET_NOT_LOADED: &str = "Pet not loaded yet";

/// Per-session tunables.
#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub default_pet_name: String,
    pub notification_duration: Duration,
    pub pulse_duration: Duration,
    pub intensity_range: RangeInclusive<u8>,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            default_pet_name: DEFAULT_PET_NAME.to_string(),
            notification_duration: DEFAULT_NOTIFICATION_DURATION,
            pulse_duration: DEFAULT_PULSE_DURATION,
            intensity_range: FAVORABLE_INTENSITY,
        }
    }
}

/// Draws a mood intensity from `range`, restricted to what the backend accepts.
pub fn pick_intensity<R: Rng>(range: &RangeInclusive<u8>, rng: &mut R) -> u8 {
    let low = (*range.start()).max(*INTENSITY_RANGE.start());
    let high = (*range.end()).min(*INTENSITY_RANGE.end());
    if low >= high {
        return low.min(*INTENSITY_RANGE.end());
    }
    rng.random_range(low..=high)
}

pub struct Controller<A> {
    api: A,
    state: AppState,
    settings: SessionSettings,
    timer_tx: mpsc::UnboundedSender<Event>,
    timer_rx: mpsc::UnboundedReceiver<Event>,
}

impl<A: PetApi> Controller<A> {
    pub fn new(api: A, settings: SessionSettings) -> Self {
        let (timer_tx, timer_rx) = mpsc::unbounded_channel();
        Self {
            api,
            state: AppState::default(),
            settings,
            timer_tx,
            timer_rx,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    fn dispatch(&mut self, event: Event) {
        tracing::trace!("dispatch {:?}", event);
        self.state = reduce(&self.state, event);
    }

    /// Sends `event` back through the timer channel after `after` elapses.
    fn schedule(&self, after: Duration, event: Event) {
        let tx = self.timer_tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(after).await;
            let _ = tx.send(event);
        });
    }

    /// Shows `text`, replacing any visible notification.
    pub fn notify(&mut self, text: impl Into<String>) {
        self.dispatch(Event::Notified(text.into()));
        self.schedule(self.settings.notification_duration, Event::NotificationExpired);
    }

    fn fail(&mut self, what: &str, err: &ApiError) {
        tracing::error!("Failed to {}: {}", what, err);
        self.notify(format!("Failed to {}", what));
    }

    fn loaded_pet_id(&mut self) -> Option<String> {
        match self.state.pet_id() {
            Some(id) => Some(id.to_string()),
            None => {
                tracing::warn!("Ignoring request before the pet was loaded");
                self.notify(PET_NOT_LOADED);
                None
            }
        }
    }

    /// Finds or creates the session's pet, then loads its collections.
    pub async fn bootstrap(&mut self) {
        match self.find_or_create_pet().await {
            Ok(pet) => {
                tracing::info!("Tracking pet {} ({})", pet.name, pet.id);
                self.dispatch(Event::PetLoaded(pet));
                self.load_collections().await;
            }
            Err(e) => self.fail("load pet", &e),
        }
    }

    async fn find_or_create_pet(&self) -> Result<Pet, ApiError> {
        let pets = self.api.list_pets().await?;
        match pets.into_iter().next() {
            Some(pet) => Ok(pet),
            None => {
                tracing::info!(
                    "No pet found, creating '{}'",
                    self.settings.default_pet_name
                );
                self.api.create_pet(&self.settings.default_pet_name).await
            }
        }
    }

    /// Refreshes moods, achievements and the shop catalog.
    ///
    /// The three fetches run concurrently and the store is only updated when
    /// all of them succeed; otherwise the previous lists are kept.
    pub async fn load_collections(&mut self) {
        let Some(pet_id) = self.loaded_pet_id() else {
            return;
        };

        let fetched = futures::try_join!(
            self.api.list_moods(&pet_id),
            self.api.list_achievements(&pet_id),
            self.api.list_shop()
        );

        match fetched {
            Ok((moods, achievements, shop)) => {
                tracing::debug!(
                    "Loaded {} mood(s), {} achievement(s), {} shop item(s)",
                    moods.len(),
                    achievements.len(),
                    shop.len()
                );
                self.dispatch(Event::CollectionsLoaded {
                    moods,
                    achievements,
                    shop,
                });
            }
            Err(e) => self.fail("load pet data", &e),
        }
    }

    /// Re-fetches the tracked pet, then its collections.
    pub async fn refresh(&mut self) {
        let Some(pet_id) = self.loaded_pet_id() else {
            return;
        };

        match self.api.get_pet(&pet_id).await {
            Ok(pet) => self.dispatch(Event::PetLoaded(pet)),
            Err(e) => self.fail("refresh pet", &e),
        }
        self.load_collections().await;
    }

    /// Sends a care action and adopts the backend's pet snapshot.
    pub async fn perform_action(&mut self, action: PetAction) {
        let Some(pet_id) = self.loaded_pet_id() else {
            return;
        };

        match self.api.perform_action(&pet_id, action).await {
            Ok(outcome) => {
                tracing::info!("{}: {}", action, outcome.message);
                self.dispatch(Event::ActionCompleted { action, outcome });
                self.schedule(self.settings.notification_duration, Event::NotificationExpired);
                self.schedule(self.settings.pulse_duration, Event::PulseExpired);
            }
            Err(e) => self.fail(action.verb(), &e),
        }
    }

    /// Logs `emotion` with an intensity picked from the favorable range.
    pub async fn submit_mood(&mut self, emotion: Emotion) {
        let intensity = pick_intensity(&self.settings.intensity_range, &mut rand::rng());
        self.submit_mood_with_intensity(emotion, intensity).await;
    }

    pub async fn submit_mood_with_intensity(&mut self, emotion: Emotion, intensity: u8) {
        let Some(pet_id) = self.loaded_pet_id() else {
            return;
        };

        let mood = match NewMood::new(emotion, intensity, pet_id.as_str()) {
            Ok(mood) => mood,
            Err(e) => {
                tracing::warn!("Rejected mood: {}", e);
                self.notify("Failed to log mood");
                return;
            }
        };

        match self.api.create_mood(&mood).await {
            Ok(entry) => tracing::info!(
                "Logged {} mood (intensity {}) for pet {}",
                entry.emotion,
                entry.intensity,
                entry.pet_id
            ),
            Err(e) => return self.fail("log mood", &e),
        }

        // Logging a mood changes the pet's stats server side.
        self.refresh().await;

        self.dispatch(Event::MoodLogged(emotion));
        self.schedule(self.settings.notification_duration, Event::NotificationExpired);
    }

    /// Renames the pet. `None`, blank, and unchanged names are ignored.
    pub async fn rename(&mut self, new_name: Option<String>) {
        let Some(pet_id) = self.loaded_pet_id() else {
            return;
        };
        let Some(name) = new_name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
        else {
            return;
        };
        if self.state.pet.as_ref().is_some_and(|p| p.name == name) {
            return;
        }

        match self.api.update_pet(&pet_id, &name).await {
            Ok(_) => {
                self.dispatch(Event::PetRenamed(name.clone()));
                self.notify(format!("Pet renamed to {}!", name));
            }
            Err(e) => self.fail("rename pet", &e),
        }
    }

    /// Purchases are not wired to the backend; this only acknowledges the intent.
    pub fn purchase(&mut self, identifier: &str) {
        let message = match find_item(&self.state.shop, identifier) {
            Some(item) => format!("{} purchase coming soon!", item.name),
            None => format!("Item not found: {}", identifier),
        };
        self.notify(message);
    }

    pub fn open_modal(&mut self, modal: Modal) {
        if self.state.pet.is_none() {
            self.notify(PET_NOT_LOADED);
            return;
        }
        self.dispatch(Event::ModalOpened(modal));
    }

    pub fn close_modal(&mut self) {
        self.dispatch(Event::ModalClosed);
    }

    /// Waits for the next expiry timer to fire.
    pub async fn next_timer_event(&mut self) -> Option<Event> {
        self.timer_rx.recv().await
    }

    pub fn apply_timer_event(&mut self, event: Event) {
        self.dispatch(event);
    }

    /// Applies every expiry that already fired. Returns how many were applied.
    pub fn drain_timer_events(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.timer_rx.try_recv() {
            self.dispatch(event);
            applied += 1;
        }
        applied
    }
}
