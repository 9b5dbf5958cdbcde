//! Presentation layer.
//!
//! Pure functions from [`AppState`] to text. Nothing here talks to the
//! backend or mutates state.

mod modals;
mod pet_panel;

pub use modals::{achievements_modal, mood_modal, shop_modal};
pub use pet_panel::pet_panel;

use moodpet_core::{AppState, Modal};

pub const LOADING: &str = "Loading your pet...";

pub fn notification_banner(text: &str) -> String {
    format!("🔔 {}", text)
}

/// Renders the whole screen for `state`.
pub fn render(state: &AppState) -> String {
    let Some(pet) = &state.pet else {
        let mut sections = vec![LOADING.to_string()];
        if let Some(text) = &state.notification {
            sections.push(notification_banner(text));
        }
        return sections.join("\n\n");
    };

    let mut sections = Vec::new();
    if let Some(text) = &state.notification {
        sections.push(notification_banner(text));
    }
    sections.push(pet_panel(pet, state.pulse));

    match state.modal {
        Modal::None => {}
        Modal::Mood => sections.push(mood_modal(&state.moods)),
        Modal::Shop => sections.push(shop_modal(&state.shop, pet.coins)),
        Modal::Achievements => sections.push(achievements_modal(&state.achievements)),
    }

    sections.join("\n\n")
}
