use moodpet_core::models::{Pet, PetAction, STAT_CAP};

const BAR_WIDTH: usize = 20;

/// Renders a bar for `fraction`, clamped to `[0, 1]`.
pub fn progress_bar(fraction: f64) -> String {
    let fraction = if fraction.is_finite() {
        fraction.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let filled = (fraction * BAR_WIDTH as f64).round() as usize;
    format!(
        "[{}{}] {:>3}%",
        "█".repeat(filled),
        "░".repeat(BAR_WIDTH - filled),
        (fraction * 100.0).round() as u32
    )
}

fn stat_bar(value: u32) -> String {
    progress_bar(value as f64 / STAT_CAP as f64)
}

fn pulse_tag(action: PetAction) -> &'static str {
    match action {
        PetAction::Feed => "🍖 nom nom!",
        PetAction::Play => "🎾 wheee!",
        PetAction::Train => "💪 stronger!",
    }
}

pub fn pet_panel(pet: &Pet, pulse: Option<PetAction>) -> String {
    let mut header = format!("{}  {}  ({})", pet.stage.icon(), pet.name, pet.stage);
    if let Some(action) = pulse {
        header.push_str("   ");
        header.push_str(pulse_tag(action));
    }

    let next_stage = match (pet.stage.next(), pet.experience_to_next_stage()) {
        (Some(next), Some(0)) => format!("ready to become {}", next),
        (Some(next), Some(remaining)) => format!("{} xp to {}", remaining, next),
        _ => "fully grown".to_string(),
    };

    let lines = [
        header,
        "-".repeat(40),
        format!(
            "Happiness   {} {}/{}",
            stat_bar(pet.display_happiness()),
            pet.display_happiness(),
            STAT_CAP
        ),
        format!(
            "Health      {} {}/{}",
            stat_bar(pet.display_health()),
            pet.display_health(),
            STAT_CAP
        ),
        format!("Experience  {} ({})", progress_bar(pet.progress()), next_stage),
        format!("Coins       💰 {}", pet.coins),
    ];
    lines.join("\n")
}
