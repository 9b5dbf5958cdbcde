use moodpet_core::models::{unlocked_count, Achievement, Emotion, MoodEntry, ShopItem};

/// Number of moods listed in the mood view.
pub const RECENT_MOODS_WINDOW: usize = 5;

pub fn mood_modal(moods: &[MoodEntry]) -> String {
    let mut lines = vec![
        "How are you feeling today?".to_string(),
        Emotion::ALL
            .iter()
            .map(|e| format!("{} {}", e.icon(), e))
            .collect::<Vec<_>>()
            .join("   "),
    ];

    lines.push(String::new());
    if moods.is_empty() {
        lines.push("No moods logged yet".to_string());
    } else {
        lines.push("Recent moods:".to_string());
        // The store keeps moods most-recent-first.
        for mood in moods.iter().take(RECENT_MOODS_WINDOW) {
            lines.push(format!(
                "  {} {:<8} intensity {:>2}  {}",
                mood.emotion.icon(),
                mood.emotion.to_string(),
                mood.intensity,
                mood.timestamp.format("%Y-%m-%d %H:%M")
            ));
        }
    }
    lines.join("\n")
}

pub fn shop_modal(items: &[ShopItem], coins: u32) -> String {
    let mut lines = vec![format!("Shop (you have 💰 {})", coins)];
    if items.is_empty() {
        lines.push("The shop is empty".to_string());
    }
    for item in items {
        let marker = if item.affordable_with(coins) { " " } else { "✗" };
        lines.push(format!(
            "{} {} {:<20} {:>4} coins  {}",
            marker, item.icon, item.name, item.price, item.description
        ));
    }
    lines.join("\n")
}

pub fn achievements_modal(achievements: &[Achievement]) -> String {
    let mut lines = vec![format!(
        "Achievements ({}/{} unlocked)",
        unlocked_count(achievements),
        achievements.len()
    )];
    for achievement in achievements {
        let status = if achievement.unlocked { "✅" } else { "🔒" };
        lines.push(format!(
            "{} {} {} - {}",
            status, achievement.icon, achievement.name, achievement.description
        ));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn moods(count: usize) -> Vec<MoodEntry> {
        let newest = Utc.with_ymd_and_hms(2025, 3, 10, 20, 0, 0).unwrap();
        (0..count)
            .map(|i| MoodEntry {
                id: format!("m{}", i),
                pet_id: "p1".to_string(),
                emotion: Emotion::ALL[i % Emotion::ALL.len()],
                intensity: 5,
                note: None,
                timestamp: newest - Duration::hours(i as i64),
            })
            .collect()
    }

    #[test]
    fn test_mood_modal_truncates_to_recent_window() {
        let output = mood_modal(&moods(8));
        let listed = output.lines().filter(|l| l.contains("intensity")).count();
        assert_eq!(listed, RECENT_MOODS_WINDOW);
        assert!(output.contains("2025-03-10 20:00"));
        assert!(!output.contains("2025-03-10 14:00"));
    }

    #[test]
    fn test_mood_modal_lists_every_emotion() {
        let output = mood_modal(&[]);
        for emotion in Emotion::ALL {
            assert!(output.contains(&emotion.to_string()));
        }
        assert!(output.contains("No moods logged yet"));
    }

    #[test]
    fn test_shop_modal_marks_unaffordable_items() {
        let items = vec![
            ShopItem {
                id: "s1".to_string(),
                name: "Toy Ball".to_string(),
                description: "Fun toy for playing".to_string(),
                price: 30,
                category: "toy".to_string(),
                icon: "🏀".to_string(),
            },
            ShopItem {
                id: "s2".to_string(),
                name: "Sparkle Background".to_string(),
                description: "Beautiful starry background".to_string(),
                price: 100,
                category: "background".to_string(),
                icon: "✨".to_string(),
            },
        ];
        let output = shop_modal(&items, 50);

        assert!(output.starts_with("Shop (you have 💰 50)"));
        assert!(output.lines().any(|l| l.starts_with("  🏀 Toy Ball")));
        assert!(output.lines().any(|l| l.starts_with("✗ ✨ Sparkle Background")));
    }

    #[test]
    fn test_achievements_modal_counts_unlocked() {
        let achievements = vec![
            Achievement {
                id: "a1".to_string(),
                name: "First Steps".to_string(),
                description: "Create your first pet".to_string(),
                icon: "🐣".to_string(),
                unlocked: true,
                unlocked_at: None,
                pet_id: "p1".to_string(),
            },
            Achievement {
                id: "a2".to_string(),
                name: "Happy Pet".to_string(),
                description: "Reach 100 happiness".to_string(),
                icon: "😊".to_string(),
                unlocked: false,
                unlocked_at: None,
                pet_id: "p1".to_string(),
            },
        ];
        let output = achievements_modal(&achievements);

        assert!(output.starts_with("Achievements (1/2 unlocked)"));
        assert!(output.contains("✅ 🐣 First Steps"));
        assert!(output.contains("🔒 😊 Happy Pet"));
    }
}
