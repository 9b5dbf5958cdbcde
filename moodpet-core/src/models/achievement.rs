use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Achievement state computed by the backend; read-only on the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub unlocked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unlocked_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub pet_id: String,
}

/// Number of unlocked achievements in a snapshot.
pub fn unlocked_count(achievements: &[Achievement]) -> usize {
    achievements.iter().filter(|a| a.unlocked).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_and_count() {
        let json = r#"[
            {"id":"a1","name":"First Steps","description":"Create your first pet","icon":"🐣","unlocked":true,"pet_id":"p1"},
            {"id":"a2","name":"Mood Tracker","description":"Log 10 mood entries","icon":"📊","unlocked":false,"unlocked_at":null,"pet_id":"p1"}
        ]"#;
        let achievements: Vec<Achievement> = serde_json::from_str(json).unwrap();

        assert_eq!(achievements.len(), 2);
        assert_eq!(unlocked_count(&achievements), 1);
        assert!(achievements[1].unlocked_at.is_none());
    }
}
