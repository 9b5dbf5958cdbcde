mod achievement;
mod action;
mod mood;
mod pet;
mod pet_stage;
mod shop_item;

pub use achievement::{unlocked_count, Achievement};
pub use action::{ActionOutcome, PetAction};
pub use mood::{sort_recent_first, Emotion, MoodEntry, NewMood, INTENSITY_RANGE};
pub use pet::{Pet, PROGRESS_THRESHOLD, STAT_CAP};
pub use pet_stage::PetStage;
pub use shop_item::{find_item, ShopItem};
