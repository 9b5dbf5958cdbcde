use serde::{Deserialize, Serialize};

/// Entry of the global shop catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: u32,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub icon: String,
}

impl ShopItem {
    pub fn affordable_with(&self, coins: u32) -> bool {
        coins >= self.price
    }
}

/// Finds an item by id, falling back to a case-insensitive name match.
pub fn find_item<'a>(catalog: &'a [ShopItem], identifier: &str) -> Option<&'a ShopItem> {
    catalog
        .iter()
        .find(|item| item.id == identifier)
        .or_else(|| {
            catalog
                .iter()
                .find(|item| item.name.eq_ignore_ascii_case(identifier.trim()))
        })
}
