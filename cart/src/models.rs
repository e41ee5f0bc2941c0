use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PotionSize {
    Small,
    Medium,
    Large,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub item_id: String,
    pub item_name: String,
    pub quantity: u32,
    #[serde(default)]
    pub potion_size: Option<PotionSize>,
    pub price: f64,
    pub total_price: f64,
    #[serde(default)]
    pub image: Option<String>,
}

impl CartItem {
    /// Builds a line with its total computed from price and quantity.
    /// Consumers downstream trust this total without recomputing it.
    pub fn priced(
        item_id: String,
        item_name: String,
        quantity: u32,
        potion_size: Option<PotionSize>,
        price: f64,
        image: Option<String>,
    ) -> Self {
        Self {
            item_id,
            item_name,
            quantity,
            potion_size,
            price,
            total_price: price * quantity as f64,
            image,
        }
    }
}

/// Pre-order basket for one (customer, restaurant) pair. Dropped once the
/// order service has snapshotted it.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub id: String,
    pub customer_id: String,
    pub restaurant_id: String,
    pub items: Vec<CartItem>,
    pub total_price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Cart {
    pub fn new(customer_id: String, restaurant_id: String) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4().to_string(),
            customer_id,
            restaurant_id,
            items: Vec::new(),
            total_price: 0.0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Adds a line, merging by item id: re-adding an item replaces its
    /// quantity rather than duplicating the line.
    pub fn upsert_item(&mut self, item: CartItem) {
        self.items.retain(|existing| existing.item_id != item.item_id);
        self.items.push(item);
        self.recompute_total();
    }

    /// Removes a line; true when something was actually dropped.
    pub fn remove_item(&mut self, item_id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.item_id != item_id);

        let removed = self.items.len() != before;
        if removed {
            self.recompute_total();
        }

        removed
    }

    fn recompute_total(&mut self) {
        self.total_price = self.items.iter().map(|item| item.total_price).sum();
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(id: &str, price: f64, quantity: u32) -> CartItem {
        CartItem::priced(
            id.to_string(),
            format!("item {id}"),
            quantity,
            Some(PotionSize::Medium),
            price,
            None,
        )
    }

    #[test]
    fn line_total_is_price_times_quantity() {
        let item = line("i1", 2.5, 3);
        assert_eq!(item.total_price, 7.5);

        let single = line("i2", 10.0, 1);
        assert_eq!(single.total_price, 10.0);
    }

    #[test]
    fn adding_items_accumulates_the_total() {
        let mut cart = Cart::new("c1".to_string(), "r1".to_string());

        cart.upsert_item(line("i1", 10.0, 2));
        cart.upsert_item(line("i2", 5.0, 1));

        assert_eq!(cart.items.len(), 2);
        assert_eq!(cart.total_price, 25.0);
    }

    #[test]
    fn readding_an_item_replaces_its_line() {
        let mut cart = Cart::new("c1".to_string(), "r1".to_string());

        cart.upsert_item(line("i1", 10.0, 1));
        cart.upsert_item(line("i1", 10.0, 3));

        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.total_price, 30.0);
    }

    #[test]
    fn removing_an_item_recomputes_the_total() {
        let mut cart = Cart::new("c1".to_string(), "r1".to_string());

        cart.upsert_item(line("i1", 10.0, 2));
        cart.upsert_item(line("i2", 5.0, 1));

        assert!(cart.remove_item("i1"));
        assert_eq!(cart.total_price, 5.0);

        assert!(!cart.remove_item("i1"));
    }
}
