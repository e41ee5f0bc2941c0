use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Item-size label carried on menu items. Not a volume unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PotionSize {
    Small,
    Medium,
    Large,
}

impl PotionSize {
    /// Maps the cart service's size label into our own enum.
    ///
    /// A missing or unrecognized label collapses to `Small`, which hides
    /// bad upstream data instead of rejecting it. Kept for compatibility
    /// with what the cart service has always sent.
    pub fn from_label(label: Option<&str>) -> Self {
        match label {
            Some("Medium") => Self::Medium,
            Some("Large") => Self::Large,
            _ => Self::Small,
        }
    }
}

/// Order lifecycle state.
///
/// Stored documents carry the status as a free string, so anything we do
/// not recognize round-trips through `Other` untouched.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    Pending,
    Cancelled,
    OutForDelivery,
    Other(String),
}

impl From<String> for OrderStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Pending" => Self::Pending,
            "Cancelled" => Self::Cancelled,
            "Out for Delivery" => Self::OutForDelivery,
            _ => Self::Other(raw),
        }
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        status.to_string()
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::Cancelled => write!(f, "Cancelled"),
            Self::OutForDelivery => write!(f, "Out for Delivery"),
            Self::Other(raw) => write!(f, "{raw}"),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDetails {
    pub name: String,
    pub contact: String,
    pub longitude: f64,
    pub latitude: f64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverDetails {
    pub driver_id: String,
    pub driver_name: String,
    pub vehicle_number: String,
}

/// Snapshot of one cart line, frozen into the order at creation time.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub item_id: String,
    pub item_name: String,
    pub quantity: u32,
    pub potion_size: PotionSize,
    pub price: f64,
    pub total_price: f64,
    pub image: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_id: String,
    pub customer_id: String,
    pub restaurant_id: String,
    pub customer_details: CustomerDetails,
    pub cart_items: Vec<OrderItem>,
    pub order_total: f64,
    pub delivery_fee: f64,
    pub total_amount: f64,
    pub payment_type: String,
    pub order_status: OrderStatus,
    pub driver_details: Option<DriverDetails>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::{OrderStatus, PotionSize};

    #[test]
    fn size_labels_map_to_variants() {
        assert_eq!(PotionSize::from_label(Some("Medium")), PotionSize::Medium);
        assert_eq!(PotionSize::from_label(Some("Large")), PotionSize::Large);
        assert_eq!(PotionSize::from_label(Some("Small")), PotionSize::Small);
    }

    #[test]
    fn missing_or_unknown_size_defaults_to_small() {
        assert_eq!(PotionSize::from_label(None), PotionSize::Small);
        assert_eq!(PotionSize::from_label(Some("Venti")), PotionSize::Small);
        assert_eq!(PotionSize::from_label(Some("")), PotionSize::Small);
    }

    #[test]
    fn status_round_trips_through_strings() {
        for raw in ["Pending", "Cancelled", "Out for Delivery"] {
            let status = OrderStatus::from(raw.to_string());
            assert!(!matches!(status, OrderStatus::Other(_)));
            assert_eq!(status.to_string(), raw);
        }
    }

    #[test]
    fn unknown_status_is_carried_verbatim() {
        let status = OrderStatus::from("Refunded".to_string());
        assert_eq!(status, OrderStatus::Other("Refunded".to_string()));
        assert_eq!(status.to_string(), "Refunded");
    }
}
