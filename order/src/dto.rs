use serde::{Deserialize, Serialize};

use crate::models::DriverDetails;

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub customer_id: String,
    pub restaurant_id: String,
    pub customer_name: String,
    pub customer_contact: String,
    pub longitude: f64,
    pub latitude: f64,
    pub payment_type: String,
    pub driver_details: Option<DriverDetails>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignDriverRequest {
    pub driver_id: String,
    pub driver_name: String,
    pub vehicle_number: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyDiscountRequest {
    pub discount_amount: f64,
}

/// Wire shape of the cart service's lookup response.
///
/// The size comes across as a plain string so a value we do not know about
/// does not fail the whole fetch.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CartDto {
    #[serde(default)]
    pub items: Vec<CartItemDto>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemDto {
    pub item_id: String,
    pub item_name: String,
    pub quantity: u32,
    #[serde(default)]
    pub potion_size: Option<String>,
    pub price: f64,
    pub total_price: f64,
    #[serde(default)]
    pub image: Option<String>,
}
