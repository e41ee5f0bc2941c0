use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::info;

use crate::{
    error::AppError,
    models::{Cart, CartItem, PotionSize},
    state::AppState,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddItemRequest {
    pub item_id: String,
    pub item_name: String,
    pub quantity: u32,
    #[serde(default)]
    pub potion_size: Option<PotionSize>,
    pub price: f64,
    #[serde(default)]
    pub image: Option<String>,
}

pub async fn get_cart_handler(
    State(state): State<Arc<AppState>>,
    Path((customer_id, restaurant_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let cart = state
        .carts
        .find(&customer_id, &restaurant_id)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(cart))
}

pub async fn add_item_handler(
    State(state): State<Arc<AppState>>,
    Path((customer_id, restaurant_id)): Path<(String, String)>,
    Json(request): Json<AddItemRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut cart = state
        .carts
        .find(&customer_id, &restaurant_id)
        .await?
        .unwrap_or_else(|| Cart::new(customer_id, restaurant_id));

    cart.upsert_item(CartItem::priced(
        request.item_id,
        request.item_name,
        request.quantity,
        request.potion_size,
        request.price,
        request.image,
    ));

    state.carts.save(&cart).await?;

    Ok((StatusCode::CREATED, Json(cart)))
}

pub async fn remove_item_handler(
    State(state): State<Arc<AppState>>,
    Path((customer_id, restaurant_id, item_id)): Path<(String, String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let mut cart = state
        .carts
        .find(&customer_id, &restaurant_id)
        .await?
        .ok_or(AppError::NotFound)?;

    if !cart.remove_item(&item_id) {
        return Err(AppError::ItemNotFound);
    }

    state.carts.save(&cart).await?;

    Ok(Json(cart))
}

pub async fn delete_cart_handler(
    State(state): State<Arc<AppState>>,
    Path((customer_id, restaurant_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    state.carts.delete(&customer_id, &restaurant_id).await?;
    info!("Dropped cart for customer {customer_id}, restaurant {restaurant_id}");

    Ok(StatusCode::NO_CONTENT)
}
