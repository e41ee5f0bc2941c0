use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    dto::{ApplyDiscountRequest, AssignDriverRequest, CreateOrderRequest, UpdateStatusRequest},
    error::AppError,
    models::DriverDetails,
    service,
    state::AppState,
};

pub async fn create_order_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateOrderRequest>,
) -> Result<impl IntoResponse, AppError> {
    let order = service::create_order(&state.cart, &state.orders, request).await?;

    Ok((StatusCode::CREATED, Json(order)))
}

pub async fn get_order_handler(
    State(state): State<Arc<AppState>>,
    Path(order_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let order = service::get_order(&state.orders, &order_id).await?;

    Ok(Json(order))
}

pub async fn list_orders_handler(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let orders = service::list_orders(&state.orders).await?;

    Ok(Json(orders))
}

pub async fn orders_by_customer_handler(
    State(state): State<Arc<AppState>>,
    Path(customer_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let orders = service::orders_by_customer(&state.orders, &customer_id).await?;

    Ok(Json(orders))
}

pub async fn update_status_handler(
    State(state): State<Arc<AppState>>,
    Path(order_id): Path<String>,
    Json(request): Json<UpdateStatusRequest>,
) -> Result<impl IntoResponse, AppError> {
    let order = service::update_status(&state.orders, &order_id, request.status).await?;

    Ok(Json(order))
}

pub async fn cancel_order_handler(
    State(state): State<Arc<AppState>>,
    Path(order_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let order = service::cancel_order(&state.orders, &order_id).await?;

    Ok(Json(order))
}

pub async fn assign_driver_handler(
    State(state): State<Arc<AppState>>,
    Path(order_id): Path<String>,
    Json(request): Json<AssignDriverRequest>,
) -> Result<impl IntoResponse, AppError> {
    let driver = DriverDetails {
        driver_id: request.driver_id,
        driver_name: request.driver_name,
        vehicle_number: request.vehicle_number,
    };

    let order = service::assign_driver(&state.orders, &order_id, driver).await?;

    Ok(Json(order))
}

pub async fn apply_discount_handler(
    State(state): State<Arc<AppState>>,
    Path(order_id): Path<String>,
    Json(request): Json<ApplyDiscountRequest>,
) -> Result<impl IntoResponse, AppError> {
    let order =
        service::apply_discount(&state.orders, &order_id, request.discount_amount).await?;

    Ok(Json(order))
}
