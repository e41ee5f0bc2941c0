//! The order workflow itself.
//!
//! Every mutation is a read-modify-write on a single document with no
//! version check; two concurrent updates to the same order race and the
//! last write wins. Creation is all-or-nothing: if the store write fails
//! after the cart fetch succeeded, no order exists and nothing is undone.

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::{
    cart::CartSource,
    dto::CreateOrderRequest,
    error::AppError,
    models::{CustomerDetails, DriverDetails, Order, OrderItem, OrderStatus, PotionSize},
    store::OrderStore,
};

pub const DELIVERY_FEE: f64 = 5.0;

pub async fn create_order(
    cart: &impl CartSource,
    store: &impl OrderStore,
    request: CreateOrderRequest,
) -> Result<Order, AppError> {
    let snapshot = cart
        .fetch(&request.customer_id, &request.restaurant_id)
        .await?
        .ok_or(AppError::EmptyCart)?;

    if snapshot.items.is_empty() {
        return Err(AppError::EmptyCart);
    }

    // Line totals are precomputed by the cart service; we sum, not recompute.
    let order_total: f64 = snapshot.items.iter().map(|item| item.total_price).sum();

    let cart_items = snapshot
        .items
        .into_iter()
        .map(|item| OrderItem {
            item_id: item.item_id,
            item_name: item.item_name,
            quantity: item.quantity,
            potion_size: PotionSize::from_label(item.potion_size.as_deref()),
            price: item.price,
            total_price: item.total_price,
            image: item.image,
        })
        .collect();

    let now = Utc::now();
    let order = Order {
        order_id: Uuid::new_v4().to_string(),
        customer_id: request.customer_id,
        restaurant_id: request.restaurant_id,
        customer_details: CustomerDetails {
            name: request.customer_name,
            contact: request.customer_contact,
            longitude: request.longitude,
            latitude: request.latitude,
        },
        cart_items,
        order_total,
        delivery_fee: DELIVERY_FEE,
        total_amount: order_total + DELIVERY_FEE,
        payment_type: request.payment_type,
        order_status: OrderStatus::Pending,
        driver_details: request.driver_details,
        created_at: now,
        updated_at: now,
    };

    store.put(&order).await?;
    info!("Created order {}", order.order_id);

    Ok(order)
}

pub async fn get_order(store: &impl OrderStore, order_id: &str) -> Result<Order, AppError> {
    store.get(order_id).await?.ok_or(AppError::NotFound)
}

pub async fn list_orders(store: &impl OrderStore) -> Result<Vec<Order>, AppError> {
    store.all().await
}

pub async fn orders_by_customer(
    store: &impl OrderStore,
    customer_id: &str,
) -> Result<Vec<Order>, AppError> {
    let mut orders = store.all().await?;
    orders.retain(|order| order.customer_id == customer_id);

    Ok(orders)
}

/// Overwrites the status with whatever the caller sent. No transition
/// check; legal-transition enforcement only exists for cancellation.
pub async fn update_status(
    store: &impl OrderStore,
    order_id: &str,
    status: String,
) -> Result<Order, AppError> {
    let mut order = get_order(store, order_id).await?;

    order.order_status = OrderStatus::from(status);
    order.updated_at = Utc::now();
    store.put(&order).await?;

    Ok(order)
}

pub async fn cancel_order(store: &impl OrderStore, order_id: &str) -> Result<Order, AppError> {
    let mut order = get_order(store, order_id).await?;

    if order.order_status != OrderStatus::Pending {
        return Err(AppError::InvalidState);
    }

    order.order_status = OrderStatus::Cancelled;
    order.updated_at = Utc::now();
    store.put(&order).await?;
    info!("Cancelled order {order_id}");

    Ok(order)
}

/// Attaches the driver and forces the order out for delivery, whatever
/// state it was in before.
pub async fn assign_driver(
    store: &impl OrderStore,
    order_id: &str,
    driver: DriverDetails,
) -> Result<Order, AppError> {
    let mut order = get_order(store, order_id).await?;

    order.driver_details = Some(driver);
    order.order_status = OrderStatus::OutForDelivery;
    order.updated_at = Utc::now();
    store.put(&order).await?;

    Ok(order)
}

pub async fn apply_discount(
    store: &impl OrderStore,
    order_id: &str,
    discount_amount: f64,
) -> Result<Order, AppError> {
    let mut order = get_order(store, order_id).await?;

    order.total_amount = (order.total_amount - discount_amount).max(0.0);
    order.updated_at = Utc::now();
    store.put(&order).await?;

    Ok(order)
}

#[cfg(test)]
mod tests {
    use std::{collections::HashMap, sync::Mutex};

    use super::*;
    use crate::dto::{CartDto, CartItemDto};

    struct FakeCart {
        cart: Option<CartDto>,
    }

    impl CartSource for FakeCart {
        async fn fetch(&self, _: &str, _: &str) -> Result<Option<CartDto>, AppError> {
            Ok(self.cart.clone())
        }
    }

    #[derive(Default)]
    struct MemoryStore {
        orders: Mutex<HashMap<String, Order>>,
    }

    impl OrderStore for MemoryStore {
        async fn put(&self, order: &Order) -> Result<(), AppError> {
            self.orders
                .lock()
                .unwrap()
                .insert(order.order_id.clone(), order.clone());
            Ok(())
        }

        async fn get(&self, order_id: &str) -> Result<Option<Order>, AppError> {
            Ok(self.orders.lock().unwrap().get(order_id).cloned())
        }

        async fn all(&self) -> Result<Vec<Order>, AppError> {
            Ok(self.orders.lock().unwrap().values().cloned().collect())
        }
    }

    fn item(id: &str, price: f64, quantity: u32, total: f64) -> CartItemDto {
        CartItemDto {
            item_id: id.to_string(),
            item_name: format!("item {id}"),
            quantity,
            potion_size: None,
            price,
            total_price: total,
            image: None,
        }
    }

    fn request() -> CreateOrderRequest {
        CreateOrderRequest {
            customer_id: "c1".to_string(),
            restaurant_id: "r1".to_string(),
            customer_name: "Ada".to_string(),
            customer_contact: "555-0101".to_string(),
            longitude: -86.91,
            latitude: 40.42,
            payment_type: "Card".to_string(),
            driver_details: None,
        }
    }

    async fn created_order(store: &MemoryStore) -> Order {
        let cart = FakeCart {
            cart: Some(CartDto {
                items: vec![item("i1", 10.0, 2, 20.0), item("i2", 5.0, 1, 5.0)],
            }),
        };

        create_order(&cart, store, request()).await.unwrap()
    }

    #[tokio::test]
    async fn create_sums_line_totals_and_adds_delivery_fee() {
        let store = MemoryStore::default();
        let order = created_order(&store).await;

        assert_eq!(order.order_total, 25.0);
        assert_eq!(order.delivery_fee, 5.0);
        assert_eq!(order.total_amount, 30.0);
        assert_eq!(order.order_status, OrderStatus::Pending);
        assert_eq!(order.cart_items.len(), 2);

        let stored = get_order(&store, &order.order_id).await.unwrap();
        assert_eq!(stored.total_amount, 30.0);
    }

    #[tokio::test]
    async fn create_fails_on_missing_cart_without_persisting() {
        let store = MemoryStore::default();
        let cart = FakeCart { cart: None };

        let result = create_order(&cart, &store, request()).await;

        assert!(matches!(result, Err(AppError::EmptyCart)));
        assert!(store.all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_fails_on_cart_with_no_items() {
        let store = MemoryStore::default();
        let cart = FakeCart {
            cart: Some(CartDto { items: vec![] }),
        };

        let result = create_order(&cart, &store, request()).await;

        assert!(matches!(result, Err(AppError::EmptyCart)));
        assert!(store.all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn unknown_item_sizes_default_to_small() {
        let store = MemoryStore::default();
        let mut venti = item("i1", 3.0, 1, 3.0);
        venti.potion_size = Some("Venti".to_string());
        let mut large = item("i2", 4.0, 1, 4.0);
        large.potion_size = Some("Large".to_string());

        let cart = FakeCart {
            cart: Some(CartDto {
                items: vec![venti, large],
            }),
        };

        let order = create_order(&cart, &store, request()).await.unwrap();

        assert_eq!(order.cart_items[0].potion_size, PotionSize::Small);
        assert_eq!(order.cart_items[1].potion_size, PotionSize::Large);
    }

    #[tokio::test]
    async fn cancel_only_succeeds_from_pending() {
        let store = MemoryStore::default();
        let order = created_order(&store).await;

        let cancelled = cancel_order(&store, &order.order_id).await.unwrap();
        assert_eq!(cancelled.order_status, OrderStatus::Cancelled);

        // Second cancel hits a non-Pending order and must not touch it.
        let result = cancel_order(&store, &order.order_id).await;
        assert!(matches!(result, Err(AppError::InvalidState)));

        let stored = get_order(&store, &order.order_id).await.unwrap();
        assert_eq!(stored.order_status, OrderStatus::Cancelled);
        assert_eq!(stored.updated_at, cancelled.updated_at);
    }

    #[tokio::test]
    async fn cancel_missing_order_is_not_found() {
        let store = MemoryStore::default();

        let result = cancel_order(&store, "nope").await;
        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn discount_clamps_total_at_zero() {
        let store = MemoryStore::default();
        let order = created_order(&store).await;

        let discounted = apply_discount(&store, &order.order_id, 999.0).await.unwrap();
        assert_eq!(discounted.total_amount, 0.0);

        let partial = created_order(&store).await;
        let discounted = apply_discount(&store, &partial.order_id, 10.0).await.unwrap();
        assert_eq!(discounted.total_amount, 20.0);
    }

    #[tokio::test]
    async fn assign_driver_forces_out_for_delivery_from_any_state() {
        let store = MemoryStore::default();
        let order = created_order(&store).await;
        cancel_order(&store, &order.order_id).await.unwrap();

        let driver = DriverDetails {
            driver_id: "d1".to_string(),
            driver_name: "Sam".to_string(),
            vehicle_number: "IN-1234".to_string(),
        };

        let updated = assign_driver(&store, &order.order_id, driver.clone())
            .await
            .unwrap();

        assert_eq!(updated.order_status, OrderStatus::OutForDelivery);
        assert_eq!(updated.driver_details, Some(driver));
    }

    #[tokio::test]
    async fn status_overwrite_is_unconditional() {
        let store = MemoryStore::default();
        let order = created_order(&store).await;

        let updated = update_status(&store, &order.order_id, "Refunded".to_string())
            .await
            .unwrap();

        assert_eq!(
            updated.order_status,
            OrderStatus::Other("Refunded".to_string())
        );
    }

    #[tokio::test]
    async fn listing_filters_by_customer() {
        let store = MemoryStore::default();
        created_order(&store).await;

        let cart = FakeCart {
            cart: Some(CartDto {
                items: vec![item("i9", 1.0, 1, 1.0)],
            }),
        };
        let mut other = request();
        other.customer_id = "c2".to_string();
        create_order(&cart, &store, other).await.unwrap();

        assert_eq!(list_orders(&store).await.unwrap().len(), 2);

        let mine = orders_by_customer(&store, "c1").await.unwrap();
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].customer_id, "c1");
    }
}
