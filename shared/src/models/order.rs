//! Order Model

use serde::{Deserialize, Serialize};

/// Status assigned to an order created without one
pub const DEFAULT_ORDER_STATUS: &str = "new";

/// Order header (订单)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Order {
    pub id: i64,
    pub table_id: i64,
    pub customer_id: Option<i64>,
    pub waiter_id: i64,
    pub reservation_id: Option<i64>,
    pub shift_id: Option<i64>,
    /// Store-assigned creation time
    pub created_at: i64,
    pub status: String,
}

/// Order draft: everything but the store-assigned id and timestamp
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderDraft {
    pub table_id: i64,
    pub customer_id: Option<i64>,
    pub waiter_id: i64,
    pub reservation_id: Option<i64>,
    pub shift_id: Option<i64>,
    /// Empty or absent means [`DEFAULT_ORDER_STATUS`]
    pub status: Option<String>,
}

impl OrderDraft {
    /// Status to persist on creation
    pub fn initial_status(&self) -> &str {
        match self.status.as_deref() {
            Some(s) if !s.trim().is_empty() => s,
            _ => DEFAULT_ORDER_STATUS,
        }
    }
}

/// Order line item
///
/// `price_at_moment` is a point-in-time snapshot, never recomputed from the dish.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct OrderItem {
    pub id: i64,
    pub order_id: i64,
    pub dish_id: i64,
    pub quantity: i32,
    pub price_at_moment: f64,
    pub comment: Option<String>,
}

/// Line item input, upserted by `(order_id, dish_id)`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemInput {
    pub dish_id: i64,
    pub quantity: i32,
    #[serde(default)]
    pub price_at_moment: f64,
    pub comment: Option<String>,
}

/// Create order request: draft fields plus the initial items
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    #[serde(flatten)]
    pub order: OrderDraft,
    #[serde(default)]
    pub items: Vec<OrderItemInput>,
}

/// Order together with its committed items
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderWithItems {
    #[serde(flatten)]
    pub order: Order,
    pub items: Vec<OrderItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_status_defaults_to_new() {
        let mut draft = OrderDraft {
            table_id: 1,
            waiter_id: 2,
            ..Default::default()
        };
        assert_eq!(draft.initial_status(), "new");

        draft.status = Some("   ".to_string());
        assert_eq!(draft.initial_status(), "new");

        draft.status = Some("preparing".to_string());
        assert_eq!(draft.initial_status(), "preparing");
    }

    #[test]
    fn test_create_request_is_flat() {
        let json = r#"{
            "table_id": 1,
            "waiter_id": 2,
            "items": [{"dish_id": 5, "quantity": 2, "price_at_moment": 9.99}]
        }"#;
        let req: CreateOrderRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.order.table_id, 1);
        assert_eq!(req.order.waiter_id, 2);
        assert!(req.order.customer_id.is_none());
        assert_eq!(req.items.len(), 1);
        assert_eq!(req.items[0].dish_id, 5);
        assert!(req.items[0].comment.is_none());
    }
}
