//! Cart and order content payloads

use serde::Serialize;

use crate::models::{CartSnapshot, LineItem, OrderSnapshot, CONFIGURABLE_TYPE};
use crate::user_data::{user_data_from_order, UserData};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentItem {
    pub id: String,
    pub quantity: f64,
    pub item_price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomData {
    pub content_type: &'static str,
    pub content_ids: Vec<String>,
    pub contents: Vec<ContentItem>,
    pub num_items: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
}

/// Event payload for a placed order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionPayload {
    pub user_data: UserData,
    pub custom_data: CustomData,
}

/// Round to cents
pub fn round_price(price: f64) -> f64 {
    (price * 100.0).round() / 100.0
}

/// `product_group` for configurable products, `product` otherwise
pub fn content_type(product_type: &str) -> &'static str {
    if product_type == CONFIGURABLE_TYPE {
        "product_group"
    } else {
        "product"
    }
}

pub fn content_ids(items: &[LineItem]) -> Vec<String> {
    items.iter().map(|i| i.content_id.clone()).collect()
}

/// Cart lines, quantities as stored
pub fn contents(items: &[LineItem]) -> Vec<ContentItem> {
    items
        .iter()
        .map(|i| ContentItem {
            id: i.content_id.clone(),
            quantity: i.qty,
            item_price: round_price(i.final_price),
        })
        .collect()
}

/// Order lines, ordered quantities truncated to whole units
pub fn order_contents(items: &[LineItem]) -> Vec<ContentItem> {
    contents(items)
        .into_iter()
        .map(|c| ContentItem {
            quantity: c.quantity.max(0.0).trunc(),
            ..c
        })
        .collect()
}

pub fn num_items(items: &[LineItem]) -> f64 {
    items.iter().map(|i| i.qty).sum()
}

/// Subtotal in cents precision; zero or missing yields `None`
pub fn total(subtotal: Option<f64>) -> Option<f64> {
    subtotal.filter(|s| *s != 0.0).map(round_price)
}

fn custom_data(
    items: &[LineItem],
    contents: Vec<ContentItem>,
    subtotal: Option<f64>,
    currency: Option<&String>,
) -> CustomData {
    // a single configurable line makes the whole event a product group event
    let event_type = items
        .iter()
        .map(|i| content_type(&i.product_type))
        .find(|t| *t == "product_group")
        .unwrap_or("product");

    CustomData {
        content_type: event_type,
        content_ids: content_ids(items),
        contents,
        num_items: num_items(items),
        value: total(subtotal),
        currency: currency.cloned(),
        order_id: None,
    }
}

pub fn custom_data_for_cart(cart: Option<&CartSnapshot>) -> Option<CustomData> {
    let cart = cart?;
    Some(custom_data(
        &cart.items,
        contents(&cart.items),
        cart.subtotal,
        cart.currency.as_ref(),
    ))
}

pub fn custom_data_for_order(order: Option<&OrderSnapshot>) -> Option<CustomData> {
    let order = order?;
    let mut data = custom_data(
        &order.items,
        order_contents(&order.items),
        order.subtotal,
        order.currency.as_ref(),
    );
    data.order_id = order.id.clone();
    Some(data)
}

/// Full purchase payload for the last order
pub fn conversion_payload(order: Option<&OrderSnapshot>) -> Option<ConversionPayload> {
    Some(ConversionPayload {
        user_data: user_data_from_order(order)?,
        custom_data: custom_data_for_order(order)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, product_type: &str, qty: f64, price: f64) -> LineItem {
        LineItem {
            content_id: id.to_string(),
            product_type: product_type.to_string(),
            qty,
            final_price: price,
        }
    }

    #[test]
    fn test_cart_contents() {
        let cart = CartSnapshot {
            items: vec![item("SKU-1", "simple", 2.0, 9.999), item("SKU-2", "virtual", 1.0, 5.0)],
            subtotal: Some(24.998),
            currency: Some("USD".to_string()),
        };

        let data = custom_data_for_cart(Some(&cart)).unwrap();
        assert_eq!(data.content_ids, vec!["SKU-1", "SKU-2"]);
        assert_eq!(data.num_items, 3.0);
        assert_eq!(data.value, Some(25.0));
        assert_eq!(data.content_type, "product");
        assert_eq!(
            data.contents[0],
            ContentItem { id: "SKU-1".to_string(), quantity: 2.0, item_price: 10.0 }
        );
        assert_eq!(data.order_id, None);
    }

    #[test]
    fn test_cart_keeps_fractional_quantity() {
        let cart = CartSnapshot {
            items: vec![item("FABRIC-M", "simple", 2.5, 4.0)],
            subtotal: Some(10.0),
            currency: None,
        };

        let data = custom_data_for_cart(Some(&cart)).unwrap();
        assert_eq!(data.contents[0].quantity, 2.5);
        assert_eq!(data.contents[0].quantity, data.num_items);
    }

    #[test]
    fn test_empty_cart() {
        assert_eq!(custom_data_for_cart(None), None);

        let data = custom_data_for_cart(Some(&CartSnapshot::default())).unwrap();
        assert!(data.contents.is_empty());
        assert_eq!(data.num_items, 0.0);
        assert_eq!(data.value, None);
    }

    #[test]
    fn test_order_quantities_are_truncated() {
        let order = OrderSnapshot {
            id: Some("000000042".to_string()),
            items: vec![item("CFG-1", "configurable", 3.0, 20.0), item("SKU-9", "simple", 1.5, 1.0)],
            subtotal: Some(61.5),
            ..Default::default()
        };

        let data = custom_data_for_order(Some(&order)).unwrap();
        assert_eq!(data.order_id.as_deref(), Some("000000042"));
        assert_eq!(data.contents[1].quantity, 1.0);
        assert_eq!(data.content_type, "product_group");
    }

    #[test]
    fn test_content_type() {
        assert_eq!(content_type("configurable"), "product_group");
        assert_eq!(content_type("simple"), "product");
    }

    #[test]
    fn test_conversion_payload_serializes() {
        let order = OrderSnapshot {
            id: Some("7".to_string()),
            customer_id: Some("3".to_string()),
            subtotal: Some(0.0),
            ..Default::default()
        };

        let payload = conversion_payload(Some(&order)).unwrap();
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["user_data"]["external_id"], "3");
        assert_eq!(json["custom_data"]["order_id"], "7");
        assert!(json["custom_data"].get("value").is_none());
        assert!(conversion_payload(None).is_none());
    }
}
