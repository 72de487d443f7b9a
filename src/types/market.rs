use serde::{Deserialize, Serialize};

/// Best buy and sell orders for one item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopOrders {
    #[serde(default)]
    pub buy_orders: Vec<serde_json::Value>,
    #[serde(default)]
    pub sell_orders: Vec<serde_json::Value>,
}
