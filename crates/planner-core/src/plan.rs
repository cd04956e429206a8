//! 生產計劃模型（生產建議計算結果）

use serde::{Deserialize, Serialize};

use crate::{PlannerError, Result};

/// 單一產品的生產建議
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionSuggestion {
    /// 產品名稱
    pub product_name: String,

    /// 建議生產數量（至少為 1）
    pub quantity_produced: u64,

    /// 小計 = 數量 × 單位價值
    pub subtotal: f64,
}

impl ProductionSuggestion {
    /// 創建新的生產建議，小計由數量與單位價值計算
    pub fn new(product_name: String, quantity_produced: u64, unit_value: f64) -> Self {
        Self {
            product_name,
            quantity_produced,
            subtotal: quantity_produced as f64 * unit_value,
        }
    }
}

/// 生產計劃
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionPlan {
    /// 生產建議（依處理順序）
    pub suggestions: Vec<ProductionSuggestion>,

    /// 總價值
    pub total_value: f64,
}

impl ProductionPlan {
    /// 創建空的生產計劃
    pub fn empty() -> Self {
        Self::default()
    }

    /// 添加生產建議並累加總價值
    ///
    /// 總價值按添加順序累加，與建議順序一致。
    pub fn push(&mut self, suggestion: ProductionSuggestion) {
        self.total_value += suggestion.subtotal;
        self.suggestions.push(suggestion);
    }

    /// 是否沒有任何可生產的產品
    pub fn is_empty(&self) -> bool {
        self.suggestions.is_empty()
    }

    /// 建議生產的總單位數
    pub fn total_units(&self) -> u64 {
        self.suggestions.iter().map(|s| s.quantity_produced).sum()
    }

    /// 依產品名稱查找建議
    pub fn find(&self, product_name: &str) -> Option<&ProductionSuggestion> {
        self.suggestions
            .iter()
            .find(|s| s.product_name == product_name)
    }

    /// 輸出為 JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| PlannerError::Calculation(e.to_string()))
    }
}
