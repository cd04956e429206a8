//! # Production Suggestion Engine
//!
//! 貪婪式生產建議計算引擎

pub mod allocation;
pub mod calculator;
pub mod ranking;

// Re-export 主要類型
pub use allocation::Capacity;
pub use calculator::{suggest_production, SuggestionCalculator};

use planner_core::{MaterialId, ProductionPlan};

/// 生產建議計算結果
#[derive(Debug, Clone)]
pub struct SuggestionResult {
    /// 生產計劃
    pub plan: ProductionPlan,

    /// 分配後的剩餘庫存（依原物料ID排序）
    pub remaining_inventory: Vec<(MaterialId, u64)>,

    /// 未能生產的產品說明
    pub warnings: Vec<SuggestionWarning>,

    /// 計算耗時（毫秒）
    pub calculation_time_ms: Option<u128>,
}

impl SuggestionResult {
    /// 創建空的計算結果
    pub fn empty() -> Self {
        Self {
            plan: ProductionPlan::empty(),
            remaining_inventory: Vec::new(),
            warnings: Vec::new(),
            calculation_time_ms: None,
        }
    }

    /// 添加警告
    pub fn add_warning(&mut self, warning: SuggestionWarning) {
        self.warnings.push(warning);
    }
}

/// 產品未能生產的警告
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionWarning {
    pub product_name: String,
    pub reason: SkipReason,
}

impl SuggestionWarning {
    pub fn new(product_name: String, reason: SkipReason) -> Self {
        Self {
            product_name,
            reason,
        }
    }

    pub fn message(&self) -> String {
        match self.reason {
            SkipReason::EmptyBillOfMaterials => {
                format!("產品 {} 沒有物料清單，無法生產", self.product_name)
            }
            SkipReason::InsufficientStock { limiting_material } => format!(
                "產品 {} 受原物料 {} 庫存限制，無法生產",
                self.product_name, limiting_material
            ),
            SkipReason::UnknownMaterial { material } => format!(
                "產品 {} 引用的原物料 {} 不在庫存中",
                self.product_name, material
            ),
        }
    }
}

/// 無法生產的原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// 物料清單為空（或沒有任何正數需求）
    EmptyBillOfMaterials,
    /// 庫存不足以生產一單位
    InsufficientStock { limiting_material: MaterialId },
    /// 引用的原物料不在快照中
    UnknownMaterial { material: MaterialId },
}
