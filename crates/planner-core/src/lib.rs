//! # Planner Core
//!
//! 生產建議引擎的核心資料模型與類型定義

pub mod config;
pub mod inventory;
pub mod material;
pub mod plan;
pub mod product;

// Re-export 主要類型
pub use config::{PlannerConfig, UnknownMaterialPolicy};
pub use inventory::InventorySnapshot;
pub use material::{MaterialId, RawMaterial};
pub use plan::{ProductionPlan, ProductionSuggestion};
pub use product::{MaterialRequirement, Product, ProductId};

/// 生產建議錯誤類型
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlannerError {
    #[error("找不到任何產品")]
    EmptyCatalog,

    #[error("找不到任何原物料")]
    EmptyInventory,

    #[error("產品 {product} 引用了庫存快照中不存在的原物料 {material}")]
    UnknownMaterialReference { product: String, material: MaterialId },

    #[error("產品 {product} 對原物料 {material} 的需求數量必須大於零")]
    InvalidRequirement { product: String, material: MaterialId },

    #[error("產品 {product} 的單位價值無效: {value}")]
    InvalidUnitValue { product: String, value: f64 },

    #[error("目錄來源錯誤: {0}")]
    Catalog(String),

    #[error("配置錯誤: {0}")]
    Config(String),

    #[error("計算錯誤: {0}")]
    Calculation(String),
}

pub type Result<T> = std::result::Result<T, PlannerError>;
