//! # Production Planner
//!
//! 依現有原物料庫存建議可生產的產品數量：
//! 產品依單位價值降序排列，逐一以剩餘庫存分配完整單位數。
//!
//! ```
//! use production_planner::{suggest_production, MaterialId, Product, ProductId, RawMaterial};
//!
//! let products = vec![Product::new(ProductId(1), "Widget", 150.0).with_requirement(MaterialId(1), 10)];
//! let materials = vec![RawMaterial::new(MaterialId(1), "Steel", 100)];
//!
//! let plan = suggest_production(&products, &materials).unwrap();
//! assert_eq!(plan.suggestions[0].quantity_produced, 10);
//! assert_eq!(plan.total_value, 1500.0);
//! ```

pub mod catalog;
pub mod logging;

pub use catalog::{suggest_from_catalog, CatalogSource, InMemoryCatalog};
pub use planner_calc::{
    suggest_production, Capacity, SkipReason, SuggestionCalculator, SuggestionResult,
    SuggestionWarning,
};
pub use planner_core::{
    InventorySnapshot, MaterialId, MaterialRequirement, PlannerConfig, PlannerError, Product,
    ProductId, ProductionPlan, ProductionSuggestion, RawMaterial, Result, UnknownMaterialPolicy,
};
