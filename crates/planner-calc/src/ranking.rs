//! 產品排序

use planner_core::{PlannerError, Product, Result};

/// 依單位價值降序排列產品
///
/// 使用穩定排序：價值相同的產品保持目錄中的相對順序。
pub fn rank_by_value(products: &[Product]) -> Vec<&Product> {
    let mut ranked: Vec<&Product> = products.iter().collect();
    ranked.sort_by(|a, b| b.unit_value.total_cmp(&a.unit_value));
    ranked
}

/// 驗證產品的單位價值與物料需求數量
pub fn validate_products(products: &[Product]) -> Result<()> {
    for product in products {
        if !product.unit_value.is_finite() || product.unit_value < 0.0 {
            return Err(PlannerError::InvalidUnitValue {
                product: product.name.clone(),
                value: product.unit_value,
            });
        }

        if let Some(req) = product
            .materials
            .iter()
            .find(|req| req.required_quantity == 0)
        {
            return Err(PlannerError::InvalidRequirement {
                product: product.name.clone(),
                material: req.material_id,
            });
        }
    }
    Ok(())
}
