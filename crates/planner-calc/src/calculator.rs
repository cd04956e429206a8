//! 生產建議主計算器

use planner_core::{
    InventorySnapshot, PlannerConfig, PlannerError, Product, ProductionPlan, ProductionSuggestion,
    RawMaterial,
};

use crate::{SkipReason, SuggestionResult, SuggestionWarning};

/// 生產建議計算器
///
/// 不持有任何跨呼叫狀態；每次計算自行建立並獨佔一份庫存快照，
/// 因此可以在多個執行緒上同時呼叫。
#[derive(Debug, Clone, Default)]
pub struct SuggestionCalculator {
    config: PlannerConfig,
}

impl SuggestionCalculator {
    /// 創建新的計算器
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// 主計算入口
    pub fn calculate(
        &self,
        products: &[Product],
        raw_materials: &[RawMaterial],
    ) -> planner_core::Result<SuggestionResult> {
        tracing::info!(
            "開始生產建議計算：產品 {} 筆，原物料 {} 筆",
            products.len(),
            raw_materials.len()
        );

        let start_time = std::time::Instant::now();

        if products.is_empty() {
            return Err(PlannerError::EmptyCatalog);
        }

        // Step 1: 建立庫存快照
        tracing::debug!("Step 1: 建立庫存快照");
        let mut snapshot = InventorySnapshot::from_materials(raw_materials)?;

        if self.config.validate_inputs {
            crate::ranking::validate_products(products)?;
        }
        snapshot.validate_references(products, self.config.unknown_material_policy)?;
        tracing::debug!("快照原物料數量: {}", snapshot.len());

        // Step 2: 依單位價值排序
        tracing::debug!("Step 2: 產品排序");
        let ranked = crate::ranking::rank_by_value(products);

        // Step 3: 逐產品分配
        tracing::debug!("Step 3: 逐產品分配");
        let mut result = SuggestionResult::empty();

        for product in ranked {
            let capacity = crate::allocation::producible_units(product, &snapshot);

            tracing::debug!(
                "產品 {} 可生產 {} 單位（限制原物料: {:?}）",
                product.name,
                capacity.units,
                capacity.limiting_material
            );

            if !capacity.is_producible() {
                let reason = match capacity.limiting_material {
                    None => {
                        tracing::warn!("產品 {} 沒有物料清單，略過", product.name);
                        SkipReason::EmptyBillOfMaterials
                    }
                    Some(material) if !snapshot.contains(material) => {
                        SkipReason::UnknownMaterial { material }
                    }
                    Some(material) => SkipReason::InsufficientStock {
                        limiting_material: material,
                    },
                };
                result.add_warning(SuggestionWarning::new(product.name.clone(), reason));
                continue;
            }

            crate::allocation::consume(product, capacity.units, &mut snapshot)?;

            result.plan.push(ProductionSuggestion::new(
                product.name.clone(),
                capacity.units,
                product.unit_value,
            ));
        }

        result.remaining_inventory = snapshot.to_sorted_vec();
        result.calculation_time_ms = Some(start_time.elapsed().as_millis());

        tracing::info!("生產建議計算完成，耗時 {:?}", start_time.elapsed());
        tracing::info!(
            "建議產品數量: {}，總價值: {}",
            result.plan.suggestions.len(),
            result.plan.total_value
        );

        Ok(result)
    }

    /// 獲取配置引用
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }
}

/// 以預設配置計算生產計劃
pub fn suggest_production(
    products: &[Product],
    raw_materials: &[RawMaterial],
) -> planner_core::Result<ProductionPlan> {
    SuggestionCalculator::default()
        .calculate(products, raw_materials)
        .map(|result| result.plan)
}
