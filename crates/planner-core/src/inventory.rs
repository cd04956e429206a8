//! 庫存快照
//!
//! 每次計劃運算從原物料清單建立一份快照，運算期間由分配器獨佔並就地扣減，
//! 運算結束後即丟棄，不會寫回外部庫存。

use std::collections::HashMap;

use crate::config::UnknownMaterialPolicy;
use crate::material::{MaterialId, RawMaterial};
use crate::product::Product;
use crate::{PlannerError, Result};

/// 庫存快照（原物料ID → 剩餘數量）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventorySnapshot {
    remaining: HashMap<MaterialId, u64>,
}

impl InventorySnapshot {
    /// 從原物料清單建立快照
    ///
    /// 清單為空時返回 [`PlannerError::EmptyInventory`]。重複的ID以最後一筆為準。
    pub fn from_materials(materials: &[RawMaterial]) -> Result<Self> {
        if materials.is_empty() {
            return Err(PlannerError::EmptyInventory);
        }

        let remaining = materials
            .iter()
            .map(|material| (material.id, u64::from(material.stock)))
            .collect();

        Ok(Self { remaining })
    }

    /// 檢查所有產品引用的原物料都存在於快照中
    ///
    /// 只在建立快照後檢查一次；之後的存取不再需要逐次確認。
    pub fn validate_references(
        &self,
        products: &[Product],
        policy: UnknownMaterialPolicy,
    ) -> Result<()> {
        if policy == UnknownMaterialPolicy::TreatAsUnavailable {
            return Ok(());
        }

        for product in products {
            if let Some(missing) = product
                .materials
                .iter()
                .find(|req| !self.contains(req.material_id))
            {
                return Err(PlannerError::UnknownMaterialReference {
                    product: product.name.clone(),
                    material: missing.material_id,
                });
            }
        }

        Ok(())
    }

    /// 是否包含該原物料
    pub fn contains(&self, material_id: MaterialId) -> bool {
        self.remaining.contains_key(&material_id)
    }

    /// 剩餘數量（不存在的原物料視為零）
    pub fn remaining(&self, material_id: MaterialId) -> u64 {
        self.remaining.get(&material_id).copied().unwrap_or(0)
    }

    /// 扣減庫存
    pub fn consume(&mut self, material_id: MaterialId, quantity: u64) -> Result<()> {
        let available = self.remaining(material_id);
        if quantity > available {
            return Err(PlannerError::Calculation(format!(
                "庫存不足：原物料 {} 需要 {}, 可用 {}",
                material_id, quantity, available
            )));
        }
        if quantity > 0 {
            self.remaining.insert(material_id, available - quantity);
        }
        Ok(())
    }

    /// 快照中的原物料數量
    pub fn len(&self) -> usize {
        self.remaining.len()
    }

    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }

    /// 依原物料ID排序的剩餘庫存
    pub fn to_sorted_vec(&self) -> Vec<(MaterialId, u64)> {
        let mut levels: Vec<_> = self
            .remaining
            .iter()
            .map(|(&id, &qty)| (id, qty))
            .collect();
        levels.sort_by_key(|&(id, _)| id);
        levels
    }
}
