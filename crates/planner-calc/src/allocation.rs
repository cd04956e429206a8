//! 單一產品的可生產量計算與庫存扣減

use planner_core::{InventorySnapshot, MaterialId, Product, Result};

/// 產品在當前快照下的產能
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capacity {
    /// 可生產的完整單位數
    pub units: u64,

    /// 限制產量的原物料（沒有任何正數需求時為 None）
    pub limiting_material: Option<MaterialId>,
}

impl Capacity {
    /// 無法生產（沒有可用的物料需求）
    pub fn none() -> Self {
        Self {
            units: 0,
            limiting_material: None,
        }
    }

    pub fn is_producible(&self) -> bool {
        self.units > 0
    }
}

/// 合併同一原物料的需求，保持首次出現的順序，並略過數量為零的需求
fn aggregated_requirements(product: &Product) -> Vec<(MaterialId, u64)> {
    let mut merged: Vec<(MaterialId, u64)> = Vec::with_capacity(product.materials.len());
    for req in product.materials.iter().filter(|r| r.required_quantity > 0) {
        let qty = u64::from(req.required_quantity);
        match merged.iter_mut().find(|(id, _)| *id == req.material_id) {
            Some((_, total)) => *total += qty,
            None => merged.push((req.material_id, qty)),
        }
    }
    merged
}

/// 計算當前可生產的最大單位數
///
/// `k = floor(min(剩餘 / 需求))`；物料清單為空時 `k = 0`。
pub fn producible_units(product: &Product, snapshot: &InventorySnapshot) -> Capacity {
    let mut capacity: Option<Capacity> = None;

    for (material_id, required) in aggregated_requirements(product) {
        let units = snapshot.remaining(material_id) / required;
        match capacity {
            Some(current) if current.units <= units => {}
            _ => {
                capacity = Some(Capacity {
                    units,
                    limiting_material: Some(material_id),
                })
            }
        }
    }

    capacity.unwrap_or_else(Capacity::none)
}

/// 為 `units` 個產品扣減快照中的原物料
pub fn consume(product: &Product, units: u64, snapshot: &mut InventorySnapshot) -> Result<()> {
    for (material_id, required) in aggregated_requirements(product) {
        snapshot.consume(material_id, required * units)?;
    }
    Ok(())
}
