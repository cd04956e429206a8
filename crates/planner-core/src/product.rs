//! 產品與物料清單模型

use serde::{Deserialize, Serialize};

use crate::material::MaterialId;

/// 產品識別碼
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

/// 物料需求（每生產一單位產品所需）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialRequirement {
    /// 原物料ID
    pub material_id: MaterialId,

    /// 需求數量
    pub required_quantity: u32,
}

impl MaterialRequirement {
    pub fn new(material_id: MaterialId, required_quantity: u32) -> Self {
        Self {
            material_id,
            required_quantity,
        }
    }
}

/// 成品
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// 產品ID
    pub id: ProductId,

    /// 顯示名稱
    pub name: String,

    /// SKU 代碼
    pub sku_code: Option<String>,

    /// 單位價值
    pub unit_value: f64,

    /// 物料清單（BOM），保持輸入順序
    pub materials: Vec<MaterialRequirement>,
}

impl Product {
    /// 創建新的產品（空物料清單）
    pub fn new(id: ProductId, name: impl Into<String>, unit_value: f64) -> Self {
        Self {
            id,
            name: name.into(),
            sku_code: None,
            unit_value,
            materials: Vec::new(),
        }
    }

    /// 建構器模式：設置 SKU 代碼
    pub fn with_sku_code(mut self, sku_code: impl Into<String>) -> Self {
        self.sku_code = Some(sku_code.into());
        self
    }

    /// 建構器模式：添加物料需求
    pub fn with_requirement(mut self, material_id: MaterialId, required_quantity: u32) -> Self {
        self.add_requirement(material_id, required_quantity);
        self
    }

    /// 添加物料需求
    pub fn add_requirement(&mut self, material_id: MaterialId, required_quantity: u32) {
        self.materials
            .push(MaterialRequirement::new(material_id, required_quantity));
    }

    /// 物料清單是否為空（空清單的產品永遠無法生產）
    pub fn has_empty_bom(&self) -> bool {
        self.materials.is_empty()
    }
}
