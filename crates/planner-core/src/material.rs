//! 原物料模型

use serde::{Deserialize, Serialize};
use std::fmt;

/// 原物料識別碼
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaterialId(pub u64);

impl fmt::Display for MaterialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// 原物料（外部目錄提供的時間點副本）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMaterial {
    /// 原物料ID
    pub id: MaterialId,

    /// 顯示名稱
    pub name: String,

    /// SKU 代碼
    pub sku_code: Option<String>,

    /// 現有庫存
    pub stock: u32,
}

impl RawMaterial {
    /// 創建新的原物料記錄
    pub fn new(id: MaterialId, name: impl Into<String>, stock: u32) -> Self {
        Self {
            id,
            name: name.into(),
            sku_code: None,
            stock,
        }
    }

    /// 建構器模式：設置 SKU 代碼
    pub fn with_sku_code(mut self, sku_code: impl Into<String>) -> Self {
        self.sku_code = Some(sku_code.into());
        self
    }

    /// 是否有庫存
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}
