//! 外部目錄介面
//!
//! 產品與原物料的 CRUD 由外部系統負責，這裡只定義生產建議需要的兩個讀取操作。

use planner_calc::suggest_production;
use planner_core::{
    MaterialId, MaterialRequirement, PlannerError, Product, ProductId, ProductionPlan,
    RawMaterial, Result,
};

/// 產品目錄與原物料庫存的唯讀來源
pub trait CatalogSource {
    /// 所有產品（已帶入物料清單）
    fn products_with_materials(&self) -> Result<Vec<Product>>;

    /// 所有原物料與現有庫存
    fn raw_materials(&self) -> Result<Vec<RawMaterial>>;
}

/// 從目錄來源讀取兩份清單後計算生產計劃
///
/// 兩份清單之間的一致性由來源負責；計算只把它們當作同一時間點的資料。
pub fn suggest_from_catalog<C: CatalogSource + ?Sized>(catalog: &C) -> Result<ProductionPlan> {
    let products = catalog.products_with_materials()?;
    let raw_materials = catalog.raw_materials()?;

    tracing::debug!(
        "目錄讀取完成：產品 {} 筆，原物料 {} 筆",
        products.len(),
        raw_materials.len()
    );

    suggest_production(&products, &raw_materials)
}

/// 記憶體內的目錄（ID 依序產生）
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    products: Vec<Product>,
    raw_materials: Vec<RawMaterial>,
    next_product_id: u64,
    next_material_id: u64,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// 新增原物料，返回產生的ID
    pub fn add_raw_material(&mut self, name: &str, sku_code: &str, stock: u32) -> MaterialId {
        self.next_material_id += 1;
        let id = MaterialId(self.next_material_id);
        self.raw_materials
            .push(RawMaterial::new(id, name, stock).with_sku_code(sku_code));
        id
    }

    /// 新增產品
    ///
    /// 物料清單中的每個原物料都必須已存在於目錄中。
    pub fn add_product(
        &mut self,
        name: &str,
        sku_code: &str,
        unit_value: f64,
        requirements: &[(MaterialId, u32)],
    ) -> Result<ProductId> {
        if let Some(&(missing, _)) = requirements
            .iter()
            .find(|(id, _)| self.raw_material(*id).is_none())
        {
            return Err(PlannerError::UnknownMaterialReference {
                product: name.to_string(),
                material: missing,
            });
        }

        self.next_product_id += 1;
        let id = ProductId(self.next_product_id);
        let mut product = Product::new(id, name, unit_value).with_sku_code(sku_code);
        product.materials = requirements
            .iter()
            .map(|&(material_id, qty)| MaterialRequirement::new(material_id, qty))
            .collect();
        self.products.push(product);
        Ok(id)
    }

    /// 更新原物料庫存
    pub fn set_stock(&mut self, material_id: MaterialId, stock: u32) -> Result<()> {
        let material = self
            .raw_materials
            .iter_mut()
            .find(|m| m.id == material_id)
            .ok_or_else(|| PlannerError::Catalog(format!("找不到原物料: {}", material_id)))?;
        material.stock = stock;
        Ok(())
    }

    /// 依ID查找原物料
    pub fn raw_material(&self, material_id: MaterialId) -> Option<&RawMaterial> {
        self.raw_materials.iter().find(|m| m.id == material_id)
    }
}

impl CatalogSource for InMemoryCatalog {
    fn products_with_materials(&self) -> Result<Vec<Product>> {
        Ok(self.products.clone())
    }

    fn raw_materials(&self) -> Result<Vec<RawMaterial>> {
        Ok(self.raw_materials.clone())
    }
}
