//! 簡單生產建議示例

use production_planner::{
    logging, suggest_from_catalog, CatalogSource, InMemoryCatalog, SuggestionCalculator,
};

fn main() -> anyhow::Result<()> {
    logging::init();

    println!("=== 簡單生產建議示例 ===\n");

    // 建立目錄
    let mut catalog = InMemoryCatalog::new();
    let steel = catalog.add_raw_material("Steel", "RM-STEEL", 120);
    let copper = catalog.add_raw_material("Copper Wire", "RM-CU", 30);
    let rubber = catalog.add_raw_material("Rubber", "RM-RUB", 8);

    catalog.add_product("Industrial Motor", "MOT-001", 950.0, &[(steel, 25), (copper, 8)])?;
    catalog.add_product("Gearbox", "GBX-001", 420.0, &[(steel, 15)])?;
    catalog.add_product("Conveyor Belt", "CNV-001", 420.0, &[(rubber, 4), (steel, 5)])?;
    catalog.add_product("Spare Gasket", "GSK-001", 12.5, &[(rubber, 1)])?;

    println!("原物料庫存:");
    for material in catalog.raw_materials()? {
        println!("  - {} ({}): {}", material.name, material.sku_code.unwrap_or_default(), material.stock);
    }

    let plan = suggest_from_catalog(&catalog)?;

    println!("\n生產建議:");
    for (rank, suggestion) in plan.suggestions.iter().enumerate() {
        println!(
            "  #{} {}: {} 單位，小計 {:.2}",
            rank + 1,
            suggestion.product_name,
            suggestion.quantity_produced,
            suggestion.subtotal
        );
    }
    println!("總單位數: {}", plan.total_units());
    println!("總價值: {:.2}", plan.total_value);

    // 完整結果（含剩餘庫存與警告）
    let result = SuggestionCalculator::default()
        .calculate(&catalog.products_with_materials()?, &catalog.raw_materials()?)?;
    for warning in &result.warnings {
        println!("  ! {}", warning.message());
    }
    println!("剩餘庫存: {:?}", result.remaining_inventory);

    println!("\nJSON: {}", plan.to_json()?);

    Ok(())
}
