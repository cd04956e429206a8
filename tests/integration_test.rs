//! 集成測試

use production_planner::*;
use rayon::prelude::*;
use rstest::rstest;

const STEEL: MaterialId = MaterialId(1);

fn steel(stock: u32) -> Vec<RawMaterial> {
    vec![RawMaterial::new(STEEL, "Steel", stock).with_sku_code("RM-STEEL")]
}

fn widget(id: u64, name: &str, value: f64) -> Product {
    Product::new(ProductId(id), name, value)
        .with_sku_code(format!("WGT-{id:03}"))
        .with_requirement(STEEL, 10)
}

#[rstest]
#[case::plenty_of_steel(100, vec![("Widget", 10, 1500.0)], 1500.0)]
#[case::no_steel(0, vec![], 0.0)]
#[case::partial_unit_dropped(19, vec![("Widget", 1, 150.0)], 150.0)]
fn test_single_product_scenarios(
    #[case] stock: u32,
    #[case] expected: Vec<(&str, u64, f64)>,
    #[case] total: f64,
) {
    logging::init_test();

    let plan = suggest_production(&[widget(1, "Widget", 150.0)], &steel(stock)).unwrap();

    let actual: Vec<_> = plan
        .suggestions
        .iter()
        .map(|s| (s.product_name.as_str(), s.quantity_produced, s.subtotal))
        .collect();
    assert_eq!(actual, expected);
    assert_eq!(plan.total_value, total);
}

#[test]
fn test_higher_value_product_takes_shared_stock() {
    // Widget A 用掉 10 個鋼材，只剩 5 個，不足以生產 Widget B
    let products = vec![widget(1, "Widget A", 150.0), widget(2, "Widget B", 50.0)];

    let plan = suggest_production(&products, &steel(15)).unwrap();

    assert_eq!(
        plan.suggestions,
        vec![ProductionSuggestion::new("Widget A".to_string(), 1, 150.0)]
    );
    assert_eq!(plan.total_value, 150.0);
}

#[test]
fn test_empty_catalog_and_inventory() {
    assert_eq!(
        suggest_production(&[], &steel(100)),
        Err(PlannerError::EmptyCatalog)
    );
    assert_eq!(
        suggest_production(&[widget(1, "Widget", 150.0)], &[]),
        Err(PlannerError::EmptyInventory)
    );
}

#[test]
fn test_multi_material_bicycle_plan() {
    // 場景：
    //   Bike   (800) 需要 Frame-Tube x3, Wheel x2
    //   Scooter(800) 需要 Frame-Tube x2, Wheel x2
    //   Trike  (500) 需要 Frame-Tube x2, Wheel x3
    let mut catalog = InMemoryCatalog::new();
    let tube = catalog.add_raw_material("Frame Tube", "RM-TUBE", 20);
    let wheel = catalog.add_raw_material("Wheel", "RM-WHEEL", 13);

    catalog
        .add_product("Bike", "BIKE-001", 800.0, &[(tube, 3), (wheel, 2)])
        .unwrap();
    catalog
        .add_product("Scooter", "SCOOT-001", 800.0, &[(tube, 2), (wheel, 2)])
        .unwrap();
    catalog
        .add_product("Trike", "TRIKE-001", 500.0, &[(tube, 2), (wheel, 3)])
        .unwrap();

    let plan = suggest_from_catalog(&catalog).unwrap();

    // Bike: min(20/3, 13/2) = 6 → 剩 tube 2, wheel 1
    // Scooter: min(2/2, 1/2) = 0
    // Trike: min(2/2, 1/3) = 0
    assert_eq!(plan.suggestions.len(), 1);
    assert_eq!(plan.suggestions[0].product_name, "Bike");
    assert_eq!(plan.suggestions[0].quantity_produced, 6);
    assert_eq!(plan.total_value, 4800.0);
    assert_eq!(plan.total_units(), 6);

    let result = SuggestionCalculator::default()
        .calculate(
            &catalog.products_with_materials().unwrap(),
            &catalog.raw_materials().unwrap(),
        )
        .unwrap();
    assert_eq!(result.plan, plan);
    assert_eq!(result.remaining_inventory, vec![(tube, 2), (wheel, 1)]);
    assert_eq!(result.warnings.len(), 2);
}

#[test]
fn test_equal_values_follow_catalog_order() {
    let products = vec![
        widget(1, "Second", 100.0),
        widget(2, "First", 300.0),
        widget(3, "Third", 100.0),
    ];

    let plan = suggest_production(&products, &steel(50)).unwrap();

    let names: Vec<_> = plan
        .suggestions
        .iter()
        .map(|s| s.product_name.as_str())
        .collect();
    assert_eq!(names, vec!["First"]);

    // 高價產品吃不完庫存時，同價產品中目錄較前者先分配
    let products = vec![
        widget(1, "Second", 100.0),
        Product::new(ProductId(2), "First", 300.0).with_requirement(STEEL, 45),
        widget(3, "Third", 100.0),
    ];
    let materials = steel(65);
    let plan = suggest_production(&products, &materials).unwrap();

    let names: Vec<_> = plan
        .suggestions
        .iter()
        .map(|s| s.product_name.as_str())
        .collect();
    assert_eq!(names, vec!["First", "Second"]);
    assert_eq!(plan.suggestions[1].quantity_produced, 2);
}

#[test]
fn test_inputs_unchanged_and_rerun_identical() {
    let products = vec![widget(1, "Widget A", 150.0), widget(2, "Widget B", 50.0)];
    let materials = steel(35);

    let first = suggest_production(&products, &materials).unwrap();
    let second = suggest_production(&products, &materials).unwrap();

    assert_eq!(first, second);
    assert_eq!(materials[0].stock, 35);
    assert_eq!(products[0].materials[0].required_quantity, 10);
}

#[test]
fn test_concurrent_invocations() {
    let products = vec![widget(1, "Widget A", 150.0), widget(2, "Widget B", 50.0)];
    let materials = steel(35);
    let expected = suggest_production(&products, &materials).unwrap();

    let plans: Vec<_> = (0..64)
        .into_par_iter()
        .map(|_| suggest_production(&products, &materials))
        .collect::<Result<_>>()
        .unwrap();

    assert!(plans.iter().all(|plan| *plan == expected));
}

#[test]
fn test_plan_json_matches_wire_shape() -> anyhow::Result<()> {
    let plan = suggest_production(&[widget(1, "Widget", 150.0)], &steel(100))?;

    let json: serde_json::Value = serde_json::from_str(&plan.to_json()?)?;
    assert_eq!(
        json,
        serde_json::json!({
            "suggestions": [
                { "productName": "Widget", "quantityProduced": 10, "subtotal": 1500.0 }
            ],
            "totalValue": 1500.0
        })
    );
    Ok(())
}

#[test]
fn test_config_loaded_from_json() -> anyhow::Result<()> {
    let config = PlannerConfig::from_json(r#"{"unknownMaterialPolicy": "treatAsUnavailable"}"#)?;
    let products = vec![
        Product::new(ProductId(1), "Orphan", 999.0).with_requirement(MaterialId(77), 1),
        widget(2, "Widget", 150.0),
    ];

    let result = SuggestionCalculator::new(config).calculate(&products, &steel(20))?;

    assert_eq!(result.plan.total_value, 300.0);
    assert_eq!(
        result.warnings[0].reason,
        SkipReason::UnknownMaterial {
            material: MaterialId(77)
        }
    );
    Ok(())
}
