//! 단가 산정부터 결과 표까지 전체 파이프라인 테스트.
use breakeven_toolbox::analysis::analyze;
use breakeven_toolbox::config::AnalysisConfig;
use breakeven_toolbox::economics::{
    derive_variant, sale_price, variable_cost, CostBreakdown, PricingInput, VariantInput,
};
use breakeven_toolbox::report::CrossingKind;

fn assert_close(label: &str, actual: f64, expected: f64, tol: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tol,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {tol})"
    );
}

/// 변동비를 재료비에만 두고 부대비용이 없는 구성.
fn plain_variant(name: &str, price_markup_pct: f64, variable: f64, fixed: f64) -> VariantInput {
    VariantInput {
        name: name.to_string(),
        fixed_cost: fixed,
        costs: CostBreakdown {
            material: variable,
            labor: 0.0,
            energy: 0.0,
            storage: 0.0,
            transport: 0.0,
            consumables: 0.0,
        },
        pricing: PricingInput {
            markup_pct: price_markup_pct,
            distribution: 0.0,
            discount: 0.0,
            marketing: 0.0,
        },
    }
}

#[test]
fn default_costs_and_price() {
    let costs = CostBreakdown::default();
    assert_close("variable", variable_cost(&costs), 23.0, 1e-12);
    let price = sale_price(23.0, 25.0, 2.0, 1.0, 2.0);
    assert_close("price", price, 33.75, 1e-12);

    let v = derive_variant(&AnalysisConfig::default().variant_a);
    assert_eq!(v.name, "Concrete");
    assert_close("derived price", v.sale_price, 33.75, 1e-12);
    assert_close("derived variable", v.variable_cost, 23.0, 1e-12);
    assert_close("derived fixed", v.fixed_cost, 23000.0, 1e-12);
}

#[test]
fn loss_making_price_is_not_rejected() {
    let price = sale_price(20.0, -50.0, 0.0, 0.0, 0.0);
    assert_close("price", price, 10.0, 1e-12);
}

#[test]
fn default_configuration_crossings() {
    // 단위 이익 10.75, 고정비 23000 / 26000
    let mut cfg = AnalysisConfig::default();
    assert!(analyze(&cfg).table.named_crossings().is_empty());
    cfg.max_quantity = 3000;
    let analysis = analyze(&cfg);
    let c = analysis.table.crossings();
    let be_a = c.break_even_a.expect("break-even A");
    assert_close("be A", be_a.quantity, 23000.0 / 10.75, 1e-6);
    assert_close("be A value", be_a.value.unwrap(), 0.0, 1e-6);
    let be_b = c.break_even_b.expect("break-even B");
    assert_close("be B", be_b.quantity, 26000.0 / 10.75, 1e-6);
    // 두 이익 곡선은 평행하므로 만나지 않는다.
    assert!(c.profit_intersection.is_none());
    assert!(c.roi_zero_a.is_some());
    assert!(c.roi_zero_b.is_some());
}

#[test]
fn scenario_config_reports_only_found_crossings() {
    // 30 = 23 × 1.30434..., 가격을 직접 맞추기 위해 마진율을 역산한다.
    let mut cfg = AnalysisConfig {
        max_quantity: 2000,
        ..AnalysisConfig::default()
    };
    cfg.variant_a = plain_variant("A", (30.0 / 23.0 - 1.0) * 100.0, 23.0, 23000.0);
    cfg.variant_b = plain_variant("B", (40.0 / 26.5 - 1.0) * 100.0, 26.5, 26000.0);
    let analysis = analyze(&cfg);

    let kinds: Vec<CrossingKind> = analysis
        .table
        .named_crossings()
        .iter()
        .map(|c| c.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            CrossingKind::BreakEvenB,
            CrossingKind::ProfitIntersection,
            CrossingKind::RoiZeroB
        ]
    );
    let x = analysis.table.crossings().profit_intersection.unwrap();
    assert_close("intersection", x.quantity, 3000.0 / 6.5, 1e-6);
}

#[test]
fn zero_cost_variant_has_undefined_roi_rows() {
    let mut cfg = AnalysisConfig::default();
    cfg.max_quantity = 100;
    cfg.variant_b = plain_variant("Free", 0.0, 0.0, 0.0);
    cfg.variant_b.pricing.distribution = 10.0;
    let analysis = analyze(&cfg);
    assert_close("price", analysis.variant_b.sale_price, 10.0, 1e-12);
    assert!(analysis.table.rows().iter().all(|r| r.roi_b.is_none()));
    assert!(analysis.table.rows().iter().all(|r| r.roi_a.is_some()));
    assert!(analysis.table.crossings().roi_zero_b.is_none());
}

#[test]
fn table_rows_follow_quantity_series() {
    let mut cfg = AnalysisConfig::default();
    cfg.max_quantity = 5;
    let analysis = analyze(&cfg);
    let rows = analysis.table.rows();
    assert_eq!(rows.len(), 5);
    assert_eq!(rows.first().unwrap().quantity, 1);
    assert_eq!(rows.last().unwrap().quantity, 5);
    assert_close("profit A(1)", rows[0].profit_a, 10.75 - 23000.0, 1e-9);
    assert_eq!(
        analysis.table.headers()[1],
        "Profit Concrete (EUR)".to_string()
    );
}

#[test]
fn recomputation_is_bit_identical() {
    let cfg = AnalysisConfig::default();
    let first = analyze(&cfg);
    let second = analyze(&cfg);
    assert_eq!(first, second);
    let bits = |v: &[f64]| v.iter().map(|x| x.to_bits()).collect::<Vec<_>>();
    assert_eq!(bits(&first.series_a.profit), bits(&second.series_a.profit));
}
