use serde::Serialize;
use tracing::{debug, instrument};

use super::curve::{
    find_intersection, find_zero_crossing, find_zero_crossing_partial, interpolate,
    interpolate_partial,
};
use crate::config::AnalysisConfig;
use crate::economics::{derive_variant, quantity_series, simulate, EconomicSeries, Variant};
use crate::report::{CrossingPoint, Crossings, ResultTable};

/// 한 번의 분석 결과. 입력이 같으면 항상 같은 값이 나온다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub currency: String,
    pub quantities: Vec<u32>,
    pub variant_a: Variant,
    pub variant_b: Variant,
    pub series_a: EconomicSeries,
    pub series_b: EconomicSeries,
    pub table: ResultTable,
}

fn point(quantity: Option<f64>, value: Option<f64>) -> Option<CrossingPoint> {
    quantity.map(|quantity| CrossingPoint { quantity, value })
}

/// 손익분기점, 이익 곡선 교차점, ROI 영점을 찾는다.
pub fn locate_crossings(quantities: &[u32], a: &EconomicSeries, b: &EconomicSeries) -> Crossings {
    let q = quantities;

    let be_a = find_zero_crossing(q, &a.profit);
    let be_b = find_zero_crossing(q, &b.profit);
    let meet = find_intersection(q, &a.profit, &b.profit);
    let roi_a = find_zero_crossing_partial(q, &a.roi);
    let roi_b = find_zero_crossing_partial(q, &b.roi);

    Crossings {
        break_even_a: point(be_a, interpolate(be_a, q, &a.profit)),
        break_even_b: point(be_b, interpolate(be_b, q, &b.profit)),
        profit_intersection: point(meet, interpolate(meet, q, &a.profit)),
        roi_zero_a: point(roi_a, interpolate_partial(roi_a, q, &a.roi)),
        roi_zero_b: point(roi_b, interpolate_partial(roi_b, q, &b.roi)),
    }
}

/// 단가 산정 → 손익 곡선 → 교차점 탐색 → 결과 표 순서로 전체 분석을 수행한다.
#[instrument(skip_all, fields(max_quantity = config.max_quantity))]
pub fn analyze(config: &AnalysisConfig) -> Analysis {
    let variant_a = derive_variant(&config.variant_a);
    let variant_b = derive_variant(&config.variant_b);
    for v in [&variant_a, &variant_b] {
        debug!(
            name = %v.name,
            sale_price = v.sale_price,
            variable_cost = v.variable_cost,
            fixed_cost = v.fixed_cost,
            "단위 경제성"
        );
    }

    let quantities = quantity_series(config.max_quantity);
    let series_a = simulate(&variant_a, &quantities);
    let series_b = simulate(&variant_b, &quantities);

    let crossings = locate_crossings(&quantities, &series_a, &series_b);
    for (kind, p) in crossings.found() {
        debug!(?kind, quantity = p.quantity, value = ?p.value, "교차점");
    }

    let table = ResultTable::assemble(
        &quantities,
        (variant_a.name.as_str(), &series_a),
        (variant_b.name.as_str(), &series_b),
        crossings,
        &config.currency,
    );

    Analysis {
        currency: config.currency.clone(),
        quantities,
        variant_a,
        variant_b,
        series_a,
        series_b,
        table,
    }
}
