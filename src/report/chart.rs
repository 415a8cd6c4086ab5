//! 외부 렌더러가 그릴 차트 정의. 이익 차트와 ROI 차트 두 개를 만든다.

use serde::Serialize;

use super::fixed;
use super::table::{CrossingKind, CrossingPoint};
use crate::analysis::Analysis;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ChartKind {
    Profit,
    Roi,
}

/// 수량 시리즈와 인덱스가 맞춰진 곡선 하나.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub name: String,
    pub values: Vec<Option<f64>>,
}

/// 교차점 표식.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub name: String,
    pub quantity: f64,
    pub value: Option<f64>,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub kind: ChartKind,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// y=0 기준선 표시 여부
    pub zero_line: bool,
    pub quantities: Vec<u32>,
    pub series: Vec<ChartSeries>,
    pub markers: Vec<Marker>,
}

/// 표식 라벨 "이름 ≈ 수량, 값" 을 만든다.
///
/// 이익 값은 정수 + 통화, ROI 값은 소수 4자리. 값이 없으면 `n/a`.
pub fn marker_label(name: &str, point: &CrossingPoint, kind: ChartKind, currency: &str) -> String {
    let value = match (point.value, kind) {
        (None, _) => "n/a".to_string(),
        (Some(v), ChartKind::Profit) => format!("{} {currency}", fixed(v, 0)),
        (Some(v), ChartKind::Roi) => fixed(v, 4),
    };
    format!("{name} ≈ {}, {value}", fixed(point.quantity, 0))
}

fn markers(analysis: &Analysis, kind: ChartKind) -> Vec<Marker> {
    analysis
        .table
        .named_crossings()
        .into_iter()
        .filter(|c| c.kind.is_roi() == (kind == ChartKind::Roi))
        .map(|c| Marker {
            label: marker_label(&c.name, &c.point, kind, &analysis.currency),
            name: c.name,
            quantity: c.point.quantity,
            value: c.point.value,
        })
        .collect()
}

/// 이익-수량 차트. 손익분기점 두 개와 이익 곡선 교차점을 표시한다.
pub fn profit_chart(analysis: &Analysis) -> Chart {
    let series = [
        (&analysis.variant_a.name, &analysis.series_a),
        (&analysis.variant_b.name, &analysis.series_b),
    ]
    .into_iter()
    .map(|(name, s)| ChartSeries {
        name: format!("Profit {name}"),
        values: s.profit.iter().copied().map(Some).collect(),
    })
    .collect();
    Chart {
        kind: ChartKind::Profit,
        title: "Break-even & profit comparison".to_string(),
        x_label: "Quantity".to_string(),
        y_label: format!("Profit ({})", analysis.currency),
        zero_line: true,
        quantities: analysis.quantities.clone(),
        series,
        markers: markers(analysis, ChartKind::Profit),
    }
}

/// ROI-수량 차트. 각 변형의 ROI 영점을 표시한다.
pub fn roi_chart(analysis: &Analysis) -> Chart {
    let series = [
        (&analysis.variant_a.name, &analysis.series_a),
        (&analysis.variant_b.name, &analysis.series_b),
    ]
    .into_iter()
    .map(|(name, s)| ChartSeries {
        name: format!("ROI {name}"),
        values: s.roi.clone(),
    })
    .collect();
    Chart {
        kind: ChartKind::Roi,
        title: "ROI over quantity".to_string(),
        x_label: "Quantity".to_string(),
        y_label: "ROI".to_string(),
        zero_line: true,
        quantities: analysis.quantities.clone(),
        series,
        markers: markers(analysis, ChartKind::Roi),
    }
}

/// 교차점이 표시되는 차트 종류.
pub fn chart_kind_of(kind: CrossingKind) -> ChartKind {
    if kind.is_roi() {
        ChartKind::Roi
    } else {
        ChartKind::Profit
    }
}
