use serde::Serialize;

use crate::economics::EconomicSeries;

/// 결과 표에 기록되는 이름 붙은 교차점 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CrossingKind {
    /// A 이익 곡선의 손익분기점
    BreakEvenA,
    /// B 이익 곡선의 손익분기점
    BreakEvenB,
    /// A/B 이익 곡선의 교차점
    ProfitIntersection,
    /// A ROI가 0이 되는 지점
    RoiZeroA,
    /// B ROI가 0이 되는 지점
    RoiZeroB,
}

impl CrossingKind {
    pub const ALL: [CrossingKind; 5] = [
        CrossingKind::BreakEvenA,
        CrossingKind::BreakEvenB,
        CrossingKind::ProfitIntersection,
        CrossingKind::RoiZeroA,
        CrossingKind::RoiZeroB,
    ];

    /// ROI 차트에 표시되는 교차점인지 여부.
    pub fn is_roi(self) -> bool {
        matches!(self, CrossingKind::RoiZeroA | CrossingKind::RoiZeroB)
    }

    /// 변형 이름을 붙인 표시용 이름.
    pub fn name(self, name_a: &str, name_b: &str) -> String {
        match self {
            CrossingKind::BreakEvenA => format!("Break-even {name_a}"),
            CrossingKind::BreakEvenB => format!("Break-even {name_b}"),
            CrossingKind::ProfitIntersection => "Profit curves intersect".to_string(),
            CrossingKind::RoiZeroA => format!("ROI=0 {name_a}"),
            CrossingKind::RoiZeroB => format!("ROI=0 {name_b}"),
        }
    }
}

/// 곡선의 부호가 바뀌는 (수량, 값) 지점. 수량은 보간된 실수이다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CrossingPoint {
    pub quantity: f64,
    /// 해당 수량에서 보간한 곡선 값. 곡선이 정의되지 않으면 None.
    pub value: Option<f64>,
}

/// 다섯 가지 교차점. 찾지 못한 항목은 None 이며 표시에서 생략된다.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Crossings {
    pub break_even_a: Option<CrossingPoint>,
    pub break_even_b: Option<CrossingPoint>,
    pub profit_intersection: Option<CrossingPoint>,
    pub roi_zero_a: Option<CrossingPoint>,
    pub roi_zero_b: Option<CrossingPoint>,
}

impl Crossings {
    pub fn get(&self, kind: CrossingKind) -> Option<CrossingPoint> {
        match kind {
            CrossingKind::BreakEvenA => self.break_even_a,
            CrossingKind::BreakEvenB => self.break_even_b,
            CrossingKind::ProfitIntersection => self.profit_intersection,
            CrossingKind::RoiZeroA => self.roi_zero_a,
            CrossingKind::RoiZeroB => self.roi_zero_b,
        }
    }

    /// 찾은 교차점만 고정된 순서로 돌려준다.
    pub fn found(&self) -> impl Iterator<Item = (CrossingKind, CrossingPoint)> + '_ {
        CrossingKind::ALL
            .into_iter()
            .filter_map(|kind| self.get(kind).map(|p| (kind, p)))
    }
}

/// 표시용 이름이 붙은 교차점.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedCrossing {
    pub kind: CrossingKind,
    pub name: String,
    pub point: CrossingPoint,
}

/// 수량 하나에 대한 결과 행.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResultRow {
    pub quantity: u32,
    pub profit_a: f64,
    pub profit_b: f64,
    pub roi_a: Option<f64>,
    pub roi_b: Option<f64>,
}

/// 수량별 이익/ROI 시리즈와 교차점을 묶은 결과 표.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultTable {
    name_a: String,
    name_b: String,
    currency: String,
    rows: Vec<ResultRow>,
    crossings: Crossings,
}

impl ResultTable {
    /// 시리즈를 행 단위로 묶는다. 길이가 다르면 가장 짧은 시리즈에 맞춘다.
    pub fn assemble(
        quantities: &[u32],
        (name_a, series_a): (&str, &EconomicSeries),
        (name_b, series_b): (&str, &EconomicSeries),
        crossings: Crossings,
        currency: &str,
    ) -> Self {
        let rows = quantities
            .iter()
            .zip(series_a.profit.iter().zip(&series_a.roi))
            .zip(series_b.profit.iter().zip(&series_b.roi))
            .map(|((&quantity, (&profit_a, &roi_a)), (&profit_b, &roi_b))| ResultRow {
                quantity,
                profit_a,
                profit_b,
                roi_a,
                roi_b,
            })
            .collect();
        Self {
            name_a: name_a.to_string(),
            name_b: name_b.to_string(),
            currency: currency.to_string(),
            rows,
            crossings,
        }
    }

    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    pub fn crossings(&self) -> &Crossings {
        &self.crossings
    }

    pub fn names(&self) -> (&str, &str) {
        (&self.name_a, &self.name_b)
    }

    /// 열 제목: 수량, 이익 A, 이익 B, ROI A, ROI B.
    pub fn headers(&self) -> [String; 5] {
        [
            "Quantity".to_string(),
            format!("Profit {} ({})", self.name_a, self.currency),
            format!("Profit {} ({})", self.name_b, self.currency),
            format!("ROI {}", self.name_a),
            format!("ROI {}", self.name_b),
        ]
    }

    pub fn named_crossings(&self) -> Vec<NamedCrossing> {
        self.crossings
            .found()
            .map(|(kind, point)| NamedCrossing {
                kind,
                name: kind.name(&self.name_a, &self.name_b),
                point,
            })
            .collect()
    }
}
