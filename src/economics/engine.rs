use serde::Serialize;

use super::cost_model::Variant;

/// 수량 1..=N 에 대해 샘플링한 손익 곡선. 모든 벡터는 수량 시리즈와 인덱스가 일치한다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EconomicSeries {
    /// 매출 = q × 판매가
    pub revenue: Vec<f64>,
    /// 총비용 = 고정비 + q × 변동비
    pub cost: Vec<f64>,
    /// 이익 = 매출 - 총비용
    pub profit: Vec<f64>,
    /// ROI = 이익 / 총비용. 총비용이 0이면 None.
    pub roi: Vec<Option<f64>>,
}

/// 1부터 `max_quantity`까지 1씩 증가하는 수량 시리즈를 만든다.
pub fn quantity_series(max_quantity: u32) -> Vec<u32> {
    (1..=max_quantity).collect()
}

impl Variant {
    pub fn revenue_at(&self, quantity: f64) -> f64 {
        quantity * self.sale_price
    }

    pub fn cost_at(&self, quantity: f64) -> f64 {
        self.fixed_cost + quantity * self.variable_cost
    }

    pub fn profit_at(&self, quantity: f64) -> f64 {
        self.revenue_at(quantity) - self.cost_at(quantity)
    }

    /// 총비용이 0인 지점에서는 ROI가 정의되지 않는다.
    pub fn roi_at(&self, quantity: f64) -> Option<f64> {
        roi(self.profit_at(quantity), self.cost_at(quantity))
    }
}

fn roi(profit: f64, cost: f64) -> Option<f64> {
    if cost == 0.0 {
        None
    } else {
        Some(profit / cost)
    }
}

/// 주어진 수량 시리즈에 대해 매출/비용/이익/ROI 곡선을 계산한다.
pub fn simulate(variant: &Variant, quantities: &[u32]) -> EconomicSeries {
    let n = quantities.len();
    let mut series = EconomicSeries {
        revenue: Vec::with_capacity(n),
        cost: Vec::with_capacity(n),
        profit: Vec::with_capacity(n),
        roi: Vec::with_capacity(n),
    };
    for &q in quantities {
        let q = f64::from(q);
        series.revenue.push(variant.revenue_at(q));
        series.cost.push(variant.cost_at(q));
        series.profit.push(variant.profit_at(q));
        series.roi.push(variant.roi_at(q));
    }
    series
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variant(price: f64, fixed: f64, variable: f64) -> Variant {
        Variant {
            name: "test".into(),
            sale_price: price,
            fixed_cost: fixed,
            variable_cost: variable,
        }
    }

    #[test]
    fn series_is_one_based_and_inclusive() {
        assert_eq!(quantity_series(4), vec![1, 2, 3, 4]);
        assert!(quantity_series(0).is_empty());
    }

    #[test]
    fn roi_undefined_only_where_cost_is_zero() {
        // 고정비 -100, 변동비 1 → q=100에서 총비용 0
        let v = variant(2.0, -100.0, 1.0);
        let s = simulate(&v, &quantity_series(150));
        assert_eq!(s.roi[99], None);
        assert!(s.roi[98].is_some());
        assert!(s.roi[100].is_some());
    }

    #[test]
    fn point_accessors_match_sampled_series() {
        let v = variant(40.0, 26000.0, 26.5);
        let s = simulate(&v, &[1925, 1926]);
        assert_eq!(s.profit, vec![v.profit_at(1925.0), v.profit_at(1926.0)]);
        assert_eq!(v.profit_at(1925.0), -12.5);
        assert_eq!(v.roi_at(1926.0), Some(1.0 / 77039.0));
    }

    #[test]
    fn roi_at_is_undefined_without_costs() {
        let v = variant(10.0, 0.0, 0.0);
        assert_eq!(v.cost_at(7.0), 0.0);
        assert_eq!(v.profit_at(7.0), 70.0);
        assert_eq!(v.roi_at(7.0), None);
    }
}
