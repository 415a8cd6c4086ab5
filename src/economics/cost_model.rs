use serde::{Deserialize, Serialize};

/// 제품 1개당 변동비 항목. 모든 금액은 통화 단위(예: EUR) 기준이다.
///
/// 음수 값도 그대로 합산한다. 입력 검증은 호출 측 책임이다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// 재료비
    pub material: f64,
    /// 인건비
    pub labor: f64,
    /// 에너지비
    pub energy: f64,
    /// 보관비
    pub storage: f64,
    /// 운송비
    pub transport: f64,
    /// 소모품비
    pub consumables: f64,
}

impl Default for CostBreakdown {
    fn default() -> Self {
        Self {
            material: 10.0,
            labor: 5.0,
            energy: 2.0,
            storage: 2.0,
            transport: 3.0,
            consumables: 1.0,
        }
    }
}

impl CostBreakdown {
    /// 항목 합계(단위 변동비)를 반환한다.
    pub fn total(&self) -> f64 {
        self.material + self.labor + self.energy + self.storage + self.transport + self.consumables
    }
}

/// 판매가 산정 입력.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingInput {
    /// 변동비 대비 마진율 [%]
    pub markup_pct: f64,
    /// 유통비 [통화/개]
    pub distribution: f64,
    /// 조기 결제 할인(Skonto) 보전액 [통화/개]
    pub discount: f64,
    /// 마케팅비 [통화/개]
    pub marketing: f64,
}

impl Default for PricingInput {
    fn default() -> Self {
        Self {
            markup_pct: 25.0,
            distribution: 2.0,
            discount: 1.0,
            marketing: 2.0,
        }
    }
}

/// 설정 파일에 기록되는 형태의 비교 대상 구성.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantInput {
    pub name: String,
    /// 고정비 [통화]
    pub fixed_cost: f64,
    pub costs: CostBreakdown,
    pub pricing: PricingInput,
}

/// 손익 계산에 쓰이는 단위 경제성.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    pub name: String,
    /// 판매가 [통화/개]
    pub sale_price: f64,
    /// 고정비 [통화]
    pub fixed_cost: f64,
    /// 변동비 [통화/개]
    pub variable_cost: f64,
}

/// 항목별 비용을 합산해 단위 변동비를 계산한다.
pub fn variable_cost(components: &CostBreakdown) -> f64 {
    components.total()
}

/// 변동비에 마진율을 적용하고 부대비용을 더해 판매가를 계산한다.
///
/// 판매가가 변동비보다 낮아도 그대로 반환한다.
pub fn sale_price(
    variable_cost: f64,
    markup_pct: f64,
    distribution: f64,
    discount: f64,
    marketing: f64,
) -> f64 {
    variable_cost * (1.0 + markup_pct / 100.0) + distribution + discount + marketing
}

/// 설정 입력에서 단위 경제성을 도출한다.
pub fn derive_variant(input: &VariantInput) -> Variant {
    let variable = variable_cost(&input.costs);
    let p = &input.pricing;
    Variant {
        name: input.name.clone(),
        sale_price: sale_price(variable, p.markup_pct, p.distribution, p.discount, p.marketing),
        fixed_cost: input.fixed_cost,
        variable_cost: variable,
    }
}
