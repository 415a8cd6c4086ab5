use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

use crate::economics::{CostBreakdown, PricingInput, VariantInput};
use crate::report::ReportOptions;

/// 기본 설정 파일 경로.
pub const DEFAULT_CONFIG_PATH: &str = "breakeven.toml";

/// 분석 입력 전체. 두 변형과 수량 범위, 통화 표기를 담는다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// 최대 수량 N. 수량 시리즈는 1..=N
    pub max_quantity: u32,
    /// 표/라벨에 붙는 통화 표기
    pub currency: String,
    pub variant_a: VariantInput,
    pub variant_b: VariantInput,
    #[serde(default)]
    pub report: ReportOptions,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_quantity: 2000,
            currency: "EUR".to_string(),
            variant_a: VariantInput {
                name: "Concrete".to_string(),
                fixed_cost: 23000.0,
                costs: CostBreakdown::default(),
                pricing: PricingInput::default(),
            },
            variant_b: VariantInput {
                name: "Recycled".to_string(),
                fixed_cost: 26000.0,
                costs: CostBreakdown::default(),
                pricing: PricingInput::default(),
            },
            report: ReportOptions::default(),
        }
    }
}

/// 설정 로드/저장/검증 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("최대 수량은 1 이상이어야 합니다")]
    InvalidMaxQuantity,
    #[error("{field} 값이 유한한 숫자가 아닙니다: {value}")]
    NonFinite { field: String, value: f64 },
}

fn variant_fields(prefix: &str, v: &VariantInput) -> Vec<(String, f64)> {
    let c = &v.costs;
    let p = &v.pricing;
    [
        ("fixed_cost", v.fixed_cost),
        ("costs.material", c.material),
        ("costs.labor", c.labor),
        ("costs.energy", c.energy),
        ("costs.storage", c.storage),
        ("costs.transport", c.transport),
        ("costs.consumables", c.consumables),
        ("pricing.markup_pct", p.markup_pct),
        ("pricing.distribution", p.distribution),
        ("pricing.discount", p.discount),
        ("pricing.marketing", p.marketing),
    ]
    .into_iter()
    .map(|(name, value)| (format!("{prefix}.{name}"), value))
    .collect()
}

impl AnalysisConfig {
    /// 입력 수집 단계의 검증. 분석 코어는 값을 검증하지 않으므로 여기서 걸러낸다.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_quantity == 0 {
            return Err(ConfigError::InvalidMaxQuantity);
        }
        let fields = variant_fields("variant_a", &self.variant_a)
            .into_iter()
            .chain(variant_fields("variant_b", &self.variant_b));
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
        }
        Ok(())
    }

    /// 설정을 TOML 파일로 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        debug!(path = %path.display(), "설정 저장");
        Ok(())
    }
}

/// 설정 파일을 로드하거나, 없으면 기본 설정을 생성해 저장한다.
pub fn load_or_default(path: &Path) -> Result<AnalysisConfig, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: AnalysisConfig = toml::from_str(&content)?;
        debug!(path = %path.display(), "설정 로드");
        Ok(cfg)
    } else {
        let cfg = AnalysisConfig::default();
        cfg.save(path)?;
        info!(path = %path.display(), "설정 파일이 없어 기본값으로 생성");
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_roundtrips_through_toml() {
        let cfg = AnalysisConfig::default();
        let text = toml::to_string_pretty(&cfg).unwrap();
        let back: AnalysisConfig = toml::from_str(&text).unwrap();
        assert_eq!(cfg, back);
    }

    #[test]
    fn report_section_is_optional() {
        let mut text = toml::to_string_pretty(&AnalysisConfig::default()).unwrap();
        let start = text.find("[report]").unwrap();
        text.truncate(start);
        let cfg: AnalysisConfig = toml::from_str(&text).unwrap();
        assert_eq!(cfg.report, ReportOptions::default());
    }

    #[test]
    fn validation_rejects_zero_range_and_nan() {
        let mut cfg = AnalysisConfig::default();
        assert!(cfg.validate().is_ok());
        cfg.max_quantity = 0;
        assert!(matches!(cfg.validate(), Err(ConfigError::InvalidMaxQuantity)));
        cfg.max_quantity = 10;
        cfg.variant_b.pricing.marketing = f64::NAN;
        match cfg.validate() {
            Err(ConfigError::NonFinite { field, .. }) => {
                assert_eq!(field, "variant_b.pricing.marketing")
            }
            other => panic!("unexpected: {other:?}"),
        }
    }
}
