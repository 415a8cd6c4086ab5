//! 분석 결과를 표/차트/내보내기 형식으로 정리하는 모듈 모음.

pub mod chart;
pub mod export;
pub mod table;

pub use chart::{profit_chart, roi_chart, Chart, ChartKind, ChartSeries, Marker};
pub use export::{write_charts_json, write_csv, write_report, ExportError, ReportOptions};
pub use table::{CrossingKind, CrossingPoint, Crossings, NamedCrossing, ResultRow, ResultTable};

/// 고정 소수 자릿수로 포맷한다. 반올림 결과가 0이면 부호를 떼어 "-0.00" 같은 출력을 막는다.
pub(crate) fn fixed(value: f64, decimals: usize) -> String {
    let s = format!("{value:.decimals$}");
    match s.strip_prefix('-') {
        Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => rest.to_string(),
        _ => s,
    }
}

#[cfg(test)]
mod tests {
    use super::fixed;

    #[test]
    fn negative_zero_is_printed_unsigned() {
        assert_eq!(fixed(-0.0001, 2), "0.00");
        assert_eq!(fixed(-1e-12, 0), "0");
        assert_eq!(fixed(-1.5, 1), "-1.5");
    }
}
