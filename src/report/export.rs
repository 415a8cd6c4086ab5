//! 결과 표 내보내기. CSV, 페이지 나눔 텍스트 보고서, 차트 JSON을 지원한다.
//!
//! 정의되지 않은 값은 0 등으로 바꾸지 않고 빈 칸으로 남긴다.

use serde::{Deserialize, Serialize};
use std::io::Write;
use thiserror::Error;

use super::chart::{chart_kind_of, marker_label, profit_chart, roi_chart};
use super::fixed;
use super::table::ResultTable;
use crate::analysis::Analysis;

/// 내보내기 중 발생 가능한 오류.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON 직렬화 오류: {0}")]
    Json(#[from] serde_json::Error),
}

/// 텍스트 보고서 옵션.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportOptions {
    pub title: String,
    /// 보고서에 싣는 최대 행 수
    pub max_rows: usize,
    /// 페이지당 행 수
    pub rows_per_page: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            title: "Break-even analysis".to_string(),
            max_rows: 80,
            rows_per_page: 40,
        }
    }
}

fn csv_field(s: &str) -> String {
    if s.contains([',', '"', '\n']) {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

fn opt_cell(v: Option<f64>, render: impl Fn(f64) -> String) -> String {
    v.map(render).unwrap_or_default()
}

/// 머리글 한 줄과 수량별 한 줄로 CSV를 쓴다. 숫자는 전체 정밀도로 기록한다.
pub fn write_csv<W: Write>(table: &ResultTable, mut out: W) -> Result<(), ExportError> {
    let header: Vec<String> = table.headers().iter().map(|h| csv_field(h)).collect();
    writeln!(out, "{}", header.join(","))?;
    for row in table.rows() {
        writeln!(
            out,
            "{},{},{},{},{}",
            row.quantity,
            row.profit_a,
            row.profit_b,
            opt_cell(row.roi_a, |v| v.to_string()),
            opt_cell(row.roi_b, |v| v.to_string()),
        )?;
    }
    out.flush()?;
    Ok(())
}

fn table_line(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(c, &w)| format!("{c:>w$}"))
        .collect::<Vec<_>>()
        .join(" | ")
}

/// 페이지 단위 텍스트 보고서를 쓴다.
///
/// 첫 페이지에 제목, 단위 경제성, 교차점 목록을 싣고, 표 머리글은 페이지마다
/// 반복한다. 페이지 사이에는 폼 피드 문자를 넣는다.
pub fn write_report<W: Write>(
    analysis: &Analysis,
    options: &ReportOptions,
    mut out: W,
) -> Result<(), ExportError> {
    let table = &analysis.table;
    let currency = &analysis.currency;

    writeln!(out, "{}", options.title)?;
    writeln!(out, "{}", "=".repeat(options.title.chars().count()))?;
    writeln!(out)?;
    for v in [&analysis.variant_a, &analysis.variant_b] {
        writeln!(
            out,
            "{}: price {} {currency}/unit, variable cost {} {currency}/unit, fixed cost {} {currency}",
            v.name,
            fixed(v.sale_price, 2),
            fixed(v.variable_cost, 2),
            fixed(v.fixed_cost, 2),
        )?;
    }
    writeln!(out)?;
    let named = table.named_crossings();
    if named.is_empty() {
        writeln!(out, "No crossings within 1..={}", table.rows().len())?;
    } else {
        writeln!(out, "Crossings:")?;
        for c in &named {
            let label = marker_label(&c.name, &c.point, chart_kind_of(c.kind), currency);
            writeln!(out, "  - {label}")?;
        }
    }
    writeln!(out)?;

    let headers = table.headers();
    let widths: Vec<usize> = headers.iter().map(|h| h.chars().count().max(10)).collect();
    let shown = table.rows().len().min(options.max_rows);
    let per_page = options.rows_per_page.max(1);
    let pages = shown.div_ceil(per_page).max(1);

    let rows = &table.rows()[..shown];
    for page in 0..pages {
        if page > 0 {
            write!(out, "\u{000C}")?;
        }
        writeln!(out, "{}", table_line(&headers, &widths))?;
        let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
        writeln!(out, "{}", rule.join("-+-"))?;
        let start = page * per_page;
        let end = (start + per_page).min(shown);
        for row in &rows[start..end] {
            let cells = [
                row.quantity.to_string(),
                fixed(row.profit_a, 2),
                fixed(row.profit_b, 2),
                opt_cell(row.roi_a, |v| fixed(v, 2)),
                opt_cell(row.roi_b, |v| fixed(v, 2)),
            ];
            writeln!(out, "{}", table_line(&cells, &widths))?;
        }
        writeln!(out)?;
        if shown < table.rows().len() && page + 1 == pages {
            writeln!(out, "(first {shown} of {} rows)", table.rows().len())?;
        }
        writeln!(out, "Page {}/{pages}", page + 1)?;
    }
    out.flush()?;
    Ok(())
}

/// 이익/ROI 차트 정의를 JSON 배열로 쓴다.
pub fn write_charts_json<W: Write>(analysis: &Analysis, mut out: W) -> Result<(), ExportError> {
    let charts = [profit_chart(analysis), roi_chart(analysis)];
    serde_json::to_writer_pretty(&mut out, &charts)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
