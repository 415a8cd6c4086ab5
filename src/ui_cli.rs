use comfy_table::presets::UTF8_FULL;
use comfy_table::{CellAlignment, ContentArrangement, Table};
use std::io::{self, Write};
use std::path::PathBuf;

use crate::analysis::Analysis;
use crate::app::{self, AppError, ExportTargets};
use crate::config::AnalysisConfig;
use crate::economics::VariantInput;
use crate::report::chart::{chart_kind_of, marker_label};
use crate::report::{fixed, CrossingKind, ResultRow, ResultTable};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    VariantA,
    VariantB,
    FixedCostsAndRange,
    Results,
    Table,
    Export,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(cfg: &AnalysisConfig) -> Result<MenuChoice, AppError> {
    println!("\n=== Break-even & ROI Toolbox ===");
    println!("1) {} 비용/판매가", cfg.variant_a.name);
    println!("2) {} 비용/판매가", cfg.variant_b.name);
    println!("3) 고정비 & 수량 범위");
    println!("4) 결과 요약");
    println!("5) 결과 표");
    println!("6) 내보내기");
    println!("0) 저장 후 종료");
    loop {
        let sel = read_line("메뉴 선택: ")?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::VariantA),
            "2" => return Ok(MenuChoice::VariantB),
            "3" => return Ok(MenuChoice::FixedCostsAndRange),
            "4" => return Ok(MenuChoice::Results),
            "5" => return Ok(MenuChoice::Table),
            "6" => return Ok(MenuChoice::Export),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("잘못된 입력입니다. 다시 선택하세요."),
        }
    }
}

/// 변형 하나의 변동비 항목과 판매가 산정 입력을 수정한다.
pub fn handle_variant(v: &mut VariantInput) -> Result<(), AppError> {
    println!("\n-- {} 변동비 (단위당) --", v.name);
    println!("엔터만 누르면 현재 값을 유지합니다.");
    let c = &mut v.costs;
    c.material = read_f64_or("재료비", c.material)?;
    c.labor = read_f64_or("인건비", c.labor)?;
    c.energy = read_f64_or("에너지비", c.energy)?;
    c.storage = read_f64_or("보관비", c.storage)?;
    c.transport = read_f64_or("운송비", c.transport)?;
    c.consumables = read_f64_or("소모품비", c.consumables)?;

    println!("\n-- {} 판매가 산정 --", v.name);
    let p = &mut v.pricing;
    p.markup_pct = read_f64_or("마진율 [%]", p.markup_pct)?;
    p.distribution = read_f64_or("유통비", p.distribution)?;
    p.discount = read_f64_or("조기 결제 할인", p.discount)?;
    p.marketing = read_f64_or("마케팅비", p.marketing)?;

    let derived = crate::economics::derive_variant(v);
    println!(
        "변동비 {} / 판매가 {}",
        fixed(derived.variable_cost, 2),
        fixed(derived.sale_price, 2)
    );
    Ok(())
}

/// 고정비와 최대 수량을 수정한다.
pub fn handle_fixed_and_range(cfg: &mut AnalysisConfig) -> Result<(), AppError> {
    println!("\n-- 고정비 & 수량 범위 --");
    let label_a = format!("{} 고정비", cfg.variant_a.name);
    cfg.variant_a.fixed_cost = read_f64_or(&label_a, cfg.variant_a.fixed_cost)?;
    let label_b = format!("{} 고정비", cfg.variant_b.name);
    cfg.variant_b.fixed_cost = read_f64_or(&label_b, cfg.variant_b.fixed_cost)?;
    loop {
        let n = read_f64_or("최대 수량", f64::from(cfg.max_quantity))?;
        if n >= 1.0 && n.fract() == 0.0 && n <= f64::from(u32::MAX) {
            cfg.max_quantity = n as u32;
            break;
        }
        println!("1 이상의 정수를 입력하세요.");
    }
    Ok(())
}

/// 결과 요약 메뉴를 처리한다.
pub fn handle_results(cfg: &AnalysisConfig) -> Result<(), AppError> {
    let analysis = app::run_analysis(cfg)?;
    print_summary(&analysis);
    Ok(())
}

/// 결과 표 메뉴를 처리한다.
pub fn handle_table(cfg: &AnalysisConfig) -> Result<(), AppError> {
    let analysis = app::run_analysis(cfg)?;
    let step = loop {
        let n = read_f64_or("행 간격", 100.0)?;
        if n >= 1.0 && n.fract() == 0.0 && n <= usize::MAX as f64 {
            break n as usize;
        }
        println!("1 이상의 정수를 입력하세요.");
    };
    println!("{}", table_view(&analysis.table, step, usize::MAX));
    Ok(())
}

/// 내보내기 메뉴를 처리한다.
pub fn handle_export(cfg: &AnalysisConfig) -> Result<(), AppError> {
    let analysis = app::run_analysis(cfg)?;
    let defaults = ExportTargets::defaults();
    let targets = ExportTargets {
        csv: read_path_or("CSV 파일", defaults.csv)?,
        report: read_path_or("보고서 파일", defaults.report)?,
        charts: read_path_or("차트 JSON 파일", defaults.charts)?,
    };
    app::export(&analysis, cfg, &targets)?;
    println!("내보내기 완료.");
    Ok(())
}

/// 단위 경제성과 교차점을 출력한다. 찾지 못한 교차점은 생략한다.
pub fn print_summary(analysis: &Analysis) {
    let currency = &analysis.currency;
    println!("\n-- 단위 경제성 --");
    for v in [&analysis.variant_a, &analysis.variant_b] {
        println!(
            "{}: 판매가 {} {currency}, 변동비 {} {currency}, 고정비 {} {currency}",
            v.name,
            fixed(v.sale_price, 2),
            fixed(v.variable_cost, 2),
            fixed(v.fixed_cost, 2)
        );
    }
    println!("\n-- 교차점 (수량 1..={}) --", analysis.quantities.len());
    let named = analysis.table.named_crossings();
    if named.is_empty() {
        println!("범위 내에서 교차점을 찾지 못했습니다.");
    }
    for c in &named {
        println!(
            "{}",
            marker_label(&c.name, &c.point, chart_kind_of(c.kind), currency)
        );
    }
    let missing: Vec<String> = CrossingKind::ALL
        .into_iter()
        .filter(|k| analysis.table.crossings().get(*k).is_none())
        .map(|k| {
            let (a, b) = analysis.table.names();
            k.name(a, b)
        })
        .collect();
    if !missing.is_empty() && !named.is_empty() {
        println!("범위 밖: {}", missing.join(", "));
    }
}

/// 결과 표를 터미널 표로 만든다. `step` 행마다 하나씩, 최대 `limit` 행을 싣는다.
/// 마지막 행은 항상 포함한다.
pub fn table_view(table: &ResultTable, step: usize, limit: usize) -> Table {
    let mut view = Table::new();
    view.load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(table.headers().to_vec());

    let rows = table.rows();
    let step = step.max(1);
    let last = rows.len().saturating_sub(1);
    let mut picked: Vec<&ResultRow> = rows
        .iter()
        .enumerate()
        .filter(|(i, _)| i % step == 0 || *i == last)
        .map(|(_, row)| row)
        .take(limit)
        .collect();
    // 잘린 경우 마지막 칸을 마지막 행으로 바꾼다
    if let (Some(tail), Some(last_row)) = (picked.last_mut(), rows.last()) {
        *tail = last_row;
    }
    for row in picked {
        view.add_row(vec![
            row.quantity.to_string(),
            fixed(row.profit_a, 2),
            fixed(row.profit_b, 2),
            row.roi_a.map(|v| fixed(v, 4)).unwrap_or_default(),
            row.roi_b.map(|v| fixed(v, 4)).unwrap_or_default(),
        ]);
    }
    for i in 0..5 {
        if let Some(col) = view.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
    view
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(buf)
}

fn read_f64_or(label: &str, current: f64) -> Result<f64, AppError> {
    loop {
        let s = read_line(&format!("{label} [{current}]: "))?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(current);
        }
        match s.parse::<f64>() {
            Ok(v) if v.is_finite() => return Ok(v),
            _ => println!("숫자를 입력하세요."),
        }
    }
}

fn read_path_or(label: &str, default: Option<PathBuf>) -> Result<Option<PathBuf>, AppError> {
    let shown = default
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_default();
    let s = read_line(&format!("{label} [{shown}] (-: 건너뜀): "))?;
    Ok(match s.trim() {
        "" => default,
        "-" => None,
        other => Some(PathBuf::from(other)),
    })
}
