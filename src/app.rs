use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

use crate::analysis::{analyze, Analysis};
use crate::config::{AnalysisConfig, ConfigError};
use crate::report::{write_charts_json, write_csv, write_report, ExportError};
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    #[error("내보내기 오류: {0}")]
    Export(#[from] ExportError),
    #[error("이미 존재하는 파일입니다: {}", .0.display())]
    AlreadyExists(PathBuf),
}

/// 내보낼 파일 경로 묶음. None 인 항목은 건너뛴다.
#[derive(Debug, Clone, Default)]
pub struct ExportTargets {
    pub csv: Option<PathBuf>,
    pub report: Option<PathBuf>,
    pub charts: Option<PathBuf>,
}

impl ExportTargets {
    /// 경로를 하나도 지정하지 않았을 때 쓰는 기본 파일 이름.
    pub fn defaults() -> Self {
        Self {
            csv: Some(PathBuf::from("breakeven.csv")),
            report: Some(PathBuf::from("breakeven_report.txt")),
            charts: Some(PathBuf::from("breakeven_charts.json")),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.csv.is_none() && self.report.is_none() && self.charts.is_none()
    }
}

fn create(path: &Path) -> Result<BufWriter<File>, AppError> {
    Ok(BufWriter::new(File::create(path)?))
}

/// 설정을 검증한 뒤 분석을 수행한다.
pub fn run_analysis(config: &AnalysisConfig) -> Result<Analysis, AppError> {
    config.validate()?;
    Ok(analyze(config))
}

/// 분석 결과를 지정한 파일들로 내보낸다.
pub fn export(
    analysis: &Analysis,
    config: &AnalysisConfig,
    targets: &ExportTargets,
) -> Result<(), AppError> {
    if let Some(path) = &targets.csv {
        write_csv(&analysis.table, create(path)?)?;
        info!(path = %path.display(), "CSV 내보내기 완료");
    }
    if let Some(path) = &targets.report {
        write_report(analysis, &config.report, create(path)?)?;
        info!(path = %path.display(), "보고서 내보내기 완료");
    }
    if let Some(path) = &targets.charts {
        write_charts_json(analysis, create(path)?)?;
        info!(path = %path.display(), "차트 JSON 내보내기 완료");
    }
    Ok(())
}

/// 대화형 메뉴의 메인 루프를 실행한다. 종료 시 설정을 저장한다.
pub fn run(config: &mut AnalysisConfig, config_path: &Path) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu(config)? {
            MenuChoice::VariantA => ui_cli::handle_variant(&mut config.variant_a)?,
            MenuChoice::VariantB => ui_cli::handle_variant(&mut config.variant_b)?,
            MenuChoice::FixedCostsAndRange => ui_cli::handle_fixed_and_range(config)?,
            MenuChoice::Results => ui_cli::handle_results(config)?,
            MenuChoice::Table => ui_cli::handle_table(config)?,
            MenuChoice::Export => ui_cli::handle_export(config)?,
            MenuChoice::Exit => {
                config.save(config_path)?;
                println!("설정을 저장하고 종료합니다.");
                break;
            }
        }
    }
    Ok(())
}
