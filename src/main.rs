use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use breakeven_toolbox::app::{self, AppError, ExportTargets};
use breakeven_toolbox::config::{self, AnalysisConfig, DEFAULT_CONFIG_PATH};
use breakeven_toolbox::ui_cli;

/// 두 제조 구성의 손익분기점과 ROI를 비교한다.
#[derive(Debug, Parser)]
#[command(name = "breakeven_toolbox", version)]
struct Cli {
    /// 설정 파일 경로 (없으면 기본값으로 생성)
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// 설정 파일의 최대 수량을 덮어쓴다
    #[arg(short = 'n', long, global = true)]
    max_quantity: Option<u32>,

    /// RUST_LOG 가 없을 때 쓰는 로그 레벨
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 단위 경제성과 교차점 요약 (기본)
    Analyze,
    /// 수량별 결과 표 출력
    Table {
        /// 몇 행마다 하나씩 표시할지
        #[arg(long, default_value_t = 100)]
        step: usize,
        /// 최대 표시 행 수
        #[arg(long, default_value_t = 100)]
        rows: usize,
    },
    /// CSV / 텍스트 보고서 / 차트 JSON 내보내기. 경로를 생략하면 세 가지 모두 기본 이름으로 쓴다.
    Export {
        #[arg(long)]
        csv: Option<PathBuf>,
        #[arg(long)]
        report: Option<PathBuf>,
        #[arg(long)]
        charts: Option<PathBuf>,
    },
    /// 대화형 메뉴
    Interactive,
    /// 기본 설정 파일 생성
    Init {
        /// 기존 파일을 덮어쓴다
        #[arg(long)]
        force: bool,
    },
}

/// 프로그램의 엔트리 포인트. 로깅을 초기화하고 하위 명령을 실행한다.
fn main() -> ExitCode {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match try_run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("오류: {err}");
            ExitCode::FAILURE
        }
    }
}

fn try_run(cli: Cli) -> Result<(), AppError> {
    let load = || -> Result<AnalysisConfig, AppError> {
        let mut cfg = config::load_or_default(&cli.config)?;
        if let Some(n) = cli.max_quantity {
            cfg.max_quantity = n;
        }
        Ok(cfg)
    };

    match cli.command.unwrap_or(Command::Analyze) {
        Command::Analyze => {
            let analysis = app::run_analysis(&load()?)?;
            ui_cli::print_summary(&analysis);
        }
        Command::Table { step, rows } => {
            let analysis = app::run_analysis(&load()?)?;
            println!("{}", ui_cli::table_view(&analysis.table, step, rows));
        }
        Command::Export {
            csv,
            report,
            charts,
        } => {
            let cfg = load()?;
            let analysis = app::run_analysis(&cfg)?;
            let mut targets = ExportTargets {
                csv,
                report,
                charts,
            };
            if targets.is_empty() {
                targets = ExportTargets::defaults();
            }
            app::export(&analysis, &cfg, &targets)?;
        }
        Command::Interactive => {
            let mut cfg = load()?;
            app::run(&mut cfg, &cli.config)?;
        }
        Command::Init { force } => {
            if cli.config.exists() && !force {
                return Err(AppError::AlreadyExists(cli.config.clone()));
            }
            AnalysisConfig::default().save(&cli.config)?;
            println!("기본 설정을 {} 에 저장했습니다.", cli.config.display());
        }
    }
    Ok(())
}
