//! 핵심 계산 로직을 라이브러리로 분리하여 CLI 외의 렌더러/내보내기 도구에서도 쓸 수 있게 한다.

pub mod analysis;
pub mod app;
pub mod config;
pub mod economics;
pub mod report;
pub mod ui_cli;
