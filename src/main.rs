use clap::Parser;
use std::path::PathBuf;

use combustion_engineering_toolbox::{app, config};

/// 커맨드라인 인자.
#[derive(Debug, Parser)]
#[command(about = "고체 연료 연소 공학 계산 도구")]
struct Args {
    /// 시나리오 TOML 파일 경로
    #[arg(long, default_value = "scenario.toml")]
    scenario: PathBuf,
}

/// 프로그램의 엔트리 포인트. 시나리오를 로드한 뒤 계산과 보고를 실행한다.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let scenario = config::load_or_default(&args.scenario)?;
    tracing::info!(
        "시나리오 '{}' 로드 완료 (연료 {}종)",
        scenario.name,
        scenario.fuels.len()
    );
    app::run(&scenario)?;
    Ok(())
}
