use clap::Parser;
use mccabe_thiele_toolbox::{app, logging};

/// 프로그램의 엔트리 포인트. 인자를 해석한 뒤 설계 계산을 실행한다.
fn main() {
    let cli = app::Cli::parse();
    logging::init(&cli.log_level);
    if let Err(err) = app::run(&cli) {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}
