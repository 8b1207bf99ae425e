//! tracing 구독자 설정.

use tracing_subscriber::EnvFilter;

/// stderr로 출력하는 fmt 구독자를 설치한다.
///
/// `RUST_LOG`가 설정되어 있으면 `level`보다 우선한다. 이미 설치된 구독자가
/// 있으면 아무것도 하지 않는다 (테스트에서 여러 번 호출될 수 있음).
pub fn init(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
