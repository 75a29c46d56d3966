//! # 日志初始化
//!
//! `tracing-subscriber` 紧凑格式输出到 stderr，stdout 仅用于结果（含 JSON）。
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// RUST_LOG 优先；否则 verbose 时为 debug，默认只输出警告
pub fn init_logger(verbose: bool) {
    let default = if verbose {
        "csem_mesh=debug,info"
    } else {
        "csem_mesh=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
