//! # csem-mesh 命令行工具
//!
//! 对 `csem_mesh` 库的薄封装：读取参数、计算、打印结果。
//!
//! ## 子命令
//! - `derive`      - 计算单一阶数的网格参数
//! - `compare`     - 比较所有阶数的网格参数
//! - `calibration` - 打印标定表
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     └── csem_mesh (参数计算库)
//!   └── utils/      (输出与日志)
//! ```

mod cli;
mod commands;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();
    utils::logger::init_logger(cli.verbose);

    if let Err(e) = commands::run(cli.command) {
        tracing::debug!(error = ?e, "command failed");
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
