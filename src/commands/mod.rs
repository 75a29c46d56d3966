//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `utils/` 和 `csem_mesh` 库
//! - 子模块: calibration, compare, derive, survey

pub mod calibration;
pub mod compare;
pub mod derive;
mod survey;

use crate::cli::Commands;
use csem_mesh::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Derive(args) => derive::execute(args),
        Commands::Compare(args) => compare::execute(args),
        Commands::Calibration => calibration::execute(),
    }
}
