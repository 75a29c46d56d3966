//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `derive`: 计算给定阶数的网格参数
//! - `compare`: 比较 p = 1..6 的网格参数
//! - `calibration`: 打印 rg/rs 标定表
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: survey

pub mod survey;

use clap::{Parser, Subcommand};

/// csem-mesh - 海洋 CSEM 自适应网格参数
#[derive(Parser)]
#[command(name = "csem-mesh")]
#[command(version)]
#[command(
    about = "Mesh-sizing rules for high-order finite-element marine CSEM modelling",
    long_about = None
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Derive skin depths, global/local spacing and the expanded model domain
    Derive(survey::DeriveArgs),

    /// Compare mesh parameters across all basis orders (p = 1..6)
    Compare(survey::CompareArgs),

    /// Print the rg/rs calibration table
    Calibration,
}
