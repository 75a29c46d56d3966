//! # 勘测参数 CLI 定义
//!
//! `derive` 与 `compare` 共用的频率、材料和模型范围参数。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/derive.rs` 和 `commands/compare.rs`

use clap::{ArgGroup, Args, ValueEnum};

/// 结果输出格式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Human-readable tables
    #[default]
    Table,
    /// Pretty-printed JSON on stdout
    Json,
}

/// 单轴范围 [min, max]（m）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    pub fn as_tuple(self) -> (f64, f64) {
        (self.min, self.max)
    }
}

/// 解析 "min,max" 形式的范围；min < max 的检查留给 ModelDomain
pub fn parse_interval(input: &str) -> Result<Interval, String> {
    let parts: Vec<&str> = input.split(',').map(str::trim).collect();
    if parts.len() != 2 {
        return Err(format!(
            "Invalid range '{}'. Use 'min,max' in meters (e.g., -1000,4500)",
            input
        ));
    }

    let parse = |s: &str| {
        s.parse::<f64>()
            .map_err(|_| format!("Invalid number '{}' in range '{}'", s, input))
    };

    Ok(Interval {
        min: parse(parts[0])?,
        max: parse(parts[1])?,
    })
}

/// 勘测参数
#[derive(Args, Debug)]
#[command(group(
    ArgGroup::new("materials")
        .required(true)
        .args(["sigma", "resistivity"])
))]
pub struct SurveyArgs {
    /// Transmission frequency in Hz
    #[arg(short, long, env = "CSEM_MESH_FREQUENCY", allow_negative_numbers = true)]
    pub frequency: f64,

    /// Material conductivities in S/m, comma separated (e.g., 1.0,0.01,1.0,3.3333)
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    pub sigma: Vec<f64>,

    /// Material resistivities in Ohm·m, comma separated (e.g., 1,100,1,0.3)
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    pub resistivity: Vec<f64>,

    /// Material names for the report, comma separated (e.g., Sediments,Oil,Sediments,Water)
    #[arg(long, value_delimiter = ',')]
    pub names: Vec<String>,

    /// Model x-dimensions "min,max" in meters
    #[arg(long, allow_hyphen_values = true, value_parser = parse_interval)]
    pub x: Interval,

    /// Model y-dimensions "min,max" in meters
    #[arg(long, allow_hyphen_values = true, value_parser = parse_interval)]
    pub y: Interval,

    /// Model z-dimensions "min,max" in meters
    #[arg(long, allow_hyphen_values = true, value_parser = parse_interval)]
    pub z: Interval,
}

/// derive 子命令参数
#[derive(Args, Debug)]
pub struct DeriveArgs {
    #[command(flatten)]
    pub survey: SurveyArgs,

    /// FEM basis order p (1-6)
    #[arg(
        short,
        long,
        env = "CSEM_MESH_ORDER",
        default_value_t = 2,
        allow_negative_numbers = true
    )]
    pub order: i64,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    pub format: ReportFormat,
}

/// compare 子命令参数
#[derive(Args, Debug)]
pub struct CompareArgs {
    #[command(flatten)]
    pub survey: SurveyArgs,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    pub format: ReportFormat,
}
