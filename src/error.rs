//! # 统一错误处理模块
//!
//! 定义 csem-mesh 的所有错误类型，使用 `thiserror` 派生。
//!
//! - `DomainError`: 物理输入非法（频率、电导率、基函数阶数、网格间距）
//! - `ConfigurationError`: 模型包围盒或标定表格式错误
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use crate::models::Axis;
use thiserror::Error;

/// 物理输入错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Frequency must be a positive finite value in Hz, got {0}")]
    InvalidFrequency(f64),

    #[error("At least one material conductivity is required")]
    NoMaterials,

    #[error("Conductivity of material #{index} must be a positive finite value in S/m, got {value}")]
    InvalidConductivity { index: usize, value: f64 },

    #[error("Skin depth #{index} must be a positive finite value in m, got {value}")]
    InvalidSkinDepth { index: usize, value: f64 },

    #[error("Basis order must be in 1..=6, got {0}")]
    InvalidBasisOrder(i64),

    #[error("Global spacing rounds to 0 m (min skin depth {min_skin_depth} m / rg {divisor})")]
    UnresolvedGlobalSpacing { min_skin_depth: f64, divisor: f64 },

    #[error("Local spacing rounds to 0 m (global spacing {global_spacing} m / rs {divisor})")]
    UnresolvedLocalSpacing { global_spacing: f64, divisor: f64 },

    #[error("Global spacing must be a positive finite value in m, got {0}")]
    InvalidGlobalSpacing(f64),
}

/// 配置错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("Malformed bounding box on {axis} axis: min ({min}) must be finite and below max ({max})")]
    MalformedBoundingBox { axis: Axis, min: f64, max: f64 },

    #[error("Invalid calibration table: {0}")]
    InvalidCalibration(String),
}

/// csem-mesh 统一错误类型
#[derive(Error, Debug)]
pub enum MeshError {
    // ─────────────────────────────────────────────────────────────
    // 计算错误
    // ─────────────────────────────────────────────────────────────
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    // ─────────────────────────────────────────────────────────────
    // 参数与输出错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to serialize report: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, MeshError>;
