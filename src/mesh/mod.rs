//! # 网格参数计算模块
//!
//! 根据频率、材料电导率和基函数阶数推导自适应网格参数。
//!
//! ## 算法概述
//! 1. 计算每种材料的趋肤深度
//! 2. 用最小趋肤深度和标定表 rg 计算全局间距 dg
//! 3. 用 dg 和标定表 rs 计算局部间距 ds
//! 4. 模型边界向外扩展 4·dg
//!
//! ## 子模块
//! - `calibration`: rg/rs 标定表
//! - `skin_depth`: 趋肤深度
//! - `spacing`: 全局与局部间距
//! - `boundary`: 模型区域扩展
//! - `deriver`: 完整计算流程
//!
//! ## 依赖关系
//! - 使用 `models/` 的数据模型
//! - 被 `commands/` 调用

pub mod boundary;
pub mod calibration;
pub mod deriver;
pub mod skin_depth;
pub mod spacing;

pub use boundary::{expand_domain, BOUNDARY_EXTENSION_FACTOR};
pub use calibration::CalibrationTable;
pub use deriver::ParameterDeriver;
pub use skin_depth::{compute_skin_depths, skin_depth, SKIN_DEPTH_COEFFICIENT};
pub use spacing::{compute_global_spacing, compute_local_spacing, round_to_metre};
