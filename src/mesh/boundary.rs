//! # 模型区域扩展
//!
//! 外边界（Dirichlet 边界条件）放在感兴趣区域外至少 4·dg 处，
//! 使中心区域产生的电场在到达人工边界前充分衰减。
//!
//! ## 依赖关系
//! - 被 `mesh/deriver.rs` 调用
//! - 使用 `models/domain.rs` 的 ModelDomain

use crate::error::DomainError;
use crate::models::ModelDomain;

/// 每一侧扩展的全局间距个数
pub const BOUNDARY_EXTENSION_FACTOR: f64 = 4.0;

/// 每个轴 min 减 4·dg、max 加 4·dg
pub fn expand_domain(raw: &ModelDomain, global_spacing: f64) -> Result<ModelDomain, DomainError> {
    // dg = 0 会使区域保持不变
    if !(global_spacing.is_finite() && global_spacing > 0.0) {
        return Err(DomainError::InvalidGlobalSpacing(global_spacing));
    }

    let margin = BOUNDARY_EXTENSION_FACTOR * global_spacing;
    Ok(raw.map(|bbox| bbox.extended(margin)))
}
