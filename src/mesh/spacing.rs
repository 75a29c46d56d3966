//! # 全局与局部网格间距
//!
//! - 全局间距: dg = round(min(δ) / rg[p-1])
//! - 局部间距: ds = round(dg / rs[p-1])
//!
//! 取整采用四舍六入五成双（round half to even），结果单位为整米。
//!
//! ## 依赖关系
//! - 被 `mesh/deriver.rs` 调用
//! - 使用 `mesh/calibration.rs` 的标定表

use crate::error::DomainError;
use crate::mesh::CalibrationTable;
use crate::models::BasisOrder;

/// 取整到最近整米，恰好一半时取偶数
#[inline]
pub fn round_to_metre(value: f64) -> f64 {
    value.round_ties_even()
}

/// 使用默认标定表计算全局间距 dg（m）
pub fn compute_global_spacing(skin_depths: &[f64], order: BasisOrder) -> Result<f64, DomainError> {
    CalibrationTable::default().global_spacing(skin_depths, order)
}

/// 使用默认标定表计算局部间距 ds（m）
pub fn compute_local_spacing(global_spacing: f64, order: BasisOrder) -> Result<f64, DomainError> {
    CalibrationTable::default().local_spacing(global_spacing, order)
}

impl CalibrationTable {
    /// 全局间距由最小趋肤深度（电导率最高的材料）决定
    pub fn global_spacing(&self, skin_depths: &[f64], order: BasisOrder) -> Result<f64, DomainError> {
        let min_skin_depth = min_skin_depth(skin_depths)?;
        let divisor = self.global_divisor(order);
        let dg = round_to_metre(min_skin_depth / divisor);

        if dg <= 0.0 {
            return Err(DomainError::UnresolvedGlobalSpacing {
                min_skin_depth,
                divisor,
            });
        }

        Ok(dg)
    }

    /// 局部间距，用于源与接收点附近加密
    pub fn local_spacing(&self, global_spacing: f64, order: BasisOrder) -> Result<f64, DomainError> {
        if !(global_spacing.is_finite() && global_spacing > 0.0) {
            return Err(DomainError::InvalidGlobalSpacing(global_spacing));
        }

        let divisor = self.local_divisor(order);
        let ds = round_to_metre(global_spacing / divisor);

        if ds <= 0.0 {
            return Err(DomainError::UnresolvedLocalSpacing {
                global_spacing,
                divisor,
            });
        }

        Ok(ds)
    }
}

fn min_skin_depth(skin_depths: &[f64]) -> Result<f64, DomainError> {
    if skin_depths.is_empty() {
        return Err(DomainError::NoMaterials);
    }

    let mut min = f64::INFINITY;
    for (index, &value) in skin_depths.iter().enumerate() {
        if !(value.is_finite() && value > 0.0) {
            return Err(DomainError::InvalidSkinDepth { index, value });
        }
        min = min.min(value);
    }

    Ok(min)
}
