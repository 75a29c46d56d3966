//! # 网格参数（计算结果）
//!
//! 交给外部网格生成器的全局间距 dg、局部间距 ds 与扩展后的模型区域。
//!
//! ## 依赖关系
//! - 由 `mesh/deriver.rs` 创建
//! - 被 `commands/` 输出

use crate::models::{BasisOrder, ModelDomain};
use serde::Serialize;

/// 局部间距对数增长回 dg 所需距离，以 ds 为单位
pub const REFINEMENT_RADIUS_FACTOR: f64 = 10.0;

/// 网格参数
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedParameters {
    /// 发射频率（Hz）
    pub frequency: f64,
    /// 基函数阶数
    pub basis_order: BasisOrder,
    /// 各材料趋肤深度（m），与输入电导率同序
    pub skin_depths: Vec<f64>,
    /// 全局网格间距 dg（m）
    pub global_spacing: f64,
    /// 源/接收点附近的局部网格间距 ds（m）
    pub local_spacing: f64,
    /// 扩展后的模型区域（m）
    pub expanded_domain: ModelDomain,
}

impl DerivedParameters {
    /// 最小趋肤深度（m）
    pub fn min_skin_depth(&self) -> f64 {
        self.skin_depths
            .iter()
            .copied()
            .fold(f64::INFINITY, f64::min)
    }

    /// 单元尺寸从 ds 增长到 dg 的大致距离（m）
    pub fn refinement_radius(&self) -> f64 {
        REFINEMENT_RADIUS_FACTOR * self.local_spacing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DerivedParameters {
        DerivedParameters {
            frequency: 2.0,
            basis_order: BasisOrder::new(2).unwrap(),
            skin_depths: vec![355.67, 3556.75, 355.67, 194.81],
            global_spacing: 178.0,
            local_spacing: 16.0,
            expanded_domain: ModelDomain::from_bounds(
                (-1712.0, 5212.0),
                (-712.0, 4212.0),
                (-4212.0, 712.0),
            )
            .unwrap(),
        }
    }

    #[test]
    fn test_min_skin_depth() {
        assert!((sample().min_skin_depth() - 194.81).abs() < 1e-12);
    }

    #[test]
    fn test_refinement_radius() {
        assert_eq!(sample().refinement_radius(), 160.0);
    }

    #[test]
    fn test_serializes_domain_as_min_max_pairs() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["basis_order"], 2);
        assert_eq!(json["expanded_domain"]["x"]["min"], -1712.0);
        assert_eq!(json["expanded_domain"]["z"]["max"], 712.0);
    }
}
