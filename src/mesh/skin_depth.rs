//! # 趋肤深度
//!
//! 导电介质中扩散电磁场的近似趋肤深度 δ = 503·sqrt(1/(f·σ))，单位 m。
//!
//! ## 依赖关系
//! - 被 `mesh/deriver.rs` 调用
//! - 使用 `models/survey.rs` 的输入校验

use crate::error::DomainError;
use crate::models::survey::{validate_conductivities, validate_frequency};

/// 趋肤深度近似公式中的经验常数（m·sqrt(Hz·S/m)）
pub const SKIN_DEPTH_COEFFICIENT: f64 = 503.0;

/// 单一材料的趋肤深度，不做校验
#[inline]
pub fn skin_depth(frequency: f64, conductivity: f64) -> f64 {
    SKIN_DEPTH_COEFFICIENT * (1.0 / (frequency * conductivity)).sqrt()
}

/// 计算每种材料的趋肤深度，顺序与输入一致
pub fn compute_skin_depths(frequency: f64, conductivities: &[f64]) -> Result<Vec<f64>, DomainError> {
    validate_frequency(frequency)?;
    validate_conductivities(conductivities)?;

    Ok(conductivities
        .iter()
        .map(|&sigma| skin_depth(frequency, sigma))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_rel(actual: f64, expected: f64) {
        assert!(
            ((actual - expected) / expected).abs() < 1e-9,
            "{} != {}",
            actual,
            expected
        );
    }

    #[test]
    fn test_skin_depths_constable_weiss() {
        let sigma = [1.0, 1.0 / 100.0, 1.0, 1.0 / 0.3];
        let depths = compute_skin_depths(2.0, &sigma).unwrap();

        assert_eq!(depths.len(), 4);
        assert_rel(depths[0], 355.674_710_936_833_4);
        assert_rel(depths[1], 3_556.747_109_368_334);
        assert_rel(depths[2], depths[0]);
        assert_rel(depths[3], 194.811_062_314_233_1);
    }

    #[test]
    fn test_skin_depth_formula() {
        for &f in &[0.1, 0.25, 2.0, 10.0] {
            for &sigma in &[0.01_f64, 0.3, 1.0, 3.2] {
                let expected = 503.0 * (1.0 / (f * sigma)).sqrt();
                let depths = compute_skin_depths(f, &[sigma]).unwrap();
                assert_rel(depths[0], expected);
            }
        }
    }

    #[test]
    fn test_unit_product_gives_coefficient() {
        assert_eq!(skin_depth(1.0, 1.0), SKIN_DEPTH_COEFFICIENT);
    }

    #[test]
    fn test_rejects_invalid_frequency() {
        for f in [0.0, -2.0, f64::NAN] {
            let err = compute_skin_depths(f, &[1.0]).unwrap_err();
            assert!(matches!(err, DomainError::InvalidFrequency(_)));
        }
    }

    #[test]
    fn test_rejects_invalid_conductivity() {
        let err = compute_skin_depths(2.0, &[1.0, 0.01, -1.0]).unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidConductivity {
                index: 2,
                value: -1.0
            }
        );
        assert_eq!(compute_skin_depths(2.0, &[]), Err(DomainError::NoMaterials));
    }
}
