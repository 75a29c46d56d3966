//! # 网格参数推导器
//!
//! 单遍计算流程：校验输入 → 趋肤深度 → dg → ds → 扩展区域。
//! 任一步失败即返回错误，不产生部分结果。
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 使用 `mesh/` 的各计算函数和 `models/` 的数据模型

use crate::error::Result;
use crate::mesh::{compute_skin_depths, expand_domain, CalibrationTable};
use crate::models::{BasisOrder, DerivedParameters, ModelDomain, SurveyParameters};

/// 网格参数推导器
#[derive(Debug, Clone, Default)]
pub struct ParameterDeriver {
    calibration: CalibrationTable,
}

impl ParameterDeriver {
    /// 使用默认（2% 误差）标定表
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_calibration(calibration: CalibrationTable) -> Self {
        Self { calibration }
    }

    pub fn calibration(&self) -> &CalibrationTable {
        &self.calibration
    }

    /// 计算网格参数
    pub fn derive(&self, survey: &SurveyParameters, raw: &ModelDomain) -> Result<DerivedParameters> {
        let order = survey.basis_order();

        let skin_depths = compute_skin_depths(survey.frequency(), survey.conductivities())?;
        tracing::debug!(
            frequency = survey.frequency(),
            ?skin_depths,
            "computed skin depths"
        );

        let global_spacing = self.calibration.global_spacing(&skin_depths, order)?;
        tracing::debug!(
            basis_order = order.get(),
            rg = self.calibration.global_divisor(order),
            global_spacing,
            "computed global spacing"
        );

        let local_spacing = self.calibration.local_spacing(global_spacing, order)?;
        tracing::debug!(
            rs = self.calibration.local_divisor(order),
            local_spacing,
            "computed local spacing"
        );

        let expanded_domain = expand_domain(raw, global_spacing)?;
        tracing::debug!(?expanded_domain, "expanded model domain");

        Ok(DerivedParameters {
            frequency: survey.frequency(),
            basis_order: order,
            skin_depths,
            global_spacing,
            local_spacing,
            expanded_domain,
        })
    }

    /// 对 p = 1..=6 逐一计算，便于比较不同阶数的网格代价
    pub fn derive_all_orders(
        &self,
        survey: &SurveyParameters,
        raw: &ModelDomain,
    ) -> Result<Vec<DerivedParameters>> {
        BasisOrder::all()
            .map(|order| self.derive(&survey.with_basis_order(order), raw))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ConfigurationError, DomainError, MeshError};

    fn survey(p: i64) -> SurveyParameters {
        SurveyParameters::new(
            2.0,
            vec![1.0, 1.0 / 100.0, 1.0, 1.0 / 0.3],
            BasisOrder::new(p).unwrap(),
        )
        .unwrap()
    }

    fn raw() -> ModelDomain {
        ModelDomain::from_bounds((-1000.0, 4500.0), (0.0, 3500.0), (-3500.0, 0.0)).unwrap()
    }

    #[test]
    fn test_derive_constable_weiss_p2() {
        let params = ParameterDeriver::new().derive(&survey(2), &raw()).unwrap();

        assert_eq!(params.skin_depths.len(), 4);
        assert!((params.min_skin_depth() - 194.811_062_314_233).abs() < 1e-9);
        assert_eq!(params.global_spacing, 178.0);
        assert_eq!(params.local_spacing, 16.0);
        assert_eq!(params.expanded_domain.x.min(), -1712.0);
        assert_eq!(params.expanded_domain.x.max(), 5212.0);
        assert_eq!(params.refinement_radius(), 160.0);
    }

    #[test]
    fn test_derive_all_orders() {
        let all = ParameterDeriver::new()
            .derive_all_orders(&survey(1), &raw())
            .unwrap();

        let dg: Vec<f64> = all.iter().map(|d| d.global_spacing).collect();
        let ds: Vec<f64> = all.iter().map(|d| d.local_spacing).collect();
        assert_eq!(dg, vec![77.0, 178.0, 207.0, 229.0, 248.0, 343.0]);
        assert_eq!(ds, vec![6.0, 16.0, 21.0, 25.0, 31.0, 57.0]);
        assert!(all.iter().zip(1..).all(|(d, p)| d.basis_order.get() == p));
    }

    #[test]
    fn test_custom_calibration() {
        let table = CalibrationTable::new([1.0; 6], [2.0; 6]).unwrap();
        let params = ParameterDeriver::with_calibration(table)
            .derive(&survey(3), &raw())
            .unwrap();

        assert_eq!(params.global_spacing, 195.0);
        // 97.5 -> 98
        assert_eq!(params.local_spacing, 98.0);
    }

    #[test]
    fn test_high_frequency_fails_without_partial_result() {
        let survey = SurveyParameters::new(1.0e7, vec![3.3], BasisOrder::new(2).unwrap()).unwrap();
        let err = ParameterDeriver::new().derive(&survey, &raw()).unwrap_err();
        assert!(matches!(
            err,
            MeshError::Domain(DomainError::UnresolvedGlobalSpacing { .. })
        ));
    }

    #[test]
    fn test_error_kinds_are_distinguishable() {
        let domain_err: MeshError = DomainError::InvalidBasisOrder(7).into();
        let config_err: MeshError = ConfigurationError::InvalidCalibration("x".into()).into();
        assert!(matches!(domain_err, MeshError::Domain(_)));
        assert!(matches!(config_err, MeshError::Configuration(_)));
    }
}
