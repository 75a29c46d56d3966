//! # 网格标定表
//!
//! 每个基函数阶数对应的每趋肤深度点数除数 rg 与局部分辨率除数 rs。
//! 默认值保证电磁响应误差在 2% 以内。
//!
//! ## 参考
//! - Castillo-Reyes, O., de la Puente, J., García-Castillo, L. E., & Cela, J. M. (2019).
//!   Parallel 3-D marine controlled-source electromagnetic modelling using high-order
//!   tetrahedral Nédélec elements. Geophysical Journal International, 219(1), 39-65.
//!
//! ## 依赖关系
//! - 被 `mesh/spacing.rs` 和 `mesh/deriver.rs` 使用

use crate::error::ConfigurationError;
use crate::models::BasisOrder;

const ORDERS: usize = BasisOrder::MAX as usize;

/// rg/rs 标定表，按 p - 1 索引
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalibrationTable {
    rg: [f64; ORDERS],
    rs: [f64; ORDERS],
}

impl CalibrationTable {
    /// 2% 误差标定值
    pub const PETGEM_2019: CalibrationTable = CalibrationTable {
        //   p=1     p=2     p=3     p=4     p=5     p=6
        rg: [2.5382, 1.0918, 0.9433, 0.8512, 0.7847, 0.5682],
        rs: [13.0, 11.0, 10.0, 9.0, 8.0, 6.0],
    };

    /// 自定义标定表
    ///
    /// rg 必须为正；rs 必须不小于 1 且随阶数不增，以保证 ds ≤ dg。
    pub fn new(rg: [f64; ORDERS], rs: [f64; ORDERS]) -> Result<Self, ConfigurationError> {
        if let Some((i, v)) = rg
            .iter()
            .enumerate()
            .find(|&(_, &v)| !(v.is_finite() && v > 0.0))
        {
            return Err(ConfigurationError::InvalidCalibration(format!(
                "rg for p={} must be positive, got {}",
                i + 1,
                v
            )));
        }

        if let Some((i, v)) = rs
            .iter()
            .enumerate()
            .find(|&(_, &v)| !(v.is_finite() && v >= 1.0))
        {
            return Err(ConfigurationError::InvalidCalibration(format!(
                "rs for p={} must be at least 1, got {}",
                i + 1,
                v
            )));
        }

        if let Some(i) = (1..ORDERS).find(|&i| rs[i] > rs[i - 1]) {
            return Err(ConfigurationError::InvalidCalibration(format!(
                "rs must not increase with basis order: p={} has {} > {}",
                i + 1,
                rs[i],
                rs[i - 1]
            )));
        }

        Ok(CalibrationTable { rg, rs })
    }

    /// 全局间距除数 rg[p-1]
    pub fn global_divisor(&self, order: BasisOrder) -> f64 {
        self.rg[order.index()]
    }

    /// 局部间距除数 rs[p-1]
    pub fn local_divisor(&self, order: BasisOrder) -> f64 {
        self.rs[order.index()]
    }
}

impl Default for CalibrationTable {
    fn default() -> Self {
        Self::PETGEM_2019
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(p: i64) -> BasisOrder {
        BasisOrder::new(p).unwrap()
    }

    #[test]
    fn test_default_table_values() {
        let table = CalibrationTable::default();
        assert_eq!(table.global_divisor(order(1)), 2.5382);
        assert_eq!(table.global_divisor(order(2)), 1.0918);
        assert_eq!(table.global_divisor(order(6)), 0.5682);
        assert_eq!(table.local_divisor(order(1)), 13.0);
        assert_eq!(table.local_divisor(order(2)), 11.0);
        assert_eq!(table.local_divisor(order(6)), 6.0);
    }

    #[test]
    fn test_default_table_passes_validation() {
        let table = CalibrationTable::PETGEM_2019;
        assert_eq!(CalibrationTable::new(table.rg, table.rs), Ok(table));
    }

    #[test]
    fn test_default_rs_is_non_increasing_and_at_least_one() {
        let table = CalibrationTable::default();
        let rs: Vec<f64> = BasisOrder::all().map(|p| table.local_divisor(p)).collect();

        assert!(rs.iter().all(|&v| v >= 1.0));
        assert!(rs.windows(2).all(|w| w[1] <= w[0]));
    }

    #[test]
    fn test_rejects_non_positive_rg() {
        let mut rg = CalibrationTable::PETGEM_2019.rg;
        rg[3] = 0.0;
        let err = CalibrationTable::new(rg, CalibrationTable::PETGEM_2019.rs).unwrap_err();
        assert!(err.to_string().contains("p=4"));
    }

    #[test]
    fn test_rejects_rs_below_one() {
        let rs = [13.0, 11.0, 10.0, 9.0, 8.0, 0.5];
        let err = CalibrationTable::new(CalibrationTable::PETGEM_2019.rg, rs).unwrap_err();
        assert!(err.to_string().contains("p=6"));
    }

    #[test]
    fn test_rejects_increasing_rs() {
        let rs = [13.0, 11.0, 12.0, 9.0, 8.0, 6.0];
        let err = CalibrationTable::new(CalibrationTable::PETGEM_2019.rg, rs).unwrap_err();
        assert!(matches!(err, ConfigurationError::InvalidCalibration(_)));
        assert!(err.to_string().contains("p=3"));
    }
}
