//! # 勘测参数数据模型
//!
//! 发射频率、各层材料电导率以及有限元基函数阶数。
//!
//! ## 依赖关系
//! - 被 `mesh/` 使用
//! - 使用 `error.rs` 的 DomainError

use crate::error::DomainError;
use serde::Serialize;
use std::fmt;

/// 有限元基函数阶数 p（1 到 6）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct BasisOrder(u8);

impl BasisOrder {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 6;

    pub fn new(order: i64) -> Result<Self, DomainError> {
        if (Self::MIN as i64..=Self::MAX as i64).contains(&order) {
            Ok(BasisOrder(order as u8))
        } else {
            Err(DomainError::InvalidBasisOrder(order))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// 标定表下标，即 p - 1
    pub fn index(self) -> usize {
        (self.0 - Self::MIN) as usize
    }

    /// 按升序遍历所有阶数
    pub fn all() -> impl Iterator<Item = BasisOrder> {
        (Self::MIN..=Self::MAX).map(BasisOrder)
    }
}

impl fmt::Display for BasisOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 勘测参数
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurveyParameters {
    /// 发射频率（Hz）
    frequency: f64,
    /// 各层材料电导率（S/m），顺序与层模型一致
    conductivities: Vec<f64>,
    /// 基函数阶数
    basis_order: BasisOrder,
}

impl SurveyParameters {
    /// 校验并创建勘测参数，返回遇到的第一个错误
    pub fn new(
        frequency: f64,
        conductivities: Vec<f64>,
        basis_order: BasisOrder,
    ) -> Result<Self, DomainError> {
        validate_frequency(frequency)?;
        validate_conductivities(&conductivities)?;

        Ok(SurveyParameters {
            frequency,
            conductivities,
            basis_order,
        })
    }

    /// 由电阻率（Ω·m）创建，σ = 1/ρ
    pub fn from_resistivities(
        frequency: f64,
        resistivities: &[f64],
        basis_order: BasisOrder,
    ) -> Result<Self, DomainError> {
        let conductivities = resistivities.iter().map(|rho| 1.0 / rho).collect();
        Self::new(frequency, conductivities, basis_order)
    }

    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    pub fn conductivities(&self) -> &[f64] {
        &self.conductivities
    }

    pub fn basis_order(&self) -> BasisOrder {
        self.basis_order
    }

    /// 相同材料与频率、不同阶数的副本
    pub fn with_basis_order(&self, basis_order: BasisOrder) -> Self {
        SurveyParameters {
            basis_order,
            ..self.clone()
        }
    }
}

pub(crate) fn validate_frequency(frequency: f64) -> Result<(), DomainError> {
    if frequency.is_finite() && frequency > 0.0 {
        Ok(())
    } else {
        Err(DomainError::InvalidFrequency(frequency))
    }
}

pub(crate) fn validate_conductivities(conductivities: &[f64]) -> Result<(), DomainError> {
    if conductivities.is_empty() {
        return Err(DomainError::NoMaterials);
    }

    match conductivities
        .iter()
        .enumerate()
        .find(|&(_, &sigma)| !(sigma.is_finite() && sigma > 0.0))
    {
        Some((index, &value)) => Err(DomainError::InvalidConductivity { index, value }),
        None => Ok(()),
    }
}
