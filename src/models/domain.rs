//! # 模型区域数据模型
//!
//! 每个坐标轴上的 [min, max] 包围盒，三个轴组成模型区域。
//!
//! ## 依赖关系
//! - 被 `mesh/boundary.rs` 使用
//! - 使用 `error.rs` 的 ConfigurationError

use crate::error::ConfigurationError;
use serde::Serialize;
use std::fmt;

/// 坐标轴
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
            Axis::Z => write!(f, "z"),
        }
    }
}

/// 单轴包围盒（m），保证 min < max
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    min: f64,
    max: f64,
}

impl BoundingBox {
    pub fn new(axis: Axis, min: f64, max: f64) -> Result<Self, ConfigurationError> {
        if min.is_finite() && max.is_finite() && min < max {
            Ok(BoundingBox { min, max })
        } else {
            Err(ConfigurationError::MalformedBoundingBox { axis, min, max })
        }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    /// 两端各向外扩展 margin；margin 必须非负
    pub(crate) fn extended(&self, margin: f64) -> Self {
        BoundingBox {
            min: self.min - margin,
            max: self.max + margin,
        }
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

/// 三维模型区域
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ModelDomain {
    pub x: BoundingBox,
    pub y: BoundingBox,
    pub z: BoundingBox,
}

impl ModelDomain {
    pub fn new(x: BoundingBox, y: BoundingBox, z: BoundingBox) -> Self {
        ModelDomain { x, y, z }
    }

    /// 从三组 (min, max) 创建并逐轴校验
    pub fn from_bounds(
        x: (f64, f64),
        y: (f64, f64),
        z: (f64, f64),
    ) -> Result<Self, ConfigurationError> {
        Ok(ModelDomain {
            x: BoundingBox::new(Axis::X, x.0, x.1)?,
            y: BoundingBox::new(Axis::Y, y.0, y.1)?,
            z: BoundingBox::new(Axis::Z, z.0, z.1)?,
        })
    }

    pub fn axis(&self, axis: Axis) -> BoundingBox {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// 按 x, y, z 顺序遍历
    pub fn axes(&self) -> impl Iterator<Item = (Axis, BoundingBox)> + '_ {
        Axis::ALL.into_iter().map(move |axis| (axis, self.axis(axis)))
    }

    pub(crate) fn map(&self, f: impl Fn(&BoundingBox) -> BoundingBox) -> Self {
        ModelDomain {
            x: f(&self.x),
            y: f(&self.y),
            z: f(&self.z),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounding_box_requires_min_below_max() {
        assert!(BoundingBox::new(Axis::X, -1000.0, 4500.0).is_ok());

        let err = BoundingBox::new(Axis::Y, 3500.0, 3500.0).unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::MalformedBoundingBox {
                axis: Axis::Y,
                min: 3500.0,
                max: 3500.0
            }
        );
        assert!(BoundingBox::new(Axis::Z, 0.0, -3500.0).is_err());
        assert!(BoundingBox::new(Axis::Z, f64::NAN, 0.0).is_err());
        assert!(BoundingBox::new(Axis::Z, f64::NEG_INFINITY, 0.0).is_err());
    }

    #[test]
    fn test_bounding_box_width_and_extension() {
        let bbox = BoundingBox::new(Axis::X, -1000.0, 4500.0).unwrap();
        assert_eq!(bbox.width(), 5500.0);

        let wide = bbox.extended(712.0);
        assert_eq!(wide.min(), -1712.0);
        assert_eq!(wide.max(), 5212.0);
    }

    #[test]
    fn test_model_domain_reports_failing_axis() {
        let err = ModelDomain::from_bounds((-1000.0, 4500.0), (0.0, 3500.0), (0.0, -3500.0))
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigurationError::MalformedBoundingBox { axis: Axis::Z, .. }
        ));
    }

    #[test]
    fn test_model_domain_axes_order() {
        let domain =
            ModelDomain::from_bounds((-1000.0, 4500.0), (0.0, 3500.0), (-3500.0, 0.0)).unwrap();
        let axes: Vec<Axis> = domain.axes().map(|(axis, _)| axis).collect();
        assert_eq!(axes, vec![Axis::X, Axis::Y, Axis::Z]);
        assert_eq!(domain.axis(Axis::Z).min(), -3500.0);
    }
}
