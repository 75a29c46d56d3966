//! # 数据模型模块
//!
//! 定义勘测参数、模型区域与网格参数的数据模型。所有模型均为构造后不可变的值对象。
//!
//! ## 依赖关系
//! - 被 `mesh/` 和 `commands/` 使用
//! - 子模块: survey, domain, derived

pub mod derived;
pub mod domain;
pub mod survey;

pub use derived::DerivedParameters;
pub use domain::{Axis, BoundingBox, ModelDomain};
pub use survey::{BasisOrder, SurveyParameters};
