//! # csem-mesh - 海洋可控源电磁 (CSEM) 自适应网格参数
//!
//! 为高阶有限元电磁模拟推导网格尺寸参数：
//! - 每种材料的趋肤深度
//! - 全局网格间距 dg（保证全域离散误差）
//! - 局部网格间距 ds（源与接收点附近加密）
//! - 外边界至少扩展 4·dg 后的模型区域
//!
//! 结果交给外部网格生成器使用，本库不生成网格也不求解。
//!
//! ## 依赖关系
//! ```text
//! lib.rs
//!   ├── mesh/     (参数计算)
//!   │     └── models/ (数据模型)
//!   └── error.rs  (错误处理)
//! ```
//!
//! ## 示例
//! ```
//! use csem_mesh::{BasisOrder, ModelDomain, ParameterDeriver, SurveyParameters};
//!
//! let survey = SurveyParameters::from_resistivities(
//!     2.0,
//!     &[1.0, 100.0, 1.0, 0.3],
//!     BasisOrder::new(2).unwrap(),
//! )
//! .unwrap();
//! let domain = ModelDomain::from_bounds((-1000., 4500.), (0., 3500.), (-3500., 0.)).unwrap();
//!
//! let params = ParameterDeriver::new().derive(&survey, &domain).unwrap();
//! assert_eq!(params.global_spacing, 178.0);
//! assert_eq!(params.local_spacing, 16.0);
//! ```

pub mod error;
pub mod mesh;
pub mod models;

pub use error::{ConfigurationError, DomainError, MeshError, Result};
pub use mesh::{
    compute_global_spacing, compute_local_spacing, compute_skin_depths, expand_domain,
    CalibrationTable, ParameterDeriver,
};
pub use models::{Axis, BasisOrder, BoundingBox, DerivedParameters, ModelDomain, SurveyParameters};
