//! # 勘测参数组装
//!
//! 把 CLI 参数转换为库的 SurveyParameters 和 ModelDomain。
//!
//! ## 依赖关系
//! - 被 `commands/derive.rs` 和 `commands/compare.rs` 使用
//! - 使用 `cli/survey.rs` 的 SurveyArgs

use crate::cli::survey::SurveyArgs;
use csem_mesh::{BasisOrder, MeshError, ModelDomain, Result, SurveyParameters};

/// 组装后的输入
pub struct SurveyInput {
    pub survey: SurveyParameters,
    pub domain: ModelDomain,
    /// 与电导率一一对应的材料名称
    pub names: Vec<String>,
}

impl SurveyInput {
    pub fn from_args(args: &SurveyArgs, order: BasisOrder) -> Result<Self> {
        let survey = if args.resistivity.is_empty() {
            SurveyParameters::new(args.frequency, args.sigma.clone(), order)?
        } else {
            SurveyParameters::from_resistivities(args.frequency, &args.resistivity, order)?
        };

        let domain =
            ModelDomain::from_bounds(args.x.as_tuple(), args.y.as_tuple(), args.z.as_tuple())?;

        let count = survey.conductivities().len();
        let names = if args.names.is_empty() {
            (1..=count).map(|i| format!("Material {}", i)).collect()
        } else if args.names.len() == count {
            args.names.clone()
        } else {
            return Err(MeshError::InvalidArgument(format!(
                "{} material names given for {} materials",
                args.names.len(),
                count
            )));
        };

        Ok(SurveyInput {
            survey,
            domain,
            names,
        })
    }
}
