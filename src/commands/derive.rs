//! # derive 子命令实现
//!
//! 计算单一基函数阶数下的网格参数并输出。
//!
//! ## 输出内容
//! - 每种材料的趋肤深度
//! - 全局间距 dg、局部间距 ds、加密半径 10·ds
//! - 原始与扩展后的模型范围
//!
//! ## 依赖关系
//! - 使用 `cli/survey.rs` 定义的 DeriveArgs
//! - 使用 `csem_mesh::ParameterDeriver` 进行计算

use crate::cli::survey::{DeriveArgs, ReportFormat};
use crate::commands::survey::SurveyInput;
use crate::utils::output;
use csem_mesh::{BasisOrder, DerivedParameters, ModelDomain, ParameterDeriver, Result};

use serde::Serialize;
use tabled::{Table, Tabled};

/// 材料行
#[derive(Debug, Clone, Tabled, Serialize)]
struct MaterialRow {
    #[tabled(rename = "Material")]
    name: String,
    #[tabled(rename = "σ (S/m)")]
    conductivity: f64,
    #[tabled(rename = "Skin depth (m)", display_with = "fmt_metres")]
    skin_depth: f64,
}

/// 模型范围行
#[derive(Debug, Clone, Tabled)]
struct DomainRow {
    #[tabled(rename = "Axis")]
    axis: String,
    #[tabled(rename = "Original (m)")]
    original: String,
    #[tabled(rename = "Expanded (m)")]
    expanded: String,
}

/// 参数行
#[derive(Debug, Clone, Tabled)]
struct ParameterRow {
    #[tabled(rename = "Parameter")]
    name: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

/// JSON 输出
#[derive(Serialize)]
struct JsonReport<'a> {
    materials: Vec<MaterialRow>,
    original_domain: &'a ModelDomain,
    #[serde(flatten)]
    params: &'a DerivedParameters,
    refinement_radius: f64,
}

/// 执行 derive 命令
pub fn execute(args: DeriveArgs) -> Result<()> {
    let order = BasisOrder::new(args.order)?;
    let input = SurveyInput::from_args(&args.survey, order)?;

    tracing::info!(
        basis_order = order.get(),
        materials = input.names.len(),
        "deriving mesh parameters"
    );

    let params = ParameterDeriver::new().derive(&input.survey, &input.domain)?;

    match args.format {
        ReportFormat::Json => print_json(&input, &params),
        ReportFormat::Table => {
            print_report(&input, &params);
            Ok(())
        }
    }
}

fn material_rows(input: &SurveyInput, params: &DerivedParameters) -> Vec<MaterialRow> {
    input
        .names
        .iter()
        .zip(input.survey.conductivities())
        .zip(&params.skin_depths)
        .map(|((name, &conductivity), &skin_depth)| MaterialRow {
            name: name.clone(),
            conductivity,
            skin_depth,
        })
        .collect()
}

fn print_json(input: &SurveyInput, params: &DerivedParameters) -> Result<()> {
    let report = JsonReport {
        materials: material_rows(input, params),
        original_domain: &input.domain,
        params,
        refinement_radius: params.refinement_radius(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn print_report(input: &SurveyInput, params: &DerivedParameters) {
    output::print_header(&format!(
        "Mesh Parameters (f = {} Hz, p = {})",
        params.frequency, params.basis_order
    ));

    println!("{}\n", Table::new(material_rows(input, params)));

    let rows = vec![
        ParameterRow {
            name: "Basis order of FEM (p)",
            value: params.basis_order.to_string(),
        },
        ParameterRow {
            name: "Minimum skin depth",
            value: format!("{} m", fmt_metres(&params.min_skin_depth())),
        },
        ParameterRow {
            name: "Global spacing (whole domain)",
            value: format!("{} m", params.global_spacing),
        },
        ParameterRow {
            name: "Local spacing (source, receivers)",
            value: format!("{} m", params.local_spacing),
        },
        ParameterRow {
            name: "Refinement radius (10 x local)",
            value: format!("{} m", params.refinement_radius()),
        },
    ];
    println!("{}\n", Table::new(rows));

    let rows: Vec<DomainRow> = input
        .domain
        .axes()
        .zip(params.expanded_domain.axes())
        .map(|((axis, original), (_, expanded))| DomainRow {
            axis: axis.to_string(),
            original: original.to_string(),
            expanded: expanded.to_string(),
        })
        .collect();
    println!("{}", Table::new(rows));

    output::print_separator();
    output::print_success(&format!(
        "dg = {} m, ds = {} m",
        params.global_spacing, params.local_spacing
    ));
}

fn fmt_metres(value: &f64) -> String {
    format!("{:.2}", value)
}
