//! # compare 子命令实现
//!
//! 对 p = 1..6 分别计算网格参数，便于权衡阶数与网格尺寸。
//!
//! ## 依赖关系
//! - 使用 `cli/survey.rs` 定义的 CompareArgs
//! - 使用 `csem_mesh::ParameterDeriver::derive_all_orders`

use crate::cli::survey::{CompareArgs, ReportFormat};
use crate::commands::survey::SurveyInput;
use crate::utils::output;
use csem_mesh::{BasisOrder, ParameterDeriver, Result};

use tabled::{Table, Tabled};

/// 比较结果行
#[derive(Debug, Clone, Tabled)]
struct OrderRow {
    #[tabled(rename = "p")]
    order: u8,
    #[tabled(rename = "dg (m)")]
    global_spacing: f64,
    #[tabled(rename = "ds (m)")]
    local_spacing: f64,
    #[tabled(rename = "x (m)")]
    x: String,
    #[tabled(rename = "y (m)")]
    y: String,
    #[tabled(rename = "z (m)")]
    z: String,
}

/// 执行 compare 命令
pub fn execute(args: CompareArgs) -> Result<()> {
    // 阶数在下面逐一替换
    let first = BasisOrder::new(BasisOrder::MIN as i64)?;
    let input = SurveyInput::from_args(&args.survey, first)?;

    let deriver = ParameterDeriver::new();
    let all = deriver.derive_all_orders(&input.survey, &input.domain)?;

    if args.format == ReportFormat::Json {
        println!("{}", serde_json::to_string_pretty(&all)?);
        return Ok(());
    }

    output::print_header(&format!(
        "Mesh Parameters by Basis Order (f = {} Hz)",
        input.survey.frequency()
    ));
    output::print_info(&format!(
        "Minimum skin depth: {:.2} m",
        all.first().map(|d| d.min_skin_depth()).unwrap_or_default()
    ));

    let rows: Vec<OrderRow> = all
        .iter()
        .map(|d| OrderRow {
            order: d.basis_order.get(),
            global_spacing: d.global_spacing,
            local_spacing: d.local_spacing,
            x: d.expanded_domain.x.to_string(),
            y: d.expanded_domain.y.to_string(),
            z: d.expanded_domain.z.to_string(),
        })
        .collect();

    println!("{}", Table::new(rows));
    Ok(())
}
