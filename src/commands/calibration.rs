//! # calibration 子命令实现
//!
//! 打印默认 rg/rs 标定表。
//!
//! ## 依赖关系
//! - 使用 `csem_mesh::CalibrationTable`

use crate::utils::output;
use csem_mesh::{BasisOrder, CalibrationTable, Result};

use tabled::{Table, Tabled};

/// 标定表行
#[derive(Debug, Clone, Tabled)]
struct CalibrationRow {
    #[tabled(rename = "p")]
    order: u8,
    #[tabled(rename = "rg (points per skin depth)")]
    rg: f64,
    #[tabled(rename = "rs (local resolution)")]
    rs: f64,
}

/// 执行 calibration 命令
pub fn execute() -> Result<()> {
    let table = CalibrationTable::default();

    output::print_header("Calibration Table (2% error in EM responses)");

    let rows: Vec<CalibrationRow> = BasisOrder::all()
        .map(|p| CalibrationRow {
            order: p.get(),
            rg: table.global_divisor(p),
            rs: table.local_divisor(p),
        })
        .collect();

    println!("{}", Table::new(rows));
    output::print_info("dg = round(min skin depth / rg), ds = round(dg / rs)");
    Ok(())
}
