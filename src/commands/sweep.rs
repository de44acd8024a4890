//! # sweep 命令实现
//!
//! 分别扫描势垒高度、势垒宽度、电子能量，输出三面板图或数据文件，
//! 并在终端打印各扫描的摘要表格。
//!
//! ## 依赖关系
//! - 使用 `cli/sweep.rs` 定义的 SweepArgs
//! - 使用 `physics/sweep.rs`, `physics/plot.rs`, `physics/export.rs`

use crate::cli::sweep::SweepArgs;
use crate::cli::OutputFormat;
use crate::commands::{ensure_writable, guess_format_from_extension};
use crate::error::Result;
use crate::physics::{self, sweep::parse_range, Sweep, SweepConfig};
use crate::utils::{output, progress};

use tabled::{Table, Tabled};

/// 扫描摘要行
#[derive(Tabled)]
struct SweepRow {
    #[tabled(rename = "Parameter")]
    parameter: String,
    #[tabled(rename = "Range")]
    range: String,
    #[tabled(rename = "Selected")]
    selected: String,
    #[tabled(rename = "T (min)")]
    t_min: String,
    #[tabled(rename = "T (max)")]
    t_max: String,
}

/// 执行 sweep 命令
pub fn execute(args: SweepArgs) -> Result<()> {
    output::print_header("Transmission vs. Barrier Parameters");

    let scenario = args.scenario.to_scenario()?;
    output::print_info(&format!("Scenario: {}", scenario));

    let config = SweepConfig {
        height: parse_range(&args.height_range, args.points)?,
        width: parse_range(&args.width_range, args.points)?,
        energy: parse_range(&args.energy_range, args.points)?,
        ..SweepConfig::default()
    };

    let format = args
        .format
        .unwrap_or_else(|| guess_format_from_extension(&args.output));

    ensure_writable(&args.output, args.overwrite)?;

    let sweeps = Sweep::all(&scenario, &config);

    let spinner = progress::create_spinner("Writing sweeps...");
    let result = match format {
        OutputFormat::Png | OutputFormat::Svg => physics::plot::generate_sweep_plot(
            &sweeps,
            &args.output,
            args.fig_width,
            args.fig_height,
            format == OutputFormat::Svg,
        ),
        OutputFormat::Csv => physics::export::sweeps_to_csv(&sweeps, &args.output),
        OutputFormat::Xy => physics::export::sweeps_to_xy(&sweeps, &scenario, &args.output),
    };
    spinner.finish_and_clear();
    result?;

    print_sweep_table(&sweeps);
    output::print_transmission(scenario.transmission());
    output::print_success(&format!("Sweeps saved to '{}'", args.output.display()));

    Ok(())
}

/// 打印扫描摘要表格
pub(crate) fn print_sweep_table(sweeps: &[Sweep]) {
    let rows: Vec<SweepRow> = sweeps.iter().map(summarize).collect();

    if !rows.is_empty() {
        println!("{}\n", Table::new(&rows));
    }
}

fn summarize(sweep: &Sweep) -> SweepRow {
    let finite = || sweep.ts.iter().copied().filter(|t| t.is_finite());
    let fmt = |t: Option<f64>| t.map(|t| format!("{:.4e}", t)).unwrap_or_default();

    SweepRow {
        parameter: sweep.parameter.to_string(),
        range: match (sweep.xs.first(), sweep.xs.last()) {
            (Some(lo), Some(hi)) => format!("{:.2} - {:.2}", lo, hi),
            _ => String::new(),
        },
        selected: format!("{:.2}", sweep.marker),
        t_min: fmt(finite().reduce(f64::min)),
        t_max: fmt(finite().reduce(f64::max)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BarrierScenario;

    #[test]
    fn test_summarize() {
        let scenario = BarrierScenario::new(1.0, 2.0, 1.0).unwrap();
        let sweeps = Sweep::all(&scenario, &SweepConfig::default());

        let energy = summarize(&sweeps[2]);
        assert_eq!(energy.parameter, "electron energy");
        assert_eq!(energy.range, "0.10 - 10.00");
        assert_eq!(energy.selected, "1.00");
        assert_eq!(energy.t_max, "1.0000e0");
    }
}
