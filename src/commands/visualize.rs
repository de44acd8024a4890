//! # visualize 命令实现
//!
//! 一次生成完整报告：
//! 1. 二维透射图 (`transmission_map.<ext>`)
//! 2. 三面板参数变化图 (`transmission_variations.<ext>`)
//! 3. 当前透射系数与扫描摘要
//! 4. 电子隧穿说明（可用 `--no-explain` 关闭）
//!
//! 扫描范围使用 `SweepConfig::default()`。
//!
//! ## 依赖关系
//! - 使用 `cli/visualize.rs` 定义的 VisualizeArgs
//! - 复用 `commands/sweep.rs` 的摘要表格和 `commands/explain.rs` 的说明
//! - 使用 `physics/` 计算与绘图

use crate::cli::visualize::VisualizeArgs;
use crate::cli::ImageFormat;
use crate::commands::calc::ABOVE_BARRIER_NOTE;
use crate::commands::{ensure_writable, explain, sweep::print_sweep_table};
use crate::error::{Result, TunnelError};
use crate::physics::{self, Regime, Sweep, SweepConfig, TransmissionMap};
use crate::utils::{output, progress};

use std::fs;

const MAP_STEM: &str = "transmission_map";
const VARIATIONS_STEM: &str = "transmission_variations";

/// 执行 visualize 命令
pub fn execute(args: VisualizeArgs) -> Result<()> {
    output::print_header("Electron Tunneling Visualization");

    let scenario = args.scenario.to_scenario()?;
    output::print_info(&format!("Scenario: {}", scenario));
    if scenario.regime() == Regime::AboveBarrier {
        output::print_warning(ABOVE_BARRIER_NOTE);
    }

    fs::create_dir_all(&args.output_dir).map_err(|e| TunnelError::FileWriteError {
        path: args.output_dir.display().to_string(),
        source: e,
    })?;

    let ext = args.format.extension();
    let use_svg = args.format == ImageFormat::Svg;
    let map_path = args.output_dir.join(format!("{}.{}", MAP_STEM, ext));
    let variations_path = args.output_dir.join(format!("{}.{}", VARIATIONS_STEM, ext));

    ensure_writable(&map_path, args.overwrite)?;
    ensure_writable(&variations_path, args.overwrite)?;

    let config = SweepConfig::default();

    // 二维透射图
    let spinner = progress::create_spinner("Rendering 2D transmission map...");
    let map = TransmissionMap::from_config(scenario.energy_ev, &config);
    let result = physics::plot::generate_map_plot(&map, &scenario, &map_path, 1000, 600, use_svg);
    spinner.finish_and_clear();
    result?;
    output::print_success(&format!("2D map saved to '{}'", map_path.display()));

    // 参数变化图
    let spinner = progress::create_spinner("Rendering parameter variations...");
    let sweeps = Sweep::all(&scenario, &config);
    let result = physics::plot::generate_sweep_plot(&sweeps, &variations_path, 1500, 500, use_svg);
    spinner.finish_and_clear();
    result?;
    output::print_success(&format!(
        "Variations saved to '{}'",
        variations_path.display()
    ));

    output::print_header("Transmission by Parameter");
    print_sweep_table(&sweeps);

    output::print_separator();
    output::print_transmission(scenario.transmission());
    output::print_separator();

    if !args.no_explain {
        explain::print_explanation();
    }

    output::print_done("Visualization complete");
    Ok(())
}
