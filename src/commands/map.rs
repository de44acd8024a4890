//! # map 命令实现
//!
//! 计算 (势垒高度 × 势垒宽度) 二维透射图并输出图片或 CSV。
//!
//! ## 依赖关系
//! - 使用 `cli/map.rs` 定义的 MapArgs
//! - 使用 `physics/sweep.rs`, `physics/plot.rs`, `physics/export.rs`

use crate::cli::map::MapArgs;
use crate::cli::OutputFormat;
use crate::commands::{ensure_writable, guess_format_from_extension};
use crate::error::{Result, TunnelError};
use crate::physics::{self, sweep::parse_range, TransmissionMap};
use crate::utils::{output, progress};

/// 执行 map 命令
pub fn execute(args: MapArgs) -> Result<()> {
    output::print_header("2D Transmission Map");

    let scenario = args.scenario.to_scenario()?;
    output::print_info(&format!("Scenario: {}", scenario));

    let format = args
        .format
        .unwrap_or_else(|| guess_format_from_extension(&args.output));
    // Some(use_svg) 表示输出图片，None 表示 CSV
    let image = match format {
        OutputFormat::Png => Some(false),
        OutputFormat::Svg => Some(true),
        OutputFormat::Csv => None,
        OutputFormat::Xy => {
            return Err(TunnelError::UnsupportedFormat {
                format: format.to_string(),
                command: "map".to_string(),
            })
        }
    };

    let heights = parse_range(&args.height_range, args.points)?;
    let widths = parse_range(&args.width_range, args.points)?;
    ensure_writable(&args.output, args.overwrite)?;

    let map = TransmissionMap::compute(scenario.energy_ev, &heights.values(), &widths.values());
    let (rows, cols) = map.shape();
    output::print_info(&format!(
        "Grid: height {:.2}-{:.2} eV x width {:.2}-{:.2} nm ({} x {} points)",
        heights.start, heights.stop, widths.start, widths.stop, cols, rows
    ));

    let spinner = progress::create_spinner("Writing transmission map...");
    let result = match image {
        Some(use_svg) => physics::plot::generate_map_plot(
            &map,
            &scenario,
            &args.output,
            args.fig_width,
            args.fig_height,
            use_svg,
        ),
        None => physics::export::map_to_csv(&map, &args.output),
    };
    spinner.finish_and_clear();
    result?;

    if let (Some(min), Some(max)) = (map.min(), map.max()) {
        output::print_info(&format!("T range on grid: {:.4e} - {:.4e}", min, max));
    }
    output::print_transmission(scenario.transmission());
    output::print_success(&format!("Map saved to '{}'", args.output.display()));

    Ok(())
}
