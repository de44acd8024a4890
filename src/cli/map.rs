//! # map 子命令 CLI 定义
//!
//! 二维透射图：x 轴为势垒高度，y 轴为势垒宽度，电子能量固定。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/map.rs`

use crate::cli::scenario::ScenarioArgs;
use crate::cli::OutputFormat;

use clap::Args;
use std::path::PathBuf;

/// map 子命令参数
#[derive(Args, Debug)]
pub struct MapArgs {
    #[command(flatten)]
    pub scenario: ScenarioArgs,

    /// Output file path
    #[arg(short, long, default_value = "transmission_map.png")]
    pub output: PathBuf,

    /// Output format: png, svg or csv (auto-detected from extension if not specified)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Barrier height axis in eV (e.g., "0.5-10")
    #[arg(long, default_value = "0.5-10")]
    pub height_range: String,

    /// Barrier width axis in nm (e.g., "0.1-2")
    #[arg(long, default_value = "0.1-2")]
    pub width_range: String,

    /// Number of grid points per axis
    #[arg(short = 'n', long, default_value_t = 100)]
    pub points: usize,

    /// Figure width in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 1000)]
    pub fig_width: u32,

    /// Figure height in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 600)]
    pub fig_height: u32,

    /// Overwrite existing output files
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,
}
