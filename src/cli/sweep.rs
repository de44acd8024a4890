//! # sweep 子命令 CLI 定义
//!
//! 三个一维扫描：分别改变势垒高度、势垒宽度、电子能量，其余参数保持当前值。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/sweep.rs`

use crate::cli::scenario::ScenarioArgs;
use crate::cli::OutputFormat;

use clap::Args;
use std::path::PathBuf;

/// sweep 子命令参数
#[derive(Args, Debug)]
pub struct SweepArgs {
    #[command(flatten)]
    pub scenario: ScenarioArgs,

    /// Output file path
    #[arg(short, long, default_value = "transmission_variations.png")]
    pub output: PathBuf,

    /// Output format (auto-detected from extension if not specified)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Barrier height sweep in eV
    #[arg(long, default_value = "0.1-10")]
    pub height_range: String,

    /// Barrier width sweep in nm
    #[arg(long, default_value = "0.1-2")]
    pub width_range: String,

    /// Electron energy sweep in eV
    #[arg(long, default_value = "0.1-10")]
    pub energy_range: String,

    /// Number of points per sweep
    #[arg(short = 'n', long, default_value_t = 100)]
    pub points: usize,

    /// Figure width in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 1500)]
    pub fig_width: u32,

    /// Figure height in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 500)]
    pub fig_height: u32,

    /// Overwrite existing output files
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,
}
