//! # visualize 子命令 CLI 定义
//!
//! 对应原交互页面：两张图 + 当前透射系数 + 说明文字。
//! 扫描范围固定为默认值。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/visualize.rs`

use crate::cli::scenario::ScenarioArgs;
use crate::cli::ImageFormat;

use clap::Args;
use std::path::PathBuf;

/// visualize 子命令参数
#[derive(Args, Debug)]
pub struct VisualizeArgs {
    #[command(flatten)]
    pub scenario: ScenarioArgs,

    /// Directory for the generated figures
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Image format
    #[arg(short, long, value_enum, default_value = "png")]
    pub format: ImageFormat,

    /// Skip the explanatory text
    #[arg(long, default_value_t = false)]
    pub no_explain: bool,

    /// Overwrite existing output files
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,
}
