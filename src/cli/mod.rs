//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `calc`: 计算当前参数下的透射系数
//! - `map`: 二维透射图（势垒高度 × 势垒宽度）
//! - `sweep`: 三个一维参数变化曲线
//! - `visualize`: 完整报告（两张图 + 当前透射系数 + 说明）
//! - `explain`: 打印电子隧穿说明
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: scenario, calc, map, sweep, visualize

pub mod calc;
pub mod map;
pub mod scenario;
pub mod sweep;
pub mod visualize;

use clap::{Parser, Subcommand, ValueEnum};

/// qtunnel - 电子隧穿可视化工具
#[derive(Parser)]
#[command(name = "qtunnel")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(
    about = "Electron tunneling through a rectangular potential barrier",
    long_about = None
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Print the transmission coefficient for one barrier scenario
    Calc(calc::CalcArgs),

    /// Render the 2D transmission map over barrier height and width
    Map(map::MapArgs),

    /// Render transmission vs. height, width and energy
    Sweep(sweep::SweepArgs),

    /// Write both figures and print a full report
    Visualize(visualize::VisualizeArgs),

    /// Explain electron tunneling and its applications
    Explain,
}

/// 输出格式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    /// PNG image
    Png,
    /// SVG vector image
    Svg,
    /// CSV data file
    Csv,
    /// XY data file (tab separated, '#' comments)
    Xy,
}

impl OutputFormat {
    /// 文件扩展名
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Svg => "svg",
            OutputFormat::Csv => "csv",
            OutputFormat::Xy => "xy",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// 图像格式（visualize 只输出图片）
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ImageFormat {
    /// PNG image
    Png,
    /// SVG vector image
    Svg,
}

impl ImageFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Svg => "svg",
        }
    }
}
