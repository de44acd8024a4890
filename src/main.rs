//! # qtunnel - 电子隧穿可视化工具
//!
//! 计算电子穿过一维矩形势垒的透射系数，并生成透射图与参数变化曲线。
//!
//! ## 子命令
//! - `calc`      - 当前参数下的透射系数
//! - `map`       - 二维透射图（势垒高度 × 势垒宽度）
//! - `sweep`     - 透射系数随高度/宽度/能量的变化
//! - `visualize` - 完整报告
//! - `explain`   - 电子隧穿说明
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── physics/   (透射公式、扫描、绘图、导出)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod cli;
mod commands;
mod error;
mod models;
mod physics;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
