//! # 统一错误处理模块
//!
//! 定义 qtunnel 的所有错误类型，使用 `thiserror` 派生。
//!
//! 透射公式本身不产生错误（非物理输入以 NaN/Inf 传播），
//! 这里的错误只来自参数校验和结果输出。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// qtunnel 统一错误类型
#[derive(Error, Debug)]
pub enum TunnelError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Output file already exists: {path} (use --overwrite)")]
    FileExists { path: String },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid range format: {0}")]
    InvalidRange(String),

    #[error("Unsupported output format '{format}' for {command}")]
    UnsupportedFormat { format: String, command: String },

    // ─────────────────────────────────────────────────────────────
    // 输出错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Plotting failed: {0}")]
    PlotError(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, TunnelError>;
