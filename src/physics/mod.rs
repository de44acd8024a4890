//! # 势垒隧穿物理模块
//!
//! 电子穿过矩形势垒的透射系数计算与可视化。
//!
//! ## 子模块
//! - `constants`: CODATA 物理常数
//! - `transmission`: 透射系数解析公式
//! - `sweep`: 二维透射图与一维参数扫描
//! - `plot`: 图表生成
//! - `export`: 数据导出
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `models/scenario.rs`

pub mod constants;
pub mod export;
pub mod plot;
pub mod sweep;
pub mod transmission;

pub use sweep::{Sweep, SweepConfig, SweepParameter, SweepRange, TransmissionMap};
pub use transmission::{transmission, wavenumbers, Regime};
