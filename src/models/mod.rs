//! # 数据模型模块
//!
//! 定义势垒场景数据模型。
//!
//! ## 依赖关系
//! - 被 `physics/` 和 `commands/` 使用
//! - 子模块: scenario

pub mod scenario;

pub use scenario::BarrierScenario;
