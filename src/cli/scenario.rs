//! # 势垒场景参数
//!
//! 三个物理参数的命令行定义，各子命令通过 `#[command(flatten)]` 复用。
//! 取值范围与默认值对应原交互页面的滑块：
//! - 电子能量 0.1–10 eV，默认 1.0
//! - 势垒高度 0.5–10 eV，默认 2.0
//! - 势垒宽度 0.1–2 nm，默认 1.0
//!
//! ## 依赖关系
//! - 被 `cli/` 各子命令使用
//! - 使用 `models/scenario.rs`

use crate::error::Result;
use crate::models::BarrierScenario;

use clap::Args;

pub const ENERGY_BOUNDS: (f64, f64) = (0.1, 10.0);
pub const HEIGHT_BOUNDS: (f64, f64) = (0.5, 10.0);
pub const WIDTH_BOUNDS: (f64, f64) = (0.1, 2.0);

/// 势垒场景参数
#[derive(Args, Debug, Clone)]
pub struct ScenarioArgs {
    /// Electron energy in eV (0.1-10)
    #[arg(short, long, env = "QTUNNEL_ENERGY", default_value_t = 1.0, value_parser = parse_energy)]
    pub energy: f64,

    /// Barrier height in eV (0.5-10)
    #[arg(short = 'b', long, env = "QTUNNEL_BARRIER_HEIGHT", default_value_t = 2.0, value_parser = parse_height)]
    pub barrier_height: f64,

    /// Barrier width in nm (0.1-2)
    #[arg(short = 'w', long, env = "QTUNNEL_BARRIER_WIDTH", default_value_t = 1.0, value_parser = parse_width)]
    pub barrier_width: f64,
}

impl ScenarioArgs {
    pub fn to_scenario(&self) -> Result<BarrierScenario> {
        BarrierScenario::new(self.energy, self.barrier_height, self.barrier_width)
    }
}

fn parse_energy(input: &str) -> std::result::Result<f64, String> {
    parse_bounded(input, "electron energy", "eV", ENERGY_BOUNDS)
}

fn parse_height(input: &str) -> std::result::Result<f64, String> {
    parse_bounded(input, "barrier height", "eV", HEIGHT_BOUNDS)
}

fn parse_width(input: &str) -> std::result::Result<f64, String> {
    parse_bounded(input, "barrier width", "nm", WIDTH_BOUNDS)
}

/// 解析数值并检查范围
fn parse_bounded(
    input: &str,
    name: &str,
    unit: &str,
    (min, max): (f64, f64),
) -> std::result::Result<f64, String> {
    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| format!("Invalid {} '{}': not a number", name, input))?;

    if !(min..=max).contains(&value) {
        return Err(format!(
            "{} must be within {}-{} {}, got {}",
            name, min, max, unit, value
        ));
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bounded() {
        assert_eq!(parse_energy("1.5"), Ok(1.5));
        assert_eq!(parse_height("0.5"), Ok(0.5));
        assert_eq!(parse_width("2"), Ok(2.0));

        assert!(parse_energy("0").is_err());
        assert!(parse_height("0.4").is_err());
        assert!(parse_width("2.5").is_err());
        assert!(parse_width("wide").is_err());
        assert!(parse_energy("NaN").is_err());
    }
}
