//! # 物理常数
//!
//! CODATA 2018 推荐值（SI 单位），与 `scipy.constants` 一致。
//!
//! ## 依赖关系
//! - 被 `physics/transmission.rs` 使用
//! - 无外部模块依赖

use std::f64::consts::PI;

/// Planck 常数 h (J·s)
pub const PLANCK: f64 = 6.626_070_15e-34;

/// 约化 Planck 常数 ħ = h / 2π (J·s)
pub const HBAR: f64 = PLANCK / (2.0 * PI);

/// 电子静止质量 mₑ (kg)
pub const ELECTRON_MASS: f64 = 9.109_383_701_5e-31;

/// 元电荷 e (C)，亦即 1 eV 对应的焦耳数
pub const ELEMENTARY_CHARGE: f64 = 1.602_176_634e-19;

/// 1 nm 对应的米数
pub const NANOMETER: f64 = 1e-9;

/// eV -> J
#[inline]
pub fn ev_to_joule(ev: f64) -> f64 {
    ev * ELEMENTARY_CHARGE
}

/// nm -> m
#[inline]
pub fn nm_to_meter(nm: f64) -> f64 {
    nm * NANOMETER
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hbar_value() {
        // CODATA: ħ = 1.054571817e-34 J·s
        assert!((HBAR - 1.054_571_817e-34).abs() / HBAR < 1e-9);
    }

    #[test]
    fn test_unit_conversion() {
        assert_eq!(ev_to_joule(1.0), ELEMENTARY_CHARGE);
        assert!((nm_to_meter(2.0) - 2e-9).abs() < 1e-24);
    }
}
