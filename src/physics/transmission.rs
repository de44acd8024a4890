//! # 矩形势垒透射系数
//!
//! 实现电子穿过一维矩形势垒的解析透射公式。
//!
//! ## 算法概述
//! 1. 将 eV / nm 输入换算为 SI 单位 (J, m)
//! 2. E < V0（隧穿区）：
//!    - 势垒内衰减波数 k  = sqrt(2 mₑ (V0 − E)) / ħ
//!    - 势垒外自由波数 k0 = sqrt(2 mₑ E) / ħ
//!    - T = 1 / (1 + k² / (4 k0²) · sinh²(k w))
//! 3. E ≥ V0：T = 1（经典极限近似，不计算 sin² 振荡项）
//!
//! ## 数值约定
//! 不做输入校验，非物理输入按 IEEE-754 传播：
//! - E = 0 时 k0 = 0，k²/0 = +∞，w > 0 时 T = 0，w = 0 时 T = NaN
//! - 负能量差使 sqrt 返回 NaN
//!
//! 输入校验由 `models::BarrierScenario::new` 和 CLI 参数边界负责。
//!
//! ## 依赖关系
//! - 被 `physics/sweep.rs`, `models/scenario.rs` 使用
//! - 使用 `physics/constants.rs`

use crate::physics::constants::{ev_to_joule, nm_to_meter, ELECTRON_MASS, HBAR};

use serde::{Deserialize, Serialize};

/// 电子相对势垒的能区
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Regime {
    /// E < V0，经典禁止，量子隧穿
    Tunneling,
    /// E ≥ V0，越过势垒
    AboveBarrier,
}

impl Regime {
    /// 由势垒高度和电子能量 (eV) 判定能区
    pub fn of(barrier_height_ev: f64, electron_energy_ev: f64) -> Self {
        if electron_energy_ev < barrier_height_ev {
            Regime::Tunneling
        } else {
            Regime::AboveBarrier
        }
    }
}

impl std::fmt::Display for Regime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Regime::Tunneling => write!(f, "tunneling (E < V0)"),
            Regime::AboveBarrier => write!(f, "above barrier (E >= V0)"),
        }
    }
}

/// 计算隧穿区的波数 (k, k0)，单位 m⁻¹
///
/// `k` 为势垒内的衰减波数，`k0` 为势垒外的自由波数。
/// 仅在 0 < E < V0 时两者均为正实数。
pub fn wavenumbers(barrier_height_ev: f64, electron_energy_ev: f64) -> (f64, f64) {
    let v0 = ev_to_joule(barrier_height_ev);
    let e = ev_to_joule(electron_energy_ev);

    let k = (2.0 * ELECTRON_MASS * (v0 - e)).sqrt() / HBAR;
    let k0 = (2.0 * ELECTRON_MASS * e).sqrt() / HBAR;

    (k, k0)
}

/// 计算透射系数 T
///
/// # 参数
/// * `barrier_height_ev` - 势垒高度 V0 (eV)
/// * `electron_energy_ev` - 电子能量 E (eV)
/// * `barrier_width_nm` - 势垒宽度 w (nm)
///
/// # 返回
/// 无量纲透射概率，物理输入下位于 [0, 1]
pub fn transmission(barrier_height_ev: f64, electron_energy_ev: f64, barrier_width_nm: f64) -> f64 {
    if electron_energy_ev < barrier_height_ev {
        let (k, k0) = wavenumbers(barrier_height_ev, electron_energy_ev);
        let width = nm_to_meter(barrier_width_nm);

        let sinh_kw = (k * width).sinh();
        1.0 / (1.0 + (k * k / (4.0 * k0 * k0)) * sinh_kw * sinh_kw)
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn assert_rel_eq(actual: f64, expected: f64, tol: f64) {
        let rel = ((actual - expected) / expected).abs();
        assert!(
            rel < tol,
            "actual = {:e}, expected = {:e}, rel = {:e}",
            actual,
            expected,
            rel
        );
    }

    #[test]
    fn test_moderate_tunneling() {
        // V0 = 2 eV, E = 1 eV, w = 1 nm
        let t = transmission(2.0, 1.0, 1.0);
        assert_rel_eq(t, 5.675_155_444_936_507e-4, 1e-9);
        assert!(t > 1e-4 && t < 1e-3);
    }

    #[test]
    fn test_energy_equal_to_height() {
        assert_eq!(transmission(1.0, 1.0, 1.0), 1.0);
    }

    #[test]
    fn test_deep_tunneling() {
        // V0 = 5 eV, E = 0.1 eV, w = 2 nm
        let t = transmission(5.0, 0.1, 2.0);
        assert!(t > 0.0);
        assert!(t < 1e-10);
        assert_rel_eq(t, 6.505_181_950_007_617e-21, 1e-8);
    }

    #[test]
    fn test_thin_barrier() {
        assert_rel_eq(transmission(2.0, 1.0, 0.1), 0.933_216_570_776_791, 1e-9);
    }

    #[test]
    fn test_zero_energy_propagates() {
        // k0 = 0 -> k²/(4k0²) = +∞ -> T = 0
        let t = transmission(2.0, 0.0, 1.0);
        assert_eq!(t, 0.0);

        // ∞ · sinh²(0) = NaN
        assert!(transmission(2.0, 0.0, 0.0).is_nan());
    }

    #[test]
    fn test_regime() {
        assert_eq!(Regime::of(2.0, 1.0), Regime::Tunneling);
        assert_eq!(Regime::of(1.0, 1.0), Regime::AboveBarrier);
        assert_eq!(Regime::of(1.0, 3.0), Regime::AboveBarrier);
    }

    proptest! {
        #[test]
        fn above_barrier_is_fully_transparent(
            height in 0.01f64..10.0,
            excess in 0.0f64..10.0,
            width in 0.001f64..5.0,
        ) {
            prop_assert_eq!(transmission(height, height + excess, width), 1.0);
        }

        #[test]
        fn tunneling_is_a_probability(
            energy in 0.05f64..10.0,
            deficit in 0.01f64..10.0,
            width in 0.05f64..2.0,
        ) {
            let t = transmission(energy + deficit, energy, width);
            prop_assert!(t > 0.0 && t < 1.0, "T = {}", t);
        }

        #[test]
        fn tunneling_decays_with_width(
            energy in 0.05f64..10.0,
            deficit in 0.01f64..10.0,
            width in 0.05f64..1.5,
            step in 0.01f64..0.5,
        ) {
            let height = energy + deficit;
            let thin = transmission(height, energy, width);
            let thick = transmission(height, energy, width + step);
            prop_assert!(thick < thin, "T({}) = {} !< T({}) = {}", width + step, thick, width, thin);
        }

        #[test]
        fn tunneling_decays_with_energy_deficit(
            energy in 0.05f64..10.0,
            deficit in 0.01f64..5.0,
            extra in 0.01f64..5.0,
            width in 0.05f64..2.0,
        ) {
            let shallow = transmission(energy + deficit, energy, width);
            let deep = transmission(energy + deficit + extra, energy, width);
            prop_assert!(deep < shallow);
        }

        #[test]
        fn vanishing_barrier_is_transparent(
            energy in 0.1f64..10.0,
            deficit in 0.01f64..10.0,
        ) {
            let t = transmission(energy + deficit, energy, 1e-6);
            prop_assert!((1.0 - t).abs() < 1e-6);
        }

        #[test]
        fn wavenumbers_are_positive_below_barrier(
            energy in 0.001f64..10.0,
            deficit in 0.001f64..10.0,
        ) {
            let (k, k0) = wavenumbers(energy + deficit, energy);
            prop_assert!(k > 0.0);
            prop_assert!(k0 > 0.0);
        }
    }
}
