//! # 势垒场景数据模型
//!
//! 一次透射计算所需的三个物理量：电子能量、势垒高度、势垒宽度。
//!
//! ## 依赖关系
//! - 被 `physics/sweep.rs` 和 `commands/` 使用
//! - 使用 `physics/transmission.rs`

use crate::error::{Result, TunnelError};
use crate::physics::transmission::{self, Regime};

use serde::{Deserialize, Serialize};

/// 矩形势垒场景
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarrierScenario {
    /// 电子能量 E (eV)
    pub energy_ev: f64,
    /// 势垒高度 V0 (eV)
    pub barrier_height_ev: f64,
    /// 势垒宽度 w (nm)
    pub barrier_width_nm: f64,
}

impl BarrierScenario {
    /// 创建场景，三个量都必须是有限正数
    pub fn new(energy_ev: f64, barrier_height_ev: f64, barrier_width_nm: f64) -> Result<Self> {
        check_positive("electron energy", energy_ev)?;
        check_positive("barrier height", barrier_height_ev)?;
        check_positive("barrier width", barrier_width_nm)?;

        Ok(Self {
            energy_ev,
            barrier_height_ev,
            barrier_width_nm,
        })
    }

    /// 透射系数
    pub fn transmission(&self) -> f64 {
        transmission::transmission(
            self.barrier_height_ev,
            self.energy_ev,
            self.barrier_width_nm,
        )
    }

    pub fn regime(&self) -> Regime {
        Regime::of(self.barrier_height_ev, self.energy_ev)
    }

    /// 隧穿区波数 (k, k0)，越过势垒时返回 None
    pub fn wavenumbers(&self) -> Option<(f64, f64)> {
        match self.regime() {
            Regime::Tunneling => Some(transmission::wavenumbers(
                self.barrier_height_ev,
                self.energy_ev,
            )),
            Regime::AboveBarrier => None,
        }
    }
}

impl std::fmt::Display for BarrierScenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "E = {:.2} eV, V0 = {:.2} eV, w = {:.2} nm",
            self.energy_ev, self.barrier_height_ev, self.barrier_width_nm
        )
    }
}

fn check_positive(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(TunnelError::InvalidArgument(format!(
            "{} must be a positive finite number, got {}",
            name, value
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_non_positive() {
        assert!(BarrierScenario::new(0.0, 2.0, 1.0).is_err());
        assert!(BarrierScenario::new(1.0, -2.0, 1.0).is_err());
        assert!(BarrierScenario::new(1.0, 2.0, f64::NAN).is_err());
        assert!(BarrierScenario::new(1.0, 2.0, f64::INFINITY).is_err());

        let err = BarrierScenario::new(1.0, 2.0, 0.0).unwrap_err();
        assert!(err.to_string().contains("barrier width"));
    }

    #[test]
    fn test_scenario_evaluation() {
        let s = BarrierScenario::new(1.0, 2.0, 1.0).unwrap();
        assert_eq!(s.regime(), Regime::Tunneling);
        assert_eq!(s.transmission(), transmission::transmission(2.0, 1.0, 1.0));

        let (k, k0) = s.wavenumbers().unwrap();
        assert!(k > 0.0 && k0 > 0.0);
        // V0 − E = E，两个波数相等
        assert!((k - k0).abs() / k < 1e-12);
    }

    #[test]
    fn test_above_barrier_scenario() {
        let s = BarrierScenario::new(3.0, 2.0, 1.0).unwrap();
        assert_eq!(s.regime(), Regime::AboveBarrier);
        assert_eq!(s.transmission(), 1.0);
        assert!(s.wavenumbers().is_none());
        assert_eq!(s.to_string(), "E = 3.00 eV, V0 = 2.00 eV, w = 1.00 nm");
    }
}
