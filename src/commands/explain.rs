//! # explain 命令实现
//!
//! 打印电子隧穿的简要说明和应用示例。
//!
//! ## 依赖关系
//! - 被 `commands/visualize.rs` 复用
//! - 使用 `utils/output.rs`

use crate::error::Result;
use crate::utils::output;

const WHAT_IS_TUNNELING: &str = "\
Electron tunneling is a quantum-mechanical effect in which an electron crosses
an energy barrier that classical mechanics says it cannot pass.

  - Energy (eV):          kinetic energy of the incident electron
  - Barrier height (eV):  height of the potential barrier to be crossed
  - Barrier width (nm):   thickness of the potential barrier

The transmission coefficient is the probability that the electron passes
through the barrier. Below the barrier top (E < V0) it is

    T = 1 / (1 + k^2 / (4 k0^2) * sinh^2(k w))

with k = sqrt(2 m (V0 - E)) / hbar and k0 = sqrt(2 m E) / hbar.
At or above the barrier top (E >= V0) this tool takes T = 1.";

const APPLICATIONS: &str = "\
  1. Scanning tunneling microscope (STM): imaging the atomic structure of surfaces
  2. Tunnel diode: high-speed electronic devices
  3. Flash memory: data storage
  4. Alpha decay: tunneling out of the atomic nucleus";

/// 执行 explain 命令
pub fn execute() -> Result<()> {
    print_explanation();
    Ok(())
}

/// 打印说明文字
pub fn print_explanation() {
    output::print_header("What Is Electron Tunneling?");
    println!("{}", WHAT_IS_TUNNELING);
    output::print_header("Applications");
    println!("{}", APPLICATIONS);
}
