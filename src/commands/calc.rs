//! # calc 命令实现
//!
//! 打印当前场景的透射系数、能区和波数。
//!
//! ## 依赖关系
//! - 使用 `cli/calc.rs` 定义的参数
//! - 使用 `models/scenario.rs`
//! - 使用 `utils/output.rs`

use crate::cli::calc::CalcArgs;
use crate::error::Result;
use crate::models::BarrierScenario;
use crate::physics::constants::nm_to_meter;
use crate::physics::Regime;
use crate::utils::output;

use tabled::{Table, Tabled};

/// E ≥ V0 时的提示
pub(crate) const ABOVE_BARRIER_NOTE: &str =
    "E >= V0: T is taken as 1 (above-barrier reflection is not modelled)";

/// 参数表行
#[derive(Tabled)]
struct QuantityRow {
    #[tabled(rename = "Quantity")]
    name: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

/// 执行 calc 命令
pub fn execute(args: CalcArgs) -> Result<()> {
    output::print_header("Electron Tunneling: Transmission Coefficient");

    let scenario = args.scenario.to_scenario()?;
    let table = Table::new(scenario_rows(&scenario));
    println!("{}\n", table);

    if scenario.regime() == Regime::AboveBarrier {
        output::print_warning(ABOVE_BARRIER_NOTE);
    }

    output::print_transmission(scenario.transmission());
    Ok(())
}

fn scenario_rows(scenario: &BarrierScenario) -> Vec<QuantityRow> {
    let mut rows = vec![
        QuantityRow {
            name: "Electron energy E",
            value: format!("{:.3} eV", scenario.energy_ev),
        },
        QuantityRow {
            name: "Barrier height V0",
            value: format!("{:.3} eV", scenario.barrier_height_ev),
        },
        QuantityRow {
            name: "Barrier width w",
            value: format!("{:.3} nm", scenario.barrier_width_nm),
        },
        QuantityRow {
            name: "Regime",
            value: scenario.regime().to_string(),
        },
    ];

    if let Some((k, k0)) = scenario.wavenumbers() {
        rows.push(QuantityRow {
            name: "Decay wavenumber k",
            value: format!("{:.4e} 1/m", k),
        });
        rows.push(QuantityRow {
            name: "Free wavenumber k0",
            value: format!("{:.4e} 1/m", k0),
        });
        rows.push(QuantityRow {
            name: "k * w",
            value: format!("{:.4}", k * nm_to_meter(scenario.barrier_width_nm)),
        });
    }

    rows.push(QuantityRow {
        name: "Transmission T",
        value: format!("{:.4e}", scenario.transmission()),
    });

    rows
}
