//! # 透射数据导出
//!
//! 导出二维透射图和一维扫描数据。
//!
//! ## 支持格式
//! - CSV: 二维图按 (height, width, T) 长表展开；一维扫描按 (parameter, value, T)
//! - XY: 每个扫描一个数据块，`#` 开头的注释行 + 制表符分隔的两列
//!
//! ## 依赖关系
//! - 被 `commands/map.rs`, `commands/sweep.rs` 调用
//! - 使用 `physics/sweep.rs` 的 TransmissionMap, Sweep 结构
//! - 使用 `csv` + `serde` 写入 CSV 文件

use crate::error::{Result, TunnelError};
use crate::models::BarrierScenario;
use crate::physics::{Sweep, TransmissionMap};

use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(Serialize)]
struct MapRow {
    #[serde(rename = "height_eV")]
    height_ev: f64,
    width_nm: f64,
    #[serde(rename = "energy_eV")]
    energy_ev: f64,
    transmission: f64,
}

#[derive(Serialize)]
struct SweepRow<'a> {
    parameter: &'a str,
    value: f64,
    transmission: f64,
}

/// 导出二维透射图为 CSV
pub fn map_to_csv(map: &TransmissionMap, output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    for (height_ev, width_nm, transmission) in map.iter_points() {
        wtr.serialize(MapRow {
            height_ev,
            width_nm,
            energy_ev: map.energy_ev,
            transmission,
        })?;
    }

    wtr.flush().map_err(|e| TunnelError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// 导出一维扫描为 CSV
pub fn sweeps_to_csv(sweeps: &[Sweep], output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    for sweep in sweeps {
        for (value, transmission) in sweep.points() {
            wtr.serialize(SweepRow {
                parameter: sweep.parameter.key(),
                value,
                transmission,
            })?;
        }
    }

    wtr.flush().map_err(|e| TunnelError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// 导出一维扫描为 XY 格式
pub fn sweeps_to_xy(
    sweeps: &[Sweep],
    scenario: &BarrierScenario,
    output_path: &Path,
) -> Result<()> {
    let write_err = |e: std::io::Error| TunnelError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    };

    let file = File::create(output_path).map_err(write_err)?;
    let mut out = BufWriter::new(file);

    writeln!(out, "# Transmission sweeps: {}", scenario).map_err(write_err)?;
    writeln!(out, "#").map_err(write_err)?;

    for sweep in sweeps {
        writeln!(out, "# Sweep: {} (selected = {:.4})", sweep.parameter, sweep.marker)
            .map_err(write_err)?;
        writeln!(out, "# Columns: {}, transmission", sweep.parameter.key()).map_err(write_err)?;
        for (x, t) in sweep.points() {
            writeln!(out, "{:.6}\t{:.6e}", x, t).map_err(write_err)?;
        }
        writeln!(out).map_err(write_err)?;
    }

    out.flush().map_err(write_err)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::{SweepConfig, SweepParameter, SweepRange};

    use std::fs;

    #[test]
    fn test_map_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("map.csv");

        let map = TransmissionMap::compute(1.0, &[0.5, 2.0], &[0.1, 1.0, 2.0]);
        map_to_csv(&map, &path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "height_eV,width_nm,energy_eV,transmission");
        assert_eq!(lines.len(), 1 + 6);
        assert_eq!(lines[1], "0.5,0.1,1.0,1.0");

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        for record in rdr.records() {
            let record = record.unwrap();
            let height: f64 = record[0].parse().unwrap();
            let width: f64 = record[1].parse().unwrap();
            let t: f64 = record[3].parse().unwrap();
            assert_eq!(t, crate::physics::transmission(height, 1.0, width));
        }
    }

    #[test]
    fn test_sweeps_csv_and_xy() {
        let dir = tempfile::tempdir().unwrap();
        let scenario = BarrierScenario::new(1.0, 2.0, 1.0).unwrap();
        let config = SweepConfig {
            height: SweepRange::new(0.1, 10.0, 5),
            width: SweepRange::new(0.1, 2.0, 5),
            energy: SweepRange::new(0.1, 10.0, 5),
            ..SweepConfig::default()
        };
        let sweeps = Sweep::all(&scenario, &config);

        let csv_path = dir.path().join("sweeps.csv");
        sweeps_to_csv(&sweeps, &csv_path).unwrap();
        let text = fs::read_to_string(&csv_path).unwrap();
        assert_eq!(text.lines().count(), 1 + 15);
        assert!(text.starts_with("parameter,value,transmission"));
        assert_eq!(
            text.lines().filter(|l| l.starts_with(SweepParameter::Width.key())).count(),
            5
        );

        let xy_path = dir.path().join("sweeps.xy");
        sweeps_to_xy(&sweeps, &scenario, &xy_path).unwrap();
        let text = fs::read_to_string(&xy_path).unwrap();
        assert!(text.starts_with("# Transmission sweeps: E = 1.00 eV"));
        let data_lines = text
            .lines()
            .filter(|l| !l.starts_with('#') && !l.is_empty())
            .count();
        assert_eq!(data_lines, 15);
    }
}
