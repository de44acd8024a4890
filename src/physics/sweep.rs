//! # 参数扫描
//!
//! 在固定网格上批量调用透射公式。
//!
//! ## 功能
//! - `TransmissionMap`: (势垒高度 × 势垒宽度) 二维透射图，电子能量固定
//! - `Sweep`: 单参数一维扫描，其余两个参数取当前场景值
//! - `SweepConfig`: 默认扫描范围（各 100 点）
//!
//! ## 网格约定
//! `values[i][j] = transmission(heights[j], energy, widths[i])`，
//! 行对应宽度 (y 轴)，列对应高度 (x 轴)，与 `physics/plot.rs` 的坐标轴一致。
//!
//! ## 依赖关系
//! - 被 `commands/` 和 `physics/plot.rs`, `physics/export.rs` 使用
//! - 使用 `physics/transmission.rs`, `models/scenario.rs`

use crate::error::{Result, TunnelError};
use crate::models::BarrierScenario;
use crate::physics::transmission::transmission;

use serde::{Deserialize, Serialize};

/// 默认网格点数
pub const DEFAULT_POINTS: usize = 100;

/// 生成 [start, stop] 上 n 个等间距点（包含两端）
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { stop } else { start + i as f64 * step })
                .collect()
        }
    }
}

/// 扫描区间
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepRange {
    pub start: f64,
    pub stop: f64,
    pub points: usize,
}

impl SweepRange {
    pub fn new(start: f64, stop: f64, points: usize) -> Self {
        Self {
            start,
            stop,
            points,
        }
    }

    /// 网格点
    pub fn values(&self) -> Vec<f64> {
        linspace(self.start, self.stop, self.points)
    }
}

/// 解析区间字符串 (e.g., "0.5-10")
///
/// 两端必须为正数且 start < stop。
pub fn parse_range(range: &str, points: usize) -> Result<SweepRange> {
    let parts: Vec<&str> = range.split('-').collect();
    if parts.len() != 2 {
        return Err(TunnelError::InvalidRange(range.to_string()));
    }

    let start: f64 = parts[0]
        .trim()
        .parse()
        .map_err(|_| TunnelError::InvalidRange(range.to_string()))?;
    let stop: f64 = parts[1]
        .trim()
        .parse()
        .map_err(|_| TunnelError::InvalidRange(range.to_string()))?;

    if start.is_nan() || start <= 0.0 || stop <= start || !stop.is_finite() {
        return Err(TunnelError::InvalidRange(format!(
            "{} (must be 0 < min < max)",
            range
        )));
    }

    if points < 2 {
        return Err(TunnelError::InvalidArgument(format!(
            "grid needs at least 2 points, got {}",
            points
        )));
    }

    Ok(SweepRange::new(start, stop, points))
}

/// 扫描范围配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepConfig {
    /// 二维图的势垒高度轴 (eV)
    pub map_height: SweepRange,
    /// 二维图的势垒宽度轴 (nm)
    pub map_width: SweepRange,
    /// 一维扫描：势垒高度 (eV)
    pub height: SweepRange,
    /// 一维扫描：势垒宽度 (nm)
    pub width: SweepRange,
    /// 一维扫描：电子能量 (eV)
    pub energy: SweepRange,
}

impl Default for SweepConfig {
    fn default() -> Self {
        SweepConfig {
            map_height: SweepRange::new(0.5, 10.0, DEFAULT_POINTS),
            map_width: SweepRange::new(0.1, 2.0, DEFAULT_POINTS),
            height: SweepRange::new(0.1, 10.0, DEFAULT_POINTS),
            width: SweepRange::new(0.1, 2.0, DEFAULT_POINTS),
            energy: SweepRange::new(0.1, 10.0, DEFAULT_POINTS),
        }
    }
}

impl SweepConfig {
    /// 对应参数的一维扫描范围
    pub fn range_for(&self, parameter: SweepParameter) -> SweepRange {
        match parameter {
            SweepParameter::Height => self.height,
            SweepParameter::Width => self.width,
            SweepParameter::Energy => self.energy,
        }
    }
}

// ─────────────────────────────────────────────────────────────
// 二维透射图
// ─────────────────────────────────────────────────────────────

/// 二维透射图
#[derive(Debug, Clone)]
pub struct TransmissionMap {
    /// 固定的电子能量 (eV)
    pub energy_ev: f64,
    /// 列坐标：势垒高度 (eV)
    pub heights: Vec<f64>,
    /// 行坐标：势垒宽度 (nm)
    pub widths: Vec<f64>,
    /// 透射系数，`values[width_idx][height_idx]`
    pub values: Vec<Vec<f64>>,
}

impl TransmissionMap {
    /// 在高度 × 宽度的外积网格上逐点计算
    pub fn compute(energy_ev: f64, heights: &[f64], widths: &[f64]) -> Self {
        let values = widths
            .iter()
            .map(|&w| {
                heights
                    .iter()
                    .map(|&v0| transmission(v0, energy_ev, w))
                    .collect()
            })
            .collect();

        Self {
            energy_ev,
            heights: heights.to_vec(),
            widths: widths.to_vec(),
            values,
        }
    }

    /// 使用配置中的默认网格
    pub fn from_config(energy_ev: f64, config: &SweepConfig) -> Self {
        Self::compute(
            energy_ev,
            &config.map_height.values(),
            &config.map_width.values(),
        )
    }

    /// (行数, 列数) = (宽度点数, 高度点数)
    pub fn shape(&self) -> (usize, usize) {
        (self.widths.len(), self.heights.len())
    }

    /// 有限值中的最小值
    pub fn min(&self) -> Option<f64> {
        self.finite_values().reduce(f64::min)
    }

    /// 有限值中的最大值
    pub fn max(&self) -> Option<f64> {
        self.finite_values().reduce(f64::max)
    }

    /// 按 (height, width, T) 展开
    pub fn iter_points(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.widths.iter().enumerate().flat_map(move |(i, &w)| {
            self.heights
                .iter()
                .enumerate()
                .map(move |(j, &v0)| (v0, w, self.values[i][j]))
        })
    }

    fn finite_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.values
            .iter()
            .flat_map(|row| row.iter().copied())
            .filter(|t| t.is_finite())
    }
}

// ─────────────────────────────────────────────────────────────
// 一维扫描
// ─────────────────────────────────────────────────────────────

/// 被扫描的参数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SweepParameter {
    /// 势垒高度 (eV)
    Height,
    /// 势垒宽度 (nm)
    Width,
    /// 电子能量 (eV)
    Energy,
}

impl SweepParameter {
    pub const ALL: [SweepParameter; 3] = [
        SweepParameter::Height,
        SweepParameter::Width,
        SweepParameter::Energy,
    ];

    /// 坐标轴标签
    pub fn axis_label(&self) -> &'static str {
        match self {
            SweepParameter::Height => "Barrier height (eV)",
            SweepParameter::Width => "Barrier width (nm)",
            SweepParameter::Energy => "Electron energy (eV)",
        }
    }

    /// 面板标题
    pub fn title(&self) -> &'static str {
        match self {
            SweepParameter::Height => "T vs barrier height (width fixed)",
            SweepParameter::Width => "T vs barrier width (height fixed)",
            SweepParameter::Energy => "T vs electron energy (width & height fixed)",
        }
    }

    /// 文件名/CSV 列名用的短名称
    pub fn key(&self) -> &'static str {
        match self {
            SweepParameter::Height => "height_eV",
            SweepParameter::Width => "width_nm",
            SweepParameter::Energy => "energy_eV",
        }
    }

    /// 场景中该参数的当前值
    pub fn value_in(&self, scenario: &BarrierScenario) -> f64 {
        match self {
            SweepParameter::Height => scenario.barrier_height_ev,
            SweepParameter::Width => scenario.barrier_width_nm,
            SweepParameter::Energy => scenario.energy_ev,
        }
    }
}

impl std::fmt::Display for SweepParameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SweepParameter::Height => write!(f, "barrier height"),
            SweepParameter::Width => write!(f, "barrier width"),
            SweepParameter::Energy => write!(f, "electron energy"),
        }
    }
}

/// 一维扫描结果
#[derive(Debug, Clone)]
pub struct Sweep {
    pub parameter: SweepParameter,
    /// 扫描坐标
    pub xs: Vec<f64>,
    /// 透射系数
    pub ts: Vec<f64>,
    /// 场景中该参数的当前值（图中竖线位置）
    pub marker: f64,
}

impl Sweep {
    /// 只改变 `parameter`，其余参数取 `scenario` 的值
    pub fn compute(
        parameter: SweepParameter,
        range: &SweepRange,
        scenario: &BarrierScenario,
    ) -> Self {
        let xs = range.values();
        let ts = xs
            .iter()
            .map(|&x| match parameter {
                SweepParameter::Height => {
                    transmission(x, scenario.energy_ev, scenario.barrier_width_nm)
                }
                SweepParameter::Width => {
                    transmission(scenario.barrier_height_ev, scenario.energy_ev, x)
                }
                SweepParameter::Energy => {
                    transmission(scenario.barrier_height_ev, x, scenario.barrier_width_nm)
                }
            })
            .collect();

        Self {
            parameter,
            xs,
            ts,
            marker: parameter.value_in(scenario),
        }
    }

    /// 三个参数各扫描一次
    pub fn all(scenario: &BarrierScenario, config: &SweepConfig) -> Vec<Sweep> {
        SweepParameter::ALL
            .iter()
            .map(|&p| Sweep::compute(p, &config.range_for(p), scenario))
            .collect()
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs.iter().copied().zip(self.ts.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> BarrierScenario {
        BarrierScenario::new(1.0, 2.0, 1.0).unwrap()
    }

    #[test]
    fn test_linspace() {
        let xs = linspace(0.5, 10.0, 100);
        assert_eq!(xs.len(), 100);
        assert_eq!(xs[0], 0.5);
        assert_eq!(xs[99], 10.0);
        assert!((xs[1] - xs[0] - 9.5 / 99.0).abs() < 1e-12);

        assert_eq!(linspace(1.0, 2.0, 1), vec![1.0]);
        assert!(linspace(1.0, 2.0, 0).is_empty());
    }

    #[test]
    fn test_parse_range() {
        let r = parse_range("0.5-10", 50).unwrap();
        assert_eq!(r, SweepRange::new(0.5, 10.0, 50));

        assert!(parse_range("10-0.5", 50).is_err());
        assert!(parse_range("0-1", 50).is_err());
        assert!(parse_range("abc", 50).is_err());
        assert!(parse_range("1-2-3", 50).is_err());
        assert!(parse_range("0.1-2", 1).is_err());
    }

    #[test]
    fn test_map_shape_and_pointwise() {
        let config = SweepConfig::default();
        let map = TransmissionMap::from_config(1.0, &config);
        assert_eq!(map.shape(), (100, 100));

        for (i, &w) in map.widths.iter().enumerate() {
            for (j, &v0) in map.heights.iter().enumerate() {
                assert_eq!(map.values[i][j], transmission(v0, 1.0, w));
            }
        }
    }

    #[test]
    fn test_map_orientation() {
        let heights = [0.5, 2.0, 4.0];
        let widths = [0.1, 1.0];
        let map = TransmissionMap::compute(1.0, &heights, &widths);
        assert_eq!(map.shape(), (2, 3));

        // 第 0 列高度 0.5 < E，完全透射
        assert_eq!(map.values[0][0], 1.0);
        assert_eq!(map.values[1][0], 1.0);
        // 同一列，宽度越大透射越小
        assert!(map.values[1][2] < map.values[0][2]);

        assert_eq!(map.max(), Some(1.0));
        assert_eq!(map.min(), Some(map.values[1][2]));
        assert_eq!(map.iter_points().count(), 6);
    }

    #[test]
    fn test_sweeps_hold_other_parameters() {
        let s = scenario();
        let config = SweepConfig::default();
        let sweeps = Sweep::all(&s, &config);
        assert_eq!(sweeps.len(), 3);

        for sweep in &sweeps {
            assert_eq!(sweep.xs.len(), 100);
            assert_eq!(sweep.ts.len(), 100);
            assert_eq!(sweep.marker, sweep.parameter.value_in(&s));
        }

        let width = &sweeps[1];
        assert_eq!(width.parameter, SweepParameter::Width);
        for (x, t) in width.points() {
            assert_eq!(t, transmission(2.0, 1.0, x));
        }

        // 能量扫描越过势垒后 T = 1
        let energy = &sweeps[2];
        assert_eq!(*energy.ts.last().unwrap(), 1.0);
    }
}
