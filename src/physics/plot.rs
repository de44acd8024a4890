//! # 透射图表生成
//!
//! 使用 `plotters` 库生成两类图表：
//! - 二维透射图：x = 势垒高度，y = 势垒宽度，颜色 = 透射概率（20 级分层 + 色标）
//! - 参数变化图：三个并排面板，分别对应高度、宽度、能量扫描，竖线标出当前值
//!
//! 支持 PNG 和 SVG 输出。
//!
//! ## 依赖关系
//! - 被 `commands/map.rs`, `commands/sweep.rs`, `commands/visualize.rs` 调用
//! - 使用 `physics/sweep.rs` 的 TransmissionMap, Sweep 结构
//! - 使用 `plotters` 渲染图表

use crate::error::{Result, TunnelError};
use crate::models::BarrierScenario;
use crate::physics::{Sweep, TransmissionMap};

use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

/// 图表字体
pub const FONT_FAMILY: &str = "sans-serif";

/// 色阶层数
const LEVELS: usize = 20;

/// 色标区域宽度（像素）
const COLORBAR_WIDTH: u32 = 150;

/// 参数变化图的 y 轴上限
const T_AXIS_MAX: f64 = 1.05;

/// 竖线虚线段数
const DASH_SEGMENTS: usize = 30;

/// viridis 色图锚点
const VIRIDIS: [(f64, (u8, u8, u8)); 5] = [
    (0.00, (68, 1, 84)),
    (0.25, (59, 82, 139)),
    (0.50, (33, 145, 140)),
    (0.75, (94, 201, 98)),
    (1.00, (253, 231, 37)),
];

fn plot_err<E: std::fmt::Debug>(e: E) -> TunnelError {
    TunnelError::PlotError(format!("{:?}", e))
}

/// 生成二维透射图
pub fn generate_map_plot(
    map: &TransmissionMap,
    scenario: &BarrierScenario,
    output_path: &Path,
    width: u32,
    height: u32,
    use_svg: bool,
) -> Result<()> {
    let title = format!("Electron tunneling probability ({})", scenario);
    let marker = (scenario.barrier_height_ev, scenario.barrier_width_nm);

    if use_svg {
        let root = SVGBackend::new(output_path, (width, height)).into_drawing_area();
        draw_map_chart(&root, map, &title, marker)?;
        root.present().map_err(plot_err)?;
    } else {
        let root = BitMapBackend::new(output_path, (width, height)).into_drawing_area();
        draw_map_chart(&root, map, &title, marker)?;
        root.present().map_err(plot_err)?;
    }
    Ok(())
}

/// 生成参数变化图（三个面板）
pub fn generate_sweep_plot(
    sweeps: &[Sweep],
    output_path: &Path,
    width: u32,
    height: u32,
    use_svg: bool,
) -> Result<()> {
    if use_svg {
        let root = SVGBackend::new(output_path, (width, height)).into_drawing_area();
        draw_sweep_panels(&root, sweeps)?;
        root.present().map_err(plot_err)?;
    } else {
        let root = BitMapBackend::new(output_path, (width, height)).into_drawing_area();
        draw_sweep_panels(&root, sweeps)?;
        root.present().map_err(plot_err)?;
    }
    Ok(())
}

/// 绘制二维透射图
fn draw_map_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    map: &TransmissionMap,
    title: &str,
    marker: (f64, f64),
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE).map_err(plot_err)?;

    if map.heights.len() < 2 || map.widths.len() < 2 {
        return Err(TunnelError::PlotError(
            "transmission map needs at least 2x2 points".to_string(),
        ));
    }

    let (t_min, t_max) = color_range(map);

    let (total_width, _) = root.dim_in_pixel();
    let (main_area, bar_area) =
        root.split_horizontally(total_width.saturating_sub(COLORBAR_WIDTH));

    let x_edges = cell_edges(&map.heights);
    let y_edges = cell_edges(&map.widths);
    let x_range = x_edges[0]..x_edges[x_edges.len() - 1];
    let y_range = y_edges[0]..y_edges[y_edges.len() - 1];

    let mut chart = ChartBuilder::on(&main_area)
        .caption(title, (FONT_FAMILY, 24).into_font())
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range.clone(), y_range.clone())
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Barrier height (eV)")
        .y_desc("Barrier width (nm)")
        .x_label_style((FONT_FAMILY, 16))
        .y_label_style((FONT_FAMILY, 16))
        .axis_desc_style((FONT_FAMILY, 18))
        .draw()
        .map_err(plot_err)?;

    // 填充网格单元
    let (xe, ye) = (&x_edges, &y_edges);
    let cells = map.values.iter().enumerate().flat_map(move |(i, row)| {
        row.iter().enumerate().map(move |(j, &t)| {
            Rectangle::new(
                [(xe[j], ye[i]), (xe[j + 1], ye[i + 1])],
                level_color(t, t_min, t_max).filled(),
            )
        })
    });
    chart.draw_series(cells).map_err(plot_err)?;

    // 标记当前选择的 (V0, w)
    if x_range.contains(&marker.0) && y_range.contains(&marker.1) {
        chart
            .draw_series(std::iter::once(Cross::new(
                marker,
                8,
                RED.stroke_width(2),
            )))
            .map_err(plot_err)?;
    }

    draw_colorbar(&bar_area, t_min, t_max)?;

    Ok(())
}

/// 绘制色标
fn draw_colorbar<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    t_min: f64,
    t_max: f64,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let mut chart = ChartBuilder::on(area)
        .margin_top(60)
        .margin_bottom(70)
        .margin_right(10)
        .y_label_area_size(90)
        .build_cartesian_2d(0.0..1.0, t_min..t_max)
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .disable_x_axis()
        .y_desc("Transmission probability")
        .y_label_style((FONT_FAMILY, 14))
        .axis_desc_style((FONT_FAMILY, 16))
        .draw()
        .map_err(plot_err)?;

    let step = (t_max - t_min) / LEVELS as f64;
    chart
        .draw_series((0..LEVELS).map(|level| {
            let lo = t_min + level as f64 * step;
            let hi = lo + step;
            Rectangle::new(
                [(0.0, lo), (1.0, hi)],
                level_color(0.5 * (lo + hi), t_min, t_max).filled(),
            )
        }))
        .map_err(plot_err)?;

    Ok(())
}

/// 并排绘制三个参数变化面板
fn draw_sweep_panels<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    sweeps: &[Sweep],
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE).map_err(plot_err)?;

    if sweeps.is_empty() {
        return Ok(());
    }

    let panels = root.split_evenly((1, sweeps.len()));
    for (panel, sweep) in panels.iter().zip(sweeps) {
        draw_sweep_chart(panel, sweep)?;
    }

    Ok(())
}

/// 绘制单个参数变化面板
fn draw_sweep_chart<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    sweep: &Sweep,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let (x_min, x_max) = match (sweep.xs.first(), sweep.xs.last()) {
        (Some(&lo), Some(&hi)) if hi > lo => (lo, hi),
        _ => {
            return Err(TunnelError::PlotError(format!(
                "{} sweep needs at least 2 points",
                sweep.parameter
            )))
        }
    };

    let mut chart = ChartBuilder::on(area)
        .caption(sweep.parameter.title(), (FONT_FAMILY, 18).into_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(55)
        .build_cartesian_2d(x_min..x_max, 0.0..T_AXIS_MAX)
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .x_desc(sweep.parameter.axis_label())
        .y_desc("Transmission coefficient")
        .x_label_style((FONT_FAMILY, 13))
        .y_label_style((FONT_FAMILY, 13))
        .axis_desc_style((FONT_FAMILY, 15))
        .draw()
        .map_err(plot_err)?;

    let line_color = RGBColor(0, 102, 204);
    chart
        .draw_series(LineSeries::new(
            sweep.points().filter(|(_, t)| t.is_finite()),
            line_color.stroke_width(2),
        ))
        .map_err(plot_err)?;

    // 当前值竖线（虚线）
    if (x_min..=x_max).contains(&sweep.marker) {
        let x = sweep.marker;
        let seg = T_AXIS_MAX / DASH_SEGMENTS as f64;
        chart
            .draw_series((0..DASH_SEGMENTS).step_by(2).map(|k| {
                let y0 = k as f64 * seg;
                PathElement::new(vec![(x, y0), (x, y0 + seg)], RED.mix(0.5).stroke_width(2))
            }))
            .map_err(plot_err)?;
    }

    Ok(())
}

/// 色标范围，退化时向两侧展开
fn color_range(map: &TransmissionMap) -> (f64, f64) {
    let lo = map.min().unwrap_or(0.0);
    let hi = map.max().unwrap_or(1.0);
    if hi - lo < 1e-12 {
        (lo - 0.5, hi + 0.5)
    } else {
        (lo, hi)
    }
}

/// 网格中心 -> 单元边界（两端截止在首尾中心）
fn cell_edges(centers: &[f64]) -> Vec<f64> {
    let n = centers.len();
    let mut edges = Vec::with_capacity(n + 1);
    edges.push(centers[0]);
    for pair in centers.windows(2) {
        edges.push(0.5 * (pair[0] + pair[1]));
    }
    edges.push(centers[n - 1]);
    edges
}

/// 按 `LEVELS` 分层后的颜色，NaN 显示为灰色
fn level_color(t: f64, t_min: f64, t_max: f64) -> RGBColor {
    if !t.is_finite() {
        return RGBColor(160, 160, 160);
    }

    let norm = ((t - t_min) / (t_max - t_min)).clamp(0.0, 1.0);
    let level = ((norm * LEVELS as f64).floor() as usize).min(LEVELS - 1);
    viridis((level as f64 + 0.5) / LEVELS as f64)
}

/// viridis 色图线性插值，`x` ∈ [0, 1]
fn viridis(x: f64) -> RGBColor {
    let x = x.clamp(0.0, 1.0);
    for pair in VIRIDIS.windows(2) {
        let (x0, c0) = pair[0];
        let (x1, c1) = pair[1];
        if x <= x1 {
            let f = (x - x0) / (x1 - x0);
            let lerp = |a: u8, b: u8| (a as f64 + f * (b as f64 - a as f64)).round() as u8;
            return RGBColor(lerp(c0.0, c1.0), lerp(c0.1, c1.1), lerp(c0.2, c1.2));
        }
    }
    let (_, last) = VIRIDIS[VIRIDIS.len() - 1];
    RGBColor(last.0, last.1, last.2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_edges() {
        let edges = cell_edges(&[1.0, 2.0, 4.0]);
        assert_eq!(edges, vec![1.0, 1.5, 3.0, 4.0]);
    }

    #[test]
    fn test_color_range_degenerate() {
        // E 高于所有势垒，整张图都是 1
        let map = TransmissionMap::compute(20.0, &[0.5, 1.0], &[0.1, 0.2]);
        assert_eq!(color_range(&map), (0.5, 1.5));

        let map = TransmissionMap::compute(1.0, &[0.5, 2.0], &[0.1, 1.0]);
        let (lo, hi) = color_range(&map);
        assert_eq!(hi, 1.0);
        assert!(lo < hi);
    }

    #[test]
    fn test_level_color_endpoints() {
        let RGBColor(r, g, b) = level_color(0.0, 0.0, 1.0);
        assert!(r < 80 && b > 80 && g < 60);
        let RGBColor(r, g, _) = level_color(1.0, 0.0, 1.0);
        assert!(r > 200 && g > 200);
        assert_eq!(level_color(f64::NAN, 0.0, 1.0), RGBColor(160, 160, 160));
    }
}
