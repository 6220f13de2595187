//! Canvas Chart Adapter
//!
//! Thin rendering layer over HTML5 Canvas. All series semantics live in the
//! mapper; this module only projects a [`ChartData`] bundle onto pixels.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::data::{ChartData, ChartKind};

const MARGIN_LEFT: f64 = 60.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 40.0;

const BACKGROUND: &str = "#ffffff";
const GRID_COLOR: &str = "#d1d5db";
const AXIS_TEXT_COLOR: &str = "#4b5563";

/// Map a click x-offset back to a label index, for tooltip lookups.
pub fn point_index_at(canvas_width: f64, label_count: usize, offset_x: f64) -> Option<usize> {
    if label_count == 0 {
        return None;
    }
    let chart_width = canvas_width - MARGIN_LEFT - MARGIN_RIGHT;
    let fraction = (offset_x - MARGIN_LEFT) / chart_width;
    if !(0.0..=1.0).contains(&fraction) {
        return None;
    }
    let index = (fraction * label_count as f64) as usize;
    Some(index.min(label_count - 1))
}

/// Draw the mapped bundle onto the canvas.
pub fn draw(canvas: &HtmlCanvasElement, data: &ChartData) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let chart_width = width - MARGIN_LEFT - MARGIN_RIGHT;
    let chart_height = height - MARGIN_TOP - MARGIN_BOTTOM;

    ctx.set_fill_style(&BACKGROUND.into());
    ctx.fill_rect(0.0, 0.0, width, height);

    let (y_min, y_max) = y_range(data);

    draw_grid(&ctx, data, width, chart_height, y_min, y_max);

    if data.is_empty() {
        ctx.set_fill_style(&AXIS_TEXT_COLOR.into());
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No data available", width / 2.0 - 60.0, height / 2.0);
        return;
    }

    match data.kind {
        ChartKind::Line => draw_lines(&ctx, data, chart_width, chart_height, y_min, y_max),
        ChartKind::Bar => draw_bars(&ctx, data, chart_width, chart_height, y_min, y_max),
    }

    draw_x_labels(&ctx, data, chart_width, height);
}

fn y_range(data: &ChartData) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for dataset in &data.datasets {
        for point in &dataset.points {
            min = min.min(*point);
            max = max.max(*point);
        }
    }
    if min > max {
        min = 0.0;
        max = 1.0;
    }

    // Pad, then widen to the suggested bounds when they reach further.
    let span = max - min;
    let pad = if span > 0.0 { span * 0.1 } else { 1.0 };
    min -= pad;
    max += pad;
    if let Some(s) = data.suggested_min {
        min = min.min(s);
    }
    if let Some(s) = data.suggested_max {
        max = max.max(s);
    }
    (min, max)
}

fn y_tick_label(data: &ChartData, value: f64) -> String {
    match data.kind {
        // Categorical flag axis.
        ChartKind::Bar => {
            if (value - 1.0).abs() < 0.25 {
                "Green flag".to_string()
            } else if (value + 1.0).abs() < 0.25 {
                "Red flag".to_string()
            } else {
                String::new()
            }
        }
        ChartKind::Line => format!("{:.1}", value),
    }
}

fn draw_grid(
    ctx: &CanvasRenderingContext2d,
    data: &ChartData,
    width: f64,
    chart_height: f64,
    y_min: f64,
    y_max: f64,
) {
    ctx.set_stroke_style(&GRID_COLOR.into());
    ctx.set_line_width(1.0);

    for i in 0..=5 {
        let y = MARGIN_TOP + (i as f64 / 5.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(MARGIN_LEFT, y);
        ctx.line_to(width - MARGIN_RIGHT, y);
        ctx.stroke();

        let value = y_max - (i as f64 / 5.0) * (y_max - y_min);
        ctx.set_fill_style(&AXIS_TEXT_COLOR.into());
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(&y_tick_label(data, value), 5.0, y + 4.0);
    }
}

fn x_position(index: usize, count: usize, chart_width: f64) -> f64 {
    if count <= 1 {
        MARGIN_LEFT + chart_width / 2.0
    } else {
        MARGIN_LEFT + (index as f64 / (count - 1) as f64) * chart_width
    }
}

fn y_position(value: f64, y_min: f64, y_max: f64, chart_height: f64) -> f64 {
    MARGIN_TOP + ((y_max - value) / (y_max - y_min)) * chart_height
}

fn set_dash(ctx: &CanvasRenderingContext2d, dashed: bool) {
    let segments = js_sys::Array::new();
    if dashed {
        segments.push(&JsValue::from_f64(10.0));
        segments.push(&JsValue::from_f64(6.0));
    }
    let _ = ctx.set_line_dash(&segments);
}

fn draw_lines(
    ctx: &CanvasRenderingContext2d,
    data: &ChartData,
    chart_width: f64,
    chart_height: f64,
    y_min: f64,
    y_max: f64,
) {
    let count = data.labels.len();

    for dataset in &data.datasets {
        if dataset.points.is_empty() {
            continue;
        }

        ctx.set_stroke_style(&dataset.color.into());
        ctx.set_line_width(2.0);
        set_dash(ctx, dataset.dashed);
        ctx.begin_path();

        for (i, point) in dataset.points.iter().enumerate() {
            let x = x_position(i, count, chart_width);
            let y = y_position(*point, y_min, y_max, chart_height);
            if i == 0 {
                ctx.move_to(x, y);
            } else {
                ctx.line_to(x, y);
            }
        }
        ctx.stroke();
        set_dash(ctx, false);

        if !dataset.dashed {
            ctx.set_fill_style(&dataset.color.into());
            for (i, point) in dataset.points.iter().enumerate() {
                let x = x_position(i, count, chart_width);
                let y = y_position(*point, y_min, y_max, chart_height);
                ctx.begin_path();
                let _ = ctx.arc(x, y, 3.0, 0.0, std::f64::consts::PI * 2.0);
                ctx.fill();
            }
        }
    }
}

fn draw_bars(
    ctx: &CanvasRenderingContext2d,
    data: &ChartData,
    chart_width: f64,
    chart_height: f64,
    y_min: f64,
    y_max: f64,
) {
    let count = data.labels.len();
    let slot = chart_width / count.max(1) as f64;
    let bar_width = slot * 0.9;
    let zero_y = y_position(0.0, y_min, y_max, chart_height);

    for dataset in &data.datasets {
        for (i, point) in dataset.points.iter().enumerate() {
            let color = dataset
                .point_colors
                .get(i)
                .copied()
                .unwrap_or(dataset.color);
            ctx.set_fill_style(&color.into());

            let x = MARGIN_LEFT + i as f64 * slot + (slot - bar_width) / 2.0;
            let y = y_position(*point, y_min, y_max, chart_height);
            let (top, height) = if y < zero_y {
                (y, zero_y - y)
            } else {
                (zero_y, y - zero_y)
            };
            // A neutral reading still gets a visible sliver at the zero line.
            let height = height.max(2.0);
            ctx.fill_rect(x, top, bar_width, height);
        }
    }
}

fn draw_x_labels(
    ctx: &CanvasRenderingContext2d,
    data: &ChartData,
    chart_width: f64,
    height: f64,
) {
    ctx.set_fill_style(&AXIS_TEXT_COLOR.into());
    ctx.set_font("12px sans-serif");

    let count = data.labels.len();
    if count == 0 {
        return;
    }
    let ticks = count.min(5);
    for t in 0..ticks {
        let index = if ticks == 1 {
            0
        } else {
            t * (count - 1) / (ticks - 1)
        };
        let x = x_position(index, count, chart_width);
        let _ = ctx.fill_text(&data.labels[index], x - 30.0, height - 10.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_index_at_maps_chart_area() {
        // 800px canvas: chart area spans 60..780.
        assert_eq!(point_index_at(800.0, 10, 60.0), Some(0));
        assert_eq!(point_index_at(800.0, 10, 779.0), Some(9));
        assert_eq!(point_index_at(800.0, 10, 420.0), Some(5));
        assert_eq!(point_index_at(800.0, 10, 10.0), None);
        assert_eq!(point_index_at(800.0, 10, 790.0), None);
        assert_eq!(point_index_at(800.0, 0, 400.0), None);
    }
}
