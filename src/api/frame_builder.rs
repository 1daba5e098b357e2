use crate::core::{LinearScale, PlotArea, SampleWindow, Viewport, project_line_segments, slot_to_x};
use crate::error::ChartResult;
use crate::render::{LinePrimitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive};

use super::{ChartConfig, ChartKind};

const VALUE_AXIS_GUTTER_PX: f64 = 44.0;
const LABEL_AXIS_GUTTER_PX: f64 = 20.0;
const TITLE_PADDING_PX: f64 = 8.0;
const EDGE_PADDING_PX: f64 = 8.0;
const VALUE_TICK_COUNT: usize = 5;
const MAX_SAMPLE_LABELS: usize = 6;
const GRID_LINE_WIDTH_PX: f64 = 1.0;

/// Plot rectangle left after reserving room for title and axis labels.
#[must_use]
pub fn plot_area(config: &ChartConfig, viewport: Viewport) -> PlotArea {
    let full = PlotArea::full(viewport);
    if config.kind == ChartKind::Sparkline {
        return full;
    }

    let top = match config.title {
        Some(_) => config.font.title_size_px + TITLE_PADDING_PX * 2.0,
        None => EDGE_PADDING_PX,
    };
    let left = if config.axes.y_visible {
        VALUE_AXIS_GUTTER_PX
    } else {
        EDGE_PADDING_PX
    };
    let bottom = if config.axes.x_visible {
        LABEL_AXIS_GUTTER_PX
    } else {
        EDGE_PADDING_PX
    };
    full.inset(left, top, EDGE_PADDING_PX, bottom)
}

/// Value-axis domain: sample range widened by the bound hints, never flat.
pub fn value_scale(config: &ChartConfig, window: &SampleWindow) -> ChartResult<LinearScale> {
    let (min, max) = window.value_range().unwrap_or((0.0, 0.0));
    let (min, max) = config.bounds.apply(min, max);
    LinearScale::covering(min, max)
}

/// Materializes the scene for one redraw of `window` under `config`.
pub fn build_frame(
    config: &ChartConfig,
    window: &SampleWindow,
    viewport: Viewport,
) -> ChartResult<RenderFrame> {
    let mut frame = RenderFrame::new(viewport);
    let area = plot_area(config, viewport);
    let scale = value_scale(config, window)?;
    let slot_count = window.capacity();

    if config.axes.y_grid {
        for tick in scale.ticks(VALUE_TICK_COUNT) {
            let y = scale.map(tick, area.bottom, area.top)?;
            frame.push_line(LinePrimitive::new(
                area.left,
                y,
                area.right,
                y,
                GRID_LINE_WIDTH_PX,
                config.grid_color,
            ));
        }
    }
    if config.axes.x_grid {
        for index in 0..slot_count {
            let x = slot_to_x(index, slot_count, area)?;
            frame.push_line(LinePrimitive::new(
                x,
                area.top,
                x,
                area.bottom,
                GRID_LINE_WIDTH_PX,
                config.grid_color,
            ));
        }
    }

    for (series, style) in window.all_series().zip(config.series.iter().cycle()) {
        for segment in project_line_segments(series.iter(), scale, area)? {
            frame.push_line(LinePrimitive::new(
                segment.x1,
                segment.y1,
                segment.x2,
                segment.y2,
                style.line_width_px,
                style.line_color,
            ));
        }
        if config.point_radius_px > 0.0 {
            for (index, value) in series.iter().enumerate() {
                let x = slot_to_x(index, slot_count, area)?;
                let y = scale.map(*value, area.bottom, area.top)?;
                frame.push_rect(RectPrimitive::centered(
                    x,
                    y,
                    config.point_radius_px,
                    style.line_color,
                ));
            }
        }
    }

    if config.axes.y_visible {
        for tick in scale.ticks(VALUE_TICK_COUNT) {
            let y = scale.map(tick, area.bottom, area.top)?;
            frame.push_text(TextPrimitive::new(
                format_value_tick(tick),
                area.left - 4.0,
                y,
                config.font.size_px,
                config.font.color,
                TextHAlign::Right,
            ));
        }
    }
    if config.axes.x_visible {
        let y = area.bottom + config.font.size_px + 2.0;
        for index in sample_label_slots(window) {
            if let Some(label) = window.label_window().get(index) {
                frame.push_text(TextPrimitive::new(
                    label.clone(),
                    slot_to_x(index, slot_count, area)?,
                    y,
                    config.font.size_px,
                    config.font.color,
                    TextHAlign::Center,
                ));
            }
        }
    }
    if let Some(title) = config.title.as_deref().filter(|title| !title.is_empty()) {
        frame.push_text(TextPrimitive::new(
            title,
            f64::from(viewport.width) / 2.0,
            TITLE_PADDING_PX + config.font.title_size_px,
            config.font.title_size_px,
            config.font.color,
            TextHAlign::Center,
        ));
    }

    Ok(frame)
}

/// Slots whose labels get drawn: non-empty labels, thinned to at most
/// `MAX_SAMPLE_LABELS`, always keeping the newest one.
fn sample_label_slots(window: &SampleWindow) -> Vec<usize> {
    let filled: Vec<usize> = window
        .label_window()
        .iter()
        .enumerate()
        .filter(|(_, label)| !label.is_empty())
        .map(|(index, _)| index)
        .collect();
    if filled.len() <= MAX_SAMPLE_LABELS {
        return filled;
    }

    let stride = filled.len().div_ceil(MAX_SAMPLE_LABELS);
    filled.iter().rev().step_by(stride).rev().copied().collect()
}

fn format_value_tick(value: f64) -> String {
    let text = format!("{value:.2}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    match text {
        "-0" | "" => "0".to_owned(),
        other => other.to_owned(),
    }
}
