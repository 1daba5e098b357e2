use crate::core::{LinearScale, PlotArea};
use crate::error::{ChartError, ChartResult};
use serde::{Deserialize, Serialize};

/// Projected line segment in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Maps slot `index` of a window holding `slot_count` samples to an X pixel.
///
/// The oldest slot sits on the left edge and the newest on the right edge of
/// the plot area. A single-slot window is centered.
pub fn slot_to_x(index: usize, slot_count: usize, area: PlotArea) -> ChartResult<f64> {
    if index >= slot_count {
        return Err(ChartError::InvalidData(format!(
            "slot index {index} out of range for {slot_count} slots"
        )));
    }
    if slot_count == 1 {
        return Ok(area.left + area.width() / 2.0);
    }
    let scale = LinearScale::new(0.0, (slot_count - 1) as f64)?;
    scale.map(index as f64, area.left, area.right)
}

/// Projects one series of window values into adjacent line segments.
///
/// X follows slot order; Y follows `value_scale`, with larger values drawn
/// higher up.
pub fn project_line_segments<'a>(
    values: impl ExactSizeIterator<Item = &'a f64>,
    value_scale: LinearScale,
    area: PlotArea,
) -> ChartResult<Vec<LineSegment>> {
    let slot_count = values.len();
    if slot_count < 2 {
        return Ok(Vec::new());
    }

    let mut mapped = Vec::with_capacity(slot_count);
    for (index, value) in values.enumerate() {
        let x = slot_to_x(index, slot_count, area)?;
        let y = value_scale.map(*value, area.bottom, area.top)?;
        mapped.push((x, y));
    }

    let mut segments = Vec::with_capacity(mapped.len() - 1);
    for pair in mapped.windows(2) {
        segments.push(LineSegment {
            x1: pair[0].0,
            y1: pair[0].1,
            x2: pair[1].0,
            y2: pair[1].1,
        });
    }

    Ok(segments)
}
