use serde::{Deserialize, Serialize};

/// Pixel size of a display surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Axis-aligned pixel rectangle inside a viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl PlotArea {
    #[must_use]
    pub fn full(viewport: Viewport) -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            right: f64::from(viewport.width),
            bottom: f64::from(viewport.height),
        }
    }

    /// Shrinks the area by the given gutters, clamping so it never inverts.
    #[must_use]
    pub fn inset(self, left: f64, top: f64, right: f64, bottom: f64) -> Self {
        let new_left = (self.left + left).min(self.right);
        let new_top = (self.top + top).min(self.bottom);
        Self {
            left: new_left,
            top: new_top,
            right: (self.right - right).max(new_left),
            bottom: (self.bottom - bottom).max(new_top),
        }
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.bottom - self.top
    }
}
