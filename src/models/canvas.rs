//! Canvas viewport state

use serde::{Deserialize, Serialize};

/// Lower bound for the zoom factor
pub const ZOOM_MIN: f64 = 0.1;
/// Upper bound for the zoom factor
pub const ZOOM_MAX: f64 = 3.0;

/// Pan/zoom/grid parameters of the diagram canvas.
///
/// Consumed by the renderer; the engine only stores it and clamps the zoom.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasState {
    pub zoom: f64,
    pub pan_x: f64,
    pub pan_y: f64,
    pub show_grid: bool,
    pub grid_size: f64,
}

impl Default for CanvasState {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
            show_grid: true,
            grid_size: 20.0,
        }
    }
}
