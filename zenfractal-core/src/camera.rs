//! Screen ⇄ fractal-space mapping.
//!
//! The camera offset is the fractal-space point shown at screen pixel (0, 0);
//! zoom is pixels per fractal unit:
//!
//! ```text
//! world  = screen / zoom + offset
//! screen = (world - offset) * zoom
//! ```

use crate::{Complex, CoreError, Scalar};
use serde::{Deserialize, Serialize};

/// Zoom factor for one wheel step in.
pub const ZOOM_IN_STEP: f64 = 1.1;
/// Zoom factor for one wheel step out.
pub const ZOOM_OUT_STEP: f64 = 0.9;

/// Positive and normal. Subnormal zooms are excluded too: dividing a pixel
/// coordinate by one overflows to infinity.
#[inline]
fn is_valid_zoom(zoom: f64) -> bool {
    zoom.is_normal() && zoom > 0.0
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Camera<S> {
    pub offset: Complex<S>,
    pub zoom: f64,
}

impl<S: Scalar> Camera<S> {
    pub fn new(offset: Complex<S>, zoom: f64) -> Self {
        Self { offset, zoom }
    }

    /// Camera that shows `center` in the middle of a `viewport_size` canvas.
    pub fn centered(viewport_size: (u32, u32), center: Complex<S>, zoom: f64) -> Self {
        let half = Complex::from_f64_pair(
            f64::from(viewport_size.0) / 2.0 / zoom,
            f64::from(viewport_size.1) / 2.0 / zoom,
        );
        Self {
            offset: center - half,
            zoom,
        }
    }

    /// Reject zoom values the transform cannot divide by.
    pub fn validate(&self) -> Result<(), CoreError> {
        if is_valid_zoom(self.zoom) {
            Ok(())
        } else {
            Err(CoreError::InvalidZoom(self.zoom))
        }
    }

    #[inline]
    pub fn screen_to_world(&self, x: f64, y: f64) -> Complex<S> {
        Complex::from_f64_pair(x / self.zoom, y / self.zoom) + &self.offset
    }

    pub fn world_to_screen(&self, world: &Complex<S>) -> (f64, f64) {
        let (dx, dy) = (world - &self.offset).to_f64_pair();
        (dx * self.zoom, dy * self.zoom)
    }

    /// Drag the view by a screen-space delta (content follows the cursor).
    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.offset -= &Complex::from_f64_pair(dx / self.zoom, dy / self.zoom);
    }

    /// Multiply zoom by `factor`, keeping the fractal point under the screen
    /// position `(x, y)` fixed. Leaves the camera untouched on error.
    pub fn zoom_at(&mut self, x: f64, y: f64, factor: f64) -> Result<(), CoreError> {
        let zoom = self.zoom * factor;
        if !is_valid_zoom(zoom) {
            return Err(CoreError::InvalidZoom(zoom));
        }

        let before = self.screen_to_world(x, y);
        self.zoom = zoom;
        let after = self.screen_to_world(x, y);
        self.offset += &(before - after);
        Ok(())
    }
}
