//! Per-frame input handed to the compute layer by a frontend.

use crate::config::{MAX_ITERATIONS_LIMIT, MAX_VIEWPORT_PIXELS};
use crate::{BuiltinFractal, Camera, CoreError, Scalar};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Which recurrence `z' = f(z, c)` to iterate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Recurrence {
    Builtin(BuiltinFractal),
    /// User-entered expression over `z` and `c`
    Custom(String),
}

impl Recurrence {
    /// Formula text for this recurrence in the expression grammar.
    pub fn expression(&self) -> &str {
        match self {
            Recurrence::Builtin(fractal) => fractal.expression(),
            Recurrence::Custom(source) => source,
        }
    }
}

impl Default for Recurrence {
    fn default() -> Self {
        Recurrence::Builtin(BuiltinFractal::Mandelbrot)
    }
}

impl From<BuiltinFractal> for Recurrence {
    fn from(fractal: BuiltinFractal) -> Self {
        Recurrence::Builtin(fractal)
    }
}

/// Everything needed to compute one frame of iteration counts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrameRequest<S = f64> {
    /// (width, height) in pixels
    pub viewport_size: (u32, u32),
    pub camera: Camera<S>,
    pub max_iterations: u32,
    pub recurrence: Recurrence,
}

impl<S: Scalar> FrameRequest<S> {
    /// Request for a built-in fractal using its configured defaults.
    pub fn for_builtin(fractal: BuiltinFractal, viewport_size: (u32, u32)) -> Self {
        let config = fractal.config();
        Self {
            viewport_size,
            camera: config.default_camera(viewport_size),
            max_iterations: config.default_max_iterations,
            recurrence: Recurrence::Builtin(fractal),
        }
    }

    pub fn width(&self) -> u32 {
        self.viewport_size.0
    }

    pub fn height(&self) -> u32 {
        self.viewport_size.1
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        let (width, height) = self.viewport_size;
        if width == 0 || height == 0 {
            return Err(CoreError::EmptyViewport { width, height });
        }
        let pixels = u64::from(width) * u64::from(height);
        if pixels > MAX_VIEWPORT_PIXELS || usize::try_from(pixels).is_err() {
            return Err(CoreError::ViewportTooLarge {
                width,
                height,
                limit: MAX_VIEWPORT_PIXELS,
            });
        }
        if self.max_iterations == 0 || self.max_iterations > MAX_ITERATIONS_LIMIT {
            return Err(CoreError::InvalidMaxIterations {
                got: self.max_iterations,
                limit: MAX_ITERATIONS_LIMIT,
            });
        }
        self.camera.validate()
    }
}

impl<S: Scalar + DeserializeOwned> FrameRequest<S> {
    /// Parse and validate a JSON-encoded request.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let request: Self = serde_json::from_str(json)?;
        request.validate()?;
        Ok(request)
    }
}
