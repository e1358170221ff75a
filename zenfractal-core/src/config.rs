//! Built-in fractal configuration.
//!
//! Each built-in recurrence is described here as data: its formula text (which
//! the expression runtime must evaluate identically) and the defaults a
//! frontend starts from.

use crate::{Camera, Complex, Scalar};
use serde::{Deserialize, Serialize};

/// Upper bound for `max_iterations` accepted in a frame request.
pub const MAX_ITERATIONS_LIMIT: u32 = 1 << 11;

/// Largest `width * height` accepted in a frame request (fits 8K UHD).
pub const MAX_VIEWPORT_PIXELS: u64 = 1 << 25;

/// Recurrences with a hand-specialised fast path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuiltinFractal {
    Mandelbrot,
    Octopus,
    Quartic,
}

impl BuiltinFractal {
    pub const ALL: [BuiltinFractal; 3] = [
        BuiltinFractal::Mandelbrot,
        BuiltinFractal::Octopus,
        BuiltinFractal::Quartic,
    ];

    pub fn config(self) -> &'static FractalConfig {
        match self {
            BuiltinFractal::Mandelbrot => &MANDELBROT_CONFIG,
            BuiltinFractal::Octopus => &OCTOPUS_CONFIG,
            BuiltinFractal::Quartic => &QUARTIC_CONFIG,
        }
    }

    /// Formula text equivalent to the specialised recurrence.
    pub fn expression(self) -> &'static str {
        self.config().expression
    }
}

/// Configuration for a built-in fractal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FractalConfig {
    /// Unique identifier
    pub id: &'static str,
    /// Human-readable name for UI display
    pub display_name: &'static str,
    pub fractal: BuiltinFractal,
    /// Recurrence `z' = f(z, c)` in the expression grammar
    pub expression: &'static str,
    /// Fractal-space point shown at the viewport centre initially
    pub default_center: (f64, f64),
    /// Pixels per fractal unit
    pub default_zoom: f64,
    pub default_max_iterations: u32,
}

impl FractalConfig {
    /// Starting camera for a viewport of the given size.
    pub fn default_camera<S: Scalar>(&self, viewport_size: (u32, u32)) -> Camera<S> {
        Camera::centered(
            viewport_size,
            Complex::from_f64_pair(self.default_center.0, self.default_center.1),
            self.default_zoom,
        )
    }
}

pub static MANDELBROT_CONFIG: FractalConfig = FractalConfig {
    id: "mandelbrot",
    display_name: "Mandelbrot",
    fractal: BuiltinFractal::Mandelbrot,
    expression: "z*z+c",
    default_center: (0.0, 0.0),
    default_zoom: 100.0,
    default_max_iterations: 64,
};

pub static OCTOPUS_CONFIG: FractalConfig = FractalConfig {
    id: "octopus",
    display_name: "Octopus",
    fractal: BuiltinFractal::Octopus,
    expression: "(c+z)*z+z*z*z+c*z*z+z",
    default_center: (0.0, 0.0),
    default_zoom: 100.0,
    default_max_iterations: 64,
};

pub static QUARTIC_CONFIG: FractalConfig = FractalConfig {
    id: "quartic",
    display_name: "Quartic",
    fractal: BuiltinFractal::Quartic,
    expression: "z*z*z*z+c",
    default_center: (0.0, 0.0),
    default_zoom: 100.0,
    default_max_iterations: 64,
};

pub static FRACTAL_CONFIGS: &[&FractalConfig] =
    &[&MANDELBROT_CONFIG, &OCTOPUS_CONFIG, &QUARTIC_CONFIG];

/// Look up a fractal configuration by ID.
pub fn get_fractal_config(id: &str) -> Option<&'static FractalConfig> {
    FRACTAL_CONFIGS.iter().copied().find(|c| c.id == id)
}
