pub mod bigfloat;
pub mod camera;
pub mod complex;
pub mod config;
pub mod error;
pub mod frame;
pub mod iteration_buffer;
pub mod scalar;

pub use bigfloat::{BigFloat, DEFAULT_PRECISION_BITS};
pub use camera::{Camera, ZOOM_IN_STEP, ZOOM_OUT_STEP};
pub use complex::Complex;
pub use config::{
    get_fractal_config, BuiltinFractal, FractalConfig, FRACTAL_CONFIGS, MANDELBROT_CONFIG,
    MAX_ITERATIONS_LIMIT, MAX_VIEWPORT_PIXELS, OCTOPUS_CONFIG, QUARTIC_CONFIG,
};
pub use error::CoreError;
pub use frame::{FrameRequest, Recurrence};
pub use iteration_buffer::{palette_index, IterationBuffer};
pub use scalar::Scalar;
