use serde::{Deserialize, Serialize};

/// Row-major escape-time counts for one frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IterationBuffer {
    pub width: u32,
    pub height: u32,
    /// Cap the counts were computed with; a count equal to it did not escape
    pub max_iterations: u32,
    pub iterations: Vec<u32>,
}

impl IterationBuffer {
    pub fn new(width: u32, height: u32, max_iterations: u32) -> Self {
        Self {
            width,
            height,
            max_iterations,
            iterations: vec![0; width as usize * height as usize],
        }
    }

    pub fn get(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.iterations
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Whether the pixel at (x, y) stayed bounded for the full cap.
    pub fn is_interior(&self, x: u32, y: u32) -> bool {
        self.get(x, y) == Some(self.max_iterations)
    }

    /// Map every count to an index into a palette of `palette_size` entries.
    pub fn palette_indices(&self, palette_size: usize) -> Vec<usize> {
        self.iterations
            .iter()
            .map(|&n| palette_index(n, self.max_iterations, palette_size))
            .collect()
    }
}

/// `iterations / max_iterations * (palette_size - 1)`, clamped to a valid index.
///
/// Returns 0 for an empty palette or a zero cap.
pub fn palette_index(iterations: u32, max_iterations: u32, palette_size: usize) -> usize {
    if palette_size == 0 || max_iterations == 0 {
        return 0;
    }
    let last = palette_size - 1;
    let t = f64::from(iterations) / f64::from(max_iterations);
    let index = t * last as f64;
    if index.is_nan() || index <= 0.0 {
        0
    } else {
        (index as usize).min(last)
    }
}
