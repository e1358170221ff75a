//! Whole-frame rendering: map every pixel through the camera and iterate it.
//!
//! Pixels are independent, so the parallel renderer hands rows to rayon
//! workers, each owning a clone of the prepared iterator. Both renderers
//! produce identical buffers.

use crate::escape_time::EscapeTimeIterator;
use crate::RenderError;
use rayon::prelude::*;
use std::time::Instant;
use zenfractal_core::{Camera, FrameRequest, IterationBuffer, Scalar};

/// Validate the request and prepare its recurrence. An invalid custom
/// expression fails here, before any pixel is computed.
fn prepare<S: Scalar>(request: &FrameRequest<S>) -> Result<EscapeTimeIterator<S>, RenderError> {
    if let Err(e) = request.validate() {
        log::warn!("Rejected frame request: {}", e);
        return Err(e.into());
    }

    EscapeTimeIterator::new(&request.recurrence).map_err(|e| {
        log::warn!(
            "Rejected recurrence {:?}: {}",
            request.recurrence.expression(),
            e
        );
        RenderError::from(e)
    })
}

fn render_row<S: Scalar>(
    iterator: &mut EscapeTimeIterator<S>,
    camera: &Camera<S>,
    y: u32,
    max_iterations: u32,
    row: &mut [u32],
) {
    let sy = f64::from(y);
    for (x, count) in row.iter_mut().enumerate() {
        let start = camera.screen_to_world(x as f64, sy);
        *count = iterator.iterate(&start, max_iterations);
    }
}

/// Render a frame on the calling thread.
pub fn render_frame<S: Scalar>(request: &FrameRequest<S>) -> Result<IterationBuffer, RenderError> {
    let mut iterator = prepare(request)?;
    let started = Instant::now();

    let mut buffer =
        IterationBuffer::new(request.width(), request.height(), request.max_iterations);
    for (y, row) in buffer
        .iterations
        .chunks_mut(request.width() as usize)
        .enumerate()
    {
        render_row(&mut iterator, &request.camera, y as u32, request.max_iterations, row);
    }

    log::debug!(
        "Rendered {}x{} frame (max_iterations={}) in {:.1}ms",
        request.width(),
        request.height(),
        request.max_iterations,
        started.elapsed().as_secs_f64() * 1000.0
    );
    Ok(buffer)
}

/// Render a frame with rows spread across the rayon thread pool.
pub fn render_frame_parallel<S>(request: &FrameRequest<S>) -> Result<IterationBuffer, RenderError>
where
    S: Scalar + Send + Sync,
{
    let iterator = prepare(request)?;
    let started = Instant::now();

    let camera = &request.camera;
    let max_iterations = request.max_iterations;
    let mut buffer = IterationBuffer::new(request.width(), request.height(), max_iterations);
    buffer
        .iterations
        .par_chunks_mut(request.width() as usize)
        .enumerate()
        .for_each_init(
            || iterator.clone(),
            |worker, (y, row)| render_row(worker, camera, y as u32, max_iterations, row),
        );

    log::debug!(
        "Rendered {}x{} frame (max_iterations={}) on {} threads in {:.1}ms",
        request.width(),
        request.height(),
        max_iterations,
        rayon::current_num_threads(),
        started.elapsed().as_secs_f64() * 1000.0
    );
    Ok(buffer)
}
