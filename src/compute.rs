//! Parallel per-pixel evaluation.

use log::{debug, trace, warn};
use rayon::prelude::{IndexedParallelIterator, ParallelIterator, ParallelSliceMut};

use crate::{
    buffer::PixelBuffer,
    colour,
    error::{Error, Result},
    escape,
    grid::Grid,
    pixel::{Complex, Pixel},
};

/// Default number of worker threads. The workload is CPU-bound, so more workers than cores
/// only adds scheduling overhead.
pub const DEFAULT_WORKERS: usize = 2;

/// Minimum number of pixels handed to a worker at once.
const MIN_PIXELS_PER_TASK: usize = 64;

/// Escape-time evaluation and colouring of a single point.
pub fn shade(c: Complex, depth: u32) -> Pixel {
    colour::map(escape::evaluate(c, depth))
}

/// Owns the worker pool. Create one per session and reuse it for every frame. Dropping the
/// engine tells the threads to exit but does not wait for them.
pub struct Engine {
    pool: rayon::ThreadPool,
}

impl Engine {
    pub fn new(workers: usize) -> Result<Self> {
        if workers == 0 {
            return Err(Error::InvalidWorkers(workers));
        }

        let cpus = num_cpus::get();
        if workers > cpus {
            warn!(
                "{} workers requested but only {} cpus available; frames will not render faster",
                workers, cpus
            );
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|index| format!("mandelbrot-worker-{}", index))
            .build()?;
        debug!("created worker pool with {} threads", workers);

        Ok(Self { pool })
    }

    pub fn workers(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Render every pixel of `grid`.
    ///
    /// Blocks until the whole frame is done. Each pixel is written to the slot given by its
    /// row-major index, so the result does not depend on which worker finishes first.
    pub fn render(&self, grid: &Grid, depth: u32) -> PixelBuffer {
        trace!("begin render");

        let mut buffer = PixelBuffer::zeroed(grid.size);
        self.pool
            .install(|| fill(buffer.as_bytes_mut(), depth, |index| grid.coordinate(index)));

        trace!("end render");
        buffer
    }

    /// Shade an arbitrary sequence of coordinates, returning `3 * coordinates.len()` bytes in
    /// input order.
    pub fn compute(&self, coordinates: &[Complex], depth: u32) -> Vec<u8> {
        let mut bytes = vec![0; coordinates.len() * Pixel::SIZE];
        self.pool
            .install(|| fill(&mut bytes, depth, |index| coordinates[index]));
        bytes
    }
}

fn fill<F>(bytes: &mut [u8], depth: u32, coordinate: F)
where
    F: Fn(usize) -> Complex + Sync,
{
    bytes
        .par_chunks_exact_mut(Pixel::SIZE)
        .with_min_len(MIN_PIXELS_PER_TASK)
        .enumerate()
        .for_each(|(index, slot)| {
            let pixel: &mut Pixel = bytemuck::from_bytes_mut(slot);
            *pixel = shade(coordinate(index), depth);
        });
}

/// Single-threaded rendering on the calling thread. Produces exactly the same bytes as
/// [`Engine::render`].
pub fn render_sequential(grid: &Grid, depth: u32) -> PixelBuffer {
    let mut buffer = PixelBuffer::zeroed(grid.size);
    for (slot, c) in buffer
        .as_bytes_mut()
        .chunks_exact_mut(Pixel::SIZE)
        .zip(grid.coordinates())
    {
        slot.copy_from_slice(bytemuck::bytes_of(&shade(c, depth)));
    }
    buffer
}
