//! The epoch-boundary hook: turn a fixed noise batch into a tiled PNG.

use crate::canvas::{denormalize, Canvas, GridLayout, BYTES_PER_PIXEL, TILE_HEIGHT, TILE_WIDTH};
use crate::encode::write_rgb_png;
use anyhow::{ensure, Context, Result};
use std::fs;
use std::path::PathBuf;

/// A prediction capability: maps a batch of noise vectors to a batch of
/// 28x28 RGB images, one per vector, as flat row-major buffers with
/// channel values nominally in [-1, 1].
pub trait Generator {
    fn predict(&mut self, noise: &[Vec<f32>]) -> Vec<Vec<f32>>;
}

impl<F> Generator for F
where
    F: FnMut(&[Vec<f32>]) -> Vec<Vec<f32>>,
{
    fn predict(&mut self, noise: &[Vec<f32>]) -> Vec<Vec<f32>> {
        self(noise)
    }
}

/// Writes a grid of generator samples to disk once per training epoch.
///
/// The noise batch is sampled once by the training driver and held here
/// unchanged, so the images trace a fixed set of latent points across
/// epochs. The sampler itself holds no other state between invocations.
pub struct EpochSampler {
    noise: Vec<Vec<f32>>,
    layout: GridLayout,
    output_dir: PathBuf,
}

impl EpochSampler {
    /// Fails if the noise batch does not fill the grid exactly.
    pub fn new(
        noise: Vec<Vec<f32>>,
        layout: GridLayout,
        output_dir: impl Into<PathBuf>,
    ) -> Result<Self> {
        ensure!(
            noise.len() == layout.capacity(),
            "noise batch holds {} vectors but the {}x{} grid needs {}",
            noise.len(),
            layout.num_rows,
            layout.num_cols,
            layout.capacity(),
        );

        Ok(Self {
            noise,
            layout,
            output_dir: output_dir.into(),
        })
    }

    /// Render one snapshot of the generator's output and write it to
    /// `<output_dir>/train-<epoch>.png`, overwriting any previous file
    /// of that name. Returns the path written.
    ///
    /// Deterministic: the same generator state always produces the same
    /// bytes on disk.
    pub fn on_epoch_end(&self, epoch: usize, generator: &mut impl Generator) -> Result<PathBuf> {
        let mut canvas = Canvas::blank(&self.layout);

        let images = generator.predict(&self.noise);
        ensure!(
            images.len() == self.layout.capacity(),
            "generator returned {} images for a {}x{} grid",
            images.len(),
            self.layout.num_rows,
            self.layout.num_cols,
        );

        let mut tile = vec![0u8; TILE_WIDTH * TILE_HEIGHT * BYTES_PER_PIXEL];
        for (idx, image) in images.iter().enumerate() {
            ensure!(
                image.len() == tile.len(),
                "image {} holds {} values, expected {} (28x28 RGB)",
                idx,
                image.len(),
                tile.len(),
            );

            for (dst, &v) in tile.iter_mut().zip(image.iter()) {
                *dst = denormalize(v);
            }

            let row = idx / self.layout.num_cols;
            let col = idx % self.layout.num_cols;
            canvas.blit_rgb(
                &tile,
                self.layout.tile_origin(row, col),
                (TILE_WIDTH, TILE_HEIGHT),
            );
        }

        fs::create_dir_all(&self.output_dir).with_context(|| {
            format!("Creating output directory {}", self.output_dir.display())
        })?;

        let path = self.output_dir.join(format!("train-{}.png", epoch));
        write_rgb_png(
            canvas.width() as u32,
            canvas.height() as u32,
            canvas.data(),
            &path,
        )
        .context("Writing image")?;

        Ok(path)
    }
}
