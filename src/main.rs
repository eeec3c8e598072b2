mod epoch_counter;
mod settings;

use anyhow::Result;
use epoch_counter::EpochCounter;
use epochsnap::canvas::{BYTES_PER_PIXEL, TILE_HEIGHT, TILE_WIDTH};
use epochsnap::{EpochSampler, GridLayout};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, StandardNormal};
use settings::Settings;
use structopt::StructOpt;

fn main() -> Result<()> {
    let cfg = Settings::from_args();

    // Fixed noise batch, sampled once so every epoch traces the same
    // latent points
    let mut rng = StdRng::seed_from_u64(cfg.seed);
    let noise: Vec<Vec<f32>> = (0..cfg.rows * cfg.cols)
        .map(|_| {
            (0..cfg.latent_dim)
                .map(|_| StandardNormal.sample(&mut rng))
                .collect()
        })
        .collect();

    let layout = GridLayout {
        num_rows: cfg.rows,
        num_cols: cfg.cols,
        margin: cfg.margin,
    };
    let sampler = EpochSampler::new(noise, layout, &cfg.output)?;

    for epoch in EpochCounter::new(cfg.epochs) {
        let mut generator = |noise: &[Vec<f32>]| ripple(noise, epoch);
        sampler.on_epoch_end(epoch, &mut generator)?;
    }

    println!("Finished!");

    Ok(())
}

/// Stand-in for a trained generator: a radial ripple whose phase follows
/// the epoch and whose tint follows the noise vector
fn ripple(noise: &[Vec<f32>], epoch: usize) -> Vec<Vec<f32>> {
    noise
        .iter()
        .map(|z| {
            let bias = z.iter().sum::<f32>() / z.len().max(1) as f32;
            let mut image = Vec::with_capacity(TILE_WIDTH * TILE_HEIGHT * BYTES_PER_PIXEL);
            for y in 0..TILE_HEIGHT {
                for x in 0..TILE_WIDTH {
                    let dx = x as f32 - (TILE_WIDTH - 1) as f32 / 2.0;
                    let dy = y as f32 - (TILE_HEIGHT - 1) as f32 / 2.0;
                    let d = (dx * dx + dy * dy).sqrt();
                    let v = (d * 0.7 - epoch as f32 * 0.4 + bias).sin();
                    image.push(v);
                    image.push((v * 0.5 + bias).clamp(-1.0, 1.0));
                    image.push(-v);
                }
            }
            image
        })
        .collect()
}
