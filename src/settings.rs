use std::path::PathBuf;
use structopt::StructOpt;

#[derive(StructOpt, Debug, Clone)]
pub struct Settings {
    /// Number of tile rows in the sample grid
    #[structopt(short, long, default_value = "4")]
    pub rows: usize,

    /// Number of tile columns in the sample grid
    #[structopt(short, long, default_value = "4")]
    pub cols: usize,

    /// Spacing between tiles and around the border, in pixels
    #[structopt(short, long, default_value = "16")]
    pub margin: usize,

    /// Number of epochs to run
    #[structopt(short, long, default_value = "10")]
    pub epochs: usize,

    /// Length of each noise vector
    #[structopt(short, long, default_value = "100")]
    pub latent_dim: usize,

    /// Output directory
    #[structopt(short, long, default_value = "epoch_images")]
    pub output: PathBuf,

    /// Seed for the fixed noise batch
    #[structopt(short, long, default_value = "0")]
    pub seed: u64,
}
