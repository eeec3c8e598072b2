pub mod canvas;
pub mod encode;
pub mod sampler;

pub use canvas::{Canvas, GridLayout};
pub use sampler::{EpochSampler, Generator};
