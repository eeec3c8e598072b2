use std::io::Write;
use std::time::{Duration, Instant};

/// Epoch counter, an iterator which shows its progress in stdout
pub struct EpochCounter {
    last_time: Option<Instant>,
    total_time: Duration,
    idx: usize,
    n: usize,
}

impl EpochCounter {
    /// Creates a new EpochCounter with the specified number of epochs `n`
    pub fn new(n: usize) -> Self {
        Self {
            last_time: None,
            total_time: Duration::ZERO,
            idx: 0,
            n,
        }
    }
}

impl Iterator for EpochCounter {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let ret = self.idx;
        if ret == self.n {
            println!();
            return None;
        }

        let time = Instant::now();

        print!("\rEpoch {:>4}/{}", ret + 1, self.n);

        if let Some(last_time) = self.last_time.take() {
            let epoch_time = time.duration_since(last_time);
            self.total_time += epoch_time;
            let mean = self.total_time / ret as u32;
            print!(
                ", last: {} ms, mean: {} ms",
                epoch_time.as_millis(),
                mean.as_millis()
            );
        }

        std::io::stdout().flush().expect("Stdout error");

        self.last_time = Some(time);

        self.idx += 1;
        Some(ret)
    }
}
