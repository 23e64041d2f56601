use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded random stream owned by one game session.
///
/// Every random decision of a session (difficulty rolls, random moves) is
/// drawn from here, so recording the seed is enough to replay a game.
#[derive(Debug)]
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Derives an independent child stream, e.g. for an engine call that runs
    /// on a worker thread while this stream stays with the session.
    pub fn fork(&mut self) -> SessionRng {
        SessionRng::new(self.rng.random())
    }

    /// Uniform value in `[0, 1)`.
    pub fn random_unit(&mut self) -> f32 {
        self.rng.random::<f32>()
    }

    pub fn random_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distr::uniform::SampleUniform,
        R: rand::distr::uniform::SampleRange<T>,
    {
        self.rng.random_range(range)
    }
}
