//! Criterion settings and inputs shared by the workspace benches.

use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::SeedableRng;
use rand::rngs::StdRng;

const RNG_SEED: u64 = 0x5EED_1CA0;

/// How long criterion spends on a benchmark, picked from the input size.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RuntimeProfile {
    Small,
    Medium,
    Large,
}

impl RuntimeProfile {
    /// Profile for a structure built over `len` elements.
    pub fn for_len(len: usize) -> Self {
        if len <= 4_096 {
            Self::Small
        } else if len <= 65_536 {
            Self::Medium
        } else {
            Self::Large
        }
    }

    fn sample_size(self) -> usize {
        match self {
            Self::Small | Self::Medium => 15,
            Self::Large => 10,
        }
    }

    fn warm_up(self) -> Duration {
        match self {
            Self::Small => Duration::from_millis(100),
            Self::Medium => Duration::from_millis(500),
            Self::Large => Duration::from_millis(800),
        }
    }

    fn measurement(self) -> Duration {
        match self {
            Self::Small => Duration::from_millis(200),
            Self::Medium => Duration::from_millis(1000),
            Self::Large => Duration::from_millis(1500),
        }
    }
}

pub fn apply_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, profile: RuntimeProfile) {
    group.sample_size(profile.sample_size());
    group.warm_up_time(profile.warm_up());
    group.measurement_time(profile.measurement());
}

/// Seeded RNG so every bench run sees the same inputs.
pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}
