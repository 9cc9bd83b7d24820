//! Seeded value streams for ore generation.
//!
//! Every generation call derives its own [`ValueStream`] from
//! `(seed, chunk, salt, version)` and owns it for the duration of the call.
//! There is no process-wide generator, so unrelated calls never influence
//! each other and results do not depend on call order or threading.
//!
//! ## Derivation
//!
//! ```text
//! h  = seed
//! h ^= chunk_x * 341873128712
//! h ^= chunk_z * 132897987541
//! h ^= salt    * 0x9E3779B97F4A7C15
//! h ^= version * 0xC2B2AE3D27D4EB4F
//! state = mix64(h)
//! ```
//!
//! Each draw advances a 64-bit LCG and returns the splitmix64 finalizer of
//! the new state. All arithmetic wraps.

use orefinder_common::{ChunkCoord, VersionTag};

/// Per-axis multiplier for chunk X.
pub const CHUNK_X_MULTIPLIER: u64 = 341_873_128_712;
/// Per-axis multiplier for chunk Z.
pub const CHUNK_Z_MULTIPLIER: u64 = 132_897_987_541;

const SALT_MULTIPLIER: u64 = 0x9E37_79B9_7F4A_7C15;
const VERSION_MULTIPLIER: u64 = 0xC2B2_AE3D_27D4_EB4F;

const LCG_MULTIPLIER: u64 = 6_364_136_223_846_793_005;
const LCG_INCREMENT: u64 = 1_442_695_040_888_963_407;

/// splitmix64 output finalizer.
#[must_use]
pub const fn mix64(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Folds a seed, a 2D position and a salt into one scalar.
#[must_use]
pub const fn fold_position(seed: i64, x: i32, z: i32, salt: u64) -> u64 {
    let mut h = seed as u64;
    h ^= (x as i64 as u64).wrapping_mul(CHUNK_X_MULTIPLIER);
    h ^= (z as i64 as u64).wrapping_mul(CHUNK_Z_MULTIPLIER);
    h ^= salt.wrapping_mul(SALT_MULTIPLIER);
    h
}

/// Deterministic pseudo-random sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueStream {
    state: u64,
}

impl ValueStream {
    /// Derives the stream for one `(seed, chunk, salt, version)` tuple.
    #[must_use]
    pub const fn derive(seed: i64, chunk: ChunkCoord, salt: u64, version: VersionTag) -> Self {
        let h = fold_position(seed, chunk.x, chunk.z, salt)
            ^ (version.minor() as u64).wrapping_mul(VERSION_MULTIPLIER);
        Self::from_state(mix64(h))
    }

    /// Creates a stream from a raw state.
    #[must_use]
    pub const fn from_state(state: u64) -> Self {
        Self { state }
    }

    /// Current raw state.
    #[must_use]
    pub const fn state(&self) -> u64 {
        self.state
    }

    /// Next raw 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT);
        mix64(self.state)
    }

    /// Uniform value in `[0, 1)` built from the top 53 bits.
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Uniform integer in `[min, max]` (inclusive).
    ///
    /// Consumes exactly one draw; returns `min` when `max <= min`.
    pub fn range_i32(&mut self, min: i32, max: i32) -> i32 {
        let draw = self.next_u64();
        if max <= min {
            return min;
        }
        let span = (max as i64 - min as i64 + 1) as u64;
        (min as i64 + (draw % span) as i64) as i32
    }

    /// One survival roll against a discard probability.
    ///
    /// `discard_chance <= 0` always survives, `>= 1` never does.
    pub fn survives(&mut self, discard_chance: f64) -> bool {
        self.next_f64() >= discard_chance
    }
}
