//! Deterministic random number generation and the random-source seam.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical decks
//! - **Forkable**: Each new game draws from its own branch of the session RNG
//! - **Pluggable**: Card generation only sees the `RandomSource` trait, so
//!   tests can script exact titles and powers
//!
//! ```
//! use card_slots::core::{GameRng, RandomSource};
//!
//! let mut rng1 = GameRng::new(42);
//! let mut rng2 = GameRng::new(42);
//!
//! assert_eq!(rng1.capitalized_word(), rng2.capitalized_word());
//! ```

use std::ops::RangeInclusive;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const CONSONANTS: &[u8] = b"bcdfghjklmnprstvwz";
const VOWELS: &[u8] = b"aeiou";

/// Source of randomness consumed by card generation.
///
/// Implementors only need `int_in`; pseudo-words are built on top of it.
pub trait RandomSource {
    /// Uniform integer in `range` (both ends inclusive).
    ///
    /// Callers clamp the result, so a source that strays outside `range`
    /// skews the output but never panics.
    fn int_in(&mut self, range: RangeInclusive<u32>) -> u32;

    /// A capitalized pronounceable pseudo-word of one to three syllables.
    ///
    /// Each syllable is consonant + vowel with an occasional closing
    /// consonant, e.g. "Vekto", "Ba", "Lurinam".
    fn capitalized_word(&mut self) -> String {
        let syllables = self.int_in(1..=3).clamp(1, 3);
        let mut word = String::with_capacity(syllables as usize * 3);

        for _ in 0..syllables {
            word.push(pick(self, CONSONANTS));
            word.push(pick(self, VOWELS));
            if self.int_in(0..=3) == 0 {
                word.push(pick(self, CONSONANTS));
            }
        }

        word[..1].make_ascii_uppercase();
        word
    }
}

fn pick<R: RandomSource + ?Sized>(source: &mut R, letters: &[u8]) -> char {
    let last = letters.len() - 1;
    let index = (source.int_in(0..=last as u32) as usize).min(last);
    letters[index] as char
}

/// Deterministic RNG backing card generation.
///
/// Uses ChaCha8 for speed while keeping sequences reproducible per seed.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Branch off an independent RNG.
    ///
    /// The n-th fork of a given seed is always the same, and differs from
    /// every other fork and from the parent stream.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        Self::new(seed)
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for GameRng {
    fn int_in(&mut self, range: RangeInclusive<u32>) -> u32 {
        self.inner.gen_range(range)
    }
}
