//! MT19937, the 32-bit Mersenne Twister, with both seeding routines
//! from the reference implementation (`init_genrand` for a single
//! word, `init_by_array` for a key of words). The array seeding is
//! what CPython's `random.Random(n)` uses, so `from_key(&[0])`
//! reproduces the exact output stream of `random.Random(0)`.
//!
//! Not cryptographically secure; meant for reproducible sequences.

use rand_core::{impls, Error, RngCore, SeedableRng};

const N: usize = 624;
const M: usize = 397;
const MATRIX_A: u32 = 0x9908b0df;
const UPPER_MASK: u32 = 0x80000000;
const LOWER_MASK: u32 = 0x7fffffff;

/// Default seed of the reference implementation (and of C++'s
/// `std::mt19937`).
pub const DEFAULT_SEED: u32 = 5489;

pub struct Mt19937 {
    state: [u32; N],
    index: usize,
}

impl Mt19937 {
    /// `init_genrand`: seed from a single word.
    pub fn new(seed: u32) -> Mt19937 {
        let mut mt = Mt19937 {
            state: [0; N],
            index: N,
        };
        mt.reseed(seed);
        mt
    }

    /// `init_by_array`: seed from a key of words. An empty key is
    /// treated like the key `[0]` (the reference code indexes the key
    /// cyclically, so it must not be empty).
    pub fn from_key(key: &[u32]) -> Mt19937 {
        let key = if key.is_empty() { &[0][..] } else { key };
        let mut mt = Mt19937::new(19650218);
        let mut i: usize = 1;
        let mut j: usize = 0;
        for _ in 0..N.max(key.len()) {
            mt.state[i] = (mt.state[i]
                           ^ (mt.state[i - 1] ^ (mt.state[i - 1] >> 30))
                               .wrapping_mul(1664525))
                .wrapping_add(key[j])
                .wrapping_add(j as u32);
            i += 1;
            j += 1;
            if i >= N {
                mt.state[0] = mt.state[N - 1];
                i = 1;
            }
            if j >= key.len() {
                j = 0;
            }
        }
        for _ in 0..N - 1 {
            mt.state[i] = (mt.state[i]
                           ^ (mt.state[i - 1] ^ (mt.state[i - 1] >> 30))
                               .wrapping_mul(1566083941))
                .wrapping_sub(i as u32);
            i += 1;
            if i >= N {
                mt.state[0] = mt.state[N - 1];
                i = 1;
            }
        }
        // MSB set guarantees a non-zero initial state
        mt.state[0] = 0x80000000;
        mt.index = N;
        mt
    }

    fn reseed(&mut self, seed: u32) {
        self.state[0] = seed;
        for i in 1..N {
            self.state[i] = (self.state[i - 1] ^ (self.state[i - 1] >> 30))
                .wrapping_mul(1812433253)
                .wrapping_add(i as u32);
        }
        self.index = N;
    }

    fn twist(&mut self) {
        for i in 0..N {
            let y = (self.state[i] & UPPER_MASK)
                | (self.state[(i + 1) % N] & LOWER_MASK);
            let mut next = self.state[(i + M) % N] ^ (y >> 1);
            if y & 1 != 0 {
                next ^= MATRIX_A;
            }
            self.state[i] = next;
        }
        self.index = 0;
    }

    /// `genrand_int32`: the next tempered 32-bit output.
    pub fn genrand(&mut self) -> u32 {
        if self.index >= N {
            self.twist();
        }
        let mut y = self.state[self.index];
        self.index += 1;
        y ^= y >> 11;
        y ^= (y << 7) & 0x9d2c5680;
        y ^= (y << 15) & 0xefc60000;
        y ^= y >> 18;
        y
    }
}

impl RngCore for Mt19937 {
    fn next_u32(&mut self) -> u32 {
        self.genrand()
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Mt19937 {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Mt19937::new(u32::from_le_bytes(seed))
    }
}

impl Default for Mt19937 {
    fn default() -> Self {
        Mt19937::new(DEFAULT_SEED)
    }
}
