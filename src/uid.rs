//! Reproducible identifier generation for UI components.
//!
//! Component identifiers are records carrying a `uid` field (a
//! UUID-format token) plus caller-supplied naming fields. The tokens
//! come from a shared MT19937 generator: reseed it with
//! [`reset_uid_random_seed`] (or [`UidGenerator::reset`]) and the
//! n-th token after the reset is always the n-th value of a fixed
//! sequence, byte-identical across runs and processes.
//!
//! The reset seeding is `init_by_array` with the key `[0]`, the same
//! seeding CPython's `random.Random(0)` uses; a token is drawn the
//! way CPython's `randint(0, 2**128)` draws it: a 129-bit draw (four
//! 32-bit words lowest-word-first, plus a fifth word whose top bit
//! is bit 128), redrawn while bit 128 is set, then formatted as
//! 8-4-4-4-12 hex digits. Each accepted token therefore consumes
//! five words of the sequence.

use std::collections::BTreeMap;
use std::sync::Mutex;

use kstring::KString;
use lazy_static::lazy_static;
use mtrand::Mt19937;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::component::ks;

/// The key `reset` reseeds with.
pub const RESET_SEED_KEY: u32 = 0;

/// The mapping returned by [`build_id`]: exactly the caller-supplied
/// fields plus `uid`. Serializes as a JSON object; insertion order is
/// irrelevant for equality. Deserialization checks that a string
/// `uid` field is present, so every record reachable through safe
/// construction carries one.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct IdRecord(BTreeMap<KString, Value>);

impl<'de> Deserialize<'de> for IdRecord {
    fn deserialize<D>(deserializer: D) -> Result<IdRecord, D::Error>
    where D: serde::Deserializer<'de>
    {
        let fields = BTreeMap::<KString, Value>::deserialize(deserializer)?;
        match fields.get("uid") {
            Some(Value::String(_)) => Ok(IdRecord(fields)),
            Some(_) => Err(serde::de::Error::custom(
                "id record `uid` field is not a string")),
            None => Err(serde::de::Error::missing_field("uid")),
        }
    }
}

impl IdRecord {
    pub fn uid(&self) -> &str {
        match self.0.get("uid") {
            Some(Value::String(s)) => s,
            _ => unreachable!("IdRecord always carries a uid string"),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &KString> {
        self.0.keys()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_value(&self) -> Value {
        Value::Object(
            self.0
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        )
    }
}

/// Single-owner identifier generator service: MT19937 behind a
/// `Mutex`, so the per-call-sequence determinism guarantee holds even
/// with concurrent callers (ordering across threads is the callers'
/// business).
pub struct UidGenerator {
    rng: Mutex<Mt19937>,
}

impl UidGenerator {
    /// A generator seeded from OS entropy; tokens are unpredictable
    /// until [`reset`](Self::reset) is called.
    pub fn from_entropy() -> Result<UidGenerator, getrandom::Error> {
        let mut buf = [0u8; 4];
        getrandom::getrandom(&mut buf)?;
        Ok(UidGenerator::with_seed(u32::from_le_bytes(buf)))
    }

    /// A generator in the deterministic state reached by reseeding
    /// with the given key word; `with_seed(RESET_SEED_KEY)` starts in
    /// the same state [`reset`](Self::reset) produces.
    pub fn with_seed(seed: u32) -> UidGenerator {
        UidGenerator {
            rng: Mutex::new(Mt19937::from_key(&[seed])),
        }
    }

    /// Reseed to the fixed deterministic state, replacing whatever
    /// state existed before.
    pub fn reset(&self) {
        tracing::debug!(seed = RESET_SEED_KEY, "uid generator reseeded");
        *self.rng.lock().expect("die too if poisoned") =
            Mt19937::from_key(&[RESET_SEED_KEY]);
    }

    /// Draw the next token: 8-4-4-4-12 lowercase hex digits. An
    /// accepted token consumes five 32-bit words: four value words
    /// plus a range-check word whose top bit forces a redraw when
    /// set (the 129-bit rejection sampling of CPython's
    /// `randint(0, 2**128)`).
    pub fn next_uid(&self) -> String {
        let mut rng = self.rng.lock().expect("die too if poisoned");
        loop {
            let mut lo: u128 = 0;
            for i in 0..4 {
                lo |= (rng.genrand() as u128) << (32 * i);
            }
            if rng.genrand() >> 31 == 0 {
                return Uuid::from_u128(lo).to_string();
            }
        }
    }

    /// Build an identifier record from an optional positional-style
    /// name and keyword-style fields. The result has exactly the keys
    /// supplied plus `uid`. A field named `uid` overwrites the drawn
    /// token (caller error, not defended against).
    pub fn build_id(&self, name: Option<&str>, fields: &[(&str, Value)]) -> IdRecord {
        let mut record = BTreeMap::new();
        record.insert(ks("uid"), Value::from(self.next_uid()));
        if let Some(name) = name {
            record.insert(ks("name"), Value::from(name));
        }
        for (key, value) in fields {
            record.insert(ks(key), value.clone());
        }
        IdRecord(record)
    }
}

lazy_static! {
    static ref UID_GENERATOR: UidGenerator =
        UidGenerator::from_entropy().expect("OS entropy unavailable");
}

/// Reseed the process-wide generator to the fixed deterministic seed;
/// subsequent [`build_id`] calls are reproducible from this point.
pub fn reset_uid_random_seed() {
    UID_GENERATOR.reset()
}

/// [`UidGenerator::build_id`] on the process-wide generator.
pub fn build_id(name: Option<&str>, fields: &[(&str, Value)]) -> IdRecord {
    UID_GENERATOR.build_id(name, fields)
}
