// Copyright 2025 John Brosnihan
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Entity names
//!
//! Names have two representations in the store: a [`StaticHash`] used for
//! fast lookup, and an index into a [`StringBuffer`] holding the readable
//! label for diagnostics. The two are independent; lookups never touch the
//! string table.

use serde::{Deserialize, Serialize};
use std::fmt;

const MURMUR_M: u32 = 0x5bd1_e995;
const MURMUR_R: u32 = 24;

/// MurmurHash2 (32-bit) of a byte slice
pub fn murmur_hash(key: &[u8], seed: u32) -> u32 {
    let mut h = seed ^ key.len() as u32;

    let mut chunks = key.chunks_exact(4);
    for chunk in &mut chunks {
        let mut k = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        k = k.wrapping_mul(MURMUR_M);
        k ^= k >> MURMUR_R;
        k = k.wrapping_mul(MURMUR_M);

        h = h.wrapping_mul(MURMUR_M);
        h ^= k;
    }

    let tail = chunks.remainder();
    if tail.len() >= 3 {
        h ^= (tail[2] as u32) << 16;
    }
    if tail.len() >= 2 {
        h ^= (tail[1] as u32) << 8;
    }
    if !tail.is_empty() {
        h ^= tail[0] as u32;
        h = h.wrapping_mul(MURMUR_M);
    }

    h ^= h >> 13;
    h = h.wrapping_mul(MURMUR_M);
    h ^= h >> 15;
    h
}

/// 32-bit content hash of a name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StaticHash(u32);

impl StaticHash {
    /// Hash assigned to unnamed entities (the hash of `"-"`)
    pub const NONE_TEXT: &'static str = "-";

    /// Hash a name
    pub fn new(text: &str) -> Self {
        StaticHash(murmur_hash(text.as_bytes(), 0))
    }

    /// Wrap an already computed hash value
    pub const fn from_raw(value: u32) -> Self {
        StaticHash(value)
    }

    /// Hash of an unnamed entity
    pub fn none() -> Self {
        StaticHash::new(Self::NONE_TEXT)
    }

    /// Get the raw hash value
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl Default for StaticHash {
    fn default() -> Self {
        StaticHash::none()
    }
}

impl From<&str> for StaticHash {
    fn from(text: &str) -> Self {
        StaticHash::new(text)
    }
}

impl fmt::Display for StaticHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

/// Interning table for readable names
///
/// Appending the same text twice returns the same index.
#[derive(Debug, Default)]
pub struct StringBuffer {
    entries: Vec<(StaticHash, String)>,
}

impl StringBuffer {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern `text` and return its index
    pub fn append(&mut self, text: &str) -> usize {
        if let Some(index) = self.find(text) {
            return index;
        }
        self.entries.push((StaticHash::new(text), text.to_string()));
        self.entries.len() - 1
    }

    /// Get the text stored at `index`
    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|(_, text)| text.as_str())
    }

    /// Find the index of `text`, if it was interned
    pub fn find(&self, text: &str) -> Option<usize> {
        let hash = StaticHash::new(text);
        self.entries
            .iter()
            .position(|(h, t)| *h == hash && t == text)
    }

    /// Check if `text` was interned
    pub fn contains(&self, text: &str) -> bool {
        self.find(text).is_some()
    }

    /// Number of interned strings
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
