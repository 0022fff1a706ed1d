//! Element identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

// Use web-time on WASM, std::time otherwise
#[cfg(target_arch = "wasm32")]
use web_time::SystemTime;
#[cfg(not(target_arch = "wasm32"))]
use std::time::SystemTime;

/// Largest identifier an element may carry.
///
/// Identifiers cross into JavaScript as numbers, so they stay within the
/// exactly representable integer range.
pub const MAX_ELEMENT_ID: u64 = (1 << 53) - 1;

/// Unique identifier for an element.
///
/// Derived from the creation timestamp in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(u64);

impl ElementId {
    /// Wrap a raw identifier value.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw identifier value.
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Whether this identifier lies within [`MAX_ELEMENT_ID`].
    pub const fn is_in_range(self) -> bool {
        self.0 <= MAX_ELEMENT_ID
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hands out strictly increasing timestamp-based identifiers.
///
/// Two elements created within the same millisecond (or after the clock moved
/// backwards) still get distinct ids: the next id is never below `last + 1`.
/// Identifiers above [`MAX_ELEMENT_ID`] are never observed, so `last + 1`
/// cannot overflow.
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    last: u64,
}

impl IdAllocator {
    /// Create an allocator that has not issued anything yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next identifier.
    pub fn next_id(&mut self) -> ElementId {
        let floor = self.last.checked_add(1).unwrap_or(MAX_ELEMENT_ID);
        let id = now_millis().max(floor);
        self.last = id;
        ElementId(id)
    }

    /// Record an identifier issued elsewhere (e.g. loaded from a dump) so it
    /// is never handed out again.
    ///
    /// Out-of-range identifiers are ignored; callers reject them first.
    pub fn observe(&mut self, id: ElementId) {
        if id.is_in_range() {
            self.last = self.last.max(id.0);
        }
    }

    /// The most recently issued or observed identifier value.
    pub fn last(&self) -> u64 {
        self.last
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
