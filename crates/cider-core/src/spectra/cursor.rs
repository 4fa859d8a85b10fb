use chrono::{DateTime, Utc};

/// Monotonic polling watermark.
///
/// Tracks the modification time up to which spectra have been listed.
/// Advancing to an earlier instant is a no-op, so a closed window can
/// never be re-opened by clock skew or a stale caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    position: DateTime<Utc>,
}

impl Cursor {
    /// Start the cursor at the given instant.
    pub fn starting_at(position: DateTime<Utc>) -> Self {
        Self { position }
    }

    /// Current watermark.
    pub fn position(&self) -> DateTime<Utc> {
        self.position
    }

    /// Move the watermark forward. Earlier or equal instants are ignored.
    pub fn advance_to(&mut self, instant: DateTime<Utc>) {
        if instant > self.position {
            self.position = instant;
        }
    }
}
