//! Shared slot holding the most recent fix.

use core::cell::Cell;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex;

use crate::fix::{FixRecord, GpsFix};

/// Single-slot store for the latest [`FixRecord`].
///
/// One writer (the consumption pass) replaces the whole record; any number
/// of readers copy the whole record out. Both sides go through the blocking
/// mutex, so a reader can never observe a half-written record. The mutex
/// flavor is pluggable: firmware sharing the store with interrupt context
/// uses `CriticalSectionRawMutex`, host code and tests get away with
/// `NoopRawMutex`.
///
/// `new` is `const`, so the store can live in a `static` next to the
/// [`RxPending`](crate::receiver::RxPending) counter.
pub struct FixStore<M: RawMutex> {
    slot: Mutex<M, Cell<FixRecord>>,
}

impl<M: RawMutex> FixStore<M> {
    /// An empty store; queries report no data until the first update.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slot: Mutex::new(Cell::new(FixRecord::EMPTY)),
        }
    }

    /// Replace the stored record. Whole-record replace, never a field merge.
    pub fn update(&self, record: FixRecord) {
        self.slot.lock(|slot| slot.set(record));
    }

    /// Snapshot of the stored record, absent readings intact.
    #[must_use]
    pub fn record(&self) -> FixRecord {
        self.slot.lock(|slot| slot.get())
    }

    /// The query surface handed to the rest of the firmware: the current
    /// record with absent readings normalized to `0.0`.
    ///
    /// Non-blocking and infallible; before the first decoded position this
    /// returns an all-zero fix rather than an error.
    #[must_use]
    pub fn fix(&self) -> GpsFix {
        self.record().into()
    }
}

impl<M: RawMutex> Default for FixStore<M> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use embassy_sync::blocking_mutex::raw::NoopRawMutex;

    use super::*;

    fn store() -> FixStore<NoopRawMutex> {
        FixStore::new()
    }

    #[test]
    fn starts_empty() {
        let store = store();
        assert_eq!(store.record(), FixRecord::EMPTY);
        assert_eq!(store.fix(), GpsFix::default());
    }

    #[test]
    fn update_replaces_whole_record() {
        let store = store();
        store.update(FixRecord {
            latitude: Some(48.0),
            longitude: Some(11.0),
            speed_knots: Some(1.5),
        });
        store.update(FixRecord {
            latitude: Some(49.0),
            longitude: Some(12.0),
            speed_knots: None,
        });

        let record = store.record();
        assert_eq!(record.latitude, Some(49.0));
        assert_eq!(record.longitude, Some(12.0));
        // No field merge: the second record's absent speed wins.
        assert_eq!(record.speed_knots, None);
    }

    #[test]
    fn query_is_idempotent() {
        let store = store();
        store.update(FixRecord {
            latitude: Some(48.1173),
            longitude: Some(11.5167),
            speed_knots: Some(22.4),
        });
        assert_eq!(store.fix(), store.fix());
        assert_eq!(store.record(), store.record());
    }

    #[test]
    fn absent_readings_normalize_to_zero() {
        let store = store();
        store.update(FixRecord {
            latitude: None,
            longitude: None,
            speed_knots: None,
        });
        let fix = store.fix();
        assert_eq!(fix.latitude, 0.0);
        assert_eq!(fix.longitude, 0.0);
        assert_eq!(fix.speed, 0.0);
        assert!(!store.record().has_fix());
    }
}
