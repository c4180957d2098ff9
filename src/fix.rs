//! Fix data types: the stored record and the query representation.

/// Latest position/velocity solution as decoded from the receiver.
///
/// Fields are `None` until a sentence carrying them has been decoded, so a
/// missing reading is distinguishable from a fix at `0.0`. The record is
/// plain `Copy` data; the shared slot holding it lives in
/// [`FixStore`](crate::store::FixStore).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixRecord {
    /// Latitude in decimal degrees, north positive.
    pub latitude: Option<f64>,
    /// Longitude in decimal degrees, east positive.
    pub longitude: Option<f64>,
    /// Speed over ground in knots.
    pub speed_knots: Option<f32>,
}

impl FixRecord {
    /// The state before any sentence has been decoded.
    pub const EMPTY: Self = Self {
        latitude: None,
        longitude: None,
        speed_knots: None,
    };

    /// Whether a position has been decoded since startup.
    #[inline]
    #[must_use]
    pub const fn has_fix(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }
}

/// External-facing fix representation: the `latitude, longitude, speed`
/// triple handed to the rest of the firmware.
///
/// Readings that were never received are reported as `0.0`, so "no fix yet"
/// is indistinguishable from a standstill at the equator/prime-meridian.
/// That quirk is part of the query surface other modules already consume;
/// callers that need validity should use
/// [`FixStore::record`](crate::store::FixStore::record) and
/// [`FixRecord::has_fix`] instead.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GpsFix {
    /// Latitude in decimal degrees, `0.0` when absent.
    pub latitude: f64,
    /// Longitude in decimal degrees, `0.0` when absent.
    pub longitude: f64,
    /// Speed over ground in knots, `0.0` when absent.
    pub speed: f32,
}

impl From<FixRecord> for GpsFix {
    fn from(record: FixRecord) -> Self {
        Self {
            latitude: record.latitude.unwrap_or(0.0),
            longitude: record.longitude.unwrap_or(0.0),
            speed: record.speed_knots.unwrap_or(0.0),
        }
    }
}
