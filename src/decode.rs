//! Sentence classification on top of the `nmea` grammar decoder.
//!
//! Checksum validation and field grammar belong to the `nmea` crate; this
//! module reduces its output to the closed set of sentence categories the
//! ingestion pipeline reacts to.

use nmea::sentences::FixType;
use nmea::ParseResult;

use crate::fix::FixRecord;

/// Longest sentence the decoder is handed, in bytes.
///
/// NMEA 0183 caps a sentence at 82 characters including `$` and the
/// terminator; longer lines are cut at this bound before decoding.
pub const MAX_SENTENCE_LEN: usize = 82;

/// One classified line from the receiver.
#[derive(Debug, Clone, PartialEq)]
pub enum Sentence {
    /// RMC: position and speed over ground. The only category that updates
    /// the fix store.
    PositionVelocity(PositionVelocity),
    /// GGA: fix quality and satellites used. Observed for diagnostics only.
    FixQuality(FixQuality),
    /// GSV: satellites in view. Observed for diagnostics only.
    SatellitesInView(SatellitesInView),
    /// A sentence the decoder understands but the pipeline deliberately
    /// does not handle (GSA, GLL, VTG and the rest of the decoder's set).
    Ignored,
    /// Checksum or grammar failure, an unrecognized tag, or line noise.
    Invalid,
}

/// Position/velocity fields of an RMC sentence.
///
/// A receiver without a fix emits RMC with empty position fields, which
/// decode as `None`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionVelocity {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub speed_knots: Option<f32>,
}

/// Fix-quality fields of a GGA sentence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixQuality {
    pub quality: Option<FixType>,
    pub satellites_used: Option<u32>,
}

/// Satellite-visibility summary of one GSV sentence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SatellitesInView {
    pub in_view: u16,
}

impl From<PositionVelocity> for FixRecord {
    fn from(pv: PositionVelocity) -> Self {
        Self {
            latitude: pv.latitude,
            longitude: pv.longitude,
            speed_knots: pv.speed_knots,
        }
    }
}

/// Classify and decode one line.
///
/// `line` must be a bare sentence without its line terminator. Decode
/// failure is an expected outcome on a noisy serial link and is reported as
/// [`Sentence::Invalid`], never as an error.
pub fn decode(line: &str) -> Sentence {
    match nmea::parse_str(line) {
        Ok(ParseResult::RMC(rmc)) => Sentence::PositionVelocity(PositionVelocity {
            latitude: rmc.lat,
            longitude: rmc.lon,
            speed_knots: rmc.speed_over_ground,
        }),
        Ok(ParseResult::GGA(gga)) => Sentence::FixQuality(FixQuality {
            quality: gga.fix_type,
            satellites_used: gga.fix_satellites,
        }),
        Ok(ParseResult::GSV(gsv)) => Sentence::SatellitesInView(SatellitesInView {
            in_view: gsv.sats_in_view,
        }),
        Ok(_) => Sentence::Ignored,
        Err(_) => Sentence::Invalid,
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    const RMC: &str = "$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A";
    const GGA: &str = "$GPGGA,092750.000,5321.6802,N,00630.3372,W,1,8,1.03,61.7,M,55.2,M,,*76";
    const GSV: &str = "$GPGSV,2,1,08,01,40,083,46,02,17,308,41,12,07,344,39,14,22,228,45*75";

    #[test]
    fn rmc_decodes_to_position_velocity() {
        let Sentence::PositionVelocity(pv) = decode(RMC) else {
            panic!("expected position/velocity");
        };
        assert!((pv.latitude.unwrap() - 48.1173).abs() < 1e-4);
        assert!((pv.longitude.unwrap() - 11.5167).abs() < 1e-4);
        assert!((pv.speed_knots.unwrap() - 22.4).abs() < 1e-3);
    }

    #[test]
    fn southern_western_hemispheres_are_signed() {
        let line = "$GPRMC,081836,A,3751.65,S,14507.36,E,000.0,360.0,130998,011.3,E*62";
        let Sentence::PositionVelocity(pv) = decode(line) else {
            panic!("expected position/velocity");
        };
        assert!((pv.latitude.unwrap() + 37.8608).abs() < 1e-4);
        assert!((pv.longitude.unwrap() - 145.1227).abs() < 1e-4);
    }

    #[test]
    fn gga_decodes_to_fix_quality() {
        let Sentence::FixQuality(q) = decode(GGA) else {
            panic!("expected fix quality");
        };
        assert_eq!(q.quality, Some(FixType::Gps));
        assert_eq!(q.satellites_used, Some(8));
    }

    #[test]
    fn gsv_decodes_to_satellites_in_view() {
        let Sentence::SatellitesInView(s) = decode(GSV) else {
            panic!("expected satellites in view");
        };
        assert_eq!(s.in_view, 8);
    }

    #[test]
    fn unhandled_sentence_types_are_ignored() {
        assert_eq!(
            decode("$GPGSA,A,3,04,05,,09,12,,,24,,,,,2.5,1.3,2.1*39"),
            Sentence::Ignored
        );
        assert_eq!(
            decode("$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K*48"),
            Sentence::Ignored
        );
    }

    #[test]
    fn corrupted_checksum_is_invalid() {
        let corrupted = RMC.replace("*6A", "*6B");
        assert_eq!(decode(&corrupted), Sentence::Invalid);
    }

    #[test]
    fn noise_is_invalid() {
        assert_eq!(decode(""), Sentence::Invalid);
        assert_eq!(decode("not a sentence"), Sentence::Invalid);
        assert_eq!(decode("$GPRMC,123519"), Sentence::Invalid);
    }
}
