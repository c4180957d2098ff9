//! Per-line classification and routing.

use embassy_sync::blocking_mutex::raw::RawMutex;
use log::{debug, trace};

use crate::decode::{self, Sentence, MAX_SENTENCE_LEN};
use crate::fix::FixRecord;
use crate::store::FixStore;

/// Counters accumulated across consumption passes.
///
/// Decode failures are absorbed silently by design; these counters make
/// them observable without changing that contract.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IngestStats {
    /// Complete lines handed to the dispatcher.
    pub lines: u32,
    /// Successful position/velocity decodes, i.e. store updates.
    pub position_fixes: u32,
    /// Recognized sentences with no handler.
    pub ignored: u32,
    /// Lines dropped for checksum, grammar, or encoding failures.
    pub rejected: u32,
}

/// Classify one framed line and route the result.
///
/// Only a successful position/velocity decode touches the store; every
/// other outcome leaves it untouched. Nothing here returns an error: a
/// noisy serial link makes undecodable lines a routine occurrence.
pub(crate) fn dispatch_line<M: RawMutex>(
    raw: &[u8],
    store: &FixStore<M>,
    stats: &mut IngestStats,
) {
    stats.lines += 1;
    let sentence = match normalize(raw) {
        Some(line) => decode::decode(line),
        None => Sentence::Invalid,
    };
    match sentence {
        Sentence::PositionVelocity(pv) => {
            store.update(FixRecord::from(pv));
            stats.position_fixes += 1;
        }
        Sentence::FixQuality(q) => {
            debug!(
                "fix quality: {:?}, satellites used: {:?}",
                q.quality, q.satellites_used
            );
        }
        Sentence::SatellitesInView(s) => {
            debug!("satellites in view: {}", s.in_view);
        }
        Sentence::Ignored => {
            stats.ignored += 1;
        }
        Sentence::Invalid => {
            stats.rejected += 1;
            trace!("dropped undecodable line ({} bytes)", raw.len());
        }
    }
}

/// Strip a trailing carriage return left over from CRLF framing and cut the
/// line at the decoder's maximum sentence length.
fn normalize(raw: &[u8]) -> Option<&str> {
    let line = match raw {
        [rest @ .., b'\r'] => rest,
        _ => raw,
    };
    let line = if line.len() > MAX_SENTENCE_LEN {
        &line[..MAX_SENTENCE_LEN]
    } else {
        line
    };
    core::str::from_utf8(line).ok()
}
