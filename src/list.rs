#[cfg(test)]
#[path = "tests/list_test.rs"]
mod tests;
//
use crate::{math::round3, survey::Marks};
///
/// List correction to the displacement, MT.
///
/// Compensates the port to starboard draft asymmetry at the midship marks.
pub struct ListCorrection<'a> {
    marks: &'a Marks,
    tpc_port: f64,
    tpc_starboard: f64,
}
//
//
impl<'a> ListCorrection<'a> {
    ///
    /// Creates a new instance.
    /// - tpc_port, tpc_starboard - TPC at the port and starboard list drafts
    pub fn new(marks: &'a Marks, tpc_port: f64, tpc_starboard: f64) -> Self {
        Self {
            marks,
            tpc_port,
            tpc_starboard,
        }
    }
    ///
    /// Correction value, MT.
    ///
    /// Exactly zero when the midship marks read the same on both sides,
    /// whatever the TPC inputs are.
    pub fn value(&self) -> f64 {
        let port = self.marks.mid_port.value;
        let starboard = self.marks.mid_starboard.value;
        if port == starboard {
            return 0.;
        }
        round3(6. * (port - starboard).abs() * (self.tpc_port - self.tpc_starboard).abs())
    }
}
