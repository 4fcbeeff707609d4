#[cfg(test)]
#[path = "../tests/draught/drafts_w_keel_test.rs"]
mod tests;
//
use super::{mean_draft::MeanDraft, pp_corrections::PpCorrections};
use crate::{math::round3, vessel::VesselData};
///
/// Drafts at the perpendiculars corrected for the keel plate, m.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DraftsWKeel {
    pub fwd: f64,
    pub mid: f64,
    pub aft: f64,
}
//
//
impl DraftsWKeel {
    ///
    /// Applies the perpendicular corrections and the keel plate offsets
    /// to the mean drafts. Keel plate offsets come from the master data in mm.
    pub fn new(mean_draft: &MeanDraft, corrections: &PpCorrections, vessel: &VesselData) -> Self {
        Self {
            fwd: round3(mean_draft.fwd + corrections.fwd - vessel.keel_fwd / 1000.),
            mid: round3(mean_draft.mid + corrections.mid - vessel.keel_mid / 1000.),
            aft: round3(mean_draft.aft + corrections.aft - vessel.keel_aft / 1000.),
        }
    }
    ///
    /// True trim between the perpendiculars, m.
    /// Positive when the vessel is trimmed by the stern.
    pub fn true_trim(&self) -> f64 {
        round3(self.aft - self.fwd)
    }
}
