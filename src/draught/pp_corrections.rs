#[cfg(test)]
#[path = "../tests/draught/pp_corrections_test.rs"]
mod tests;
//
use super::mean_draft::MeanDraft;
use crate::{
    error::Error,
    math::round3,
    vessel::{CorrectionMethod, VesselData},
};
///
/// Draft corrections from the mark positions to the perpendiculars, m.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PpCorrections {
    pub fwd: f64,
    pub mid: f64,
    pub aft: f64,
}
//
//
impl PpCorrections {
    ///
    /// Builds the corrections by the method set in the vessel master data.
    pub fn for_vessel(mean_draft: &MeanDraft, vessel: &VesselData) -> Result<Self, Error> {
        match vessel.correction_method {
            CorrectionMethod::FullLbp => Self::full_lbp(mean_draft, vessel),
            CorrectionMethod::HalfLbp => Self::half_lbp(mean_draft, vessel),
        }
    }
    ///
    /// Full LBP method.
    ///
    /// All three corrections share one denominator, the effective length
    /// between the forward and aft marks, against the trim read at the marks.
    pub fn full_lbp(mean_draft: &MeanDraft, vessel: &VesselData) -> Result<Self, Error> {
        let stage = "PpCorrections.full_lbp";
        let fwd_distance = vessel.pp_fwd_direction.signed(vessel.distance_pp_fwd);
        let mid_distance = vessel.pp_mid_direction.signed(vessel.distance_pp_mid);
        let aft_distance = vessel.pp_aft_direction.signed(vessel.distance_pp_aft);
        let trim = round3(mean_draft.aft - mean_draft.fwd);
        let effective_lbp = round3(vessel.lbp - aft_distance + fwd_distance);
        if effective_lbp == 0. {
            return Err(Error::DegenerateGeometry {
                stage: stage.to_owned(),
                details: format!(
                    "effective LBP is zero: lbp={}, fwd_distance={}, aft_distance={}",
                    vessel.lbp, fwd_distance, aft_distance
                ),
            });
        }
        log::debug!("{} | trim={}, effective_lbp={}", stage, trim, effective_lbp);
        Ok(Self {
            fwd: round3(fwd_distance * trim / effective_lbp),
            mid: round3(mid_distance * trim / effective_lbp),
            aft: round3(aft_distance * trim / effective_lbp),
        })
    }
    ///
    /// Half LBP method.
    ///
    /// Forward and mid corrections go over the mid to forward half span
    /// against the trim between the mid and forward marks.
    /// The aft correction goes over the aft to mid half span against the
    /// remaining trim, taken from the mid draft already adjusted
    /// by its own correction and the keel plate.
    pub fn half_lbp(mean_draft: &MeanDraft, vessel: &VesselData) -> Result<Self, Error> {
        let stage = "PpCorrections.half_lbp";
        let fwd_distance = vessel.pp_fwd_direction.signed(vessel.distance_pp_fwd);
        let mid_distance = vessel.pp_mid_direction.signed(vessel.distance_pp_mid);
        let aft_distance = vessel.pp_aft_direction.signed(vessel.distance_pp_aft);
        let half_lbp = vessel.lbp / 2.;
        let fwd_span = round3(half_lbp - fwd_distance);
        let aft_span = round3(half_lbp - aft_distance);
        if fwd_span == 0. || aft_span == 0. {
            return Err(Error::DegenerateGeometry {
                stage: stage.to_owned(),
                details: format!(
                    "half LBP span is zero: fwd_span={}, aft_span={}",
                    fwd_span, aft_span
                ),
            });
        }
        let fwd_trim = round3(mean_draft.mid - mean_draft.fwd);
        let fwd = round3(fwd_distance * fwd_trim / fwd_span);
        let mid = round3(mid_distance * fwd_trim / fwd_span);
        // the aft correction needs the mid draft corrected and keel adjusted first
        let mid_draft_w_keel = round3(mean_draft.mid + mid - vessel.keel_mid / 1000.);
        let aft_trim = round3(mean_draft.aft - mid_draft_w_keel);
        let aft = round3(aft_distance * aft_trim / aft_span);
        log::debug!(
            "{} | fwd_span={}, aft_span={}, mid_draft_w_keel={}",
            stage,
            fwd_span,
            aft_span,
            mid_draft_w_keel
        );
        Ok(Self { fwd, mid, aft })
    }
}
