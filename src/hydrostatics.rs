#[cfg(test)]
#[path = "tests/hydrostatics/hydrostatics_test.rs"]
mod tests;
//
mod hydrostatic_row;
mod mtc_row;
//
pub use hydrostatic_row::{HydrostaticRow, LcfReference};
pub use mtc_row::MtcRow;
//
use crate::{
    error::Error,
    math::{interpolate, Bracket},
    vessel::VesselData,
};
///
/// Hydrostatic values interpolated at the mean of means draft.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hydrostatics {
    ///
    /// Displacement, MT.
    pub displacement: f64,
    ///
    /// Tonnes per centimeter immersion.
    pub tpc: f64,
    ///
    /// LCF normalized to the signed distance from the midship, m.
    /// Negative towards the bow.
    pub lcf: f64,
}
//
//
impl Hydrostatics {
    ///
    /// Ratio of LBP above which a raw LCF can only be a distance
    /// from the aft perpendicular, whatever the row is flagged with.
    const LCF_FROM_AP_THRESHOLD: f64 = 0.045;
    ///
    /// Interpolates displacement, TPC and LCF between two bracketing rows.
    ///
    /// The rows may come in any order. LCF values are brought to the signed
    /// distance from the midship before the interpolation: tables flagged as
    /// measured from the aft perpendicular (or exceeding the threshold above)
    /// are converted via LBP/2 - raw, the rest only get the sign of their
    /// reference flag.
    // TODO: confirm the 0.045 threshold against the hydrostatic table
    // documentation of the vessels it was introduced for
    pub fn new(mmc: f64, rows: &[HydrostaticRow], vessel: &VesselData) -> Result<Self, Error> {
        let stage = "Hydrostatics.new";
        let bracket = Bracket::new(stage, rows)?;
        let (lower, upper) = (bracket.lower, bracket.upper);
        let displacement = interpolate(
            mmc,
            lower.draft,
            lower.displacement,
            upper.draft,
            upper.displacement,
        );
        let tpc = interpolate(mmc, lower.draft, lower.tpc, upper.draft, upper.tpc);
        let from_ap = matches!(lower.lcf_reference, LcfReference::FromAp)
            || lower.lcf > vessel.lbp * Self::LCF_FROM_AP_THRESHOLD;
        let lcf = match from_ap {
            true => interpolate(
                mmc,
                lower.draft,
                vessel.lbp / 2. - lower.lcf,
                upper.draft,
                vessel.lbp / 2. - upper.lcf,
            ),
            false => {
                let normalized = |row: &HydrostaticRow| match row.lcf_reference {
                    LcfReference::Forward => -row.lcf,
                    _ => row.lcf,
                };
                interpolate(
                    mmc,
                    lower.draft,
                    normalized(lower),
                    upper.draft,
                    normalized(upper),
                )
            }
        };
        log::debug!(
            "{} | displacement={}, tpc={}, lcf={}, from_ap={}",
            stage,
            displacement,
            tpc,
            lcf,
            from_ap
        );
        Ok(Self {
            displacement,
            tpc,
            lcf,
        })
    }
}
