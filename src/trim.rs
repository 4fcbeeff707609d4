#[cfg(test)]
#[path = "tests/trim_test.rs"]
mod tests;
//
use crate::{draught::DraftsWKeel, error::Error, hydrostatics::MtcRow, math::{round3, Bracket}};
///
/// First order trim correction to the displacement, MT.
pub struct FirstTrimCorrection<'a> {
    drafts: &'a DraftsWKeel,
    tpc: f64,
    lcf: f64,
    lbp: f64,
}
//
//
impl<'a> FirstTrimCorrection<'a> {
    ///
    /// Creates a new instance.
    /// - tpc, lcf - hydrostatic values at the mean of means draft
    pub fn new(drafts: &'a DraftsWKeel, tpc: f64, lcf: f64, lbp: f64) -> Self {
        Self {
            drafts,
            tpc,
            lcf,
            lbp,
        }
    }
    ///
    /// Correction value, MT.
    ///
    /// Negative when the trim and the center of flotation
    /// lay on opposite sides of the midship.
    pub fn value(&self) -> f64 {
        let trim = self.drafts.true_trim();
        let correction = (trim * self.tpc * self.lcf * 100. / self.lbp).abs();
        let negative = (trim < 0. && self.lcf >= 0.) || (trim > 0. && self.lcf <= 0.);
        round3(match negative {
            true => -correction,
            false => correction,
        })
    }
}
///
/// Second order trim correction to the displacement, MT.
pub struct SecondTrimCorrection<'a> {
    drafts: &'a DraftsWKeel,
    mtc_rows: &'a [MtcRow],
    lbp: f64,
}
//
//
impl<'a> SecondTrimCorrection<'a> {
    ///
    /// Creates a new instance.
    /// - mtc_rows - pair of trim table rows bracketing the mean draft
    pub fn new(drafts: &'a DraftsWKeel, mtc_rows: &'a [MtcRow], lbp: f64) -> Self {
        Self {
            drafts,
            mtc_rows,
            lbp,
        }
    }
    ///
    /// Correction value, MT.
    ///
    /// Built on the MTC change over the bracketing rows of the trim table,
    /// grows with the square of the true trim.
    pub fn value(&self) -> Result<f64, Error> {
        let stage = "SecondTrimCorrection.value";
        let bracket = Bracket::new(stage, self.mtc_rows)?;
        let delta_mtc = bracket.upper.mtc - bracket.lower.mtc;
        let trim = self.drafts.true_trim();
        Ok(round3(50. * trim * trim * delta_mtc / self.lbp))
    }
}
