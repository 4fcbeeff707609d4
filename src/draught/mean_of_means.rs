#[cfg(test)]
#[path = "../tests/draught/mean_of_means_test.rs"]
mod tests;
//
use super::drafts_w_keel::DraftsWKeel;
use crate::{math::round3, vessel::VesselClass};
///
/// Mean of means, the single draft the hydrostatic table is entered with, m.
pub struct MeanOfMeans<'a> {
    drafts: &'a DraftsWKeel,
    class: VesselClass,
}
//
//
impl<'a> MeanOfMeans<'a> {
    ///
    /// Creates a new instance.
    pub fn new(drafts: &'a DraftsWKeel, class: VesselClass) -> Self {
        Self { drafts, class }
    }
    ///
    /// Weighted combination of the three drafts.
    ///
    /// The weight of the mid draft is set by the vessel class,
    /// each weighted term is rounded on its own before the summation.
    pub fn value(&self) -> f64 {
        let (fwd_weight, mid_weight, aft_weight, total) = match self.class {
            VesselClass::Marine => (1., 6., 1., 8.),
            VesselClass::River => (1., 4., 1., 6.),
            VesselClass::Barge => (3., 14., 3., 20.),
        };
        let fwd = round3(self.drafts.fwd * fwd_weight);
        let mid = round3(self.drafts.mid * mid_weight);
        let aft = round3(self.drafts.aft * aft_weight);
        round3((fwd + mid + aft) / total)
    }
}
