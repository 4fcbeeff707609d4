use crate::math::Drafted;
use strum_macros::{Display, EnumString};
///
/// Reference the table LCF value is measured from.
///
/// Hydrostatic tables of different yards keep LCF either as a signed
/// distance off the midship or as a distance from the aft perpendicular.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
pub enum LcfReference {
    ///
    /// Forward of the midship.
    #[default]
    #[strum(serialize = "F")]
    Forward,
    ///
    /// Aft of the midship.
    #[strum(serialize = "A")]
    Aft,
    ///
    /// From the aft perpendicular.
    #[strum(serialize = "AP")]
    FromAp,
}
///
/// Row of the vessel hydrostatic table.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HydrostaticRow {
    pub draft: f64,
    pub displacement: f64,
    pub tpc: f64,
    pub lcf: f64,
    pub lcf_reference: LcfReference,
}
//
//
impl Drafted for HydrostaticRow {
    fn draft(&self) -> f64 {
        self.draft
    }
}
