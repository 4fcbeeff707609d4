use strum_macros::{Display, EnumString};
///
/// Method of the draft correction to the perpendiculars.
///
/// Set once per vessel in the master data, see [crate::draught::PpCorrections].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
pub enum CorrectionMethod {
    ///
    /// One denominator over the whole length between the marks.
    #[default]
    #[strum(serialize = "Full LBP")]
    FullLbp,
    ///
    /// Two denominators over the half lengths, fore and aft of the midship.
    #[strum(serialize = "Half LBP")]
    HalfLbp,
}
