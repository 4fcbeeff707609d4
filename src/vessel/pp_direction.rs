use strum_macros::{Display, EnumString};
///
/// Direction from a draft mark towards its perpendicular.
///
/// Master data keeps it in the single letter form of the survey protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
pub enum PpDirection {
    ///
    /// The perpendicular lays towards the bow.
    #[default]
    #[strum(serialize = "F")]
    Forward,
    ///
    /// The perpendicular lays towards the stern.
    #[strum(serialize = "A")]
    Aft,
}
//
//
impl PpDirection {
    ///
    /// Applies the direction sign to `distance`.
    ///
    /// Distances measured towards the stern go with the negative sign.
    pub fn signed(&self, distance: f64) -> f64 {
        match self {
            PpDirection::Forward => distance,
            PpDirection::Aft => -distance,
        }
    }
}
