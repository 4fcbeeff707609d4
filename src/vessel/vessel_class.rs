#[cfg(test)]
#[path = "../tests/vessel/vessel_class_test.rs"]
mod tests;
//
use crate::error::Error;
use strum_macros::{Display, EnumString};
///
/// Vessel class, defines the weighting of the mean of means draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
pub enum VesselClass {
    #[default]
    #[strum(serialize = "marine")]
    Marine,
    #[strum(serialize = "river")]
    River,
    #[strum(serialize = "barge")]
    Barge,
}
//
//
impl VesselClass {
    ///
    /// Resolves the class from its master data representation.
    ///
    /// Master data keeps the class as a plain string,
    /// any value out of the supported set is rejected explicitly.
    pub fn resolve(raw: &str) -> Result<Self, Error> {
        raw.parse().map_err(|_| Error::UnknownVesselClass {
            stage: "VesselClass.resolve".to_owned(),
            class: raw.to_owned(),
        })
    }
}
