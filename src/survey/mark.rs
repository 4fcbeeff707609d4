use strum_macros::{Display, EnumString};
///
/// How the draft mark reading was taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
pub enum ReadingMethod {
    ///
    /// Read visually right at the mark.
    #[default]
    #[strum(serialize = "direct")]
    Direct,
    ///
    /// Derived from the measured distance between the deck line and the waterline.
    #[strum(serialize = "waterline")]
    Waterline,
}
///
/// Single draft mark reading, m.
///
/// Immutable once recorded by the surveyor.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Mark {
    pub value: f64,
    pub method: ReadingMethod,
}
//
//
impl Mark {
    ///
    /// Creates a direct reading.
    pub fn new(value: f64) -> Self {
        Self {
            value,
            method: ReadingMethod::Direct,
        }
    }
}
