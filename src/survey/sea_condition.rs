use strum_macros::{Display, EnumString};
///
/// Sea state around the hull while the marks were read.
///
/// Recorded with the observation for the survey protocol,
/// the correction chain itself does not consume it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeaCondition {
    Wave(WaveCondition),
    Ice(IceCondition),
}
///
/// Wave height ranges of the survey protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum WaveCondition {
    #[strum(serialize = "< 0.1m")]
    Calm,
    #[strum(serialize = "0.1-0.5m")]
    Smooth,
    #[strum(serialize = "0.5-1.25m")]
    Slight,
    #[strum(serialize = "1.25-2.5m")]
    Moderate,
    #[strum(serialize = "2.5-4.0m")]
    Rough,
}
///
/// Ice thickness ranges of the survey protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum IceCondition {
    #[strum(serialize = "<0.05m around")]
    Under005,
    #[strum(serialize = "0.05-0.1m around")]
    From005To010,
    #[strum(serialize = "0.1-0.15m around")]
    From010To015,
    #[strum(serialize = "0.15-0.2m around")]
    From015To020,
    #[strum(serialize = "0.2-0.3m around")]
    From020To030,
    #[strum(serialize = "0.3-0.4m around")]
    From030To040,
    #[strum(serialize = "0.4-0.6m around")]
    From040To060,
    #[strum(serialize = ">0.6m around")]
    Over060,
}
