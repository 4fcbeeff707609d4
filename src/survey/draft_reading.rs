use super::{
    deductibles::Deductibles,
    marks::Marks,
    sea_condition::SeaCondition,
    tank::{BallastWaterTank, FreshWaterTank},
};
use crate::hydrostatics::{HydrostaticRow, MtcRow};
///
/// Field readings of one draft observation, initial or final.
///
/// Collected by the data entry side together with the pair of reference rows
/// bracketing the expected draft, picked out of the vessel hydrostatic
/// and trim tables. The record is consumed read only.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DraftReading {
    pub marks: Marks,
    pub ballast_tanks: Vec<BallastWaterTank>,
    pub fresh_tanks: Vec<FreshWaterTank>,
    pub deductibles: Deductibles,
    ///
    /// Water density at the survey place, t/m3.
    pub density: f64,
    ///
    /// TPC at the port side list draft.
    pub tpc_list_port: f64,
    ///
    /// TPC at the starboard side list draft.
    pub tpc_list_starboard: f64,
    pub hydrostatic_rows: Vec<HydrostaticRow>,
    pub mtc_rows: Vec<MtcRow>,
    pub sea_condition: Option<SeaCondition>,
}
