#[cfg(test)]
#[path = "../tests/survey/deductibles_test.rs"]
mod tests;
//
use super::tank::{BallastWaterTank, FreshWaterTank};
use crate::math::round3;
///
/// Fixed consumable categories deducted from the displacement, MT.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Deductibles {
    pub hfo: f64,
    pub mdo: f64,
    pub lub_oil: f64,
    pub bilge_water: f64,
    pub sewage_water: f64,
    ///
    /// Open category, named by the surveyor.
    pub others: f64,
    pub others_name: String,
}
///
/// Total weight of the deductible liquids on board, MT.
pub struct TotalDeductibles<'a> {
    ballast_tanks: &'a [BallastWaterTank],
    fresh_tanks: &'a [FreshWaterTank],
    deductibles: &'a Deductibles,
}
//
//
impl<'a> TotalDeductibles<'a> {
    ///
    /// Creates a new instance.
    pub fn new(
        ballast_tanks: &'a [BallastWaterTank],
        fresh_tanks: &'a [FreshWaterTank],
        deductibles: &'a Deductibles,
    ) -> Self {
        Self {
            ballast_tanks,
            fresh_tanks,
            deductibles,
        }
    }
    ///
    /// Total of the tank weights and the consumable categories.
    ///
    /// Each tank weight is rounded on its own before the summation.
    pub fn value(&self) -> f64 {
        let ballast: f64 = self
            .ballast_tanks
            .iter()
            .map(|tank| round3(tank.weight()))
            .sum();
        let fresh: f64 = self
            .fresh_tanks
            .iter()
            .map(|tank| round3(tank.weight()))
            .sum();
        let d = self.deductibles;
        round3(ballast + fresh + d.hfo + d.mdo + d.lub_oil + d.bilge_water + d.sewage_water + d.others)
    }
}
