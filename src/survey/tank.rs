///
/// Fresh water tank sounding.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FreshWaterTank {
    pub name: String,
    pub sounding: f64,
    pub volume: f64,
}
//
//
impl FreshWaterTank {
    ///
    /// Water weight, MT. Fresh water density is taken as 1.0.
    pub fn weight(&self) -> f64 {
        self.volume
    }
}
///
/// Ballast water tank sounding.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BallastWaterTank {
    pub name: String,
    pub sounding: f64,
    pub volume: f64,
    pub density: f64,
}
//
//
impl BallastWaterTank {
    ///
    /// Water weight, MT.
    pub fn weight(&self) -> f64 {
        self.volume * self.density
    }
}
