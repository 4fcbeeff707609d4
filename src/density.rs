#[cfg(test)]
#[path = "tests/density_test.rs"]
mod tests;
//
use crate::math::round3;
///
/// Density correction to the displacement, MT.
///
/// The hydrostatic table is built for the standard sea water,
/// the correction brings the displacement to the measured density.
pub struct DensityCorrection {
    displacement: f64,
    first_trim: f64,
    second_trim: f64,
    list: f64,
    density: f64,
}
//
//
impl DensityCorrection {
    ///
    /// Standard sea water density, t/m3.
    const STANDARD_DENSITY: f64 = 1.025;
    ///
    /// Creates a new instance.
    /// - density - measured water density at the survey place, t/m3
    pub fn new(displacement: f64, first_trim: f64, second_trim: f64, list: f64, density: f64) -> Self {
        Self {
            displacement,
            first_trim,
            second_trim,
            list,
            density,
        }
    }
    ///
    /// Correction value, MT.
    ///
    /// Zero when the measured density equals the standard one.
    pub fn value(&self) -> f64 {
        let corrected = round3(self.displacement + self.first_trim + self.second_trim + self.list);
        round3(corrected * (self.density - Self::STANDARD_DENSITY) / Self::STANDARD_DENSITY)
    }
}
