//! Чистое водоизмещение судна
#[cfg(test)]
#[path = "tests/displacement_test.rs"]
mod tests;
//
use crate::math::round3;
///
/// Чистое водоизмещение, MT.
/// - displacement: водоизмещение по гидростатической таблице
/// - first_trim, second_trim, list, density: поправки к водоизмещению
/// - total_deductibles: вычитаемые судовые запасы
pub struct NetDisplacement {
    displacement: f64,
    first_trim: f64,
    second_trim: f64,
    list: f64,
    density: f64,
    total_deductibles: f64,
}
//
//
impl NetDisplacement {
    ///
    /// Creates a new instance.
    pub fn new(
        displacement: f64,
        first_trim: f64,
        second_trim: f64,
        list: f64,
        density: f64,
        total_deductibles: f64,
    ) -> Self {
        Self {
            displacement,
            first_trim,
            second_trim,
            list,
            density,
            total_deductibles,
        }
    }
    ///
    /// Значение чистого водоизмещения, MT.
    pub fn value(&self) -> f64 {
        let corrected = round3(
            self.displacement + self.first_trim + self.second_trim + self.list + self.density,
        );
        round3(corrected - self.total_deductibles)
    }
}
///
/// Вес груза по разнице двух чистых водоизмещений, MT.
pub struct CargoWeight {
    net_initial: f64,
    net_final: f64,
}
//
//
impl CargoWeight {
    ///
    /// Creates a new instance.
    pub fn new(net_initial: f64, net_final: f64) -> Self {
        Self {
            net_initial,
            net_final,
        }
    }
    ///
    /// Вес груза, MT. Всегда неотрицательный.
    pub fn value(&self) -> f64 {
        round3((self.net_final - self.net_initial).abs())
    }
}
