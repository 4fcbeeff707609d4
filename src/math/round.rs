#[cfg(test)]
#[path = "../tests/math/round_test.rs"]
mod tests;
///
/// Rounds to the third decimal place, half away from zero.
///
/// The whole correction chain consumes only values rounded this way,
/// so every stage applies it to its outputs before they travel further.
pub fn round3(value: f64) -> f64 {
    (value * 1000.).round() / 1000.
}
