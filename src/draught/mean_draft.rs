#[cfg(test)]
#[path = "../tests/draught/mean_draft_test.rs"]
mod tests;
//
use crate::{math::round3, survey::Marks};
///
/// Mean draft per hull position, m.
///
/// Average of the port and starboard readings at each position,
/// rounded to the third decimal place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeanDraft {
    pub fwd: f64,
    pub mid: f64,
    pub aft: f64,
}
//
//
impl From<&Marks> for MeanDraft {
    fn from(marks: &Marks) -> Self {
        Self {
            fwd: round3((marks.fwd_port.value + marks.fwd_starboard.value) / 2.),
            mid: round3((marks.mid_port.value + marks.mid_starboard.value) / 2.),
            aft: round3((marks.aft_port.value + marks.aft_starboard.value) / 2.),
        }
    }
}
