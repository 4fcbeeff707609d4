#[cfg(test)]
#[path = "../tests/math/bracket_test.rs"]
mod tests;
//
use crate::error::Error;
///
/// Reference table row keyed by draft.
pub trait Drafted {
    ///
    /// Draft the row is defined at, m.
    fn draft(&self) -> f64;
}
///
/// Pair of reference rows bracketing a target draft.
///
/// Rows are ordered by draft on creation,
/// so the caller may supply the pair in any order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket<'a, T> {
    pub lower: &'a T,
    pub upper: &'a T,
}
//
//
impl<'a, T: Drafted> Bracket<'a, T> {
    ///
    /// Builds the bracket from the first two rows of `rows`.
    ///
    /// Fails if less than two rows are supplied,
    /// or both rows sit at the same draft (zero width bracket).
    pub fn new(stage: &str, rows: &'a [T]) -> Result<Self, Error> {
        match rows {
            [first, second, rest @ ..] => {
                if !rest.is_empty() {
                    log::warn!(
                        "{} | Extra reference rows ignored: given={}, used=2",
                        stage,
                        rows.len()
                    );
                }
                if first.draft() == second.draft() {
                    return Err(Error::InsufficientBracket {
                        stage: stage.to_owned(),
                        details: format!("zero width bracket at draft={}", first.draft()),
                    });
                }
                match first.draft() < second.draft() {
                    true => Ok(Self {
                        lower: first,
                        upper: second,
                    }),
                    false => Ok(Self {
                        lower: second,
                        upper: first,
                    }),
                }
            }
            _ => Err(Error::InsufficientBracket {
                stage: stage.to_owned(),
                details: format!("two reference rows required, given={}", rows.len()),
            }),
        }
    }
}
