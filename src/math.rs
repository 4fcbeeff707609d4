mod bracket;
mod interpolate;
mod round;
//
pub use bracket::{Bracket, Drafted};
pub use interpolate::interpolate;
pub use round::round3;
