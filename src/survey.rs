mod deductibles;
mod draft_reading;
mod mark;
mod marks;
mod sea_condition;
mod tank;
//
pub use deductibles::{Deductibles, TotalDeductibles};
pub use draft_reading::DraftReading;
pub use mark::{Mark, ReadingMethod};
pub use marks::Marks;
pub use sea_condition::{IceCondition, SeaCondition, WaveCondition};
pub use tank::{BallastWaterTank, FreshWaterTank};
