mod correction_method;
mod pp_direction;
mod vessel_class;
mod vessel_data;
//
pub use correction_method::CorrectionMethod;
pub use pp_direction::PpDirection;
pub use vessel_class::VesselClass;
pub use vessel_data::VesselData;
