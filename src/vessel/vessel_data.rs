use super::{correction_method::CorrectionMethod, pp_direction::PpDirection, vessel_class::VesselClass};
///
/// Vessel master data record.
///
/// Supplied by the data entry side and read only for the calculation:
/// identity of the vessel, geometry of the draft marks,
/// keel plate offsets and the class specific settings.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VesselData {
    pub name: String,
    pub flag: String,
    pub home_port: String,
    pub imo: String,
    pub built_country: String,
    pub built_year: i32,
    pub lightship: f64, // вес порожнем, MT
    pub breadth: f64,   // ширина корпуса, м
    pub depth: f64,     // высота корпуса, м
    pub lbp: f64,       // длина между перпендикулярами, м
    pub summer_draft: f64,
    pub summer_dwt: f64,
    pub summer_tpc: f64,
    pub summer_freeboard: f64,
    ///
    /// Distance from the forward mark to its perpendicular, m.
    pub distance_pp_fwd: f64,
    pub pp_fwd_direction: PpDirection,
    ///
    /// Distance from the midship mark to the midship, m.
    pub distance_pp_mid: f64,
    pub pp_mid_direction: PpDirection,
    ///
    /// Distance from the aft mark to its perpendicular, m.
    pub distance_pp_aft: f64,
    pub pp_aft_direction: PpDirection,
    ///
    /// Keel plate offsets per mark position, mm.
    pub keel_fwd: f64,
    pub keel_mid: f64,
    pub keel_aft: f64,
    pub vessel_class: VesselClass,
    pub correction_method: CorrectionMethod,
}
