#[cfg(test)]
#[path = "tests/draft_survey_test.rs"]
mod tests;
//
use crate::{
    density::DensityCorrection,
    displacement::{CargoWeight, NetDisplacement},
    draught::{DraftsWKeel, MeanDraft, MeanOfMeans, PpCorrections},
    error::Error,
    hydrostatics::Hydrostatics,
    list::ListCorrection,
    survey::{DraftReading, TotalDeductibles},
    trim::{FirstTrimCorrection, SecondTrimCorrection},
    vessel::VesselData,
};
use indexmap::IndexMap;
use sal_sync::services::entity::dbg_id::DbgId;
///
/// Displacement figures of one draft observation.
///
/// Produced once per chain run and never mutated afterwards,
/// kept by the caller as part of the survey record.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftDisplacement {
    pub mean_draft: MeanDraft,
    pub pp_corrections: PpCorrections,
    pub drafts_w_keel: DraftsWKeel,
    pub mean_of_means: f64,
    pub hydrostatics: Hydrostatics,
    pub first_trim_correction: f64,
    pub second_trim_correction: f64,
    pub list_correction: f64,
    pub density_correction: f64,
    pub total_deductibles: f64,
    pub net_displacement: f64,
}
//
//
impl DraftDisplacement {
    ///
    /// Figures of the run keyed by name, in the order of the calculation chain.
    ///
    /// Used by the reporting side to lay out the survey protocol.
    pub fn report(&self) -> IndexMap<&'static str, f64> {
        IndexMap::from([
            ("draft_fwd_mean", self.mean_draft.fwd),
            ("draft_mid_mean", self.mean_draft.mid),
            ("draft_aft_mean", self.mean_draft.aft),
            ("pp_correction_fwd", self.pp_corrections.fwd),
            ("pp_correction_mid", self.pp_corrections.mid),
            ("pp_correction_aft", self.pp_corrections.aft),
            ("draft_fwd_w_keel", self.drafts_w_keel.fwd),
            ("draft_mid_w_keel", self.drafts_w_keel.mid),
            ("draft_aft_w_keel", self.drafts_w_keel.aft),
            ("mean_of_means", self.mean_of_means),
            ("displacement", self.hydrostatics.displacement),
            ("tpc", self.hydrostatics.tpc),
            ("lcf", self.hydrostatics.lcf),
            ("first_trim_correction", self.first_trim_correction),
            ("second_trim_correction", self.second_trim_correction),
            ("list_correction", self.list_correction),
            ("density_correction", self.density_correction),
            ("total_deductibles", self.total_deductibles),
            ("net_displacement", self.net_displacement),
        ])
    }
}
///
/// Draft survey calculation chain of one vessel.
///
/// Owns the vessel master data and turns field readings
/// into displacement figures. Runs over the initial and the final
/// observations are independent from each other.
pub struct DraftSurvey {
    dbgid: DbgId,
    vessel: VesselData,
}
//
//
impl DraftSurvey {
    ///
    /// Creates a new instance.
    pub fn new(parent: &DbgId, vessel: VesselData) -> Self {
        Self {
            dbgid: DbgId::with_parent(parent, "DraftSurvey"),
            vessel,
        }
    }
    ///
    /// Runs the correction chain over one observation.
    ///
    /// Every stage consumes only rounded outputs of the previous one.
    /// The first failed stage stops the chain, its name stays in the error.
    pub fn displacement(&self, reading: &DraftReading) -> Result<DraftDisplacement, Error> {
        let dbgid = DbgId(format!("{}.displacement", self.dbgid));
        let mean_draft = MeanDraft::from(&reading.marks);
        log::debug!("{} | mean_draft: {:?}", dbgid, mean_draft);
        let pp_corrections = PpCorrections::for_vessel(&mean_draft, &self.vessel)?;
        log::debug!("{} | pp_corrections: {:?}", dbgid, pp_corrections);
        let drafts_w_keel = DraftsWKeel::new(&mean_draft, &pp_corrections, &self.vessel);
        let mean_of_means = MeanOfMeans::new(&drafts_w_keel, self.vessel.vessel_class).value();
        log::debug!("{} | mean_of_means: {}", dbgid, mean_of_means);
        let hydrostatics = Hydrostatics::new(mean_of_means, &reading.hydrostatic_rows, &self.vessel)?;
        let first_trim_correction = FirstTrimCorrection::new(
            &drafts_w_keel,
            hydrostatics.tpc,
            hydrostatics.lcf,
            self.vessel.lbp,
        )
        .value();
        let second_trim_correction =
            SecondTrimCorrection::new(&drafts_w_keel, &reading.mtc_rows, self.vessel.lbp).value()?;
        let list_correction = ListCorrection::new(
            &reading.marks,
            reading.tpc_list_port,
            reading.tpc_list_starboard,
        )
        .value();
        let density_correction = DensityCorrection::new(
            hydrostatics.displacement,
            first_trim_correction,
            second_trim_correction,
            list_correction,
            reading.density,
        )
        .value();
        let total_deductibles = TotalDeductibles::new(
            &reading.ballast_tanks,
            &reading.fresh_tanks,
            &reading.deductibles,
        )
        .value();
        let net_displacement = NetDisplacement::new(
            hydrostatics.displacement,
            first_trim_correction,
            second_trim_correction,
            list_correction,
            density_correction,
            total_deductibles,
        )
        .value();
        log::debug!("{} | net_displacement: {}", dbgid, net_displacement);
        Ok(DraftDisplacement {
            mean_draft,
            pp_corrections,
            drafts_w_keel,
            mean_of_means,
            hydrostatics,
            first_trim_correction,
            second_trim_correction,
            list_correction,
            density_correction,
            total_deductibles,
            net_displacement,
        })
    }
    ///
    /// Cargo weight between two observations, MT.
    ///
    /// Symmetric against swapping the observations, always non negative.
    pub fn cargo_weight(&self, initial: &DraftDisplacement, final_draft: &DraftDisplacement) -> f64 {
        CargoWeight::new(initial.net_displacement, final_draft.net_displacement).value()
    }
}
