use draft_survey::DraftSurvey;
use sal_sync::services::entity::dbg_id::DbgId;
use survey::{BallastWaterTank, Deductibles, DraftReading, FreshWaterTank, Mark, Marks};
use hydrostatics::{HydrostaticRow, LcfReference, MtcRow};
use vessel::{CorrectionMethod, PpDirection, VesselClass, VesselData};
pub use error::Error;
//
mod density;
mod displacement;
mod draft_survey;
mod draught;
mod error;
mod hydrostatics;
mod list;
mod math;
mod survey;
mod trim;
mod vessel;
//
fn main() {
    let vessel = VesselData {
        name: "ATLANTIC TRADER".to_owned(),
        lbp: 182.000,
        distance_pp_fwd: 1.400,
        pp_fwd_direction: PpDirection::Aft,
        distance_pp_mid: 0.400,
        pp_mid_direction: PpDirection::Aft,
        distance_pp_aft: 9.950,
        pp_aft_direction: PpDirection::Forward,
        vessel_class: VesselClass::Marine,
        correction_method: CorrectionMethod::FullLbp,
        ..Default::default()
    };
    let reading = DraftReading {
        marks: Marks {
            fwd_port: Mark::new(3.41),
            fwd_starboard: Mark::new(3.41),
            mid_port: Mark::new(4.51),
            mid_starboard: Mark::new(4.54),
            aft_port: Mark::new(5.69),
            aft_starboard: Mark::new(5.70),
        },
        ballast_tanks: vec![BallastWaterTank {
            name: "FPT".to_owned(),
            sounding: 10347.899,
            volume: 10347.899,
            density: 1.025,
        }],
        fresh_tanks: vec![FreshWaterTank {
            name: "FW P".to_owned(),
            sounding: 364.000,
            volume: 364.000,
        }],
        deductibles: Deductibles {
            hfo: 683.868,
            mdo: 89.130,
            ..Default::default()
        },
        density: 1.023,
        tpc_list_port: 49.665,
        tpc_list_starboard: 49.688,
        hydrostatic_rows: vec![
            HydrostaticRow {
                draft: 4.54,
                displacement: 21226.0,
                tpc: 49.7,
                lcf: 6.93,
                lcf_reference: LcfReference::Forward,
            },
            HydrostaticRow {
                draft: 4.55,
                displacement: 21276.0,
                tpc: 49.7,
                lcf: 6.92,
                lcf_reference: LcfReference::Forward,
            },
        ],
        mtc_rows: vec![
            MtcRow {
                draft: 4.04,
                mtc: 529.4,
            },
            MtcRow {
                draft: 5.04,
                mtc: 548.0,
            },
        ],
        sea_condition: None,
    };
    let survey = DraftSurvey::new(&DbgId("main".to_owned()), vessel);
    let displacement = survey.displacement(&reading).unwrap();
    dbg!(&displacement.net_displacement);
    for (key, value) in displacement.report() {
        println!("{} = {}", key, value);
    }
}
