use deepoct_core::models::biomarkers::{AnalysisResult, RetinalThickness};
use deepoct_forms::binder::{
    ClinicianFindings, ClinicianInputs, FormValues, SLOT_COUNT, apply_clinician, bind,
    central_from_edtrs, format_edtrs, reconstruct, slots, validate,
};
use deepoct_forms::error::FormError;

fn sample_analysis() -> AnalysisResult {
    let mut analysis = AnalysisResult::default();
    let left = &mut analysis.left_eye;
    left.dril.status = "Présente".into();
    left.oedeme.status = "Présent".into();
    left.oedeme.nb_logette = "3".into();
    left.oedeme.taille = "Grande".into();
    left.oedeme.localisation = "fovéolaire".into();
    left.mle = "Partiellement interrompue".into();
    left.briding = "Présent".into();
    left.epaisseur_retinienne = RetinalThickness {
        central: "310".into(),
        superieur: "295".into(),
        nasal: "280".into(),
        ..RetinalThickness::default()
    };

    let right = &mut analysis.right_eye;
    right.oedeme.nb_logette = "5".into();
    right.oedeme.taille = "petite".into();
    right.points_hyperreflectifs.status = "Présents".into();
    analysis
}

fn clinician() -> ClinicianInputs {
    ClinicianInputs {
        left: ClinicianFindings {
            briding: "Absent".into(),
            decollement: "Présent".into(),
        },
        right: ClinicianFindings {
            briding: "Présent".into(),
            decollement: "Absent".into(),
        },
    }
}

#[test]
fn slots_follow_dashboard_order() {
    let form = bind(&sample_analysis(), &clinician());
    let slots = slots(&form);
    assert_eq!(slots.len(), SLOT_COUNT);
    assert_eq!(SLOT_COUNT, 22);

    let ids: Vec<&str> = slots.iter().map(|(id, _)| id.as_str()).collect();
    assert_eq!(
        ids,
        [
            "dril-left", "oedeme-left", "briding-left", "mle-left", "ze-left", "points-left",
            "decollement-left", "dril-right", "oedeme-right", "briding-right", "mle-right",
            "ze-right", "points-right", "decollement-right", "nb-logette-input-left",
            "nb-logette-input-right", "taille-logette-input-left", "taille-logette-input-right",
            "localisation-input-left", "localisation-input-right", "edtrs-input-left",
            "edtrs-input-right",
        ]
    );
}

#[test]
fn clinician_selection_overrides_analysis() {
    let form = bind(&sample_analysis(), &clinician());
    assert_eq!(form.left.briding, "Absent");
    assert_eq!(form.left.decollement, "Présent");
    assert_eq!(form.right.briding, "Présent");
}

#[test]
fn model_bridging_and_detachment_are_discarded() {
    let mut analysis = sample_analysis();
    analysis.right_eye.decollement = "Présent".into();

    apply_clinician(&mut analysis, &clinician());
    assert_eq!(analysis.left_eye.briding, "Absent");
    assert_eq!(analysis.left_eye.decollement, "Présent");
    assert_eq!(analysis.right_eye.briding, "Présent");
    assert_eq!(analysis.right_eye.decollement, "Absent");

    let mut analysis = sample_analysis();
    apply_clinician(&mut analysis, &ClinicianInputs::default());
    assert_eq!(analysis.left_eye.briding, "Absent");
    assert_eq!(analysis.right_eye.decollement, "Absent");
    assert_eq!(analysis.left_eye.dril.status, "Présente");
}

#[test]
fn cyst_details_only_when_present() {
    let form = bind(&sample_analysis(), &clinician());
    assert_eq!(form.left.nb_logette, "3");
    assert_eq!(form.left.taille, "grande");
    assert_eq!(form.left.localisation, "fovéolaire");

    assert_eq!(form.right.oedeme, "Absent");
    assert_eq!(form.right.nb_logette, "");
    assert_eq!(form.right.taille, "");
}

#[test]
fn edtrs_skips_empty_sectors() {
    let form = bind(&sample_analysis(), &clinician());
    assert_eq!(form.left.edtrs, "Central: 310μm, Supérieur: 295μm, Nasal: 280μm");
    assert_eq!(form.right.edtrs, "");
    assert_eq!(format_edtrs(&RetinalThickness::central_only("250")), "Central: 250μm");
}

#[test]
fn central_is_read_from_first_part() {
    assert_eq!(central_from_edtrs("Central: 310μm, Supérieur: 295μm"), "310μm");
    assert_eq!(central_from_edtrs("  Central :  280 "), "280");
    assert_eq!(central_from_edtrs("310"), "");
    assert_eq!(central_from_edtrs(""), "");
    assert_eq!(central_from_edtrs("310, Nasal: 280μm"), "");
}

#[test]
fn reconstruct_fills_defaults() {
    let analysis = reconstruct(&FormValues::default());
    let eye = &analysis.left_eye;
    assert_eq!(eye.dril.status, "Absente");
    assert_eq!(eye.oedeme.status, "Absent");
    assert_eq!(eye.mle, "Continue");
    assert_eq!(eye.ze, "Continue");
    assert_eq!(eye.points_hyperreflectifs.status, "Absents");
    assert_eq!(eye.briding, "Absent");
    assert_eq!(eye.decollement, "Absent");
    assert_eq!(eye.epaisseur_retinienne, RetinalThickness::default());
    assert_eq!(analysis.right_eye, analysis.left_eye);
}

#[test]
fn reconstruct_keeps_clinician_edits() {
    let mut form = bind(&sample_analysis(), &clinician());
    form.right.mle = "Texte libre".into();

    let analysis = reconstruct(&form);
    assert_eq!(analysis.left_eye.dril.status, "Présente");
    assert_eq!(analysis.left_eye.oedeme.taille, "grande");
    assert_eq!(analysis.left_eye.decollement, "Présent");
    assert_eq!(analysis.left_eye.epaisseur_retinienne.central, "310μm");
    assert_eq!(analysis.left_eye.epaisseur_retinienne.nasal, "");
    assert_eq!(analysis.right_eye.mle, "Texte libre");
    assert_eq!(analysis.right_eye.briding, "Présent");
}

#[test]
fn from_slots_round_trips_ids() {
    let form = bind(&sample_analysis(), &clinician());
    let rebuilt = FormValues::from_slots(slots(&form)).unwrap();
    assert_eq!(rebuilt, form);

    let err = FormValues::from_slots([("dril-center", "Présente")]).unwrap_err();
    assert!(matches!(err, FormError::UnknownSlot(id) if id == "dril-center"));
    assert!(FormValues::from_slots([("pupil-left", "x")]).is_err());
}

#[test]
fn validate_warns_on_unknown_values() {
    let mut form = bind(&sample_analysis(), &clinician());
    assert!(validate(&form).is_empty());

    form.left.mle = "Intacte".into();
    form.left.taille = "énorme".into();
    form.right.taille = "énorme".into();

    let warnings = validate(&form);
    let ids: Vec<&str> = warnings.iter().map(|w| w.slot_id.as_str()).collect();
    assert_eq!(ids, ["taille-logette-input-left", "mle-left"]);
    assert!(warnings[1].message.contains("Intacte"));
}
