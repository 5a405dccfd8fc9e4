//! Canonical spellings of the closed biomarker vocabularies.
//!
//! Record fields stay plain strings: these constants are the values the
//! normalizer canonicalizes towards, not a guarantee about what a record holds.

/// Eye keys as they appear in analysis JSON.
pub const LEFT_EYE: &str = "left_eye";
pub const RIGHT_EYE: &str = "right_eye";

pub mod dril {
    pub const PRESENT: &str = "Présente";
    pub const ABSENT: &str = "Absente";
}

/// Intraretinal cyst (stored under the `oedeme` key).
pub mod oedeme {
    pub const PRESENT: &str = "Présent";
    pub const ABSENT: &str = "Absent";

    pub const SIZES: [&str; 3] = ["petite", "grande", "volumineuse"];
    pub const LOCATIONS: [&str; 2] = ["fovéolaire", "parafovéolaire"];
}

/// External limiting membrane and ellipsoid zone.
pub mod membrane {
    pub const CONTINUOUS: &str = "Continue";
    pub const PARTIAL: &str = "Partiellement interrompue";
    pub const COMPLETE: &str = "Complètement interrompue";

    pub const ALL: [&str; 3] = [CONTINUOUS, PARTIAL, COMPLETE];
}

pub mod points {
    pub const PRESENT: &str = "Présents";
    pub const ABSENT: &str = "Absents";

    pub const LOCATIONS: [&str; 2] = ["intrarétinien", "choroïdien"];
}

/// Bridging and serous retinal detachment, both set by the clinician.
pub mod clinician {
    pub const PRESENT: &str = "Présent";
    pub const ABSENT: &str = "Absent";
}

/// ETDRS sector keys, in display order.
pub const THICKNESS_SECTORS: [&str; 5] = ["central", "superieur", "inferieur", "nasal", "temporal"];

/// Human labels for [`THICKNESS_SECTORS`], same order.
pub const THICKNESS_SECTOR_LABELS: [&str; 5] =
    ["Central", "Supérieur", "Inférieur", "Nasal", "Temporal"];
