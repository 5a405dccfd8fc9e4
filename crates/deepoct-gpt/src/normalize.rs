//! Coerce a loosely structured model reply into an [`AnalysisResult`].
//!
//! Every path is total: unparseable text, an `error` key, a missing eye or a
//! missing field all end in the documented defaults. Status, size and membrane
//! values are canonicalized towards [`deepoct_core::vocab`]; anything that
//! cannot be mapped is kept as received.

use serde_json::{Map, Value};
use tracing::{debug, warn};

use deepoct_core::models::biomarkers::{AnalysisResult, BiomarkerRecord, Eye, RetinalThickness};
use deepoct_core::vocab::{self, THICKNESS_SECTORS};

/// Keys a complete eye object carries.
const EYE_FIELDS: [&str; 8] = [
    "dril",
    "oedeme",
    "mle",
    "ze",
    "points_hyperreflectifs",
    "epaisseur_retinienne",
    "briding",
    "decollement",
];

const SIZE_SYNONYMS: [(&str, &str); 8] = [
    ("small", "petite"),
    ("medium", "grande"),
    ("large", "volumineuse"),
    ("petit", "petite"),
    ("grand", "grande"),
    ("<100", "petite"),
    ("100-200", "grande"),
    (">200", "volumineuse"),
];

/// Remove a markdown code fence around the reply, if any.
///
/// A ```` ```json ```` fence wins over a plain one. Without a fence the trimmed
/// text is returned.
pub fn strip_code_fences(text: &str) -> &str {
    let text = text.trim();
    let fenced = text
        .split_once("```json")
        .or_else(|| text.split_once("```"))
        .map(|(_, rest)| rest.split_once("```").map_or(rest, |(inner, _)| inner));
    fenced.unwrap_or(text).trim()
}

/// Normalize raw reply text. Never fails.
pub fn normalize_response(raw: &str) -> AnalysisResult {
    let body = strip_code_fences(raw);
    match serde_json::from_str::<Value>(body) {
        Ok(value) => normalize_value(&value),
        Err(e) => {
            warn!(error = %e, "model reply is not valid JSON, using default analysis");
            AnalysisResult::default()
        }
    }
}

/// Normalize an already parsed reply.
pub fn normalize_value(value: &Value) -> AnalysisResult {
    let Some(object) = value.as_object() else {
        warn!("model reply is not a JSON object, using default analysis");
        return AnalysisResult::default();
    };
    if let Some(error) = object.get("error") {
        warn!(error = %error, "model reply reports an error, using default analysis");
        return AnalysisResult::default();
    }

    let mut result = AnalysisResult::default();
    for eye in Eye::BOTH {
        match object.get(eye.key()).and_then(Value::as_object) {
            Some(fields) => *result.eye_mut(eye) = normalize_eye(eye, fields),
            None => debug!(eye = eye.key(), "eye missing from reply, using default record"),
        }
    }
    result
}

fn normalize_eye(eye: Eye, fields: &Map<String, Value>) -> BiomarkerRecord {
    for key in EYE_FIELDS {
        if !fields.contains_key(key) {
            debug!(eye = eye.key(), field = key, "field missing, using default");
        }
    }

    let mut record = BiomarkerRecord::default();

    if let Some(value) = fields.get("dril") {
        let (status, details) = status_object(value);
        if let Some(status) = status {
            record.dril.status = canonical_status(&status, vocab::dril::PRESENT, vocab::dril::ABSENT);
        }
        if let Some(extent) = sub_field(details, "extent") {
            record.dril.extent = extent;
        }
    }

    if let Some(value) = fields.get("oedeme") {
        let (status, details) = status_object(value);
        let oedeme = &mut record.oedeme;
        if let Some(status) = status {
            oedeme.status = canonical_status(&status, vocab::oedeme::PRESENT, vocab::oedeme::ABSENT);
        }
        if let Some(count) = sub_field(details, "nb_logette") {
            oedeme.nb_logette = count;
        }
        if let Some(size) = sub_field(details, "taille") {
            oedeme.taille = canonical_size(&size);
        }
        if let Some(location) = sub_field(details, "localisation") {
            oedeme.localisation = location;
        }
    }

    for (key, slot) in [("mle", &mut record.mle), ("ze", &mut record.ze)] {
        if let Some(value) = fields.get(key).and_then(scalar_text) {
            *slot = canonical_membrane(value);
        }
    }

    if let Some(value) = fields.get("points_hyperreflectifs") {
        let (status, details) = status_object(value);
        let points = &mut record.points_hyperreflectifs;
        if let Some(status) = status {
            points.status = canonical_status(&status, vocab::points::PRESENT, vocab::points::ABSENT);
        }
        if let Some(count) = sub_field(details, "nombre") {
            points.nombre = count;
        }
        if let Some(location) = sub_field(details, "localisation") {
            points.localisation = location;
        }
    }

    match fields.get("epaisseur_retinienne") {
        Some(Value::Object(sectors)) => {
            for key in THICKNESS_SECTORS {
                let value = sectors.get(key).and_then(scalar_text);
                if let (Some(value), Some(slot)) =
                    (value, record.epaisseur_retinienne.sector_mut(key))
                {
                    *slot = value;
                }
            }
        }
        Some(other) => {
            if let Some(central) = scalar_text(other) {
                record.epaisseur_retinienne = RetinalThickness::central_only(central);
            }
        }
        None => {}
    }

    for (key, slot) in [
        ("briding", &mut record.briding),
        ("decollement", &mut record.decollement),
    ] {
        if let Some(value) = fields.get(key).and_then(scalar_text) {
            *slot = value;
        }
    }

    record
}

// ── Canonicalization ─────────────────────────────────────────────────────────

/// Map a presence status onto its two accepted spellings.
///
/// The value is capitalized first. If that is neither `affirmative` nor
/// `negative`, a lower-case `present` substring selects `affirmative` and
/// anything else selects `negative`.
pub fn canonical_status(value: &str, affirmative: &str, negative: &str) -> String {
    let capitalized = capitalize(value);
    if capitalized == affirmative || capitalized == negative {
        return capitalized;
    }
    if capitalized.to_lowercase().contains("present") {
        affirmative.to_string()
    } else {
        negative.to_string()
    }
}

/// Lower-case a cyst size and map English and numeric synonyms.
pub fn canonical_size(value: &str) -> String {
    let lowered = value.to_lowercase();
    SIZE_SYNONYMS
        .iter()
        .find(|(token, _)| *token == lowered)
        .map_or(lowered, |(_, size)| size.to_string())
}

/// Map a membrane description onto the three integrity levels.
///
/// Matching is by substring, checked in the order continu, partiel, complet.
/// Unmatched values are returned unchanged.
pub fn canonical_membrane(value: String) -> String {
    let lowered = value.to_lowercase();
    let level = if lowered.contains("continu") {
        vocab::membrane::CONTINUOUS
    } else if lowered.contains("partiel") {
        vocab::membrane::PARTIAL
    } else if lowered.contains("complet") {
        vocab::membrane::COMPLETE
    } else {
        return value;
    };
    level.to_string()
}

/// First character upper-cased, the rest lower-cased.
fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

// ── JSON helpers ─────────────────────────────────────────────────────────────

/// Text form of a scalar. Null, arrays and objects have none.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Split a `{status, ..}` biomarker. A bare scalar is read as the status.
fn status_object(value: &Value) -> (Option<String>, Option<&Map<String, Value>>) {
    match value {
        Value::Object(map) => (map.get("status").and_then(scalar_text), Some(map)),
        other => (scalar_text(other), None),
    }
}

fn sub_field(details: Option<&Map<String, Value>>, key: &str) -> Option<String> {
    details.and_then(|d| d.get(key)).and_then(scalar_text)
}
