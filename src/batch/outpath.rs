//! Output file naming for the labeling and recode passes.

/// Stage suffix carried by already-labeled files. Recognized on input so it
/// is replaced, never duplicated.
const RLABELED: &str = "-rlabeled";

fn strip_json_extension(file_name: &str) -> &str {
    file_name
        .strip_suffix(".json")
        .or_else(|| file_name.strip_suffix(".JSON"))
        .unwrap_or(file_name)
}

fn suffixed_name(file_name: &str, stage: &str) -> String {
    let stem = strip_json_extension(file_name);
    let stem = stem.strip_suffix(RLABELED).unwrap_or(stem);
    format!("{}{}.json", stem, stage)
}

/// Output name for the labeling pass: `map-7.json` → `map-7-rlabeled.json`.
pub fn rlabeled_output_name(file_name: &str) -> String {
    suffixed_name(file_name, "-rlabeled")
}

/// Output name for the recode pass: `map-7-rlabeled.json` → `map-7-rcoded.json`.
pub fn rcoded_output_name(file_name: &str) -> String {
    suffixed_name(file_name, "-rcoded")
}
