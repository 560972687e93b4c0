//! rlabel formatting.
//!
//! An rlabel `[r<id>-<suffix>]` uniquely identifies one Responsibility node
//! within a corpus: `<id>` is the node id inside its map, `<suffix>` ties the
//! label back to the map's file. Export wizards embed the store's map id as
//! the trailing digit run of the file name, so the digit suffix is the
//! compact default; hand-saved maps without digits need full-file-name mode.

use std::path::Path;

use regex::Regex;

use crate::error::{Result, SsmError};

/// How the per-map part of an rlabel is derived from the file name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SuffixMode {
    /// Last run of decimal digits anywhere in the file name.
    #[default]
    TrailingDigits,
    /// Whole file name with the extension stripped.
    FullFileName,
}

/// Extract the per-map suffix from a file name.
pub fn label_suffix(file_name: &str, mode: SuffixMode) -> Result<String> {
    match mode {
        SuffixMode::FullFileName => {
            let base = Path::new(file_name)
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or(file_name);
            Ok(base.to_string())
        }
        SuffixMode::TrailingDigits => {
            let digits = Regex::new(r"\d+").expect("Invalid regex pattern");
            digits
                .find_iter(file_name)
                .last()
                .map(|m| m.as_str().to_string())
                .ok_or_else(|| {
                    SsmError::Format(format!(
                        "no digits in file name \"{}\" (use full-filename mode)",
                        file_name
                    ))
                })
        }
    }
}

/// Render an rlabel from a Responsibility id and a precomputed suffix.
pub fn format_rlabel(r_id: i64, suffix: &str) -> String {
    format!("[r{}-{}]", r_id, suffix)
}

/// Convenience: suffix extraction and rendering in one step.
pub fn build_rlabel(file_name: &str, r_id: i64, mode: SuffixMode) -> Result<String> {
    Ok(format_rlabel(r_id, &label_suffix(file_name, mode)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_suffix_simple() {
        assert_eq!(label_suffix("map-7.json", SuffixMode::TrailingDigits).unwrap(), "7");
    }

    #[test]
    fn test_digit_suffix_takes_last_run() {
        assert_eq!(
            label_suffix("ssm12-34.json", SuffixMode::TrailingDigits).unwrap(),
            "34"
        );
        assert_eq!(
            label_suffix("2019-export-108.json", SuffixMode::TrailingDigits).unwrap(),
            "108"
        );
    }

    #[test]
    fn test_digit_suffix_no_digits_is_format_error() {
        let err = label_suffix("mymap.json", SuffixMode::TrailingDigits).unwrap_err();
        assert!(matches!(err, SsmError::Format(_)));
        assert!(err.to_string().contains("mymap.json"));
    }

    #[test]
    fn test_full_filename_strips_extension() {
        assert_eq!(
            label_suffix("local copy.json", SuffixMode::FullFileName).unwrap(),
            "local copy"
        );
        assert_eq!(label_suffix("map-7.json", SuffixMode::FullFileName).unwrap(), "map-7");
    }

    #[test]
    fn test_format_rlabel() {
        assert_eq!(format_rlabel(3, "42"), "[r3-42]");
        assert_eq!(format_rlabel(0, "local copy"), "[r0-local copy]");
    }

    #[test]
    fn test_build_rlabel() {
        assert_eq!(
            build_rlabel("map-7.json", 1, SuffixMode::TrailingDigits).unwrap(),
            "[r1-7]"
        );
        assert_eq!(
            build_rlabel("map-7.json", 1, SuffixMode::FullFileName).unwrap(),
            "[r1-map-7]"
        );
    }
}
