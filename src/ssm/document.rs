//! SSM file read/write.

use std::path::Path;

use super::Ssm;
use crate::error::{Result, SsmError};

/// Read and parse one SSM file.
pub fn read_ssm(path: &Path) -> Result<Ssm> {
    let content = std::fs::read_to_string(path).map_err(SsmError::Io)?;
    Ssm::parse(&content, &path.display().to_string())
}

/// Serialize an SSM to a fresh output file. The input file is never touched;
/// a failure here cannot corrupt outputs already written for other maps.
pub fn write_ssm(ssm: &Ssm, path: &Path) -> Result<()> {
    let json = ssm.to_json()?;
    std::fs::write(path, json).map_err(SsmError::Io)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_write_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let in_path = temp_dir.path().join("map-3.json");
        std::fs::write(
            &in_path,
            r#"{"nodes":[{"id":1,"name":"Helps","shape":"rectangle"}],"links":[]}"#,
        )
        .unwrap();

        let ssm = read_ssm(&in_path).unwrap();
        assert_eq!(ssm.nodes.len(), 1);

        let out_path = temp_dir.path().join("map-3-rlabeled.json");
        write_ssm(&ssm, &out_path).unwrap();
        let reread = read_ssm(&out_path).unwrap();
        assert_eq!(reread.nodes[0].name, "Helps");
    }

    #[test]
    fn test_read_missing_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = read_ssm(&temp_dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, SsmError::Io(_)));
    }
}
