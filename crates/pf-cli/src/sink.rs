//! Report artifact writing.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

/// Filename timestamp format, second precision.
const STAMP_FORMAT: &str = "%Y.%m.%d-%H.%M.%S";

/// Builds the artifact filename, e.g. `patient-report-[2023.01.05-08.00.00].csv`.
///
/// The wall-clock instant is an argument so callers (and tests) control it.
#[must_use]
pub fn artifact_name(report_name: &str, now: DateTime<Local>) -> String {
    format!("{report_name}-[{}].csv", now.format(STAMP_FORMAT))
}

/// Writes the rendered report into `output_dir` under a timestamped name.
pub fn write_report(
    report: &str,
    report_name: &str,
    output_dir: &Path,
    now: DateTime<Local>,
) -> io::Result<PathBuf> {
    let path = output_dir.join(artifact_name(report_name, now));
    fs::write(&path, report)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_clock() -> DateTime<Local> {
        Local.with_ymd_and_hms(2023, 1, 5, 8, 0, 0).unwrap()
    }

    #[test]
    fn artifact_name_embeds_second_precision_stamp() {
        assert_eq!(
            artifact_name("patient-report", fixed_clock()),
            "patient-report-[2023.01.05-08.00.00].csv"
        );
    }

    #[test]
    fn writes_report_into_output_dir() {
        let temp = tempfile::tempdir().unwrap();
        let path = write_report("line one\n", "ward7", temp.path(), fixed_clock()).unwrap();

        assert_eq!(path, temp.path().join("ward7-[2023.01.05-08.00.00].csv"));
        assert_eq!(fs::read_to_string(path).unwrap(), "line one\n");
    }

    #[test]
    fn missing_output_dir_reports_failure() {
        let temp = tempfile::tempdir().unwrap();
        let gone = temp.path().join("nonexistent");
        assert!(write_report("x", "r", &gone, fixed_clock()).is_err());
    }
}
