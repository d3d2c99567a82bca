//! The requirements file listing modules that could not be installed.

use std::fs;
use std::path::Path;

use crate::error::{LaunchpadError, Result};

/// Default requirements file name.
pub const DEFAULT_MANIFEST: &str = "requirements.txt";

/// Render names one per line.
pub fn render<S: AsRef<str>>(names: &[S]) -> String {
    names
        .iter()
        .map(|name| format!("{}\n", name.as_ref()))
        .collect()
}

/// Overwrite `path` with `names`, one per line.
pub fn write<S: AsRef<str>>(path: &Path, names: &[S]) -> Result<()> {
    fs::write(path, render(names)).map_err(|source| LaunchpadError::Manifest {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn render_one_name_per_line() {
        assert_eq!(render(&["openpyxl", "requests"]), "openpyxl\nrequests\n");
        assert_eq!(render::<&str>(&[]), "");
    }

    #[test]
    fn write_overwrites_previous_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(DEFAULT_MANIFEST);
        fs::write(&path, "old\nstale\nentries\n").unwrap();

        write(&path, &["requests"]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "requests\n");
    }

    #[test]
    fn write_failure_names_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("no-such-dir").join(DEFAULT_MANIFEST);
        let err = write(&path, &["requests"]).unwrap_err();
        assert!(matches!(err, LaunchpadError::Manifest { .. }));
        assert!(err.to_string().contains("no-such-dir"));
    }
}
