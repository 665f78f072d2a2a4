//! Rendered artifacts and how they reach the disk.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// One generated file, fully rendered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Artifact {
    pub file_name: String,
    pub contents: String,
}

impl Artifact {
    pub fn new(file_name: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            contents: contents.into(),
        }
    }
}

/// The builder file and its smoke tests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Artifacts {
    pub builder: Artifact,
    pub tests: Artifact,
}

impl Artifacts {
    pub fn iter(&self) -> impl Iterator<Item = &Artifact> {
        [&self.builder, &self.tests].into_iter()
    }

    /// Writes every artifact into `dir`.
    ///
    /// Each file is first written next to its destination and only renamed into place once
    /// all of them were written. If any write fails the temporaries are removed and existing
    /// files are left alone.
    pub fn write(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let mut staged: Vec<(PathBuf, PathBuf)> = Vec::new();

        for artifact in self.iter() {
            let dest = dir.join(&artifact.file_name);
            let tmp = dir.join(format!(".{}.tmp", artifact.file_name));

            if let Err(err) = fs::write(&tmp, &artifact.contents).map_err(Error::io(&tmp)) {
                _ = fs::remove_file(&tmp);
                discard(&staged);
                return Err(err);
            }
            staged.push((tmp, dest));
        }

        let mut written = Vec::with_capacity(staged.len());
        for (i, (tmp, dest)) in staged.iter().enumerate() {
            if let Err(err) = fs::rename(tmp, dest).map_err(Error::io(dest)) {
                discard(&staged[i..]);
                return Err(err);
            }

            tracing::info!(path = %dest.display(), "wrote generated file");
            written.push(dest.clone());
        }

        Ok(written)
    }

    /// Paths of the artifacts whose contents in `dir` differ from the rendered ones.
    ///
    /// A missing file counts as stale.
    pub fn stale(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let mut stale = Vec::new();

        for artifact in self.iter() {
            let path = dir.join(&artifact.file_name);
            let current = match fs::read_to_string(&path) {
                Ok(current) => Some(current),
                Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
                Err(err) => return Err(Error::io(&path)(err)),
            };

            if current.as_deref() != Some(artifact.contents.as_str()) {
                tracing::warn!(path = %path.display(), "generated file is out of date");
                stale.push(path);
            }
        }

        Ok(stale)
    }
}

fn discard(staged: &[(PathBuf, PathBuf)]) {
    for (tmp, _) in staged {
        if let Err(err) = fs::remove_file(tmp) {
            tracing::debug!(path = %tmp.display(), %err, "failed to remove temporary file");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artifacts() -> Artifacts {
        Artifacts {
            builder: Artifact::new("html_gen.rs", "// builder\n"),
            tests: Artifact::new("html_gen_test.rs", "// tests\n"),
        }
    }

    fn entries(dir: &Path) -> Vec<String> {
        let mut names: Vec<_> = fs::read_dir(dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn write_then_nothing_is_stale() {
        let dir = tempfile::tempdir().unwrap();
        let artifacts = artifacts();

        assert_eq!(artifacts.stale(dir.path()).unwrap().len(), 2);

        let written = artifacts.write(dir.path()).unwrap();
        assert_eq!(written.len(), 2);
        assert_eq!(entries(dir.path()), ["html_gen.rs", "html_gen_test.rs"]);
        assert!(artifacts.stale(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn edited_files_are_stale() {
        let dir = tempfile::tempdir().unwrap();
        let artifacts = artifacts();
        artifacts.write(dir.path()).unwrap();

        fs::write(dir.path().join("html_gen_test.rs"), "// edited\n").unwrap();
        assert_eq!(
            artifacts.stale(dir.path()).unwrap(),
            [dir.path().join("html_gen_test.rs")]
        );
    }

    #[test]
    fn failed_write_leaves_no_files() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");

        let err = artifacts().write(&missing).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
        assert!(entries(dir.path()).is_empty());
    }
}
