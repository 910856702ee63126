use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};

use anyhow::{anyhow, Context};
use camino::{Utf8Path, Utf8PathBuf};

use crate::CodecStdError;

/// Interact with a file system
#[derive(Default, Debug, Copy, Clone)]
pub struct Fs {}

impl Fs {
    /// reads a file from disk
    pub fn read_file<P>(path: P) -> Result<String, CodecStdError>
    where
        P: AsRef<Utf8Path>,
    {
        let path = path.as_ref();
        match fs::metadata(path) {
            Ok(metadata) => {
                if metadata.is_file() {
                    tracing::info!("reading {} from disk", &path);
                    let contents = fs::read_to_string(path)
                        .with_context(|| format!("could not read {}", &path))?;
                    if contents.is_empty() {
                        Err(CodecStdError::EmptyFile {
                            empty_file: path.to_string(),
                        })
                    } else {
                        Ok(contents)
                    }
                } else {
                    Err(anyhow!("'{}' is not a file", path).into())
                }
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Err(CodecStdError::NotFound {
                path: path.to_string(),
            }),
            Err(e) => Err(anyhow!("could not read '{}'", path).context(e).into()),
        }
    }

    /// writes a file to disk, creating any missing parent directories
    pub fn write_file<P, C>(path: P, contents: C) -> Result<(), CodecStdError>
    where
        P: AsRef<Utf8Path>,
        C: AsRef<[u8]>,
    {
        let path = path.as_ref();
        tracing::info!("checking existence of parent path in '{}'", path);

        let file_name = path.file_name().ok_or(anyhow!(
            "cannot write to a path without a final element {path}"
        ))?;

        // The file itself may not exist yet, so only its parent is canonicalized.
        let mut canonical_final_path = match path.parent() {
            Some(parent) if parent.as_str().is_empty() => Utf8PathBuf::from("."),
            Some(parent) => Self::upsert_path_exists(parent)?,
            None => return Err(anyhow!("cannot write file to root or prefix {path}").into()),
        };
        canonical_final_path.push(file_name);

        tracing::debug!("final canonical path is {}", canonical_final_path);
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .with_context(|| {
                format!(
                    "tried to open {} but was unable to do so",
                    &canonical_final_path
                )
            })?;
        tracing::info!("writing {} to disk", &canonical_final_path);
        file.write_all(contents.as_ref())
            .with_context(|| format!("could not write {}", &canonical_final_path))?;
        Ok(())
    }

    /// Whether `path` exists and is a regular file.
    pub fn is_file<P>(path: P) -> bool
    where
        P: AsRef<Utf8Path>,
    {
        path.as_ref().is_file()
    }

    /// Given a path, where some elements may not exist, it will return the canonical
    /// representation of the path, AND create any missing interim directories.
    fn upsert_path_exists(path: &Utf8Path) -> Result<Utf8PathBuf, anyhow::Error> {
        tracing::debug!("attempting to canonicalize parent path '{path}'");
        if let Err(e) = path.canonicalize_utf8() {
            match e.kind() {
                ErrorKind::NotFound => {
                    tracing::debug!(
                        "could not canonicalize parent path '{}', attempting to create interim paths",
                        path
                    );
                    fs::create_dir_all(path).with_context(|| {
                        format!("{} does not exist and it could not be created", &path)
                    })?;
                    tracing::debug!("interim paths created for {}", path);
                }
                ErrorKind::PermissionDenied => {
                    return Err(anyhow!(
                        "cannot write file to path {} as user does not have permissions to do so",
                        path
                    ))
                }
                _ => {}
            }
        }
        path.canonicalize_utf8().map_err(|e| anyhow!(e))
    }
}

#[cfg(test)]
mod tests {
    use camino::Utf8PathBuf;
    use rstest::rstest;
    use speculoos::prelude::*;
    use tempfile::TempDir;

    use super::*;

    fn temp_root(dir: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("could not create UTF8-Path")
    }

    #[rstest]
    #[case("a/b/c", "a/b/c/schema.graphql", vec!(), false)]
    #[case("a/b", "a/b/c/schema.json", vec!(), false)]
    #[case("/", "schema.graphql", vec!(), false)]
    #[case("/", "abc/def", vec!("abc".to_string()), true)]
    #[case("abc", "abc/def/pqr", vec!("abc/def".to_string()), true)]
    fn test_write_file(
        #[case] existing_path: &str,
        #[case] path_to_create: &str,
        #[case] existing_files: Vec<String>,
        #[case] error_expected: bool,
    ) {
        let bounding_dir = TempDir::new().expect("failed to create temporary directory");
        let root = temp_root(&bounding_dir);
        fs::create_dir_all(root.join(existing_path.trim_start_matches('/')))
            .expect("could not set up test conditions");
        for file_to_create in existing_files.iter() {
            fs::write(root.join(file_to_create), "blah, blah, blah")
                .expect("could not write to file");
        }

        let expected_path = root.join(path_to_create);
        let res = Fs::write_file(&expected_path, "type Query { ok: Boolean }");
        if error_expected {
            assert_that(&res).is_err();
        } else {
            assert_that(&res).is_ok();
            assert_that(&expected_path.as_std_path()).exists();
        }
    }

    #[test]
    fn it_reads_back_what_it_wrote() {
        let dir = TempDir::new().expect("failed to create temporary directory");
        let path = temp_root(&dir).join("schema.graphql");
        Fs::write_file(&path, "type Query { ok: Boolean }").unwrap();

        assert_that!(Fs::read_file(&path).unwrap()).is_equal_to("type Query { ok: Boolean }".to_string());
        assert_that!(Fs::is_file(&path)).is_true();
    }

    #[test]
    fn it_reports_missing_files_as_not_found() {
        let dir = TempDir::new().expect("failed to create temporary directory");
        let path = temp_root(&dir).join("missing.json");

        assert_that!(Fs::read_file(&path))
            .is_err()
            .matches(|err| matches!(err, CodecStdError::NotFound { .. }));
    }

    #[test]
    fn it_rejects_empty_files() {
        let dir = TempDir::new().expect("failed to create temporary directory");
        let path = temp_root(&dir).join("empty.graphql");
        fs::write(&path, "").unwrap();

        assert_that!(Fs::read_file(&path))
            .is_err()
            .matches(|err| matches!(err, CodecStdError::EmptyFile { .. }));
    }

    #[test]
    fn it_refuses_to_read_directories() {
        let dir = TempDir::new().expect("failed to create temporary directory");
        assert_that!(Fs::read_file(temp_root(&dir)))
            .is_err()
            .matches(|err| matches!(err, CodecStdError::AdhocError(_)));
    }
}
