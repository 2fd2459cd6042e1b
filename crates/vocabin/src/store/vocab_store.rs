//! # Vocabulary Artifact Store

use std::{
    fs::{self, File},
    io::{BufReader, BufWriter, ErrorKind, Write},
    path::{Path, PathBuf},
};

use crate::{
    errors::{VBResult, VocabinError},
    store::path_resolver::{PathResolver, VOCABIN_PATH_CONFIG},
    vocab::{
        Vocabulary,
        io::{RankPolicy, encode_base64_vocab, read_base64_vocab},
    },
};

fn read_error(
    path: &Path,
    source: std::io::Error,
) -> VocabinError {
    if source.kind() == ErrorKind::NotFound {
        VocabinError::ResourceNotFound {
            path: path.to_path_buf(),
        }
    } else {
        VocabinError::ResourceUnreadable {
            path: path.to_path_buf(),
            source,
        }
    }
}

fn write_error(
    path: &Path,
    err: VocabinError,
) -> VocabinError {
    match err {
        VocabinError::Io(source) => VocabinError::ResourceWriteFailed {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    }
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = std::ffi::OsString::from(".");
    name.push(path.file_name().unwrap_or_default());
    name.push(".tmp");
    path.with_file_name(name)
}

/// Read an entire vocab resource into memory.
///
/// ## Errors
/// * [`VocabinError::ResourceNotFound`] if `path` does not exist.
/// * [`VocabinError::ResourceUnreadable`] on any other read failure.
pub fn load_vocab_bytes<P: AsRef<Path>>(path: P) -> VBResult<Vec<u8>> {
    let path = path.as_ref();
    let data = fs::read(path).map_err(|e| read_error(path, e))?;
    log::debug!("loaded {} bytes from {}", data.len(), path.display());
    Ok(data)
}

/// Open a buffered reader over a vocab resource.
///
/// Errors are mapped as in [`load_vocab_bytes`].
pub fn open_vocab_reader<P: AsRef<Path>>(path: P) -> VBResult<BufReader<File>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| read_error(path, e))?;
    Ok(BufReader::new(file))
}

/// Write a vocab resource through `write`, replacing any existing resource.
///
/// Output goes to a sibling temporary file which is renamed over `path`
/// once `write` succeeds; on any failure the temporary is removed and
/// `path` is left untouched.
///
/// ## Errors
/// I/O failures become [`VocabinError::ResourceWriteFailed`]; other
/// errors from `write` are returned unchanged.
pub fn save_vocab_with<P, F>(
    path: P,
    write: F,
) -> VBResult<()>
where
    P: AsRef<Path>,
    F: FnOnce(&mut BufWriter<File>) -> VBResult<()>,
{
    let path = path.as_ref();
    let tmp = temp_path_for(path);

    let result = (|| -> VBResult<()> {
        let mut writer = BufWriter::new(File::create(&tmp)?);
        write(&mut writer)?;
        writer.into_inner().map_err(|e| e.into_error())?.sync_all()?;
        fs::rename(&tmp, path)?;
        Ok(())
    })();

    if let Err(err) = result {
        let _ = fs::remove_file(&tmp);
        return Err(write_error(path, err));
    }
    Ok(())
}

/// Write an entire buffer as a vocab resource.
///
/// See [`save_vocab_with`].
pub fn save_vocab_bytes<P: AsRef<Path>>(
    path: P,
    data: &[u8],
) -> VBResult<()> {
    let path = path.as_ref();
    save_vocab_with(path, |w| Ok(w.write_all(data)?))?;
    log::debug!("saved {} bytes to {}", data.len(), path.display());
    Ok(())
}

/// Load and parse a text (``.tiktoken``) vocab resource.
///
/// ## Errors
/// * [`VocabinError::ResourceNotFound`] if `path` does not exist.
/// * [`VocabinError::ResourceUnreadable`] if opening or reading fails,
///   including part way through the file.
/// * Line errors from [`read_base64_vocab`] under `policy`.
pub fn load_vocab_text<P: AsRef<Path>>(
    path: P,
    policy: RankPolicy,
) -> VBResult<Vocabulary> {
    let path = path.as_ref();
    let reader = open_vocab_reader(path)?;
    let vocab = read_base64_vocab(reader, policy).map_err(|e| match e {
        VocabinError::Io(source) => read_error(path, source),
        other => other,
    })?;
    log::debug!("parsed {} text entries from {}", vocab.len(), path.display());
    Ok(vocab)
}

/// Save a [`Vocabulary`] as a text vocab resource.
///
/// Returns the number of bytes written. Zero-length tokens are written as
/// lines with an empty token field; see [`read_base64_vocab`].
///
/// See [`save_vocab_with`].
pub fn save_vocab_text<P: AsRef<Path>>(
    path: P,
    vocab: &Vocabulary,
) -> VBResult<usize> {
    let text = encode_base64_vocab(vocab);
    save_vocab_bytes(path, text.as_bytes())?;
    Ok(text.len())
}

/// Locator-resolving front for the vocab load/save functions.
#[derive(Debug, Clone, Default)]
pub struct VocabStore {
    resolver: PathResolver,
    data_dir: Option<PathBuf>,
}

impl VocabStore {
    /// Build a store with the default [`PathResolver`].
    pub fn new() -> Self {
        Self {
            resolver: VOCABIN_PATH_CONFIG,
            data_dir: None,
        }
    }

    /// Use a custom [`PathResolver`].
    pub fn with_resolver(
        mut self,
        resolver: PathResolver,
    ) -> Self {
        self.resolver = resolver;
        self
    }

    /// Override the data directory used for relative locators.
    pub fn with_data_dir<P: Into<PathBuf>>(
        mut self,
        data_dir: Option<P>,
    ) -> Self {
        self.data_dir = data_dir.map(Into::into);
        self
    }

    /// Resolve a locator to a path.
    pub fn resolve<L: AsRef<Path>>(
        &self,
        locator: L,
    ) -> PathBuf {
        self.resolver
            .resolve_locator(locator, self.data_dir.as_deref())
    }

    /// Load the resource at `locator`.
    pub fn load<L: AsRef<Path>>(
        &self,
        locator: L,
    ) -> VBResult<Vec<u8>> {
        load_vocab_bytes(self.resolve(locator))
    }

    /// Save `data` as the resource at `locator`.
    pub fn save<L: AsRef<Path>>(
        &self,
        locator: L,
        data: &[u8],
    ) -> VBResult<()> {
        save_vocab_bytes(self.resolve(locator), data)
    }
}

#[cfg(test)]
mod tests {
    use std::io::BufRead;

    use super::*;

    #[test]
    fn test_save_load_bytes() {
        let dir = tempdir::TempDir::new("vocab_store").unwrap();
        let path = dir.path().join("vocab.bin");

        save_vocab_bytes(&path, &[1, b'A', 2, b'B', b'C']).unwrap();
        assert_eq!(load_vocab_bytes(&path).unwrap(), vec![1, b'A', 2, b'B', b'C']);

        // Overwrite.
        save_vocab_bytes(&path, &[0]).unwrap();
        assert_eq!(load_vocab_bytes(&path).unwrap(), vec![0]);

        assert!(!temp_path_for(&path).exists());
    }

    #[test]
    fn test_load_missing() {
        let dir = tempdir::TempDir::new("vocab_store").unwrap();
        let path = dir.path().join("missing.bin");

        match load_vocab_bytes(&path) {
            Err(VocabinError::ResourceNotFound { path: p }) => assert_eq!(p, path),
            other => panic!("unexpected: {other:?}"),
        }
        assert!(matches!(
            open_vocab_reader(&path),
            Err(VocabinError::ResourceNotFound { .. })
        ));
    }

    #[test]
    fn test_load_unreadable() {
        let dir = tempdir::TempDir::new("vocab_store").unwrap();

        // Reading a directory is an I/O failure, not a missing resource.
        assert!(matches!(
            load_vocab_bytes(dir.path()),
            Err(VocabinError::ResourceUnreadable { .. })
        ));
    }

    #[test]
    fn test_save_write_failed() {
        let dir = tempdir::TempDir::new("vocab_store").unwrap();
        let path = dir.path().join("no_such_dir").join("vocab.bin");

        match save_vocab_bytes(&path, &[1, 2, 3]) {
            Err(VocabinError::ResourceWriteFailed { path: p, .. }) => assert_eq!(p, path),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_failed_writer_leaves_target() {
        let dir = tempdir::TempDir::new("vocab_store").unwrap();
        let path = dir.path().join("vocab.bin");
        save_vocab_bytes(&path, &[9]).unwrap();

        let result = save_vocab_with(&path, |w| {
            w.write_all(&[1, 2, 3])?;
            Err(VocabinError::TokenTooLong { rank: 0, len: 256 })
        });
        assert!(matches!(result, Err(VocabinError::TokenTooLong { .. })));

        assert_eq!(load_vocab_bytes(&path).unwrap(), vec![9]);
        assert!(!temp_path_for(&path).exists());
    }

    #[test]
    fn test_save_load_text() {
        let dir = tempdir::TempDir::new("vocab_store").unwrap();
        let path = dir.path().join("vocab.tiktoken");

        let vocab = Vocabulary::from_token_bytes(vec![b"A".to_vec(), b"BC".to_vec()]);
        let size = save_vocab_text(&path, &vocab).unwrap();
        assert_eq!(size, 14);
        assert_eq!(fs::read_to_string(&path).unwrap(), "QQ== 0\nQkM= 1\n");

        let loaded = load_vocab_text(&path, RankPolicy::Strict).unwrap();
        assert_eq!(loaded, vocab);
        assert!(!temp_path_for(&path).exists());
    }

    #[test]
    fn test_load_text_errors() {
        let dir = tempdir::TempDir::new("vocab_store").unwrap();
        let path = dir.path().join("vocab.tiktoken");

        match load_vocab_text(&path, RankPolicy::Ignore) {
            Err(VocabinError::ResourceNotFound { path: p }) => assert_eq!(p, path),
            other => panic!("unexpected: {other:?}"),
        }

        // Invalid utf-8 is a read failure of the resource.
        fs::write(&path, [0xFF, 0xFE, b' ', b'0', b'\n']).unwrap();
        assert!(matches!(
            load_vocab_text(&path, RankPolicy::Ignore),
            Err(VocabinError::ResourceUnreadable { .. })
        ));

        // Parse errors pass through.
        fs::write(&path, "QQ== 3\n").unwrap();
        assert!(matches!(
            load_vocab_text(&path, RankPolicy::Strict),
            Err(VocabinError::RankMismatch { line: 1, .. })
        ));

        assert!(matches!(
            load_vocab_text(dir.path(), RankPolicy::Ignore),
            Err(VocabinError::ResourceUnreadable { .. })
        ));
    }

    #[test]
    fn test_store_data_dir() {
        let dir = tempdir::TempDir::new("vocab_store").unwrap();
        let store = VocabStore::new().with_data_dir(Some(dir.path()));

        store.save("named.bin", &[1, b'x']).unwrap();
        assert!(dir.path().join("named.bin").exists());
        assert_eq!(store.load("named.bin").unwrap(), vec![1, b'x']);

        let reader = open_vocab_reader(store.resolve("named.bin")).unwrap();
        assert_eq!(reader.split(b'\n').count(), 1);
    }
}
