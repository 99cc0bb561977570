//! Loading and saving a netrc file on disk

use std::fmt;
use std::ops::{Deref, DerefMut};
use std::path::{Path, PathBuf};

use netrc_edit::Document;

use crate::cipher::{Cipher, GpgCipher};
use crate::config::StoreConfig;
use crate::{Error, Result, io};

/// A netrc [`Document`] bound to the file it came from.
///
/// Dereferences to the document, so lookups and edits read the same as on a
/// bare `Document`. [`NetrcFile::save`] writes it back to the same path,
/// through the cipher when the path is an encrypted store.
pub struct NetrcFile {
    path: PathBuf,
    document: Document,
    config: StoreConfig,
    cipher: Box<dyn Cipher>,
}

impl NetrcFile {
    /// Load with default settings; `.gpg` files are decrypted with gpg.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let config = StoreConfig::default();
        let cipher = GpgCipher::new(config.gpg.clone());
        Self::load_with(path, config, Box::new(cipher))
    }

    /// Load using the given settings and cipher.
    pub fn load_with(
        path: impl Into<PathBuf>,
        config: StoreConfig,
        cipher: Box<dyn Cipher>,
    ) -> Result<Self> {
        let path = path.into();
        let raw = io::read_bytes(&path)?;
        let encrypted = config.is_encrypted(&path);
        let plain = if encrypted {
            cipher.decrypt(&raw)?
        } else {
            raw
        };

        let document =
            Document::from_reader(plain.as_slice()).map_err(|e| Error::parse(&path, e))?;

        tracing::debug!(
            path = %path.display(),
            bytes = plain.len(),
            entries = document.len(),
            encrypted,
            "loaded netrc"
        );

        Ok(Self {
            path,
            document,
            config,
            cipher,
        })
    }

    /// Like [`NetrcFile::load_with`], but a missing file yields an empty
    /// document that [`NetrcFile::save`] will create.
    pub fn load_or_create(
        path: impl Into<PathBuf>,
        config: StoreConfig,
        cipher: Box<dyn Cipher>,
    ) -> Result<Self> {
        let path = path.into();
        match path.try_exists() {
            Ok(true) => Self::load_with(path, config, cipher),
            Ok(false) => {
                tracing::debug!(path = %path.display(), "netrc missing, starting empty");
                Ok(Self {
                    path,
                    document: Document::default(),
                    config,
                    cipher,
                })
            }
            Err(e) => Err(Error::io(path, e)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    /// Render the document and write it back to [`NetrcFile::path`].
    ///
    /// Encrypted stores go through the cipher first. The file is replaced
    /// atomically and ends up with the configured mode (0600 by default).
    pub fn save(&self) -> Result<()> {
        let body = self.document.render().into_bytes();
        let encrypted = self.config.is_encrypted(&self.path);
        let body = if encrypted {
            self.cipher.encrypt(&body)?
        } else {
            body
        };

        io::write_atomic(&self.path, &body, self.config.file_mode)?;
        tracing::debug!(
            path = %self.path.display(),
            entries = self.document.len(),
            encrypted,
            "saved netrc"
        );
        Ok(())
    }
}

impl Deref for NetrcFile {
    type Target = Document;

    fn deref(&self) -> &Document {
        &self.document
    }
}

impl DerefMut for NetrcFile {
    fn deref_mut(&mut self) -> &mut Document {
        &mut self.document
    }
}

impl fmt::Debug for NetrcFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NetrcFile")
            .field("path", &self.path)
            .field("entries", &self.document.len())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
