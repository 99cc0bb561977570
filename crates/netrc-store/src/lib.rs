//! Loading and saving netrc files
//!
//! Wraps the in-memory [`netrc_edit::Document`] with the file-system side:
//! reading and owner-only atomic writes, and an optional [`Cipher`] for
//! stores kept encrypted on disk (`~/.netrc.gpg`).

pub mod cipher;
pub mod config;
pub mod error;
pub mod io;
pub mod logging;
pub mod path;
pub mod store;

pub use cipher::{Cipher, GpgCipher, PlainCipher};
pub use config::{GpgConfig, StoreConfig};
pub use error::{Error, Result};
pub use path::default_netrc_path;
pub use store::NetrcFile;

pub use netrc_edit::{Document, Entry};
