//! Shared test utilities for the netrc workspace.
//!
//! This crate provides standardised fixtures to eliminate duplication across
//! crate test suites. It is a dev-dependency only and never published.
//!
//! # Modules
//!
//! - [`fixtures`]: the sample netrc files under `test-fixtures/netrc/`
//! - [`home`]: [`TestHome`] temporary directory with netrc files in it
//! - [`cipher`]: in-process [`Cipher`](netrc_store::Cipher) fakes

pub mod cipher;
pub mod fixtures;
pub mod home;

pub use cipher::{FailingCipher, ReversingCipher};
pub use home::TestHome;
