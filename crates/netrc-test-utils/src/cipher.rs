//! In-process [`Cipher`] fakes, so encrypted stores can be tested without gpg.

use std::io;

use netrc_store::{Cipher, Error, Result};

/// "Encrypts" by reversing the bytes. Its own inverse, and never valid netrc
/// text for anything but palindromes, so a missed decrypt shows up quickly.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReversingCipher;

impl Cipher for ReversingCipher {
    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        Ok(ciphertext.iter().rev().copied().collect())
    }

    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        Ok(plaintext.iter().rev().copied().collect())
    }
}

/// Fails every call the way a broken pipe to the cipher program would.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingCipher;

impl FailingCipher {
    fn fail() -> Error {
        Error::CipherPipe {
            program: "failing-cipher".to_string(),
            source: io::Error::new(io::ErrorKind::BrokenPipe, "cipher unavailable"),
        }
    }
}

impl Cipher for FailingCipher {
    fn decrypt(&self, _ciphertext: &[u8]) -> Result<Vec<u8>> {
        Err(Self::fail())
    }

    fn encrypt(&self, _plaintext: &[u8]) -> Result<Vec<u8>> {
        Err(Self::fail())
    }
}
