//! Encryption collaborators for encrypted netrc stores

use std::io::Write;
use std::process::{Command, Stdio};
use std::thread;

use crate::config::GpgConfig;
use crate::{Error, Result};

/// Turns on-disk bytes into netrc text and back.
pub trait Cipher {
    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>>;
    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>>;
}

/// Passes bytes through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainCipher;

impl Cipher for PlainCipher {
    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        Ok(ciphertext.to_vec())
    }

    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        Ok(plaintext.to_vec())
    }
}

/// Pipes bytes through an external gpg process.
#[derive(Debug, Clone, Default)]
pub struct GpgCipher {
    config: GpgConfig,
}

impl GpgCipher {
    pub fn new(config: GpgConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GpgConfig {
        &self.config
    }

    /// Run the program with `args`, feed it `input` and collect its stdout.
    ///
    /// Stdin is written from a helper thread so a child that starts writing
    /// before it has read everything cannot deadlock us.
    fn pipe(&self, args: &[String], input: &[u8]) -> Result<Vec<u8>> {
        let program = &self.config.program;
        tracing::debug!(program = %program, ?args, bytes = input.len(), "running cipher");

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| Error::CipherSpawn {
                program: program.clone(),
                source,
            })?;

        let pipe_error = |source| Error::CipherPipe {
            program: program.clone(),
            source,
        };

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| pipe_error(std::io::Error::other("stdin not captured")))?;

        let output = thread::scope(|scope| {
            let writer = scope.spawn(move || stdin.write_all(input));
            let output = child.wait_with_output();
            let written = writer
                .join()
                .unwrap_or_else(|_| Err(std::io::Error::other("stdin writer panicked")));
            (output, written)
        });

        let output = match output {
            (Ok(output), _) if !output.status.success() => {
                return Err(Error::CipherFailed {
                    program: program.clone(),
                    status: output.status,
                    stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
                });
            }
            (Ok(output), Ok(())) => output,
            (Ok(_), Err(source)) | (Err(source), _) => return Err(pipe_error(source)),
        };

        Ok(output.stdout)
    }
}

impl Cipher for GpgCipher {
    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        self.pipe(&self.config.decrypt_args, ciphertext)
    }

    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        self.pipe(&self.config.encrypt_args, plaintext)
    }
}
