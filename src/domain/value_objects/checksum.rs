//! Checksum value objects
//!
//! Checksums are published next to the artifact as `<file>.<extension>`
//! files containing the lowercase hex digest.

use std::fmt;
use std::io::Read;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256, Sha512};

/// Supported checksum algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChecksumAlgorithm {
    Sha256,
    Sha512,
}

impl ChecksumAlgorithm {
    pub const ALL: [ChecksumAlgorithm; 2] = [ChecksumAlgorithm::Sha256, ChecksumAlgorithm::Sha512];

    /// File extension used for the checksum file
    pub fn extension(&self) -> &'static str {
        match self {
            ChecksumAlgorithm::Sha256 => "sha256",
            ChecksumAlgorithm::Sha512 => "sha512",
        }
    }

    /// Digest a byte slice
    pub fn digest(&self, content: &[u8]) -> Checksum {
        let hex = match self {
            ChecksumAlgorithm::Sha256 => format!("{:x}", Sha256::digest(content)),
            ChecksumAlgorithm::Sha512 => format!("{:x}", Sha512::digest(content)),
        };
        Checksum {
            algorithm: *self,
            hex,
        }
    }

    /// Digest a reader without loading it into memory
    pub fn digest_reader<R: Read>(&self, mut reader: R) -> std::io::Result<Checksum> {
        let mut buf = [0u8; 8192];
        let hex = match self {
            ChecksumAlgorithm::Sha256 => {
                let mut hasher = Sha256::new();
                loop {
                    let n = reader.read(&mut buf)?;
                    if n == 0 {
                        break;
                    }
                    hasher.update(&buf[..n]);
                }
                format!("{:x}", hasher.finalize())
            }
            ChecksumAlgorithm::Sha512 => {
                let mut hasher = Sha512::new();
                loop {
                    let n = reader.read(&mut buf)?;
                    if n == 0 {
                        break;
                    }
                    hasher.update(&buf[..n]);
                }
                format!("{:x}", hasher.finalize())
            }
        };
        Ok(Checksum {
            algorithm: *self,
            hex,
        })
    }
}

impl fmt::Display for ChecksumAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// A computed checksum
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Checksum {
    algorithm: ChecksumAlgorithm,
    hex: String,
}

impl Checksum {
    pub fn algorithm(&self) -> ChecksumAlgorithm {
        self.algorithm
    }

    /// Lowercase hex digest
    pub fn hex(&self) -> &str {
        &self.hex
    }

    /// Check if this checksum matches a raw hex string (case-insensitive)
    pub fn matches_str(&self, s: &str) -> bool {
        self.hex.eq_ignore_ascii_case(s.trim())
    }
}

impl fmt::Display for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.algorithm, self.hex)
    }
}
