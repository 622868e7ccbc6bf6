//! Signing secret generation.
//!
//! A secret is 32 bytes from the operating system's secure random source,
//! carried around in its standard padded Base64 form. Both forms live in
//! `Zeroizing` buffers and are wiped when dropped.

use std::fmt;

use base64::{engine::general_purpose::STANDARD, DecodeError, Engine};
use rand::{rngs::OsRng, CryptoRng, RngCore};
use zeroize::Zeroizing;

use crate::core::constants::{ENCODING_NAME, ENTROPY_BITS, SECRET_BYTES};
use crate::error::Result;

/// Raw secret bytes.
pub struct RandomSecret {
    bytes: Zeroizing<[u8; SECRET_BYTES]>,
}

impl RandomSecret {
    /// Fill a new secret from a cryptographically secure source.
    ///
    /// # Errors
    ///
    /// Returns `Error::Entropy` if the source cannot produce bytes. No
    /// fallback source is tried.
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self> {
        let mut bytes = Zeroizing::new([0u8; SECRET_BYTES]);
        rng.try_fill_bytes(&mut bytes[..])?;
        Ok(Self { bytes })
    }

    /// The raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..]
    }

    /// Encode as standard padded Base64.
    pub fn encode(&self) -> EncodedSecret {
        EncodedSecret {
            value: Zeroizing::new(STANDARD.encode(self.as_bytes())),
        }
    }
}

impl fmt::Debug for RandomSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RandomSecret")
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}

/// A secret in its printable Base64 form.
#[derive(Clone)]
pub struct EncodedSecret {
    value: Zeroizing<String>,
}

impl EncodedSecret {
    pub fn as_str(&self) -> &str {
        self.value.as_str()
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.value.len()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Name of the text encoding.
    pub fn encoding(&self) -> &'static str {
        ENCODING_NAME
    }

    /// Entropy of the underlying bytes in bits.
    pub fn entropy_bits(&self) -> usize {
        ENTROPY_BITS
    }

    /// Decode back to the raw bytes.
    pub fn decode(&self) -> std::result::Result<Zeroizing<Vec<u8>>, DecodeError> {
        STANDARD.decode(self.as_str()).map(Zeroizing::new)
    }
}

impl fmt::Display for EncodedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for EncodedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncodedSecret")
            .field("value", &"[REDACTED]")
            .field("len", &self.len())
            .finish()
    }
}

/// Generate a secret from the operating system's secure random source.
///
/// # Errors
///
/// Returns `Error::Entropy` if the OS source is unavailable.
pub fn generate_secret() -> Result<EncodedSecret> {
    generate_secret_with(&mut OsRng)
}

/// Generate a secret from the given cryptographically secure source.
pub fn generate_secret_with<R: RngCore + CryptoRng>(rng: &mut R) -> Result<EncodedSecret> {
    Ok(RandomSecret::generate(rng)?.encode())
}
