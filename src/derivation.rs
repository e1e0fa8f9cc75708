//! The scalar and point arithmetic of BIP32 child key derivation.
//!
//! The caller is expected to produce the derivation tweak (the left half
//! of the HMAC-SHA512 output over the parent chain code and child index)
//! and to walk derivation paths; only the arithmetic lives here.

use alloc::vec::Vec;

use zeroize::Zeroizing;

use crate::{
    curve::{Point, PointFormat, Scalar},
    tools::Secret,
};

const SCALAR_LEN: usize = 32;

/// Errors reported by the derivation operations.
///
/// None of these are retryable: the same inputs will always produce the
/// same error. On [`PointAtInfinity`](`Self::PointAtInfinity`) or
/// [`ScalarOutOfRange`](`Self::ScalarOutOfRange`) BIP32 prescribes
/// skipping to the next child index.
#[derive(displaydoc::Display, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeriveError {
    /// wrong input length: expected {expected} bytes, got {actual}
    InvalidInputLength {
        /// The length the rejected buffer was required to have.
        expected: usize,
        /// The length the rejected buffer actually had.
        actual: usize,
    },
    /// scalar is not canonical (not below the group order)
    ScalarOutOfRange,
    /// public key bytes do not encode a point on the curve
    InvalidPoint,
    /// derived child key is the group identity
    PointAtInfinity,
}

fn fixed_len<const N: usize>(bytes: &[u8]) -> Result<&[u8; N], DeriveError> {
    bytes.try_into().map_err(|_| DeriveError::InvalidInputLength {
        expected: N,
        actual: bytes.len(),
    })
}

fn secret_scalar(bytes: &[u8; SCALAR_LEN]) -> Result<Secret<Scalar>, DeriveError> {
    Secret::try_init_with(|| Scalar::try_from_be_bytes(bytes).ok_or(DeriveError::ScalarOutOfRange))
}

/// Derives a child private key from a parent private key.
///
/// Computes `(intermediate + parent_key) mod n` over the secp256k1 scalar
/// field, where both inputs are 32-byte big-endian scalars: `intermediate`
/// is the derivation tweak and `parent_key` is the parent private key.
/// The result is the child private key in the same representation,
/// wrapped in [`Zeroizing`] so the caller's copy is scrubbed on drop;
/// internal copies are scrubbed on every exit path.
///
/// Fails with [`DeriveError::ScalarOutOfRange`] if either input is not
/// below the group order (for the tweak, BIP32 declares such a child
/// invalid; a parent key at or above the order was never a valid private
/// key), and with [`DeriveError::PointAtInfinity`] if the child scalar
/// comes out zero.
pub fn derive_private(intermediate: &[u8], parent_key: &[u8]) -> Result<Zeroizing<[u8; 32]>, DeriveError> {
    let intermediate = fixed_len::<SCALAR_LEN>(intermediate)?;
    let parent_key = fixed_len::<SCALAR_LEN>(parent_key)?;

    let tweak = secret_scalar(intermediate)?;
    let parent = secret_scalar(parent_key)?;

    let child = tweak + &parent;
    if child.expose_secret().is_zero() {
        return Err(DeriveError::PointAtInfinity);
    }

    Ok(Zeroizing::new(child.expose_secret().to_be_bytes()))
}

/// Derives a child public key from a parent public key.
///
/// Computes `intermediate * G + parent_key` in the secp256k1 group, where
/// `intermediate` is the 32-byte derivation tweak and `parent_key` is a
/// SEC1-encoded point. The child public key is returned in the same
/// encoding the parent was supplied in.
///
/// `format` is the deployment's fixed point-encoding contract:
/// `parent_key` must be exactly [`PointFormat::encoded_len`] bytes, and a
/// buffer of the right length whose tag byte belongs to the other encoding
/// fails to decode. See [`DeriveError`] for the failure conditions; the
/// parent key must be an actual curve point, and a derived identity point
/// is rejected rather than encoded.
pub fn derive_public(intermediate: &[u8], parent_key: &[u8], format: PointFormat) -> Result<Vec<u8>, DeriveError> {
    let intermediate = fixed_len::<SCALAR_LEN>(intermediate)?;
    if parent_key.len() != format.encoded_len() {
        return Err(DeriveError::InvalidInputLength {
            expected: format.encoded_len(),
            actual: parent_key.len(),
        });
    }

    let tweak = secret_scalar(intermediate)?;
    let parent = Point::try_from_sec1_bytes(parent_key).ok_or(DeriveError::InvalidPoint)?;

    let child = tweak.mul_by_generator() + parent;
    if child.is_identity() {
        return Err(DeriveError::PointAtInfinity);
    }

    Ok(child.to_sec1_bytes(format))
}
