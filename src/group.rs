//! Capability interface of the prime-order group backend.
//!
//! Protocol code only ever holds values of these traits and never touches
//! curve coordinates. The concrete backend is picked with a cargo feature.

use core::fmt::Debug;

use rand::{CryptoRng, RngCore};

use crate::error::{DecodeError, VssError};

/// Byte length of an encoded scalar (256-bit group order).
pub const SCALAR_SIZE: usize = 32;

/// Element of the scalar field modulo the group order `N`.
///
/// Every operation returns a fully reduced value in `[0, N)`.
pub trait VssScalar: Copy + Debug + PartialEq + Send + Sync + Sized {
    fn zero() -> Self;

    fn one() -> Self;

    fn from_u64(v: u64) -> Self;

    fn add(&self, other: &Self) -> Self;

    fn sub(&self, other: &Self) -> Self;

    fn mul(&self, other: &Self) -> Self;

    fn neg(&self) -> Self;

    /// Multiplicative inverse, `None` for zero.
    fn invert(&self) -> Option<Self>;

    fn is_zero(&self) -> bool;

    /// Uniform sample over `[0, N)` from a cryptographically secure source.
    fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self;

    /// Big-endian encoding of the canonical residue.
    fn to_bytes(&self) -> [u8; SCALAR_SIZE];

    /// Parses a big-endian encoding, rejecting values `>= N`.
    fn from_bytes(bytes: &[u8; SCALAR_SIZE]) -> Result<Self, DecodeError>;
}

/// Element of a cyclic group of prime order `N` with public generator `G`.
pub trait VssPoint: Copy + Debug + PartialEq + Send + Sync + Sized {
    type Scalar: VssScalar;

    /// Length of the compressed encoding in bytes.
    const COMPRESSED_SIZE: usize;

    fn identity() -> Self;

    /// The base point `G`.
    fn generator() -> Self;

    /// `scalar·G`
    fn base_exp(scalar: &Self::Scalar) -> Self {
        Self::generator().scale(scalar)
    }

    /// `scalar·self`
    fn scale(&self, scalar: &Self::Scalar) -> Self;

    /// Group addition. Adding the identity returns the other operand.
    fn add(&self, other: &Self) -> Self;

    fn is_identity(&self) -> bool;

    /// Fixed-size compressed encoding. The identity has none.
    fn compress(&self) -> Result<Vec<u8>, VssError>;

    /// Inverse of [`VssPoint::compress`]. Never panics on malformed input.
    fn decompress(bytes: &[u8]) -> Result<Self, DecodeError>;

    /// `r·G` for a random `r`. Whoever samples it knows the discrete log,
    /// so it is only fit as a second generator in tests.
    fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        Self::base_exp(&Self::Scalar::random(rng))
    }

    /// Deterministic second generator `H` with no known discrete log
    /// relative to `G`.
    fn second_generator() -> Result<Self, VssError>;
}
