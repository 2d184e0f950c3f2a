//! secp256k1 backend on top of `k256`.
use k256::{
    elliptic_curve::{
        group::Group,
        hash2curve::{ExpandMsgXmd, GroupDigest},
        sec1::{FromEncodedPoint, ToEncodedPoint},
        Field, PrimeField,
    },
    AffinePoint, EncodedPoint, FieldBytes, ProjectivePoint, Scalar, Secp256k1,
};
use rand::{CryptoRng, RngCore};
use sha2::Sha256;

use crate::{
    error::{DecodeError, VssError},
    group::{VssPoint, VssScalar, SCALAR_SIZE},
};

/// Domain separation tag for deriving `H` from the encoding of `G`.
/// Changing it changes `H` and invalidates every existing commitment.
pub const SECOND_GENERATOR_DST: &[u8] = b"pedersen-vss:secp256k1_XMD:SHA-256_SSWU_RO_:H";

pub fn k256_generator() -> ProjectivePoint {
    ProjectivePoint::GENERATOR
}

pub fn generate_nonce() -> Scalar {
    <Scalar as Field>::random(&mut rand::rngs::OsRng)
}

impl VssScalar for Scalar {
    fn zero() -> Self {
        Scalar::ZERO
    }

    fn one() -> Self {
        Scalar::ONE
    }

    fn from_u64(v: u64) -> Self {
        Scalar::from(v)
    }

    fn add(&self, other: &Self) -> Self {
        *self + *other
    }

    fn sub(&self, other: &Self) -> Self {
        *self - *other
    }

    fn mul(&self, other: &Self) -> Self {
        *self * *other
    }

    fn neg(&self) -> Self {
        -*self
    }

    fn invert(&self) -> Option<Self> {
        Option::from(<Scalar as Field>::invert(self))
    }

    fn is_zero(&self) -> bool {
        bool::from(<Scalar as Field>::is_zero(self))
    }

    fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        <Scalar as Field>::random(rng)
    }

    fn to_bytes(&self) -> [u8; SCALAR_SIZE] {
        <Scalar as PrimeField>::to_repr(self).into()
    }

    fn from_bytes(bytes: &[u8; SCALAR_SIZE]) -> Result<Self, DecodeError> {
        let repr = FieldBytes::clone_from_slice(bytes);
        let scalar: Option<Scalar> = <Scalar as PrimeField>::from_repr(repr).into();
        scalar.ok_or(DecodeError::NonCanonicalScalar)
    }
}

impl VssPoint for ProjectivePoint {
    type Scalar = Scalar;

    // 0x02/0x03 tag followed by the x-coordinate
    const COMPRESSED_SIZE: usize = 33;

    fn identity() -> Self {
        ProjectivePoint::IDENTITY
    }

    fn generator() -> Self {
        k256_generator()
    }

    fn scale(&self, scalar: &Scalar) -> Self {
        *self * scalar
    }

    fn add(&self, other: &Self) -> Self {
        *self + *other
    }

    fn is_identity(&self) -> bool {
        bool::from(<ProjectivePoint as Group>::is_identity(self))
    }

    fn compress(&self) -> Result<Vec<u8>, VssError> {
        if VssPoint::is_identity(self) {
            return Err(VssError::IdentityPoint);
        }
        Ok(self.to_affine().to_encoded_point(true).as_bytes().to_vec())
    }

    fn decompress(bytes: &[u8]) -> Result<Self, DecodeError> {
        if bytes.len() != Self::COMPRESSED_SIZE {
            return Err(DecodeError::InvalidPoint);
        }
        let encoded = EncodedPoint::from_bytes(bytes).map_err(|_| DecodeError::InvalidPoint)?;
        if !encoded.is_compressed() {
            return Err(DecodeError::InvalidPoint);
        }
        let affine: Option<AffinePoint> = AffinePoint::from_encoded_point(&encoded).into();
        affine
            .map(ProjectivePoint::from)
            .ok_or(DecodeError::InvalidPoint)
    }

    fn second_generator() -> Result<Self, VssError> {
        let g = k256_generator().to_affine().to_encoded_point(true);
        let h = Secp256k1::hash_from_bytes::<ExpandMsgXmd<Sha256>>(
            &[g.as_bytes()],
            &[SECOND_GENERATOR_DST],
        )
        .map_err(|_| VssError::HashToCurve)?;
        if VssPoint::is_identity(&h) || h == k256_generator() {
            return Err(VssError::InvalidGenerator);
        }
        Ok(h)
    }
}
