//! Fixed-width lowercase hex encodings.
//!
//! | value             | layout                                   |
//! |-------------------|------------------------------------------|
//! | scalar            | 32 bytes big-endian, 64 hex chars        |
//! | group element     | compressed point, `2 * COMPRESSED_SIZE`  |
//! | verifiable share  | `index ‖ value ‖ decommitment`           |
//! | commitment        | elements concatenated, no length prefix  |

use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    error::{DecodeError, VssError},
    group::{VssPoint, VssScalar, SCALAR_SIZE},
    types::{Commitment, Share, VerifiableShare},
};

pub const SCALAR_HEX_SIZE: usize = 2 * SCALAR_SIZE;

pub const SHARE_HEX_SIZE: usize = 2 * SCALAR_HEX_SIZE;

pub const VERIFIABLE_SHARE_HEX_SIZE: usize = 3 * SCALAR_HEX_SIZE;

pub fn point_hex_size<P: VssPoint>() -> usize {
    2 * P::COMPRESSED_SIZE
}

fn check_len(s: &str, expected: usize) -> Result<(), DecodeError> {
    if s.len() != expected {
        return Err(DecodeError::InvalidLength {
            expected,
            actual: s.len(),
        });
    }
    Ok(())
}

pub fn scalar_to_hex<S: VssScalar>(scalar: &S) -> String {
    hex::encode(scalar.to_bytes())
}

pub fn scalar_from_hex<S: VssScalar>(s: &str) -> Result<S, DecodeError> {
    check_len(s, SCALAR_HEX_SIZE)?;
    let mut bytes = [0u8; SCALAR_SIZE];
    hex::decode_to_slice(s, &mut bytes)?;
    S::from_bytes(&bytes)
}

fn scalar_from_slice<S: VssScalar>(bytes: &[u8]) -> Result<S, DecodeError> {
    let bytes: &[u8; SCALAR_SIZE] = bytes.try_into().map_err(|_| DecodeError::InvalidLength {
        expected: SCALAR_HEX_SIZE,
        actual: 2 * bytes.len(),
    })?;
    S::from_bytes(bytes)
}

pub fn point_to_hex<P: VssPoint>(point: &P) -> Result<String, VssError> {
    Ok(hex::encode(point.compress()?))
}

pub fn point_from_hex<P: VssPoint>(s: &str) -> Result<P, DecodeError> {
    check_len(s, point_hex_size::<P>())?;
    P::decompress(&hex::decode(s)?)
}

impl<S: VssScalar> Share<S> {
    pub fn to_hex(&self) -> String {
        let mut out = String::with_capacity(SHARE_HEX_SIZE);
        out.push_str(&scalar_to_hex(&self.index));
        out.push_str(&scalar_to_hex(&self.value));
        out
    }

    pub fn from_hex(s: &str) -> Result<Self, DecodeError> {
        check_len(s, SHARE_HEX_SIZE)?;
        let bytes = hex::decode(s)?;
        Ok(Share {
            index: scalar_from_slice(&bytes[..SCALAR_SIZE])?,
            value: scalar_from_slice(&bytes[SCALAR_SIZE..])?,
        })
    }
}

impl<S: VssScalar> VerifiableShare<S> {
    pub fn to_hex(&self) -> String {
        let mut out = String::with_capacity(VERIFIABLE_SHARE_HEX_SIZE);
        out.push_str(&self.share.to_hex());
        out.push_str(&scalar_to_hex(&self.decommitment));
        out
    }

    pub fn from_hex(s: &str) -> Result<Self, DecodeError> {
        check_len(s, VERIFIABLE_SHARE_HEX_SIZE)?;
        let bytes = hex::decode(s)?;
        Ok(VerifiableShare {
            share: Share {
                index: scalar_from_slice(&bytes[..SCALAR_SIZE])?,
                value: scalar_from_slice(&bytes[SCALAR_SIZE..2 * SCALAR_SIZE])?,
            },
            decommitment: scalar_from_slice(&bytes[2 * SCALAR_SIZE..])?,
        })
    }
}

impl<P: VssPoint> Commitment<P> {
    /// Fails only if an element is the identity, which has no encoding.
    pub fn to_hex(&self) -> Result<String, VssError> {
        let mut out = String::with_capacity(self.len() * point_hex_size::<P>());
        for point in self.iter() {
            out.push_str(&point_to_hex(point)?);
        }
        Ok(out)
    }

    /// The element count is the total length divided by the per-element
    /// length.
    pub fn from_hex(s: &str) -> Result<Self, DecodeError> {
        let width = point_hex_size::<P>();
        if s.is_empty() {
            return Err(DecodeError::EmptyCommitment);
        }
        if s.len() % width != 0 {
            return Err(DecodeError::InvalidLength {
                expected: (s.len() / width + 1) * width,
                actual: s.len(),
            });
        }
        let bytes = hex::decode(s)?;
        bytes
            .chunks(P::COMPRESSED_SIZE)
            .map(P::decompress)
            .collect::<Result<Vec<P>, _>>()
            .map(Commitment)
    }
}

impl<S: VssScalar> Serialize for Share<S> {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de, S: VssScalar> Deserialize<'de> for Share<S> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Share::from_hex(&s).map_err(de::Error::custom)
    }
}

impl<S: VssScalar> Serialize for VerifiableShare<S> {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de, S: VssScalar> Deserialize<'de> for VerifiableShare<S> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        VerifiableShare::from_hex(&s).map_err(de::Error::custom)
    }
}

impl<P: VssPoint> Serialize for Commitment<P> {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        let s = self.to_hex().map_err(ser::Error::custom)?;
        serializer.serialize_str(&s)
    }
}

impl<'de, P: VssPoint> Deserialize<'de> for Commitment<P> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Commitment::from_hex(&s).map_err(de::Error::custom)
    }
}
