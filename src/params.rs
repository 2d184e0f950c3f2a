use rand::{CryptoRng, RngCore};
use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};
use tracing::{debug, warn};

use crate::{
    codec::{point_from_hex, point_to_hex},
    error::VssError,
    group::VssPoint,
};

/// Public parameters shared by the dealer and every verifier.
///
/// `G` comes from the backend; `H` must have no known discrete log relative
/// to `G`, otherwise commitments stop hiding the secret. Build this once and
/// pass it to every sharing and verification call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VssParams<P: VssPoint> {
    h: P,
}

impl<P: VssPoint> VssParams<P> {
    /// Uses a caller-supplied second generator.
    pub fn new(h: P) -> Result<Self, VssError> {
        if h.is_identity() || h == P::generator() {
            warn!("rejected second generator");
            return Err(VssError::InvalidGenerator);
        }
        Ok(VssParams { h })
    }

    /// Derives `H` by hashing the encoding of `G` to the curve. Every party
    /// computes the same point and nobody knows its discrete log.
    pub fn nothing_up_my_sleeve() -> Result<Self, VssError> {
        let h = P::second_generator()?;
        debug!("derived second generator");
        Self::new(h)
    }

    /// `H = r·G` for a random `r` that is dropped immediately. The caller
    /// saw `r` go by, so only use this where that does not matter.
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self, VssError> {
        Self::new(P::random(rng))
    }

    pub fn h(&self) -> &P {
        &self.h
    }

    pub fn g(&self) -> P {
        P::generator()
    }

    pub fn to_hex(&self) -> Result<String, VssError> {
        point_to_hex(&self.h)
    }

    pub fn from_hex(s: &str) -> Result<Self, VssError> {
        Self::new(point_from_hex(s)?)
    }

    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[derive(Serialize, Deserialize)]
struct ParamsRepr {
    h: String,
}

impl<P: VssPoint> Serialize for VssParams<P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let h = self.to_hex().map_err(ser::Error::custom)?;
        ParamsRepr { h }.serialize(serializer)
    }
}

impl<'de, P: VssPoint> Deserialize<'de> for VssParams<P> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = ParamsRepr::deserialize(deserializer)?;
        Self::from_hex(&repr.h).map_err(de::Error::custom)
    }
}
