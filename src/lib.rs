//! Pedersen verifiable secret sharing.
//!
//! A dealer splits a secret scalar into `n` shares so that any `k` of them
//! recover it, and publishes a commitment that lets each holder check their
//! share without learning anything about the secret or the other shares.
//!
//! The protocol is written against the [`VssScalar`] and [`VssPoint`]
//! capabilities; the `secp256k1` feature (on by default) supplies them for
//! `k256`.
//!
//! ```ignore
//! use k256::{ProjectivePoint, Scalar};
//! use pedersen_vss::{is_valid, open, share_secret, VssParams};
//!
//! let params = VssParams::<ProjectivePoint>::nothing_up_my_sleeve()?;
//! let indices: Vec<Scalar> = (1..=3u64).map(Scalar::from).collect();
//! let (shares, commitment) = share_secret(&params, &indices, Scalar::from(42u64), 2)?;
//! assert!(shares.iter().all(|s| is_valid(&params, &commitment, s)));
//! assert_eq!(open(&shares[..2])?, Scalar::from(42u64));
//! ```

pub mod codec;
pub mod error;
pub mod group;
pub mod lagrange;
pub mod params;
pub mod polynomial;
pub mod shamir;
pub mod types;
pub mod vss;

#[cfg(feature = "secp256k1")]
pub mod secp256k1;

pub use codec::*;
pub use error::*;
pub use group::*;
pub use lagrange::*;
pub use params::*;
pub use polynomial::{evaluate, evaluate_in_exponent, Polynomial};
pub use shamir::*;
pub use types::*;
pub use vss::*;
