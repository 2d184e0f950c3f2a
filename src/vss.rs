//! Pedersen verifiable secret sharing.
//!
//! The dealer samples a value polynomial `f` with `f(0) = secret` and an
//! independent blinding polynomial `g`, both of degree `k - 1`, hands out
//! `(x, f(x), g(x))` for every index `x` and publishes
//! `c_i = G^{f_i}·H^{g_i}`. A share is valid when
//! `G^{f(x)}·H^{g(x)} = ∏ c_i^{x^i}`.

use rand::{rngs::OsRng, CryptoRng, RngCore};
use tracing::{debug, trace};

use crate::{
    error::VssError,
    group::{VssPoint, VssScalar},
    lagrange::lagrange_coefficients,
    params::VssParams,
    polynomial::Polynomial,
    shamir::share_and_get_coeffs_with_rng,
    types::{Commitment, Share, VerifiableShare, VerifiableShares},
};

/// Creates one verifiable share per index for `secret` at threshold `k`,
/// together with the commitment all of them verify against.
///
/// Every index must be nonzero and distinct and `1 <= k <= indices.len()`;
/// otherwise nothing is dealt and an error is returned.
pub fn share_secret<P: VssPoint>(
    params: &VssParams<P>,
    indices: &[P::Scalar],
    secret: P::Scalar,
    k: usize,
) -> Result<(VerifiableShares<P::Scalar>, Commitment<P>), VssError> {
    share_secret_with_rng(params, indices, secret, k, &mut OsRng)
}

pub fn share_secret_with_rng<P: VssPoint, R: RngCore + CryptoRng>(
    params: &VssParams<P>,
    indices: &[P::Scalar],
    secret: P::Scalar,
    k: usize,
    rng: &mut R,
) -> Result<(VerifiableShares<P::Scalar>, Commitment<P>), VssError> {
    let (shares, value_poly) = share_and_get_coeffs_with_rng(indices, secret, k, rng)?;

    // G^{a_i}
    let mut commitment: Vec<P> = value_poly.coefficients().iter().map(P::base_exp).collect();

    // The blinding polynomial gets its own random constant term.
    let blinding = P::Scalar::random(rng);
    let blinding_poly = Polynomial::random(blinding, k, rng)?;

    let vshares: VerifiableShares<P::Scalar> = shares
        .into_iter()
        .map(|share| {
            let decommitment = blinding_poly.evaluate(&share.index);
            VerifiableShare::new(share, decommitment)
        })
        .collect();

    // G^{a_i}·H^{b_i}
    for (c, b) in commitment.iter_mut().zip(blinding_poly.coefficients()) {
        *c = c.add(&params.h().scale(b));
    }

    debug!(n = indices.len(), k, "dealt verifiable shares");
    Ok((vshares, Commitment::new(commitment)))
}

/// Checks `vshare` against `commitment`. Returns `false` for any share that
/// is inconsistent with the committed sharing, never an error.
pub fn is_valid<P: VssPoint>(
    params: &VssParams<P>,
    commitment: &Commitment<P>,
    vshare: &VerifiableShare<P::Scalar>,
) -> bool {
    let lhs = P::base_exp(vshare.value()).add(&params.h().scale(&vshare.decommitment));
    match commitment.evaluate(vshare.index()) {
        Ok(rhs) if lhs == rhs => true,
        Ok(_) => {
            trace!("share does not match commitment");
            false
        }
        Err(err) => {
            trace!(%err, "cannot evaluate commitment");
            false
        }
    }
}

/// Recovers the secret from verifiable shares by Lagrange interpolation at
/// zero.
///
/// The caller must have validated every share and supply at least `k` of
/// them; too few shares yield an unrelated scalar. Equal indices are
/// reported as [`VssError::DuplicateIndex`].
pub fn open<S: VssScalar>(shares: &[VerifiableShare<S>]) -> Result<S, VssError> {
    if shares.is_empty() {
        return Err(VssError::NoShares);
    }
    let indices: Vec<S> = shares.iter().map(|s| *s.index()).collect();
    let weights = lagrange_coefficients(&indices)?;
    Ok(weights
        .iter()
        .zip(shares)
        .fold(S::zero(), |acc, (l, s)| acc.add(&l.mul(s.value()))))
}

/// Like [`open`], but for shares of unknown provenance: also checks that
/// there are at least `k` shares and that no index is zero.
pub fn open_with_threshold<S: VssScalar>(
    shares: &[VerifiableShare<S>],
    k: usize,
) -> Result<S, VssError> {
    if k == 0 {
        return Err(VssError::ZeroThreshold);
    }
    if shares.len() < k {
        return Err(VssError::InsufficientShares {
            got: shares.len(),
            need: k,
        });
    }
    if let Some(position) = shares.iter().position(|s| s.index().is_zero()) {
        return Err(VssError::ZeroIndex { position });
    }
    open(shares)
}

/// Keeps only the shares that verify against `commitment`.
pub fn filter_valid<'a, P: VssPoint>(
    params: &'a VssParams<P>,
    commitment: &'a Commitment<P>,
    shares: &'a [VerifiableShare<P::Scalar>],
) -> impl Iterator<Item = &'a VerifiableShare<P::Scalar>> + 'a {
    shares
        .iter()
        .filter(move |s| is_valid(params, commitment, s))
}

/// Drops the decommitments.
pub fn into_shares<S: VssScalar>(vshares: &[VerifiableShare<S>]) -> Vec<Share<S>> {
    vshares.iter().map(|v| v.share).collect()
}
