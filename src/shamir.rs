use std::collections::HashMap;

use rand::{rngs::OsRng, CryptoRng, RngCore};

use crate::{
    error::VssError,
    group::VssScalar,
    lagrange::interpolate_at_zero,
    polynomial::Polynomial,
    types::{Share, Shares},
};

/// Checks the dealing preconditions: every index nonzero and distinct, and
/// `1 <= k <= indices.len()`.
pub fn check_indices<S: VssScalar>(indices: &[S], k: usize) -> Result<(), VssError> {
    let mut seen: HashMap<_, usize> = HashMap::with_capacity(indices.len());
    for (position, index) in indices.iter().enumerate() {
        if index.is_zero() {
            return Err(VssError::ZeroIndex { position });
        }
        if let Some(first) = seen.insert(index.to_bytes(), position) {
            return Err(VssError::DuplicateIndex {
                first,
                second: position,
            });
        }
    }
    if k == 0 {
        return Err(VssError::ZeroThreshold);
    }
    if k > indices.len() {
        return Err(VssError::ThresholdTooLarge {
            k,
            n: indices.len(),
        });
    }
    Ok(())
}

/// Shamir-shares `secret` at threshold `k`, one share per index, and
/// returns the sharing polynomial alongside the shares.
pub fn share_and_get_coeffs<S: VssScalar>(
    indices: &[S],
    secret: S,
    k: usize,
) -> Result<(Shares<S>, Polynomial<S>), VssError> {
    share_and_get_coeffs_with_rng(indices, secret, k, &mut OsRng)
}

pub fn share_and_get_coeffs_with_rng<S: VssScalar, R: RngCore + CryptoRng>(
    indices: &[S],
    secret: S,
    k: usize,
    rng: &mut R,
) -> Result<(Shares<S>, Polynomial<S>), VssError> {
    check_indices(indices, k)?;
    let poly = Polynomial::random(secret, k, rng)?;
    let shares = indices
        .iter()
        .map(|index| Share::new(*index, poly.evaluate(index)))
        .collect();
    Ok((shares, poly))
}

/// Recovers the secret from plain Shamir shares with pairwise distinct
/// indices.
pub fn reconstruct<S: VssScalar>(shares: &[Share<S>]) -> Result<S, VssError> {
    if shares.is_empty() {
        return Err(VssError::NoShares);
    }
    let (points, values): (Vec<S>, Vec<S>) = shares.iter().map(|s| (s.index, s.value)).unzip();
    interpolate_at_zero(&points, &values)
}

#[cfg(all(test, feature = "secp256k1"))]
mod tests {
    use super::*;
    use k256::Scalar;

    fn indices(n: u64) -> Vec<Scalar> {
        (1..=n).map(Scalar::from).collect()
    }

    #[test]
    fn shares_lie_on_polynomial() {
        let secret = Scalar::random(&mut OsRng);
        let (shares, poly) = share_and_get_coeffs(&indices(5), secret, 3).unwrap();
        assert_eq!(shares.len(), 5);
        assert_eq!(poly.coefficients().len(), 3);
        assert_eq!(*poly.constant_term(), secret);
        for share in &shares {
            assert_eq!(share.value, poly.evaluate(&share.index));
        }
    }

    #[test]
    fn any_k_shares_reconstruct() {
        let secret = Scalar::from(1234u64);
        let (shares, _) = share_and_get_coeffs(&indices(5), secret, 3).unwrap();
        assert_eq!(reconstruct(&shares[..3]).unwrap(), secret);
        assert_eq!(reconstruct(&shares[2..]).unwrap(), secret);
        assert_eq!(
            reconstruct(&[shares[4], shares[0], shares[2]]).unwrap(),
            secret
        );
        assert_eq!(reconstruct(&shares).unwrap(), secret);
    }

    #[test]
    fn rejects_bad_preconditions() {
        let mut idx = indices(3);
        assert_eq!(
            share_and_get_coeffs(&idx, Scalar::ONE, 4).map(|_| ()),
            Err(VssError::ThresholdTooLarge { k: 4, n: 3 })
        );
        assert_eq!(
            share_and_get_coeffs(&idx, Scalar::ONE, 0).map(|_| ()),
            Err(VssError::ZeroThreshold)
        );
        idx[1] = Scalar::ZERO;
        assert_eq!(
            share_and_get_coeffs(&idx, Scalar::ONE, 2).map(|_| ()),
            Err(VssError::ZeroIndex { position: 1 })
        );
        idx[1] = idx[2];
        assert_eq!(
            share_and_get_coeffs(&idx, Scalar::ONE, 2).map(|_| ()),
            Err(VssError::DuplicateIndex {
                first: 1,
                second: 2
            })
        );
    }

    #[test]
    fn reconstruct_needs_shares() {
        assert_eq!(reconstruct::<Scalar>(&[]), Err(VssError::NoShares));
    }
}
