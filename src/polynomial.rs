use rand::{CryptoRng, RngCore};

use crate::{
    error::VssError,
    group::{VssPoint, VssScalar},
};

/// Polynomial over the scalar field, coefficients in ascending degree order.
///
/// Always holds at least one coefficient.
#[derive(Clone, Debug, PartialEq)]
pub struct Polynomial<S: VssScalar> {
    coefficients: Vec<S>,
}

impl<S: VssScalar> Polynomial<S> {
    /// Samples `[constant, r_1, ..., r_{k-1}]` with every `r_i` uniform.
    pub fn random<R: RngCore + CryptoRng>(
        constant: S,
        k: usize,
        rng: &mut R,
    ) -> Result<Self, VssError> {
        if k == 0 {
            return Err(VssError::ZeroThreshold);
        }
        let mut coefficients = Vec::with_capacity(k);
        coefficients.push(constant);
        coefficients.extend((1..k).map(|_| S::random(rng)));
        Ok(Polynomial { coefficients })
    }

    pub fn from_coefficients(coefficients: Vec<S>) -> Result<Self, VssError> {
        if coefficients.is_empty() {
            return Err(VssError::EmptyPolynomial);
        }
        Ok(Polynomial { coefficients })
    }

    pub fn coefficients(&self) -> &[S] {
        &self.coefficients
    }

    pub fn constant_term(&self) -> &S {
        &self.coefficients[0]
    }

    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    pub fn evaluate(&self, x: &S) -> S {
        horner(&self.coefficients, x)
    }
}

/// Evaluates the polynomial with the given coefficients at `x`.
pub fn evaluate<S: VssScalar>(coefficients: &[S], x: &S) -> Result<S, VssError> {
    if coefficients.is_empty() {
        return Err(VssError::EmptyPolynomial);
    }
    Ok(horner(coefficients, x))
}

/// Evaluates a committed polynomial "in the exponent": given
/// `c_i = G^{a_i}·H^{b_i}` returns `∏ c_i^{x^i}`.
pub fn evaluate_in_exponent<P: VssPoint>(commitment: &[P], x: &P::Scalar) -> Result<P, VssError> {
    let mut iter = commitment.iter().rev();
    let head = iter.next().ok_or(VssError::EmptyPolynomial)?;
    Ok(iter.fold(*head, |acc, c| acc.scale(x).add(c)))
}

// y = c_{k-1}; y = y·x + c_i for i = k-2..0
fn horner<S: VssScalar>(coefficients: &[S], x: &S) -> S {
    let mut iter = coefficients.iter().rev();
    match iter.next() {
        Some(head) => iter.fold(*head, |acc, c| acc.mul(x).add(c)),
        None => S::zero(),
    }
}
