use crate::{
    error::VssError,
    group::{VssPoint, VssScalar},
    polynomial::evaluate_in_exponent,
};

/// A single point `(index, f(index))` of a Shamir sharing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Share<S: VssScalar> {
    pub index: S,
    pub value: S,
}

/// A [`Share`] together with the blinding polynomial evaluated at the same
/// index, which lets it be checked against a [`Commitment`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VerifiableShare<S: VssScalar> {
    pub share: Share<S>,
    pub decommitment: S,
}

pub type Shares<S> = Vec<Share<S>>;

pub type VerifiableShares<S> = Vec<VerifiableShare<S>>;

impl<S: VssScalar> Share<S> {
    pub fn new(index: S, value: S) -> Self {
        Share { index, value }
    }
}

impl<S: VssScalar> VerifiableShare<S> {
    pub fn new(share: Share<S>, decommitment: S) -> Self {
        VerifiableShare {
            share,
            decommitment,
        }
    }

    pub fn index(&self) -> &S {
        &self.share.index
    }

    pub fn value(&self) -> &S {
        &self.share.value
    }
}

/// Pedersen commitment to a sharing: element `i` is `G^{a_i}·H^{b_i}` for
/// coefficient `i` of the value and blinding polynomials.
#[derive(Clone, Debug, PartialEq)]
pub struct Commitment<P: VssPoint>(pub(crate) Vec<P>);

impl<P: VssPoint> Commitment<P> {
    pub fn new(elements: Vec<P>) -> Self {
        Commitment(elements)
    }

    /// Reconstruction threshold `k` of the committed sharing.
    pub fn threshold(&self) -> usize {
        self.0.len()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[P] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &P> {
        self.0.iter()
    }

    /// The committed polynomials evaluated at `index` in the exponent,
    /// i.e. the value `G^{f(index)}·H^{g(index)}` a valid share must match.
    pub fn evaluate(&self, index: &P::Scalar) -> Result<P, VssError> {
        evaluate_in_exponent(&self.0, index)
    }
}

impl<P: VssPoint> From<Vec<P>> for Commitment<P> {
    fn from(elements: Vec<P>) -> Self {
        Commitment(elements)
    }
}
