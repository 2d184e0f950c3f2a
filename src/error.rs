use thiserror::Error;

/// Failure to parse one of the fixed-width hex encodings.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    #[error("invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
    #[error("invalid length: expected {expected} hex characters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("scalar is not reduced modulo the group order")]
    NonCanonicalScalar,
    #[error("bytes do not encode a valid group element")]
    InvalidPoint,
    #[error("commitment must contain at least one group element")]
    EmptyCommitment,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum VssError {
    #[error("reconstruction threshold too large: expected k <= {n}, got k = {k}")]
    ThresholdTooLarge { k: usize, n: usize },
    #[error("reconstruction threshold must be at least 1")]
    ZeroThreshold,
    #[error("cannot create share for index zero (position {position})")]
    ZeroIndex { position: usize },
    #[error("indices at positions {first} and {second} are equal")]
    DuplicateIndex { first: usize, second: usize },
    #[error("polynomial has no coefficients")]
    EmptyPolynomial,
    #[error("no shares supplied")]
    NoShares,
    #[error("insufficient shares: got {got}, need {need}")]
    InsufficientShares { got: usize, need: usize },
    #[error("the identity element has no fixed-size encoding")]
    IdentityPoint,
    #[error("second generator must be neither the identity nor the base point")]
    InvalidGenerator,
    #[error("hash-to-curve failed")]
    HashToCurve,
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),
}
