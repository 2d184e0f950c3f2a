use crate::{error::VssError, group::VssScalar};

/// Lagrange basis polynomials for `indices` evaluated at `x = 0`:
/// `L_i = ∏_{j≠i} x_j / ∏_{j≠i} (x_j - x_i)`.
///
/// Fails only if two indices are equal, in which case a denominator vanishes.
pub fn lagrange_coefficients<S: VssScalar>(indices: &[S]) -> Result<Vec<S>, VssError> {
    let n = indices.len();
    let mut coefficients = Vec::with_capacity(n);
    for (i, xi) in indices.iter().enumerate() {
        let mut num = S::one();
        let mut den = S::one();
        for (j, xj) in indices.iter().enumerate() {
            if i != j {
                num = num.mul(xj);
                den = den.mul(&xj.sub(xi));
            }
        }
        let den_inv = den.invert().ok_or_else(|| duplicate_of(indices, i))?;
        coefficients.push(num.mul(&den_inv));
    }
    Ok(coefficients)
}

/// Performs a Lagrange interpolation at the origin for the polynomial that
/// takes `values[i]` at `points[i]`. The result is its constant term.
pub fn interpolate_at_zero<S: VssScalar>(points: &[S], values: &[S]) -> Result<S, VssError> {
    debug_assert_eq!(points.len(), values.len());
    let coefficients = lagrange_coefficients(points)?;
    Ok(coefficients
        .iter()
        .zip(values)
        .fold(S::zero(), |acc, (l, y)| acc.add(&l.mul(y))))
}

fn duplicate_of<S: VssScalar>(indices: &[S], i: usize) -> VssError {
    let j = indices
        .iter()
        .enumerate()
        .position(|(j, x)| j != i && *x == indices[i])
        .unwrap_or(i);
    let (first, second) = if i < j { (i, j) } else { (j, i) };
    VssError::DuplicateIndex { first, second }
}
