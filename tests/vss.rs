#![cfg(feature = "secp256k1")]

use k256::{ProjectivePoint, Scalar};
use pedersen_vss::{
    is_valid, open, point_from_hex, point_to_hex, scalar_from_hex, scalar_to_hex,
    share_secret, share_secret_with_rng, Commitment, DecodeError, Share, VerifiableShare,
    VssError, VssParams, VssPoint, VssScalar,
};
use proptest::prelude::*;
use rand::{rngs::OsRng, seq::SliceRandom, SeedableRng};
use rand_chacha::ChaCha20Rng;

fn scalar_from_seed(seed: u64) -> Scalar {
    Scalar::random(&mut ChaCha20Rng::seed_from_u64(seed))
}

fn params() -> VssParams<ProjectivePoint> {
    VssParams::nothing_up_my_sleeve().unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn scalar_hex_roundtrip(seed in any::<u64>()) {
        let s = scalar_from_seed(seed);
        prop_assert_eq!(scalar_from_hex::<Scalar>(&scalar_to_hex(&s)).unwrap(), s);
    }

    #[test]
    fn point_hex_roundtrip(seed in any::<u64>()) {
        let p = ProjectivePoint::base_exp(&scalar_from_seed(seed));
        prop_assert_eq!(point_from_hex::<ProjectivePoint>(&point_to_hex(&p).unwrap()).unwrap(), p);
    }

    #[test]
    fn small_scalars_roundtrip(v in any::<u64>()) {
        let s = Scalar::from(v);
        let hex = scalar_to_hex(&s);
        prop_assert_eq!(hex.len(), 64);
        prop_assert_eq!(scalar_from_hex::<Scalar>(&hex).unwrap(), s);
    }

    #[test]
    fn wrong_length_scalars_fail(len in 0usize..200) {
        prop_assume!(len != 64);
        let s = "a".repeat(len);
        let is_length_error = matches!(
            scalar_from_hex::<Scalar>(&s),
            Err(DecodeError::InvalidLength { .. })
        );
        prop_assert!(is_length_error);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(12))]

    #[test]
    fn any_k_subset_opens(n in 1usize..12, k_seed in any::<usize>(), seed in any::<u64>()) {
        let k = 1 + k_seed % n;
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let params = params();
        let indices: Vec<Scalar> = (0..n).map(|_| Scalar::random(&mut rng)).collect();
        let secret = Scalar::random(&mut rng);

        let (mut vshares, c) = share_secret_with_rng(&params, &indices, secret, k, &mut rng).unwrap();
        prop_assert_eq!(vshares.len(), n);
        prop_assert_eq!(c.len(), k);
        for vshare in &vshares {
            prop_assert!(is_valid(&params, &c, vshare));
        }

        vshares.shuffle(&mut rng);
        prop_assert_eq!(open(&vshares[..k]).unwrap(), secret);
    }

    #[test]
    fn threshold_above_n_is_rejected(n in 1usize..10, extra in 1usize..5) {
        let indices: Vec<Scalar> = (1..=n as u64).map(Scalar::from).collect();
        let result = share_secret(&params(), &indices, Scalar::ONE, n + extra);
        prop_assert_eq!(result, Err(VssError::ThresholdTooLarge { k: n + extra, n }));
    }
}

#[test]
fn three_shares_threshold_two_secret_42() {
    let params = params();
    let indices: Vec<Scalar> = (1..=3u64).map(Scalar::from).collect();
    let secret = Scalar::from(42u64);

    let (vshares, c) = share_secret(&params, &indices, secret, 2).unwrap();
    assert_eq!(vshares.len(), 3);
    assert_eq!(c.len(), 2);
    assert!(vshares.iter().all(|v| is_valid(&params, &c, v)));
    assert_eq!(open(&[vshares[0], vshares[1]]).unwrap(), secret);
    assert_eq!(open(&[vshares[1], vshares[2]]).unwrap(), secret);
}

#[test]
fn bit_flips_are_detected() {
    let params = params();
    let indices: Vec<Scalar> = (1..=4u64).map(Scalar::from).collect();
    let (vshares, c) = share_secret(&params, &indices, Scalar::random(&mut OsRng), 3).unwrap();
    let hex = vshares[2].to_hex();
    let bytes = hex::decode(&hex).unwrap();

    // one flip in the low byte of each field: index, value, decommitment
    for field in 0..3 {
        for bit in 0..8 {
            let mut tampered = bytes.clone();
            tampered[32 * field + 31] ^= 1 << bit;
            let vshare = VerifiableShare::<Scalar>::from_hex(&hex::encode(&tampered)).unwrap();
            if field == 0 && VssScalar::is_zero(vshare.index()) {
                continue;
            }
            assert!(!is_valid(&params, &c, &vshare), "field {} bit {}", field, bit);
        }
    }
}

#[test]
fn shares_and_commitment_survive_transport() {
    let params = params();
    let indices: Vec<Scalar> = (1..=5u64).map(Scalar::from).collect();
    let secret = Scalar::random(&mut OsRng);
    let (vshares, c) = share_secret(&params, &indices, secret, 3).unwrap();

    let c_hex = c.to_hex().unwrap();
    assert_eq!(c_hex.len(), 3 * 66);
    let c2 = Commitment::<ProjectivePoint>::from_hex(&c_hex).unwrap();

    let received: Vec<VerifiableShare<Scalar>> = vshares
        .iter()
        .map(|v| VerifiableShare::from_hex(&v.to_hex()).unwrap())
        .collect();
    assert!(received.iter().all(|v| is_valid(&params, &c2, v)));
    assert_eq!(open(&received[2..]).unwrap(), secret);

    let json = serde_json::to_string(&(&params, &c, &vshares)).unwrap();
    let (p3, c3, v3): (
        VssParams<ProjectivePoint>,
        Commitment<ProjectivePoint>,
        Vec<VerifiableShare<Scalar>>,
    ) = serde_json::from_str(&json).unwrap();
    assert_eq!(p3, params);
    assert_eq!(c3, c);
    assert_eq!(v3, vshares);
}

#[test]
fn plain_share_encoding() {
    let share = Share::new(Scalar::from(1u64), Scalar::from(2u64));
    let hex = share.to_hex();
    assert_eq!(hex.len(), 128);
    assert!(hex.ends_with("02"));
    assert_eq!(Share::<Scalar>::from_hex(&hex).unwrap(), share);
}
