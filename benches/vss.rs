use criterion::{black_box, criterion_group, criterion_main, Criterion};
use k256::{ProjectivePoint, Scalar};
use pedersen_vss::{is_valid, open, share_secret, VssParams, VssScalar};
use rand::rngs::OsRng;

const N: usize = 100;
const K: usize = 33;

fn setup() -> (VssParams<ProjectivePoint>, Vec<Scalar>, Scalar) {
    let params = VssParams::nothing_up_my_sleeve().unwrap();
    let indices = (0..N).map(|_| Scalar::random(&mut OsRng)).collect();
    (params, indices, Scalar::random(&mut OsRng))
}

fn bench_share(c: &mut Criterion) {
    let (params, indices, secret) = setup();
    c.bench_function("vss_share n=100 k=33", |b| {
        b.iter(|| share_secret(&params, black_box(&indices), secret, K).unwrap())
    });
}

fn bench_verify(c: &mut Criterion) {
    let (params, indices, secret) = setup();
    let (vshares, commitment) = share_secret(&params, &indices, secret, K).unwrap();
    c.bench_function("vss_verify k=33", |b| {
        b.iter(|| is_valid(&params, &commitment, black_box(&vshares[17])))
    });
}

fn bench_open(c: &mut Criterion) {
    let (params, indices, secret) = setup();
    let (vshares, _) = share_secret(&params, &indices, secret, K).unwrap();
    c.bench_function("vss_open k=33", |b| {
        b.iter(|| open(black_box(&vshares[..K])).unwrap())
    });
}

criterion_group!(benches, bench_share, bench_verify, bench_open);
criterion_main!(benches);
