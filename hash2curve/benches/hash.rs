//! hash to curve benchmarks

use criterion::{
    BenchmarkGroup, Criterion, criterion_group, criterion_main, measurement::Measurement,
};
use sswu_h2c::{HashToPoint, suites};

const MSG: &[u8] = b"abcdef0123456789";

fn bench_p256<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    let suite = suites::p256::suite(b"QUUX-V01-CS02-with-P256_XMD:SHA-256_SSWU_RO_").unwrap();
    let u = suite.field_hasher().hash(MSG).unwrap();

    group.bench_function("P-256 hash_to_field", |b| {
        b.iter(|| suite.hash_to_field::<2>(&[MSG]))
    });
    group.bench_function("P-256 map_to_curve", |b| b.iter(|| suite.map_to_curve(&u)));
    group.bench_function("P-256 hash_to_curve", |b| {
        b.iter(|| suite.hash_to_curve().hash(MSG))
    });
    group.bench_function("P-256 encode_to_curve", |b| {
        b.iter(|| suite.encode_to_curve().hash(MSG))
    });
}

fn bench_secp256k1<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    let suite =
        suites::secp256k1::suite(b"QUUX-V01-CS02-with-secp256k1_XMD:SHA-256_SSWU_RO_").unwrap();
    let u = suite.field_hasher().hash(MSG).unwrap();

    group.bench_function("secp256k1 map_to_curve", |b| {
        b.iter(|| suite.map_to_curve(&u))
    });
    group.bench_function("secp256k1 hash_to_curve", |b| {
        b.iter(|| suite.hash_to_curve().hash(MSG))
    });
    group.bench_function("secp256k1 encode_to_curve", |b| {
        b.iter(|| suite.encode_to_curve().hash(MSG))
    });
}

fn bench_hash(c: &mut Criterion) {
    let mut group = c.benchmark_group("hash to curve");
    bench_p256(&mut group);
    bench_secp256k1(&mut group);
    group.finish();
}

criterion_group!(benches, bench_hash);
criterion_main!(benches);
