use ecfft_params::config::Parameters;
use ecfft_params::isogeny::descend;
use ecfft_params::rng::Csprng;
use ecfft_params::table::Table;

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_descent(c: &mut Criterion) {
    let params = Parameters::bn254();
    let field = params.field().unwrap();
    let curve = params.curve(&field).unwrap();

    c.bench_function("bn254 2-sylow", |b| b.iter(|| black_box(&curve).order_2_primary()));

    let subgroup = curve.order_2_primary().unwrap();
    let mut rng = Csprng::from_seed([1u8; 32]);
    let table = Table::with_random_offset(&curve, &subgroup, &mut rng).unwrap();
    let (s, s_prime) = table.split();

    let mut group = c.benchmark_group("bn254 pipeline");
    group.sample_size(10);
    group.bench_function("table 2^14", |b| {
        b.iter(|| Table::generate(&curve, &subgroup, black_box(table.offset())))
    });
    group.bench_function("descent 13 rounds", |b| {
        b.iter(|| descend(&curve, black_box(s.clone()), black_box(s_prime.clone())))
    });
    group.finish();
}

criterion_group!(benches, bench_descent);
criterion_main!(benches);
