use criterion::{Criterion, black_box, criterion_group, criterion_main};
use dc_encode::{DotEncoder, DotToken, encode_dots};

fn bench_encode(c: &mut Criterion) {
    let encoder = DotEncoder::default();
    let tokens: Vec<DotToken> = ["1-2", "4", "5", "3-6"].into_iter().map(DotToken::from).collect();

    c.bench_function("encode_composite_tokens", |b| {
        b.iter(|| encoder.encode(black_box(&tokens)));
    });

    c.bench_function("encode_dots_all_cells", |b| {
        b.iter(|| {
            for mask in 0..=255u8 {
                let dots: Vec<u8> = (1..=8).filter(|d| mask & (1 << (d - 1)) != 0).collect();
                black_box(encode_dots(&dots));
            }
        });
    });
}

criterion_group!(benches, bench_encode);
criterion_main!(benches);
