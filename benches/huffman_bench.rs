use criterion::{black_box, criterion_group, criterion_main, Criterion};
use huffman_verifier::{compute_huffman, derive_text, Placement};

fn bench_compute(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_huffman");
    let short = derive_text("Henry David Kee").unwrap();
    // Every printable ASCII symbol with a skewed count.
    let wide: String = (0x20u8..0x7f)
        .flat_map(|b| std::iter::repeat(b as char).take(1 + (b as usize % 13)))
        .collect();

    for placement in [Placement::High, Placement::Low] {
        group.bench_function(format!("short_{placement}"), |b| {
            b.iter(|| compute_huffman(black_box(&short), placement).unwrap())
        });
        group.bench_function(format!("wide_{placement}"), |b| {
            b.iter(|| compute_huffman(black_box(&wide), placement).unwrap())
        });
    }
    group.finish();
}

fn bench_trace_render(c: &mut Criterion) {
    let text: String = (b'a'..=b'z')
        .flat_map(|b| std::iter::repeat(b as char).take((b - b'a') as usize + 1))
        .collect();
    let analysis = compute_huffman(&text, Placement::High).unwrap();

    c.bench_function("trace_lines", |b| b.iter(|| black_box(&analysis.trace).lines()));
}

criterion_group!(benches, bench_compute, bench_trace_render);
criterion_main!(benches);
