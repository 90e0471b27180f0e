use criterion::{criterion_group, criterion_main, black_box, BenchmarkId, Criterion};
use kline_core::{moving_average, PriceRecord};

fn gen_records(n: usize) -> Vec<PriceRecord> {
    let mut v = Vec::with_capacity(n);
    let mut price = 100.0f64;
    for i in 0..n {
        let open = price;
        let close = open + (i as f64 / 20.0).sin();
        price = close;
        v.push(PriceRecord {
            date: format!("d{i}"),
            open,
            close,
            low: open.min(close) - 1.0,
            high: open.max(close) + 1.0,
            change_amount: close - open,
            change_percent: "+0.00%".to_string(),
            volume: 1_000_000.0,
        });
    }
    v
}

fn bench_moving_average(c: &mut Criterion) {
    let mut group = c.benchmark_group("moving_average");
    for &n in &[10_000usize, 50_000usize] {
        let data = gen_records(n);
        for &w in &[5usize, 30usize, 250usize] {
            group.bench_with_input(
                BenchmarkId::from_parameter(format!("n{n}_w{w}")),
                &w,
                |b, &w| {
                    b.iter(|| {
                        let _ = black_box(moving_average(&data, w));
                    });
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_moving_average);
criterion_main!(benches);
