use chart_core::{with_cartesian_props, with_type, ChartOptions, ChartType, Series};
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, black_box};

fn gen_options(series: usize, points: usize) -> ChartOptions {
    let mut opts = ChartOptions::new().with_title("bench");
    for s in 0..series {
        let data = (0..points).map(|i| (i as f64 * 0.01 + s as f64).sin() * 10.0);
        opts = opts.add_series(Series::new(format!("s{s}")).with_data(data));
    }
    opts
}

fn bench_resolve(c: &mut Criterion) {
    let line = with_type(with_cartesian_props(|o: ChartOptions| o), ChartType::Line);
    let mut group = c.benchmark_group("resolve_and_translate");
    for &points in &[1_000usize, 10_000usize, 100_000usize] {
        let opts = gen_options(4, points);
        group.bench_with_input(BenchmarkId::from_parameter(format!("s4_p{points}")), &points, |b, _| {
            b.iter_batched(
                || opts.clone(),
                |o| { let _ = black_box(line(o).to_echarts_json()); },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_resolve);
criterion_main!(benches);
