// File: crates/chart-core/benches/render_bench.rs
// Summary: Build + SVG serialization throughput for synthetic trail datasets.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use trail_chart_core::{ChartConfig, TrailChart, TrailRecord};

fn records(n: usize) -> Vec<TrailRecord> {
    (0..n)
        .map(|i| {
            let e = 1500.0 + ((i * 7919) % 16_500) as f64;
            TrailRecord::new(format!("Region {i}"), e, 3.0 + (i % 20) as f64 / 10.0, "Lakes, Summits")
        })
        .collect()
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_and_svg");
    for &n in &[100usize, 5_000usize] {
        group.bench_function(format!("trails_{n}"), |b| {
            let data = records(n);
            b.iter(|| {
                let chart = TrailChart::build(data.clone(), ChartConfig::default()).expect("build");
                black_box(chart.to_svg());
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
