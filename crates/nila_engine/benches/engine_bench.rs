use criterion::{Criterion, black_box, criterion_group, criterion_main};
use nila_date::CalendarDate;
use nila_engine::{day_info, scan_vasthu_days_in_year};

fn day_info_bench(c: &mut Criterion) {
    let date = CalendarDate::new(2024, 4, 14);

    let mut group = c.benchmark_group("engine_day_info");
    group.bench_function("day_info", |b| b.iter(|| day_info(black_box(date))));
    group.finish();
}

fn vasthu_scan_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine_vasthu_scan");
    group.sample_size(50);
    group.bench_function("scan_year", |b| {
        b.iter(|| scan_vasthu_days_in_year(black_box(2025)))
    });
    group.finish();
}

criterion_group!(benches, day_info_bench, vasthu_scan_bench);
criterion_main!(benches);
