use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use shichu_geo::find_city;
use shichu_time::{CalculationOptions, SolarTermTable, adjust_birth_time, lunar_date};

fn adjust_bench(c: &mut Criterion) {
    let Ok(tokyo) = find_city("東京") else {
        return;
    };
    let Some(date) = NaiveDate::from_ymd_opt(1986, 5, 26) else {
        return;
    };
    let legacy = CalculationOptions::default();
    let intl = CalculationOptions::international();

    let mut group = c.benchmark_group("adjust");
    group.bench_function("legacy", |b| {
        b.iter(|| adjust_birth_time(black_box(date), black_box(5.0), tokyo, &legacy))
    });
    group.bench_function("international", |b| {
        b.iter(|| adjust_birth_time(black_box(date), black_box(5.0), tokyo, &intl))
    });
    group.finish();
}

fn calendar_bench(c: &mut Criterion) {
    let Some(date) = NaiveDate::from_ymd_opt(2024, 2, 10) else {
        return;
    };
    let mut group = c.benchmark_group("calendar");
    group.bench_function("solar_term_table", |b| {
        b.iter(|| SolarTermTable::for_year(black_box(1986)))
    });
    group.bench_function("lunar_date", |b| b.iter(|| lunar_date(black_box(date))));
    group.finish();
}

criterion_group!(benches, adjust_bench, calendar_bench);
criterion_main!(benches);
