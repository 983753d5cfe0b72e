use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use shichu_base::{Gender, RuleBook, build_chart, compute_pillars, resolve_combinations};
use shichu_geo::find_city;
use shichu_time::{CalculationOptions, adjust_birth_time};

fn chart_bench(c: &mut Criterion) {
    let Ok(tokyo) = find_city("東京") else {
        return;
    };
    let Some(date) = NaiveDate::from_ymd_opt(1986, 5, 26) else {
        return;
    };
    let Ok(adjusted) = adjust_birth_time(date, 5.0, tokyo, &CalculationOptions::default()) else {
        return;
    };
    let rules = RuleBook::standard();

    let mut group = c.benchmark_group("chart");
    group.bench_function("pillars", |b| {
        b.iter(|| compute_pillars(black_box(&adjusted), rules))
    });
    if let Ok(raw) = compute_pillars(&adjusted, rules) {
        group.bench_function("combinations", |b| {
            b.iter(|| resolve_combinations(black_box(&raw.pillars), rules))
        });
    }
    group.bench_function("full", |b| {
        b.iter(|| build_chart(black_box(&adjusted), Gender::Male, rules))
    });
    group.finish();
}

criterion_group!(benches, chart_bench);
criterion_main!(benches);
