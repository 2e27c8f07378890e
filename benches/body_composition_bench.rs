// ABOUTME: Criterion benchmarks for the body-composition calculators
// ABOUTME: Measures BMI, Navy body-fat and full athlete-report computation over a roster
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Aquaclub Contributors

//! Criterion benchmarks for the body-composition calculators.
//!
//! Athlete dashboards compute these figures for a whole roster at once, so
//! the roster benchmarks matter more than the single-call ones.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use aquaclub::intelligence::{
    calculate_bmi, calculate_body_fat_percentage, BodyCompositionReport, BodyMeasurements,
};
use aquaclub::models::Gender;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// Roster sizes benchmarked
const ROSTER_SIZES: [usize; 3] = [10, 100, 1000];

#[allow(clippy::cast_precision_loss)]
fn generate_roster(count: usize) -> Vec<BodyMeasurements> {
    (0..count)
        .map(|index| {
            let gender = if index % 2 == 0 {
                Gender::Male
            } else {
                Gender::Female
            };
            BodyMeasurements {
                gender: Some(gender),
                weight_kg: Some(50.0 + ((index * 7) % 50) as f64),
                height_cm: Some(150.0 + ((index * 13) % 45) as f64),
                waist_cm: Some(65.0 + ((index * 11) % 35) as f64),
                neck_cm: Some(30.0 + ((index * 3) % 10) as f64),
                hip_cm: Some(85.0 + ((index * 5) % 25) as f64),
            }
        })
        .collect()
}

fn bench_single_calculations(c: &mut Criterion) {
    let mut group = c.benchmark_group("single");

    group.bench_function("bmi", |b| {
        b.iter(|| calculate_bmi(black_box(Some(70.0)), black_box(Some(175.0))));
    });

    group.bench_function("body_fat_male", |b| {
        b.iter(|| {
            calculate_body_fat_percentage(
                black_box(Some("Masculino")),
                black_box(Some(175.0)),
                black_box(Some(85.0)),
                black_box(Some(38.0)),
                None,
            )
        });
    });

    group.bench_function("body_fat_female", |b| {
        b.iter(|| {
            calculate_body_fat_percentage(
                black_box(Some("Femenino")),
                black_box(Some(165.0)),
                black_box(Some(80.0)),
                black_box(Some(32.0)),
                black_box(Some(98.0)),
            )
        });
    });

    group.finish();
}

fn bench_roster_reports(c: &mut Criterion) {
    let mut group = c.benchmark_group("roster_reports");

    for size in ROSTER_SIZES {
        let roster = generate_roster(size);
        group.throughput(Throughput::Elements(u64::try_from(size).unwrap_or(u64::MAX)));
        group.bench_with_input(BenchmarkId::from_parameter(size), &roster, |b, roster| {
            b.iter(|| {
                roster
                    .iter()
                    .map(BodyCompositionReport::from_measurements)
                    .filter(|report| report.body_fat_percentage.is_some())
                    .count()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single_calculations, bench_roster_reports);
criterion_main!(benches);
