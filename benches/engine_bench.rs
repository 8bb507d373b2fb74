// ABOUTME: Criterion benchmarks for the plan engine
// ABOUTME: Measures metric computation, full validation, and alternative generation latency
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the plan engine.
//!
//! A single evaluation, including alternatives, should stay well under 100 ms.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

mod common;

use common::fixtures::{blocked_profile, generate_profiles, safe_profile, ProfileBatchSize};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fitplan::engine::PlanEngine;
use fitplan::EngineConfig;

fn bench_compute(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute");
    let engine = PlanEngine::new(EngineConfig::default());
    let profile = safe_profile();

    group.bench_function("single_profile_metrics", |b| {
        b.iter(|| engine.compute(black_box(&profile)));
    });

    group.finish();
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");
    let engine = PlanEngine::new(EngineConfig::default());

    let safe = safe_profile();
    group.bench_function("safe_plan", |b| {
        b.iter(|| engine.evaluate(black_box(&safe)));
    });

    let blocked = blocked_profile();
    group.bench_function("blocked_plan_with_alternatives", |b| {
        b.iter(|| engine.evaluate(black_box(&blocked)));
    });

    group.finish();
}

fn bench_evaluate_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate_batch");
    let engine = PlanEngine::new(EngineConfig::default());

    for size in [ProfileBatchSize::Small, ProfileBatchSize::Medium] {
        let profiles = generate_profiles(size);
        group.throughput(Throughput::Elements(profiles.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(size.count()),
            &profiles,
            |b, profiles| {
                b.iter(|| {
                    for profile in profiles {
                        let _ = engine.evaluate(black_box(profile));
                    }
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_compute, bench_evaluate, bench_evaluate_batch);
criterion_main!(benches);
