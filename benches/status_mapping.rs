// SPDX-License-Identifier: MIT OR Apache-2.0
//! Benchmarks for status mapping and problem-payload assembly at varying
//! wrap depths.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use faultline::{Fault, ProblemDetails, Slug, status_of};
use std::error::Error as StdError;
use std::fmt;

#[derive(Debug)]
struct Layer {
    label: String,
    inner: Box<dyn StdError + Send + Sync>,
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.inner)
    }
}

impl StdError for Layer {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(self.inner.as_ref() as &(dyn StdError + 'static))
    }
}

/// A fault buried under `depth` generic wrapper layers.
fn buried(depth: usize) -> Box<dyn StdError + Send + Sync> {
    let fault = Fault::new(Slug::Invalid)
        .with_details("payload rejected")
        .with_param("email", "must be a valid address");
    let mut err: Box<dyn StdError + Send + Sync> = Box::new(fault);
    for i in 0..depth {
        err = Box::new(Layer {
            label: format!("layer-{i}"),
            inner: err,
        });
    }
    err
}

fn bench_status_of(c: &mut Criterion) {
    let mut group = c.benchmark_group("status_of");

    for depth in [0usize, 1, 5] {
        let err = buried(depth);
        group.bench_with_input(BenchmarkId::new("depth", depth), &err, |b, e| {
            b.iter(|| status_of(black_box(Some(e.as_ref()))));
        });
    }

    group.finish();
}

fn bench_problem_payload(c: &mut Criterion) {
    let mut group = c.benchmark_group("problem_payload");

    for depth in [0usize, 5] {
        let err = buried(depth);
        group.bench_with_input(BenchmarkId::new("depth", depth), &err, |b, e| {
            b.iter(|| ProblemDetails::from_error(black_box(e.as_ref()), "/bench"));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_status_of, bench_problem_payload);
criterion_main!(benches);
