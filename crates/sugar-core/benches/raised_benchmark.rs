// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use sugar_core::num::pow::{CheckedRaisedExt, RaisedExt};

/// Baseline: one multiplication per unit of exponent.
fn raised_naive(base: u64, exponent: u32) -> u64 {
    let mut acc = 1u64;
    for _ in 0..exponent {
        acc = acc.wrapping_mul(base);
    }
    acc
}

fn bench_raised(c: &mut Criterion) {
    let mut group = c.benchmark_group("raised_benchmark");

    for exponent in [4u32, 16, 63] {
        group.throughput(Throughput::Elements(exponent as u64));

        group.bench_with_input(
            BenchmarkId::new("squaring", exponent),
            &exponent,
            |b, &e| b.iter(|| black_box(2u64).raised(black_box(e))),
        );
        group.bench_with_input(
            BenchmarkId::new("checked", exponent),
            &exponent,
            |b, &e| b.iter(|| black_box(2u64).checked_raised(black_box(e))),
        );
        group.bench_with_input(
            BenchmarkId::new("naive", exponent),
            &exponent,
            |b, &e| b.iter(|| raised_naive(black_box(2u64), black_box(e))),
        );
    }
    group.finish();
}

fn bench_raised_float(c: &mut Criterion) {
    c.bench_function("raised_f64_x30", |b| {
        b.iter(|| black_box(1.0001f64).raised(black_box(30)))
    });
}

criterion_group!(benches, bench_raised, bench_raised_float);
criterion_main!(benches);
