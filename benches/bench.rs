// Copyright 2024 the snowdrift developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use criterion::{criterion_group, criterion_main, Criterion};
use snowdrift::Snowdrift;

fn bench_new(c: &mut Criterion) {
    c.bench_function("bench_new", |b| {
        b.iter(Snowdrift::new);
    });
}

fn bench_next_id(c: &mut Criterion) {
    let sd = Snowdrift::new().expect("could not create Snowdrift");
    c.bench_function("bench_next_id", |b| {
        b.iter(|| sd.next_id());
    });
}

criterion_group!(snowdrift_perf, bench_new, bench_next_id);
criterion_main!(snowdrift_perf);
