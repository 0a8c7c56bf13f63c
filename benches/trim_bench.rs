//! Benchmark for function name trimming throughput

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use frametrim::{normalize_function_name, trim_batch, Platform, RawName, TrimOptions};
use std::hint::black_box;

const NATIVE_NAMES: &[&str] = &[
    "static unsigned int Scaleform::GFx::AS3::IMEManager::DispatchEvent(char const *,char const *,char const *) const",
    "std::basic_ostream<char, std::char_traits<char> >& std::operator<< <std::char_traits<char> >(std::basic_ostream<char, std::char_traits<char> >&, char)",
    "<actix::contextimpl::ContextFut<A, C> as futures::future::Future>::poll::h9de5fbebc1652d47",
    "tokio::runtime::current_thread::runtime::Runtime::enter::{{closure}}::{{closure}}",
    "main::{lambda(int)#1}",
];

const COCOA_NAMES: &[&str] = &[
    "partial apply for closure #1 () in closure #2 (T1) in f1(_: T2, arg: T3)",
    "@objc ViewController.causeCrash(Any, Foo -> Bar) -> SomeObject",
    "specialized thunk for @callee_guaranteed (@guaranteed [T1]) -> (@owned [T2])",
];

fn bench_single(c: &mut Criterion) {
    let mut group = c.benchmark_group("trim_single");
    for (platform, names) in [(Platform::Native, NATIVE_NAMES), (Platform::Cocoa, COCOA_NAMES)] {
        group.bench_with_input(BenchmarkId::from_parameter(platform), names, |b, names| {
            b.iter(|| {
                for name in names.iter() {
                    black_box(normalize_function_name(black_box(name), platform));
                }
            })
        });
    }
    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let frames: Vec<RawName> = NATIVE_NAMES
        .iter()
        .cycle()
        .take(10_000)
        .map(|name| RawName::new(*name, "native"))
        .collect();
    let options = TrimOptions::default();

    let mut group = c.benchmark_group("trim_batch");
    for parallel in [false, true] {
        group.bench_with_input(BenchmarkId::from_parameter(parallel), &parallel, |b, &parallel| {
            b.iter(|| black_box(trim_batch(&frames, &options, parallel)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_single, bench_batch);
criterion_main!(benches);
