//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Benchmarks for AnsiDecoder performance

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use nvterm_ansicodec::{AnsiConfig, AnsiDecoder, AnsiDispatcher, CommandDispatcher, TextEncoding};
use std::hint::black_box;

// Benchmark decoding plain text
fn bench_decode_plain_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_plain_text");

    for size in [10, 100, 1000, 10000].iter() {
        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let text = "A".repeat(size);
            let mut decoder = AnsiDecoder::default();

            b.iter(|| {
                decoder.input(black_box(text.as_bytes())).unwrap();
            });
        });
    }
    group.finish();
}

// Benchmark decoding UTF-8 text
fn bench_decode_utf8_text(c: &mut Criterion) {
    let text = "héllo wörld ✓ ".repeat(100);
    let mut decoder = AnsiDecoder::new(AnsiConfig::new().with_encoding(TextEncoding::Utf8));

    c.bench_function("decode_utf8_text", |b| {
        b.iter(|| {
            decoder.input(black_box(text.as_bytes())).unwrap();
        });
    });
}

// Benchmark decoding a screen full of positioned, colored text
fn bench_decode_mixed_screen(c: &mut Criterion) {
    let mut screen = Vec::new();
    for row in 1..=24 {
        screen.extend_from_slice(format!("\x1b[{row};1H\x1b[1;3{}m", row % 8).as_bytes());
        screen.extend_from_slice(&[b'x'; 70]);
        screen.extend_from_slice(b"\x1b[0m\x1b[K");
    }
    let mut decoder = AnsiDecoder::default();

    let mut group = c.benchmark_group("decode_mixed_screen");
    group.throughput(Throughput::Bytes(screen.len() as u64));
    group.bench_function("screen", |b| {
        b.iter(|| {
            decoder.input(black_box(&screen)).unwrap();
        });
    });
    group.finish();
}

// Benchmark the dispatcher alone
fn bench_dispatch(c: &mut Criterion) {
    let dispatcher = AnsiDispatcher::new();
    let commands: [(u8, &str); 6] = [
        (b'H', "12;40"),
        (b'm', "1;31;44"),
        (b'J', "2"),
        (b'A', "3"),
        (b'h', "?25"),
        (b'K', ""),
    ];

    c.bench_function("dispatch_commands", |b| {
        b.iter(|| {
            for (command, parameter) in &commands {
                black_box(dispatcher.dispatch(*command, black_box(parameter)).unwrap());
            }
        });
    });
}

criterion_group!(
    benches,
    bench_decode_plain_text,
    bench_decode_utf8_text,
    bench_decode_mixed_screen,
    bench_dispatch
);
criterion_main!(benches);
