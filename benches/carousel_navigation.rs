// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for carousel navigation and per-frame animation math.
//!
//! Measures the performance of:
//! - Index cycling (next/previous/go_to)
//! - Autoplay tick handling
//! - Slide transition and ticker offset evaluation

use criterion::{criterion_group, criterion_main, Criterion};
use meridian_showcase::carousel::{AutoplayPolicy, Carousel, Direction, SlideTransition};
use meridian_showcase::content::CLIENTS;
use meridian_showcase::ui::logo_ticker::{self, TickerSpeed};
use std::hint::black_box;
use std::time::{Duration, Instant};

fn bench_navigation(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel_navigation");

    let mut carousel = Carousel::new(4, AutoplayPolicy::default()).unwrap();

    group.bench_function("next_previous", |b| {
        b.iter(|| {
            carousel.next();
            carousel.previous();
            black_box(carousel.active_index());
        });
    });

    group.bench_function("go_to_cycle", |b| {
        b.iter(|| {
            for index in 0..4 {
                carousel.go_to(black_box(index));
            }
        });
    });

    let handle = carousel.autoplay_handle().unwrap();
    group.bench_function("autoplay_tick", |b| {
        b.iter(|| black_box(carousel.on_autoplay_tick(handle)));
    });

    group.finish();
}

fn bench_animation(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel_animation");

    let start = Instant::now();
    let transition = SlideTransition::start(Direction::Forward, start);
    let mid = start + Duration::from_millis(200);

    group.bench_function("transition_frame", |b| {
        b.iter(|| {
            black_box(transition.offset(black_box(mid), 96.0));
            black_box(transition.opacity(black_box(mid)));
        });
    });

    let width = logo_ticker::strip_width(&CLIENTS);
    let speed = TickerSpeed::default();
    group.bench_function("ticker_advance", |b| {
        b.iter(|| {
            black_box(logo_ticker::advance(
                black_box(1234.5),
                Duration::from_millis(16),
                speed,
                width,
            ))
        });
    });

    group.finish();
}

criterion_group!(benches, bench_navigation, bench_animation);
criterion_main!(benches);
