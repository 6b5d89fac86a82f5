//! Benchmarks for provider identification and option translation.
//!
//! Measures the cost of matching sources against the registry and of
//! building complete embed codes.
//!
//! Run with: `cargo bench --bench resolve_bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use multiplayer::provider::defaults::default_providers;
use multiplayer::{translate, EmptinessPolicy, GenericOption, Multiplayer, OptionSet, Registry};

// ---------------------------------------------------------------------------
// Source datasets
// ---------------------------------------------------------------------------

/// Sources that match a built-in provider.
const MATCHING_SOURCES: &[&str] = &[
    "http://www.dailymotion.com/video/x7tgad0",
    "https://www.dailymotion.com/embed/video/x2jvvep",
    "https://vimeo.com/76979871",
    "https://player.vimeo.com/video/148751763",
    "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
    "https://youtu.be/dQw4w9WgXcQ",
    r#"<iframe src="https://www.youtube.com/embed/dQw4w9WgXcQ"></iframe>"#,
];

/// Sources that should NOT match any provider.
const NON_MATCHING_SOURCES: &[&str] = &[
    "https://example.com/page",
    "https://en.wikipedia.org/wiki/Rust_(programming_language)",
    "https://vimeo.com/channels/staffpicks",
    "https://www.dailymotion.com/user/someone",
    "Just some text that happens to mention a video.",
];

fn full_options() -> OptionSet {
    OptionSet::new()
        .set(GenericOption::AutoPlay, true)
        .set(GenericOption::ShowInfos, true)
        .set(GenericOption::ShowBranding, false)
        .set(GenericOption::ShowRelated, true)
        .set(GenericOption::BackgroundColor, "000000")
        .set(GenericOption::ForegroundColor, "ffffff")
        .set(GenericOption::HighlightColor, "ffcc00")
        .set(GenericOption::Start, 30)
        .set("quality", "hd720")
}

fn bench_identify(c: &mut Criterion) {
    let mut group = c.benchmark_group("identify");
    let registry = Registry::default();
    // Compile every pattern before measuring.
    let _ = registry.identify("warm-up");

    group.bench_function("hit", |b| {
        b.iter(|| {
            for source in MATCHING_SOURCES {
                black_box(registry.identify(black_box(source)).ok());
            }
        });
    });

    group.bench_function("miss", |b| {
        b.iter(|| {
            for source in NON_MATCHING_SOURCES {
                black_box(registry.identify(black_box(source)).ok());
            }
        });
    });

    group.finish();
}

fn bench_translate(c: &mut Criterion) {
    let mut group = c.benchmark_group("translate");
    let providers = default_providers();
    let options = full_options();

    for (name, descriptor) in &providers {
        group.bench_function(name.as_str(), |b| {
            b.iter(|| {
                black_box(translate(
                    black_box(&descriptor.map),
                    black_box(&options),
                    EmptinessPolicy::SkipFalsy,
                ))
            });
        });
    }

    group.finish();
}

fn bench_html(c: &mut Criterion) {
    let mut group = c.benchmark_group("html");
    let multiplayer = Multiplayer::default();
    let options = full_options();

    group.bench_function("embed_all", |b| {
        b.iter(|| {
            for source in MATCHING_SOURCES.iter().chain(NON_MATCHING_SOURCES) {
                black_box(multiplayer.html(black_box(source), &options).ok());
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_identify, bench_translate, bench_html);
criterion_main!(benches);
