use criterion::{Criterion, criterion_group, criterion_main};
use linelog::fmt::text::strip_ansi;
use linelog::fmt::{
    Arg, DEFAULT_PREFIX_FORMAT, FormatTemplate, PrefixContext, render_prefix, sprintf,
};
use linelog::{Level, PrefixLevel, Settings};
use std::hint::black_box;

fn bench_prefix_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_prefix");
    let ctx = PrefixContext::new(Level::Info, "src/net/socket.rs", 128);

    for prefix_level in [PrefixLevel::Minimal, PrefixLevel::Full] {
        let settings = Settings {
            prefix_level,
            user_header: "[bench]".to_string(),
            ..Settings::default()
        };
        group.bench_function(prefix_level.as_str(), |b| {
            b.iter(|| render_prefix(black_box(&settings), black_box(&ctx)));
        });
    }

    group.finish();
}

fn bench_template_parse(c: &mut Criterion) {
    c.bench_function("FormatTemplate::parse", |b| {
        b.iter(|| FormatTemplate::parse(black_box(DEFAULT_PREFIX_FORMAT)));
    });
}

fn bench_sprintf(c: &mut Criterion) {
    let args: Vec<Arg> = vec![42.into(), "worker".into(), 2.5.into(), 255.into()];
    c.bench_function("sprintf", |b| {
        b.iter(|| sprintf(black_box("%5d %-10s %8.3f %#x"), black_box(&args)));
    });
}

fn bench_strip_ansi(c: &mut Criterion) {
    let input = "\x1b[90m{TIME}\x1b[0m {USER_HEADER} \x1b[32m{SEVERITY}\x1b[0m {FILELINE}";
    c.bench_function("strip_ansi", |b| {
        b.iter(|| strip_ansi(black_box(input)));
    });
}

criterion_group!(
    benches,
    bench_prefix_render,
    bench_template_parse,
    bench_sprintf,
    bench_strip_ansi
);
criterion_main!(benches);
