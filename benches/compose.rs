// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the composition pipeline.
//!
//! Measures the performance of:
//! - Markup generation (scene to SVG document)
//! - Rasterization at preview and export resolutions
//! - The full preview refresh path (markup + raster)

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use thumbsmith::compose::scene::{Scene, SlotKind, CANVAS_HEIGHT, CANVAS_WIDTH};
use thumbsmith::compose::{document, ImageQuality, Rasterizer, SvgRasterizer};
use thumbsmith::media;

const PREVIEW_WIDTH: u32 = CANVAS_WIDTH / 2;
const PREVIEW_HEIGHT: u32 = CANVAS_HEIGHT / 2;

/// Build a scene carrying a real upload in both slots.
fn uploaded_scene() -> Scene {
    let mut scene = Scene::default();
    let pixels = image_rs::RgbaImage::from_fn(1280, 720, |x, y| {
        image_rs::Rgba([(x % 256) as u8, (y % 256) as u8, 128, 255])
    });
    let upload = media::from_decoded(image_rs::DynamicImage::ImageRgba8(pixels)).unwrap();
    scene.set_upload(SlotKind::Background, upload.clone());
    scene.set_upload(SlotKind::Foreground, upload);
    scene
}

/// Benchmark markup generation for the default placeholder scene.
fn bench_markup(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose");

    let placeholder = Scene::default();
    let uploaded = uploaded_scene();

    group.bench_function("markup_placeholder", |b| {
        b.iter(|| {
            let _ = black_box(document(&placeholder, ImageQuality::Preview));
        });
    });

    group.bench_function("markup_uploads_preview", |b| {
        b.iter(|| {
            let _ = black_box(document(&uploaded, ImageQuality::Preview));
        });
    });

    group.bench_function("markup_uploads_full", |b| {
        b.iter(|| {
            let _ = black_box(document(&uploaded, ImageQuality::Full));
        });
    });

    group.finish();
}

/// Benchmark rasterization of a fixed document at both target sizes.
fn bench_rasterize(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose");
    // Rendering full frames is slow enough that the default sample
    // count drags the run out.
    group.sample_size(20);

    let rasterizer = SvgRasterizer::new();
    let markup = document(&Scene::default(), ImageQuality::Preview);

    group.bench_function("rasterize_preview", |b| {
        b.iter(|| {
            let _ = black_box(
                rasterizer
                    .rasterize(&markup, PREVIEW_WIDTH, PREVIEW_HEIGHT)
                    .unwrap(),
            );
        });
    });

    group.bench_function("rasterize_export", |b| {
        b.iter(|| {
            let _ = black_box(
                rasterizer
                    .rasterize(&markup, CANVAS_WIDTH, CANVAS_HEIGHT)
                    .unwrap(),
            );
        });
    });

    group.finish();
}

/// Benchmark the full preview refresh path the editor runs per keystroke.
fn bench_preview_refresh(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose");
    group.sample_size(20);

    let rasterizer = SvgRasterizer::new();
    let scene = uploaded_scene();

    group.bench_function("preview_refresh", |b| {
        b.iter(|| {
            let markup = document(&scene, ImageQuality::Preview);
            let _ = black_box(
                rasterizer
                    .rasterize(&markup, PREVIEW_WIDTH, PREVIEW_HEIGHT)
                    .unwrap(),
            );
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_markup,
    bench_rasterize,
    bench_preview_refresh
);
criterion_main!(benches);
