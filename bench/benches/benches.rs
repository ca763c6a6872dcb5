use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use mountains::{Lcg, SceneConfig, build_lattice, fractal, get_heights, raster, svg};

const WIDTH: usize = 2048;
const HEIGHT: u32 = 1024;
const SEED: u64 = 2025;

fn bench_lattice(c: &mut Criterion) {
    c.bench_function("lattice (wavelength 8, width 2048)", |b| {
        b.iter(|| build_lattice(&Lcg::STANDARD, black_box(8.0), WIDTH, SEED))
    });
}

fn bench_fractal(c: &mut Criterion) {
    c.bench_function("fractal 8 octaves, width 2048", |b| {
        b.iter(|| fractal(8, black_box(WIDTH as f64 / 3.0), WIDTH, SEED))
    });
}

fn bench_heights(c: &mut Criterion) {
    c.bench_function("heights 8 octaves + normalize", |b| {
        b.iter(|| get_heights(WIDTH, HEIGHT as f64, 8, 3.0, 0.3, black_box(5), SEED))
    });
}

fn bench_raster_scene(c: &mut Criterion) {
    let config = SceneConfig::default();
    c.bench_function("default scene -> raster 2048x1024", |b| {
        b.iter(|| raster::render_config(black_box(&config), WIDTH as u32, HEIGHT))
    });
}

fn bench_svg_scene(c: &mut Criterion) {
    let config = SceneConfig::default();
    c.bench_function("default scene -> svg 2048x1024", |b| {
        b.iter(|| svg::render_config(black_box(&config), WIDTH as u32, HEIGHT))
    });
}

criterion_group!(
    terrain_benchmarks,
    bench_lattice,
    bench_fractal,
    bench_heights,
    bench_raster_scene,
    bench_svg_scene
);
criterion_main!(terrain_benchmarks);
