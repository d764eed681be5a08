//! Per-frame camera update benchmarks.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use glam::Vec3;
use quatcam::{AngleLimits, ArrayMath, Camera, CameraMode};

fn resolve_benchmark(c: &mut Criterion) {
    let mut camera: Camera = Camera::new();
    camera.set_mode(CameraMode::FIRST_PERSON);
    camera.set_limits(AngleLimits::HALF_TURN_PITCH);
    camera.set_target_distance(4.0);

    c.bench_function("glam_frame", |b| {
        b.iter(|| {
            camera.rotate(black_box(Vec3::new(0.01, 0.02, 0.0)));
            camera.move_by(black_box(Vec3::new(0.1, 0.0, 0.05)));
            black_box(camera.resolve())
        })
    });

    let mut camera = Camera::<ArrayMath>::new();
    camera.set_mode(CameraMode::FIRST_PERSON);
    camera.set_limits(AngleLimits::HALF_TURN_PITCH);
    camera.set_target_distance(4.0);

    c.bench_function("array_frame", |b| {
        b.iter(|| {
            camera.rotate(black_box([0.01, 0.02, 0.0]));
            camera.move_by(black_box([0.1, 0.0, 0.05]));
            black_box(camera.resolve())
        })
    });
}

fn batched_input_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("batched_input");

    for count in [1, 10, 100].iter() {
        let mut camera: Camera = Camera::new();
        camera.set_mode(CameraMode::ORBITAL);
        camera.set_limits(AngleLimits::HALF_TURN_PITCH);

        group.bench_function(format!("{count}_events"), |b| {
            b.iter(|| {
                for _ in 0..*count {
                    camera.rotate(black_box(Vec3::new(0.001, 0.003, 0.0)));
                }
                black_box(camera.resolve())
            })
        });
    }
    group.finish();
}

fn look_at_benchmark(c: &mut Criterion) {
    let mut camera: Camera = Camera::new();
    let forward = Vec3::new(-1.0, -2.0, 0.5).normalize();
    c.bench_function("look_at", |b| {
        b.iter(|| camera.look_at(black_box(forward), black_box(Vec3::Y)))
    });
}

criterion_group!(benches, resolve_benchmark, batched_input_benchmark, look_at_benchmark);
criterion_main!(benches);
