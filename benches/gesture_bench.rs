#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::Vec2;
use orbit_gestures::camera::CameraPose;
use orbit_gestures::input::{
    InputEvent, MouseButton, PointerInput, TouchInput, TouchPoint,
};
use orbit_gestures::options::{CameraOptions, OrbitOptions, Options};
use orbit_gestures::GestureController;

fn pose() -> CameraPose {
    CameraPose::new(
        OrbitOptions::default(),
        &CameraOptions::default(),
        (1920, 1080),
    )
}

fn controller() -> GestureController {
    GestureController::new(Options::default(), (1920, 1080))
        .unwrap_or_else(|e| panic!("default options are valid: {e}"))
}

fn screen_to_world_benchmark(c: &mut Criterion) {
    let mut pose = pose();
    pose.set_orbit_angle(30.0);
    pose.set_tilt_angle(45.0);
    c.bench_function("screen_to_world", |b| {
        let point = Vec2::new(700.0, 400.0);
        b.iter(|| black_box(pose.screen_to_world(black_box(point))))
    });
}

fn rotate_drag_benchmark(c: &mut Criterion) {
    let mut controller = controller();
    let _ = controller.handle(InputEvent::PointerDown(PointerInput::at(
        MouseButton::Right,
        Vec2::new(960.0, 540.0),
    )));
    let mut x = 960.0;
    c.bench_function("rotate_drag_sample", |b| {
        b.iter(|| {
            x += 1.0;
            black_box(controller.handle(InputEvent::PointerMove(
                PointerInput::at(MouseButton::Right, Vec2::new(x, 540.0)),
            )))
        })
    });
}

fn pinch_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("pinch");
    for fingers in [2_usize, 3] {
        let mut controller = controller();
        let spread = |d: f32| {
            TouchInput::new(
                (0..fingers)
                    .map(|i| {
                        TouchPoint::at(Vec2::new(900.0 + d * i as f32, 540.0))
                    })
                    .collect(),
            )
        };
        let _ = controller.handle(InputEvent::TouchDown(spread(100.0)));
        let mut d = 100.0;
        group.bench_function(format!("{fingers}_fingers"), |b| {
            b.iter(|| {
                d = if d > 400.0 { 100.0 } else { d + 7.0 };
                black_box(controller.handle(InputEvent::TouchMove(spread(d))))
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    screen_to_world_benchmark,
    rotate_drag_benchmark,
    pinch_benchmark
);
criterion_main!(benches);
