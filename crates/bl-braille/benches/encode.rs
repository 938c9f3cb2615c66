use std::hint::black_box;

use bl_braille::encode::encode_rows;
use bl_braille::trim::trim_rows;
use bl_core::frame::FrameBuffer;
use criterion::{Criterion, criterion_group, criterion_main};

fn checker(width: u32, height: u32) -> FrameBuffer {
    let mut frame = FrameBuffer::new(width, height);
    for y in 0..height {
        for x in 0..width {
            if (x / 3 + y / 5) % 2 == 0 {
                frame.set_pixel(x, y, [255, 255, 255, 255]);
            }
        }
    }
    frame
}

fn bench_encode(c: &mut Criterion) {
    let frame = checker(60, 60);
    c.bench_function("encode_rows 30x15", |b| {
        b.iter(|| encode_rows(black_box(&frame), black_box(40)));
    });

    let big = checker(400, 400);
    c.bench_function("encode+trim 200x100", |b| {
        b.iter(|| trim_rows(encode_rows(black_box(&big), black_box(40))));
    });
}

criterion_group!(benches, bench_encode);
criterion_main!(benches);
