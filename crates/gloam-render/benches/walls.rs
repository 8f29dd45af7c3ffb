use std::sync::Arc;

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use gloam_geom::Vec2;
use gloam_render::Camera;
use gloam_world::{Block, Board, Texture};

fn brick() -> Arc<Texture> {
    let mut t = Texture::new(8, 8);
    for y in 0..8 {
        for x in 0..8 {
            *t.get_mut(x, y).unwrap() = if x == 0 || y == 0 { b')' } else { b':' };
        }
    }
    Arc::new(t)
}

fn pillared_hall() -> Board {
    let tex = brick();
    let wall = Arc::new(Block::walls(tex.clone()));
    let open = Arc::new(Block::room(tex.clone(), tex));
    let mut board = Board::filled(16, 16, wall.clone());
    for y in 1..15 {
        for x in 1..15 {
            board.set(x, y, open.clone());
        }
    }
    for y in (2..15).step_by(4) {
        for x in (2..15).step_by(3) {
            board.set(x, y, wall.clone());
        }
    }
    board
}

fn bench_wall_pass(c: &mut Criterion) {
    let board = pillared_hall();
    let mut cam = Camera::new(2.0, 1.5, 120, 40);
    cam.set_empty_pixel(b' ');
    cam.set_position(Vec2::new(8.3, 8.6));
    let mut group = c.benchmark_group("wall_pass");
    group.bench_function("120x40_in_16x16", |b| {
        b.iter(|| {
            cam.set_facing(black_box(0.7));
            cam.draw_all_columns(black_box(&board));
        })
    });
    group.finish();
}

criterion_group!(benches, bench_wall_pass);
criterion_main!(benches);
