use blockfall::core::{Board, GameSession, SessionSnapshot};
use blockfall::types::{Intent, PieceKind};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_gravity_tick(c: &mut Criterion) {
    let mut session = GameSession::classic(12345);

    c.bench_function("advance_gravity", |b| {
        b.iter(|| {
            session.advance_gravity();
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new([10, 20]);
            // Fill bottom 4 rows
            for y in 16..20 {
                for x in 0..10 {
                    board.set([x, y], Some(PieceKind::I));
                }
            }
            board.clear_full_lines();
        })
    });
}

fn bench_lateral_move(c: &mut Criterion) {
    let mut session = GameSession::classic(12345);

    c.bench_function("shift_left_right", |b| {
        b.iter(|| {
            session.apply(black_box(Intent::MoveLeft));
            session.apply(black_box(Intent::MoveRight));
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut session = GameSession::classic(12345);

    c.bench_function("rotate", |b| {
        b.iter(|| {
            session.apply(black_box(Intent::Rotate));
        })
    });
}

fn bench_hard_drop_volumetric(c: &mut Criterion) {
    c.bench_function("hard_drop_pit", |b| {
        b.iter(|| {
            let mut session = GameSession::volumetric(8, 16, 4, black_box(99));
            session.apply(Intent::HardDrop);
        })
    });
}

fn bench_snapshot_into(c: &mut Criterion) {
    let session = GameSession::classic(12345);
    let mut buffer = SessionSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            session.snapshot_into(black_box(&mut buffer));
        })
    });
}

criterion_group!(
    benches,
    bench_gravity_tick,
    bench_line_clear,
    bench_lateral_move,
    bench_rotate,
    bench_hard_drop_volumetric,
    bench_snapshot_into
);
criterion_main!(benches);
