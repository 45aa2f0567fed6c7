use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use divshare::{board_solved, compute_steps, BlockKind, Board, Container, Problem};
use std::hint::black_box;

/// Plays a whole exercise through: split everything down to ones, deal
/// the quotient onto every plate, and check the solved predicate.
fn share_out(dividend: u32, divisor: u32) {
    let problem = Problem::new(dividend, divisor).unwrap();
    let mut board = Board::new(&problem);
    while let Some(idx) = board
        .blocks()
        .iter()
        .position(|b| b.kind != BlockKind::One)
    {
        board.split(idx).unwrap();
    }
    for plate in 0..divisor {
        let idx = board
            .blocks()
            .iter()
            .position(|b| b.container == Container::Source)
            .unwrap();
        board
            .move_batch(idx, Container::Plate(plate), problem.quotient() as usize)
            .unwrap();
    }
    assert!(board_solved(&board, &problem));
}

fn stepper_varying_dividend(c: &mut Criterion) {
    let mut group = c.benchmark_group("stepper_varying_dividend");
    for &dividend in &[7, 68, 132, 507, 999] {
        group.bench_with_input(BenchmarkId::from_parameter(dividend), &dividend, |b, &d| {
            b.iter(|| compute_steps(black_box(d), 3));
        });
    }
    group.finish();
}

fn full_share(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_share");
    let cases = [(68, 2), (132, 3), (507, 4), (999, 9)];
    for (dividend, divisor) in cases {
        group.throughput(Throughput::Elements(dividend as u64));
        group.bench_with_input(
            BenchmarkId::new("share_out", format!("{}-{}", dividend, divisor)),
            &(dividend, divisor),
            |b, &(d, v)| {
                b.iter(|| share_out(black_box(d), v));
            },
        );
    }
    group.finish();
}

criterion_group!(stepper, stepper_varying_dividend, full_share);
criterion_main!(stepper);
