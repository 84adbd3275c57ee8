use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fling_blocks::types::{BlockType, FIELD_HEIGHT, FIELD_WIDTH, WORLD_WIDTH};
use fling_blocks::{Block, BlockField, Model, MotionState, Vec2};

fn arrived_block(kind: BlockType, row: usize) -> Block {
    let mut block = Block::new(
        kind,
        Vec2::new(WORLD_WIDTH, BlockField::row_y(row)),
        MotionState::Flinging,
    );
    block.row = Some(row);
    block
}

fn bench_update(c: &mut Criterion) {
    let mut model = Model::new(12345);
    c.bench_function("model_update_16ms", |b| {
        b.iter(|| {
            model.update(black_box(1.0 / 60.0));
        })
    });
}

fn bench_land_and_resolve(c: &mut Criterion) {
    c.bench_function("land_completing_run", |b| {
        b.iter(|| {
            let mut field = BlockField::new();
            field.set(2, 0, BlockType::Red);
            field.set(2, 1, BlockType::Red);
            field.attempt_land(&arrived_block(BlockType::Red, 2))
        })
    });
}

fn bench_cascade(c: &mut Criterion) {
    c.bench_function("resolve_two_pass_cascade", |b| {
        b.iter(|| {
            let mut field = BlockField::new();
            field.set(0, 0, BlockType::Green);
            field.set(0, 1, BlockType::Red);
            field.set(0, 2, BlockType::Green);
            field.set(0, 3, BlockType::Green);
            field.set(1, 0, BlockType::Yellow);
            field.set(1, 1, BlockType::Red);
            field.set(2, 0, BlockType::Blue);
            field.set(2, 1, BlockType::Red);
            field.resolve_matches(&[(0, 1)])
        })
    });
}

fn bench_adversarial_full_seed(c: &mut Criterion) {
    let seeds: Vec<(usize, usize)> = (0..FIELD_HEIGHT)
        .flat_map(|row| (0..FIELD_WIDTH).map(move |col| (row, col)))
        .collect();
    c.bench_function("resolve_checkerboard_no_match", |b| {
        b.iter(|| {
            let mut field = BlockField::new();
            for row in 0..FIELD_HEIGHT {
                for col in 0..FIELD_WIDTH {
                    field.set(
                        row,
                        col,
                        if (row + col) % 2 == 0 {
                            BlockType::Red
                        } else {
                            BlockType::Blue
                        },
                    );
                }
            }
            field.resolve_matches(black_box(&seeds))
        })
    });
}

criterion_group!(
    benches,
    bench_update,
    bench_land_and_resolve,
    bench_cascade,
    bench_adversarial_full_seed
);
criterion_main!(benches);
