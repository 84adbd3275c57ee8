//! Field tests - landing, matching, collapse, and cascade properties

use fling_blocks::types::{BlockType, FIELD_HEIGHT, FIELD_WIDTH, WORLD_WIDTH};
use fling_blocks::{Block, BlockField, MotionState, Vec2};

use BlockType::{Blue, Empty, Green, Red, Yellow};

/// A flung block already slid past every cell of its target row
fn arrived_block(kind: BlockType, row: usize) -> Block {
    let mut block = Block::new(
        kind,
        Vec2::new(WORLD_WIDTH, BlockField::row_y(row)),
        MotionState::Flinging,
    );
    block.row = Some(row);
    block
}

fn row_of(field: &BlockField, row: usize) -> Vec<BlockType> {
    (0..FIELD_WIDTH).map(|col| field.get(row, col).unwrap()).collect()
}

fn assert_left_packed(field: &BlockField) {
    for row in 0..FIELD_HEIGHT {
        let cells = row_of(field, row);
        let prefix = cells.iter().take_while(|kind| kind.is_color()).count();
        assert!(
            cells[prefix..].iter().all(|kind| !kind.is_color()),
            "row {} not left-packed: {:?}",
            row,
            cells
        );
    }
}

#[test]
fn test_landing_scenario_completes_and_clears_run() {
    // [RED, RED, E, E, E, E]: the frontier is column 2; landing a red makes
    // a run of three, which clears the whole row
    let mut field = BlockField::new();
    field.set(2, 0, Red);
    field.set(2, 1, Red);
    assert_eq!(field.frontier(2), Some(2));

    assert!(field.attempt_land(&arrived_block(Red, 2)));
    assert_eq!(row_of(&field, 2), vec![Empty; FIELD_WIDTH]);
}

#[test]
fn test_two_of_a_kind_stay_three_clear() {
    let mut field = BlockField::new();
    field.set(0, 0, Blue);
    assert!(field.attempt_land(&arrived_block(Blue, 0)));
    // Run of two: nothing clears
    assert_eq!(row_of(&field, 0), vec![Blue, Blue, Empty, Empty, Empty, Empty]);

    assert!(field.attempt_land(&arrived_block(Blue, 0)));
    // Run of three: everything clears
    assert_eq!(row_of(&field, 0), vec![Empty; FIELD_WIDTH]);
}

#[test]
fn test_full_row_landing_never_mutates() {
    let mut field = BlockField::new();
    for col in 0..FIELD_WIDTH {
        field.set(3, col, if col % 2 == 0 { Red } else { Blue });
    }
    assert!(field.is_row_full(3));

    let before = field.clone();
    for _ in 0..5 {
        assert!(!field.attempt_land(&arrived_block(Green, 3)));
    }
    assert_eq!(field, before);
}

#[test]
fn test_match_check_without_runs_is_idempotent() {
    let mut field = BlockField::new();
    field.set(0, 0, Red);
    field.set(0, 1, Blue);
    field.set(0, 2, Red);
    field.set(1, 0, Blue);
    field.set(1, 1, Red);
    let before = field.clone();

    let seeds: Vec<(usize, usize)> = (0..2).flat_map(|r| (0..3).map(move |c| (r, c))).collect();
    assert_eq!(field.resolve_matches(&seeds), 0);
    assert_eq!(field, before);
}

#[test]
fn test_cascade_terminates_on_adversarial_board() {
    // Alternating colors never match; seeding every cell must settle in one
    // pass and leave the board untouched
    let mut field = BlockField::new();
    for row in 0..FIELD_HEIGHT {
        for col in 0..FIELD_WIDTH {
            field.set(row, col, if (row + col) % 2 == 0 { Red } else { Blue });
        }
    }
    let before = field.clone();
    let seeds: Vec<(usize, usize)> = (0..FIELD_HEIGHT)
        .flat_map(|row| (0..FIELD_WIDTH).map(move |col| (row, col)))
        .collect();
    assert_eq!(field.resolve_matches(&seeds), 0);
    assert_eq!(field, before);
}

#[test]
fn test_full_column_run_clears() {
    // A run can span the full grid extent
    let mut field = BlockField::new();
    for row in 0..FIELD_HEIGHT {
        field.set(row, 0, Yellow);
    }
    assert_eq!(field.resolve_matches(&[(5, 0)]), FIELD_HEIGHT);
    assert!(field.cells().iter().all(|&kind| kind == Empty));
}

#[test]
fn test_chain_reaction_cascades_until_settled() {
    // Clearing the vertical red run in column 1 collapses row 0, joining
    // three greens into a second run that also clears
    let mut field = BlockField::new();
    field.set(0, 0, Green);
    field.set(0, 1, Red);
    field.set(0, 2, Green);
    field.set(0, 3, Green);
    field.set(1, 0, Yellow);
    field.set(1, 1, Red);
    field.set(2, 0, Blue);
    field.set(2, 1, Red);

    assert_eq!(field.resolve_matches(&[(0, 1)]), 6);
    assert_eq!(row_of(&field, 0), vec![Empty; FIELD_WIDTH]);
    assert_eq!(row_of(&field, 1), vec![Yellow, Empty, Empty, Empty, Empty, Empty]);
    assert_eq!(row_of(&field, 2), vec![Blue, Empty, Empty, Empty, Empty, Empty]);
    assert_left_packed(&field);
}

#[test]
fn test_left_packing_holds_after_arbitrary_settles() {
    let mut field = BlockField::new();
    let kinds = [Red, Blue, Green, Yellow, Red, Red, Blue, Green, Red, Blue];
    for (i, &kind) in kinds.iter().enumerate() {
        field.attempt_land(&arrived_block(kind, i % 3));
        assert_left_packed(&field);
    }
}

#[test]
fn test_landing_waits_for_frontier() {
    // A block that has not slid far enough does not land; the same block
    // past the frontier's x does
    let mut field = BlockField::new();
    field.set(1, 0, Red);
    field.set(1, 1, Blue);
    let frontier_x = BlockField::cell_x(2);

    let mut block = arrived_block(Green, 1);
    block.position.x = frontier_x - 0.5;
    assert!(!field.attempt_land(&block));
    assert_eq!(field.get(1, 2), Some(Empty));

    block.position.x = frontier_x;
    assert!(field.attempt_land(&block));
    assert_eq!(field.get(1, 2), Some(Green));
}
