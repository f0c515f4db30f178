#![cfg(feature = "model")]

use arbitrary::{Arbitrary, Unstructured};
use cordyceps_avl::model::{self, CursorEquivalenceInput, CursorOp, ItemValue, Op};

#[test]
fn btree_equivalence_from_fixed_ops() {
    let ops = vec![
        Op::Set(ItemValue::Random(5), 50),
        Op::Set(ItemValue::Random(3), 30),
        Op::Set(ItemValue::Random(8), 80),
        Op::Set(ItemValue::Index(1), 51),
        Op::Get(ItemValue::Index(0)),
        Op::Clone,
        Op::Erase(ItemValue::Index(1)),
        Op::Erase(ItemValue::Random(42)),
        Op::First,
        Op::Last,
        Op::PopFirst,
        Op::PopLast,
    ];

    model::run_btree_equivalence(ops);
}

#[test]
fn equivalence_from_raw_bytes() {
    let bytes: Vec<u8> = (0..=255u8).cycle().take(4096).collect();

    let mut u = Unstructured::new(&bytes);
    let ops = Vec::<Op>::arbitrary(&mut u).unwrap();
    model::run_btree_equivalence(ops);

    let mut u = Unstructured::new(&bytes);
    let input = CursorEquivalenceInput::arbitrary(&mut u).unwrap();
    model::run_cursor_equivalence(input.values, input.ops);
}

#[test]
fn cursor_equivalence_from_fixed_ops() {
    let ops = vec![
        CursorOp::CheckEnd,
        CursorOp::MoveNext,
        CursorOp::MoveNext,
        CursorOp::Restart,
        CursorOp::MoveNext,
        CursorOp::MoveNext,
        CursorOp::MoveNext,
        CursorOp::MoveNext,
        CursorOp::CheckEnd,
        CursorOp::MoveNext,
        CursorOp::CheckEnd,
    ];

    model::run_cursor_equivalence(vec![9, 1, 4, 4, 7], ops);
}
