use std::{collections::BTreeMap, prelude::v1::*, ptr::NonNull};

use arbitrary::Arbitrary;
use cordyceps::Linked;
use proptest::strategy::{Just, Strategy};

use crate::{AvlMap, Links, TreeNode};

#[derive(Debug)]
#[repr(C)]
pub struct TestNode {
    pub links: Links<TestNode>,
    pub key: u32,
}

impl TestNode {
    pub fn new(key: u32) -> Box<TestNode> {
        Box::new(TestNode {
            links: Links::new(),
            key,
        })
    }
}

unsafe impl Linked<Links<TestNode>> for TestNode {
    type Handle = Box<TestNode>;

    fn into_ptr(r: Self::Handle) -> NonNull<Self> {
        NonNull::new(Box::into_raw(r)).unwrap()
    }

    unsafe fn from_ptr(ptr: NonNull<Self>) -> Self::Handle {
        unsafe { Box::from_raw(ptr.as_ptr()) }
    }

    unsafe fn links(ptr: NonNull<Self>) -> NonNull<Links<TestNode>> {
        // SAFETY: Self is #[repr(C)] and `links` is first field
        ptr.cast()
    }
}

impl TreeNode<Links<TestNode>> for TestNode {
    type Key = u32;

    fn key(&self) -> &Self::Key {
        &self.key
    }
}

/// Upper bound on the height of an AVL tree holding `len` nodes.
pub fn max_height(len: usize) -> f64 {
    1.4405 * ((len + 2) as f64).log2()
}

#[derive(Copy, Clone, Debug, Arbitrary)]
pub enum ItemValue {
    Index(usize),
    Random(u32),
}

proptest::prop_compose! {
    fn index_strategy()(
        index in 0usize..1000,
    ) -> ItemValue {
        ItemValue::Index(index)
    }
}

proptest::prop_compose! {
    fn random_strategy()(
        random in 0u32..1000,
    ) -> ItemValue {
        ItemValue::Random(random)
    }
}

fn value_strategy() -> impl Strategy<Value = ItemValue> {
    proptest::prop_oneof![index_strategy(), random_strategy()]
}

#[derive(Copy, Clone, Debug, Arbitrary)]
pub enum Op {
    Set(ItemValue, u32),
    Get(ItemValue),
    Erase(ItemValue),
    First,
    PopFirst,
    Last,
    PopLast,
    Clone,
}

impl Op {
    fn finalize(self, sorted: &[u32]) -> FinalOp {
        fn get_key(v: &[u32], i: ItemValue) -> u32 {
            match i {
                ItemValue::Index(idx) => {
                    if v.is_empty() {
                        idx as u32
                    } else {
                        v[idx % v.len()]
                    }
                }
                ItemValue::Random(v) => v,
            }
        }

        match self {
            Op::Set(item, value) => FinalOp::Set(get_key(sorted, item), value),
            Op::Get(item) => FinalOp::Get(get_key(sorted, item)),
            Op::Erase(item) => FinalOp::Erase(get_key(sorted, item)),
            Op::First => FinalOp::First,
            Op::PopFirst => FinalOp::PopFirst,
            Op::Last => FinalOp::Last,
            Op::PopLast => FinalOp::PopLast,
            Op::Clone => FinalOp::Clone,
        }
    }
}

#[derive(Copy, Clone, Debug)]
enum FinalOp {
    Set(u32, u32),
    Get(u32),
    Erase(u32),
    First,
    PopFirst,
    Last,
    PopLast,
    Clone,
}

pub fn op_strategy() -> impl Strategy<Value = Op> {
    proptest::prop_oneof![
        (value_strategy(), proptest::num::u32::ANY).prop_map(|(key, value)| Op::Set(key, value)),
        value_strategy().prop_map(Op::Get),
        value_strategy().prop_map(Op::Erase),
        Just(Op::First),
        Just(Op::PopFirst),
        Just(Op::Last),
        Just(Op::PopLast),
        Just(Op::Clone),
    ]
}

pub fn run_btree_equivalence(ops: Vec<Op>) {
    let mut btree = BTreeMap::new();
    let mut avl: AvlMap<u32, u32> = AvlMap::new();

    for (op_id, op) in ops.into_iter().enumerate() {
        let sorted_keys: Vec<u32> = btree.keys().copied().collect();
        let final_op = op.finalize(&sorted_keys);

        match final_op {
            FinalOp::Set(key, value) => {
                let from_btree = btree.insert(key, value);
                let from_avl = avl.set(key, value);

                assert_eq!(from_btree, from_avl, "FinalOp #{op_id}: {final_op:?}");
            }

            FinalOp::Get(key) => {
                assert_eq!(
                    btree.get(&key),
                    avl.get(&key),
                    "FinalOp #{op_id}: {final_op:?}"
                );
                assert_eq!(
                    btree.contains_key(&key),
                    avl.exists(&key),
                    "FinalOp #{op_id}: {final_op:?}"
                );
            }

            FinalOp::Erase(key) => {
                let from_btree = btree.remove(&key).ok_or(crate::Error::KeyNotFound);
                let from_avl = avl.erase(&key);

                assert_eq!(from_btree, from_avl, "FinalOp #{op_id}: {final_op:?}");
                assert!(!avl.exists(&key), "FinalOp #{op_id}: {final_op:?}");
            }

            FinalOp::First => {
                assert_eq!(
                    btree.first_key_value(),
                    avl.first_key_value(),
                    "FinalOp #{op_id}: {final_op:?}"
                );
            }

            FinalOp::PopFirst => {
                assert_eq!(
                    btree.pop_first(),
                    avl.pop_first(),
                    "FinalOp #{op_id}: {final_op:?}"
                );
            }

            FinalOp::Last => {
                assert_eq!(
                    btree.last_key_value(),
                    avl.last_key_value(),
                    "FinalOp #{op_id}: {final_op:?}"
                );
            }

            FinalOp::PopLast => {
                assert_eq!(
                    btree.pop_last(),
                    avl.pop_last(),
                    "FinalOp #{op_id}: {final_op:?}"
                );
            }

            FinalOp::Clone => {
                // Continue with the copy; the original is dropped here.
                let copy = avl.clone();
                assert_eq!(copy, avl, "FinalOp #{op_id}: {final_op:?}");
                avl = copy;
            }
        }

        avl.assert_invariants();
        assert_eq!(btree.len(), avl.len());
        assert!(btree.iter().eq(avl.iter()));
        assert!((avl.height() as f64) <= max_height(avl.len()));
    }
}

#[derive(Clone, Debug, Arbitrary)]
pub enum CursorOp {
    // Get is not an operation as it's executed on every loop iteration to check equivalence.
    MoveNext,
    Restart,
    CheckEnd,
}

pub fn cursor_op_strategy() -> impl Strategy<Value = CursorOp> {
    proptest::prop_oneof![
        Just(CursorOp::MoveNext),
        Just(CursorOp::Restart),
        Just(CursorOp::CheckEnd),
    ]
}

#[derive(Clone, Debug)]
pub struct CursorEquivalenceInput {
    pub values: Vec<u32>,
    pub ops: Vec<CursorOp>,
}

impl<'a> arbitrary::Arbitrary<'a> for CursorEquivalenceInput {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        fn value(u: &mut arbitrary::Unstructured<'_>) -> u32 {
            u32::arbitrary(u).unwrap_or(0)
        }

        fn op(u: &mut arbitrary::Unstructured<'_>) -> CursorOp {
            CursorOp::arbitrary(u).unwrap_or(CursorOp::MoveNext)
        }

        let num_values = u8::arbitrary(u)? % 100;
        let num_ops = u16::arbitrary(u)? % 1000;

        let values = core::iter::repeat_with(|| value(u))
            .take(num_values.into())
            .collect();

        let ops = core::iter::repeat_with(|| op(u))
            .take(num_ops.into())
            .collect();

        Ok(CursorEquivalenceInput { values, ops })
    }
}

pub fn run_cursor_equivalence(values: Vec<u32>, ops: Vec<CursorOp>) {
    // Insertion order is kept so the tree shape depends on the input.
    let avl: AvlMap<u32, ()> = values.iter().map(|&v| (v, ())).collect();

    let mut vec = values;
    vec.sort_unstable();
    vec.dedup();

    fn vec_curs_next(v: &[u32], curs: Option<usize>) -> Option<usize> {
        curs.and_then(|i| i.checked_add(1)).filter(|&i| i < v.len())
    }

    let vec_begin = || (!vec.is_empty()).then_some(0);

    let mut vec_curs = vec_begin();
    let mut avl_curs = avl.begin();

    assert_eq!(avl.begin() == avl.end(), vec.is_empty());

    for op in ops {
        match op {
            CursorOp::MoveNext => {
                vec_curs = vec_curs_next(&vec, vec_curs);
                avl_curs.move_next();
            }

            CursorOp::Restart => {
                vec_curs = vec_begin();
                avl_curs = avl.begin();
            }

            CursorOp::CheckEnd => {
                assert_eq!(avl_curs == avl.end(), vec_curs.is_none());
                assert_eq!(avl_curs.is_end(), vec_curs.is_none());
            }
        }

        let v = vec_curs.map(|i| &vec[i]);
        let a = avl_curs.key_value().map(|(k, _)| k);

        assert_eq!(v, a);
    }
}
