use quickcheck::{Arbitrary, Gen};

mod trees;

// Mirrors `src/test/quick.rs`, which is only compiled for unit tests.

/// An enum for the various kinds of "things" to do to
/// a tree in a quicktest.
#[derive(Copy, Clone, Debug)]
pub enum Op<K> {
    /// Add the K to the tree
    Insert(K),
    /// Delete the K from the tree
    Remove(K),
    /// Compare iterators
    Iter,
}

impl<K> Arbitrary for Op<K>
where
    K: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1, 2]).unwrap() {
            0 => Op::Insert(K::arbitrary(g)),
            1 => Op::Remove(K::arbitrary(g)),
            2 => Op::Iter,
            _ => unreachable!(),
        }
    }
}

/// Routes `log` output to stderr when `RUST_LOG` is set.
pub fn init_logger() {
    let _ = pretty_env_logger::try_init();
}
