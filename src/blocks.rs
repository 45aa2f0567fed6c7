/// Place-value kinds for base-ten blocks. The value of a block is fixed
/// by its kind, never fractional.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum BlockKind {
    Hundred,
    Ten,
    One,
}

impl BlockKind {
    pub fn value(self) -> u32 {
        match self {
            BlockKind::Hundred => 100,
            BlockKind::Ten => 10,
            BlockKind::One => 1,
        }
    }

    /// The kind this kind breaks into, ten pieces at a time. Ones don't
    /// split.
    pub fn split_into(self) -> Option<BlockKind> {
        match self {
            BlockKind::Hundred => Some(BlockKind::Ten),
            BlockKind::Ten => Some(BlockKind::One),
            BlockKind::One => None,
        }
    }
}

/// Where a block currently sits: the undistributed pool, or one of the
/// divisor-many plates.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Container {
    Source,
    Plate(u32),
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Block {
    pub kind: BlockKind,
    pub container: Container,
}
