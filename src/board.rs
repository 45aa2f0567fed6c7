use anyhow::{ensure, Result};
use hashbrown::HashMap;

use crate::blocks::{Block, BlockKind, Container};
use crate::problem::Problem;

/// The full manipulative state for one problem: every block and the
/// container it sits in. The evaluators treat a board as an immutable
/// snapshot; mutations go through `Exercise`, which clones the board into
/// history first.
///
/// Invariant: `total_value()` equals the dividend the board was dealt
/// from. Moving never changes it, split and merge preserve it per
/// container.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    divisor: u32,
    blocks: Vec<Block>,
}

impl Board {
    /// Deals the dividend out as base-ten blocks, all in the source pool.
    pub fn new(problem: &Problem) -> Self {
        Board {
            divisor: problem.divisor(),
            blocks: deal(problem.dividend()),
        }
    }

    pub fn divisor(&self) -> u32 {
        self.divisor
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// All container ids for this board, source first.
    pub fn containers(&self) -> impl Iterator<Item = Container> + '_ {
        std::iter::once(Container::Source).chain((0..self.divisor).map(Container::Plate))
    }

    fn check_container(&self, c: Container) -> Result<()> {
        if let Container::Plate(i) = c {
            ensure!(i < self.divisor, "plate {} out of range (divisor {})", i, self.divisor);
        }
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<()> {
        ensure!(
            index < self.blocks.len(),
            "block index {} out of range ({} blocks)",
            index,
            self.blocks.len()
        );
        Ok(())
    }

    /// Reassigns one block to another container.
    pub fn move_block(&mut self, index: usize, dest: Container) -> Result<()> {
        self.check_index(index)?;
        self.check_container(dest)?;
        self.blocks[index].container = dest;
        Ok(())
    }

    /// Moves the given block plus up to `count - 1` further blocks of the
    /// same kind out of the same container. Mirrors a drag with the batch
    /// size dialed above one; returns how many blocks actually moved.
    pub fn move_batch(&mut self, index: usize, dest: Container, count: usize) -> Result<usize> {
        ensure!(count > 0, "batch size must be at least 1");
        self.check_index(index)?;
        self.check_container(dest)?;
        let Block { kind, container: from } = self.blocks[index];
        self.blocks[index].container = dest;
        let mut moved = 1;
        for i in 0..self.blocks.len() {
            if moved == count {
                break;
            }
            if i != index && self.blocks[i].kind == kind && self.blocks[i].container == from {
                self.blocks[i].container = dest;
                moved += 1;
            }
        }
        Ok(moved)
    }

    /// Breaks one block into ten of the next smaller kind, staying in the
    /// same container. One-blocks are a no-op.
    pub fn split(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        let b = self.blocks[index];
        let Some(smaller) = b.kind.split_into() else {
            return Ok(());
        };
        self.blocks.remove(index);
        for _ in 0..10 {
            self.blocks.push(Block {
                kind: smaller,
                container: b.container,
            });
        }
        Ok(())
    }

    /// Carry-normalizes every container: ten ones fold into a ten, ten
    /// tens into a hundred. Value never crosses containers; afterwards
    /// each container holds at most nine ones and nine tens.
    pub fn merge_all(&mut self) {
        let mut tally: HashMap<Container, [u32; 3]> = HashMap::new();
        for b in &self.blocks {
            let counts = tally.entry(b.container).or_default();
            match b.kind {
                BlockKind::Hundred => counts[0] += 1,
                BlockKind::Ten => counts[1] += 1,
                BlockKind::One => counts[2] += 1,
            }
        }

        let mut next = Vec::with_capacity(self.blocks.len());
        for container in self.containers() {
            let [mut hundreds, mut tens, mut ones] =
                tally.get(&container).copied().unwrap_or_default();
            tens += ones / 10;
            ones %= 10;
            hundreds += tens / 10;
            tens %= 10;
            let runs = [
                (BlockKind::Hundred, hundreds),
                (BlockKind::Ten, tens),
                (BlockKind::One, ones),
            ];
            for (kind, n) in runs {
                for _ in 0..n {
                    next.push(Block { kind, container });
                }
            }
        }
        self.blocks = next;
    }

    /// Back to the freshly-dealt layout: same total value, everything in
    /// the source pool, re-decomposed by place value.
    pub fn reset(&mut self) {
        self.blocks = deal(self.total_value());
    }

    /// Count of blocks of `kind` in `container`.
    pub fn count_in(&self, kind: BlockKind, container: Container) -> usize {
        self.blocks
            .iter()
            .filter(|b| b.kind == kind && b.container == container)
            .count()
    }

    /// Count of blocks of `kind` across all containers.
    pub fn kind_total(&self, kind: BlockKind) -> usize {
        self.blocks.iter().filter(|b| b.kind == kind).count()
    }

    /// Per-plate counts of blocks of `kind`, indexed by plate.
    pub fn plate_counts(&self, kind: BlockKind) -> Vec<usize> {
        (0..self.divisor)
            .map(|i| self.count_in(kind, Container::Plate(i)))
            .collect()
    }

    /// Summed block value in one container.
    pub fn container_value(&self, container: Container) -> u32 {
        self.blocks
            .iter()
            .filter(|b| b.container == container)
            .map(|b| b.kind.value())
            .sum()
    }

    /// Summed block value per plate, indexed by plate.
    pub fn plate_values(&self) -> Vec<u32> {
        (0..self.divisor)
            .map(|i| self.container_value(Container::Plate(i)))
            .collect()
    }

    pub fn source_value(&self) -> u32 {
        self.container_value(Container::Source)
    }

    /// Sum over every container; equal to the dividend at all times.
    pub fn total_value(&self) -> u32 {
        self.blocks.iter().map(|b| b.kind.value()).sum()
    }
}

fn deal(dividend: u32) -> Vec<Block> {
    let runs = [
        (BlockKind::Hundred, dividend / 100),
        (BlockKind::Ten, dividend % 100 / 10),
        (BlockKind::One, dividend % 10),
    ];
    let mut blocks = vec![];
    for (kind, n) in runs {
        for _ in 0..n {
            blocks.push(Block {
                kind,
                container: Container::Source,
            });
        }
    }
    blocks
}
