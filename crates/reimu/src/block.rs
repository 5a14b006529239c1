//! Slot-array growth and base placement in 256-slot blocks.
//!
//! The double array grows in aligned blocks of 256 slots. Because child
//! positions are computed as `base ^ byte`, every child of a node lives in
//! the same block as its `base`, so per-block free-slot counts are exact
//! and a placement search never has to look outside one block at a time.
//!
//! Blocks that still have free slots form an ordered free list (insertion
//! order, oldest first). A block whose last free slot is consumed leaves
//! the list for good; its slots stay in the main array.

use crate::slot::Slot;

/// Slots per block.
pub(crate) const BLOCK_SLOTS: usize = 256;

#[derive(Debug)]
struct Block {
    id: usize,
    free_slots: usize,
}

/// Ordered free list over the blocks of a growing slot array.
#[derive(Debug, Default)]
pub(crate) struct BlockList {
    free: Vec<Block>,
}

impl BlockList {
    /// Append a fresh all-free block to `slots` and register it at the end
    /// of the free list. Returns the new block id.
    pub fn add_block(&mut self, slots: &mut Vec<Slot>) -> usize {
        let id = slots.len() / BLOCK_SLOTS;
        slots.resize(slots.len() + BLOCK_SLOTS, Slot::FREE);
        self.free.push(Block {
            id,
            free_slots: BLOCK_SLOTS,
        });
        id
    }

    /// Find a base offset at which every slot `base ^ c` for the given
    /// child bytes is free, appending a fresh block when no tracked block
    /// can host the set.
    pub fn find_base(&mut self, slots: &mut Vec<Slot>, children: &[u8]) -> usize {
        for block in &self.free {
            if block.free_slots < children.len() {
                continue;
            }
            let start = block.id * BLOCK_SLOTS;
            for base in start..start + BLOCK_SLOTS {
                let fits = children
                    .iter()
                    .all(|&c| slots[base ^ usize::from(c)].is_free());
                if fits {
                    return base;
                }
            }
        }

        // Every tracked block is too packed; an empty block hosts any
        // child set at its first slot.
        self.add_block(slots) * BLOCK_SLOTS
    }

    /// Account for `used` slots taken at offsets `base ^ c`, dropping the
    /// block from the free list once it is full.
    pub fn consume(&mut self, base: usize, used: usize) {
        let id = base / BLOCK_SLOTS;
        let pos = self
            .free
            .iter()
            .position(|b| b.id == id)
            .unwrap_or_else(|| panic!("block {id} missing from free list"));

        let block = &mut self.free[pos];
        assert!(
            block.free_slots >= used,
            "free-slot underflow in block {id}"
        );
        block.free_slots -= used;
        if block.free_slots == 0 {
            self.free.remove(pos);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_block_initializes_free_slots() {
        let mut blocks = BlockList::default();
        let mut slots = Vec::new();

        assert_eq!(blocks.add_block(&mut slots), 0);
        assert_eq!(blocks.add_block(&mut slots), 1);
        assert_eq!(slots.len(), 2 * BLOCK_SLOTS);
        assert!(slots.iter().all(|s| s.is_free()));
    }

    #[test]
    fn test_find_base_avoids_occupied_slots() {
        let mut blocks = BlockList::default();
        let mut slots = Vec::new();
        blocks.add_block(&mut slots);

        // Occupy the slot byte b'a' would take at base 0.
        slots[usize::from(b'a')].check = 0;
        blocks.consume(0, 1);

        let base = blocks.find_base(&mut slots, &[b'a']);
        assert_ne!(base ^ usize::from(b'a'), usize::from(b'a'));
        assert!(slots[base ^ usize::from(b'a')].is_free());
    }

    #[test]
    fn test_find_base_appends_block_when_packed() {
        let mut blocks = BlockList::default();
        let mut slots = Vec::new();
        blocks.add_block(&mut slots);

        // Fill block 0 completely.
        for slot in slots.iter_mut() {
            slot.check = 0;
        }
        blocks.consume(0, BLOCK_SLOTS);

        let base = blocks.find_base(&mut slots, &[1, 2, 3]);
        assert_eq!(base, BLOCK_SLOTS);
        assert_eq!(slots.len(), 2 * BLOCK_SLOTS);
    }

    #[test]
    fn test_consume_retires_full_blocks() {
        let mut blocks = BlockList::default();
        let mut slots = Vec::new();
        blocks.add_block(&mut slots);

        for slot in slots.iter_mut() {
            slot.check = 0;
        }
        blocks.consume(0, BLOCK_SLOTS - 1);
        blocks.consume(0, 1);

        // Block 0 is gone; placement must come from a new block.
        let base = blocks.find_base(&mut slots, &[b'x']);
        assert_eq!(base, BLOCK_SLOTS);
    }

    #[test]
    #[should_panic(expected = "missing from free list")]
    fn test_consume_unknown_block_panics() {
        let mut blocks = BlockList::default();
        blocks.consume(512, 1);
    }
}
