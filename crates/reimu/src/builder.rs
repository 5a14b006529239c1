//! Double-array construction.
//!
//! The builder consumes the branching trie depth-first, choosing a `base`
//! for every branching node via the block allocator and streaming lazy
//! tails into the tail store. Placement of a node happens in two waves:
//! all child slots are claimed (their `check` set) before any child is
//! descended into, so a child's own placement search can never steal a
//! sibling's slot.

use crate::block::BlockList;
use crate::error::Result;
use crate::lexicon::Lexicon;
use crate::slot::{Slot, tail_tag};
use crate::trie::Node;

/// Number of processed nodes between progress callbacks.
pub const PROGRESS_STEP: usize = 4096;

/// Build a lexicon from `(key, value)` entries.
///
/// Keys are opaque byte strings; they must be non-empty and must not
/// contain `0x00`. Later entries overwrite earlier ones, so the outcome is
/// deterministic for any ordered input.
///
/// # Errors
///
/// Returns `Error::EmptyKey` or `Error::NulByteInKey` when a key is
/// invalid; no double-array work happens in that case.
///
/// # Example
///
/// ```
/// let lexicon = reimu::build([("cat", 10), ("car", 20), ("dog", 30)]).unwrap();
/// assert_eq!(lexicon.get(b"car"), Some(20));
/// assert_eq!(lexicon.get(b"ca"), None);
/// ```
pub fn build<I, K>(dict: I) -> Result<Lexicon>
where
    I: IntoIterator<Item = (K, i32)>,
    K: AsRef<[u8]>,
{
    build_impl(dict, None::<fn(usize, usize)>)
}

/// Build a lexicon, reporting progress as `(processed, total)` node counts
/// every [`PROGRESS_STEP`] nodes and once more on completion.
///
/// # Errors
///
/// Same as [`build`].
pub fn build_with_progress<I, K, F>(dict: I, progress: F) -> Result<Lexicon>
where
    I: IntoIterator<Item = (K, i32)>,
    K: AsRef<[u8]>,
    F: FnMut(usize, usize),
{
    build_impl(dict, Some(progress))
}

fn build_impl<I, K, F>(dict: I, progress: Option<F>) -> Result<Lexicon>
where
    I: IntoIterator<Item = (K, i32)>,
    K: AsRef<[u8]>,
    F: FnMut(usize, usize),
{
    let mut root = Node::from_entries(dict)?;

    let mut builder = Builder {
        slots: Vec::new(),
        blocks: BlockList::default(),
        suffix_index: Vec::new(),
        suffix_value: Vec::new(),
        suffix_bytes: Vec::new(),
        processed: 0,
        total: 0,
        progress,
    };

    // Root slot: base 0, check 0. Block 0 keeps 255 free slots.
    builder.blocks.add_block(&mut builder.slots);
    builder.slots[0] = Slot { base: 0, check: 0 };
    builder.blocks.consume(0, 1);

    if root.is_empty() {
        // Empty dictionary: a valid lexicon on which every lookup fails.
        return Ok(builder.into_lexicon());
    }

    // A lone tail at the root has no slot to carry its negative tag;
    // branching it restores the root invariant below.
    if matches!(root, Node::Tail { .. }) {
        root.split_tail();
    }

    builder.total = root.node_count();
    let root_base = builder.place(root, 0);
    assert_eq!(root_base, 0, "root base drifted from slot 0");

    if let Some(f) = builder.progress.as_mut() {
        f(builder.total, builder.total);
    }

    Ok(builder.into_lexicon())
}

struct Builder<F> {
    slots: Vec<Slot>,
    blocks: BlockList,
    suffix_index: Vec<i32>,
    suffix_value: Vec<i32>,
    suffix_bytes: Vec<u8>,
    processed: usize,
    total: usize,
    progress: Option<F>,
}

impl<F: FnMut(usize, usize)> Builder<F> {
    /// Place `node` into the double array and return the `base` value its
    /// parent must store: a non-negative offset for a branching node, a
    /// negative tail tag for a lazy tail.
    fn place(&mut self, node: Node, from_state: i32) -> i32 {
        self.processed += 1;
        if self.processed % PROGRESS_STEP == 0
            && let Some(f) = self.progress.as_mut()
        {
            f(self.processed, self.total);
        }

        match node {
            Node::Tail { suffix, value } => {
                let id = self.suffix_value.len();
                self.suffix_value.push(value);
                self.suffix_index.push(self.suffix_bytes.len() as i32);
                self.suffix_bytes.extend_from_slice(&suffix);
                self.suffix_bytes.push(0);
                tail_tag(id)
            }
            Node::Branch { value, children } => {
                let mut bytes: Vec<u8> = children.keys().copied().collect();
                if value.is_some() {
                    // The terminal value rides in the child position for
                    // byte 0, which is the base slot itself.
                    bytes.push(0);
                }
                let base = self.blocks.find_base(&mut self.slots, &bytes);

                if let Some(v) = value {
                    let slot = &mut self.slots[base];
                    assert!(slot.is_free(), "value slot {base} already occupied");
                    *slot = Slot {
                        base: v,
                        check: from_state,
                    };
                }
                for &b in children.keys() {
                    let s = base ^ usize::from(b);
                    assert!(self.slots[s].is_free(), "child slot {s} already occupied");
                    self.slots[s].check = from_state;
                }
                self.blocks.consume(base, bytes.len());

                for (b, child) in children {
                    let s = base ^ usize::from(b);
                    self.slots[s].base = self.place(child, s as i32);
                }

                base as i32
            }
            Node::Empty => unreachable!("empty node in a non-empty trie"),
        }
    }

    fn into_lexicon(self) -> Lexicon {
        Lexicon::from_parts(
            self.slots,
            self.suffix_index,
            self.suffix_value,
            self.suffix_bytes,
        )
    }
}
