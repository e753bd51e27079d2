//! Fixed-capacity element blocks and the directory constants.
//!
//! A [`Block`] is one heap allocation holding [`BLOCK_LEN`] raw element
//! slots.  Blocks carry no length or occupancy of their own: which slots
//! are initialized is decided entirely by the owning deque's logical
//! window.  Freeing a block therefore never drops elements — the owner
//! must destroy live slots first.

use core::mem::MaybeUninit;
use core::ptr::NonNull;

/// Number of element slots per block.
pub(crate) const BLOCK_LEN: usize = 8;

/// Directory slots allocated by an empty deque.
pub(crate) const DEFAULT_OUTER_LEN: usize = 2;

/// One segment of raw element storage.
///
/// `repr(transparent)` over the slot array, so a `NonNull<Block<T>>` can be
/// cast straight to a `*mut T` for slot arithmetic without materializing an
/// intermediate reference.
#[repr(transparent)]
pub(crate) struct Block<T> {
    slots: [MaybeUninit<T>; BLOCK_LEN],
}

impl<T> Block<T> {
    /// Allocates a block of uninitialized slots and leaks it to the caller.
    pub(crate) fn allocate() -> NonNull<Block<T>> {
        let block = Box::new(Block {
            slots: unsafe { MaybeUninit::uninit().assume_init() },
        });
        NonNull::from(Box::leak(block))
    }

    /// Releases a block's allocation.
    ///
    /// # Safety
    /// `block` must have come from [`Block::allocate`] and not already been
    /// freed.  Any live elements in the block must have been dropped in
    /// place beforehand; this only returns the raw storage.
    pub(crate) unsafe fn free(block: NonNull<Block<T>>) {
        drop(unsafe { Box::from_raw(block.as_ptr()) });
    }

    /// Raw pointer to slot `offset` of `block`.
    ///
    /// # Safety
    /// `block` must be live and `offset < BLOCK_LEN`.
    #[inline(always)]
    pub(crate) unsafe fn slot_ptr(block: NonNull<Block<T>>, offset: usize) -> *mut T {
        debug_assert!(offset < BLOCK_LEN);
        unsafe { block.cast::<T>().as_ptr().add(offset) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_allocate_free_roundtrip() {
        let block: NonNull<Block<u64>> = Block::allocate();
        unsafe {
            Block::slot_ptr(block, 0).write(7);
            Block::slot_ptr(block, BLOCK_LEN - 1).write(9);
            assert_eq!(*Block::slot_ptr(block, 0), 7);
            assert_eq!(*Block::slot_ptr(block, BLOCK_LEN - 1), 9);
            Block::free(block);
        }
    }

    #[test]
    fn test_block_slots_are_independent_allocations() {
        let a: NonNull<Block<u8>> = Block::allocate();
        let b: NonNull<Block<u8>> = Block::allocate();
        assert_ne!(a.as_ptr(), b.as_ptr());
        unsafe {
            Block::free(a);
            Block::free(b);
        }
    }
}
