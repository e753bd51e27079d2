//! Random-access cursors over a [`SegmentedDeque`].
//!
//! A cursor is a (logical position, directory-slot pointer, direction
//! flag) triple.  The direction flag is fixed at construction: on a
//! reverse cursor [`move_next`](Cursor::move_next) walks toward the
//! front, offsets are applied in traversal order, and `<` means "earlier
//! in this cursor's own traversal order".  Both directions are values of
//! the same underlying representation, instantiated twice —
//! [`Cursor`] for shared access and [`CursorMut`] for exclusive access —
//! with [`CursorMut::as_cursor`] (or `From`) as the one-way conversion.
//!
//! Stepping across a block boundary adjusts the cached directory-slot
//! pointer by one; arbitrary offsets recompute position and pointer
//! directly, so `cursor + n` is O(1) for any `n`.
//!
//! # Contract
//!
//! Cursors borrow their deque, so any operation that could reallocate the
//! directory or shift logical positions requires `&mut` access and cannot
//! run while a cursor is alive — staleness is ruled out by the borrow
//! checker rather than at runtime.  Two usage rules remain unchecked:
//!
//! * The one-past-the-edge sentinels
//!   ([`cursor_end`](crate::deque::SegmentedDeque::cursor_end),
//!   [`cursor_rev_end`](crate::deque::SegmentedDeque::cursor_rev_end))
//!   must not be dereferenced; they exist only to be compared against.
//! * Comparing or subtracting cursors of different directions is
//!   meaningless and unsupported.
//!
//! [`SegmentedDeque`]: crate::deque::SegmentedDeque

use core::cmp::Ordering;
use core::fmt;
use core::marker::PhantomData;
use core::ops::{Add, AddAssign, Deref, DerefMut, Sub, SubAssign};
use core::ptr::NonNull;

use crate::block::{BLOCK_LEN, Block};

const B: isize = BLOCK_LEN as isize;

/// The shared core of [`Cursor`] and [`CursorMut`]: all position and
/// pointer arithmetic lives here, mutability is layered on by the two
/// public wrappers.
///
/// `position` is signed so the reverse-end sentinel (one before the
/// window's first logical index, which can sit at `-1`) stays
/// representable.  `outer` points at the directory slot for `position`'s
/// block; sentinel cursors may sit one slot outside the directory, so
/// every pointer move uses wrapping arithmetic and dereferencing is the
/// caller's responsibility.
pub(crate) struct RawCursor<T> {
    position: isize,
    outer: *const NonNull<Block<T>>,
    reverse: bool,
}

impl<T> Clone for RawCursor<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RawCursor<T> {}

impl<T> RawCursor<T> {
    pub(crate) fn new(position: isize, outer: *const NonNull<Block<T>>, reverse: bool) -> Self {
        Self {
            position,
            outer,
            reverse,
        }
    }

    /// One step toward higher logical indices, carrying the block pointer
    /// across the `position % BLOCK_LEN` wrap.
    #[inline(always)]
    fn step_up(&mut self) {
        if self.position.rem_euclid(B) == B - 1 {
            self.outer = self.outer.wrapping_add(1);
        }
        self.position += 1;
    }

    /// One step toward lower logical indices.
    #[inline(always)]
    fn step_down(&mut self) {
        if self.position.rem_euclid(B) == 0 {
            self.outer = self.outer.wrapping_sub(1);
        }
        self.position -= 1;
    }

    #[inline(always)]
    pub(crate) fn move_next(&mut self) {
        if self.reverse {
            self.step_down();
        } else {
            self.step_up();
        }
    }

    #[inline(always)]
    pub(crate) fn move_prev(&mut self) {
        if self.reverse {
            self.step_up();
        } else {
            self.step_down();
        }
    }

    /// Moves `count` positions in traversal order in one step: the new
    /// position is computed outright and the directory pointer shifts by
    /// the signed number of block boundaries crossed, not by repeated
    /// single-stepping.
    #[inline(always)]
    pub(crate) fn offset(&mut self, count: isize) {
        let delta = if self.reverse { -count } else { count };
        let new_position = self.position + delta;
        let crossed = new_position.div_euclid(B) - self.position.div_euclid(B);
        self.outer = self.outer.wrapping_offset(crossed);
        self.position = new_position;
    }

    /// Signed logical distance, read in `self`'s traversal order.
    #[inline(always)]
    pub(crate) fn distance(&self, other: &Self) -> isize {
        let diff = self.position - other.position;
        if self.reverse { -diff } else { diff }
    }

    #[inline(always)]
    pub(crate) fn same_position(&self, other: &Self) -> bool {
        self.position == other.position
    }

    /// Ordering by position, inverted for reverse cursors so `Less`
    /// always means "earlier in this cursor's traversal order".
    #[inline(always)]
    pub(crate) fn traversal_cmp(&self, other: &Self) -> Ordering {
        let ord = self.position.cmp(&other.position);
        if self.reverse { ord.reverse() } else { ord }
    }

    #[inline(always)]
    pub(crate) fn is_reverse(&self) -> bool {
        self.reverse
    }

    /// Pointer to the element under the cursor.
    ///
    /// # Safety
    /// The cursor must not be a sentinel: `outer` must point at a live
    /// directory slot and the slot at `position` must hold an initialized
    /// element.  The deque the cursor was created from must still own the
    /// directory `outer` points into.
    #[inline(always)]
    pub(crate) unsafe fn element_ptr(&self) -> *mut T {
        let block = unsafe { *self.outer };
        let offset = self.position.rem_euclid(B) as usize;
        unsafe { Block::slot_ptr(block, offset) }
    }
}

/// Shared-access random-access cursor.  `Copy`, like the reference it
/// morally is.
///
/// Obtained from [`cursor`](crate::deque::SegmentedDeque::cursor) /
/// [`cursor_end`](crate::deque::SegmentedDeque::cursor_end) (forward) or
/// [`cursor_rev`](crate::deque::SegmentedDeque::cursor_rev) /
/// [`cursor_rev_end`](crate::deque::SegmentedDeque::cursor_rev_end)
/// (reverse).  Dereferences to the element under it; see the module docs
/// for the sentinel contract.
pub struct Cursor<'a, T> {
    raw: RawCursor<T>,
    _marker: PhantomData<&'a T>,
}

/// Exclusive-access random-access cursor.
///
/// Same algebra as [`Cursor`], plus `DerefMut`.  Not `Copy` — two
/// exclusive cursors over one deque cannot coexist.
pub struct CursorMut<'a, T> {
    raw: RawCursor<T>,
    _marker: PhantomData<&'a mut T>,
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn from_raw(raw: RawCursor<T>) -> Self {
        Self {
            raw,
            _marker: PhantomData,
        }
    }

    /// Advances one position in traversal order (toward the front for a
    /// reverse cursor).
    #[inline(always)]
    pub fn move_next(&mut self) {
        self.raw.move_next();
    }

    /// Retreats one position in traversal order.
    #[inline(always)]
    pub fn move_prev(&mut self) {
        self.raw.move_prev();
    }

    /// `true` if this cursor traverses back-to-front.
    #[inline(always)]
    pub fn is_reverse(&self) -> bool {
        self.raw.is_reverse()
    }

    /// Signed distance from `other` to `self` in traversal order:
    /// `other + (self.distance(&other)) == self`.
    #[inline(always)]
    pub fn distance(&self, other: &Self) -> isize {
        self.raw.distance(&other.raw)
    }
}

impl<'a, T> CursorMut<'a, T> {
    pub(crate) fn from_raw(raw: RawCursor<T>) -> Self {
        Self {
            raw,
            _marker: PhantomData,
        }
    }

    /// Advances one position in traversal order.
    #[inline(always)]
    pub fn move_next(&mut self) {
        self.raw.move_next();
    }

    /// Retreats one position in traversal order.
    #[inline(always)]
    pub fn move_prev(&mut self) {
        self.raw.move_prev();
    }

    /// `true` if this cursor traverses back-to-front.
    #[inline(always)]
    pub fn is_reverse(&self) -> bool {
        self.raw.is_reverse()
    }

    /// Signed distance from `other` to `self` in traversal order.
    #[inline(always)]
    pub fn distance(&self, other: &Self) -> isize {
        self.raw.distance(&other.raw)
    }

    /// Read-only view of this cursor, borrowing it.
    #[inline(always)]
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor {
            raw: self.raw,
            _marker: PhantomData,
        }
    }
}

impl<'a, T> From<CursorMut<'a, T>> for Cursor<'a, T> {
    /// Demotes an exclusive cursor to a shared one over the same
    /// position, block and direction.
    fn from(cursor: CursorMut<'a, T>) -> Self {
        Cursor {
            raw: cursor.raw,
            _marker: PhantomData,
        }
    }
}

// ─── element access ──────────────────────────────────────────────────────

impl<T> Deref for Cursor<'_, T> {
    type Target = T;

    /// The element under the cursor.  Must not be called on a sentinel
    /// cursor (see the module docs).
    #[inline(always)]
    fn deref(&self) -> &T {
        unsafe { &*self.raw.element_ptr() }
    }
}

impl<T> Deref for CursorMut<'_, T> {
    type Target = T;

    /// The element under the cursor.  Must not be called on a sentinel
    /// cursor (see the module docs).
    #[inline(always)]
    fn deref(&self) -> &T {
        unsafe { &*self.raw.element_ptr() }
    }
}

impl<T> DerefMut for CursorMut<'_, T> {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut T {
        unsafe { &mut *self.raw.element_ptr() }
    }
}

// ─── offset algebra ──────────────────────────────────────────────────────

impl<T> AddAssign<isize> for Cursor<'_, T> {
    #[inline(always)]
    fn add_assign(&mut self, count: isize) {
        self.raw.offset(count);
    }
}

impl<T> SubAssign<isize> for Cursor<'_, T> {
    #[inline(always)]
    fn sub_assign(&mut self, count: isize) {
        self.raw.offset(-count);
    }
}

impl<'a, T> Add<isize> for Cursor<'a, T> {
    type Output = Cursor<'a, T>;

    #[inline(always)]
    fn add(mut self, count: isize) -> Cursor<'a, T> {
        self.raw.offset(count);
        self
    }
}

impl<'a, T> Sub<isize> for Cursor<'a, T> {
    type Output = Cursor<'a, T>;

    #[inline(always)]
    fn sub(mut self, count: isize) -> Cursor<'a, T> {
        self.raw.offset(-count);
        self
    }
}

impl<T> Sub for Cursor<'_, T> {
    type Output = isize;

    /// Signed distance in `self`'s traversal order, so
    /// "later cursor minus earlier cursor" is positive for both
    /// directions.
    #[inline(always)]
    fn sub(self, other: Self) -> isize {
        self.raw.distance(&other.raw)
    }
}

impl<T> AddAssign<isize> for CursorMut<'_, T> {
    #[inline(always)]
    fn add_assign(&mut self, count: isize) {
        self.raw.offset(count);
    }
}

impl<T> SubAssign<isize> for CursorMut<'_, T> {
    #[inline(always)]
    fn sub_assign(&mut self, count: isize) {
        self.raw.offset(-count);
    }
}

impl<'a, T> Add<isize> for CursorMut<'a, T> {
    type Output = CursorMut<'a, T>;

    #[inline(always)]
    fn add(mut self, count: isize) -> CursorMut<'a, T> {
        self.raw.offset(count);
        self
    }
}

impl<'a, T> Sub<isize> for CursorMut<'a, T> {
    type Output = CursorMut<'a, T>;

    #[inline(always)]
    fn sub(mut self, count: isize) -> CursorMut<'a, T> {
        self.raw.offset(-count);
        self
    }
}

// ─── comparisons ─────────────────────────────────────────────────────────
//
// Equality is by logical position alone; ordering additionally folds in
// the direction flag.  Both assume same-direction operands.

impl<T> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("position", &self.raw.position)
            .field("reverse", &self.raw.reverse)
            .finish()
    }
}

impl<T> fmt::Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("position", &self.raw.position)
            .field("reverse", &self.raw.reverse)
            .finish()
    }
}

impl<T> PartialEq for Cursor<'_, T> {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.raw.same_position(&other.raw)
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T> PartialOrd for Cursor<'_, T> {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Cursor<'_, T> {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> Ordering {
        self.raw.traversal_cmp(&other.raw)
    }
}

impl<T> PartialEq for CursorMut<'_, T> {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.raw.same_position(&other.raw)
    }
}

impl<T> Eq for CursorMut<'_, T> {}

impl<T> PartialOrd for CursorMut<'_, T> {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for CursorMut<'_, T> {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> Ordering {
        self.raw.traversal_cmp(&other.raw)
    }
}
