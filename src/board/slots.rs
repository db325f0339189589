//! Board cells and the ordered empty-slot queue.

use serde::{Deserialize, Serialize};

use crate::core::ColorId;

/// Number of slots on the board (a 3x3 grid, row-major).
pub const BOARD_SIZE: usize = 9;

/// Slots per rendered row.
pub const ROW_WIDTH: usize = 3;

/// Board position, `0..BOARD_SIZE`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SlotIndex(u8);

impl SlotIndex {
    /// Create a slot index.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        assert!((index as usize) < BOARD_SIZE, "Slot index out of range");
        Self(index)
    }

    /// Get the raw index.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Index as usize for cell access.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Every slot in ascending order.
    pub fn all() -> impl Iterator<Item = SlotIndex> {
        (0..BOARD_SIZE as u8).map(SlotIndex)
    }
}

impl std::fmt::Display for SlotIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Slot({})", self.0)
    }
}

/// Three slots that score a Lucky Strike when they share a color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combination([SlotIndex; 3]);

impl Combination {
    /// Create a combination from three distinct slots.
    #[must_use]
    pub fn new(a: SlotIndex, b: SlotIndex, c: SlotIndex) -> Self {
        assert!(a != b && b != c && a != c, "Combination slots must be distinct");
        Self([a, b, c])
    }

    /// The three slots in declaration order.
    #[must_use]
    pub fn slots(&self) -> &[SlotIndex; 3] {
        &self.0
    }

    /// The shared color, if all three slots hold the same one.
    #[must_use]
    pub fn matched_color(&self, board: &Board) -> Option<ColorId> {
        let [a, b, c] = self.0;
        let color = board.get(a)?;
        (board.get(b) == Some(color) && board.get(c) == Some(color)).then_some(color)
    }
}

/// The 3x3 board.
///
/// Cells and the empty-slot queue live together so the queue always lists
/// exactly the empty cells. After every resolution pass the queue is sorted
/// ascending, so placement fills the lowest free index first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [Option<ColorId>; BOARD_SIZE],
    empty: Vec<SlotIndex>,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
            empty: SlotIndex::all().collect(),
        }
    }

    /// Build a board from raw cell values (0 = empty, otherwise a color id).
    ///
    /// ```
    /// use lucky_board::board::Board;
    ///
    /// let board = Board::from_raw([2, 2, 0, 0, 0, 0, 0, 0, 0]);
    /// assert_eq!(board.occupied_count(), 2);
    /// assert_eq!(board.empty_slots().len(), 7);
    /// ```
    #[must_use]
    pub fn from_raw(raw: [u8; BOARD_SIZE]) -> Self {
        let cells = raw.map(|v| (v > 0).then(|| ColorId::new(v)));
        let empty = SlotIndex::all().filter(|s| cells[s.index()].is_none()).collect();
        Self { cells, empty }
    }

    /// Raw cell values (0 = empty).
    #[must_use]
    pub fn to_raw(&self) -> [u8; BOARD_SIZE] {
        self.cells.map(|c| c.map_or(0, ColorId::raw))
    }

    /// All cells in slot order.
    #[must_use]
    pub fn cells(&self) -> &[Option<ColorId>; BOARD_SIZE] {
        &self.cells
    }

    /// Color in a slot, `None` if empty.
    #[must_use]
    pub fn get(&self, slot: SlotIndex) -> Option<ColorId> {
        self.cells[slot.index()]
    }

    /// The empty-slot queue, front first.
    #[must_use]
    pub fn empty_slots(&self) -> &[SlotIndex] {
        &self.empty
    }

    /// Number of cells holding a color.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// No empty slot left.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.empty.is_empty()
    }

    /// Every slot empty.
    #[must_use]
    pub fn is_clear(&self) -> bool {
        self.empty.len() == BOARD_SIZE
    }

    /// Iterate over occupied slots and their colors.
    pub fn occupied(&self) -> impl Iterator<Item = (SlotIndex, ColorId)> + '_ {
        SlotIndex::all().filter_map(|s| self.get(s).map(|c| (s, c)))
    }

    /// Write a color into the slot at the front of the queue.
    ///
    /// Returns the filled slot, or `None` if the board is full.
    pub(crate) fn fill_next(&mut self, color: ColorId) -> Option<SlotIndex> {
        if self.empty.is_empty() {
            return None;
        }
        let slot = self.empty.remove(0);
        debug_assert!(self.cells[slot.index()].is_none(), "queued {} was occupied", slot);
        self.cells[slot.index()] = Some(color);
        Some(slot)
    }

    /// Empty a slot and return it to the back of the queue.
    ///
    /// Returns the color that was removed, `None` if the slot was already empty.
    pub(crate) fn clear_slot(&mut self, slot: SlotIndex) -> Option<ColorId> {
        let color = self.cells[slot.index()].take()?;
        self.empty.push(slot);
        Some(color)
    }

    /// Empty every slot and restore the full ordered queue.
    pub(crate) fn reset(&mut self) {
        *self = Self::new();
    }

    /// Sort the queue ascending.
    pub(crate) fn sort_empty(&mut self) {
        self.empty.sort_unstable();
    }

    /// Queue length plus occupancy equals the board size, with no duplicates.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let mut seen = [false; BOARD_SIZE];
        for slot in &self.empty {
            if seen[slot.index()] || self.cells[slot.index()].is_some() {
                return false;
            }
            seen[slot.index()] = true;
        }
        self.empty.len() + self.occupied_count() == BOARD_SIZE
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
