//! The puzzle model: grid geometry, word slots, and the overlap relation.
//!
//! Everything in this module is computed once from the structure and word
//! list and is immutable afterwards. The solver only ever reads it.

use std::{collections::HashMap, fmt, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The orientation of a word slot in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    Across,
    Down,
}

/// A maximal run of fillable cells, treated as one CSP variable.
///
/// Two slots are equal iff all four fields match. The set of slots is fixed
/// for the lifetime of a [`Crossword`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Slot {
    /// Row of the first cell.
    pub row: usize,
    /// Column of the first cell.
    pub col: usize,
    pub direction: Direction,
    /// Number of cells, which is also the required word length.
    pub length: usize,
}

impl Slot {
    pub fn new(row: usize, col: usize, direction: Direction, length: usize) -> Self {
        Self {
            row,
            col,
            direction,
            length,
        }
    }

    /// Grid coordinate of the slot's `k`-th cell.
    pub fn cell(&self, k: usize) -> (usize, usize) {
        match self.direction {
            Direction::Across => (self.row, self.col + k),
            Direction::Down => (self.row + k, self.col),
        }
    }

    /// All grid coordinates covered by the slot, in order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.length).map(|k| self.cell(k))
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dir = match self.direction {
            Direction::Across => "across",
            Direction::Down => "down",
        };
        write!(f, "({}, {}) {} [{}]", self.row, self.col, dir, self.length)
    }
}

/// An immutable crossword puzzle: grid geometry, derived slots, vocabulary,
/// and the precomputed overlap and neighbor relations.
#[derive(Debug, Clone)]
pub struct Crossword {
    height: usize,
    width: usize,
    fillable: Vec<Vec<bool>>,
    slots: Vec<Slot>,
    vocabulary: im::HashSet<String>,
    overlaps: HashMap<(Slot, Slot), (usize, usize)>,
    neighbors: HashMap<Slot, Vec<Slot>>,
}

impl Crossword {
    /// Builds a puzzle from a structure description and a word list.
    ///
    /// The structure text has one row per line; `_` marks a fillable cell
    /// and any other character a blocked one. The grid width is the longest
    /// line, with shorter lines blocked past their end. The word list has
    /// one candidate per line; entries are uppercased and deduplicated.
    /// Word lists are expected to be ASCII.
    pub fn parse(structure: &str, words: &str) -> Result<Self> {
        let lines: Vec<&str> = structure
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .collect();
        if lines.is_empty() {
            return Err(Error::EmptyStructure);
        }

        let height = lines.len();
        let width = lines.iter().map(|line| line.len()).max().unwrap_or(0);
        if width == 0 {
            return Err(Error::EmptyStructure);
        }

        let fillable: Vec<Vec<bool>> = lines
            .iter()
            .map(|line| {
                (0..width)
                    .map(|col| line.as_bytes().get(col) == Some(&b'_'))
                    .collect()
            })
            .collect();

        let vocabulary: im::HashSet<String> = words
            .lines()
            .map(str::trim)
            .filter(|word| !word.is_empty())
            .map(str::to_uppercase)
            .collect();

        let slots = derive_slots(&fillable, height, width);
        let (overlaps, neighbors) = compute_overlaps(&slots);

        Ok(Self {
            height,
            width,
            fillable,
            slots,
            vocabulary,
            overlaps,
            neighbors,
        })
    }

    /// Reads the structure and word list from disk and builds the puzzle.
    pub fn from_files(structure: &Path, words: &Path) -> Result<Self> {
        let structure_text = std::fs::read_to_string(structure).map_err(|source| Error::Read {
            path: structure.to_path_buf(),
            source,
        })?;
        let words_text = std::fs::read_to_string(words).map_err(|source| Error::Read {
            path: words.to_path_buf(),
            source,
        })?;
        Self::parse(&structure_text, &words_text)
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Whether the cell at `(row, col)` can hold a letter.
    pub fn is_fillable(&self, row: usize, col: usize) -> bool {
        self.fillable[row][col]
    }

    /// The slots in a stable order (across before down, then row-major).
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn vocabulary(&self) -> &im::HashSet<String> {
        &self.vocabulary
    }

    /// The shared cell of two slots, as local indices into each word, or
    /// `None` if the slots do not intersect.
    pub fn overlap(&self, x: Slot, y: Slot) -> Option<(usize, usize)> {
        self.overlaps.get(&(x, y)).copied()
    }

    /// Slots that share a cell with `slot`, in stable slot order.
    pub fn neighbors(&self, slot: Slot) -> &[Slot] {
        self.neighbors.get(&slot).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every ordered pair of intersecting slots, in stable slot order.
    pub fn arcs(&self) -> impl Iterator<Item = (Slot, Slot)> + '_ {
        self.slots
            .iter()
            .flat_map(move |&x| self.neighbors(x).iter().map(move |&y| (x, y)))
    }
}

/// Scans the grid for maximal runs of fillable cells. Runs of a single cell
/// are not slots; the shortest word is two letters.
fn derive_slots(fillable: &[Vec<bool>], height: usize, width: usize) -> Vec<Slot> {
    let mut slots = Vec::new();

    for row in 0..height {
        for col in 0..width {
            let starts_run = fillable[row][col] && (col == 0 || !fillable[row][col - 1]);
            if starts_run {
                let length = (col..width).take_while(|&c| fillable[row][c]).count();
                if length > 1 {
                    slots.push(Slot::new(row, col, Direction::Across, length));
                }
            }
        }
    }

    for row in 0..height {
        for col in 0..width {
            let starts_run = fillable[row][col] && (row == 0 || !fillable[row - 1][col]);
            if starts_run {
                let length = (row..height).take_while(|&r| fillable[r][col]).count();
                if length > 1 {
                    slots.push(Slot::new(row, col, Direction::Down, length));
                }
            }
        }
    }

    slots
}

/// Builds the symmetric overlap relation and, from it, the neighbor lists.
/// Two distinct slots share at most one cell.
fn compute_overlaps(
    slots: &[Slot],
) -> (
    HashMap<(Slot, Slot), (usize, usize)>,
    HashMap<Slot, Vec<Slot>>,
) {
    let mut by_cell: HashMap<(usize, usize), Vec<(Slot, usize)>> = HashMap::new();
    for &slot in slots {
        for (k, cell) in slot.cells().enumerate() {
            by_cell.entry(cell).or_default().push((slot, k));
        }
    }

    let mut overlaps = HashMap::new();
    for occupants in by_cell.values() {
        for &(x, i) in occupants {
            for &(y, j) in occupants {
                if x != y {
                    overlaps.insert((x, y), (i, j));
                }
            }
        }
    }

    let mut neighbors: HashMap<Slot, Vec<Slot>> = HashMap::new();
    for &x in slots {
        let adjacent: Vec<Slot> = slots
            .iter()
            .copied()
            .filter(|&y| overlaps.contains_key(&(x, y)))
            .collect();
        neighbors.insert(x, adjacent);
    }

    (overlaps, neighbors)
}
