//! Boolean matrices, stored as one bit vector per row.
//!
//! Multiplication is over the Boolean semiring, where addition is logical OR and
//! multiplication is logical AND. In other words, the entry `(i, k)` of a product
//! `A · B` is set iff there is some `j` with both `A[i, j]` and `B[j, k]` set.

#![deny(unsafe_code)]
#![deny(
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications
)]

use std::fmt;

use bit_vec::BitVec;

/// A Boolean matrix.
#[derive(Clone, Eq, PartialEq)]
pub struct BoolMatrix {
    rows: Vec<BitVec>,
    num_cols: usize,
}

impl BoolMatrix {
    /// Creates an all-false matrix.
    pub fn new(num_rows: usize, num_cols: usize) -> Self {
        BoolMatrix {
            rows: (0..num_rows)
                .map(|_| BitVec::from_elem(num_cols, false))
                .collect(),
            num_cols,
        }
    }

    /// Creates an all-false square matrix.
    pub fn square(n: usize) -> Self {
        Self::new(n, n)
    }

    /// Creates the `n`x`n` identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut result = Self::square(n);
        for (i, row) in result.rows.iter_mut().enumerate() {
            row.set(i, true);
        }
        result
    }

    /// Returns `(num_rows, num_cols)`.
    pub fn size(&self) -> (usize, usize) {
        (self.rows.len(), self.num_cols)
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Changes the dimensions. Entries within the new bounds are preserved,
    /// new entries are false.
    pub fn resize(&mut self, num_rows: usize, num_cols: usize) {
        for row in &mut self.rows {
            if num_cols > row.len() {
                row.grow(num_cols - row.len(), false);
            } else {
                row.truncate(num_cols);
            }
        }
        self.rows
            .resize_with(num_rows, || BitVec::from_elem(num_cols, false));
        self.num_cols = num_cols;
    }

    /// Sets the entry at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the position is out of bounds.
    pub fn set(&mut self, row: usize, col: usize, included: bool) {
        self.rows[row].set(col, included);
    }

    /// Returns the entry at `(row, col)`, or `false` if the position is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.rows
            .get(row)
            .and_then(|bits| bits.get(col))
            .unwrap_or(false)
    }

    /// Entrywise OR with another matrix of the same size. Returns `true` if any entry
    /// of `self` changed.
    ///
    /// # Panics
    ///
    /// Panics if the sizes differ.
    pub fn union_with(&mut self, other: &BoolMatrix) -> bool {
        assert_eq!(self.size(), other.size(), "union of matrices of different sizes");
        let mut changed = false;
        for (row, other_row) in self.rows.iter_mut().zip(other.rows.iter()) {
            changed |= row.or(other_row);
        }
        changed
    }

    /// Computes the Boolean product `self · rhs`.
    ///
    /// # Panics
    ///
    /// Panics if the inner dimensions differ.
    pub fn mxm(&self, rhs: &BoolMatrix) -> BoolMatrix {
        assert_eq!(
            self.num_cols,
            rhs.num_rows(),
            "product of matrices with mismatched inner dimensions"
        );
        let mut result = BoolMatrix::new(self.num_rows(), rhs.num_cols);
        for (row, result_row) in self.rows.iter().zip(result.rows.iter_mut()) {
            for (j, present) in row.iter().enumerate() {
                if present {
                    result_row.or(&rhs.rows[j]);
                }
            }
        }
        result
    }

    /// Accumulates the Boolean product into this matrix: `self |= a · b`.
    /// Returns `true` if any entry of `self` changed.
    pub fn mxm_accumulate(&mut self, a: &BoolMatrix, b: &BoolMatrix) -> bool {
        let product = a.mxm(b);
        self.union_with(&product)
    }

    /// Counts the entries that are set.
    pub fn nnz(&self) -> usize {
        self.rows
            .iter()
            .map(|row| {
                row.blocks()
                    .map(|block| block.count_ones() as usize)
                    .sum::<usize>()
            })
            .sum()
    }

    /// Checks whether no entry is set.
    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(|row| row.none())
    }

    /// Iterates over the positions of entries that are set, row by row.
    pub fn iter_ones(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows.iter().enumerate().flat_map(|(i, row)| {
            row.iter()
                .enumerate()
                .filter_map(move |(j, present)| if present { Some((i, j)) } else { None })
        })
    }

    /// Iterates over the columns set in the given row.
    pub fn iter_row(&self, row: usize) -> impl Iterator<Item = usize> + '_ {
        self.rows[row]
            .iter()
            .enumerate()
            .filter_map(|(j, present)| if present { Some(j) } else { None })
    }
}

impl fmt::Debug for BoolMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BoolMatrix {}x{} [", self.num_rows(), self.num_cols)?;
        for row in &self.rows {
            let line: String = row.iter().map(|bit| if bit { '1' } else { '.' }).collect();
            writeln!(f, "  {}", line)?;
        }
        write!(f, "]")
    }
}
