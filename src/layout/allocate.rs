//! Dividing a total width between columns.

use crate::error::{Error, Result};
use crate::event::{LogLevel, TableEvent, emit_event, emit_log};
use crate::layout::dimension::ColumnDimension;
use std::collections::HashMap;

/// Yields column indices in proportion to their weights.
///
/// Each round `r` tops every column up to `r * weight / max_weight` picks,
/// in column order, repeating the pass while anything was picked. Columns
/// with weight zero are never yielded. The sequence is infinite unless no
/// column has a positive weight.
#[derive(Clone, Debug)]
pub struct WeightedRoundRobin {
    items: Vec<usize>,
    weights: Vec<usize>,
    taken: Vec<usize>,
    max_weight: usize,
    round: usize,
    pos: usize,
    picked_this_pass: bool,
}

impl WeightedRoundRobin {
    /// Schedule over `weights[i]` for every column index `i`.
    #[must_use]
    pub fn new(weights: &[usize]) -> Self {
        let (items, weights): (Vec<usize>, Vec<usize>) = weights
            .iter()
            .enumerate()
            .filter(|&(_, &w)| w > 0)
            .map(|(i, &w)| (i, w))
            .unzip();
        let max_weight = weights.iter().copied().max().unwrap_or(0);
        Self {
            taken: vec![0; items.len()],
            items,
            weights,
            max_weight,
            round: 0,
            pos: 0,
            picked_this_pass: false,
        }
    }
}

impl Iterator for WeightedRoundRobin {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.items.is_empty() {
            return None;
        }
        loop {
            if self.pos == self.items.len() {
                self.pos = 0;
                if !self.picked_this_pass {
                    self.round += 1;
                }
                self.picked_this_pass = false;
            }
            let k = self.pos;
            self.pos += 1;
            // taken < round * weight / max_weight, kept in integers
            if self.taken[k] * self.max_weight < self.round * self.weights[k] {
                self.taken[k] += 1;
                self.picked_this_pass = true;
                return Some(self.items[k]);
            }
        }
    }
}

/// Reduce a rows-by-columns dimension matrix to one dimension per column.
///
/// Every row must have the same number of columns as the first.
#[must_use]
pub fn reduce_columns(matrix: &[Vec<ColumnDimension>]) -> Vec<ColumnDimension> {
    let mut columns: Vec<ColumnDimension> = match matrix.first() {
        Some(first) => first.clone(),
        None => return Vec::new(),
    };
    for row in &matrix[1..] {
        for (column, dim) in columns.iter_mut().zip(row) {
            *column = column.max(*dim);
        }
    }
    columns
}

/// Divide `total_width` between columns.
///
/// Columns start at their minimum and grow one cell at a time, in weighted
/// round-robin order, until they reach their preferred widths or the budget
/// is spent. Whatever remains goes to the last column.
pub fn allocate_widths(columns: &[ColumnDimension], total_width: usize) -> Result<Vec<usize>> {
    let Some(last) = columns.len().checked_sub(1) else {
        return Ok(Vec::new());
    };

    let sum_min: usize = columns.iter().map(|d| d.min).sum();
    if sum_min > total_width {
        return Err(Error::InsufficientWidth {
            required: sum_min,
            available: total_width,
        });
    }
    let sum_preferred: usize = columns.iter().map(|d| d.preferred).sum();
    // Columns with weight zero stay at their minimum
    let reachable: usize = columns
        .iter()
        .map(|d| if d.weight > 0 { d.preferred } else { d.min })
        .sum();
    let stop = total_width.min(sum_preferred).min(reachable);

    let mut sizes: Vec<usize> = columns.iter().map(|d| d.min).collect();
    let mut total = sum_min;
    let weights: Vec<usize> = columns.iter().map(|d| d.weight).collect();
    let mut schedule = WeightedRoundRobin::new(&weights);

    while total < stop {
        let Some(index) = schedule.next() else {
            break;
        };
        if sizes[index] < columns[index].preferred {
            sizes[index] += 1;
            total += 1;
        }
    }

    let rest: usize = sizes[..last].iter().sum();
    sizes[last] = sizes[last].max(total_width.saturating_sub(rest));
    Ok(sizes)
}

/// Column width allocator with a per-width cache.
///
/// Built from the dimension matrix of a table; rebuild it whenever cell
/// content changes.
#[derive(Clone, Debug, Default)]
pub struct ColumnAllocator {
    columns: Vec<ColumnDimension>,
    cache: HashMap<usize, Vec<usize>>,
}

impl ColumnAllocator {
    /// Create an allocator for a rows-by-columns dimension matrix.
    #[must_use]
    pub fn new(matrix: &[Vec<ColumnDimension>]) -> Self {
        Self {
            columns: reduce_columns(matrix),
            cache: HashMap::new(),
        }
    }

    /// Effective per-column dimensions.
    #[must_use]
    pub fn columns(&self) -> &[ColumnDimension] {
        &self.columns
    }

    /// Widths for `total_width`, computed once per distinct width.
    pub fn allocate(&mut self, total_width: usize) -> Result<Vec<usize>> {
        if let Some(widths) = self.cache.get(&total_width) {
            return Ok(widths.clone());
        }
        let widths = allocate_widths(&self.columns, total_width).inspect_err(|err| {
            emit_log(LogLevel::Warn, &err.to_string());
        })?;
        emit_log(
            LogLevel::Debug,
            &format!("allocated {total_width} columns as {widths:?}"),
        );
        emit_event(&TableEvent::Allocated {
            width: total_width,
            widths: widths.clone(),
        });
        self.cache.insert(total_width, widths.clone());
        Ok(widths)
    }

    /// Number of cached width vectors.
    #[must_use]
    pub fn cached_widths(&self) -> usize {
        self.cache.len()
    }
}
