//! Two-dimensional table of mean values (algorithm × distribution)

/// Dense pivot table with first-seen row and column order.
///
/// Cells with no underlying records are `None`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Pivot {
    rows: Vec<String>,
    columns: Vec<String>,
    cells: Vec<Vec<Option<f64>>>,
}

impl Pivot {
    /// Build a pivot from `(row, column, value)` triples.
    ///
    /// Rows and columns keep the order in which they are first seen. A repeated
    /// `(row, column)` pair overwrites the earlier value.
    #[must_use]
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str, f64)>) -> Self {
        let mut pivot = Self::default();
        for (row, column, value) in entries {
            let r = position_or_push(&mut pivot.rows, row);
            let c = position_or_push(&mut pivot.columns, column);
            if r == pivot.cells.len() {
                pivot.cells.push(Vec::new());
            }
            for cells in &mut pivot.cells {
                cells.resize(pivot.columns.len(), None);
            }
            pivot.cells[r][c] = Some(value);
        }
        pivot
    }

    /// Row labels
    #[must_use]
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Column labels
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Whether the pivot has no cells
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell by position
    #[must_use]
    pub fn cell(&self, row: usize, column: usize) -> Option<f64> {
        self.cells.get(row)?.get(column).copied().flatten()
    }

    /// Cell by labels
    #[must_use]
    pub fn get(&self, row: &str, column: &str) -> Option<f64> {
        let r = self.rows.iter().position(|label| label == row)?;
        let c = self.columns.iter().position(|label| label == column)?;
        self.cell(r, c)
    }

    /// Smallest and largest populated cell
    #[must_use]
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.cells
            .iter()
            .flatten()
            .flatten()
            .fold(None, |range, &v| match range {
                None => Some((v, v)),
                Some((lo, hi)) => Some((f64::min(lo, v), f64::max(hi, v))),
            })
    }

    /// Divide every row by its smallest populated cell.
    ///
    /// A row whose minimum is zero has no meaningful relative scale; all of
    /// its cells become `None`.
    #[must_use]
    pub fn normalized_by_row_min(&self) -> Self {
        let cells = self
            .cells
            .iter()
            .map(|row| {
                let min = row.iter().flatten().copied().reduce(f64::min);
                match min {
                    Some(min) if min > 0.0 => row.iter().map(|cell| cell.map(|v| v / min)).collect(),
                    _ => vec![None; row.len()],
                }
            })
            .collect();

        Self {
            rows: self.rows.clone(),
            columns: self.columns.clone(),
            cells,
        }
    }
}

fn position_or_push(labels: &mut Vec<String>, label: &str) -> usize {
    labels.iter().position(|l| l == label).unwrap_or_else(|| {
        labels.push(label.to_string());
        labels.len() - 1
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_entries_first_seen_order() {
        let pivot = Pivot::from_entries([
            ("MergeSort", "Random", 2.0),
            ("QuickSort", "Sorted", 3.0),
            ("QuickSort", "Random", 1.0),
        ]);
        assert_eq!(pivot.rows(), ["MergeSort", "QuickSort"]);
        assert_eq!(pivot.columns(), ["Random", "Sorted"]);
        assert_eq!(pivot.get("MergeSort", "Sorted"), None);
        assert_eq!(pivot.get("QuickSort", "Random"), Some(1.0));
        assert_eq!(pivot.value_range(), Some((1.0, 3.0)));
    }

    #[test]
    fn test_normalized_by_row_min() {
        let pivot = Pivot::from_entries([
            ("QuickSort", "Random", 2.0),
            ("QuickSort", "Sorted", 6.0),
            ("Instant", "Random", 0.0),
            ("Instant", "Sorted", 1.0),
        ]);
        let normalized = pivot.normalized_by_row_min();
        assert_eq!(normalized.get("QuickSort", "Random"), Some(1.0));
        assert_eq!(normalized.get("QuickSort", "Sorted"), Some(3.0));
        assert_eq!(normalized.get("Instant", "Sorted"), None);
    }

    #[test]
    fn test_empty_pivot() {
        let pivot = Pivot::from_entries(std::iter::empty());
        assert!(pivot.is_empty());
        assert_eq!(pivot.value_range(), None);
        assert_eq!(pivot.cell(0, 0), None);
    }
}
