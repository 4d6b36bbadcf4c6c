// Human-readable rendering for Matrix. Display only; never parsed back.

use crate::matrix::Matrix;
use std::fmt;

/// Rows wider than this print their first three values, `...`, and the last.
const MAX_ROW_VALUES: usize = 4;
/// Matrices taller than this print their first three rows, `...`, and the last.
const MAX_ROWS: usize = 6;

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} x {}", self.rows(), self.cols())?;
        if self.rows() > MAX_ROWS {
            for row in self.row_iter().take(3) {
                write_row(f, row)?;
            }
            writeln!(f, "...")?;
            write_row(f, self.row(self.rows() - 1))
        } else {
            self.row_iter().try_for_each(|row| write_row(f, row))
        }
    }
}

fn write_row(f: &mut fmt::Formatter<'_>, row: &[f64]) -> fmt::Result {
    if row.len() > MAX_ROW_VALUES {
        write!(f, "{:.2} {:.2} {:.2} ... {:.2}", row[0], row[1], row[2], row[row.len() - 1])?;
    } else {
        for (j, v) in row.iter().enumerate() {
            if j > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{v:.2}")?;
        }
    }
    writeln!(f)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_matrix_prints_every_value() {
        let m = Matrix::new(vec![vec![1.1, 2.2, 3.3], vec![4.4, 5.5, 6.6]]).unwrap();
        assert_eq!(m.to_string(), "2 x 3\n1.10 2.20 3.30\n4.40 5.50 6.60\n");
    }

    #[test]
    fn wide_rows_are_elided() {
        let m = Matrix::new(vec![vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]]).unwrap();
        assert_eq!(m.to_string(), "1 x 6\n1.00 2.00 3.00 ... 6.00\n");
    }

    #[test]
    fn tall_matrices_are_elided() {
        let m = Matrix::from_fn(8, 1, |i, _| i as f64);
        assert_eq!(m.to_string(), "8 x 1\n0.00\n1.00\n2.00\n...\n7.00\n");
    }
}
