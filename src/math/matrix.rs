use rand::Rng;
use serde::{Serialize, Deserialize};
use std::f64::consts::PI;

use crate::error::{NnError, NnResult};

/// Dense row-major matrix.
///
/// Activations are laid out as (units, examples): each column is one example.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix{
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>
}

impl Matrix{
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix{
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows]
        }
    }

    /// Builds a matrix from row vectors. All rows must have the same length.
    pub fn from_data(data: Vec<Vec<f64>>) -> NnResult<Matrix> {
        let cols = data.first().map_or(0, |row| row.len());
        if let Some((row, bad)) = data.iter().enumerate().find(|(_, r)| r.len() != cols) {
            return Err(NnError::RaggedRows { row, expected: cols, actual: bad.len() });
        }
        Ok(Matrix {
            rows: data.len(),
            cols,
            data
        })
    }

    /// A 1×n matrix holding `values`.
    pub fn row(values: Vec<f64>) -> Matrix {
        Matrix {
            rows: 1,
            cols: values.len(),
            data: vec![values]
        }
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row][col]
    }

    /// Iterates over every entry in row-major order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.data.iter().flat_map(|row| row.iter().copied())
    }

    /// Samples a single value from N(0, 1) using the Box-Muller transform.
    fn sample_standard_normal<R: Rng + ?Sized>(rng: &mut R) -> f64 {
        // Draw two independent uniform samples in (0, 1] to avoid log(0).
        let u1: f64 = 1.0 - rng.gen::<f64>();
        let u2: f64 = 1.0 - rng.gen::<f64>();
        (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
    }

    /// Samples every entry from N(0, std_dev²).
    pub fn random_normal<R: Rng + ?Sized>(rows: usize, cols: usize, std_dev: f64, rng: &mut R) -> Matrix {
        let mut res = Matrix::zeros(rows, cols);
        for i in 0..rows {
            for j in 0..cols {
                res.data[i][j] = Matrix::sample_standard_normal(rng) * std_dev;
            }
        }
        res
    }

    /// He initialization: samples from N(0, sqrt(2 / cols)).
    ///
    /// Recommended before ReLU layers. The variance 2/fan_in accounts for
    /// the fact that ReLU zeroes half of its inputs on average.
    ///
    /// Shape: (rows, cols). `cols` is the fan-in (number of input connections).
    pub fn he<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Matrix {
        Matrix::random_normal(rows, cols, (2.0 / cols as f64).sqrt(), rng)
    }

    /// Xavier (Glorot) initialization: samples from N(0, sqrt(1 / cols)).
    ///
    /// Recommended before Sigmoid layers. Keeps the variance of activations
    /// and gradients roughly equal across layers.
    pub fn xavier<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Matrix {
        Matrix::random_normal(rows, cols, (1.0 / cols as f64).sqrt(), rng)
    }

    pub fn transpose(&self) -> Matrix {
        let mut res = Matrix::zeros(self.cols, self.rows);

        for i in 0..res.rows {
            for j in 0..res.cols {
                res.data[i][j] = self.data[j][i];
            }
        }

        res
    }

    pub fn map<F>(&self, functor: F) -> Matrix
    where
        F: Fn(f64) -> f64,
    {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter()
                .map(|row| row.iter().map(|&x| functor(x)).collect())
                .collect()
        }
    }

    pub fn scale(&self, factor: f64) -> Matrix {
        self.map(|x| x * factor)
    }

    /// Matrix product `self · rhs`.
    pub fn dot(&self, rhs: &Matrix) -> NnResult<Matrix> {
        if self.cols != rhs.rows {
            return Err(self.mismatch("dot", rhs));
        }

        let mut res = Matrix::zeros(self.rows, rhs.cols);

        for i in 0..res.rows {
            for k in 0..self.cols {
                let lhs = self.data[i][k];
                for j in 0..res.cols {
                    res.data[i][j] += lhs * rhs.data[k][j];
                }
            }
        }

        Ok(res)
    }

    /// Element-wise (Hadamard) product of two same-shape matrices.
    pub fn hadamard(&self, rhs: &Matrix) -> NnResult<Matrix> {
        self.zip_with("hadamard", rhs, |a, b| a * b)
    }

    /// Adds an (rows, 1) column to every column of `self`.
    ///
    /// This is the only broadcast the crate performs; any other shape is rejected.
    pub fn add_column(&self, column: &Matrix) -> NnResult<Matrix> {
        if column.cols != 1 || column.rows != self.rows {
            return Err(self.mismatch("add_column", column));
        }
        let mut res = self.clone();
        for (row, bias) in res.data.iter_mut().zip(column.data.iter()) {
            for x in row.iter_mut() {
                *x += bias[0];
            }
        }
        Ok(res)
    }

    /// Sums each row across all columns, giving a (rows, 1) column.
    pub fn row_sums(&self) -> Matrix {
        Matrix {
            rows: self.rows,
            cols: 1,
            data: self.data.iter().map(|row| vec![row.iter().sum()]).collect()
        }
    }

    /// In-place `self -= factor * rhs`.
    pub fn sub_scaled_assign(&mut self, rhs: &Matrix, factor: f64) -> NnResult<()> {
        if self.shape() != rhs.shape() {
            return Err(self.mismatch("sub_scaled_assign", rhs));
        }
        for (row, rhs_row) in self.data.iter_mut().zip(rhs.data.iter()) {
            for (x, g) in row.iter_mut().zip(rhs_row.iter()) {
                *x -= factor * g;
            }
        }
        Ok(())
    }

    fn zip_with<F>(&self, op: &'static str, rhs: &Matrix, f: F) -> NnResult<Matrix>
    where
        F: Fn(f64, f64) -> f64,
    {
        if self.shape() != rhs.shape() {
            return Err(self.mismatch(op, rhs));
        }
        let data = self.data.iter().zip(rhs.data.iter())
            .map(|(row_a, row_b)| {
                row_a.iter().zip(row_b.iter()).map(|(&x, &y)| f(x, y)).collect()
            })
            .collect();
        Ok(Matrix { rows: self.rows, cols: self.cols, data })
    }

    fn mismatch(&self, op: &'static str, rhs: &Matrix) -> NnError {
        NnError::ShapeMismatch { op, left: self.shape(), right: rhs.shape() }
    }
}
