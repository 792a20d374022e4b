use crate::{Element, Matrix3};
use std::ops::{Index, IndexMut, Mul};

impl<T: Element> Mul<&Matrix3<T>> for &Matrix3<T> {
    type Output = Matrix3<T>;

    fn mul(self, rhs: &Matrix3<T>) -> Self::Output {
        Matrix3::matmul(self, rhs)
    }
}

impl<T: Element> Mul<Matrix3<T>> for &Matrix3<T> {
    type Output = Matrix3<T>;

    fn mul(self, rhs: Matrix3<T>) -> Self::Output {
        Matrix3::matmul(self, &rhs)
    }
}

impl<T: Element> Mul<&Matrix3<T>> for Matrix3<T> {
    type Output = Matrix3<T>;

    fn mul(self, rhs: &Matrix3<T>) -> Self::Output {
        Matrix3::matmul(&self, rhs)
    }
}

impl<T: Element> Mul<Matrix3<T>> for Matrix3<T> {
    type Output = Matrix3<T>;

    fn mul(self, rhs: Matrix3<T>) -> Self::Output {
        Matrix3::matmul(&self, &rhs)
    }
}

// Panics on out-of-range indices, use `get` for a checked read.
impl<T: Element> Index<(usize, usize)> for Matrix3<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[row][col]
    }
}

impl<T: Element> IndexMut<(usize, usize)> for Matrix3<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.data[row][col]
    }
}
