use crate::{Element, Matrix3, DIM};

impl<T: Element> Matrix3<T> {
    /// Row-by-column product, `out[i][j] = sum_k self[i][k] * rhs[k][j]`.
    pub fn matmul(&self, rhs: &Matrix3<T>) -> Matrix3<T> {
        let mut out = Matrix3::zeros();

        for (out_row, lhs_row) in out.data.iter_mut().zip(self.data.iter()) {
            for (n_idx, out_cell) in out_row.iter_mut().enumerate() {
                let mut acc = T::ZERO;
                for k_idx in 0..DIM {
                    acc = acc + lhs_row[k_idx] * rhs.data[k_idx][n_idx];
                }
                *out_cell = acc;
            }
        }

        out
    }
}
