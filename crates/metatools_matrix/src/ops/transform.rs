use crate::{Element, Matrix3, DIM};
use metatools_core::error::{Error, Result};

impl<T: Element> Matrix3<T> {
    pub fn transpose(&self) -> Matrix3<T> {
        let mut out = *self;
        for i in 0..DIM {
            for j in 0..DIM {
                out.data[j][i] = self.data[i][j];
            }
        }
        out
    }

    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        check_index(row)?;
        check_index(col)?;

        Ok(self.data[row][col])
    }

    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        check_index(row)?;
        check_index(col)?;

        self.data[row][col] = value;
        Ok(())
    }
}

fn check_index(index: usize) -> Result<()> {
    if index >= DIM {
        return Err(Error::IndexOutOfBounds { index, size: DIM });
    }
    Ok(())
}
