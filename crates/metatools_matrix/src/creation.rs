use crate::{Element, Matrix3, DIM};
use metatools_core::error::{Error, Result};
use rand::Rng;
use rand_distr::{Distribution, Uniform};

impl<T: Element> Matrix3<T> {
    pub fn new(data: [[T; DIM]; DIM]) -> Self {
        Self { data }
    }

    pub fn zeros() -> Self {
        Self::fill(T::ZERO)
    }

    pub fn fill(value: T) -> Self {
        Self { data: [[value; DIM]; DIM] }
    }

    pub fn identity() -> Self {
        let mut result = Self::zeros();
        for i in 0..DIM {
            result.data[i][i] = T::ONE;
        }
        result
    }

    pub fn from_vec(rows: Vec<Vec<T>>) -> Result<Self> {
        if rows.len() != DIM {
            return Err(Error::IncompatibleShape(format!(
                "expected {} rows, got {}",
                DIM,
                rows.len()
            )));
        }

        let mut result = Self::zeros();
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != DIM {
                return Err(Error::IncompatibleShape(format!(
                    "expected {} columns in row {}, got {}",
                    DIM,
                    i,
                    row.len()
                )));
            }
            for (j, value) in row.into_iter().enumerate() {
                result.data[i][j] = value;
            }
        }

        Ok(result)
    }

    pub fn from_flatten_vec(data: Vec<T>) -> Result<Self> {
        if data.len() != DIM * DIM {
            return Err(Error::IncompatibleShape(format!(
                "Cannot build a {}x{} matrix from {} elements",
                DIM,
                DIM,
                data.len()
            )));
        }

        let mut result = Self::zeros();
        for (idx, value) in data.into_iter().enumerate() {
            result.data[idx / DIM][idx % DIM] = value;
        }

        Ok(result)
    }
}

macro_rules! impl_rand {
    ($type:ty) => {
        impl Matrix3<$type> {
            /// Every cell drawn independently from Uniform[0, 1), using the thread-local RNG.
            pub fn rand() -> Self {
                Self::rand_with_rng(&mut rand::thread_rng())
            }

            pub fn rand_with_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
                let uniform = Uniform::new(0.0, 1.0);

                let mut result = Self::zeros();
                for row in result.data.iter_mut() {
                    for cell in row.iter_mut() {
                        *cell = uniform.sample(rng);
                    }
                }
                result
            }
        }
    };
}

impl_rand!(f32);
impl_rand!(f64);
