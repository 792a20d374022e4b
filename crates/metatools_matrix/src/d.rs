use crate::{Element, Matrix3};
use std::fmt;

fn display_row<T: Element>(f: &mut fmt::Formatter<'_>, row: &[T]) -> fmt::Result {
    write!(f, "[")?;
    for (i, val) in row.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?
        }
        val.fmt_elem(f)?;
    }
    write!(f, "]")
}

impl<T: Element> fmt::Display for Matrix3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, row) in self.rows().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            display_row(f, row)?;
        }
        write!(f, "]")
    }
}

impl<T: Element> fmt::Debug for Matrix3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Matrix3(dtype={}, data=", std::any::type_name::<T>())?;
        fmt::Display::fmt(self, f)?;
        write!(f, ")")
    }
}
