use std::ops::{Add, Mul};

use crate::tensor::Tensor;

/// Operator sugar over the element-wise methods. Panics on shape mismatch,
/// like the underlying `ndarray` arithmetic; use [`Tensor::add`] and
/// [`Tensor::mul`] for the fallible versions.
impl Add for &Tensor {
    type Output = Tensor;

    fn add(self, rhs: &Tensor) -> Tensor {
        Tensor {
            data: &self.data + &rhs.data,
            grad: None,
            requires_grad: self.requires_grad || rhs.requires_grad,
        }
    }
}

impl Mul for &Tensor {
    type Output = Tensor;

    fn mul(self, rhs: &Tensor) -> Tensor {
        Tensor {
            data: &self.data * &rhs.data,
            grad: None,
            requires_grad: self.requires_grad || rhs.requires_grad,
        }
    }
}
