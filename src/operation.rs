use ndarray::Ix2;

use crate::error::TensorError;
use crate::tensor::Tensor;

impl Tensor {
    /// Element-wise addition. Shapes must match exactly.
    pub fn add(&self, other: &Tensor) -> Result<Tensor, TensorError> {
        self.check_same_shape(other, "add")?;
        Ok(Tensor {
            data: &self.data + &other.data,
            grad: None,
            requires_grad: self.requires_grad || other.requires_grad,
        })
    }

    /// Element-wise multiplication. Shapes must match exactly.
    pub fn mul(&self, other: &Tensor) -> Result<Tensor, TensorError> {
        self.check_same_shape(other, "mul")?;
        Ok(Tensor {
            data: &self.data * &other.data,
            grad: None,
            requires_grad: self.requires_grad || other.requires_grad,
        })
    }

    /// Matrix product of two 2-D tensors: (m, k) @ (k, n) -> (m, n).
    ///
    /// Entry (i, j) is the dot product of row i of `self` and column j of
    /// `rhs`, with ordinary IEEE-754 accumulation. The result tracks
    /// gradients if either operand does.
    pub fn matmul(&self, rhs: &Tensor) -> Result<Tensor, TensorError> {
        if self.ndim() != 2 || rhs.ndim() != 2 {
            return Err(TensorError::NotMatrix {
                lhs: self.ndim(),
                rhs: rhs.ndim(),
            });
        }
        let lhs = self
            .data
            .view()
            .into_dimensionality::<Ix2>()
            .map_err(|_| TensorError::NotMatrix {
                lhs: self.ndim(),
                rhs: rhs.ndim(),
            })?;
        let rhs2 = rhs
            .data
            .view()
            .into_dimensionality::<Ix2>()
            .map_err(|_| TensorError::NotMatrix {
                lhs: self.ndim(),
                rhs: rhs.ndim(),
            })?;

        if lhs.ncols() != rhs2.nrows() {
            return Err(TensorError::ShapeMismatch {
                op: "matmul",
                lhs: self.shape().to_vec(),
                rhs: rhs.shape().to_vec(),
            });
        }

        Ok(Tensor {
            data: lhs.dot(&rhs2).into_dyn(),
            grad: None,
            requires_grad: self.requires_grad || rhs.requires_grad,
        })
    }

    fn check_same_shape(&self, other: &Tensor, op: &'static str) -> Result<(), TensorError> {
        if self.shape() != other.shape() {
            return Err(TensorError::ShapeMismatch {
                op,
                lhs: self.shape().to_vec(),
                rhs: other.shape().to_vec(),
            });
        }
        Ok(())
    }
}
