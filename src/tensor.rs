use std::fmt;

use ndarray::{ArrayD, ArrayViewD, IxDyn};
use rand::Rng;
use rand_distr::StandardNormal;

use crate::error::TensorError;

/// A dense, row-major f32 array with an optional gradient buffer.
pub struct Tensor {
    pub(crate) data: ArrayD<f32>, // Multi-dimensional array
    pub(crate) grad: Option<ArrayD<f32>>,
    pub(crate) requires_grad: bool,
}

impl Tensor {
    /// A tensor of the given shape filled with zeros.
    pub fn zeros(shape: &[usize]) -> Self {
        Tensor {
            data: ArrayD::<f32>::zeros(IxDyn(shape)),
            grad: None,
            requires_grad: false,
        }
    }

    /// A tensor of the given shape filled with ones.
    pub fn ones(shape: &[usize]) -> Self {
        Tensor {
            data: ArrayD::<f32>::ones(IxDyn(shape)),
            grad: None,
            requires_grad: false,
        }
    }

    /// A tensor of the given shape with independent samples from the
    /// standard normal distribution (mean 0, variance 1).
    ///
    /// The generator is passed in by the caller so that tests can use a
    /// fixed-seed `StdRng`; see [`crate::rng_from_env`].
    pub fn randn<R: Rng + ?Sized>(shape: &[usize], rng: &mut R) -> Self {
        Tensor {
            data: ArrayD::from_shape_fn(IxDyn(shape), |_| rng.sample(StandardNormal)),
            grad: None,
            requires_grad: false,
        }
    }

    /// Builds a tensor from a flat row-major buffer.
    pub fn from_vec(data: Vec<f32>, shape: &[usize]) -> Result<Self, TensorError> {
        let len = data.len();
        let data = ArrayD::from_shape_vec(IxDyn(shape), data).map_err(|_| {
            TensorError::BufferLength {
                shape: shape.to_vec(),
                len,
            }
        })?;
        Ok(Tensor {
            data,
            grad: None,
            requires_grad: false,
        })
    }

    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    pub fn ndim(&self) -> usize {
        self.data.ndim()
    }

    /// The shape as a tuple-style string, e.g. `(4, 2)`.
    pub fn shape_str(&self) -> String {
        let dims: Vec<String> = self.shape().iter().map(|d| d.to_string()).collect();
        format!("({})", dims.join(", "))
    }

    pub fn data(&self) -> &ArrayD<f32> {
        &self.data
    }
}

fn fmt_view(view: ArrayViewD<'_, f32>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if view.ndim() == 0 {
        // A zero-dimensional view holds exactly one element.
        for v in view.iter() {
            write!(f, "{v}")?;
        }
        return Ok(());
    }
    write!(f, "[")?;
    for (i, sub) in view.outer_iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        fmt_view(sub, f)?;
    }
    write!(f, "]")
}

/// Prints the full contents as nested brackets on a single line, so a
/// tensor always reports as one shape line plus one data line.
impl fmt::Display for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_view(self.data.view(), f)
    }
}

impl fmt::Debug for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tensor")
            .field("shape", &self.shape())
            .field("requires_grad", &self.requires_grad)
            .field("data", &self.data)
            .finish()
    }
}

impl Clone for Tensor {
    fn clone(&self) -> Self {
        Tensor {
            data: self.data.clone(),
            grad: self.grad.clone(),
            requires_grad: self.requires_grad,
        }
    }
}

/// Shape and values must match exactly; the gradient state is ignored.
impl PartialEq for Tensor {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}
