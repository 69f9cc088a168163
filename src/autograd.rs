use ndarray::ArrayD;

use crate::tensor::Tensor;

impl Tensor {
    /// Whether gradients with respect to this tensor would be tracked.
    ///
    /// The flag is inert: no operation records a computation history, so
    /// setting it only marks the tensor as a future differentiation target.
    pub fn requires_grad(&self) -> bool {
        self.requires_grad
    }

    pub fn with_requires_grad(mut self, requires_grad: bool) -> Self {
        self.requires_grad = requires_grad;
        self
    }

    pub fn grad(&self) -> Option<&ArrayD<f32>> {
        self.grad.as_ref()
    }

    /// Seeds the gradient buffer with ones. No backward graph exists, so
    /// nothing propagates beyond this tensor.
    pub fn backward(&mut self) {
        if self.grad.is_none() {
            self.grad = Some(ArrayD::ones(self.data.raw_dim()));
        }
    }
}
