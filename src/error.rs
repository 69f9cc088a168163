use thiserror::Error;

#[derive(Debug, Error)]
pub enum TensorError {
    #[error("shape mismatch in {op}: lhs {lhs:?}, rhs {rhs:?}")]
    ShapeMismatch {
        op: &'static str,
        lhs: Vec<usize>,
        rhs: Vec<usize>,
    },

    #[error("matmul expects 2-d tensors, got {lhs} and {rhs} dimensions")]
    NotMatrix { lhs: usize, rhs: usize },

    #[error("cannot build a tensor of shape {shape:?} from {len} values")]
    BufferLength { shape: Vec<usize>, len: usize },
}
