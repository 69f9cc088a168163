//! A small f32 tensor library: dense row-major arrays with an optional
//! gradient buffer, random-normal initialisation and checked matrix
//! multiplication.

mod add;
mod autograd;
mod error;
mod operation;
mod rng;
mod tensor;

pub use error::TensorError;
pub use rng::rng_from_env;
pub use tensor::Tensor;
