use tinytensor_rs::{rng_from_env, Tensor, TensorError};

/// Random linear layer demo: multiply a random input batch by a random,
/// gradient-tracked weight matrix and print every tensor involved.
fn main() -> Result<(), TensorError> {
    env_logger::init();

    let input_size = 3;
    let output_size = 2;
    let batch_size = 4;

    let mut rng = rng_from_env();
    let input = Tensor::randn(&[batch_size, input_size], &mut rng);
    let weights = Tensor::randn(&[input_size, output_size], &mut rng).with_requires_grad(true);

    log::info!(
        "linear layer: batch_size={batch_size}, input_size={input_size}, output_size={output_size}"
    );

    println!("{}", input.shape_str());
    println!("{input}");
    println!("{}", weights.shape_str());
    println!("{weights}");

    let output = input.matmul(&weights)?;

    println!("{}", output.shape_str());
    println!("{output}");

    Ok(())
}
