//! Functional-programming idioms over ordered sequences, built around a
//! fluent [`Pipeline`] wrapper that chains filters, maps, and sorts.

pub mod display;
pub mod error;
pub mod pipeline;

pub use error::{Error, Result};
pub use pipeline::Pipeline;

#[cfg(test)]
mod tests {
    use crate::Pipeline;

    #[test]
    fn basic_chain() {
        let result = Pipeline::from_slice(&[3, 1, 2])
            .sort(|a, b| a < b)
            .collect();
        assert_eq!(result, vec![1, 2, 3]);
    }
}
