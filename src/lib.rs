//! Signpost library exports: relative time labels and navigation link state.

pub mod cli;
pub mod core;

#[cfg(test)]
pub mod test_support;
