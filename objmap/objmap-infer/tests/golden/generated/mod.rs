//! Types of `generated` inferred from a sample document.

mod sample;

pub use sample::Sample;
