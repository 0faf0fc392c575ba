pub mod infer;
pub mod outline;
