pub mod memory;
pub mod provider;
pub mod sampler;
