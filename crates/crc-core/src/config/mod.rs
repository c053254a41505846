//! Configuration passed explicitly into generators and pipelines

pub mod generator;

pub use generator::GeneratorConfig;
