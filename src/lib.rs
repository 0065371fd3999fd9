pub mod config;
pub mod generate;
pub mod names;
pub mod output;

pub use config::{Destination, GenConfig};
pub use generate::{Summary, generate, generate_file};
pub use names::GlobalList;
