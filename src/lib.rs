pub mod config;
pub mod error;
pub mod generator;
pub mod logging;
pub mod models;
pub mod utils;

pub use config::{Args, GeneratorConfig};
pub use error::IconError;
pub use generator::{generate, generate_with_probe, run, run_with_probe};
pub use models::{ArtifactFormat, Notice};
pub use utils::{encode_artifact, render_icon};
