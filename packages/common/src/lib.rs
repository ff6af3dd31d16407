pub mod error;
pub mod filesystem;
pub mod settings;

pub use error::*;
pub use filesystem::*;
pub use settings::*;
