pub mod ai_yaml;
pub mod error;
pub mod parsed;

pub use ai_yaml::*;
pub use error::{ConvertError, Result, ResultExt};
pub use parsed::*;
