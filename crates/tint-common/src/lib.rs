pub mod errors;
pub mod types;

pub use errors::{ColorError, ConfigError, TintError};
pub use types::{Hsl, Rgb, SlotColor, SlotKind, SlotSet, SlotState};

pub type Result<T> = std::result::Result<T, TintError>;
