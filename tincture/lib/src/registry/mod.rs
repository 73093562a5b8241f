pub mod color;
pub mod level;

pub use color::{Color, ColorInfo, ParseColorError};
pub use level::{Level, LevelInfo, ParseLevelError, PrefixStyle};
