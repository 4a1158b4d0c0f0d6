mod input;
mod logging;

pub use input::*;
pub use logging::*;
