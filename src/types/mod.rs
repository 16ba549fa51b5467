//! Data types for timetable input and layout output.

mod class;
mod input;
mod layout;
mod settings;
mod student;

pub use class::*;
pub use input::*;
pub use layout::*;
pub use settings::*;
pub use student::*;
