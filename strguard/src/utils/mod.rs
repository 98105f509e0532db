pub mod sanitize;
pub use sanitize::{DesiredType, Sanitize};

pub mod terminal;
pub use terminal::Terminal;
