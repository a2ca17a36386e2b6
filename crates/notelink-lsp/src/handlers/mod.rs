mod command;
mod lifecycle;
mod notifications;

pub use command::*;
pub use lifecycle::*;
pub use notifications::*;
