pub mod event;
pub mod result;

pub use self::event::*;
pub use self::result::*;
