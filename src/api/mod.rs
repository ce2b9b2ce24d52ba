pub mod api;

pub use self::api::*;
