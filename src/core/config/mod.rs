pub mod base;
pub mod constant;
pub mod entity;
pub mod params;

pub use self::base::*;
pub use self::constant::*;
pub use self::entity::*;
pub use self::params::*;
