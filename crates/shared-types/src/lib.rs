pub mod error;
pub mod feature_flags;

// Court records domain
pub mod case;
pub mod common;
pub mod judge;
pub mod party;

pub use error::*;
pub use feature_flags::*;

pub use case::*;
pub use common::*;
pub use judge::*;
pub use party::*;
