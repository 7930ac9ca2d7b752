pub mod case;
pub mod judge;
pub mod party;
