pub mod use_roster;

pub use use_roster::use_roster;
