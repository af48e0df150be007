pub mod provider;
pub mod sqlite;
#[cfg(test)]
pub mod fake;

pub use provider::*;
#[cfg(test)]
pub use fake::*;
