mod profile;
mod registry;

pub use profile::{BlockPattern, PatternProfile};
pub use registry::ProfileRegistry;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
