mod constants;
mod defaults;
mod env;
mod file;
mod load;
mod paths;
mod types;
mod util;

pub use types::{ProbeConfig, ProductConfig};

#[cfg(test)]
mod tests;
