pub mod config;
pub mod console;
pub mod content;
pub mod domain;
pub mod handlers;
pub mod paths;
pub mod quiz;
pub mod session;
pub mod state;
pub mod store;
pub mod validation;

#[cfg(any(test, feature = "testing"))]
pub mod testing;
