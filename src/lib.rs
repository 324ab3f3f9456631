pub mod annealer;
pub mod config;
pub mod consts;
pub mod decoder;
pub mod error;
pub mod key;
pub mod scorer;
// cmd and reports are binary modules (in main.rs or distinct files).
