// Library exports for the binaries and integration tests
pub mod builtin_font;
pub mod config;
pub mod constants;
pub mod manifest;
pub mod placeholder;
pub mod resize;
