pub mod backend;
pub mod config;
pub mod render;
#[doc(hidden)]
pub mod test_support;
