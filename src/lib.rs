// the module tree is compiled into the library and into each binary through include!,
// every target only reaches part of it
#[allow(dead_code)]
pub mod books;
#[allow(dead_code)]
pub mod catalog;
#[allow(dead_code)]
pub mod core;
#[allow(dead_code)]
pub mod gateway;
#[allow(dead_code)]
pub mod utils;
