pub mod config;
pub mod logging;

pub mod nav;
pub mod normalize;
pub mod notice;
pub mod request;
pub mod surface;
pub mod viewer;
