pub mod capture;
pub mod comparator;
pub mod config;
pub mod consts;
pub mod edit;
pub mod encoding;
pub mod error;
pub mod geometry;
pub mod gesture;
pub mod mask;
pub mod source;
