#![forbid(unsafe_code)]

pub mod db_url;
pub mod http;

pub use http::{AppState, router};
