pub mod app;
pub mod domain;
pub mod error;
pub mod mash;
pub mod models;
pub mod output;
pub mod parse;
pub mod select;
