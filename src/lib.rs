pub mod cli;
pub mod config;
pub mod controller;
pub mod encoder;
pub mod error;
pub mod extractor;
pub mod form;
