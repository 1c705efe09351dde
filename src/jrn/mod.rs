//! Main module for jrn library functionality

pub mod ast;
pub mod loader;
pub mod parsing;
