//! content-scaffold CLI library

pub mod cli;
pub mod commands;

pub use cli::{Cli, Commands, GlobalArgs, LanguageArg};
pub use commands::{BatchCommand, CatalogCommand, GenerateCommand};
