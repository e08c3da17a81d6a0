//! astkit: render Python syntax trees back to source.
//!
//! The tree model, renderer and traversal live in `astkit-ast` and are
//! re-exported here as [`ast`]. This crate adds the processor chain, config
//! loading and the error type the `astkit` binary reports through.

pub use astkit_ast as ast;

pub mod config;
pub mod error;
pub mod processor;

pub use config::{Config, RenderConfig, CONFIG_FILE_NAME};
pub use error::{AstkitError, AstkitResult, OutputErrorCode};
pub use processor::{
    FnProcessor, LocationAdjustProcessor, Processor, ProcessorChain, RenderTap, TapOutput,
};
