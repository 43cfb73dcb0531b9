#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod config;
pub mod context;
pub mod markup;
pub mod resolver;
pub mod url;

pub use config::{ConfigError, ResolverConfig};
pub use context::{RequestContext, TimestampPolicy};
pub use markup::{HtmlMarkup, MarkupRenderer};
pub use resolver::{AssetKind, AssetResolver};
