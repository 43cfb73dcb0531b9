//! Pure helpers for assembling remote asset URLs.
//!
//! This module intentionally splits the responsibilities into focused
//! submodules so that host selection, protocol choice, compressed-variant
//! naming, and cache-busting can be tested independently. The resolver
//! composes them but owns no logic of its own beyond sequencing.

mod filters;
mod gzip;
mod host;
mod scheme;
mod timestamp;

pub use filters::is_external_reference;
pub use gzip::gzip_variant_name;
pub use host::select_host;
pub use scheme::scheme;
pub use timestamp::dir_timestamp;
