//! Resolution orchestrator binding configuration to one request.

use std::path::Path;

use log::debug;

use crate::config::ResolverConfig;
use crate::context::{RequestContext, TimestampPolicy};
use crate::markup::MarkupRenderer;
use crate::url::{dir_timestamp, gzip_variant_name, is_external_reference, scheme, select_host};

/// Asset categories understood by the resolver.
///
/// The category decides which configured directory a bare reference lives
/// in and whether a pre-compressed variant may be substituted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    /// Images; never substituted with compressed variants.
    Image,
    /// Scripts.
    Script,
    /// Stylesheets.
    Style,
}

impl AssetKind {
    fn dir(self, config: &ResolverConfig) -> &str {
        match self {
            Self::Image => &config.img_dir,
            Self::Script => &config.js_dir,
            Self::Style => &config.css_dir,
        }
    }

    fn gzip_eligible(self) -> bool {
        !matches!(self, Self::Image)
    }
}

/// Asset URL resolver bound to one configuration and one request context.
///
/// Construction precomputes everything the per-call paths need: in
/// local-debug mode both configured hosts are replaced with the request's
/// own host (so CDN-shaped URLs can be exercised against a development
/// server), and the compressed-variant and timestamp switches are settled
/// once. The resolver itself is immutable; calls can be made in any order
/// and never affect one another.
pub struct AssetResolver<'a> {
    config: ResolverConfig,
    context: &'a RequestContext,
    serve_gzip: bool,
    force_timestamp: bool,
}

impl<'a> AssetResolver<'a> {
    /// Bind a configuration snapshot to the current request.
    pub fn new(config: &ResolverConfig, context: &'a RequestContext) -> Self {
        let mut config = config.clone();

        if context.debug {
            debug!(
                "debug mode: overriding asset hosts with request host {}",
                context.host
            );
            config.asset_host = context.host.clone();
            config.ssl_host = context.host.clone();
        }

        let serve_gzip =
            config.remote_compressed_files && context.accepts_gzip && !context.debug;
        let force_timestamp = config.force_timestamp
            || context.timestamp_policy == TimestampPolicy::Force
            || (context.timestamp_policy == TimestampPolicy::Enabled && !context.debug);

        Self {
            config,
            context,
            serve_gzip,
            force_timestamp,
        }
    }

    /// Resolve an image reference to a URL.
    ///
    /// A reference starting with `/` is treated as already fully specified
    /// and gets no directory prefix; bare names resolve inside the
    /// configured image directory.
    pub fn image_url(&self, reference: &str) -> String {
        self.resolve(reference, AssetKind::Image)
    }

    /// Resolve a script reference to a URL inside the script directory.
    pub fn script_url(&self, reference: &str) -> String {
        self.resolve(reference, AssetKind::Script)
    }

    /// Resolve a stylesheet reference to a URL inside the stylesheet
    /// directory.
    pub fn style_url(&self, reference: &str) -> String {
        self.resolve(reference, AssetKind::Style)
    }

    /// Resolve a single reference for the given asset category.
    pub fn resolve(&self, reference: &str, kind: AssetKind) -> String {
        let dir = if kind == AssetKind::Image && reference.starts_with('/') {
            None
        } else {
            Some(kind.dir(&self.config))
        };

        self.resolve_in_dir(reference, dir, kind.gzip_eligible())
    }

    /// Resolve a sequence of references, preserving length and order.
    ///
    /// Each element is transformed independently; the input is never
    /// mutated.
    pub fn resolve_all<S: AsRef<str>>(&self, references: &[S], kind: AssetKind) -> Vec<String> {
        references
            .iter()
            .map(|reference| self.resolve(reference.as_ref(), kind))
            .collect()
    }

    /// Resolve an image reference and emit an `<img>` tag through the
    /// given renderer.
    pub fn image_tag<R: MarkupRenderer>(
        &self,
        renderer: &R,
        reference: &str,
        attributes: &[(&str, &str)],
    ) -> String {
        renderer.image(&self.image_url(reference), attributes)
    }

    /// Resolve a script reference and emit a `<script>` tag through the
    /// given renderer.
    pub fn script_tag<R: MarkupRenderer>(
        &self,
        renderer: &R,
        reference: &str,
        attributes: &[(&str, &str)],
    ) -> String {
        renderer.script(&self.script_url(reference), attributes)
    }

    /// Resolve a stylesheet reference and emit a `<link>` tag through the
    /// given renderer.
    pub fn style_tag<R: MarkupRenderer>(
        &self,
        renderer: &R,
        reference: &str,
        rel: Option<&str>,
        attributes: &[(&str, &str)],
    ) -> String {
        renderer.stylesheet(&self.style_url(reference), rel, attributes)
    }

    fn resolve_in_dir(&self, reference: &str, dir: Option<&str>, try_gzip: bool) -> String {
        if reference.is_empty() || is_external_reference(reference) {
            return reference.to_string();
        }

        let host = select_host(&self.config, self.context, reference);
        let dir_prefix = match dir {
            Some(dir) => format!("/{dir}/"),
            None => String::new(),
        };
        let name = if try_gzip && self.serve_gzip {
            gzip_variant_name(reference)
        } else {
            reference.to_string()
        };
        let suffix = self.timestamp_suffix(dir);

        format!("{}{host}{dir_prefix}{name}{suffix}", scheme(self.context))
    }

    fn timestamp_suffix(&self, dir: Option<&str>) -> String {
        if !self.force_timestamp {
            return String::new();
        }

        match dir_timestamp(Path::new(&self.config.webroot), dir) {
            Some(secs) => format!("?{secs}"),
            None => {
                debug!("no readable mtime under {}, omitting suffix", self.config.webroot);
                String::new()
            }
        }
    }
}
