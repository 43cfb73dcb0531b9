use std::hash::Hasher;

use log::trace;
use rustc_hash::FxHasher;

use crate::config::{ResolverConfig, SHARD_PLACEHOLDER};
use crate::context::RequestContext;

/// Select the host that should serve the given asset.
///
/// TLS requests always use the dedicated TLS host so the browser keeps a
/// single warm connection. Plain HTTP requests are spread across the shard
/// pool when the configured pattern contains the `%d` placeholder; a
/// pattern without the placeholder is used verbatim.
pub fn select_host(config: &ResolverConfig, context: &RequestContext, asset_key: &str) -> String {
    if context.tls {
        return config.ssl_host.clone();
    }

    if config.asset_host.contains(SHARD_PLACEHOLDER) {
        let shard = shard_index(config, asset_key);
        trace!("asset {asset_key} assigned to shard {shard}");
        return config
            .asset_host
            .replace(SHARD_PLACEHOLDER, &shard.to_string());
    }

    config.asset_host.clone()
}

/// Map an asset key onto a shard index within the configured pool.
///
/// The index is derived from a stable non-cryptographic hash of the key, so
/// the same asset always lands on the same host and edge caches stay warm
/// across requests and across deploys. Indices cover the inclusive range
/// `num_hosts_min..=num_hosts_max`.
fn shard_index(config: &ResolverConfig, asset_key: &str) -> u32 {
    let mut hasher = FxHasher::default();
    hasher.write(asset_key.as_bytes());

    let offset = hasher.finish() % u64::from(config.shard_count());
    config.num_hosts_min + offset as u32
}

#[cfg(test)]
mod tests {
    use super::{select_host, shard_index};
    use crate::config::ResolverConfig;
    use crate::context::RequestContext;

    fn context() -> RequestContext {
        RequestContext::new("www.example.com")
    }

    #[test]
    fn identical_keys_always_map_to_the_same_host() {
        let config = ResolverConfig::default();
        let context = context();

        let first = select_host(&config, &context, "logo.png");
        let second = select_host(&config, &context, "logo.png");

        assert_eq!(first, second);
    }

    #[test]
    fn sharded_hosts_fill_in_the_placeholder() {
        let config = ResolverConfig::default();

        let host = select_host(&config, &context(), "logo.png");

        assert!(host.starts_with("assets"));
        assert!(host.ends_with(".example.com"));
        assert!(!host.contains("%d"));
    }

    #[test]
    fn shard_indices_stay_inside_the_configured_range() {
        let config = ResolverConfig {
            num_hosts_min: 2,
            num_hosts_max: 5,
            ..ResolverConfig::default()
        };

        for i in 0..100 {
            let shard = shard_index(&config, &format!("asset-{i}.png"));
            assert!((2..=5).contains(&shard), "shard {shard} out of range");
        }
    }

    #[test]
    fn distinct_keys_spread_across_the_pool() {
        let config = ResolverConfig::default();
        let shards: std::collections::BTreeSet<u32> = (0..100)
            .map(|i| shard_index(&config, &format!("asset-{i}.png")))
            .collect();

        assert!(shards.len() > 1, "expected more than one shard in use");
    }

    #[test]
    fn tls_requests_always_use_the_ssl_host() {
        let config = ResolverConfig::default();
        let context = RequestContext {
            tls: true,
            ..context()
        };

        assert_eq!(select_host(&config, &context, "logo.png"), "sslhost.example.com");
        assert_eq!(select_host(&config, &context, "app.js"), "sslhost.example.com");
    }

    #[test]
    fn plain_patterns_are_used_verbatim() {
        let config = ResolverConfig {
            asset_host: "assets.example.com".into(),
            ..ResolverConfig::default()
        };

        assert_eq!(
            select_host(&config, &context(), "logo.png"),
            "assets.example.com"
        );
        assert_eq!(
            select_host(&config, &context(), "app.js"),
            "assets.example.com"
        );
    }

    #[test]
    fn single_shard_pools_pin_the_index() {
        let config = ResolverConfig {
            num_hosts_min: 4,
            num_hosts_max: 4,
            ..ResolverConfig::default()
        };

        assert_eq!(select_host(&config, &context(), "logo.png"), "assets4.example.com");
    }
}
