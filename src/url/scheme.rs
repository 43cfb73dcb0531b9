use crate::context::RequestContext;

/// Protocol prefix matching the current request.
///
/// Assets are always served over the protocol the page itself arrived on,
/// so TLS pages never embed mixed-content URLs.
pub fn scheme(context: &RequestContext) -> &'static str {
    if context.tls { "https://" } else { "http://" }
}
