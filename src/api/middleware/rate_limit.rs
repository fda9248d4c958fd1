//! Per-IP rate limiting with a token bucket.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

type IpGovernorLayer =
    GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

fn build(per_second: u64, burst_size: u32) -> IpGovernorLayer {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(per_second)
            .burst_size(burst_size)
            .finish()
            .expect("non-zero rate limit settings"),
    );

    GovernorLayer::new(governor_conf)
}

/// Rate limiter for signed-in pages and the API.
///
/// - **Rate**: 5 requests per second
/// - **Burst**: 100 requests
///
/// Requests exceeding the limit receive `429 Too Many Requests`. The key is
/// the socket peer address, so the server must be started with
/// `into_make_service_with_connect_info::<SocketAddr>()`.
pub fn layer() -> IpGovernorLayer {
    build(5, 100)
}

/// Stricter limiter for the login and registration forms.
///
/// - **Rate**: 1 request per second
/// - **Burst**: 10 requests
pub fn secure_layer() -> IpGovernorLayer {
    build(1, 10)
}
