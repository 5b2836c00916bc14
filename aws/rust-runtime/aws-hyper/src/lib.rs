/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! The standard AWS middleware stack and the client type every AWS service crate is built on.

#[cfg(feature = "test-util")]
pub use smithy_client::test_connection;

pub use smithy_client::erase::DynConnector;
pub use smithy_http::result::{SdkError, SdkSuccess};

use aws_endpoint::AwsEndpointStage;
use aws_http::user_agent::UserAgentStage;
use aws_sig_auth::middleware::SigV4SigningStage;
use aws_sig_auth::signer::SigV4Signer;
use smithy_http_tower::map_request::MapRequestLayer;
use tower::layer::util::{Identity, Stack};
use tower::{Layer, ServiceBuilder};

type AwsMiddlewareStack = Stack<
    MapRequestLayer<SigV4SigningStage>,
    Stack<MapRequestLayer<UserAgentStage>, Stack<MapRequestLayer<AwsEndpointStage>, Identity>>,
>;

/// AWS Middleware Stack
///
/// This implements the middleware stack shared by every AWS service. It will:
/// 1. Resolve the endpoint for the configured region
/// 2. Add a user agent to requests
/// 3. Sign requests with SigV4
#[derive(Debug, Default, Clone)]
#[non_exhaustive]
pub struct AwsMiddleware;

impl AwsMiddleware {
    /// Create a new `AwsMiddleware` stack
    ///
    /// Note: `AwsMiddleware` holds no state.
    pub fn new() -> Self {
        AwsMiddleware::default()
    }
}

// define the middleware stack in a non-generic location to reduce code bloat.
fn base() -> ServiceBuilder<AwsMiddlewareStack> {
    let signer = MapRequestLayer::for_mapper(SigV4SigningStage::new(SigV4Signer::new()));
    let endpoint_resolver = MapRequestLayer::for_mapper(AwsEndpointStage::new());
    let user_agent = MapRequestLayer::for_mapper(UserAgentStage::new());
    // These layers can be considered as occurring in order, that is:
    // 1. Resolve an endpoint
    // 2. Add a user agent
    // 3. Sign
    // (4. Dispatch over the wire)
    ServiceBuilder::new()
        .layer(endpoint_resolver)
        .layer(user_agent)
        .layer(signer)
}

impl<S> Layer<S> for AwsMiddleware {
    type Service = <AwsMiddlewareStack as Layer<S>>::Service;

    fn layer(&self, inner: S) -> Self::Service {
        base().service(inner)
    }
}

/// AWS Service Client
///
/// Hyper-based AWS Service Client. Most customers will want to construct a client with
/// [`https`]. For testing & other more advanced use cases, a custom connector may be used via
/// [`new`].
///
/// The connector is type-erased, so every service crate names the same client type regardless of
/// the transport in use.
pub type Client = smithy_client::Client<DynConnector, AwsMiddleware>;

/// Construct a client over `connector` with the standard AWS middleware
pub fn new<C>(connector: C) -> Client
where
    C: smithy_client::bounds::SmithyConnector + Sync,
{
    smithy_client::Builder::new()
        .connector(connector)
        .middleware(AwsMiddleware::new())
        .build_dyn()
}

/// A client over HTTPS (rustls with the platform's native roots)
#[cfg(feature = "rustls")]
pub fn https() -> Client {
    smithy_client::Builder::new()
        .rustls()
        .middleware(AwsMiddleware::new())
        .build()
}
