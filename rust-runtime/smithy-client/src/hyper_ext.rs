/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Connectors backed by [`hyper`].

use crate::erase::DynConnector;
use crate::Builder;
use smithy_http::body::SdkBody;
use tower::ServiceExt;

/// Wrap a hyper client so that it speaks `SdkBody` on both sides.
pub fn adapter<C>(client: hyper::Client<C, SdkBody>) -> DynConnector
where
    C: hyper::client::connect::Connect + Clone + Send + Sync + 'static,
{
    DynConnector::new(client.map_response(|response| response.map(SdkBody::from)))
}

/// An HTTPS connector using rustls and the platform's native root certificates.
pub fn https() -> DynConnector {
    let https = hyper_rustls::HttpsConnector::with_native_roots();
    adapter(hyper::Client::builder().build::<_, SdkBody>(https))
}

impl<M> Builder<(), M> {
    /// Connect to the service over HTTPS using [`rustls`](https://docs.rs/rustls).
    pub fn rustls(self) -> Builder<DynConnector, M> {
        self.connector(https())
    }
}
