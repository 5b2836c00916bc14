/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */
//! A Hyper-based Smithy service client.
#![warn(missing_debug_implementations, missing_docs, rustdoc::all)]

pub mod adapter;
pub mod builder;
pub mod erase;

#[cfg(feature = "test-util")]
pub mod test_connection;

#[cfg(feature = "rustls")]
pub mod hyper_ext;

pub use builder::Builder;

use smithy_http::body::SdkBody;
use smithy_http::operation::Operation;
use smithy_http::response::ParseHttpResponse;
pub use smithy_http::result::{SdkError, SdkSuccess};
use smithy_http_tower::dispatch::DispatchLayer;
use smithy_http_tower::parse_response::ParseResponseLayer;
use std::error::Error;
use std::future::Future;
use tower::{Service, ServiceBuilder, ServiceExt};
use tracing::Instrument;

type BoxError = Box<dyn Error + Send + Sync>;

/// Smithy service client.
///
/// The service client is customizeable in a number of ways (see [`Builder`]), but most customers
/// will never construct one directly: each service crate wraps a `Client` together with its
/// configuration.
///
/// The middleware takes the form of a [`tower::Layer`] that wraps the actual connection for each
/// request. The [`tower::Service`] that the middleware produces must accept requests of the type
/// [`smithy_http::operation::Request`] and return responses of the type
/// [`http::Response<SdkBody>`], most likely by modifying the provided request in place, passing it
/// to the inner service, and then ultimately returning the inner service's response.
///
/// A `Client` holds no per-request state. Every call builds a fresh service stack from a clone of
/// the connector, so one client can be shared freely between tasks and threads.
#[derive(Debug, Clone)]
pub struct Client<Connector, Middleware> {
    connector: Connector,
    middleware: Middleware,
}

impl<C, M> Client<C, M>
where
    C: bounds::SmithyConnector,
    M: bounds::SmithyMiddleware<C> + 'static,
{
    /// Dispatch this request to the network
    ///
    /// For ergonomics, this does not include the raw response for successful responses. To
    /// access the raw response use `call_raw`.
    pub fn call<O, T, E>(
        &self,
        input: Operation<O>,
    ) -> impl Future<Output = Result<T, SdkError<E>>> + Send + 'static
    where
        O: ParseHttpResponse<SdkBody, Output = Result<T, E>> + Send + Sync + 'static,
        T: 'static,
        E: 'static,
    {
        let response = self.call_raw(input);
        async move { response.await.map(|res| res.parsed) }
    }

    /// Dispatch this request to the network
    ///
    /// The returned result contains the raw HTTP response which can be useful for debugging or
    /// implementing unsupported features.
    ///
    /// The service stack is assembled before this function returns, so the returned future does
    /// not borrow the client.
    pub fn call_raw<O, T, E>(
        &self,
        input: Operation<O>,
    ) -> impl Future<Output = Result<SdkSuccess<T>, SdkError<E>>> + Send + 'static
    where
        O: ParseHttpResponse<SdkBody, Output = Result<T, E>> + Send + Sync + 'static,
        T: 'static,
        E: 'static,
    {
        let span = match input.metadata() {
            Some(metadata) => tracing::debug_span!(
                "send_operation",
                operation = metadata.name(),
                service = metadata.service()
            ),
            None => tracing::debug_span!("send_operation"),
        };
        let connector = self.connector.clone();
        let mut svc = ServiceBuilder::new()
            .layer(ParseResponseLayer::<O>::new())
            // These layers can be considered as occurring in order. That is, first invoke the
            // customer-provided middleware, then dispatch dispatch over the wire.
            .layer(&self.middleware)
            .layer(DispatchLayer::new())
            .service(connector);
        async move {
            let ready = svc.ready().await?;
            let result = ready.call(input).await;
            match &result {
                Ok(success) => tracing::debug!(status = %success.raw.status(), "operation succeeded"),
                Err(err) => tracing::debug!(error = %DisplayKind(err), "operation failed"),
            }
            result
        }
        .instrument(span)
    }
}

impl<C, M> Client<C, M> {
    /// The connector requests are dispatched through
    pub fn connector(&self) -> &C {
        &self.connector
    }

    /// The middleware applied to every request
    pub fn middleware(&self) -> &M {
        &self.middleware
    }
}

struct DisplayKind<'a, E>(&'a SdkError<E>);

impl<E> std::fmt::Display for DisplayKind<'_, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            SdkError::ConstructionFailure(err) => write!(f, "construction failure: {}", err),
            SdkError::DispatchFailure(err) => write!(f, "dispatch failure: {}", err),
            SdkError::ResponseError { raw, err } => {
                write!(f, "response error ({}): {}", raw.status(), err)
            }
            SdkError::ServiceError { raw, .. } => write!(f, "service error ({})", raw.status()),
        }
    }
}

/// This module holds convenient short-hands for the otherwise fairly extensive trait bounds
/// required for `call` and friends.
///
/// The short-hands will one day be true [trait aliases], but for now they are traits with blanket
/// implementations. Also, due to [compiler limitations], the bounds repeat a number of associated
/// types with bounds so that those bounds [do not need to be repeated] at the call site. It's a
/// bit of a mess to define, but _should_ be invisible to callers.
///
/// [trait aliases]: https://rust-lang.github.io/rfcs/1733-trait-alias.html
/// [compiler limitations]: https://github.com/rust-lang/rust/issues/20671
/// [do not need to be repeated]: https://github.com/rust-lang/rust/issues/20671#issuecomment-529752828
pub mod bounds {
    use super::*;
    use tower::Layer;

    /// A service that has parsed a raw Smithy response.
    pub type Parsed<S, O> = smithy_http_tower::parse_response::ParseResponseService<S, O>;

    /// A low-level Smithy connector that maps from [`http::Request`] to [`http::Response`].
    ///
    /// This trait has a blanket implementation for all compatible types, and should never need to
    /// be implemented.
    pub trait SmithyConnector:
        Service<
            http::Request<SdkBody>,
            Response = http::Response<SdkBody>,
            Error = <Self as SmithyConnector>::Error,
            Future = <Self as SmithyConnector>::Future,
        > + Send
        + Clone
        + 'static
    {
        /// Forwarding type to `<Self as Service>::Error` for bound inference.
        ///
        /// See module-level docs for details.
        type Error: Into<BoxError> + Send + Sync + 'static;

        /// Forwarding type to `<Self as Service>::Future` for bound inference.
        ///
        /// See module-level docs for details.
        type Future: Send + 'static;
    }

    impl<T> SmithyConnector for T
    where
        T: Service<http::Request<SdkBody>, Response = http::Response<SdkBody>>
            + Send
            + Clone
            + 'static,
        T::Error: Into<BoxError> + Send + Sync + 'static,
        T::Future: Send + 'static,
    {
        type Error = T::Error;
        type Future = T::Future;
    }

    /// A Smithy middleware service that adjusts [`smithy_http::operation::Request`]s.
    ///
    /// This trait has a blanket implementation for all compatible types, and should never need to
    /// be implemented.
    pub trait SmithyMiddlewareService:
        Service<
        smithy_http::operation::Request,
        Response = http::Response<SdkBody>,
        Error = smithy_http_tower::SendOperationError,
        Future = <Self as SmithyMiddlewareService>::Future,
    >
    {
        /// Forwarding type to `<Self as Service>::Future` for bound inference.
        ///
        /// See module-level docs for details.
        type Future: Send + 'static;
    }

    impl<T> SmithyMiddlewareService for T
    where
        T: Service<
            smithy_http::operation::Request,
            Response = http::Response<SdkBody>,
            Error = smithy_http_tower::SendOperationError,
        >,
        T::Future: Send + 'static,
    {
        type Future = T::Future;
    }

    /// A Smithy middleware layer (i.e., factory).
    ///
    /// This trait has a blanket implementation for all compatible types, and should never need to
    /// be implemented.
    pub trait SmithyMiddleware<C>:
        Layer<
        smithy_http_tower::dispatch::DispatchService<C>,
        Service = <Self as SmithyMiddleware<C>>::Service,
    >
    {
        /// Forwarding type to `<Self as Layer>::Service` for bound inference.
        ///
        /// See module-level docs for details.
        type Service: SmithyMiddlewareService + Send + 'static;
    }

    impl<T, C> SmithyMiddleware<C> for T
    where
        T: Layer<smithy_http_tower::dispatch::DispatchService<C>>,
        T::Service: SmithyMiddlewareService + Send + 'static,
    {
        type Service = T::Service;
    }
}

#[cfg(test)]
mod tests {
    use crate::{BoxError, Builder, SdkError};
    use bytes::Bytes;
    use smithy_http::body::SdkBody;
    use smithy_http::operation;
    use smithy_http::operation::{Metadata, Operation};
    use smithy_http::response::ParseStrictResponse;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Debug, PartialEq)]
    struct StatusError(u16);

    struct ParseStatus;
    impl ParseStrictResponse for ParseStatus {
        type Output = Result<String, StatusError>;

        fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
            if response.status().is_success() {
                Ok(String::from_utf8_lossy(response.body()).into_owned())
            } else {
                Err(StatusError(response.status().as_u16()))
            }
        }
    }

    fn op() -> Operation<ParseStatus> {
        Operation::new(
            operation::Request::new(http::Request::new(SdkBody::empty())),
            ParseStatus,
        )
        .with_metadata(Metadata::new("Test", "test"))
    }

    fn is_send_sync<T: Send + Sync>(_: &T) {}

    #[tokio::test]
    async fn successful_call() {
        let client = Builder::new()
            .middleware(tower::layer::util::Identity::new())
            .map_connector(|_req: http::Request<SdkBody>| async {
                Ok(http::Response::new(SdkBody::from("hello")))
            })
            .build();
        is_send_sync(&client);
        assert_eq!(client.call(op()).await.unwrap(), "hello");
    }

    #[tokio::test]
    async fn service_errors_are_not_retried() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let client = Builder::new()
            .middleware(tower::layer::util::Identity::new())
            .map_connector(move |_req: http::Request<SdkBody>| {
                counter.fetch_add(1, Ordering::SeqCst);
                async {
                    Ok(http::Response::builder()
                        .status(503)
                        .body(SdkBody::empty())
                        .unwrap())
                }
            })
            .build();
        let err = client.call(op()).await.unwrap_err();
        assert_eq!(err.service_error(), Some(&StatusError(503)));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn dispatch_errors_are_reported() {
        let client = Builder::new()
            .middleware(tower::layer::util::Identity::new())
            .map_connector(|_req: http::Request<SdkBody>| async {
                Err::<http::Response<SdkBody>, BoxError>("connection refused".into())
            })
            .build();
        let err = client.call(op()).await.unwrap_err();
        assert!(matches!(err, SdkError::DispatchFailure(_)));
    }

    #[test]
    fn future_does_not_borrow_client() {
        let client = Builder::new()
            .middleware(tower::layer::util::Identity::new())
            .map_connector(|_req: http::Request<SdkBody>| async {
                Ok(http::Response::new(SdkBody::from("owned")))
            })
            .build();
        let future = client.call(op());
        drop(client);
        let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
        assert_eq!(rt.block_on(future).unwrap(), "owned");
    }
}
