/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Type-erased connectors, so that clients over different transports share one type.

use crate::{bounds, BoxError};
use smithy_http::body::SdkBody;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use tower::{Service, ServiceExt};

type BoxFuture = Pin<Box<dyn Future<Output = Result<http::Response<SdkBody>, BoxError>> + Send>>;

/// A connector with its concrete type erased.
///
/// Every call clones the wrapped connector and waits for it to become ready, so `DynConnector`
/// is always ready itself. It is `Send + Sync + Clone` whenever the wrapped connector is.
#[derive(Clone)]
pub struct DynConnector {
    dispatch: Arc<dyn Fn(http::Request<SdkBody>) -> BoxFuture + Send + Sync>,
}

impl fmt::Debug for DynConnector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynConnector").finish()
    }
}

impl DynConnector {
    /// Erase the type of `connector`
    pub fn new<C>(connector: C) -> Self
    where
        C: bounds::SmithyConnector + Sync,
    {
        let dispatch = move |request: http::Request<SdkBody>| -> BoxFuture {
            let connector = connector.clone();
            Box::pin(async move {
                ServiceExt::<http::Request<SdkBody>>::oneshot(connector, request)
                    .await
                    .map_err(Into::<BoxError>::into)
            })
        };
        DynConnector {
            dispatch: Arc::new(dispatch),
        }
    }
}

impl Service<http::Request<SdkBody>> for DynConnector {
    type Response = http::Response<SdkBody>;
    type Error = BoxError;
    type Future = BoxFuture;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: http::Request<SdkBody>) -> Self::Future {
        (self.dispatch)(req)
    }
}

#[cfg(test)]
mod tests {
    use crate::bounds;
    use crate::erase::DynConnector;
    use smithy_http::body::SdkBody;
    use tower::{Service, ServiceExt};

    fn is_send_sync<T: Send + Sync + Clone>(_: &T) {}

    fn erase<C>(connector: C) -> DynConnector
    where
        C: bounds::SmithyConnector + Sync,
    {
        DynConnector::new(connector)
    }

    #[tokio::test]
    async fn erased_connector_dispatches() {
        let inner = tower::service_fn(|req: http::Request<SdkBody>| async move {
            Ok::<_, std::convert::Infallible>(http::Response::new(SdkBody::from(
                req.uri().path().to_string(),
            )))
        });
        let mut conn = DynConnector::new(inner);
        is_send_sync(&conn);
        let req = http::Request::builder()
            .uri("https://example.com/echo")
            .body(SdkBody::empty())
            .unwrap();
        let resp = conn.ready().await.unwrap().call(req).await.unwrap();
        assert_eq!(resp.body().bytes(), Some(&b"/echo"[..]));
    }

    #[tokio::test]
    async fn generic_connector_errors_are_boxed() {
        let failing = tower::service_fn(|_req: http::Request<SdkBody>| async move {
            Err::<http::Response<SdkBody>, _>(std::io::Error::new(
                std::io::ErrorKind::ConnectionReset,
                "reset",
            ))
        });
        let mut conn = erase(failing);
        let err = conn
            .ready()
            .await
            .unwrap()
            .call(http::Request::new(SdkBody::empty()))
            .await
            .expect_err("connector failed");
        assert_eq!(err.to_string(), "reset");
    }
}
