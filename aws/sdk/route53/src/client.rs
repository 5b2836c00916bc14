/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::config::Config;
use crate::error::Error;
use crate::operation::make_operation;
use aws_hyper::SdkError;
use smithy_http::shape::HttpOperation;
use std::future::Future;
use std::sync::Arc;

#[derive(Debug)]
pub(crate) struct Handle {
    client: aws_hyper::Client,
    conf: Config,
}

impl Handle {
    /// Build and send `input`, without borrowing it or `self` past this call
    fn dispatch<I>(
        &self,
        input: &I,
    ) -> impl Future<Output = Result<I::Output, SdkError<Error>>> + Send + 'static
    where
        I: HttpOperation<Error = Error> + 'static,
        I::Output: 'static,
    {
        let call = make_operation(input, &self.conf).map(|op| self.client.call(op));
        async move {
            match call {
                Ok(call) => call.await,
                Err(err) => {
                    tracing::debug!(operation = I::SHAPE.name, error = %err, "invalid input");
                    Err(SdkError::ConstructionFailure(Box::new(err)))
                }
            }
        }
    }
}

/// Client for Amazon Route 53
///
/// Cloning is cheap and clones share configuration and connections. Each operation method
/// returns a builder that is sent with `send`, `send_callable`, `send_with` or `send_blocking`.
///
/// ```rust,no_run
/// # async fn docs() -> Result<(), route53::SdkError<route53::Error>> {
/// use route53::model::TagResourceType;
///
/// let client = route53::Client::from_env();
/// let tags = client
///     .list_tags_for_resource()
///     .resource_type(TagResourceType::Hostedzone)
///     .resource_id("Z1D633PJN98FT9")
///     .send()
///     .await?;
/// println!("{:?}", tags.resource_tag_set);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Client {
    handle: Arc<Handle>,
}

impl Client {
    /// A client sending requests over `conn`
    pub fn from_conf_conn<C>(conf: Config, conn: C) -> Self
    where
        C: smithy_client::bounds::SmithyConnector + Sync,
    {
        Client {
            handle: Arc::new(Handle {
                client: aws_hyper::new(conn),
                conf,
            }),
        }
    }

    #[cfg(feature = "rustls")]
    pub fn from_conf(conf: Config) -> Self {
        Client {
            handle: Arc::new(Handle {
                client: aws_hyper::https(),
                conf,
            }),
        }
    }

    #[cfg(feature = "rustls")]
    pub fn from_env() -> Self {
        Self::from_conf(Config::from_env())
    }

    pub fn conf(&self) -> &Config {
        &self.handle.conf
    }

    pub fn get_hosted_zone_limit(&self) -> fluent_builders::GetHostedZoneLimit {
        fluent_builders::Fluent::new(self.handle.clone())
    }

    pub fn list_tags_for_resource(&self) -> fluent_builders::ListTagsForResource {
        fluent_builders::Fluent::new(self.handle.clone())
    }

    pub fn change_tags_for_resource(&self) -> fluent_builders::ChangeTagsForResource {
        fluent_builders::Fluent::new(self.handle.clone())
    }
}

pub mod fluent_builders {
    use crate::client::{Client, Handle};
    use crate::error::Error;
    use crate::input::*;
    use crate::model::{HostedZoneLimitType, Tag, TagResourceType};
    use aws_hyper::SdkError;
    use smithy_client::adapter::{self, Callable};
    use smithy_http::shape::HttpOperation;
    use std::fmt;
    use std::sync::Arc;

    /// Input builder bound to a client
    pub struct Fluent<B> {
        handle: Arc<Handle>,
        inner: B,
    }

    impl<B: fmt::Debug> fmt::Debug for Fluent<B> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.debug_struct("Fluent").field("inner", &self.inner).finish()
        }
    }

    impl<B: Default> Fluent<B> {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Fluent {
                handle,
                inner: B::default(),
            }
        }
    }

    impl<B> Fluent<B>
    where
        B: BuildInput,
        B::Input: HttpOperation<Error = Error> + Send + 'static,
        <B::Input as HttpOperation>::Output: Send + 'static,
    {
        /// The input as currently set
        pub fn build(self) -> B::Input {
            self.inner.build()
        }

        /// Send the request and wait for its outcome
        pub async fn send(
            self,
        ) -> Result<<B::Input as HttpOperation>::Output, SdkError<Error>> {
            let request = self.handle.dispatch(&self.inner.build());
            request.await
        }

        /// Start the request on the configured executor
        ///
        /// Without an executor, the returned `Callable` resolves to a construction failure.
        pub fn send_callable(self) -> Callable<<B::Input as HttpOperation>::Output, Error> {
            let request = self.handle.dispatch(&self.inner.build());
            adapter::spawn_callable(self.handle.conf.executor.as_ref(), request)
        }

        /// Start the request on the configured executor and call `handler` with its outcome
        ///
        /// `handler` is called exactly once, with the client and input that produced the
        /// request and the `context` passed here. Without an executor it is called before this
        /// function returns, with a construction failure.
        pub fn send_with<H, C>(self, handler: H, context: C)
        where
            H: FnOnce(
                    &Client,
                    &B::Input,
                    Result<<B::Input as HttpOperation>::Output, SdkError<Error>>,
                    C,
                ) + Send
                + 'static,
            C: Send + 'static,
        {
            let input = self.inner.build();
            let request = self.handle.dispatch(&input);
            let client = Client {
                handle: self.handle.clone(),
            };
            adapter::spawn_with_handler(
                self.handle.conf.executor.as_ref(),
                request,
                move |outcome| handler(&client, &input, outcome, context),
            );
        }

        /// Send the request and block the calling thread until its outcome is known
        ///
        /// Must not be called from within an async context.
        pub fn send_blocking(
            self,
        ) -> Result<<B::Input as HttpOperation>::Output, SdkError<Error>> {
            let request = self.handle.dispatch(&self.inner.build());
            adapter::block_on(self.handle.conf.executor.as_ref(), request)
        }
    }

    macro_rules! setters {
        ($builder:ty { $($setter:ident($ty:ty)),* $(,)? }) => {
            impl Fluent<$builder> {
                $(
                    pub fn $setter(mut self, input: $ty) -> Self {
                        self.inner = self.inner.$setter(input);
                        self
                    }
                )*
            }
        };
    }

    /// Fluent builder for `GetHostedZoneLimit`
    pub type GetHostedZoneLimit = Fluent<get_hosted_zone_limit_input::Builder>;
    /// Fluent builder for `ListTagsForResource`
    pub type ListTagsForResource = Fluent<list_tags_for_resource_input::Builder>;
    /// Fluent builder for `ChangeTagsForResource`
    pub type ChangeTagsForResource = Fluent<change_tags_for_resource_input::Builder>;

    setters!(get_hosted_zone_limit_input::Builder {
        r#type(HostedZoneLimitType),
        set_type(Option<HostedZoneLimitType>),
        hosted_zone_id(impl Into<String>),
        set_hosted_zone_id(Option<String>),
    });

    setters!(list_tags_for_resource_input::Builder {
        resource_type(TagResourceType),
        set_resource_type(Option<TagResourceType>),
        resource_id(impl Into<String>),
        set_resource_id(Option<String>),
    });

    setters!(change_tags_for_resource_input::Builder {
        resource_type(TagResourceType),
        set_resource_type(Option<TagResourceType>),
        resource_id(impl Into<String>),
        set_resource_id(Option<String>),
        add_tags(Tag),
        set_add_tags(Option<Vec<Tag>>),
        remove_tag_keys(impl Into<String>),
        set_remove_tag_keys(Option<Vec<String>>),
    });
}
