/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Client configuration.
//!
//! Providers are consulted once, in [`Builder::build`]. The resulting [`Config`] is immutable
//! and shared by every request the client sends.

use aws_endpoint::{set_endpoint_resolver, Metadata, ResolveAwsEndpoint};
use aws_http::user_agent::AwsUserAgent;
use aws_types::credential::{EnvironmentVariableCredentialsProvider, ProvideCredentials};
use aws_types::os_shim_internal::Env;
use aws_types::region::{self, ProvideRegion, Region};
use aws_types::Credentials;
use smithy_async::rt::spawn::{default_spawn, SharedSpawn, Spawn};
use smithy_http::property_bag::PropertyBag;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

pub struct Config {
    pub(crate) region: Option<Region>,
    pub(crate) credentials: Option<Credentials>,
    pub(crate) endpoint_resolver: Arc<dyn ResolveAwsEndpoint>,
    pub(crate) executor: Option<SharedSpawn>,
    pub(crate) user_agent: AwsUserAgent,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("region", &self.region)
            .field("credentials", &self.credentials)
            .field("executor", &self.executor)
            .finish()
    }
}

impl Config {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Region and credentials from the standard environment variables
    pub fn from_env() -> Self {
        Builder::default()
            .region(region::EnvironmentProvider::new())
            .credentials_provider(EnvironmentVariableCredentialsProvider::new())
            .build()
    }

    pub fn region(&self) -> Option<&Region> {
        self.region.as_ref()
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// Executor used by `send_callable`, `send_with` and `send_blocking`
    pub fn executor(&self) -> Option<&SharedSpawn> {
        self.executor.as_ref()
    }

    /// Seed the property bag of a request with everything the middleware reads
    pub(crate) fn apply(&self, props: &mut PropertyBag) {
        if let Some(region) = &self.region {
            props.insert(region.clone());
        }
        if let Some(credentials) = &self.credentials {
            props.insert(credentials.clone());
        }
        set_endpoint_resolver(props, self.endpoint_resolver.clone());
        props.insert(self.user_agent.clone());
    }
}

#[derive(Default)]
pub struct Builder {
    region: Option<Region>,
    credentials_provider: Option<Box<dyn ProvideCredentials>>,
    endpoint_resolver: Option<Arc<dyn ResolveAwsEndpoint>>,
    executor: Option<SharedSpawn>,
    app_name: Option<Cow<'static, str>>,
    env: Option<Env>,
}

impl Builder {
    /// The region requests are sent to
    ///
    /// The provider is consulted immediately.
    pub fn region(mut self, region: impl ProvideRegion) -> Self {
        self.region = region.region();
        self
    }

    pub fn credentials_provider(mut self, provider: impl ProvideCredentials + 'static) -> Self {
        self.credentials_provider = Some(Box::new(provider));
        self
    }

    /// Override endpoint resolution
    ///
    /// To send every request to a fixed URI, pass an
    /// [`Endpoint`](smithy_http::endpoint::Endpoint).
    pub fn endpoint_resolver(mut self, resolver: impl ResolveAwsEndpoint + 'static) -> Self {
        self.endpoint_resolver = Some(Arc::new(resolver));
        self
    }

    /// Executor for background requests
    ///
    /// Defaults to the Tokio runtime `build` is called from, if any.
    pub fn executor(mut self, executor: impl Spawn + 'static) -> Self {
        self.executor = Some(SharedSpawn::new(executor));
        self
    }

    /// Name of the calling application, added to the user agent
    pub fn app_name(mut self, app_name: impl Into<Cow<'static, str>>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    #[doc(hidden)]
    pub fn env(mut self, env: Env) -> Self {
        self.env = Some(env);
        self
    }

    pub fn build(self) -> Config {
        let credentials = self.credentials_provider.and_then(|provider| {
            match provider.provide_credentials() {
                Ok(credentials) => Some(credentials),
                Err(err) => {
                    tracing::warn!(
                        error = %err,
                        "failed to load credentials; requests will fail to sign"
                    );
                    None
                }
            }
        });
        if self.region.is_none() {
            tracing::debug!("no region configured");
        }
        let env = self.env.unwrap_or_else(Env::real);
        let mut user_agent = AwsUserAgent::new_from_environment(env, crate::API_METADATA);
        if let Some(app_name) = self.app_name {
            user_agent = user_agent.with_app_name(app_name);
        }
        Config {
            region: self.region,
            credentials,
            endpoint_resolver: self.endpoint_resolver.unwrap_or_else(|| {
                Arc::new(Metadata::regional("glacier.{region}.amazonaws.com"))
            }),
            executor: self.executor.or_else(default_spawn),
            user_agent,
        }
    }
}

#[cfg(test)]
mod test {
    use crate::config::Config;
    use aws_types::credential::EnvironmentVariableCredentialsProvider;
    use aws_types::os_shim_internal::Env;
    use aws_types::region::{EnvironmentProvider, Region};
    use aws_types::Credentials;

    #[test]
    fn providers_are_resolved_at_build() {
        let env = Env::from_slice(&[
            ("AWS_REGION", "eu-west-1"),
            ("AWS_ACCESS_KEY_ID", "AKID"),
            ("AWS_SECRET_ACCESS_KEY", "secret"),
        ]);
        let conf = Config::builder()
            .region(EnvironmentProvider::from_env(env.clone()))
            .credentials_provider(EnvironmentVariableCredentialsProvider::new_with_env(
                env.clone(),
            ))
            .env(env)
            .build();
        assert_eq!(conf.region(), Some(&Region::new("eu-west-1")));
        assert_eq!(
            conf.credentials().map(Credentials::access_key_id),
            Some("AKID")
        );
    }

    #[test]
    fn missing_credentials_are_not_fatal() {
        let env = Env::from_slice(&[]);
        let conf = Config::builder()
            .credentials_provider(EnvironmentVariableCredentialsProvider::new_with_env(
                env.clone(),
            ))
            .env(env)
            .build();
        assert!(conf.credentials().is_none());
        assert!(conf.region().is_none());
    }

    #[test]
    fn no_executor_outside_a_runtime() {
        let conf = Config::builder().build();
        assert!(conf.executor().is_none());
    }

    #[tokio::test]
    async fn executor_defaults_to_the_current_runtime() {
        let conf = Config::builder().build();
        assert!(conf.executor().is_some());
    }
}
