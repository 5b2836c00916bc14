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

/// Client for Amazon S3 Glacier
///
/// Cloning is cheap and every clone shares the same configuration and connection pool. A client
/// can be used from any number of threads at once.
///
/// Each operation has a method returning a builder. Set the input members on the builder, then
/// send it with one of:
/// - `send`, an `async fn`
/// - `send_callable`, which starts the request on the configured executor and returns a
///   [`Callable`](smithy_client::adapter::Callable) to await later
/// - `send_with`, which starts the request on the configured executor and passes the outcome to
///   a handler
/// - `send_blocking`, which waits for the outcome on the calling thread
///
/// ```rust,no_run
/// # async fn docs() -> Result<(), glacier::SdkError<glacier::Error>> {
/// let client = glacier::Client::from_env();
/// let vaults = client.list_vaults().account_id("-").send().await?;
/// println!("{:?}", vaults.vault_list);
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

    pub fn abort_vault_lock(&self) -> fluent_builders::AbortVaultLock {
        fluent_builders::Fluent::new(self.handle.clone())
    }

    pub fn add_tags_to_vault(&self) -> fluent_builders::AddTagsToVault {
        fluent_builders::Fluent::new(self.handle.clone())
    }

    pub fn complete_vault_lock(&self) -> fluent_builders::CompleteVaultLock {
        fluent_builders::Fluent::new(self.handle.clone())
    }

    pub fn create_vault(&self) -> fluent_builders::CreateVault {
        fluent_builders::Fluent::new(self.handle.clone())
    }

    pub fn delete_vault(&self) -> fluent_builders::DeleteVault {
        fluent_builders::Fluent::new(self.handle.clone())
    }

    pub fn delete_vault_access_policy(&self) -> fluent_builders::DeleteVaultAccessPolicy {
        fluent_builders::Fluent::new(self.handle.clone())
    }

    pub fn delete_vault_notifications(&self) -> fluent_builders::DeleteVaultNotifications {
        fluent_builders::Fluent::new(self.handle.clone())
    }

    pub fn describe_job(&self) -> fluent_builders::DescribeJob {
        fluent_builders::Fluent::new(self.handle.clone())
    }

    pub fn describe_vault(&self) -> fluent_builders::DescribeVault {
        fluent_builders::Fluent::new(self.handle.clone())
    }

    pub fn get_data_retrieval_policy(&self) -> fluent_builders::GetDataRetrievalPolicy {
        fluent_builders::Fluent::new(self.handle.clone())
    }

    pub fn get_vault_access_policy(&self) -> fluent_builders::GetVaultAccessPolicy {
        fluent_builders::Fluent::new(self.handle.clone())
    }

    pub fn get_vault_lock(&self) -> fluent_builders::GetVaultLock {
        fluent_builders::Fluent::new(self.handle.clone())
    }

    pub fn get_vault_notifications(&self) -> fluent_builders::GetVaultNotifications {
        fluent_builders::Fluent::new(self.handle.clone())
    }

    pub fn initiate_job(&self) -> fluent_builders::InitiateJob {
        fluent_builders::Fluent::new(self.handle.clone())
    }

    pub fn initiate_vault_lock(&self) -> fluent_builders::InitiateVaultLock {
        fluent_builders::Fluent::new(self.handle.clone())
    }

    pub fn list_jobs(&self) -> fluent_builders::ListJobs {
        fluent_builders::Fluent::new(self.handle.clone())
    }

    pub fn list_tags_for_vault(&self) -> fluent_builders::ListTagsForVault {
        fluent_builders::Fluent::new(self.handle.clone())
    }

    pub fn list_vaults(&self) -> fluent_builders::ListVaults {
        fluent_builders::Fluent::new(self.handle.clone())
    }

    pub fn remove_tags_from_vault(&self) -> fluent_builders::RemoveTagsFromVault {
        fluent_builders::Fluent::new(self.handle.clone())
    }

    pub fn set_data_retrieval_policy(&self) -> fluent_builders::SetDataRetrievalPolicy {
        fluent_builders::Fluent::new(self.handle.clone())
    }

    pub fn set_vault_access_policy(&self) -> fluent_builders::SetVaultAccessPolicy {
        fluent_builders::Fluent::new(self.handle.clone())
    }

    pub fn set_vault_notifications(&self) -> fluent_builders::SetVaultNotifications {
        fluent_builders::Fluent::new(self.handle.clone())
    }
}

pub mod fluent_builders {
    use crate::client::{Client, Handle};
    use crate::error::Error;
    use crate::input::*;
    use crate::model::{
        DataRetrievalPolicy, JobParameters, VaultAccessPolicy, VaultLockPolicy,
        VaultNotificationConfig,
    };
    use aws_hyper::SdkError;
    use smithy_client::adapter::{self, Callable};
    use smithy_http::shape::HttpOperation;
    use std::collections::HashMap;
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

    macro_rules! vault_setters {
        ($($builder:ty),* $(,)?) => {
            $(
                setters!($builder {
                    account_id(impl Into<String>),
                    set_account_id(Option<String>),
                    vault_name(impl Into<String>),
                    set_vault_name(Option<String>),
                });
            )*
        };
    }

    /// Fluent builder for `AbortVaultLock`
    pub type AbortVaultLock = Fluent<abort_vault_lock_input::Builder>;
    /// Fluent builder for `AddTagsToVault`
    pub type AddTagsToVault = Fluent<add_tags_to_vault_input::Builder>;
    /// Fluent builder for `CompleteVaultLock`
    pub type CompleteVaultLock = Fluent<complete_vault_lock_input::Builder>;
    /// Fluent builder for `CreateVault`
    pub type CreateVault = Fluent<create_vault_input::Builder>;
    /// Fluent builder for `DeleteVault`
    pub type DeleteVault = Fluent<delete_vault_input::Builder>;
    /// Fluent builder for `DeleteVaultAccessPolicy`
    pub type DeleteVaultAccessPolicy = Fluent<delete_vault_access_policy_input::Builder>;
    /// Fluent builder for `DeleteVaultNotifications`
    pub type DeleteVaultNotifications = Fluent<delete_vault_notifications_input::Builder>;
    /// Fluent builder for `DescribeJob`
    pub type DescribeJob = Fluent<describe_job_input::Builder>;
    /// Fluent builder for `DescribeVault`
    pub type DescribeVault = Fluent<describe_vault_input::Builder>;
    /// Fluent builder for `GetDataRetrievalPolicy`
    pub type GetDataRetrievalPolicy = Fluent<get_data_retrieval_policy_input::Builder>;
    /// Fluent builder for `GetVaultAccessPolicy`
    pub type GetVaultAccessPolicy = Fluent<get_vault_access_policy_input::Builder>;
    /// Fluent builder for `GetVaultLock`
    pub type GetVaultLock = Fluent<get_vault_lock_input::Builder>;
    /// Fluent builder for `GetVaultNotifications`
    pub type GetVaultNotifications = Fluent<get_vault_notifications_input::Builder>;
    /// Fluent builder for `InitiateJob`
    pub type InitiateJob = Fluent<initiate_job_input::Builder>;
    /// Fluent builder for `InitiateVaultLock`
    pub type InitiateVaultLock = Fluent<initiate_vault_lock_input::Builder>;
    /// Fluent builder for `ListJobs`
    pub type ListJobs = Fluent<list_jobs_input::Builder>;
    /// Fluent builder for `ListTagsForVault`
    pub type ListTagsForVault = Fluent<list_tags_for_vault_input::Builder>;
    /// Fluent builder for `ListVaults`
    pub type ListVaults = Fluent<list_vaults_input::Builder>;
    /// Fluent builder for `RemoveTagsFromVault`
    pub type RemoveTagsFromVault = Fluent<remove_tags_from_vault_input::Builder>;
    /// Fluent builder for `SetDataRetrievalPolicy`
    pub type SetDataRetrievalPolicy = Fluent<set_data_retrieval_policy_input::Builder>;
    /// Fluent builder for `SetVaultAccessPolicy`
    pub type SetVaultAccessPolicy = Fluent<set_vault_access_policy_input::Builder>;
    /// Fluent builder for `SetVaultNotifications`
    pub type SetVaultNotifications = Fluent<set_vault_notifications_input::Builder>;

    vault_setters!(
        abort_vault_lock_input::Builder,
        add_tags_to_vault_input::Builder,
        complete_vault_lock_input::Builder,
        create_vault_input::Builder,
        delete_vault_input::Builder,
        delete_vault_access_policy_input::Builder,
        delete_vault_notifications_input::Builder,
        describe_job_input::Builder,
        describe_vault_input::Builder,
        get_vault_access_policy_input::Builder,
        get_vault_lock_input::Builder,
        get_vault_notifications_input::Builder,
        initiate_job_input::Builder,
        initiate_vault_lock_input::Builder,
        list_jobs_input::Builder,
        list_tags_for_vault_input::Builder,
        remove_tags_from_vault_input::Builder,
        set_vault_access_policy_input::Builder,
        set_vault_notifications_input::Builder,
    );

    impl AddTagsToVault {
        /// Add a tag. Repeated keys keep the last value.
        pub fn tags(mut self, k: impl Into<String>, v: impl Into<String>) -> Self {
            self.inner = self.inner.tags(k, v);
            self
        }

        pub fn set_tags(mut self, input: Option<HashMap<String, String>>) -> Self {
            self.inner = self.inner.set_tags(input);
            self
        }
    }

    setters!(complete_vault_lock_input::Builder {
        lock_id(impl Into<String>),
        set_lock_id(Option<String>),
    });

    setters!(describe_job_input::Builder {
        job_id(impl Into<String>),
        set_job_id(Option<String>),
    });

    setters!(get_data_retrieval_policy_input::Builder {
        account_id(impl Into<String>),
        set_account_id(Option<String>),
    });

    setters!(initiate_job_input::Builder {
        job_parameters(JobParameters),
        set_job_parameters(Option<JobParameters>),
    });

    setters!(initiate_vault_lock_input::Builder {
        policy(VaultLockPolicy),
        set_policy(Option<VaultLockPolicy>),
    });

    setters!(list_jobs_input::Builder {
        limit(i32),
        set_limit(Option<i32>),
        marker(impl Into<String>),
        set_marker(Option<String>),
        statuscode(impl Into<String>),
        set_statuscode(Option<String>),
        completed(impl Into<String>),
        set_completed(Option<String>),
    });

    setters!(list_vaults_input::Builder {
        account_id(impl Into<String>),
        set_account_id(Option<String>),
        marker(impl Into<String>),
        set_marker(Option<String>),
        limit(i32),
        set_limit(Option<i32>),
    });

    setters!(remove_tags_from_vault_input::Builder {
        tag_keys(impl Into<String>),
        set_tag_keys(Option<Vec<String>>),
    });

    setters!(set_data_retrieval_policy_input::Builder {
        account_id(impl Into<String>),
        set_account_id(Option<String>),
        policy(DataRetrievalPolicy),
        set_policy(Option<DataRetrievalPolicy>),
    });

    setters!(set_vault_access_policy_input::Builder {
        policy(VaultAccessPolicy),
        set_policy(Option<VaultAccessPolicy>),
    });

    setters!(set_vault_notifications_input::Builder {
        vault_notification_config(VaultNotificationConfig),
        set_vault_notification_config(Option<VaultNotificationConfig>),
    });
}
