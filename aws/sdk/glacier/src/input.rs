/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Operation inputs.
//!
//! Every member is optional: `None` means the member was never set and is left out of the
//! request. Builders consume and return `self`, and `build()` never fails. Required members are
//! checked when the request is sent.

use crate::model::{
    DataRetrievalPolicy, JobParameters, VaultAccessPolicy, VaultLockPolicy, VaultNotificationConfig,
};
use serde::Serialize;
use smithy_http::body::SdkBody;
use smithy_http::operation::BuildError;
use smithy_http::query;
use smithy_http::shape::HttpInput;
use std::borrow::Cow;
use std::collections::HashMap;

/// A builder that produces an operation input
pub trait BuildInput: Default {
    type Input;

    fn build(self) -> Self::Input;
}

fn label<'a>(value: &'a Option<String>) -> Option<Cow<'a, str>> {
    value.as_deref().map(Cow::Borrowed)
}

fn vault_label<'a>(
    account_id: &'a Option<String>,
    vault_name: &'a Option<String>,
    name: &str,
) -> Option<Cow<'a, str>> {
    match name {
        "AccountId" => label(account_id),
        "VaultName" => label(vault_name),
        _ => None,
    }
}

fn json_body<T: Serialize + ?Sized>(body: &T) -> Result<SdkBody, BuildError> {
    serde_json::to_vec(body)
        .map(SdkBody::from)
        .map_err(BuildError::serialization)
}

/// Inputs that address a vault and carry nothing else
macro_rules! vault_input {
    ($(#[$doc:meta])* $input:ident, $module:ident) => {
        $(#[$doc])*
        #[non_exhaustive]
        #[derive(Clone, Debug, Default, PartialEq)]
        pub struct $input {
            /// Account that owns the vault. `-` selects the account of the signing credentials.
            pub account_id: Option<String>,
            pub vault_name: Option<String>,
        }

        impl $input {
            pub fn builder() -> $module::Builder {
                $module::Builder::default()
            }
        }

        pub mod $module {
            #[non_exhaustive]
            #[derive(Clone, Debug, Default, PartialEq)]
            pub struct Builder {
                account_id: Option<String>,
                vault_name: Option<String>,
            }

            impl Builder {
                pub fn account_id(mut self, input: impl Into<String>) -> Self {
                    self.account_id = Some(input.into());
                    self
                }

                pub fn set_account_id(mut self, input: Option<String>) -> Self {
                    self.account_id = input;
                    self
                }

                pub fn vault_name(mut self, input: impl Into<String>) -> Self {
                    self.vault_name = Some(input.into());
                    self
                }

                pub fn set_vault_name(mut self, input: Option<String>) -> Self {
                    self.vault_name = input;
                    self
                }

                pub fn build(self) -> super::$input {
                    super::$input {
                        account_id: self.account_id,
                        vault_name: self.vault_name,
                    }
                }
            }

            impl super::BuildInput for Builder {
                type Input = super::$input;

                fn build(self) -> super::$input {
                    Builder::build(self)
                }
            }
        }

        impl HttpInput for $input {
            fn label(&self, name: &str) -> Option<Cow<'_, str>> {
                vault_label(&self.account_id, &self.vault_name, name)
            }

            fn is_set(&self, member: &str) -> bool {
                self.label(member).is_some()
            }
        }
    };
}

vault_input!(
    /// Input of `AbortVaultLock`
    AbortVaultLockInput,
    abort_vault_lock_input
);
vault_input!(
    /// Input of `CreateVault`
    CreateVaultInput,
    create_vault_input
);
vault_input!(
    /// Input of `DeleteVault`
    DeleteVaultInput,
    delete_vault_input
);
vault_input!(
    /// Input of `DeleteVaultAccessPolicy`
    DeleteVaultAccessPolicyInput,
    delete_vault_access_policy_input
);
vault_input!(
    /// Input of `DeleteVaultNotifications`
    DeleteVaultNotificationsInput,
    delete_vault_notifications_input
);
vault_input!(
    /// Input of `DescribeVault`
    DescribeVaultInput,
    describe_vault_input
);
vault_input!(
    /// Input of `GetVaultAccessPolicy`
    GetVaultAccessPolicyInput,
    get_vault_access_policy_input
);
vault_input!(
    /// Input of `GetVaultNotifications`
    GetVaultNotificationsInput,
    get_vault_notifications_input
);
vault_input!(
    /// Input of `GetVaultLock`
    GetVaultLockInput,
    get_vault_lock_input
);
vault_input!(
    /// Input of `ListTagsForVault`
    ListTagsForVaultInput,
    list_tags_for_vault_input
);

/// Input of `AddTagsToVault`
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct AddTagsToVaultInput {
    #[serde(skip)]
    pub account_id: Option<String>,
    #[serde(skip)]
    pub vault_name: Option<String>,
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<HashMap<String, String>>,
}

impl AddTagsToVaultInput {
    pub fn builder() -> add_tags_to_vault_input::Builder {
        add_tags_to_vault_input::Builder::default()
    }
}

pub mod add_tags_to_vault_input {
    use std::collections::HashMap;

    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        account_id: Option<String>,
        vault_name: Option<String>,
        tags: Option<HashMap<String, String>>,
    }

    impl Builder {
        pub fn account_id(mut self, input: impl Into<String>) -> Self {
            self.account_id = Some(input.into());
            self
        }

        pub fn set_account_id(mut self, input: Option<String>) -> Self {
            self.account_id = input;
            self
        }

        pub fn vault_name(mut self, input: impl Into<String>) -> Self {
            self.vault_name = Some(input.into());
            self
        }

        pub fn set_vault_name(mut self, input: Option<String>) -> Self {
            self.vault_name = input;
            self
        }

        /// Add a tag. Repeated keys keep the last value.
        pub fn tags(mut self, k: impl Into<String>, v: impl Into<String>) -> Self {
            self.tags
                .get_or_insert_with(HashMap::new)
                .insert(k.into(), v.into());
            self
        }

        pub fn set_tags(mut self, input: Option<HashMap<String, String>>) -> Self {
            self.tags = input;
            self
        }

        pub fn build(self) -> super::AddTagsToVaultInput {
            super::AddTagsToVaultInput {
                account_id: self.account_id,
                vault_name: self.vault_name,
                tags: self.tags,
            }
        }
    }

    impl super::BuildInput for Builder {
        type Input = super::AddTagsToVaultInput;

        fn build(self) -> super::AddTagsToVaultInput {
            Builder::build(self)
        }
    }
}

impl HttpInput for AddTagsToVaultInput {
    fn label(&self, name: &str) -> Option<Cow<'_, str>> {
        vault_label(&self.account_id, &self.vault_name, name)
    }

    fn is_set(&self, member: &str) -> bool {
        match member {
            "Tags" => self.tags.is_some(),
            other => self.label(other).is_some(),
        }
    }

    fn payload(&self) -> Result<SdkBody, BuildError> {
        json_body(self)
    }
}

/// Input of `CompleteVaultLock`
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CompleteVaultLockInput {
    pub account_id: Option<String>,
    pub vault_name: Option<String>,
    /// Returned by `InitiateVaultLock`
    pub lock_id: Option<String>,
}

impl CompleteVaultLockInput {
    pub fn builder() -> complete_vault_lock_input::Builder {
        complete_vault_lock_input::Builder::default()
    }
}

pub mod complete_vault_lock_input {
    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        account_id: Option<String>,
        vault_name: Option<String>,
        lock_id: Option<String>,
    }

    impl Builder {
        pub fn account_id(mut self, input: impl Into<String>) -> Self {
            self.account_id = Some(input.into());
            self
        }

        pub fn set_account_id(mut self, input: Option<String>) -> Self {
            self.account_id = input;
            self
        }

        pub fn vault_name(mut self, input: impl Into<String>) -> Self {
            self.vault_name = Some(input.into());
            self
        }

        pub fn set_vault_name(mut self, input: Option<String>) -> Self {
            self.vault_name = input;
            self
        }

        pub fn lock_id(mut self, input: impl Into<String>) -> Self {
            self.lock_id = Some(input.into());
            self
        }

        pub fn set_lock_id(mut self, input: Option<String>) -> Self {
            self.lock_id = input;
            self
        }

        pub fn build(self) -> super::CompleteVaultLockInput {
            super::CompleteVaultLockInput {
                account_id: self.account_id,
                vault_name: self.vault_name,
                lock_id: self.lock_id,
            }
        }
    }

    impl super::BuildInput for Builder {
        type Input = super::CompleteVaultLockInput;

        fn build(self) -> super::CompleteVaultLockInput {
            Builder::build(self)
        }
    }
}

impl HttpInput for CompleteVaultLockInput {
    fn label(&self, name: &str) -> Option<Cow<'_, str>> {
        match name {
            "LockId" => label(&self.lock_id),
            other => vault_label(&self.account_id, &self.vault_name, other),
        }
    }

    fn is_set(&self, member: &str) -> bool {
        self.label(member).is_some()
    }
}

/// Input of `DescribeJob`
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DescribeJobInput {
    pub account_id: Option<String>,
    pub vault_name: Option<String>,
    pub job_id: Option<String>,
}

impl DescribeJobInput {
    pub fn builder() -> describe_job_input::Builder {
        describe_job_input::Builder::default()
    }
}

pub mod describe_job_input {
    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        account_id: Option<String>,
        vault_name: Option<String>,
        job_id: Option<String>,
    }

    impl Builder {
        pub fn account_id(mut self, input: impl Into<String>) -> Self {
            self.account_id = Some(input.into());
            self
        }

        pub fn set_account_id(mut self, input: Option<String>) -> Self {
            self.account_id = input;
            self
        }

        pub fn vault_name(mut self, input: impl Into<String>) -> Self {
            self.vault_name = Some(input.into());
            self
        }

        pub fn set_vault_name(mut self, input: Option<String>) -> Self {
            self.vault_name = input;
            self
        }

        pub fn job_id(mut self, input: impl Into<String>) -> Self {
            self.job_id = Some(input.into());
            self
        }

        pub fn set_job_id(mut self, input: Option<String>) -> Self {
            self.job_id = input;
            self
        }

        pub fn build(self) -> super::DescribeJobInput {
            super::DescribeJobInput {
                account_id: self.account_id,
                vault_name: self.vault_name,
                job_id: self.job_id,
            }
        }
    }

    impl super::BuildInput for Builder {
        type Input = super::DescribeJobInput;

        fn build(self) -> super::DescribeJobInput {
            Builder::build(self)
        }
    }
}

impl HttpInput for DescribeJobInput {
    fn label(&self, name: &str) -> Option<Cow<'_, str>> {
        match name {
            "JobId" => label(&self.job_id),
            other => vault_label(&self.account_id, &self.vault_name, other),
        }
    }

    fn is_set(&self, member: &str) -> bool {
        self.label(member).is_some()
    }
}

/// Input of `GetDataRetrievalPolicy`
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GetDataRetrievalPolicyInput {
    pub account_id: Option<String>,
}

impl GetDataRetrievalPolicyInput {
    pub fn builder() -> get_data_retrieval_policy_input::Builder {
        get_data_retrieval_policy_input::Builder::default()
    }
}

pub mod get_data_retrieval_policy_input {
    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        account_id: Option<String>,
    }

    impl Builder {
        pub fn account_id(mut self, input: impl Into<String>) -> Self {
            self.account_id = Some(input.into());
            self
        }

        pub fn set_account_id(mut self, input: Option<String>) -> Self {
            self.account_id = input;
            self
        }

        pub fn build(self) -> super::GetDataRetrievalPolicyInput {
            super::GetDataRetrievalPolicyInput {
                account_id: self.account_id,
            }
        }
    }

    impl super::BuildInput for Builder {
        type Input = super::GetDataRetrievalPolicyInput;

        fn build(self) -> super::GetDataRetrievalPolicyInput {
            Builder::build(self)
        }
    }
}

impl HttpInput for GetDataRetrievalPolicyInput {
    fn label(&self, name: &str) -> Option<Cow<'_, str>> {
        match name {
            "AccountId" => label(&self.account_id),
            _ => None,
        }
    }

    fn is_set(&self, member: &str) -> bool {
        self.label(member).is_some()
    }
}

/// Input of `InitiateJob`
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InitiateJobInput {
    pub account_id: Option<String>,
    pub vault_name: Option<String>,
    /// Sent as the request body
    pub job_parameters: Option<JobParameters>,
}

impl InitiateJobInput {
    pub fn builder() -> initiate_job_input::Builder {
        initiate_job_input::Builder::default()
    }
}

pub mod initiate_job_input {
    use crate::model::JobParameters;

    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        account_id: Option<String>,
        vault_name: Option<String>,
        job_parameters: Option<JobParameters>,
    }

    impl Builder {
        pub fn account_id(mut self, input: impl Into<String>) -> Self {
            self.account_id = Some(input.into());
            self
        }

        pub fn set_account_id(mut self, input: Option<String>) -> Self {
            self.account_id = input;
            self
        }

        pub fn vault_name(mut self, input: impl Into<String>) -> Self {
            self.vault_name = Some(input.into());
            self
        }

        pub fn set_vault_name(mut self, input: Option<String>) -> Self {
            self.vault_name = input;
            self
        }

        pub fn job_parameters(mut self, input: JobParameters) -> Self {
            self.job_parameters = Some(input);
            self
        }

        pub fn set_job_parameters(mut self, input: Option<JobParameters>) -> Self {
            self.job_parameters = input;
            self
        }

        pub fn build(self) -> super::InitiateJobInput {
            super::InitiateJobInput {
                account_id: self.account_id,
                vault_name: self.vault_name,
                job_parameters: self.job_parameters,
            }
        }
    }

    impl super::BuildInput for Builder {
        type Input = super::InitiateJobInput;

        fn build(self) -> super::InitiateJobInput {
            Builder::build(self)
        }
    }
}

impl HttpInput for InitiateJobInput {
    fn label(&self, name: &str) -> Option<Cow<'_, str>> {
        vault_label(&self.account_id, &self.vault_name, name)
    }

    fn is_set(&self, member: &str) -> bool {
        match member {
            "jobParameters" => self.job_parameters.is_some(),
            other => self.label(other).is_some(),
        }
    }

    fn payload(&self) -> Result<SdkBody, BuildError> {
        match &self.job_parameters {
            Some(params) => json_body(params),
            None => Ok(SdkBody::empty()),
        }
    }
}

/// Input of `InitiateVaultLock`
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InitiateVaultLockInput {
    pub account_id: Option<String>,
    pub vault_name: Option<String>,
    /// Sent as the request body
    pub policy: Option<VaultLockPolicy>,
}

impl InitiateVaultLockInput {
    pub fn builder() -> initiate_vault_lock_input::Builder {
        initiate_vault_lock_input::Builder::default()
    }
}

pub mod initiate_vault_lock_input {
    use crate::model::VaultLockPolicy;

    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        account_id: Option<String>,
        vault_name: Option<String>,
        policy: Option<VaultLockPolicy>,
    }

    impl Builder {
        pub fn account_id(mut self, input: impl Into<String>) -> Self {
            self.account_id = Some(input.into());
            self
        }

        pub fn set_account_id(mut self, input: Option<String>) -> Self {
            self.account_id = input;
            self
        }

        pub fn vault_name(mut self, input: impl Into<String>) -> Self {
            self.vault_name = Some(input.into());
            self
        }

        pub fn set_vault_name(mut self, input: Option<String>) -> Self {
            self.vault_name = input;
            self
        }

        pub fn policy(mut self, input: VaultLockPolicy) -> Self {
            self.policy = Some(input);
            self
        }

        pub fn set_policy(mut self, input: Option<VaultLockPolicy>) -> Self {
            self.policy = input;
            self
        }

        pub fn build(self) -> super::InitiateVaultLockInput {
            super::InitiateVaultLockInput {
                account_id: self.account_id,
                vault_name: self.vault_name,
                policy: self.policy,
            }
        }
    }

    impl super::BuildInput for Builder {
        type Input = super::InitiateVaultLockInput;

        fn build(self) -> super::InitiateVaultLockInput {
            Builder::build(self)
        }
    }
}

impl HttpInput for InitiateVaultLockInput {
    fn label(&self, name: &str) -> Option<Cow<'_, str>> {
        vault_label(&self.account_id, &self.vault_name, name)
    }

    fn is_set(&self, member: &str) -> bool {
        match member {
            "policy" => self.policy.is_some(),
            other => self.label(other).is_some(),
        }
    }

    fn payload(&self) -> Result<SdkBody, BuildError> {
        match &self.policy {
            Some(policy) => json_body(policy),
            None => Ok(SdkBody::empty()),
        }
    }
}

/// Input of `ListJobs`
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListJobsInput {
    pub account_id: Option<String>,
    pub vault_name: Option<String>,
    /// Maximum number of jobs returned, up to 50
    pub limit: Option<i32>,
    /// Pagination token from a previous `ListJobs` call
    pub marker: Option<String>,
    /// `InProgress`, `Succeeded` or `Failed`
    pub statuscode: Option<String>,
    /// `true` or `false`
    pub completed: Option<String>,
}

impl ListJobsInput {
    pub fn builder() -> list_jobs_input::Builder {
        list_jobs_input::Builder::default()
    }
}

pub mod list_jobs_input {
    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        account_id: Option<String>,
        vault_name: Option<String>,
        limit: Option<i32>,
        marker: Option<String>,
        statuscode: Option<String>,
        completed: Option<String>,
    }

    impl Builder {
        pub fn account_id(mut self, input: impl Into<String>) -> Self {
            self.account_id = Some(input.into());
            self
        }

        pub fn set_account_id(mut self, input: Option<String>) -> Self {
            self.account_id = input;
            self
        }

        pub fn vault_name(mut self, input: impl Into<String>) -> Self {
            self.vault_name = Some(input.into());
            self
        }

        pub fn set_vault_name(mut self, input: Option<String>) -> Self {
            self.vault_name = input;
            self
        }

        pub fn limit(mut self, input: i32) -> Self {
            self.limit = Some(input);
            self
        }

        pub fn set_limit(mut self, input: Option<i32>) -> Self {
            self.limit = input;
            self
        }

        pub fn marker(mut self, input: impl Into<String>) -> Self {
            self.marker = Some(input.into());
            self
        }

        pub fn set_marker(mut self, input: Option<String>) -> Self {
            self.marker = input;
            self
        }

        pub fn statuscode(mut self, input: impl Into<String>) -> Self {
            self.statuscode = Some(input.into());
            self
        }

        pub fn set_statuscode(mut self, input: Option<String>) -> Self {
            self.statuscode = input;
            self
        }

        pub fn completed(mut self, input: impl Into<String>) -> Self {
            self.completed = Some(input.into());
            self
        }

        pub fn set_completed(mut self, input: Option<String>) -> Self {
            self.completed = input;
            self
        }

        pub fn build(self) -> super::ListJobsInput {
            super::ListJobsInput {
                account_id: self.account_id,
                vault_name: self.vault_name,
                limit: self.limit,
                marker: self.marker,
                statuscode: self.statuscode,
                completed: self.completed,
            }
        }
    }

    impl super::BuildInput for Builder {
        type Input = super::ListJobsInput;

        fn build(self) -> super::ListJobsInput {
            Builder::build(self)
        }
    }
}

impl HttpInput for ListJobsInput {
    fn label(&self, name: &str) -> Option<Cow<'_, str>> {
        vault_label(&self.account_id, &self.vault_name, name)
    }

    fn is_set(&self, member: &str) -> bool {
        match member {
            "limit" => self.limit.is_some(),
            "marker" => self.marker.is_some(),
            "statuscode" => self.statuscode.is_some(),
            "completed" => self.completed.is_some(),
            other => self.label(other).is_some(),
        }
    }

    fn write_query(&self, query: &mut query::Writer<'_>) {
        if let Some(limit) = self.limit {
            query.push_kv("limit", &limit.to_string());
        }
        if let Some(marker) = &self.marker {
            query.push_kv("marker", marker);
        }
        if let Some(statuscode) = &self.statuscode {
            query.push_kv("statuscode", statuscode);
        }
        if let Some(completed) = &self.completed {
            query.push_kv("completed", completed);
        }
    }
}

/// Input of `ListVaults`
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListVaultsInput {
    pub account_id: Option<String>,
    /// Pagination token from a previous `ListVaults` call
    pub marker: Option<String>,
    /// Maximum number of vaults returned, up to 1000
    pub limit: Option<i32>,
}

impl ListVaultsInput {
    pub fn builder() -> list_vaults_input::Builder {
        list_vaults_input::Builder::default()
    }
}

pub mod list_vaults_input {
    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        account_id: Option<String>,
        marker: Option<String>,
        limit: Option<i32>,
    }

    impl Builder {
        pub fn account_id(mut self, input: impl Into<String>) -> Self {
            self.account_id = Some(input.into());
            self
        }

        pub fn set_account_id(mut self, input: Option<String>) -> Self {
            self.account_id = input;
            self
        }

        pub fn marker(mut self, input: impl Into<String>) -> Self {
            self.marker = Some(input.into());
            self
        }

        pub fn set_marker(mut self, input: Option<String>) -> Self {
            self.marker = input;
            self
        }

        pub fn limit(mut self, input: i32) -> Self {
            self.limit = Some(input);
            self
        }

        pub fn set_limit(mut self, input: Option<i32>) -> Self {
            self.limit = input;
            self
        }

        pub fn build(self) -> super::ListVaultsInput {
            super::ListVaultsInput {
                account_id: self.account_id,
                marker: self.marker,
                limit: self.limit,
            }
        }
    }

    impl super::BuildInput for Builder {
        type Input = super::ListVaultsInput;

        fn build(self) -> super::ListVaultsInput {
            Builder::build(self)
        }
    }
}

impl HttpInput for ListVaultsInput {
    fn label(&self, name: &str) -> Option<Cow<'_, str>> {
        match name {
            "AccountId" => label(&self.account_id),
            _ => None,
        }
    }

    fn is_set(&self, member: &str) -> bool {
        match member {
            "marker" => self.marker.is_some(),
            "limit" => self.limit.is_some(),
            other => self.label(other).is_some(),
        }
    }

    fn write_query(&self, query: &mut query::Writer<'_>) {
        if let Some(marker) = &self.marker {
            query.push_kv("marker", marker);
        }
        if let Some(limit) = self.limit {
            query.push_kv("limit", &limit.to_string());
        }
    }
}

/// Input of `RemoveTagsFromVault`
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct RemoveTagsFromVaultInput {
    #[serde(skip)]
    pub account_id: Option<String>,
    #[serde(skip)]
    pub vault_name: Option<String>,
    #[serde(rename = "TagKeys", skip_serializing_if = "Option::is_none")]
    pub tag_keys: Option<Vec<String>>,
}

impl RemoveTagsFromVaultInput {
    pub fn builder() -> remove_tags_from_vault_input::Builder {
        remove_tags_from_vault_input::Builder::default()
    }
}

pub mod remove_tags_from_vault_input {
    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        account_id: Option<String>,
        vault_name: Option<String>,
        tag_keys: Option<Vec<String>>,
    }

    impl Builder {
        pub fn account_id(mut self, input: impl Into<String>) -> Self {
            self.account_id = Some(input.into());
            self
        }

        pub fn set_account_id(mut self, input: Option<String>) -> Self {
            self.account_id = input;
            self
        }

        pub fn vault_name(mut self, input: impl Into<String>) -> Self {
            self.vault_name = Some(input.into());
            self
        }

        pub fn set_vault_name(mut self, input: Option<String>) -> Self {
            self.vault_name = input;
            self
        }

        /// Append a key to remove
        pub fn tag_keys(mut self, input: impl Into<String>) -> Self {
            self.tag_keys
                .get_or_insert_with(Vec::new)
                .push(input.into());
            self
        }

        pub fn set_tag_keys(mut self, input: Option<Vec<String>>) -> Self {
            self.tag_keys = input;
            self
        }

        pub fn build(self) -> super::RemoveTagsFromVaultInput {
            super::RemoveTagsFromVaultInput {
                account_id: self.account_id,
                vault_name: self.vault_name,
                tag_keys: self.tag_keys,
            }
        }
    }

    impl super::BuildInput for Builder {
        type Input = super::RemoveTagsFromVaultInput;

        fn build(self) -> super::RemoveTagsFromVaultInput {
            Builder::build(self)
        }
    }
}

impl HttpInput for RemoveTagsFromVaultInput {
    fn label(&self, name: &str) -> Option<Cow<'_, str>> {
        vault_label(&self.account_id, &self.vault_name, name)
    }

    fn is_set(&self, member: &str) -> bool {
        match member {
            "TagKeys" => self.tag_keys.is_some(),
            other => self.label(other).is_some(),
        }
    }

    fn payload(&self) -> Result<SdkBody, BuildError> {
        json_body(self)
    }
}

/// Input of `SetDataRetrievalPolicy`
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SetDataRetrievalPolicyInput {
    #[serde(skip)]
    pub account_id: Option<String>,
    #[serde(rename = "Policy", skip_serializing_if = "Option::is_none")]
    pub policy: Option<DataRetrievalPolicy>,
}

impl SetDataRetrievalPolicyInput {
    pub fn builder() -> set_data_retrieval_policy_input::Builder {
        set_data_retrieval_policy_input::Builder::default()
    }
}

pub mod set_data_retrieval_policy_input {
    use crate::model::DataRetrievalPolicy;

    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        account_id: Option<String>,
        policy: Option<DataRetrievalPolicy>,
    }

    impl Builder {
        pub fn account_id(mut self, input: impl Into<String>) -> Self {
            self.account_id = Some(input.into());
            self
        }

        pub fn set_account_id(mut self, input: Option<String>) -> Self {
            self.account_id = input;
            self
        }

        pub fn policy(mut self, input: DataRetrievalPolicy) -> Self {
            self.policy = Some(input);
            self
        }

        pub fn set_policy(mut self, input: Option<DataRetrievalPolicy>) -> Self {
            self.policy = input;
            self
        }

        pub fn build(self) -> super::SetDataRetrievalPolicyInput {
            super::SetDataRetrievalPolicyInput {
                account_id: self.account_id,
                policy: self.policy,
            }
        }
    }

    impl super::BuildInput for Builder {
        type Input = super::SetDataRetrievalPolicyInput;

        fn build(self) -> super::SetDataRetrievalPolicyInput {
            Builder::build(self)
        }
    }
}

impl HttpInput for SetDataRetrievalPolicyInput {
    fn label(&self, name: &str) -> Option<Cow<'_, str>> {
        match name {
            "AccountId" => label(&self.account_id),
            _ => None,
        }
    }

    fn is_set(&self, member: &str) -> bool {
        match member {
            "Policy" => self.policy.is_some(),
            other => self.label(other).is_some(),
        }
    }

    fn payload(&self) -> Result<SdkBody, BuildError> {
        json_body(self)
    }
}

/// Input of `SetVaultAccessPolicy`
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SetVaultAccessPolicyInput {
    pub account_id: Option<String>,
    pub vault_name: Option<String>,
    /// Sent as the request body
    pub policy: Option<VaultAccessPolicy>,
}

impl SetVaultAccessPolicyInput {
    pub fn builder() -> set_vault_access_policy_input::Builder {
        set_vault_access_policy_input::Builder::default()
    }
}

pub mod set_vault_access_policy_input {
    use crate::model::VaultAccessPolicy;

    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        account_id: Option<String>,
        vault_name: Option<String>,
        policy: Option<VaultAccessPolicy>,
    }

    impl Builder {
        pub fn account_id(mut self, input: impl Into<String>) -> Self {
            self.account_id = Some(input.into());
            self
        }

        pub fn set_account_id(mut self, input: Option<String>) -> Self {
            self.account_id = input;
            self
        }

        pub fn vault_name(mut self, input: impl Into<String>) -> Self {
            self.vault_name = Some(input.into());
            self
        }

        pub fn set_vault_name(mut self, input: Option<String>) -> Self {
            self.vault_name = input;
            self
        }

        pub fn policy(mut self, input: VaultAccessPolicy) -> Self {
            self.policy = Some(input);
            self
        }

        pub fn set_policy(mut self, input: Option<VaultAccessPolicy>) -> Self {
            self.policy = input;
            self
        }

        pub fn build(self) -> super::SetVaultAccessPolicyInput {
            super::SetVaultAccessPolicyInput {
                account_id: self.account_id,
                vault_name: self.vault_name,
                policy: self.policy,
            }
        }
    }

    impl super::BuildInput for Builder {
        type Input = super::SetVaultAccessPolicyInput;

        fn build(self) -> super::SetVaultAccessPolicyInput {
            Builder::build(self)
        }
    }
}

impl HttpInput for SetVaultAccessPolicyInput {
    fn label(&self, name: &str) -> Option<Cow<'_, str>> {
        vault_label(&self.account_id, &self.vault_name, name)
    }

    fn is_set(&self, member: &str) -> bool {
        match member {
            "policy" => self.policy.is_some(),
            other => self.label(other).is_some(),
        }
    }

    fn payload(&self) -> Result<SdkBody, BuildError> {
        match &self.policy {
            Some(policy) => json_body(policy),
            None => Ok(SdkBody::empty()),
        }
    }
}

/// Input of `SetVaultNotifications`
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SetVaultNotificationsInput {
    pub account_id: Option<String>,
    pub vault_name: Option<String>,
    /// Sent as the request body
    pub vault_notification_config: Option<VaultNotificationConfig>,
}

impl SetVaultNotificationsInput {
    pub fn builder() -> set_vault_notifications_input::Builder {
        set_vault_notifications_input::Builder::default()
    }
}

pub mod set_vault_notifications_input {
    use crate::model::VaultNotificationConfig;

    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        account_id: Option<String>,
        vault_name: Option<String>,
        vault_notification_config: Option<VaultNotificationConfig>,
    }

    impl Builder {
        pub fn account_id(mut self, input: impl Into<String>) -> Self {
            self.account_id = Some(input.into());
            self
        }

        pub fn set_account_id(mut self, input: Option<String>) -> Self {
            self.account_id = input;
            self
        }

        pub fn vault_name(mut self, input: impl Into<String>) -> Self {
            self.vault_name = Some(input.into());
            self
        }

        pub fn set_vault_name(mut self, input: Option<String>) -> Self {
            self.vault_name = input;
            self
        }

        pub fn vault_notification_config(mut self, input: VaultNotificationConfig) -> Self {
            self.vault_notification_config = Some(input);
            self
        }

        pub fn set_vault_notification_config(
            mut self,
            input: Option<VaultNotificationConfig>,
        ) -> Self {
            self.vault_notification_config = input;
            self
        }

        pub fn build(self) -> super::SetVaultNotificationsInput {
            super::SetVaultNotificationsInput {
                account_id: self.account_id,
                vault_name: self.vault_name,
                vault_notification_config: self.vault_notification_config,
            }
        }
    }

    impl super::BuildInput for Builder {
        type Input = super::SetVaultNotificationsInput;

        fn build(self) -> super::SetVaultNotificationsInput {
            Builder::build(self)
        }
    }
}

impl HttpInput for SetVaultNotificationsInput {
    fn label(&self, name: &str) -> Option<Cow<'_, str>> {
        vault_label(&self.account_id, &self.vault_name, name)
    }

    fn is_set(&self, member: &str) -> bool {
        match member {
            "vaultNotificationConfig" => self.vault_notification_config.is_some(),
            other => self.label(other).is_some(),
        }
    }

    fn payload(&self) -> Result<SdkBody, BuildError> {
        match &self.vault_notification_config {
            Some(config) => json_body(config),
            None => Ok(SdkBody::empty()),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::input::{
        AddTagsToVaultInput, DeleteVaultInput, ListJobsInput, RemoveTagsFromVaultInput,
    };
    use smithy_http::shape::HttpInput;

    #[test]
    fn setting_marks_a_member_present() {
        let input = DeleteVaultInput::builder().account_id("-").build();
        assert!(input.is_set("AccountId"));
        assert!(!input.is_set("VaultName"));

        let input = DeleteVaultInput::builder()
            .account_id("-")
            .vault_name("")
            .build();
        assert!(input.is_set("VaultName"));

        let input = DeleteVaultInput::builder()
            .vault_name("x")
            .set_vault_name(None)
            .build();
        assert!(!input.is_set("VaultName"));
    }

    #[test]
    fn tags_accumulate() {
        let input = AddTagsToVaultInput::builder()
            .tags("a", "1")
            .tags("b", "2")
            .tags("a", "3")
            .build();
        let tags = input.tags.expect("tags were set");
        assert_eq!(tags.len(), 2);
        assert_eq!(tags["a"], "3");
    }

    #[test]
    fn json_body_contains_only_set_members() {
        let input = AddTagsToVaultInput::builder()
            .account_id("-")
            .vault_name("x")
            .build();
        assert_eq!(input.payload().unwrap().bytes(), Some(&b"{}"[..]));

        let input = RemoveTagsFromVaultInput::builder()
            .account_id("-")
            .vault_name("x")
            .set_tag_keys(Some(vec![]))
            .build();
        assert_eq!(
            input.payload().unwrap().bytes(),
            Some(&br#"{"TagKeys":[]}"#[..])
        );
    }

    #[test]
    fn query_members() {
        let input = ListJobsInput::builder()
            .account_id("-")
            .vault_name("x")
            .completed("false")
            .limit(0)
            .build();
        assert!(input.is_set("limit"));
        assert!(!input.is_set("marker"));
        let mut query = String::from("/-/vaults/x/jobs");
        input.write_query(&mut smithy_http::query::Writer::new(&mut query));
        assert_eq!(query, "/-/vaults/x/jobs?limit=0&completed=false");
    }
}
