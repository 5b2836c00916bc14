/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Operation outputs.

use crate::model::{
    DataRetrievalPolicy, GlacierJobDescription, VaultAccessPolicy, VaultDescription,
    VaultNotificationConfig,
};
use serde::Deserialize;
use std::collections::HashMap;

macro_rules! empty_output {
    ($($(#[$doc:meta])* $name:ident),* $(,)?) => {
        $(
            $(#[$doc])*
            #[non_exhaustive]
            #[derive(Clone, Debug, Default, PartialEq, Deserialize)]
            pub struct $name {}
        )*
    };
}

empty_output!(
    AbortVaultLockOutput,
    AddTagsToVaultOutput,
    CompleteVaultLockOutput,
    DeleteVaultOutput,
    DeleteVaultAccessPolicyOutput,
    DeleteVaultNotificationsOutput,
    RemoveTagsFromVaultOutput,
    SetDataRetrievalPolicyOutput,
    SetVaultAccessPolicyOutput,
    SetVaultNotificationsOutput,
);

/// Output of `CreateVault`
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CreateVaultOutput {
    /// Relative URI of the new vault, from the `Location` header
    pub location: Option<String>,
}

/// Output of `DescribeJob`
pub type DescribeJobOutput = GlacierJobDescription;

/// Output of `DescribeVault`
pub type DescribeVaultOutput = VaultDescription;

/// Output of `GetDataRetrievalPolicy`
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetDataRetrievalPolicyOutput {
    pub policy: Option<DataRetrievalPolicy>,
}

/// Output of `GetVaultAccessPolicy`
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GetVaultAccessPolicyOutput {
    /// The response body
    pub policy: Option<VaultAccessPolicy>,
}

/// Output of `GetVaultLock`
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetVaultLockOutput {
    /// The lock policy document, as a JSON string
    pub policy: Option<String>,
    /// `InProgress` or `Locked`
    pub state: Option<String>,
    /// When an in-progress lock expires unless completed
    pub expiration_date: Option<String>,
    pub creation_date: Option<String>,
}

/// Output of `GetVaultNotifications`
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GetVaultNotificationsOutput {
    /// The response body
    pub vault_notification_config: Option<VaultNotificationConfig>,
}

/// Output of `InitiateJob`
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InitiateJobOutput {
    /// From the `Location` header
    pub location: Option<String>,
    /// From the `x-amz-job-id` header
    pub job_id: Option<String>,
    /// From the `x-amz-job-output-path` header
    pub job_output_path: Option<String>,
}

/// Output of `InitiateVaultLock`
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InitiateVaultLockOutput {
    /// From the `x-amz-lock-id` header
    pub lock_id: Option<String>,
}

/// Output of `ListJobs`
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListJobsOutput {
    pub job_list: Option<Vec<GlacierJobDescription>>,
    /// Set when more jobs remain
    pub marker: Option<String>,
}

/// Output of `ListTagsForVault`
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListTagsForVaultOutput {
    pub tags: Option<HashMap<String, String>>,
}

/// Output of `ListVaults`
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListVaultsOutput {
    pub vault_list: Option<Vec<VaultDescription>>,
    /// Set when more vaults remain
    pub marker: Option<String>,
}
