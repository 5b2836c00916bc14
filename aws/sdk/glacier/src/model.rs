/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Structures shared by Glacier inputs and outputs.

use serde::{Deserialize, Serialize};

/// A vault as returned by `DescribeVault` and `ListVaults`
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VaultDescription {
    #[serde(rename = "VaultARN", skip_serializing_if = "Option::is_none")]
    pub vault_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vault_name: Option<String>,
    /// ISO 8601 date the vault was created
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_inventory_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_archives: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_in_bytes: Option<i64>,
}

/// A job as returned by `DescribeJob` and `ListJobs`
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GlacierJobDescription {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_description: Option<String>,
    /// `ArchiveRetrieval`, `InventoryRetrieval` or `Select`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archive_id: Option<String>,
    #[serde(rename = "VaultARN", skip_serializing_if = "Option::is_none")]
    pub vault_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    /// `InProgress`, `Succeeded` or `Failed`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archive_size_in_bytes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_size_in_bytes: Option<i64>,
    #[serde(rename = "SNSTopic", skip_serializing_if = "Option::is_none")]
    pub sns_topic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_date: Option<String>,
    #[serde(rename = "SHA256TreeHash", skip_serializing_if = "Option::is_none")]
    pub sha256_tree_hash: Option<String>,
    #[serde(rename = "ArchiveSHA256TreeHash", skip_serializing_if = "Option::is_none")]
    pub archive_sha256_tree_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retrieval_byte_range: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<String>,
}

/// Access policy attached to a vault
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VaultAccessPolicy {
    /// The policy document, as a JSON string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy: Option<String>,
}

pub mod vault_access_policy {
    use crate::model::VaultAccessPolicy;

    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        policy: Option<String>,
    }

    impl Builder {
        pub fn policy(mut self, input: impl Into<String>) -> Self {
            self.policy = Some(input.into());
            self
        }

        pub fn set_policy(mut self, input: Option<String>) -> Self {
            self.policy = input;
            self
        }

        pub fn build(self) -> VaultAccessPolicy {
            VaultAccessPolicy {
                policy: self.policy,
            }
        }
    }
}

impl VaultAccessPolicy {
    pub fn builder() -> vault_access_policy::Builder {
        vault_access_policy::Builder::default()
    }
}

/// Lock policy installed by `InitiateVaultLock`
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VaultLockPolicy {
    /// The policy document, as a JSON string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy: Option<String>,
}

pub mod vault_lock_policy {
    use crate::model::VaultLockPolicy;

    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        policy: Option<String>,
    }

    impl Builder {
        pub fn policy(mut self, input: impl Into<String>) -> Self {
            self.policy = Some(input.into());
            self
        }

        pub fn set_policy(mut self, input: Option<String>) -> Self {
            self.policy = input;
            self
        }

        pub fn build(self) -> VaultLockPolicy {
            VaultLockPolicy {
                policy: self.policy,
            }
        }
    }
}

impl VaultLockPolicy {
    pub fn builder() -> vault_lock_policy::Builder {
        vault_lock_policy::Builder::default()
    }
}

/// Where and when a vault publishes job notifications
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VaultNotificationConfig {
    #[serde(rename = "SNSTopic", skip_serializing_if = "Option::is_none")]
    pub sns_topic: Option<String>,
    /// `ArchiveRetrievalCompleted` and/or `InventoryRetrievalCompleted`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<String>>,
}

pub mod vault_notification_config {
    use crate::model::VaultNotificationConfig;

    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        sns_topic: Option<String>,
        events: Option<Vec<String>>,
    }

    impl Builder {
        pub fn sns_topic(mut self, input: impl Into<String>) -> Self {
            self.sns_topic = Some(input.into());
            self
        }

        pub fn set_sns_topic(mut self, input: Option<String>) -> Self {
            self.sns_topic = input;
            self
        }

        /// Append an event to the list of events that trigger a notification
        pub fn events(mut self, input: impl Into<String>) -> Self {
            self.events
                .get_or_insert_with(Vec::new)
                .push(input.into());
            self
        }

        pub fn set_events(mut self, input: Option<Vec<String>>) -> Self {
            self.events = input;
            self
        }

        pub fn build(self) -> VaultNotificationConfig {
            VaultNotificationConfig {
                sns_topic: self.sns_topic,
                events: self.events,
            }
        }
    }
}

impl VaultNotificationConfig {
    pub fn builder() -> vault_notification_config::Builder {
        vault_notification_config::Builder::default()
    }
}

/// Data retrieval policy of an account in a region
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DataRetrievalPolicy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<DataRetrievalRule>>,
}

impl DataRetrievalPolicy {
    pub fn builder() -> data_retrieval_policy::Builder {
        data_retrieval_policy::Builder::default()
    }
}

pub mod data_retrieval_policy {
    use crate::model::{DataRetrievalPolicy, DataRetrievalRule};

    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        rules: Option<Vec<DataRetrievalRule>>,
    }

    impl Builder {
        pub fn rules(mut self, input: DataRetrievalRule) -> Self {
            self.rules.get_or_insert_with(Vec::new).push(input);
            self
        }

        pub fn set_rules(mut self, input: Option<Vec<DataRetrievalRule>>) -> Self {
            self.rules = input;
            self
        }

        pub fn build(self) -> DataRetrievalPolicy {
            DataRetrievalPolicy { rules: self.rules }
        }
    }
}

/// A single data retrieval rule
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DataRetrievalRule {
    /// `BytesPerHour`, `FreeTier` or `None`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy: Option<String>,
    /// Only valid with the `BytesPerHour` strategy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes_per_hour: Option<i64>,
}

impl DataRetrievalRule {
    pub fn builder() -> data_retrieval_rule::Builder {
        data_retrieval_rule::Builder::default()
    }
}

pub mod data_retrieval_rule {
    use crate::model::DataRetrievalRule;

    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        strategy: Option<String>,
        bytes_per_hour: Option<i64>,
    }

    impl Builder {
        pub fn strategy(mut self, input: impl Into<String>) -> Self {
            self.strategy = Some(input.into());
            self
        }

        pub fn set_strategy(mut self, input: Option<String>) -> Self {
            self.strategy = input;
            self
        }

        pub fn bytes_per_hour(mut self, input: i64) -> Self {
            self.bytes_per_hour = Some(input);
            self
        }

        pub fn set_bytes_per_hour(mut self, input: Option<i64>) -> Self {
            self.bytes_per_hour = input;
            self
        }

        pub fn build(self) -> DataRetrievalRule {
            DataRetrievalRule {
                strategy: self.strategy,
                bytes_per_hour: self.bytes_per_hour,
            }
        }
    }
}

/// Options for an inventory retrieval job
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InventoryRetrievalJobInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
}

/// Describes the job started by `InitiateJob`
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct JobParameters {
    /// `CSV` or `JSON`, for inventory retrieval jobs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// `archive-retrieval`, `inventory-retrieval` or `select`
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archive_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "SNSTopic", skip_serializing_if = "Option::is_none")]
    pub sns_topic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retrieval_byte_range: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_retrieval_parameters: Option<InventoryRetrievalJobInput>,
}

impl JobParameters {
    pub fn builder() -> job_parameters::Builder {
        job_parameters::Builder::default()
    }
}

pub mod job_parameters {
    use crate::model::{InventoryRetrievalJobInput, JobParameters};

    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        format: Option<String>,
        r#type: Option<String>,
        archive_id: Option<String>,
        description: Option<String>,
        sns_topic: Option<String>,
        retrieval_byte_range: Option<String>,
        tier: Option<String>,
        inventory_retrieval_parameters: Option<InventoryRetrievalJobInput>,
    }

    impl Builder {
        pub fn format(mut self, input: impl Into<String>) -> Self {
            self.format = Some(input.into());
            self
        }

        pub fn r#type(mut self, input: impl Into<String>) -> Self {
            self.r#type = Some(input.into());
            self
        }

        pub fn set_type(mut self, input: Option<String>) -> Self {
            self.r#type = input;
            self
        }

        pub fn archive_id(mut self, input: impl Into<String>) -> Self {
            self.archive_id = Some(input.into());
            self
        }

        pub fn description(mut self, input: impl Into<String>) -> Self {
            self.description = Some(input.into());
            self
        }

        pub fn sns_topic(mut self, input: impl Into<String>) -> Self {
            self.sns_topic = Some(input.into());
            self
        }

        pub fn retrieval_byte_range(mut self, input: impl Into<String>) -> Self {
            self.retrieval_byte_range = Some(input.into());
            self
        }

        pub fn tier(mut self, input: impl Into<String>) -> Self {
            self.tier = Some(input.into());
            self
        }

        pub fn inventory_retrieval_parameters(mut self, input: InventoryRetrievalJobInput) -> Self {
            self.inventory_retrieval_parameters = Some(input);
            self
        }

        pub fn build(self) -> JobParameters {
            JobParameters {
                format: self.format,
                r#type: self.r#type,
                archive_id: self.archive_id,
                description: self.description,
                sns_topic: self.sns_topic,
                retrieval_byte_range: self.retrieval_byte_range,
                tier: self.tier,
                inventory_retrieval_parameters: self.inventory_retrieval_parameters,
            }
        }
    }
}

#[cfg(test)]
mod test {
    use crate::model::{DataRetrievalPolicy, DataRetrievalRule, JobParameters, VaultDescription};

    #[test]
    fn unset_members_are_not_serialized() {
        let params = JobParameters::builder()
            .r#type("inventory-retrieval")
            .build();
        assert_eq!(
            serde_json::to_string(&params).unwrap(),
            r#"{"Type":"inventory-retrieval"}"#
        );
    }

    #[test]
    fn explicitly_empty_collections_are_serialized() {
        let policy = DataRetrievalPolicy::builder().set_rules(Some(vec![])).build();
        assert_eq!(serde_json::to_string(&policy).unwrap(), r#"{"Rules":[]}"#);
        assert_eq!(
            serde_json::to_string(&DataRetrievalPolicy::builder().build()).unwrap(),
            "{}"
        );
        let policy = DataRetrievalPolicy::builder()
            .rules(
                DataRetrievalRule::builder()
                    .strategy("BytesPerHour")
                    .bytes_per_hour(10)
                    .build(),
            )
            .build();
        assert_eq!(
            serde_json::to_string(&policy).unwrap(),
            r#"{"Rules":[{"Strategy":"BytesPerHour","BytesPerHour":10}]}"#
        );
    }

    #[test]
    fn vault_wire_names() {
        let vault: VaultDescription = serde_json::from_str(
            r#"{"VaultARN":"arn:aws:glacier:us-east-1:1:vaults/x","VaultName":"x","NumberOfArchives":0,"Unknown":true}"#,
        )
        .unwrap();
        assert_eq!(
            vault.vault_arn.as_deref(),
            Some("arn:aws:glacier:us-east-1:1:vaults/x")
        );
        assert_eq!(vault.number_of_archives, Some(0));
        assert_eq!(vault.size_in_bytes, None);
    }
}
