/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Shapes shared between Amazon Inspector operations.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use smithy_types::Instant;

/// Timestamps are sent as fractional epoch seconds
pub(crate) mod epoch_seconds {
    use serde::{Deserialize, Deserializer, Serializer};
    use smithy_types::Instant;

    pub fn serialize<S>(value: &Option<Instant>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(instant) => serializer.serialize_f64(instant.epoch_fractional_seconds()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Instant>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<f64>::deserialize(deserializer)?.map(Instant::from_f64))
    }
}

/// Closed set of string values that still accepts values added to the service later
macro_rules! string_enum {
    ($(#[$doc:meta])* $name:ident { $($variant:ident => $value:literal),* $(,)? }) => {
        $(#[$doc])*
        #[non_exhaustive]
        #[derive(Clone, Debug, Eq, Hash, PartialEq)]
        pub enum $name {
            $($variant,)*
            /// A value this client does not know about
            Unknown(String),
        }

        impl $name {
            pub fn as_str(&self) -> &str {
                match self {
                    $($name::$variant => $value,)*
                    $name::Unknown(value) => value.as_str(),
                }
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                match value {
                    $($value => $name::$variant,)*
                    other => $name::Unknown(other.to_owned()),
                }
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let value = String::deserialize(deserializer)?;
                Ok($name::from(value.as_str()))
            }
        }
    };
}

string_enum!(
    /// Severity of a finding
    Severity {
        Low => "Low",
        Medium => "Medium",
        High => "High",
        Informational => "Informational",
        Undefined => "Undefined",
    }
);

string_enum!(
    /// Why an item of a batch request failed
    FailedItemErrorCode {
        InvalidArn => "INVALID_ARN",
        DuplicateArn => "DUPLICATE_ARN",
        ItemDoesNotExist => "ITEM_DOES_NOT_EXIST",
        AccessDenied => "ACCESS_DENIED",
        LimitExceeded => "LIMIT_EXCEEDED",
        InternalError => "INTERNAL_ERROR",
    }
);

/// A key/value attribute attached to a finding
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attribute {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Attribute {
    pub fn builder() -> attribute::Builder {
        attribute::Builder::default()
    }
}

pub mod attribute {
    use super::Attribute;

    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        key: Option<String>,
        value: Option<String>,
    }

    impl Builder {
        pub fn key(mut self, input: impl Into<String>) -> Self {
            self.key = Some(input.into());
            self
        }

        pub fn value(mut self, input: impl Into<String>) -> Self {
            self.value = Some(input.into());
            self
        }

        pub fn build(self) -> Attribute {
            Attribute {
                key: self.key,
                value: self.value,
            }
        }
    }
}

/// A resource tag
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Outcome of one item of a batch request
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailedItemDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_code: Option<FailedItemErrorCode>,
    /// Whether the item may succeed if submitted again
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retryable: Option<bool>,
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentTemplate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assessment_target_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_in_seconds: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules_package_arns: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_attributes_for_findings: Option<Vec<Attribute>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_assessment_run_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assessment_run_count: Option<i32>,
    #[serde(
        default,
        with = "epoch_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<Instant>,
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentTargetFilter {
    /// Wildcard pattern matched against target names
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assessment_target_name_pattern: Option<String>,
}

impl AssessmentTargetFilter {
    pub fn builder() -> assessment_target_filter::Builder {
        assessment_target_filter::Builder::default()
    }
}

pub mod assessment_target_filter {
    use super::AssessmentTargetFilter;

    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        assessment_target_name_pattern: Option<String>,
    }

    impl Builder {
        pub fn assessment_target_name_pattern(mut self, input: impl Into<String>) -> Self {
            self.assessment_target_name_pattern = Some(input.into());
            self
        }

        pub fn build(self) -> AssessmentTargetFilter {
            AssessmentTargetFilter {
                assessment_target_name_pattern: self.assessment_target_name_pattern,
            }
        }
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DurationRange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_seconds: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_seconds: Option<i32>,
}

impl DurationRange {
    pub fn new(min_seconds: Option<i32>, max_seconds: Option<i32>) -> Self {
        DurationRange {
            min_seconds,
            max_seconds,
        }
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentTemplateFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_range: Option<DurationRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules_package_arns: Option<Vec<String>>,
}

impl AssessmentTemplateFilter {
    pub fn builder() -> assessment_template_filter::Builder {
        assessment_template_filter::Builder::default()
    }
}

pub mod assessment_template_filter {
    use super::{AssessmentTemplateFilter, DurationRange};

    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        name_pattern: Option<String>,
        duration_range: Option<DurationRange>,
        rules_package_arns: Option<Vec<String>>,
    }

    impl Builder {
        pub fn name_pattern(mut self, input: impl Into<String>) -> Self {
            self.name_pattern = Some(input.into());
            self
        }

        pub fn duration_range(mut self, input: DurationRange) -> Self {
            self.duration_range = Some(input);
            self
        }

        pub fn rules_package_arns(mut self, input: impl Into<String>) -> Self {
            self.rules_package_arns
                .get_or_insert_with(Vec::new)
                .push(input.into());
            self
        }

        pub fn build(self) -> AssessmentTemplateFilter {
            AssessmentTemplateFilter {
                name_pattern: self.name_pattern,
                duration_range: self.duration_range,
                rules_package_arns: self.rules_package_arns,
            }
        }
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimestampRange {
    #[serde(
        default,
        with = "epoch_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub begin_date: Option<Instant>,
    #[serde(
        default,
        with = "epoch_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_date: Option<Instant>,
}

impl TimestampRange {
    pub fn new(begin_date: Option<Instant>, end_date: Option<Instant>) -> Self {
        TimestampRange {
            begin_date,
            end_date,
        }
    }
}

/// Restricts the findings returned by `ListFindings`
///
/// Every set member must match; within a list, any value may match.
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindingFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_scaling_groups: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_names: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severities: Option<Vec<Severity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules_package_arns: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<Attribute>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_attributes: Option<Vec<Attribute>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_time_range: Option<TimestampRange>,
}

impl FindingFilter {
    pub fn builder() -> finding_filter::Builder {
        finding_filter::Builder::default()
    }
}

pub mod finding_filter {
    use super::{Attribute, FindingFilter, Severity, TimestampRange};

    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        agent_ids: Option<Vec<String>>,
        auto_scaling_groups: Option<Vec<String>>,
        rule_names: Option<Vec<String>>,
        severities: Option<Vec<Severity>>,
        rules_package_arns: Option<Vec<String>>,
        attributes: Option<Vec<Attribute>>,
        user_attributes: Option<Vec<Attribute>>,
        creation_time_range: Option<TimestampRange>,
    }

    impl Builder {
        pub fn agent_ids(mut self, input: impl Into<String>) -> Self {
            self.agent_ids
                .get_or_insert_with(Vec::new)
                .push(input.into());
            self
        }

        pub fn auto_scaling_groups(mut self, input: impl Into<String>) -> Self {
            self.auto_scaling_groups
                .get_or_insert_with(Vec::new)
                .push(input.into());
            self
        }

        pub fn rule_names(mut self, input: impl Into<String>) -> Self {
            self.rule_names
                .get_or_insert_with(Vec::new)
                .push(input.into());
            self
        }

        pub fn severities(mut self, input: Severity) -> Self {
            self.severities.get_or_insert_with(Vec::new).push(input);
            self
        }

        pub fn set_severities(mut self, input: Option<Vec<Severity>>) -> Self {
            self.severities = input;
            self
        }

        pub fn rules_package_arns(mut self, input: impl Into<String>) -> Self {
            self.rules_package_arns
                .get_or_insert_with(Vec::new)
                .push(input.into());
            self
        }

        pub fn attributes(mut self, input: Attribute) -> Self {
            self.attributes.get_or_insert_with(Vec::new).push(input);
            self
        }

        pub fn user_attributes(mut self, input: Attribute) -> Self {
            self.user_attributes.get_or_insert_with(Vec::new).push(input);
            self
        }

        pub fn creation_time_range(mut self, input: TimestampRange) -> Self {
            self.creation_time_range = Some(input);
            self
        }

        pub fn build(self) -> FindingFilter {
            FindingFilter {
                agent_ids: self.agent_ids,
                auto_scaling_groups: self.auto_scaling_groups,
                rule_names: self.rule_names,
                severities: self.severities,
                rules_package_arns: self.rules_package_arns,
                attributes: self.attributes,
                user_attributes: self.user_attributes,
                creation_time_range: self.creation_time_range,
            }
        }
    }
}
