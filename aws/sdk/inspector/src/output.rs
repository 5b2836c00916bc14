/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Operation outputs.

use crate::model::{epoch_seconds, AssessmentTemplate, FailedItemDetails, Tag};
use serde::Deserialize;
use smithy_types::Instant;
use std::collections::HashMap;

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddAttributesToFindingsOutput {
    /// Findings that could not be updated, keyed by ARN
    pub failed_items: Option<HashMap<String, FailedItemDetails>>,
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAssessmentTargetOutput {
    pub assessment_target_arn: Option<String>,
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct DeleteAssessmentTargetOutput {}

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeAssessmentTemplatesOutput {
    pub assessment_templates: Option<Vec<AssessmentTemplate>>,
    pub failed_items: Option<HashMap<String, FailedItemDetails>>,
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeCrossAccountAccessRoleOutput {
    /// The IAM role Inspector assumes to inspect the account
    pub role_arn: Option<String>,
    pub valid: Option<bool>,
    #[serde(default, with = "epoch_seconds")]
    pub registered_at: Option<Instant>,
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListAssessmentTargetsOutput {
    pub assessment_target_arns: Option<Vec<String>>,
    /// Set when more results are available
    pub next_token: Option<String>,
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListAssessmentTemplatesOutput {
    pub assessment_template_arns: Option<Vec<String>>,
    pub next_token: Option<String>,
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListFindingsOutput {
    pub finding_arns: Option<Vec<String>>,
    pub next_token: Option<String>,
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTagsForResourceOutput {
    pub tags: Option<Vec<Tag>>,
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartAssessmentRunOutput {
    pub assessment_run_arn: Option<String>,
}
