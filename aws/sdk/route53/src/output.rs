/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Operation outputs.

use crate::model::{HostedZoneLimit, ResourceTagSet};

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GetHostedZoneLimitOutput {
    pub limit: Option<HostedZoneLimit>,
    /// How much of the limit is in use
    pub count: Option<i64>,
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListTagsForResourceOutput {
    pub resource_tag_set: Option<ResourceTagSet>,
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChangeTagsForResourceOutput {}
