/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Operation inputs.
//!
//! Each input is sent as the JSON body of its request. Only members that were set appear in the
//! body, so an input with nothing set is sent as `{}`.

use crate::model::{AssessmentTargetFilter, AssessmentTemplateFilter, Attribute, FindingFilter};
use serde::Serialize;
use smithy_http::body::SdkBody;
use smithy_http::operation::BuildError;
use smithy_http::shape::HttpInput;
use std::borrow::Cow;

/// A builder that produces an operation input
pub trait BuildInput: Default {
    type Input;

    fn build(self) -> Self::Input;
}

fn json_body<T: Serialize + ?Sized>(body: &T) -> Result<SdkBody, BuildError> {
    serde_json::to_vec(body)
        .map(SdkBody::from)
        .map_err(BuildError::serialization)
}

/// Defines an input, its builder and its JSON binding
///
/// `values` members are replaced by their setter; `lists` members are appended to.
macro_rules! json_input {
    (
        $(#[$doc:meta])*
        $input:ident, $module:ident {
            values { $($vfield:ident / $vset:ident ($vmember:literal): $vty:ty),* $(,)? }
            lists { $($lfield:ident / $lset:ident ($lmember:literal): $lty:ty),* $(,)? }
        }
    ) => {
        $(#[$doc])*
        #[non_exhaustive]
        #[derive(Clone, Debug, Default, PartialEq, Serialize)]
        pub struct $input {
            $(
                #[serde(rename = $vmember, skip_serializing_if = "Option::is_none")]
                pub $vfield: Option<$vty>,
            )*
            $(
                #[serde(rename = $lmember, skip_serializing_if = "Option::is_none")]
                pub $lfield: Option<Vec<$lty>>,
            )*
        }

        impl $input {
            pub fn builder() -> $module::Builder {
                $module::Builder::default()
            }
        }

        pub mod $module {
            #[allow(unused_imports)]
            use super::*;

            #[non_exhaustive]
            #[derive(Clone, Debug, Default, PartialEq)]
            pub struct Builder {
                $($vfield: Option<$vty>,)*
                $($lfield: Option<Vec<$lty>>,)*
            }

            impl Builder {
                $(
                    pub fn $vfield(mut self, input: impl Into<$vty>) -> Self {
                        self.$vfield = Some(input.into());
                        self
                    }

                    pub fn $vset(mut self, input: Option<$vty>) -> Self {
                        self.$vfield = input;
                        self
                    }
                )*
                $(
                    pub fn $lfield(mut self, input: impl Into<$lty>) -> Self {
                        self.$lfield.get_or_insert_with(Vec::new).push(input.into());
                        self
                    }

                    pub fn $lset(mut self, input: Option<Vec<$lty>>) -> Self {
                        self.$lfield = input;
                        self
                    }
                )*

                pub fn build(self) -> super::$input {
                    super::$input {
                        $($vfield: self.$vfield,)*
                        $($lfield: self.$lfield,)*
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
            fn label(&self, _name: &str) -> Option<Cow<'_, str>> {
                None
            }

            fn is_set(&self, member: &str) -> bool {
                match member {
                    $($vmember => self.$vfield.is_some(),)*
                    $($lmember => self.$lfield.is_some(),)*
                    _ => false,
                }
            }

            fn payload(&self) -> Result<SdkBody, BuildError> {
                json_body(self)
            }
        }
    };
}

json_input!(
    /// Input of `AddAttributesToFindings`
    AddAttributesToFindingsInput, add_attributes_to_findings_input {
        values {}
        lists {
            finding_arns / set_finding_arns ("findingArns"): String,
            attributes / set_attributes ("attributes"): Attribute,
        }
    }
);

json_input!(
    /// Input of `CreateAssessmentTarget`
    ///
    /// Without a resource group, the target covers every EC2 instance of the account in the
    /// current region.
    CreateAssessmentTargetInput, create_assessment_target_input {
        values {
            assessment_target_name / set_assessment_target_name ("assessmentTargetName"): String,
            resource_group_arn / set_resource_group_arn ("resourceGroupArn"): String,
        }
        lists {}
    }
);

json_input!(
    /// Input of `DeleteAssessmentTarget`
    DeleteAssessmentTargetInput, delete_assessment_target_input {
        values {
            assessment_target_arn / set_assessment_target_arn ("assessmentTargetArn"): String,
        }
        lists {}
    }
);

json_input!(
    /// Input of `DescribeAssessmentTemplates`
    DescribeAssessmentTemplatesInput, describe_assessment_templates_input {
        values {}
        lists {
            assessment_template_arns / set_assessment_template_arns
                ("assessmentTemplateArns"): String,
        }
    }
);

json_input!(
    /// Input of `DescribeCrossAccountAccessRole`
    DescribeCrossAccountAccessRoleInput, describe_cross_account_access_role_input {
        values {}
        lists {}
    }
);

json_input!(
    /// Input of `ListAssessmentTargets`
    ListAssessmentTargetsInput, list_assessment_targets_input {
        values {
            filter / set_filter ("filter"): AssessmentTargetFilter,
            next_token / set_next_token ("nextToken"): String,
            max_results / set_max_results ("maxResults"): i32,
        }
        lists {}
    }
);

json_input!(
    /// Input of `ListAssessmentTemplates`
    ListAssessmentTemplatesInput, list_assessment_templates_input {
        values {
            filter / set_filter ("filter"): AssessmentTemplateFilter,
            next_token / set_next_token ("nextToken"): String,
            max_results / set_max_results ("maxResults"): i32,
        }
        lists {
            assessment_target_arns / set_assessment_target_arns ("assessmentTargetArns"): String,
        }
    }
);

json_input!(
    /// Input of `ListFindings`
    ListFindingsInput, list_findings_input {
        values {
            filter / set_filter ("filter"): FindingFilter,
            next_token / set_next_token ("nextToken"): String,
            max_results / set_max_results ("maxResults"): i32,
        }
        lists {
            assessment_run_arns / set_assessment_run_arns ("assessmentRunArns"): String,
        }
    }
);

json_input!(
    /// Input of `ListTagsForResource`
    ListTagsForResourceInput, list_tags_for_resource_input {
        values {
            resource_arn / set_resource_arn ("resourceArn"): String,
        }
        lists {}
    }
);

json_input!(
    /// Input of `StartAssessmentRun`
    StartAssessmentRunInput, start_assessment_run_input {
        values {
            assessment_template_arn / set_assessment_template_arn ("assessmentTemplateArn"): String,
            assessment_run_name / set_assessment_run_name ("assessmentRunName"): String,
        }
        lists {}
    }
);
