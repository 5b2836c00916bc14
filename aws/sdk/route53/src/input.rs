/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Operation inputs.

use crate::model::{HostedZoneLimitType, Tag, TagResourceType};
use smithy_http::body::SdkBody;
use smithy_http::operation::BuildError;
use smithy_http::shape::HttpInput;
use smithy_xml::encode::XmlWriter;
use std::borrow::Cow;

pub(crate) const XMLNS: &str = "https://route53.amazonaws.com/doc/2013-04-01/";

/// A builder that produces an operation input
pub trait BuildInput: Default {
    type Input;

    fn build(self) -> Self::Input;
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GetHostedZoneLimitInput {
    pub r#type: Option<HostedZoneLimitType>,
    /// Sent as the `Id` path label
    pub hosted_zone_id: Option<String>,
}

impl GetHostedZoneLimitInput {
    pub fn builder() -> get_hosted_zone_limit_input::Builder {
        get_hosted_zone_limit_input::Builder::default()
    }
}

pub mod get_hosted_zone_limit_input {
    use crate::input::{BuildInput, GetHostedZoneLimitInput};
    use crate::model::HostedZoneLimitType;

    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        r#type: Option<HostedZoneLimitType>,
        hosted_zone_id: Option<String>,
    }

    impl Builder {
        pub fn r#type(mut self, input: HostedZoneLimitType) -> Self {
            self.r#type = Some(input);
            self
        }

        pub fn set_type(mut self, input: Option<HostedZoneLimitType>) -> Self {
            self.r#type = input;
            self
        }

        pub fn hosted_zone_id(mut self, input: impl Into<String>) -> Self {
            self.hosted_zone_id = Some(input.into());
            self
        }

        pub fn set_hosted_zone_id(mut self, input: Option<String>) -> Self {
            self.hosted_zone_id = input;
            self
        }

        pub fn build(self) -> GetHostedZoneLimitInput {
            GetHostedZoneLimitInput {
                r#type: self.r#type,
                hosted_zone_id: self.hosted_zone_id,
            }
        }
    }

    impl BuildInput for Builder {
        type Input = GetHostedZoneLimitInput;

        fn build(self) -> GetHostedZoneLimitInput {
            Builder::build(self)
        }
    }
}

impl HttpInput for GetHostedZoneLimitInput {
    fn label(&self, name: &str) -> Option<Cow<'_, str>> {
        match name {
            "Type" => self.r#type.as_ref().map(|ty| Cow::Borrowed(ty.as_str())),
            "Id" => self.hosted_zone_id.as_deref().map(Cow::Borrowed),
            _ => None,
        }
    }

    fn is_set(&self, member: &str) -> bool {
        match member {
            "Type" => self.r#type.is_some(),
            "HostedZoneId" => self.hosted_zone_id.is_some(),
            _ => false,
        }
    }
}

/// Tags of a resource are addressed by resource type and id
macro_rules! tagged_resource {
    ($input:ident) => {
        impl $input {
            fn resource_label(&self, name: &str) -> Option<Cow<'_, str>> {
                match name {
                    "ResourceType" => self
                        .resource_type
                        .as_ref()
                        .map(|ty| Cow::Borrowed(ty.as_str())),
                    "ResourceId" => self.resource_id.as_deref().map(Cow::Borrowed),
                    _ => None,
                }
            }

            fn resource_is_set(&self, member: &str) -> bool {
                match member {
                    "ResourceType" => self.resource_type.is_some(),
                    "ResourceId" => self.resource_id.is_some(),
                    _ => false,
                }
            }
        }
    };
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListTagsForResourceInput {
    pub resource_type: Option<TagResourceType>,
    pub resource_id: Option<String>,
}

tagged_resource!(ListTagsForResourceInput);

impl ListTagsForResourceInput {
    pub fn builder() -> list_tags_for_resource_input::Builder {
        list_tags_for_resource_input::Builder::default()
    }
}

pub mod list_tags_for_resource_input {
    use crate::input::{BuildInput, ListTagsForResourceInput};
    use crate::model::TagResourceType;

    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        resource_type: Option<TagResourceType>,
        resource_id: Option<String>,
    }

    impl Builder {
        pub fn resource_type(mut self, input: TagResourceType) -> Self {
            self.resource_type = Some(input);
            self
        }

        pub fn set_resource_type(mut self, input: Option<TagResourceType>) -> Self {
            self.resource_type = input;
            self
        }

        pub fn resource_id(mut self, input: impl Into<String>) -> Self {
            self.resource_id = Some(input.into());
            self
        }

        pub fn set_resource_id(mut self, input: Option<String>) -> Self {
            self.resource_id = input;
            self
        }

        pub fn build(self) -> ListTagsForResourceInput {
            ListTagsForResourceInput {
                resource_type: self.resource_type,
                resource_id: self.resource_id,
            }
        }
    }

    impl BuildInput for Builder {
        type Input = ListTagsForResourceInput;

        fn build(self) -> ListTagsForResourceInput {
            Builder::build(self)
        }
    }
}

impl HttpInput for ListTagsForResourceInput {
    fn label(&self, name: &str) -> Option<Cow<'_, str>> {
        self.resource_label(name)
    }

    fn is_set(&self, member: &str) -> bool {
        self.resource_is_set(member)
    }
}

/// Add, replace or remove tags of a health check or hosted zone
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChangeTagsForResourceInput {
    pub resource_type: Option<TagResourceType>,
    pub resource_id: Option<String>,
    /// Tags to add. A tag whose key already exists replaces the current value.
    pub add_tags: Option<Vec<Tag>>,
    pub remove_tag_keys: Option<Vec<String>>,
}

tagged_resource!(ChangeTagsForResourceInput);

impl ChangeTagsForResourceInput {
    pub fn builder() -> change_tags_for_resource_input::Builder {
        change_tags_for_resource_input::Builder::default()
    }

    /// The `ChangeTagsForResourceRequest` document
    pub fn to_xml(&self) -> String {
        let mut out = String::new();
        let mut doc = XmlWriter::new(&mut out);
        let mut root = doc
            .start_el("ChangeTagsForResourceRequest")
            .write_ns(XMLNS, None)
            .finish();
        if let Some(tags) = &self.add_tags {
            let mut list = root.start_el("AddTags").finish();
            for tag in tags {
                tag.write_xml(&mut list, "Tag");
            }
            list.finish();
        }
        if let Some(keys) = &self.remove_tag_keys {
            let mut list = root.start_el("RemoveTagKeys").finish();
            for key in keys {
                list.text_el("Key", key);
            }
            list.finish();
        }
        root.finish();
        out
    }
}

pub mod change_tags_for_resource_input {
    use crate::input::{BuildInput, ChangeTagsForResourceInput};
    use crate::model::{Tag, TagResourceType};

    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        resource_type: Option<TagResourceType>,
        resource_id: Option<String>,
        add_tags: Option<Vec<Tag>>,
        remove_tag_keys: Option<Vec<String>>,
    }

    impl Builder {
        pub fn resource_type(mut self, input: TagResourceType) -> Self {
            self.resource_type = Some(input);
            self
        }

        pub fn set_resource_type(mut self, input: Option<TagResourceType>) -> Self {
            self.resource_type = input;
            self
        }

        pub fn resource_id(mut self, input: impl Into<String>) -> Self {
            self.resource_id = Some(input.into());
            self
        }

        pub fn set_resource_id(mut self, input: Option<String>) -> Self {
            self.resource_id = input;
            self
        }

        pub fn add_tags(mut self, input: Tag) -> Self {
            self.add_tags.get_or_insert_with(Vec::new).push(input);
            self
        }

        pub fn set_add_tags(mut self, input: Option<Vec<Tag>>) -> Self {
            self.add_tags = input;
            self
        }

        pub fn remove_tag_keys(mut self, input: impl Into<String>) -> Self {
            self.remove_tag_keys
                .get_or_insert_with(Vec::new)
                .push(input.into());
            self
        }

        pub fn set_remove_tag_keys(mut self, input: Option<Vec<String>>) -> Self {
            self.remove_tag_keys = input;
            self
        }

        pub fn build(self) -> ChangeTagsForResourceInput {
            ChangeTagsForResourceInput {
                resource_type: self.resource_type,
                resource_id: self.resource_id,
                add_tags: self.add_tags,
                remove_tag_keys: self.remove_tag_keys,
            }
        }
    }

    impl BuildInput for Builder {
        type Input = ChangeTagsForResourceInput;

        fn build(self) -> ChangeTagsForResourceInput {
            Builder::build(self)
        }
    }
}

impl HttpInput for ChangeTagsForResourceInput {
    fn label(&self, name: &str) -> Option<Cow<'_, str>> {
        self.resource_label(name)
    }

    fn is_set(&self, member: &str) -> bool {
        match member {
            "AddTags" => self.add_tags.is_some(),
            "RemoveTagKeys" => self.remove_tag_keys.is_some(),
            other => self.resource_is_set(other),
        }
    }

    fn payload(&self) -> Result<SdkBody, BuildError> {
        Ok(SdkBody::from(self.to_xml()))
    }
}

#[cfg(test)]
mod test {
    use crate::input::{ChangeTagsForResourceInput, GetHostedZoneLimitInput};
    use crate::model::{HostedZoneLimitType, Tag, TagResourceType};
    use smithy_http::shape::HttpInput;

    #[test]
    fn labels_follow_the_uri_template() {
        let input = GetHostedZoneLimitInput::builder()
            .r#type(HostedZoneLimitType::MaxRrsetsByZone)
            .hosted_zone_id("Z1D633PJN98FT9")
            .build();
        assert_eq!(input.label("Id").as_deref(), Some("Z1D633PJN98FT9"));
        assert_eq!(input.label("Type").as_deref(), Some("MAX_RRSETS_BY_ZONE"));
        assert!(input.is_set("HostedZoneId"));
        assert!(!GetHostedZoneLimitInput::default().is_set("Type"));
    }

    #[test]
    fn change_request_document() {
        let input = ChangeTagsForResourceInput::builder()
            .resource_type(TagResourceType::Hostedzone)
            .resource_id("Z1")
            .add_tags(Tag::builder().key("env").value("prod").build())
            .remove_tag_keys("old")
            .build();
        assert_eq!(
            input.to_xml(),
            "<ChangeTagsForResourceRequest xmlns=\"https://route53.amazonaws.com/doc/2013-04-01/\">\
             <AddTags><Tag><Key>env</Key><Value>prod</Value></Tag></AddTags>\
             <RemoveTagKeys><Key>old</Key></RemoveTagKeys>\
             </ChangeTagsForResourceRequest>"
        );
    }

    #[test]
    fn unset_lists_are_omitted() {
        let input = ChangeTagsForResourceInput::builder()
            .set_remove_tag_keys(Some(vec![]))
            .build();
        assert!(!input.is_set("AddTags"));
        assert_eq!(
            input.to_xml(),
            "<ChangeTagsForResourceRequest xmlns=\"https://route53.amazonaws.com/doc/2013-04-01/\">\
             <RemoveTagKeys></RemoveTagKeys>\
             </ChangeTagsForResourceRequest>"
        );
    }
}
