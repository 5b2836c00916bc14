/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Shapes shared between Route 53 operations, with their XML bindings.
//!
//! `write_xml` emits one child element per member that is set, in a fixed order. `from_xml` sets
//! a member exactly when its element is present, so a shape written and read back is unchanged.

use smithy_xml::decode::{Element, XmlDecodeError};
use smithy_xml::encode::ScopeWriter;

/// Closed set of string values that still accepts values added to the service later
macro_rules! string_enum {
    ($(#[$doc:meta])* $name:ident { $($variant:ident => $value:literal),* $(,)? }) => {
        $(#[$doc])*
        #[non_exhaustive]
        #[derive(Clone, Debug, Eq, Hash, PartialEq)]
        pub enum $name {
            $($variant,)*
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
                    other => $name::Unknown(other.to_string()),
                }
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }
    };
}

string_enum!(
    /// A limit that applies to a single hosted zone
    HostedZoneLimitType {
        MaxRrsetsByZone => "MAX_RRSETS_BY_ZONE",
        MaxVpcsAssociatedByZone => "MAX_VPCS_ASSOCIATED_BY_ZONE",
    }
);

string_enum!(
    /// Kind of resource that can be tagged
    TagResourceType {
        Healthcheck => "healthcheck",
        Hostedzone => "hostedzone",
    }
);

fn parse_i64(el: &Element) -> Result<i64, XmlDecodeError> {
    el.text().trim().parse().map_err(|_| {
        XmlDecodeError::custom(format!(
            "expected an integer in <{}>, found `{}`",
            el.name(),
            el.text()
        ))
    })
}

/// The value of a hosted zone limit
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HostedZoneLimit {
    pub r#type: Option<HostedZoneLimitType>,
    pub value: Option<i64>,
}

impl HostedZoneLimit {
    pub fn builder() -> hosted_zone_limit::Builder {
        hosted_zone_limit::Builder::default()
    }

    /// Write `<tag>` with every member that is set
    pub fn write_xml(&self, scope: &mut ScopeWriter<'_, '_>, tag: &str) {
        let mut el = scope.start_el(tag).finish();
        if let Some(ty) = &self.r#type {
            el.text_el("Type", ty.as_str());
        }
        if let Some(value) = self.value {
            el.text_el("Value", &value.to_string());
        }
        el.finish();
    }

    pub fn from_xml(el: &Element) -> Result<Self, XmlDecodeError> {
        Ok(HostedZoneLimit {
            r#type: el.child_text("Type").map(HostedZoneLimitType::from),
            value: el.child("Value").map(parse_i64).transpose()?,
        })
    }
}

pub mod hosted_zone_limit {
    use super::{HostedZoneLimit, HostedZoneLimitType};

    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        r#type: Option<HostedZoneLimitType>,
        value: Option<i64>,
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

        pub fn value(mut self, input: i64) -> Self {
            self.value = Some(input);
            self
        }

        pub fn set_value(mut self, input: Option<i64>) -> Self {
            self.value = input;
            self
        }

        pub fn build(self) -> HostedZoneLimit {
            HostedZoneLimit {
                r#type: self.r#type,
                value: self.value,
            }
        }
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tag {
    pub key: Option<String>,
    pub value: Option<String>,
}

impl Tag {
    pub fn builder() -> tag::Builder {
        tag::Builder::default()
    }

    pub fn write_xml(&self, scope: &mut ScopeWriter<'_, '_>, tag: &str) {
        let mut el = scope.start_el(tag).finish();
        if let Some(key) = &self.key {
            el.text_el("Key", key);
        }
        if let Some(value) = &self.value {
            el.text_el("Value", value);
        }
        el.finish();
    }

    pub fn from_xml(el: &Element) -> Result<Self, XmlDecodeError> {
        Ok(Tag {
            key: el.child_text("Key").map(str::to_string),
            value: el.child_text("Value").map(str::to_string),
        })
    }
}

pub mod tag {
    use super::Tag;

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

        pub fn set_key(mut self, input: Option<String>) -> Self {
            self.key = input;
            self
        }

        pub fn value(mut self, input: impl Into<String>) -> Self {
            self.value = Some(input.into());
            self
        }

        pub fn set_value(mut self, input: Option<String>) -> Self {
            self.value = input;
            self
        }

        pub fn build(self) -> Tag {
            Tag {
                key: self.key,
                value: self.value,
            }
        }
    }
}

/// The tags attached to one resource
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResourceTagSet {
    pub resource_type: Option<TagResourceType>,
    pub resource_id: Option<String>,
    pub tags: Option<Vec<Tag>>,
}

impl ResourceTagSet {
    pub fn builder() -> resource_tag_set::Builder {
        resource_tag_set::Builder::default()
    }

    pub fn write_xml(&self, scope: &mut ScopeWriter<'_, '_>, tag: &str) {
        let mut el = scope.start_el(tag).finish();
        if let Some(resource_type) = &self.resource_type {
            el.text_el("ResourceType", resource_type.as_str());
        }
        if let Some(resource_id) = &self.resource_id {
            el.text_el("ResourceId", resource_id);
        }
        if let Some(tags) = &self.tags {
            let mut list = el.start_el("Tags").finish();
            for tag in tags {
                tag.write_xml(&mut list, "Tag");
            }
            list.finish();
        }
        el.finish();
    }

    pub fn from_xml(el: &Element) -> Result<Self, XmlDecodeError> {
        Ok(ResourceTagSet {
            resource_type: el.child_text("ResourceType").map(TagResourceType::from),
            resource_id: el.child_text("ResourceId").map(str::to_string),
            tags: el
                .child("Tags")
                .map(|tags| {
                    tags.children("Tag")
                        .map(Tag::from_xml)
                        .collect::<Result<Vec<_>, _>>()
                })
                .transpose()?,
        })
    }
}

pub mod resource_tag_set {
    use super::{ResourceTagSet, Tag, TagResourceType};

    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        resource_type: Option<TagResourceType>,
        resource_id: Option<String>,
        tags: Option<Vec<Tag>>,
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

        pub fn tags(mut self, input: Tag) -> Self {
            self.tags.get_or_insert_with(Vec::new).push(input);
            self
        }

        pub fn set_tags(mut self, input: Option<Vec<Tag>>) -> Self {
            self.tags = input;
            self
        }

        pub fn build(self) -> ResourceTagSet {
            ResourceTagSet {
                resource_type: self.resource_type,
                resource_id: self.resource_id,
                tags: self.tags,
            }
        }
    }
}

#[cfg(test)]
mod test {
    use crate::model::{
        HostedZoneLimit, HostedZoneLimitType, ResourceTagSet, Tag, TagResourceType,
    };
    use smithy_xml::decode::Document;
    use smithy_xml::encode::XmlWriter;

    fn write(f: impl FnOnce(&mut smithy_xml::encode::ScopeWriter<'_, '_>)) -> String {
        let mut out = String::new();
        let mut doc = XmlWriter::new(&mut out);
        let mut root = doc.start_el("Root").finish();
        f(&mut root);
        root.finish();
        out
    }

    #[test]
    fn only_set_members_are_written() {
        let limit = HostedZoneLimit::builder().value(0).build();
        assert_eq!(
            write(|root| limit.write_xml(root, "Limit")),
            "<Root><Limit><Value>0</Value></Limit></Root>"
        );

        let set = ResourceTagSet::builder()
            .resource_id("Z1")
            .set_tags(Some(vec![]))
            .build();
        assert_eq!(
            write(|root| set.write_xml(root, "ResourceTagSet")),
            "<Root><ResourceTagSet><ResourceId>Z1</ResourceId><Tags></Tags></ResourceTagSet></Root>"
        );
    }

    #[test]
    fn round_trip() {
        let limit = HostedZoneLimit::builder()
            .r#type(HostedZoneLimitType::MaxRrsetsByZone)
            .value(10_000)
            .build();
        let set = ResourceTagSet::builder()
            .resource_type(TagResourceType::Hostedzone)
            .resource_id("Z1")
            .tags(Tag::builder().key("env").value("prod & <test>").build())
            .tags(Tag::builder().key("owner").build())
            .build();
        let empty = ResourceTagSet::builder().set_tags(Some(vec![])).build();
        let xml = write(|root| {
            limit.write_xml(root, "Limit");
            set.write_xml(root, "ResourceTagSet");
            empty.write_xml(root, "Empty");
        });

        let doc = Document::parse(xml.as_bytes()).expect("well formed");
        let root = doc.root();
        assert_eq!(
            HostedZoneLimit::from_xml(root.child("Limit").unwrap()).unwrap(),
            limit
        );
        assert_eq!(
            ResourceTagSet::from_xml(root.child("ResourceTagSet").unwrap()).unwrap(),
            set
        );
        assert_eq!(
            ResourceTagSet::from_xml(root.child("Empty").unwrap()).unwrap(),
            empty
        );
    }

    #[test]
    fn absent_elements_stay_unset() {
        let doc = Document::parse(b"<Limit><Type>SOMETHING_NEW</Type></Limit>").unwrap();
        let limit = HostedZoneLimit::from_xml(doc.root()).unwrap();
        assert_eq!(
            limit.r#type,
            Some(HostedZoneLimitType::Unknown("SOMETHING_NEW".to_string()))
        );
        assert_eq!(limit.value, None);
    }

    #[test]
    fn malformed_integer() {
        let doc = Document::parse(b"<Limit><Value>lots</Value></Limit>").unwrap();
        assert!(HostedZoneLimit::from_xml(doc.root()).is_err());
    }

    #[test]
    fn cleared_members_are_not_written() {
        let set = ResourceTagSet::builder()
            .resource_type(TagResourceType::Healthcheck)
            .set_resource_type(None)
            .set_resource_id(Some("hc-1".to_string()))
            .build();
        assert_eq!(set.resource_type, None);
        assert_eq!(
            write(|root| set.write_xml(root, "ResourceTagSet")),
            "<Root><ResourceTagSet><ResourceId>hc-1</ResourceId></ResourceTagSet></Root>"
        );
    }
}
