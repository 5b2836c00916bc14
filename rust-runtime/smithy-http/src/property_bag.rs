/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! A typemap used to carry per-request configuration through the middleware stack.
//!
//! Every value is keyed by its type, so each type may appear at most once. Newtypes are the
//! usual way to store several values of the same underlying type.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::fmt::Debug;

struct NamedType {
    name: &'static str,
    value: Box<dyn Any + Send + Sync>,
}

impl NamedType {
    fn as_mut<T: 'static>(&mut self) -> Option<&mut T> {
        self.value.downcast_mut()
    }

    fn into_value<T: 'static>(self) -> Option<T> {
        self.value.downcast().map(|t| *t).ok()
    }
}

/// A type-map of configuration values, see the module docs.
#[derive(Default)]
pub struct PropertyBag {
    map: HashMap<TypeId, NamedType>,
}

impl PropertyBag {
    pub fn new() -> PropertyBag {
        PropertyBag {
            map: HashMap::new(),
        }
    }

    /// Insert a value. If a value of this type already existed, it is returned.
    ///
    /// ```
    /// # use smithy_http::property_bag::PropertyBag;
    /// let mut props = PropertyBag::new();
    /// assert!(props.insert(5i32).is_none());
    /// assert_eq!(props.insert(9i32), Some(5i32));
    /// ```
    pub fn insert<T: Send + Sync + 'static>(&mut self, val: T) -> Option<T> {
        self.map
            .insert(
                TypeId::of::<T>(),
                NamedType {
                    name: std::any::type_name::<T>(),
                    value: Box::new(val),
                },
            )
            .and_then(|val| val.into_value())
    }

    pub fn get<T: Send + Sync + 'static>(&self) -> Option<&T> {
        self.map
            .get(&TypeId::of::<T>())
            .and_then(|t| t.value.downcast_ref())
    }

    pub fn get_mut<T: Send + Sync + 'static>(&mut self) -> Option<&mut T> {
        self.map
            .get_mut(&TypeId::of::<T>())
            .and_then(|t| t.as_mut())
    }

    pub fn contains<T: Send + Sync + 'static>(&self) -> bool {
        self.map.contains_key(&TypeId::of::<T>())
    }

    pub fn remove<T: Send + Sync + 'static>(&mut self) -> Option<T> {
        self.map
            .remove(&TypeId::of::<T>())
            .and_then(|t| t.into_value())
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl Debug for PropertyBag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.map.values().map(|t| t.name).collect();
        names.sort_unstable();
        f.debug_struct("PropertyBag").field("contents", &names).finish()
    }
}

#[cfg(test)]
mod test {
    use super::PropertyBag;

    #[derive(Debug, PartialEq)]
    struct SigningName(&'static str);

    #[test]
    fn values_are_keyed_by_type() {
        let mut props = PropertyBag::new();
        props.insert(SigningName("glacier"));
        props.insert("a str");
        assert_eq!(props.get::<SigningName>(), Some(&SigningName("glacier")));
        assert_eq!(props.get::<&'static str>(), Some(&"a str"));
        assert_eq!(props.len(), 2);

        props.get_mut::<SigningName>().unwrap().0 = "inspector";
        assert_eq!(props.remove::<SigningName>(), Some(SigningName("inspector")));
        assert!(!props.contains::<SigningName>());
        assert!(props.get::<u64>().is_none());
    }

    #[test]
    fn debug_lists_type_names() {
        let mut props = PropertyBag::new();
        props.insert(1u8);
        assert_eq!(format!("{:?}", props), "PropertyBag { contents: [\"u8\"] }");
    }
}
