// Copyright 2020 - developers of the `grammers` project.
// Copyright 2026 - developers of the `tdjson` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Tag to factory tables, one per [`Union`].
//!
//! [`Union`]: crate::Union
use crate::errors::{DecodeError, RegistryError};
use crate::TYPE_KEY;
use log::trace;
use serde_json::{Map, Value};
use std::collections::hash_map::{Entry, HashMap};
use std::fmt;

/// Builds one variant of a union out of the full JSON object, `"@type"`
/// included.
pub type Factory<U> = fn(&Map<String, Value>) -> Result<U, DecodeError>;

/// The closed set of variants of a union, keyed by their tag.
///
/// Registries are immutable once built, so they can be shared by any number
/// of threads decoding concurrently.
pub struct Registry<U> {
    name: &'static str,
    factories: HashMap<&'static str, Factory<U>>,
}

/// Collects the variants of a union before freezing them into a [`Registry`].
pub struct RegistryBuilder<U> {
    name: &'static str,
    factories: HashMap<&'static str, Factory<U>>,
}

impl<U> Registry<U> {
    /// Start building the registry for the union called `name`.
    pub fn builder(name: &'static str) -> RegistryBuilder<U> {
        RegistryBuilder {
            name,
            factories: HashMap::new(),
        }
    }

    /// The name of the union this registry belongs to.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether `tag` is a variant of this union.
    pub fn contains(&self, tag: &str) -> bool {
        self.factories.contains_key(tag)
    }

    /// Every registered tag, sorted.
    pub fn tags(&self) -> Vec<&'static str> {
        let mut tags = self.factories.keys().copied().collect::<Vec<_>>();
        tags.sort_unstable();
        tags
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Decode `raw` into whichever variant its `"@type"` names.
    ///
    /// `raw` must be an object; the `null` case is handled by [`crate::decode`].
    pub fn decode(&self, raw: &Value) -> Result<U, DecodeError> {
        let object = raw
            .as_object()
            .ok_or(DecodeError::MalformedUnion { union: self.name })?;

        let tag = object
            .get(TYPE_KEY)
            .and_then(Value::as_str)
            .ok_or(DecodeError::MalformedUnion { union: self.name })?;

        let factory = self
            .factories
            .get(tag)
            .ok_or_else(|| DecodeError::UnknownVariant {
                union: self.name,
                tag: tag.to_string(),
            })?;

        factory(object).map_err(|e| e.within_union(self.name))
    }
}

impl<U> fmt::Debug for Registry<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("name", &self.name)
            .field("tags", &self.tags())
            .finish()
    }
}

impl<U> RegistryBuilder<U> {
    /// Register `factory` under `tag`.
    ///
    /// # Panics
    ///
    /// Panics if `tag` was already registered. Registries are built once at
    /// startup from a static table, so a duplicate is a bug in that table.
    pub fn variant(mut self, tag: &'static str, factory: Factory<U>) -> Self {
        if let Err(err) = self.try_variant(tag, factory) {
            panic!("{err}");
        }
        self
    }

    /// Register `factory` under `tag`, failing if `tag` was already taken.
    pub fn try_variant(
        &mut self,
        tag: &'static str,
        factory: Factory<U>,
    ) -> Result<(), RegistryError> {
        match self.factories.entry(tag) {
            Entry::Occupied(_) => Err(RegistryError::DuplicateVariant {
                union: self.name,
                tag,
            }),
            Entry::Vacant(entry) => {
                entry.insert(factory);
                Ok(())
            }
        }
    }

    /// Register `factory` under `tag`, replacing any previous factory.
    ///
    /// Meant for test doubles which need to intercept a particular variant.
    pub fn override_variant(mut self, tag: &'static str, factory: Factory<U>) -> Self {
        if self.factories.insert(tag, factory).is_some() {
            trace!("overriding {} variant {}", self.name, tag);
        }
        self
    }

    pub fn build(self) -> Registry<U> {
        trace!(
            "built {} registry with {} variants",
            self.name,
            self.factories.len()
        );
        Registry {
            name: self.name,
            factories: self.factories,
        }
    }
}
