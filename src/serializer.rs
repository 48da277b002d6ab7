//! Page object serialization.
//!
//! A [`PageSerializer`] turns a [`PageObject`] into the JSON sent to the client.
//! When the request is a partial reload the engine passes the set of prop
//! names to keep; every other page field is always serialized in full.

use crate::error::Result;
use crate::types::{PageObject, Props};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeSet;

/// Serializes page objects.
pub trait PageSerializer: Send + Sync {
    /// Serialize `page`, keeping only the props named in `keep` when given.
    ///
    /// # Errors
    ///
    /// Any error is propagated unchanged to the caller of `render`.
    fn serialize(&self, page: &PageObject, keep: Option<&BTreeSet<String>>) -> Result<String>;
}

/// [`PageSerializer`] backed by `serde_json`.
///
/// Field order is `component`, `props`, `url`, `version`, `encryptHistory`,
/// `clearHistory`; props keep their insertion order.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonPageSerializer;

impl PageSerializer for JsonPageSerializer {
    fn serialize(&self, page: &PageObject, keep: Option<&BTreeSet<String>>) -> Result<String> {
        let json = serde_json::to_string(&PageJson {
            component: page.component(),
            props: FilteredProps {
                props: page.props(),
                keep,
            },
            url: page.url(),
            version: page.version(),
            encrypt_history: page.encrypt_history(),
            clear_history: page.clear_history(),
        })?;
        Ok(json)
    }
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct PageJson<'a> {
    component: &'a str,
    props: FilteredProps<'a>,
    url: &'a str,
    version: &'a str,
    encrypt_history: bool,
    clear_history: bool,
}

struct FilteredProps<'a> {
    props: &'a Props,
    keep: Option<&'a BTreeSet<String>>,
}

impl Serialize for FilteredProps<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let entries: Vec<_> = self
            .props
            .iter()
            .filter(|(key, _)| self.keep.map_or(true, |keep| keep.contains(*key)))
            .collect();

        let mut map = serializer.serialize_map(Some(entries.len()))?;
        for (key, value) in entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
