//! Key-value store backed by a JS `Storage`-like object

use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};

use crate::error::{Error, Result};
use crate::expand::KeyValueStore;

/// Wraps any object with `getItem(key)` / `setItem(key, value)`, e.g. `window.localStorage`
#[derive(Debug, Clone)]
pub struct JsStorage {
    target: JsValue,
}

impl JsStorage {
    pub fn new(target: JsValue) -> Self {
        Self { target }
    }

    fn method(&self, name: &str) -> Option<Function> {
        Reflect::get(&self.target, &JsValue::from_str(name))
            .ok()?
            .dyn_into::<Function>()
            .ok()
    }
}

impl KeyValueStore for JsStorage {
    fn get(&self, key: &str) -> Option<String> {
        let get_item = self.method("getItem")?;
        get_item
            .call1(&self.target, &JsValue::from_str(key))
            .ok()?
            .as_string()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let set_item = self
            .method("setItem")
            .ok_or_else(|| Error::Storage("storage object has no setItem".to_string()))?;
        set_item
            .call2(&self.target, &JsValue::from_str(key), &JsValue::from_str(value))
            .map(|_| ())
            .map_err(|err| Error::Storage(format!("{:?}", err)))
    }
}
