//! Deep merge for layered YAML settings.
//!
//! The project settings file and its local override are merged before
//! parsing into [`WaypointConfig`](super::WaypointConfig).
//!
//! # Merge Rules
//!
//! - Mappings are merged recursively
//! - Sequences are replaced entirely
//! - A null value in the overlay deletes the key from the base
//! - Scalars in the overlay replace the base
//! - An empty overlay document (null at the root) changes nothing

use serde_yaml::{Mapping, Value};

/// Deep merge `overlay` onto `base`, returning a new value.
pub fn deep_merge(base: &Value, overlay: &Value) -> Value {
    let (Value::Mapping(base_map), Value::Mapping(overlay_map)) = (base, overlay) else {
        return overlay.clone();
    };

    let mut merged = base_map.clone();
    for (key, value) in overlay_map {
        if value.is_null() {
            merged.remove(key);
            continue;
        }
        let next = match base_map.get(key) {
            Some(existing) => deep_merge(existing, value),
            None => value.clone(),
        };
        merged.insert(key.clone(), next);
    }
    Value::Mapping(merged)
}

/// Merge settings layers in order; later layers win.
pub fn merge_configs(layers: &[Value]) -> Value {
    layers
        .iter()
        .filter(|layer| !layer.is_null())
        .fold(Value::Mapping(Mapping::new()), |acc, layer| {
            deep_merge(&acc, layer)
        })
}
