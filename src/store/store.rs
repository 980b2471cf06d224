use crate::error::StoreError;
use crate::stream::{Cell, CombineLatest};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};

/// The reserved member name the combined stream is bound under.
pub const STATE_KEY: &str = "state";

/// An independent shallow copy of all current field values, produced fresh
/// on every combined-stream emission.
pub type Snapshot<V> = BTreeMap<String, V>;

/// The combined state stream: one snapshot per field write, replayed to late
/// subscribers.
pub type StateStream<V> = CombineLatest<Snapshot<V>>;

/// An observable state container built from a flat map of named initial
/// values.
///
/// Each named value becomes an individually readable/writable reactive cell.
/// The store additionally exposes a single combined stream, [`Store::state`],
/// that emits a full snapshot of all field values every time any one field
/// changes.
///
/// The field-name set is fixed at construction: fields cannot be added or
/// removed later, and `state` is never a field name.
pub struct Store<V> {
    fields: Vec<String>,
    cells: HashMap<String, Cell<V>>,
    state: StateStream<V>,
}

impl<V: Clone + Send + Sync + 'static> Store<V> {
    /// Create a new store from named initial values.
    ///
    /// Duplicate names keep their first position, last value wins. Fails with
    /// [`StoreError::EmptyProps`] when no fields are supplied and
    /// [`StoreError::ReservedName`] when a field is named `state`. No partial
    /// store is ever created.
    pub fn new<I, K>(props: I) -> Result<Self, StoreError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
    {
        let mut seeds: Vec<(String, V)> = Vec::new();
        for (key, value) in props {
            let key = key.into();
            match seeds.iter_mut().find(|(existing, _)| *existing == key) {
                Some(seed) => seed.1 = value,
                None => seeds.push((key, value)),
            }
        }

        if seeds.is_empty() {
            return Err(StoreError::EmptyProps);
        }
        if seeds.iter().any(|(key, _)| key == STATE_KEY) {
            return Err(StoreError::ReservedName);
        }

        let mut fields = Vec::with_capacity(seeds.len());
        let mut cells = HashMap::with_capacity(seeds.len());
        for (key, value) in seeds {
            cells.insert(key.clone(), Cell::new(value));
            fields.push(key);
        }

        // All cells are seeded before the stream is derived, so the stream
        // has a current snapshot from the moment it exists.
        let inputs: Vec<Cell<V>> = fields.iter().map(|key| cells[key].clone()).collect();
        let state = CombineLatest::new(&inputs, {
            let fields = fields.clone();
            let cells = cells.clone();
            move || capture(&fields, &cells)
        });

        Ok(Self {
            fields,
            cells,
            state,
        })
    }

    /// Get a clone of a field's current value, or `None` for an unknown
    /// field name. No side effects.
    pub fn get(&self, field: &str) -> Option<V> {
        self.cells.get(field).map(Cell::value)
    }

    /// Write a new value into a field's cell.
    ///
    /// The push is unconditional (no value-equality gate) and triggers
    /// exactly one emission on [`Store::state`] before this call returns.
    /// Returns `false` for an unknown field name; the field set is fixed.
    pub fn set(&self, field: &str, value: V) -> bool {
        match self.cells.get(field) {
            Some(cell) => {
                cell.next(value);
                true
            }
            None => false,
        }
    }

    /// Update a field's value in place. A single push, same emission
    /// semantics as [`Store::set`].
    pub fn update(&self, field: &str, f: impl FnOnce(&mut V)) -> bool {
        match self.cells.get(field) {
            Some(cell) => {
                cell.update(f);
                true
            }
            None => false,
        }
    }

    /// The store's field names, in construction order. Never contains
    /// `state`.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Whether the store has a field with the given name.
    pub fn contains(&self, field: &str) -> bool {
        self.cells.contains_key(field)
    }

    /// Take a fresh snapshot of all current field values.
    pub fn snapshot(&self) -> Snapshot<V> {
        capture(&self.fields, &self.cells)
    }

    /// The combined state stream.
    ///
    /// Subscribing immediately yields the current snapshot, then one fresh
    /// snapshot per field write. The stream is created once at construction
    /// and cannot be reassigned.
    pub fn state(&self) -> &StateStream<V> {
        &self.state
    }
}

impl Store<Value> {
    /// Create a store from a JSON object of initial values.
    ///
    /// This is the dynamic entry point: any non-object value (null, boolean,
    /// number, string, array) fails with [`StoreError::InvalidProps`] naming
    /// the offending kind.
    pub fn from_json(props: &Value) -> Result<Self, StoreError> {
        let map = props
            .as_object()
            .ok_or_else(|| StoreError::InvalidProps(json_kind(props).to_string()))?;
        Store::new(map.iter().map(|(key, value)| (key.clone(), value.clone())))
    }
}

impl<V> Clone for Store<V> {
    fn clone(&self) -> Self {
        Self {
            fields: self.fields.clone(),
            cells: self.cells.clone(),
            state: self.state.clone(),
        }
    }
}

/// The snapshot projection: reads every cell's current value fresh.
fn capture<V: Clone + Send + Sync + 'static>(
    fields: &[String],
    cells: &HashMap<String, Cell<V>>,
) -> Snapshot<V> {
    fields
        .iter()
        .map(|key| (key.clone(), cells[key].value()))
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
