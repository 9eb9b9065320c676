//! Declaration-ordered table of state definitions.

use crate::core::{EventId, StateId};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Transitions available from one state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDefinition {
    /// Event -> destination state
    #[serde(default)]
    pub transitions: BTreeMap<EventId, StateId>,
}

impl StateDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Destination for `event`, if this state defines one.
    pub fn target(&self, event: &str) -> Option<&StateId> {
        self.transitions.get(event)
    }

    pub fn handles(&self, event: &str) -> bool {
        self.transitions.contains_key(event)
    }
}

/// State definitions keyed by id, in the order they were declared.
///
/// Serialized as a JSON object. Redeclaring an id replaces its definition
/// but keeps its original position.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StateTable {
    entries: Vec<(StateId, StateDefinition)>,
}

impl StateTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: StateId, definition: StateDefinition) {
        match self.entries.iter().position(|(existing, _)| *existing == id) {
            Some(index) => self.entries[index].1 = definition,
            None => self.entries.push((id, definition)),
        }
    }

    pub fn get(&self, id: &str) -> Option<&StateDefinition> {
        self.entries
            .iter()
            .find(|(existing, _)| existing.as_str() == id)
            .map(|(_, definition)| definition)
    }

    pub(crate) fn get_mut_or_default(&mut self, id: StateId) -> &mut StateDefinition {
        let index = match self.entries.iter().position(|(existing, _)| *existing == id) {
            Some(index) => index,
            None => {
                self.entries.push((id, StateDefinition::new()));
                self.entries.len() - 1
            }
        };
        &mut self.entries[index].1
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&StateId, &StateDefinition)> {
        self.entries.iter().map(|(id, definition)| (id, definition))
    }

    pub fn ids(&self) -> impl Iterator<Item = &StateId> {
        self.entries.iter().map(|(id, _)| id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(StateId, StateDefinition)> for StateTable {
    fn from_iter<I: IntoIterator<Item = (StateId, StateDefinition)>>(iter: I) -> Self {
        let mut table = StateTable::new();
        for (id, definition) in iter {
            table.insert(id, definition);
        }
        table
    }
}

impl Serialize for StateTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (id, definition) in &self.entries {
            map.serialize_entry(id, definition)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for StateTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct StateTableVisitor;

        impl<'de> Visitor<'de> for StateTableVisitor {
            type Value = StateTable;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of state ids to state definitions")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut table = StateTable::new();
                while let Some((id, definition)) =
                    access.next_entry::<StateId, StateDefinition>()?
                {
                    table.insert(id, definition);
                }
                Ok(table)
            }
        }

        deserializer.deserialize_map(StateTableVisitor)
    }
}
