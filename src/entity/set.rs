//! The ordered entity set used to build filenames.

use serde_json::Value;

use crate::entity::kind::Entity;
use crate::entity::value::ComponentValue;
use crate::error::{Error, Result};

/// Values for each entity slot of a filename.
///
/// The setters can be called in any order; filenames always follow
/// [`Entity::ALL`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entities {
    pub subject: Option<ComponentValue>,
    pub session: Option<ComponentValue>,
    pub task: Option<ComponentValue>,
    pub acquisition: Option<ComponentValue>,
    pub run: Option<ComponentValue>,
    pub processing: Option<ComponentValue>,
    pub recording: Option<ComponentValue>,
}

impl Entities {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subject(mut self, value: impl Into<ComponentValue>) -> Self {
        self.subject = Some(value.into());
        self
    }

    pub fn session(mut self, value: impl Into<ComponentValue>) -> Self {
        self.session = Some(value.into());
        self
    }

    pub fn task(mut self, value: impl Into<ComponentValue>) -> Self {
        self.task = Some(value.into());
        self
    }

    pub fn acquisition(mut self, value: impl Into<ComponentValue>) -> Self {
        self.acquisition = Some(value.into());
        self
    }

    /// Set the run. Integers are zero-padded to two digits.
    pub fn run(mut self, value: impl Into<ComponentValue>) -> Self {
        self.run = Some(value.into());
        self
    }

    pub fn processing(mut self, value: impl Into<ComponentValue>) -> Self {
        self.processing = Some(value.into());
        self
    }

    pub fn recording(mut self, value: impl Into<ComponentValue>) -> Self {
        self.recording = Some(value.into());
        self
    }

    /// Get the value stored for a slot.
    pub fn get(&self, entity: Entity) -> Option<&ComponentValue> {
        self.slot(entity).as_ref()
    }

    /// Set or clear the value stored for a slot.
    pub fn set(&mut self, entity: Entity, value: Option<ComponentValue>) {
        *self.slot_mut(entity) = value;
    }

    /// True when no slot holds a value.
    pub fn is_empty(&self) -> bool {
        Entity::ALL.iter().all(|entity| self.get(*entity).is_none())
    }

    /// Slot values in filename order, with an integer run already converted
    /// to its zero-padded text form.
    pub fn ordered(&self) -> Vec<(Entity, Option<ComponentValue>)> {
        Entity::ALL
            .iter()
            .map(|&entity| {
                let value = self.get(entity).cloned();
                let value = match entity {
                    Entity::Run => value.map(ComponentValue::into_text),
                    _ => value,
                };
                (entity, value)
            })
            .collect()
    }

    /// Build an entity set from a JSON object keyed by slot name or key.
    ///
    /// Strings become text, integers become indices and `null` leaves the
    /// slot absent. Any other JSON type is rejected.
    pub fn from_json(value: &Value) -> Result<Self> {
        let object = value
            .as_object()
            .ok_or_else(|| Error::invalid_type("entities", "non-object"))?;

        let mut entities = Entities::new();
        for (name, value) in object {
            let entity: Entity = name.parse()?;
            entities.set(entity, ComponentValue::from_json(entity.name(), value)?);
        }

        Ok(entities)
    }

    fn slot(&self, entity: Entity) -> &Option<ComponentValue> {
        match entity {
            Entity::Subject => &self.subject,
            Entity::Session => &self.session,
            Entity::Task => &self.task,
            Entity::Acquisition => &self.acquisition,
            Entity::Run => &self.run,
            Entity::Processing => &self.processing,
            Entity::Recording => &self.recording,
        }
    }

    fn slot_mut(&mut self, entity: Entity) -> &mut Option<ComponentValue> {
        match entity {
            Entity::Subject => &mut self.subject,
            Entity::Session => &mut self.session,
            Entity::Task => &mut self.task,
            Entity::Acquisition => &mut self.acquisition,
            Entity::Run => &mut self.run,
            Entity::Processing => &mut self.processing,
            Entity::Recording => &mut self.recording,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ordered_follows_slot_order() {
        let entities = Entities::new().task("rest").subject("01");
        let ordered = entities.ordered();
        assert_eq!(ordered.len(), 7);
        assert_eq!(ordered[0], (Entity::Subject, Some("01".into())));
        assert_eq!(ordered[2], (Entity::Task, Some("rest".into())));
        assert_eq!(ordered[1], (Entity::Session, None));
    }

    #[test]
    fn test_ordered_pads_run() {
        let entities = Entities::new().run(7);
        assert_eq!(entities.ordered()[4], (Entity::Run, Some("07".into())));
    }

    #[test]
    fn test_is_empty() {
        assert!(Entities::new().is_empty());
        assert!(!Entities::new().recording("ecg").is_empty());
    }

    #[test]
    fn test_from_json() {
        let entities =
            Entities::from_json(&json!({"subject": "01", "run": 3, "proc": "sss", "task": null}))
                .unwrap();
        assert_eq!(
            entities,
            Entities::new().subject("01").run(3).processing("sss")
        );
    }

    #[test]
    fn test_from_json_rejects_list() {
        let err = Entities::from_json(&json!({"subject": ["01", "02"]})).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidType { ref field, ref found } if field == "subject" && found == "list"
        ));
    }

    #[test]
    fn test_from_json_unknown_entity() {
        let err = Entities::from_json(&json!({"echo": "1"})).unwrap_err();
        assert!(matches!(err, Error::UnknownEntity(_)));
    }

    #[test]
    fn test_from_json_requires_object() {
        assert!(Entities::from_json(&json!(["01"])).is_err());
    }
}
