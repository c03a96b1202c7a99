// Logbook - core/contacts.rs
//
// In-memory name -> phone store for the contact assistant.
// Owned by a single session; nothing is persisted.

use crate::core::model::Contact;
use crate::util::error::CommandError;
use std::collections::HashMap;

/// Contact store with map semantics and stable insertion order.
///
/// `index` maps a name to its slot in `contacts`; a name appears at most
/// once. Overwriting a phone keeps the contact in its original position.
#[derive(Debug, Default)]
pub struct ContactStore {
    contacts: Vec<Contact>,
    index: HashMap<String, usize>,
}

impl ContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Insert a contact, or overwrite the phone if the name already exists.
    pub fn upsert(&mut self, name: &str, phone: &str) {
        match self.index.get(name) {
            Some(&slot) => self.contacts[slot].phone = phone.to_string(),
            None => {
                self.index.insert(name.to_string(), self.contacts.len());
                self.contacts.push(Contact {
                    name: name.to_string(),
                    phone: phone.to_string(),
                });
            }
        }
    }

    /// Overwrite the phone of an existing contact.
    pub fn update(&mut self, name: &str, phone: &str) -> Result<(), CommandError> {
        let slot = *self.index.get(name).ok_or(CommandError::ContactNotFound)?;
        self.contacts[slot].phone = phone.to_string();
        Ok(())
    }

    /// Phone number stored for `name`.
    pub fn phone(&self, name: &str) -> Result<&str, CommandError> {
        self.index
            .get(name)
            .map(|&slot| self.contacts[slot].phone.as_str())
            .ok_or(CommandError::ContactNotFound)
    }

    /// All contacts in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.contacts.iter()
    }
}
