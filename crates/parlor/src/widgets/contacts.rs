//! In-memory contact book.

use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// A saved contact.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
pub struct Contact {
    name: String,
    phone: String,
    email: String,
}

/// Contact book failure.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ContactError {
    /// A required field was blank.
    #[display("Please fill in all fields ({} is missing).", field)]
    MissingField {
        /// Name of the blank field.
        field: &'static str,
    },

    /// No contact at this index.
    #[display("No contact #{} (have {}).", index, len)]
    NotFound {
        /// Requested index.
        index: usize,
        /// Number of contacts.
        len: usize,
    },
}

/// Contacts in insertion order. No duplicate detection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactBook {
    contacts: Vec<Contact>,
}

impl ContactBook {
    /// Creates an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a contact; all fields are required.
    ///
    /// # Errors
    ///
    /// Returns [`ContactError::MissingField`] for a blank field.
    #[instrument(skip(self))]
    pub fn add(&mut self, name: &str, phone: &str, email: &str) -> Result<&Contact, ContactError> {
        for (field, value) in [("name", name), ("phone", phone), ("email", email)] {
            if value.trim().is_empty() {
                warn!(field, "Contact field missing");
                return Err(ContactError::MissingField { field });
            }
        }

        let index = self.contacts.len();
        self.contacts.push(Contact::new(
            name.trim().to_string(),
            phone.trim().to_string(),
            email.trim().to_string(),
        ));
        info!(index, "Contact added");
        Ok(&self.contacts[index])
    }

    /// Removes the contact at `index`, shifting later contacts down.
    ///
    /// # Errors
    ///
    /// Returns [`ContactError::NotFound`] and changes nothing when the index
    /// does not exist.
    #[instrument(skip(self))]
    pub fn delete(&mut self, index: usize) -> Result<Contact, ContactError> {
        if index >= self.contacts.len() {
            debug!(index, len = self.contacts.len(), "Contact index out of range");
            return Err(ContactError::NotFound {
                index,
                len: self.contacts.len(),
            });
        }
        let removed = self.contacts.remove(index);
        info!(index, "Contact deleted");
        Ok(removed)
    }

    /// The contact at `index`, for the detail view.
    pub fn get(&self, index: usize) -> Option<&Contact> {
        self.contacts.get(index)
    }

    /// All contacts in insertion order.
    pub fn list(&self) -> &[Contact] {
        &self.contacts
    }

    /// Number of contacts.
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Whether the book is empty.
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}
