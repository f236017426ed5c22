//! Lookup, create, and update orchestration.
//!
//! Each operation is normalize → (writes only) validate the address upstream →
//! read/write the store. A missing record is a normal outcome, not an error.

use std::sync::Arc;

use addrbook_client::AddressSuggester;
use addrbook_core::{Field, PhoneKey, Record, normalize};
use addrbook_redis::RecordStore;

use crate::Result;

/// Outcome of a lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// A record exists for the phone.
    Found(Record),
    /// The phone did not normalize or nothing is stored for it.
    NoSuchPhone,
}

/// Outcome of a successful create or update call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// A new record was written.
    Created,
    /// An existing record was overwritten.
    Updated,
    /// Update target does not exist; nothing written.
    NoSuchPhone,
}

/// The phone → address book.
///
/// Cheap to clone; clones share the store and suggester.
#[derive(Clone)]
pub struct AddressBook {
    store: Arc<dyn RecordStore>,
    suggester: Arc<dyn AddressSuggester>,
}

impl AddressBook {
    /// Create a book over the given store and suggester.
    pub fn new(store: Arc<dyn RecordStore>, suggester: Arc<dyn AddressSuggester>) -> Self {
        Self { store, suggester }
    }

    /// Look up the address stored for `phone`.
    pub async fn lookup(&self, phone: &str) -> Result<Lookup> {
        let Some(key) = normalize(phone) else {
            return Ok(Lookup::NoSuchPhone);
        };
        Ok(match self.stored(&key).await? {
            Some(address) => Lookup::Found(Record {
                phone_key: key,
                address,
            }),
            None => Lookup::NoSuchPhone,
        })
    }

    /// Store a validated address for a well-formed phone.
    ///
    /// The phone must normalize to ten digits; it is checked before the
    /// suggestion service is called.
    pub async fn create(&self, phone: &str, address: &str) -> Result<WriteOutcome> {
        let key = normalize(phone)
            .filter(PhoneKey::is_canonical)
            .ok_or(addrbook_core::Error::Validation(Field::Phone))?;

        self.validate_address(address).await?;
        self.store.set(&key, address).await?;
        tracing::info!(phone_key = %key, "Record created");
        Ok(WriteOutcome::Created)
    }

    /// Replace the address of an existing record.
    ///
    /// Unlike [`create`](Self::create), the normalized key is not checked for
    /// digits before the store lookup; a malformed key simply misses.
    pub async fn update(&self, phone: &str, address: &str) -> Result<WriteOutcome> {
        let Some(key) = normalize(phone) else {
            return Ok(WriteOutcome::NoSuchPhone);
        };
        if self.stored(&key).await?.is_none() {
            return Ok(WriteOutcome::NoSuchPhone);
        }

        self.validate_address(address).await?;
        self.store.set(&key, address).await?;
        tracing::info!(phone_key = %key, "Record updated");
        Ok(WriteOutcome::Updated)
    }

    /// Raw suggestions for `address`, in upstream order.
    pub async fn suggestions(&self, address: &str) -> Result<Vec<String>> {
        Ok(self.suggester.suggestions(address).await?)
    }

    async fn validate_address(&self, address: &str) -> Result<()> {
        if self.suggester.is_valid(address).await? {
            Ok(())
        } else {
            Err(addrbook_core::Error::Validation(Field::Address).into())
        }
    }

    /// Stored address, treating an empty value as absent.
    async fn stored(&self, key: &PhoneKey) -> Result<Option<String>> {
        let address = self.store.get(key).await?;
        Ok(address.filter(|a| !a.is_empty()))
    }
}

impl std::fmt::Debug for AddressBook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AddressBook")
            .field("store", &self.store.name())
            .finish_non_exhaustive()
    }
}
