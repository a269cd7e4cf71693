use std::path::Path;

use anyhow::{Context, bail};

use crate::models::Phone;

/// In-memory record provider. Constructed once at startup with an immutable
/// snapshot of the catalogue; requests only ever borrow from it.
#[derive(Debug, Default)]
pub struct PhoneStore {
    phones: Vec<Phone>,
}

impl PhoneStore {
    pub fn new(phones: Vec<Phone>) -> Self {
        Self { phones }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Read and validate the catalogue file. Any shape violation aborts the
    /// load; degradation to an empty catalogue is the caller's decision.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading catalogue file {}", path.display()))?;
        let phones: Vec<Phone> = serde_json::from_str(&raw)
            .with_context(|| format!("parsing catalogue file {}", path.display()))?;
        validate_records(&phones)?;
        Ok(Self::new(phones))
    }

    /// Load the catalogue, falling back to an empty one if the backing data is
    /// missing or invalid. Callers see no records rather than a failure.
    pub fn load_or_empty(path: impl AsRef<Path>) -> Self {
        match Self::load(path.as_ref()) {
            Ok(store) => {
                tracing::info!(count = store.len(), "catalogue loaded");
                store
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to load catalogue, starting empty");
                Self::empty()
            }
        }
    }

    /// The full record set, in load order. This order is the tie-break
    /// baseline for the downstream sort.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn phone_by_id(&self, id: u32) -> Option<&Phone> {
        self.phones.iter().find(|phone| phone.id == id)
    }

    pub fn len(&self) -> usize {
        self.phones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phones.is_empty()
    }
}

fn validate_records(phones: &[Phone]) -> anyhow::Result<()> {
    let mut seen = std::collections::HashSet::new();
    for (index, phone) in phones.iter().enumerate() {
        if phone.id == 0 {
            bail!("invalid phone record at index {index}: id must be positive");
        }
        if !seen.insert(phone.id) {
            bail!("invalid phone record at index {index}: duplicate id {}", phone.id);
        }
        if phone.name.trim().is_empty() {
            bail!("invalid phone record at index {index}: empty name");
        }
        if phone.brand.trim().is_empty() {
            bail!("invalid phone record at index {index}: empty brand");
        }
        if !(phone.price >= 0.0) {
            bail!("invalid phone record at index {index}: negative price");
        }
    }
    Ok(())
}
