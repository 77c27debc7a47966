use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

use serde::{Deserialize, Serialize};

use super::error::{BahiError, Result};
use super::types::TenantId;

/// Prefix every tenant's counter is provisioned with at onboarding.
pub const DEFAULT_PREFIX: &str = "INV";

/// How an allocated counter value becomes the visible invoice number.
///
/// Default is `{prefix}-{value}` without padding, e.g. "INV-7". Padding only
/// ever widens the digits, so numbers stay monotonic per tenant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvoiceNumberFormat {
    pub separator: String,
    pub zero_pad: usize,
}

impl Default for InvoiceNumberFormat {
    fn default() -> Self {
        Self {
            separator: "-".to_string(),
            zero_pad: 0,
        }
    }
}

impl InvoiceNumberFormat {
    /// Set zero-padding width (e.g. 4 gives "INV-0007").
    pub fn with_padding(mut self, width: usize) -> Self {
        self.zero_pad = width;
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn format(&self, prefix: &str, value: u64) -> String {
        format!(
            "{}{}{:0>width$}",
            prefix,
            self.separator,
            value,
            width = self.zero_pad
        )
    }
}

/// Key of one counter: a tenant and the prefix it numbers under.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CounterKey {
    pub tenant_id: TenantId,
    pub prefix: String,
}

impl CounterKey {
    pub fn new(tenant_id: TenantId, prefix: impl Into<String>) -> Self {
        Self {
            tenant_id,
            prefix: prefix.into(),
        }
    }
}

/// Snapshot of a provisioned counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceCounter {
    pub tenant_id: TenantId,
    pub prefix: String,
    /// Value the next `allocate` call will return.
    pub next_number: u64,
}

/// Source of per-tenant invoice numbers.
///
/// `allocate` must be atomic per `(tenant_id, prefix)`: two concurrent calls
/// on the same key never return the same value. A host database backs this
/// with a row lock or an `UPDATE ... RETURNING`; [`InMemoryCounterStore`]
/// uses a mutex per counter.
pub trait CounterStore {
    /// Return the current next number and advance the counter by one.
    ///
    /// Fails with [`BahiError::CounterNotFound`] when the key was never
    /// provisioned. Counters are never created lazily.
    fn allocate(&self, tenant_id: &TenantId, prefix: &str) -> Result<u64>;
}

impl<S: CounterStore + ?Sized> CounterStore for &S {
    fn allocate(&self, tenant_id: &TenantId, prefix: &str) -> Result<u64> {
        (**self).allocate(tenant_id, prefix)
    }
}

impl<S: CounterStore + ?Sized> CounterStore for Arc<S> {
    fn allocate(&self, tenant_id: &TenantId, prefix: &str) -> Result<u64> {
        (**self).allocate(tenant_id, prefix)
    }
}

#[derive(Debug, Default)]
struct Arena {
    index: HashMap<CounterKey, usize>,
    slots: Vec<Mutex<u64>>,
}

/// In-process counter store.
///
/// Counters live in an arena indexed by [`CounterKey`]. Allocation takes the
/// arena's read lock plus the mutex of a single counter, so tenants never
/// contend with each other. Provisioning takes the write lock.
#[derive(Debug, Default)]
pub struct InMemoryCounterStore {
    arena: RwLock<Arena>,
}

impl InMemoryCounterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a counter starting at `start`.
    pub fn provision(&self, tenant_id: &TenantId, prefix: &str, start: u64) -> Result<()> {
        if start == 0 {
            return Err(BahiError::Numbering(
                "counter must start at a positive number".into(),
            ));
        }
        let prefix = prefix.trim();
        if prefix.is_empty() {
            return Err(BahiError::Numbering("counter prefix must not be empty".into()));
        }

        let mut arena = self
            .arena
            .write()
            .map_err(|_| BahiError::Allocation("counter arena lock poisoned".into()))?;
        let key = CounterKey::new(tenant_id.clone(), prefix);
        if arena.index.contains_key(&key) {
            return Err(BahiError::Numbering(format!(
                "counter '{prefix}' already provisioned for tenant '{tenant_id}'"
            )));
        }
        let slot = arena.slots.len();
        arena.slots.push(Mutex::new(start));
        arena.index.insert(key, slot);
        tracing::debug!(tenant_id = %tenant_id, prefix, start, "provisioned invoice counter");
        Ok(())
    }

    /// Provision the default "INV" counter at 1, as done once per new tenant.
    pub fn onboard(&self, tenant_id: &TenantId) -> Result<()> {
        self.provision(tenant_id, DEFAULT_PREFIX, 1)
    }

    /// Preview the next number without consuming it.
    pub fn peek(&self, tenant_id: &TenantId, prefix: &str) -> Result<u64> {
        self.with_slot(tenant_id, prefix, |next| Ok(*next))
    }

    /// Snapshot of every counter, for persistence or inspection.
    pub fn counters(&self) -> Result<Vec<SequenceCounter>> {
        let arena = self
            .arena
            .read()
            .map_err(|_| BahiError::Allocation("counter arena lock poisoned".into()))?;
        let mut out = Vec::with_capacity(arena.index.len());
        for (key, &slot) in &arena.index {
            let next = arena.slots[slot]
                .lock()
                .map_err(|_| BahiError::Allocation("counter lock poisoned".into()))?;
            out.push(SequenceCounter {
                tenant_id: key.tenant_id.clone(),
                prefix: key.prefix.clone(),
                next_number: *next,
            });
        }
        out.sort_by(|a, b| {
            a.tenant_id
                .cmp(&b.tenant_id)
                .then_with(|| a.prefix.cmp(&b.prefix))
        });
        Ok(out)
    }

    fn with_slot<T>(
        &self,
        tenant_id: &TenantId,
        prefix: &str,
        f: impl FnOnce(&mut u64) -> Result<T>,
    ) -> Result<T> {
        let arena = self
            .arena
            .read()
            .map_err(|_| BahiError::Allocation("counter arena lock poisoned".into()))?;
        let prefix = prefix.trim();
        let key = CounterKey::new(tenant_id.clone(), prefix);
        let Some(&slot) = arena.index.get(&key) else {
            tracing::warn!(tenant_id = %tenant_id, prefix, "invoice counter not provisioned");
            return Err(BahiError::CounterNotFound {
                tenant_id: tenant_id.clone(),
                prefix: prefix.to_string(),
            });
        };
        let mut next = arena.slots[slot]
            .lock()
            .map_err(|_| BahiError::Allocation("counter lock poisoned".into()))?;
        f(&mut *next)
    }
}

impl CounterStore for InMemoryCounterStore {
    fn allocate(&self, tenant_id: &TenantId, prefix: &str) -> Result<u64> {
        let value = self.with_slot(tenant_id, prefix, |next| {
            let value = *next;
            *next = value.checked_add(1).ok_or_else(|| {
                BahiError::Allocation(format!("counter '{prefix}' exhausted"))
            })?;
            Ok(value)
        })?;
        tracing::debug!(tenant_id = %tenant_id, prefix, value, "allocated invoice number");
        Ok(value)
    }
}
