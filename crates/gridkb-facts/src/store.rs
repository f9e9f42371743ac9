use std::collections::BTreeMap;

use crate::fact::Fact;

/// Insertion-ordered multimap from relation name to facts.
///
/// Facts are write-once: the store has no update or delete. Duplicates are
/// kept and retrieved as many times as they were added. Build a store
/// completely before handing out shared references for querying; a `&FactStore`
/// can then be read from any number of threads.
///
/// With the `serde` feature the store serializes as a flat list of facts and
/// is rebuilt through [`FactStore::add`] on the way back in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Vec<Fact>", into = "Vec<Fact>")
)]
pub struct FactStore {
    facts: BTreeMap<String, Vec<Fact>>,
}

impl FactStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `fact` under its relation name, creating the relation if absent.
    ///
    /// Never fails. A fact whose arity differs from the first fact recorded
    /// under the same relation is still stored, but logged as a warning.
    pub fn add(&mut self, fact: Fact) {
        let bucket = self.facts.entry(fact.relation().to_owned()).or_default();
        if let Some(first) = bucket.first() {
            if first.arity() != fact.arity() {
                log::warn!(
                    "arity mismatch in relation {}: expected {}, got {} for {}",
                    fact.relation(),
                    first.arity(),
                    fact.arity(),
                    fact
                );
            }
        }
        bucket.push(fact);
    }

    /// All facts of relation `name`, in insertion order.
    ///
    /// Returns an empty slice for a relation that was never added.
    pub fn fetch(&self, name: &str) -> &[Fact] {
        self.facts.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Facts of relation `name` whose leading arguments equal `prefix`, in
    /// insertion order. This is a linear scan over the relation.
    pub fn matching<'a>(
        &'a self,
        name: &str,
        prefix: &'a [i32],
    ) -> impl Iterator<Item = &'a Fact> + 'a {
        self.fetch(name).iter().filter(move |f| f.starts_with(prefix))
    }

    /// Whether an exact copy of `fact` has been added.
    pub fn contains(&self, fact: &Fact) -> bool {
        self.fetch(fact.relation()).contains(fact)
    }

    /// Number of facts recorded under `name`.
    pub fn count(&self, name: &str) -> usize {
        self.fetch(name).len()
    }

    /// Relation names present in the store, in sorted order.
    pub fn relations(&self) -> impl Iterator<Item = &str> {
        self.facts.keys().map(String::as_str)
    }

    /// Total number of facts across all relations.
    #[inline]
    pub fn len(&self) -> usize {
        self.facts.values().map(Vec::len).sum()
    }

    /// Whether no fact has been added.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }
}

impl Extend<Fact> for FactStore {
    fn extend<I: IntoIterator<Item = Fact>>(&mut self, iter: I) {
        for fact in iter {
            self.add(fact);
        }
    }
}

impl FromIterator<Fact> for FactStore {
    fn from_iter<I: IntoIterator<Item = Fact>>(iter: I) -> Self {
        let mut store = Self::new();
        store.extend(iter);
        store
    }
}

impl From<Vec<Fact>> for FactStore {
    fn from(facts: Vec<Fact>) -> Self {
        facts.into_iter().collect()
    }
}

/// Relations in sorted order, each in insertion order.
impl From<FactStore> for Vec<Fact> {
    fn from(store: FactStore) -> Self {
        store.facts.into_values().flatten().collect()
    }
}
