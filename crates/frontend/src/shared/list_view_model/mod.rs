//! Generic state of a list screen.
//!
//! A screen keeps the last server snapshot, a filtered and sorted projection
//! of it, and per-record pending edits. Everything here is plain data so it
//! can be tested without a browser; [`controller::ListController`] drives the
//! network side and [`cell::ViewModelCell`] is the reactive storage seam.

pub mod cell;
pub mod controller;
pub mod create;
pub mod pending;
pub mod screen;

pub use cell::ViewModelCell;
pub use controller::{CollectionApi, ListController, MutationOutcome, ScreenServices};
pub use create::{submit_create, CreateApi};
pub use pending::{display_value, id_value, parse_input, DerivedTotal, PendingEdits};
pub use screen::{use_create_form, use_list_screen, use_reference_list, CreateForm, ListScreen};

use crate::shared::api::{ApiError, ApiResult};
use contracts::domain::common::{EntityId, Resource};
use serde_json::Value;
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

/// Record that can be shown in a list screen
pub trait ListItem: Clone + Send + Sync + 'static {
    fn item_id(&self) -> EntityId;

    /// Wire value of a field, by its JSON name
    fn field(&self, name: &str) -> Option<Value>;
}

impl<T> ListItem for T
where
    T: Resource + Send + Sync,
{
    fn item_id(&self) -> EntityId {
        self.id()
    }

    fn field(&self, name: &str) -> Option<Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(mut map)) => map.remove(name),
            _ => None,
        }
    }
}

/// Predicate over one record
pub type Criterion<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

pub fn criterion<T, F>(f: F) -> Criterion<T>
where
    F: Fn(&T) -> bool + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Named ordering of the projection
pub struct SortKey<T> {
    pub name: &'static str,
    compare: Arc<dyn Fn(&T, &T) -> Ordering + Send + Sync>,
}

impl<T> SortKey<T> {
    pub fn new<F>(name: &'static str, compare: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        Self {
            name,
            compare: Arc::new(compare),
        }
    }

    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.compare)(a, b)
    }
}

impl<T> Clone for SortKey<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            compare: self.compare.clone(),
        }
    }
}

impl<T> std::fmt::Debug for SortKey<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("SortKey").field(&self.name).finish()
    }
}

/// Issued by [`ListViewModel::begin_load`]; only the latest ticket may land
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// Snapshot replaced, with the new record count
    Replaced(usize),
    Failed(ApiError),
    /// A newer load was started, or the screen is gone
    Discarded,
}

pub struct ListViewModel<T: ListItem> {
    snapshot: Vec<T>,
    projection: Vec<T>,
    filters: BTreeMap<&'static str, Criterion<T>>,
    sort: Option<SortKey<T>>,
    pending: HashMap<EntityId, PendingEdits>,
    derived: Vec<DerivedTotal>,
    issued: u64,
    loading: bool,
    loaded: bool,
    error: Option<ApiError>,
    detached: bool,
}

impl<T: ListItem> Default for ListViewModel<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ListItem> ListViewModel<T> {
    pub fn new() -> Self {
        Self {
            snapshot: Vec::new(),
            projection: Vec::new(),
            filters: BTreeMap::new(),
            sort: None,
            pending: HashMap::new(),
            derived: Vec::new(),
            issued: 0,
            loading: false,
            loaded: false,
            error: None,
            detached: false,
        }
    }

    pub fn with_sort(mut self, sort: SortKey<T>) -> Self {
        self.sort = Some(sort);
        self.recompute();
        self
    }

    pub fn with_derived(mut self, rule: DerivedTotal) -> Self {
        self.derived.push(rule);
        self
    }

    // ---- read side ----

    pub fn snapshot(&self) -> &[T] {
        &self.snapshot
    }

    pub fn projection(&self) -> &[T] {
        &self.projection
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// At least one load has completed successfully
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn error(&self) -> Option<&ApiError> {
        self.error.as_ref()
    }

    pub fn sort_name(&self) -> Option<&'static str> {
        self.sort.as_ref().map(|s| s.name)
    }

    pub fn find(&self, id: &EntityId) -> Option<&T> {
        self.snapshot.iter().find(|item| &item.item_id() == id)
    }

    pub fn pending(&self, id: &EntityId) -> Option<&PendingEdits> {
        self.pending.get(id).filter(|edits| !edits.is_empty())
    }

    pub fn is_dirty(&self, id: &EntityId) -> bool {
        self.pending(id).is_some()
    }

    pub fn dirty_count(&self) -> usize {
        self.pending.values().filter(|e| !e.is_empty()).count()
    }

    /// Displayed value of a field: the pending edit if any, else the server value
    pub fn value(&self, id: &EntityId, field: &str) -> Option<Value> {
        if let Some(value) = self.pending.get(id).and_then(|e| e.get(field)) {
            return Some(value.clone());
        }
        self.find(id).and_then(|item| item.field(field))
    }

    // ---- filtering and sorting ----

    /// Install (`Some`) or clear (`None`) the criterion for one selector.
    /// All installed criteria must hold for a record to be shown.
    pub fn set_filter(&mut self, selector: &'static str, criterion: Option<Criterion<T>>) {
        match criterion {
            Some(criterion) => {
                self.filters.insert(selector, criterion);
            }
            None => {
                self.filters.remove(selector);
            }
        }
        self.recompute();
    }

    pub fn has_filter(&self, selector: &str) -> bool {
        self.filters.contains_key(selector)
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.recompute();
    }

    pub fn set_sort(&mut self, sort: Option<SortKey<T>>) {
        self.sort = sort;
        self.recompute();
    }

    fn recompute(&mut self) {
        let mut projection: Vec<T> = self
            .snapshot
            .iter()
            .filter(|item| self.filters.values().all(|keep| keep(item)))
            .cloned()
            .collect();
        if let Some(sort) = &self.sort {
            projection.sort_by(|a, b| sort.compare(a, b));
        }
        self.projection = projection;
    }

    // ---- edits ----

    /// Record a local edit. Returns `false` if the record is unknown.
    pub fn edit(&mut self, id: &EntityId, field: &str, value: Value) -> bool {
        let Some(item) = self.find(id).cloned() else {
            return false;
        };
        let rules = self.derived.clone();
        self.pending
            .entry(id.clone())
            .or_default()
            .apply(field, value, &rules, |name| item.field(name));
        true
    }

    /// Forget every pending edit of a record
    pub fn mark_clean(&mut self, id: &EntityId) {
        self.pending.remove(id);
    }

    /// The given edits were persisted; drop those not changed since
    pub fn mark_saved(&mut self, id: &EntityId, sent: &PendingEdits) {
        if let Some(edits) = self.pending.get_mut(id) {
            edits.acknowledge(sent);
            if edits.is_empty() {
                self.pending.remove(id);
            }
        }
    }

    /// Drop a record from snapshot and projection alike
    pub fn remove(&mut self, id: &EntityId) -> bool {
        let before = self.snapshot.len();
        self.snapshot.retain(|item| &item.item_id() != id);
        self.projection.retain(|item| &item.item_id() != id);
        self.pending.remove(id);
        self.snapshot.len() != before
    }

    // ---- loading ----

    pub fn begin_load(&mut self) -> LoadTicket {
        self.issued += 1;
        self.loading = true;
        LoadTicket(self.issued)
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        !self.detached && ticket.0 == self.issued
    }

    /// Land a load result. Stale tickets are ignored entirely.
    pub fn finish_load(&mut self, ticket: LoadTicket, result: ApiResult<Vec<T>>) -> LoadOutcome {
        if !self.is_current(ticket) {
            return LoadOutcome::Discarded;
        }
        self.loading = false;
        match result {
            Ok(items) => {
                let count = items.len();
                self.snapshot = items;
                let present: Vec<EntityId> = self.snapshot.iter().map(|i| i.item_id()).collect();
                self.pending.retain(|id, _| present.contains(id));
                self.error = None;
                self.loaded = true;
                self.recompute();
                LoadOutcome::Replaced(count)
            }
            Err(err) => {
                self.error = Some(err.clone());
                LoadOutcome::Failed(err)
            }
        }
    }

    /// The screen went away; in-flight loads must not land anymore
    pub fn detach(&mut self) {
        self.detached = true;
        self.loading = false;
    }

    pub fn is_detached(&self) -> bool {
        self.detached
    }
}
