use super::controller::{MutationOutcome, ScreenServices};
use super::create::submit_create;
use super::pending::{display_value, id_value, parse_input};
use super::{Criterion, DerivedTotal, ListController, ListItem, ListViewModel, PendingEdits, SortKey};
use crate::shared::api::{BrowserTransport, RestCollection, Transport};
use crate::shared::config::use_config;
use crate::shared::notify::{use_toasts, BrowserConfirm};
use crate::system::auth::context::SessionCredentials;
use contracts::domain::common::{EntityId, Resource};
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::Value;
use std::rc::Rc;

type SignalController<T> = ListController<T, RwSignal<ListViewModel<T>>>;

/// HTTP transport against the configured backend
pub fn use_transport() -> Rc<dyn Transport> {
    let config = use_config();
    Rc::new(BrowserTransport::new(config.api_base_url))
}

/// Session credential, toast sink and `window.confirm`, taken from context
pub fn use_screen_services() -> ScreenServices {
    ScreenServices {
        credentials: Rc::new(SessionCredentials::from_context()),
        notifier: Rc::new(use_toasts()),
        confirm: Rc::new(BrowserConfirm),
    }
}

/// Handle of a mounted list screen
pub struct ListScreen<T: ListItem> {
    pub state: RwSignal<ListViewModel<T>>,
    /// Projection rows; unaffected by edits, so inputs keep their focus while typing
    projection: Memo<Vec<T>>,
    controller: StoredValue<SignalController<T>, LocalStorage>,
}

impl<T: ListItem> Clone for ListScreen<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ListItem> Copy for ListScreen<T> {}

impl<T: ListItem + PartialEq> ListScreen<T> {
    /// Projection rows (tracked)
    pub fn rows(&self) -> Vec<T> {
        self.projection.get()
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(|vm| vm.is_loading())
    }

    /// Loading with nothing to show yet; reloads keep the table on screen
    pub fn is_first_load(&self) -> bool {
        self.state.with(|vm| vm.is_loading() && !vm.is_loaded())
    }

    pub fn row_count(&self) -> usize {
        self.projection.with(|rows| rows.len())
    }

    pub fn error_message(&self) -> Option<String> {
        self.state.with(|vm| vm.error().map(|e| e.user_message()))
    }

    pub fn is_dirty(&self, id: &EntityId) -> bool {
        self.state.with(|vm| vm.is_dirty(id))
    }

    pub fn value(&self, id: &EntityId, field: &str) -> Option<Value> {
        self.state.with(|vm| vm.value(id, field))
    }

    pub fn edit(&self, id: &EntityId, field: &str, value: Value) {
        self.state.update(|vm| {
            vm.edit(id, field, value);
        });
    }

    pub fn discard(&self, id: &EntityId) {
        self.state.update(|vm| vm.mark_clean(id));
    }

    pub fn set_filter(&self, selector: &'static str, criterion: Option<Criterion<T>>) {
        self.state.update(|vm| vm.set_filter(selector, criterion));
    }

    pub fn set_sort(&self, sort: Option<SortKey<T>>) {
        self.state.update(|vm| vm.set_sort(sort));
    }

    pub fn load(&self) {
        if let Some(controller) = self.controller.try_get_value() {
            spawn_local(async move {
                controller.load().await;
            });
        }
    }

    pub fn save(&self, id: EntityId) {
        if let Some(controller) = self.controller.try_get_value() {
            spawn_local(async move {
                controller.save(&id).await;
            });
        }
    }

    pub fn remove(&self, id: EntityId) {
        if let Some(controller) = self.controller.try_get_value() {
            spawn_local(async move {
                controller.remove(&id).await;
            });
        }
    }
}

/// Mount a list screen over resource `T`: fetches on mount, stops applying
/// responses once the owning component is disposed.
pub fn use_list_screen<T>(model: ListViewModel<T>) -> ListScreen<T>
where
    T: Resource + Send + Sync + PartialEq,
{
    let state = RwSignal::new(model);
    let projection = Memo::new(move |_| state.with(|vm| vm.projection().to_vec()));
    let api = Rc::new(RestCollection::<T>::new(use_transport()));
    let controller = ListController::new(state, api, use_screen_services(), T::element_name());
    let screen = ListScreen {
        state,
        projection,
        controller: StoredValue::new_local(controller),
    };

    on_cleanup(move || {
        state.try_update(|vm| vm.detach());
    });

    screen.load();
    screen
}

/// Reference collection (clients, products, ...) for select boxes, fetched once on mount
pub fn use_reference_list<T>() -> RwSignal<Vec<T>>
where
    T: Resource + Send + Sync,
{
    let items = RwSignal::new(Vec::new());
    let api = RestCollection::<T>::new(use_transport());
    let services = use_screen_services();

    spawn_local(async move {
        let result = match services.require_credential() {
            Ok(credential) => api.list(&credential).await,
            Err(err) => Err(err),
        };
        match result {
            Ok(list) => {
                items.try_set(list);
            }
            Err(err) => {
                let context = format!("Failed to load {}", T::list_name().to_lowercase());
                services.report(&context, &err);
            }
        }
    });
    items
}

/// Draft state of a create form over resource `T`
pub struct CreateForm<T: Resource> {
    pub draft: RwSignal<PendingEdits>,
    pub submitting: RwSignal<bool>,
    initial: StoredValue<PendingEdits>,
    rules: StoredValue<Vec<DerivedTotal>>,
    api: StoredValue<RestCollection<T>, LocalStorage>,
    services: StoredValue<ScreenServices, LocalStorage>,
}

impl<T: Resource> Clone for CreateForm<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Resource> Copy for CreateForm<T> {}

impl<T: Resource> CreateForm<T> {
    /// Current input text of a field (tracked)
    pub fn text(&self, field: &'static str) -> String {
        self.draft.with(|d| display_value(d.get(field)))
    }

    pub fn value(&self, field: &'static str) -> Option<Value> {
        self.draft.with(|d| d.get(field).cloned())
    }

    /// Store raw input text, keeping derived totals up to date
    pub fn set_text(&self, field: &'static str, raw: &str) {
        self.set_value(field, parse_input(raw));
    }

    pub fn set_value(&self, field: &'static str, value: Value) {
        let rules = self.rules.get_value();
        self.draft.update(|d| d.apply(field, value, &rules, |_| None));
    }

    /// Input value bound to a field
    pub fn text_signal(self, field: &'static str) -> Signal<String> {
        Signal::derive(move || self.text(field))
    }

    /// Numeric input handler
    pub fn number_input(self, field: &'static str) -> Callback<String> {
        Callback::new(move |raw: String| self.set_text(field, &raw))
    }

    /// Free text input handler; the value is kept verbatim
    pub fn string_input(self, field: &'static str) -> Callback<String> {
        Callback::new(move |raw: String| self.set_value(field, Value::String(raw)))
    }

    /// Select handler for a reference id; "" clears the field
    pub fn id_input(self, field: &'static str) -> Callback<String> {
        Callback::new(move |raw: String| {
            let value = if raw.is_empty() {
                Value::Null
            } else {
                id_value(&EntityId::from_string(&raw))
            };
            self.set_value(field, value);
        })
    }

    /// Keep `field` pointing at the first entry of `list` while it is unset
    pub fn default_to_first<R>(self, field: &'static str, list: RwSignal<Vec<R>>)
    where
        R: Resource + Send + Sync,
    {
        Effect::new(move |_| {
            let first = list.with(|items| items.first().map(|item| item.id()));
            let unset = self
                .draft
                .with(|d| d.get(field).map_or(true, Value::is_null));
            if let (Some(id), true) = (first, unset) {
                self.set_value(field, id_value(&id));
            }
        });
    }

    pub fn reset(&self) {
        if let Some(initial) = self.initial.try_get_value() {
            self.draft.try_set(initial);
        }
    }

    /// Validate and POST the draft; on success the form resets and `on_created` runs
    pub fn submit<B>(&self, validate: fn(&B) -> Result<(), String>, on_created: Option<Callback<()>>)
    where
        B: serde::de::DeserializeOwned + serde::Serialize + 'static,
    {
        if self.submitting.get_untracked() {
            return;
        }
        let (Some(api), Some(services)) = (self.api.try_get_value(), self.services.try_get_value())
        else {
            return;
        };
        let draft = self.draft.get_untracked();
        let form = *self;
        self.submitting.set(true);

        spawn_local(async move {
            let outcome =
                submit_create::<B, _>(&api, &services, T::element_name(), &draft, validate).await;
            form.submitting.try_set(false);
            if outcome == MutationOutcome::Applied {
                form.reset();
                if let Some(callback) = on_created {
                    callback.run(());
                }
            }
        });
    }
}

/// Create form seeded from `initial`; `rules` keep computed totals in sync
pub fn use_create_form<T, B>(initial: &B, rules: Vec<DerivedTotal>) -> CreateForm<T>
where
    T: Resource,
    B: serde::Serialize,
{
    let initial = PendingEdits::from_serialize(initial);
    CreateForm {
        draft: RwSignal::new(initial.clone()),
        submitting: RwSignal::new(false),
        initial: StoredValue::new(initial),
        rules: StoredValue::new(rules),
        api: StoredValue::new_local(RestCollection::<T>::new(use_transport())),
        services: StoredValue::new_local(use_screen_services()),
    }
}
