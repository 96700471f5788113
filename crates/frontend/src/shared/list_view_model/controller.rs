use super::{ListItem, LoadOutcome, PendingEdits, ViewModelCell};
use crate::shared::api::{ApiError, ApiResult, Credential, CredentialSource, RestCollection};
use crate::shared::notify::{Confirm, Notifier};
use async_trait::async_trait;
use contracts::domain::common::{EntityId, Resource};
use std::marker::PhantomData;
use std::rc::Rc;

/// Remote side of a list screen
#[async_trait(?Send)]
pub trait CollectionApi<T> {
    async fn fetch_all(&self, credential: &Credential) -> ApiResult<Vec<T>>;

    async fn update(
        &self,
        credential: &Credential,
        id: &EntityId,
        changes: &PendingEdits,
    ) -> ApiResult<()>;

    async fn delete(&self, credential: &Credential, id: &EntityId) -> ApiResult<()>;
}

#[async_trait(?Send)]
impl<T: Resource> CollectionApi<T> for RestCollection<T> {
    async fn fetch_all(&self, credential: &Credential) -> ApiResult<Vec<T>> {
        self.list(credential).await
    }

    async fn update(
        &self,
        credential: &Credential,
        id: &EntityId,
        changes: &PendingEdits,
    ) -> ApiResult<()> {
        RestCollection::update(self, credential, id, changes).await
    }

    async fn delete(&self, credential: &Credential, id: &EntityId) -> ApiResult<()> {
        RestCollection::delete(self, credential, id).await
    }
}

/// Collaborators every screen needs besides its collection
#[derive(Clone)]
pub struct ScreenServices {
    pub credentials: Rc<dyn CredentialSource>,
    pub notifier: Rc<dyn Notifier>,
    pub confirm: Rc<dyn Confirm>,
}

impl ScreenServices {
    /// Current credential; a missing one sends the user to the login page
    pub fn require_credential(&self) -> ApiResult<Credential> {
        self.credentials.credential().ok_or_else(|| {
            self.credentials.invalidate();
            ApiError::MissingCredential
        })
    }

    /// Log the failure, tell the user, and drop the session on auth errors
    pub fn report(&self, context: &str, err: &ApiError) {
        log::warn!("{}: {} [{}]", context, err, err.kind());
        self.notifier
            .error(&format!("{}: {}", context, err.user_message()));
        if err.requires_login() {
            self.credentials.invalidate();
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MutationOutcome {
    /// The user answered "no" at the confirmation gate
    Declined,
    NothingToSave,
    /// Refused locally (invalid form data); nothing was sent
    Rejected(String),
    Applied,
    Failed(ApiError),
}

/// Drives load, save and remove for one list screen
pub struct ListController<T: ListItem, C: ViewModelCell<T>> {
    cell: C,
    api: Rc<dyn CollectionApi<T>>,
    services: ScreenServices,
    element: &'static str,
    _item: PhantomData<T>,
}

impl<T: ListItem, C: ViewModelCell<T>> Clone for ListController<T, C> {
    fn clone(&self) -> Self {
        Self {
            cell: self.cell.clone(),
            api: Rc::clone(&self.api),
            services: self.services.clone(),
            element: self.element,
            _item: PhantomData,
        }
    }
}

impl<T: ListItem, C: ViewModelCell<T>> ListController<T, C> {
    /// `element` is the human name of one record ("Order", "Client")
    pub fn new(
        cell: C,
        api: Rc<dyn CollectionApi<T>>,
        services: ScreenServices,
        element: &'static str,
    ) -> Self {
        Self {
            cell,
            api,
            services,
            element,
            _item: PhantomData,
        }
    }

    pub fn cell(&self) -> &C {
        &self.cell
    }

    pub fn services(&self) -> &ScreenServices {
        &self.services
    }

    /// Fetch the collection and replace the snapshot, unless a newer load overtook this one
    pub async fn load(&self) -> LoadOutcome {
        let Some(ticket) = self.cell.modify(|vm| vm.begin_load()) else {
            return LoadOutcome::Discarded;
        };
        log::debug!("loading {} list", self.element);
        let result = match self.services.require_credential() {
            Ok(credential) => self.api.fetch_all(&credential).await,
            Err(err) => Err(err),
        };
        let outcome = self
            .cell
            .modify(|vm| vm.finish_load(ticket, result))
            .unwrap_or(LoadOutcome::Discarded);

        match &outcome {
            LoadOutcome::Replaced(count) => {
                log::info!("{} list loaded: {} records", self.element, count)
            }
            LoadOutcome::Failed(err) => self.services.report("Failed to load data", err),
            LoadOutcome::Discarded => log::debug!("{} list response discarded", self.element),
        }
        outcome
    }

    /// Persist the pending edits of one record, then resynchronize
    pub async fn save(&self, id: &EntityId) -> MutationOutcome {
        let Some(changes) = self.cell.inspect(|vm| vm.pending(id).cloned()).flatten() else {
            return MutationOutcome::NothingToSave;
        };
        let question = format!("Save changes to this {}?", self.element.to_lowercase());
        if !self.services.confirm.confirm(&question) {
            return MutationOutcome::Declined;
        }

        let result = match self.services.require_credential() {
            Ok(credential) => self.api.update(&credential, id, &changes).await,
            Err(err) => Err(err),
        };
        match result {
            Ok(()) => {
                log::info!("{} {} updated", self.element, id);
                self.cell.modify(|vm| vm.mark_saved(id, &changes));
                self.services
                    .notifier
                    .success(&format!("{} updated successfully", self.element));
                self.load().await;
                MutationOutcome::Applied
            }
            Err(err) => {
                let context = format!("Failed to update {}", self.element.to_lowercase());
                self.services.report(&context, &err);
                MutationOutcome::Failed(err)
            }
        }
    }

    /// Delete one record; it leaves the list only after the server confirmed
    pub async fn remove(&self, id: &EntityId) -> MutationOutcome {
        let question = format!(
            "Are you sure you want to delete this {}?",
            self.element.to_lowercase()
        );
        if !self.services.confirm.confirm(&question) {
            return MutationOutcome::Declined;
        }

        let result = match self.services.require_credential() {
            Ok(credential) => self.api.delete(&credential, id).await,
            Err(err) => Err(err),
        };
        match result {
            Ok(()) => {
                log::info!("{} {} deleted", self.element, id);
                self.cell.modify(|vm| vm.remove(id));
                self.services
                    .notifier
                    .success(&format!("{} deleted successfully", self.element));
                MutationOutcome::Applied
            }
            Err(err) => {
                let context = format!("Failed to delete {}", self.element.to_lowercase());
                self.services.report(&context, &err);
                MutationOutcome::Failed(err)
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::shared::list_view_model::tests::{row, Row};
    use crate::shared::list_view_model::ListViewModel;
    use crate::shared::notify::ToastKind;
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;

    type Loads = VecDeque<oneshot::Receiver<ApiResult<Vec<Row>>>>;

    #[derive(Default)]
    struct FakeApi {
        loads: RefCell<Loads>,
        updates: RefCell<VecDeque<ApiResult<()>>>,
        deletes: RefCell<VecDeque<ApiResult<()>>>,
        sent: RefCell<Vec<(EntityId, Value)>>,
        deleted: RefCell<Vec<EntityId>>,
    }

    impl FakeApi {
        fn load_now(&self, rows: Vec<Row>) {
            let (tx, rx) = oneshot::channel();
            let _ = tx.send(Ok(rows));
            self.loads.borrow_mut().push_back(rx);
        }

        fn load_later(&self) -> oneshot::Sender<ApiResult<Vec<Row>>> {
            let (tx, rx) = oneshot::channel();
            self.loads.borrow_mut().push_back(rx);
            tx
        }
    }

    #[async_trait(?Send)]
    impl CollectionApi<Row> for FakeApi {
        async fn fetch_all(&self, _credential: &Credential) -> ApiResult<Vec<Row>> {
            let next = self.loads.borrow_mut().pop_front();
            match next {
                Some(rx) => rx
                    .await
                    .unwrap_or_else(|_| Err(ApiError::Network("dropped".into()))),
                None => Ok(Vec::new()),
            }
        }

        async fn update(
            &self,
            _credential: &Credential,
            id: &EntityId,
            changes: &PendingEdits,
        ) -> ApiResult<()> {
            self.sent.borrow_mut().push((id.clone(), changes.to_json()));
            self.updates.borrow_mut().pop_front().unwrap_or(Ok(()))
        }

        async fn delete(&self, _credential: &Credential, id: &EntityId) -> ApiResult<()> {
            self.deleted.borrow_mut().push(id.clone());
            self.deletes.borrow_mut().pop_front().unwrap_or(Ok(()))
        }
    }

    pub(crate) struct FakeCredentials {
        pub token: RefCell<Option<Credential>>,
        pub invalidated: Cell<bool>,
    }

    impl FakeCredentials {
        pub fn signed_in() -> Self {
            Self {
                token: RefCell::new(Some(Credential::new("t"))),
                invalidated: Cell::new(false),
            }
        }
    }

    impl CredentialSource for FakeCredentials {
        fn credential(&self) -> Option<Credential> {
            self.token.borrow().clone()
        }

        fn invalidate(&self) {
            self.token.replace(None);
            self.invalidated.set(true);
        }
    }

    #[derive(Default)]
    pub(crate) struct RecordingNotifier {
        pub messages: RefCell<Vec<(ToastKind, String)>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, kind: ToastKind, message: String) {
            self.messages.borrow_mut().push((kind, message));
        }
    }

    pub(crate) struct FixedConfirm {
        pub answer: Cell<bool>,
        pub asked: Cell<usize>,
    }

    impl FixedConfirm {
        pub fn yes() -> Self {
            Self {
                answer: Cell::new(true),
                asked: Cell::new(0),
            }
        }
    }

    impl Confirm for FixedConfirm {
        fn confirm(&self, _message: &str) -> bool {
            self.asked.set(self.asked.get() + 1);
            self.answer.get()
        }
    }

    struct Harness {
        api: Rc<FakeApi>,
        credentials: Rc<FakeCredentials>,
        notifier: Rc<RecordingNotifier>,
        confirm: Rc<FixedConfirm>,
        cell: Rc<RefCell<ListViewModel<Row>>>,
        controller: ListController<Row, Rc<RefCell<ListViewModel<Row>>>>,
    }

    fn harness() -> Harness {
        let api = Rc::new(FakeApi::default());
        let credentials = Rc::new(FakeCredentials::signed_in());
        let notifier = Rc::new(RecordingNotifier::default());
        let confirm = Rc::new(FixedConfirm::yes());
        let cell = Rc::new(RefCell::new(ListViewModel::new()));
        let services = ScreenServices {
            credentials: credentials.clone(),
            notifier: notifier.clone(),
            confirm: confirm.clone(),
        };
        let controller = ListController::new(cell.clone(), api.clone(), services, "Order");
        Harness {
            api,
            credentials,
            notifier,
            confirm,
            cell,
            controller,
        }
    }

    fn last_message(h: &Harness) -> (ToastKind, String) {
        h.notifier.messages.borrow().last().cloned().unwrap()
    }

    fn snapshot_len(h: &Harness) -> usize {
        h.cell.borrow().snapshot().len()
    }

    #[test]
    fn test_load_replaces_snapshot() {
        let h = harness();
        h.api.load_now(vec![row(1, "a", false), row(2, "b", true)]);
        assert_eq!(block_on(h.controller.load()), LoadOutcome::Replaced(2));
        assert_eq!(snapshot_len(&h), 2);
    }

    #[test]
    fn test_latest_load_wins_regardless_of_arrival() {
        let h = harness();
        let old = h.api.load_later();
        let new = h.api.load_later();

        let (first, second, _) = block_on(async {
            futures::join!(h.controller.load(), h.controller.load(), async {
                let _ = new.send(Ok(vec![row(2, "new", false)]));
                let _ = old.send(Ok(vec![row(1, "old", false), row(3, "old", false)]));
            })
        });

        assert_eq!(first, LoadOutcome::Discarded);
        assert_eq!(second, LoadOutcome::Replaced(1));
        assert_eq!(h.cell.borrow().snapshot()[0].name, "new");
    }

    #[test]
    fn test_detached_screen_ignores_late_response() {
        let h = harness();
        let pending = h.api.load_later();

        let (outcome, _) = block_on(async {
            futures::join!(h.controller.load(), async {
                h.cell.borrow_mut().detach();
                let _ = pending.send(Ok(vec![row(1, "a", false)]));
            })
        });

        assert_eq!(outcome, LoadOutcome::Discarded);
        assert_eq!(snapshot_len(&h), 0);
    }

    #[test]
    fn test_load_failure_notifies() {
        let h = harness();
        let failing = h.api.load_later();
        let _ = failing.send(Err(ApiError::Server {
            status: 500,
            message: Some("db down".into()),
        }));

        let outcome = block_on(h.controller.load());
        assert!(matches!(outcome, LoadOutcome::Failed(_)));
        assert_eq!(
            last_message(&h),
            (ToastKind::Error, "Failed to load data: db down".to_string())
        );
    }

    #[test]
    fn test_save_sends_pending_then_reloads() {
        let h = harness();
        h.api.load_now(vec![row(7, "a", false)]);
        block_on(h.controller.load());
        let id = EntityId::Int(7);
        h.cell.borrow_mut().edit(&id, "paid", json!(true));

        h.api.load_now(vec![row(7, "a", true)]);
        assert_eq!(block_on(h.controller.save(&id)), MutationOutcome::Applied);

        assert_eq!(h.api.sent.borrow().clone(), vec![(id.clone(), json!({"paid": true}))]);
        assert!(!h.cell.borrow().is_dirty(&id));
        assert!(h.cell.borrow().find(&id).unwrap().paid);
        assert_eq!(
            last_message(&h),
            (ToastKind::Success, "Order updated successfully".to_string())
        );
    }

    #[test]
    fn test_save_failure_keeps_edits() {
        let h = harness();
        h.api.load_now(vec![row(7, "a", false)]);
        block_on(h.controller.load());
        let id = EntityId::Int(7);
        h.cell.borrow_mut().edit(&id, "paid", json!(true));
        h.api.updates.borrow_mut().push_back(Err(ApiError::Network("offline".into())));

        let outcome = block_on(h.controller.save(&id));
        assert!(matches!(outcome, MutationOutcome::Failed(ApiError::Network(_))));
        assert!(h.cell.borrow().is_dirty(&id));
        assert_eq!(h.cell.borrow().value(&id, "paid"), Some(json!(true)));
        assert_eq!(last_message(&h).0, ToastKind::Error);
    }

    #[test]
    fn test_save_without_edits_asks_nothing() {
        let h = harness();
        h.api.load_now(vec![row(7, "a", false)]);
        block_on(h.controller.load());

        assert_eq!(
            block_on(h.controller.save(&EntityId::Int(7))),
            MutationOutcome::NothingToSave
        );
        assert_eq!(h.confirm.asked.get(), 0);
        assert!(h.api.sent.borrow().is_empty());
    }

    #[test]
    fn test_declined_confirmation_sends_nothing() {
        let h = harness();
        h.api.load_now(vec![row(7, "a", false)]);
        block_on(h.controller.load());
        let id = EntityId::Int(7);
        h.cell.borrow_mut().edit(&id, "paid", json!(true));
        h.confirm.answer.set(false);

        assert_eq!(block_on(h.controller.save(&id)), MutationOutcome::Declined);
        assert_eq!(block_on(h.controller.remove(&id)), MutationOutcome::Declined);
        assert!(h.api.sent.borrow().is_empty());
        assert!(h.api.deleted.borrow().is_empty());
        assert!(h.cell.borrow().is_dirty(&id));
    }

    #[test]
    fn test_remove_success_drops_record() {
        let h = harness();
        h.api.load_now(vec![row(1, "a", false), row(2, "b", false)]);
        block_on(h.controller.load());

        assert_eq!(
            block_on(h.controller.remove(&EntityId::Int(1))),
            MutationOutcome::Applied
        );
        assert_eq!(snapshot_len(&h), 1);
        assert_eq!(h.cell.borrow().projection().len(), 1);
        assert_eq!(
            last_message(&h),
            (ToastKind::Success, "Order deleted successfully".to_string())
        );
    }

    #[test]
    fn test_remove_failure_keeps_record_and_edits() {
        let h = harness();
        h.api.load_now(vec![row(1, "a", false)]);
        block_on(h.controller.load());
        let id = EntityId::Int(1);
        h.cell.borrow_mut().edit(&id, "paid", json!(true));
        h.api.deletes.borrow_mut().push_back(Err(ApiError::Server {
            status: 500,
            message: None,
        }));

        let outcome = block_on(h.controller.remove(&id));
        assert!(matches!(outcome, MutationOutcome::Failed(_)));
        assert_eq!(snapshot_len(&h), 1);
        assert!(h.cell.borrow().is_dirty(&id));
        assert_eq!(
            last_message(&h).1,
            "Failed to delete order: An error occurred on the server."
        );
    }

    #[test]
    fn test_unauthorized_invalidates_session() {
        let h = harness();
        h.api.load_now(vec![row(1, "a", false)]);
        block_on(h.controller.load());
        h.api.deletes.borrow_mut().push_back(Err(ApiError::Unauthorized {
            status: 401,
            message: None,
        }));

        block_on(h.controller.remove(&EntityId::Int(1)));
        assert!(h.credentials.invalidated.get());
        assert!(h.credentials.credential().is_none());
    }

    #[test]
    fn test_missing_credential_skips_request() {
        let h = harness();
        h.credentials.token.replace(None);

        let outcome = block_on(h.controller.load());
        assert_eq!(outcome, LoadOutcome::Failed(ApiError::MissingCredential));
        assert!(h.credentials.invalidated.get());
        assert!(h.api.loads.borrow().is_empty());
    }
}
