use super::{ListItem, ListViewModel};
use leptos::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Storage for a [`ListViewModel`] shared between a screen and its async tasks.
///
/// Both methods return `None` once the storage is gone (e.g. a disposed
/// signal), so late task completions fall through silently.
pub trait ViewModelCell<T: ListItem>: Clone + 'static {
    fn modify<R>(&self, f: impl FnOnce(&mut ListViewModel<T>) -> R) -> Option<R>;

    fn inspect<R>(&self, f: impl FnOnce(&ListViewModel<T>) -> R) -> Option<R>;
}

impl<T: ListItem> ViewModelCell<T> for RwSignal<ListViewModel<T>> {
    fn modify<R>(&self, f: impl FnOnce(&mut ListViewModel<T>) -> R) -> Option<R> {
        self.try_update(f)
    }

    fn inspect<R>(&self, f: impl FnOnce(&ListViewModel<T>) -> R) -> Option<R> {
        self.try_with_untracked(f)
    }
}

impl<T: ListItem> ViewModelCell<T> for Rc<RefCell<ListViewModel<T>>> {
    fn modify<R>(&self, f: impl FnOnce(&mut ListViewModel<T>) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }

    fn inspect<R>(&self, f: impl FnOnce(&ListViewModel<T>) -> R) -> Option<R> {
        Some(f(&self.borrow()))
    }
}
