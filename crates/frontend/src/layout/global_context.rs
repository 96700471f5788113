use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

use crate::layout::tabs::tab_label_for_key;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
    /// Distinguishes a reopened tab from its previous instance
    pub serial: u64,
}

/// Open tabs in display order plus the active one
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TabSet {
    tabs: Vec<Tab>,
    active: Option<String>,
    opened: u64,
}

impl TabSet {
    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.tabs.iter().any(|tab| tab.key == key)
    }

    /// Open (or just activate) a tab; returns true when it was newly added
    pub fn open(&mut self, key: &str, title: &str) -> bool {
        let added = !self.contains(key);
        if added {
            self.opened += 1;
            self.tabs.push(Tab {
                key: key.to_string(),
                title: title.to_string(),
                serial: self.opened,
            });
        }
        self.active = Some(key.to_string());
        added
    }

    pub fn activate(&mut self, key: &str) -> bool {
        if !self.contains(key) {
            return false;
        }
        self.active = Some(key.to_string());
        true
    }

    /// Close a tab; an active tab hands over to its right neighbour, else the new last tab
    pub fn close(&mut self, key: &str) {
        let Some(index) = self.tabs.iter().position(|tab| tab.key == key) else {
            return;
        };
        self.tabs.remove(index);
        if self.active.as_deref() == Some(key) {
            self.active = self
                .tabs
                .get(index)
                .or_else(|| self.tabs.last())
                .map(|tab| tab.key.clone());
        }
    }

    pub fn clear(&mut self) {
        self.tabs.clear();
        self.active = None;
    }
}

/// `?active=<key>` of the current URL
pub fn active_key_from_query(search: &str) -> Option<String> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.get("active").filter(|key| !key.is_empty()).cloned()
}

pub fn query_for_active(key: &str) -> String {
    let query = serde_qs::to_string(&HashMap::from([("active".to_string(), key.to_string())]))
        .unwrap_or_default();
    format!("?{}", query)
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub tabs: RwSignal<TabSet>,
    pub left_open: RwSignal<bool>,
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            tabs: RwSignal::new(TabSet::default()),
            left_open: RwSignal::new(true),
        }
    }

    /// Tracked key of the active tab
    pub fn active(&self) -> Option<String> {
        self.tabs.with(|set| set.active().map(str::to_string))
    }

    pub fn is_active(&self, key: &str) -> bool {
        self.tabs.with(|set| set.active() == Some(key))
    }

    /// Restore the active tab from the URL, then keep the URL in sync with it
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        match active_key_from_query(&search) {
            Some(key) => self.open_tab(&key, tab_label_for_key(&key)),
            None => self.open_tab("d400_overview", tab_label_for_key("d400_overview")),
        }

        let this = *self;
        Effect::new(move |_| {
            let Some(active_key) = this.active() else {
                return;
            };
            let new_url = query_for_active(&active_key);
            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            if current_search == new_url {
                return;
            }
            if let Some(history) = window().and_then(|w| w.history().ok()) {
                let _ = history.replace_state_with_url(
                    &wasm_bindgen::JsValue::NULL,
                    "",
                    Some(&new_url),
                );
            }
        });
    }

    pub fn open_tab(&self, key: &str, title: &str) {
        log::debug!("open_tab: key='{}'", key);
        self.tabs.update(|set| {
            set.open(key, title);
        });
    }

    /// Close and reopen, so the screen mounts again and refetches
    pub fn reopen_tab(&self, key: &str, title: &str) {
        self.tabs.update(|set| {
            set.close(key);
            set.open(key, title);
        });
    }

    pub fn activate_tab(&self, key: &str) {
        self.tabs.update(|set| {
            set.activate(key);
        });
    }

    pub fn close_tab(&self, key: &str) {
        log::debug!("close_tab: key='{}'", key);
        self.tabs.update(|set| set.close(key));
    }

    pub fn close_all(&self) {
        self.tabs.try_update(|set| set.clear());
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}
