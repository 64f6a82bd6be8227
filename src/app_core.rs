use std::cell::RefCell;
use std::rc::Rc;

use folio_core::{EntryId, ExpansionState, ThemePreference};

use crate::persisted_store;

pub(crate) type AppSubscriber = Rc<dyn Fn()>;

thread_local! {
    static SHARED_CORE: RefCell<Option<Rc<PortfolioCore>>> = RefCell::new(None);
}

/// Owner of the two pieces of mutable application state: the theme and the
/// flipped-open case study. Views read snapshots and subscribe for changes.
pub(crate) struct PortfolioCore {
    state: RefCell<PortfolioSnapshot>,
    subscribers: Rc<RefCell<Vec<AppSubscriber>>>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct PortfolioSnapshot {
    pub(crate) theme: ThemePreference,
    pub(crate) expansion: ExpansionState,
}

impl PortfolioCore {
    pub(crate) fn new(theme: ThemePreference) -> Rc<Self> {
        Rc::new(Self {
            state: RefCell::new(PortfolioSnapshot {
                theme,
                expansion: ExpansionState::new(),
            }),
            subscribers: Rc::new(RefCell::new(Vec::new())),
        })
    }

    /// Loads the stored theme and writes it straight back, so the key exists
    /// from the first visit on.
    pub(crate) fn load() -> Rc<Self> {
        let theme = persisted_store::load_theme();
        persisted_store::save_theme(theme);
        Self::new(theme)
    }

    pub(crate) fn shared() -> Rc<Self> {
        SHARED_CORE.with(|slot| {
            let mut slot = slot.borrow_mut();
            slot.get_or_insert_with(Self::load).clone()
        })
    }

    pub(crate) fn subscribe(&self, subscriber: AppSubscriber) -> AppSubscription {
        self.subscribers.borrow_mut().push(subscriber.clone());
        AppSubscription {
            subscriber,
            subscribers: Rc::clone(&self.subscribers),
        }
    }

    fn notify(&self) {
        let subscribers = self.subscribers.borrow().clone();
        for subscriber in subscribers {
            (subscriber)();
        }
    }

    pub(crate) fn snapshot(&self) -> PortfolioSnapshot {
        *self.state.borrow()
    }

    pub(crate) fn theme(&self) -> ThemePreference {
        self.state.borrow().theme
    }

    pub(crate) fn toggle_theme(&self) -> ThemePreference {
        let next = {
            let mut state = self.state.borrow_mut();
            state.theme = state.theme.toggled();
            state.theme
        };
        persisted_store::save_theme(next);
        self.notify();
        next
    }

    pub(crate) fn toggle_case_study(&self, id: EntryId) {
        {
            let mut state = self.state.borrow_mut();
            state.expansion = state.expansion.toggle(id);
        }
        self.notify();
    }
}

pub(crate) struct AppSubscription {
    subscriber: AppSubscriber,
    subscribers: Rc<RefCell<Vec<AppSubscriber>>>,
}

impl Drop for AppSubscription {
    fn drop(&mut self) {
        let mut subscribers = self.subscribers.borrow_mut();
        subscribers.retain(|item| !Rc::ptr_eq(item, &self.subscriber));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    use folio_core::{PreferenceStorage, THEME_STORAGE_KEY};
    use wasm_bindgen_test::*;

    use crate::persisted_store::LocalPreferences;

    wasm_bindgen_test_configure!(run_in_browser);

    fn reset_storage() {
        #[cfg(target_arch = "wasm32")]
        {
            let storage = web_sys::window().and_then(|window| window.local_storage().ok().flatten());
            if let Some(storage) = storage {
                let _ = storage.remove_item(THEME_STORAGE_KEY);
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            persisted_store::clear_memory();
        }
    }

    fn id(slug: &str) -> EntryId {
        EntryId::parse(slug).expect("slug in catalog")
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    #[cfg_attr(not(target_arch = "wasm32"), test)]
    fn first_visit_defaults_to_light_and_saves_it() {
        reset_storage();
        let core = PortfolioCore::load();
        assert_eq!(core.theme(), ThemePreference::Light);
        assert_eq!(
            LocalPreferences.read(THEME_STORAGE_KEY).as_deref(),
            Some("light")
        );
        assert!(!core.snapshot().expansion.any_expanded());
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    #[cfg_attr(not(target_arch = "wasm32"), test)]
    fn theme_toggle_survives_reload() {
        reset_storage();
        let core = PortfolioCore::load();
        assert_eq!(core.toggle_theme(), ThemePreference::Dark);
        assert_eq!(
            LocalPreferences.read(THEME_STORAGE_KEY).as_deref(),
            Some("dark")
        );
        let reloaded = PortfolioCore::load();
        assert_eq!(reloaded.theme(), ThemePreference::Dark);
        reset_storage();
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    #[cfg_attr(not(target_arch = "wasm32"), test)]
    fn subscribers_hear_every_toggle_until_dropped() {
        let core = PortfolioCore::new(ThemePreference::Light);
        let calls = Rc::new(Cell::new(0));
        let subscription = {
            let calls = calls.clone();
            core.subscribe(Rc::new(move || calls.set(calls.get() + 1)))
        };
        core.toggle_case_study(id("unified-auth"));
        core.toggle_case_study(id("digital-landscapes"));
        assert_eq!(calls.get(), 2);
        assert_eq!(
            core.snapshot().expansion.expanded(),
            Some(id("digital-landscapes"))
        );

        drop(subscription);
        core.toggle_case_study(id("digital-landscapes"));
        assert_eq!(calls.get(), 2);
        assert!(!core.snapshot().expansion.any_expanded());
    }
}
