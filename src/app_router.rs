use std::cell::RefCell;
use std::rc::Rc;

use folio_core::Route;
use gloo::events::EventListener;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;
use web_sys::MouseEvent;

const DEFAULT_RESUME_HREF: &str = "/resume.pdf";
pub(crate) const ILLUSTRATION_SRC: &str = "/illustration.svg";

thread_local! {
    static ROUTE_HOOKS: RefCell<Vec<(u64, Rc<dyn Fn(Route)>)>> = RefCell::new(Vec::new());
    static NEXT_HOOK_ID: RefCell<u64> = RefCell::new(1);
}

pub(crate) fn current_route() -> Route {
    let Some(window) = web_sys::window() else {
        return Route::Home;
    };
    let path = window.location().pathname().unwrap_or_default();
    Route::parse(&path)
}

/// Pushes a history entry for `route` and tells every route hook.
pub(crate) fn navigate(route: Route) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let path = route.path();
            if let Ok(history) = window.history() {
                if let Err(err) = history.push_state_with_url(&JsValue::NULL, "", Some(&path)) {
                    gloo::console::warn!("history push failed", path.clone(), err);
                    let _ = window.location().set_href(&path);
                    return;
                }
            }
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }
    notify_route(route);
}

fn notify_route(route: Route) {
    let hooks: Vec<Rc<dyn Fn(Route)>> =
        ROUTE_HOOKS.with(|hooks| hooks.borrow().iter().map(|(_, hook)| hook.clone()).collect());
    for hook in hooks {
        hook(route);
    }
}

pub(crate) fn add_route_hook(hook: Rc<dyn Fn(Route)>) -> u64 {
    ROUTE_HOOKS.with(|hooks| {
        let mut hooks = hooks.borrow_mut();
        let id = NEXT_HOOK_ID.with(|next| {
            let mut next = next.borrow_mut();
            let id = *next;
            *next = next.saturating_add(1);
            id
        });
        hooks.push((id, hook));
        id
    })
}

pub(crate) fn remove_route_hook(id: u64) {
    ROUTE_HOOKS.with(|hooks| {
        hooks.borrow_mut().retain(|(hook_id, _)| *hook_id != id);
    });
}

/// Back/forward buttons re-read the location.
pub(crate) fn listen_popstate() -> Option<EventListener> {
    let window = web_sys::window()?;
    Some(EventListener::new(&window, "popstate", move |_| {
        notify_route(current_route());
    }))
}

pub(crate) fn apply_document_title(route: Route) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    document.set_title(&route.title());
}

/// Plain primary-button clicks are handled in-app; anything with a modifier
/// (new tab, new window, download) is left to the browser.
pub(crate) fn should_intercept_click(event: &MouseEvent) -> bool {
    event.button() == 0
        && !event.ctrl_key()
        && !event.meta_key()
        && !event.shift_key()
        && !event.alt_key()
}

pub(crate) fn resume_href() -> String {
    if let Some(raw) =
        option_env!("FOLIO_RESUME_HREF").or(option_env!("TRUNK_PUBLIC_FOLIO_RESUME_HREF"))
    {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }
    DEFAULT_RESUME_HREF.to_string()
}
