mod app_core;
mod app_router;
mod parallax_runtime;
mod persisted_store;
mod yew_app;

use crate::app_core::PortfolioCore;

fn main() {
    console_error_panic_hook::set_once();
    let core = PortfolioCore::shared();
    gloo::console::log!(
        "folio starting",
        core.theme().as_str(),
        app_router::current_route().path()
    );
    yew_app::run(core);
}
