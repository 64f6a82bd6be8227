use std::rc::Rc;

use folio_core::view::{CardDetail, CardSummary, ThemeChrome};
use folio_core::{compose, CaseStudySection, EntryId, ParallaxFrame, Route, ThemePreference};
use web_sys::{Element, KeyboardEvent, MouseEvent};
use yew::prelude::*;

use crate::app_core::{PortfolioCore, PortfolioSnapshot};
use crate::app_router;
use crate::parallax_runtime::ParallaxRuntime;

const HERO_GREETING: &str = "Hi, I'm Yazhen.";
const ABOUT_TEXT: &str = "I’ve worked across industries and problem spaces — from helping government teams improve access to digital services, to enabling global music editors to localize content at scale. Whether I'm building from 0–1 or scaling a system, I focus on clarity, collaboration, and designing for real-world complexity.";

#[derive(Properties)]
pub(crate) struct AppProps {
    pub(crate) core: Rc<PortfolioCore>,
}

impl PartialEq for AppProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.core, &other.core)
    }
}

#[function_component(App)]
pub(crate) fn app(props: &AppProps) -> Html {
    let core = props.core.clone();
    let snapshot = use_state(|| core.snapshot());
    let route = use_state(app_router::current_route);

    {
        let core = core.clone();
        let snapshot = snapshot.clone();
        use_effect_with((), move |_| {
            let core_for_cb = core.clone();
            let subscription = core.subscribe(Rc::new(move || {
                snapshot.set(core_for_cb.snapshot());
            }));
            move || drop(subscription)
        });
    }

    {
        let route = route.clone();
        use_effect_with((), move |_| {
            let hook_id = app_router::add_route_hook(Rc::new(move |next: Route| route.set(next)));
            let popstate = app_router::listen_popstate();
            move || {
                app_router::remove_route_hook(hook_id);
                drop(popstate);
            }
        });
    }

    let theme = snapshot.theme;
    use_effect_with(theme, move |theme| {
        apply_body_theme(*theme);
        || ()
    });

    let route_value = *route;
    use_effect_with(route_value, move |route| {
        app_router::apply_document_title(*route);
        || ()
    });

    let on_theme_toggle = {
        let core = core.clone();
        Callback::from(move |_: MouseEvent| {
            let next = core.toggle_theme();
            gloo::console::log!("theme", next.as_str());
        })
    };

    let page = match route_value {
        Route::Home => html! { <HomeView core={core.clone()} snapshot={*snapshot} /> },
        Route::CaseStudy(id) => html! { <CaseStudyPageView id={id} /> },
        Route::NotFound => html! { <NotFoundView /> },
    };

    html! {
        <>
            <ThemeToggle theme={theme} onclick={on_theme_toggle} />
            {page}
        </>
    }
}

fn apply_body_theme(theme: ThemePreference) {
    let Some(body) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
    else {
        return;
    };
    let _ = body.set_attribute("data-theme", theme.as_str());
}

#[derive(Properties, PartialEq)]
struct ThemeToggleProps {
    theme: ThemePreference,
    onclick: Callback<MouseEvent>,
}

#[function_component(ThemeToggle)]
fn theme_toggle(props: &ThemeToggleProps) -> Html {
    let chrome = folio_core::view::theme_chrome(props.theme);
    html! {
        <button
            class="theme-toggle"
            type="button"
            aria-label={chrome.toggle_label}
            title={chrome.toggle_label}
            onclick={props.onclick.clone()}
        >
            { chrome.toggle_glyph }
        </button>
    }
}

#[derive(Properties, PartialEq)]
struct RouteLinkProps {
    to: Route,
    #[prop_or_default]
    class: Classes,
    #[prop_or_default]
    children: Html,
}

#[function_component(RouteLink)]
fn route_link(props: &RouteLinkProps) -> Html {
    let to = props.to;
    let onclick = Callback::from(move |event: MouseEvent| {
        if !app_router::should_intercept_click(&event) {
            return;
        }
        event.prevent_default();
        app_router::navigate(to);
    });
    html! {
        <a class={props.class.clone()} href={to.path()} {onclick}>
            { props.children.clone() }
        </a>
    }
}

#[derive(Properties)]
struct HomeViewProps {
    core: Rc<PortfolioCore>,
    snapshot: PortfolioSnapshot,
}

impl PartialEq for HomeViewProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.core, &other.core) && self.snapshot == other.snapshot
    }
}

#[function_component(HomeView)]
fn home_view(props: &HomeViewProps) -> Html {
    let runtime = use_memo((), |_| ParallaxRuntime::new());
    let frame = use_state(ParallaxFrame::default);
    let container_ref = use_node_ref();

    {
        let runtime = runtime.clone();
        let frame = frame.clone();
        use_effect_with((), move |_| {
            runtime.set_subscriber(Some(Rc::new(move |next: ParallaxFrame| frame.set(next))));
            move || {
                runtime.set_subscriber(None);
                runtime.stop();
            }
        });
    }

    let on_pointer_move = {
        let runtime = runtime.clone();
        let container_ref = container_ref.clone();
        Callback::from(move |event: MouseEvent| {
            if let Some(container) = container_ref.cast::<Element>() {
                runtime.on_pointer_move(&container, &event);
            }
        })
    };

    let view = compose(props.snapshot.theme, &props.snapshot.expansion, &frame);
    let on_toggle = {
        let core = props.core.clone();
        Callback::from(move |id: EntryId| core.toggle_case_study(id))
    };

    html! {
        <div class="page" ref={container_ref} onmousemove={on_pointer_move}>
            <Backdrop chrome={view.chrome} rose={view.layers.rose.clone()} sky={view.layers.sky.clone()} heading={view.layers.heading.clone()} />
            <WaveBackground fills={view.chrome.wave_fills} />
            <section class="hero">
                <div class="hero-inner">
                    <h1 class="hero-title" style={format!("transform: {}", view.layers.heading)}>
                        { HERO_GREETING }
                    </h1>
                    <div class="hero-body">
                        <p>
                            { "I'm currently a Sr product designer at " }
                            <a href="#" class="inline-link">{ "CLEAR" }</a>
                            { " working on a B2B console and the end user identity verification experiences. I have previously worked at Spotify, where I focused on building internal tooling, and at ICF Next in gov-tech." }
                        </p>
                        <p>{ "I love designing delightful experiences that can improve people's lives." }</p>
                        <a class="resume-link" href={app_router::resume_href()} download="">
                            { "Download my resume" }
                        </a>
                    </div>
                </div>
            </section>
            <section class="about">
                <h2 class="section-title">{ "About" }</h2>
                <p>{ ABOUT_TEXT }</p>
            </section>
            <section class="case-studies">
                <h2 class="section-title">{ "Case Studies" }</h2>
                { render_case_studies(&view.case_studies, &on_toggle) }
            </section>
        </div>
    }
}

fn render_case_studies(section: &CaseStudySection, on_toggle: &Callback<EntryId>) -> Html {
    let body = match section {
        CaseStudySection::Grid(cards) => html! {
            <div class="bento-grid">
                { for cards.iter().map(|card| render_card(card, on_toggle)) }
            </div>
        },
        CaseStudySection::Detail(detail) => render_detail(detail, on_toggle),
    };
    html! {
        <div key={section.transition_key()} class={classes!("flip", section.transition_key())}>
            {body}
        </div>
    }
}

/// Keys that press a focused `role="button"` element.
fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}

fn render_card(card: &CardSummary, on_toggle: &Callback<EntryId>) -> Html {
    let id = card.id;
    let onclick = on_toggle.reform(move |_: MouseEvent| id);
    let onkeydown = on_toggle.filter_reform(move |event: KeyboardEvent| {
        if !is_activation_key(&event.key()) {
            return None;
        }
        event.prevent_default();
        Some(id)
    });
    let onkeydown = Callback::from(move |event: KeyboardEvent| {
        onkeydown.emit(event);
    });
    let summary = card
        .summary
        .map(|summary| html! { <p class="card-summary">{ summary }</p> })
        .unwrap_or_default();
    html! {
        <article
            key={id.slug()}
            class={classes!("card", card.layout_class)}
            style={format!("animation-delay: {:.1}s", card.enter_delay_secs)}
            role="button"
            tabindex="0"
            {onclick}
            {onkeydown}
        >
            <div class="card-body">
                <div>
                    <h3 class="card-title">{ card.title }</h3>
                    <p class="card-org">{ card.organization }</p>
                    {summary}
                </div>
                <div class="card-more">{ "Read more →" }</div>
            </div>
        </article>
    }
}

fn render_detail(detail: &CardDetail, on_toggle: &Callback<EntryId>) -> Html {
    let id = detail.id;
    let onclick = on_toggle.reform(move |_: MouseEvent| id);
    html! {
        <article class="detail-panel" key={id.slug()}>
            <header>
                <h3 class="detail-title">{ detail.title }</h3>
                <p class="detail-org">{ detail.organization }</p>
            </header>
            <section>
                <h4>{ "Context" }</h4>
                <p>{ detail.context }</p>
            </section>
            { for detail.lists.iter().map(|list| html! {
                <section>
                    <h4>{ list.heading }</h4>
                    <ul>
                        { for list.items.iter().map(|item| html! { <li>{ *item }</li> }) }
                    </ul>
                </section>
            }) }
            <button class="detail-back" type="button" {onclick}>
                { "← Back to all case studies" }
            </button>
            <RouteLink to={Route::CaseStudy(id)} class={classes!("detail-page-link")}>
                { "Open full case study →" }
            </RouteLink>
        </article>
    }
}

#[derive(Properties, PartialEq)]
struct BackdropProps {
    chrome: ThemeChrome,
    heading: String,
    rose: String,
    sky: String,
}

#[function_component(Backdrop)]
fn backdrop(props: &BackdropProps) -> Html {
    html! {
        <div class="backdrop" aria-hidden="true" data-theme={props.chrome.theme_attr}>
            <div class="blob blob-sun" style={format!("transform: {}", props.heading)}>
                <div class="blob-fill blob-sun-fill" />
            </div>
            <div class="blob blob-rose" />
            <div class="blob blob-sky" />
            <div class="blob blob-lilac" />
            <div class="blob blob-illustration">
                <img src={app_router::ILLUSTRATION_SRC} alt="Illustration" />
            </div>
            <div class="blob blob-rose overlay" style={format!("transform: {}", props.rose)} />
            <div class="blob blob-sky overlay" style={format!("transform: {}", props.sky)} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct WaveBackgroundProps {
    fills: [&'static str; 3],
}

const WAVE_PATHS: [&str; 3] = [
    "M0,100 C240,40 480,160 720,100 C960,40 1200,160 1440,100 L1440,320 L0,320 Z",
    "M0,80 C360,20 720,140 1080,80 C1260,50 1350,110 1440,80 L1440,320 L0,320 Z",
    "M0,60 C480,10 600,120 960,60 C1080,30 1260,90 1440,60 L1440,320 L0,320 Z",
];
const WAVE_CLASSES: [&str; 3] = ["wave wave-back", "wave wave-middle", "wave wave-front"];

#[function_component(WaveBackground)]
fn wave_background(props: &WaveBackgroundProps) -> Html {
    html! {
        <div class="waves" aria-hidden="true">
            { for (0..3).map(|layer| html! {
                <svg class={WAVE_CLASSES[layer]} viewBox="0 0 1440 320" preserveAspectRatio="none">
                    <path fill={props.fills[layer]} d={WAVE_PATHS[layer]} />
                </svg>
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct CaseStudyPageProps {
    id: EntryId,
}

#[function_component(CaseStudyPageView)]
fn case_study_page_view(props: &CaseStudyPageProps) -> Html {
    let entry = props.id.entry();
    let page = &entry.page;
    let list = |items: &'static [&'static str]| {
        html! {
            <ul class="page-list">
                { for items.iter().map(|item| html! { <li>{ *item }</li> }) }
            </ul>
        }
    };
    html! {
        <main class="case-study-page">
            <RouteLink to={Route::Home} class={classes!("back-link")}>
                { "← Back to Home" }
            </RouteLink>
            <h1 class="page-title">{ page.headline }</h1>
            <p class="page-org">{ entry.organization }</p>
            <PageSection title="Context">{ page.context }</PageSection>
            <PageSection title="Challenges">{ list(page.challenges) }</PageSection>
            <PageSection title="Solution">{ list(page.solution) }</PageSection>
            <PageSection title="Outcome & Impact">{ list(page.outcome) }</PageSection>
            <PageSection title="Reflection">{ page.reflection }</PageSection>
        </main>
    }
}

#[derive(Properties, PartialEq)]
struct PageSectionProps {
    title: AttrValue,
    #[prop_or_default]
    children: Html,
}

#[function_component(PageSection)]
fn page_section(props: &PageSectionProps) -> Html {
    html! {
        <section class="page-section">
            <h2>{ props.title.clone() }</h2>
            <div>{ props.children.clone() }</div>
        </section>
    }
}

#[function_component(NotFoundView)]
fn not_found_view() -> Html {
    html! {
        <main class="case-study-page">
            <h1 class="page-title">{ "Page not found" }</h1>
            <p>{ "There is nothing at this address." }</p>
            <RouteLink to={Route::Home} class={classes!("back-link")}>
                { "← Back to Home" }
            </RouteLink>
        </main>
    }
}

pub(crate) fn run(core: Rc<PortfolioCore>) {
    yew::Renderer::<App>::with_props(AppProps { core }).render();
}
