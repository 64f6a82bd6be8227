use folio_core::view::card_summaries;
use folio_core::{
    compose, initial_theme, CaseStudySection, EntryId, ExpansionState, MemoryStorage,
    ParallaxFrame, PointerOffset, ThemePreference, CASE_STUDY_COUNT,
};

fn id(slug: &str) -> EntryId {
    EntryId::parse(slug).expect("slug in catalog")
}

#[test]
fn first_load_renders_grid_in_light_mode() {
    let storage = MemoryStorage::new();
    let theme = initial_theme(&storage);
    let view = compose(theme, &ExpansionState::new(), &ParallaxFrame::default());

    assert_eq!(view.theme, ThemePreference::Light);
    assert_eq!(view.chrome.theme_attr, "light");
    assert_eq!(view.layers.heading, "translate(0.00px, 0.00px)");
    let CaseStudySection::Grid(cards) = &view.case_studies else {
        panic!("expected grid, got {:?}", view.case_studies);
    };
    assert_eq!(cards.len(), CASE_STUDY_COUNT);
    let slugs: Vec<&str> = cards.iter().map(|card| card.id.slug()).collect();
    assert_eq!(
        slugs,
        [
            "digital-landscapes",
            "playlist-localization",
            "webverify-expansion",
            "unified-auth"
        ]
    );
}

#[test]
fn second_click_switches_detail_to_the_new_card() {
    let expansion = ExpansionState::new()
        .toggle(id("unified-auth"))
        .toggle(id("digital-landscapes"));
    let view = compose(ThemePreference::Light, &expansion, &ParallaxFrame::default());

    assert!(view.case_studies.is_detail());
    assert_eq!(view.case_studies.transition_key(), "detailed-view");
    let CaseStudySection::Detail(detail) = &view.case_studies else {
        panic!("expected detail");
    };
    assert_eq!(detail.id, id("digital-landscapes"));
    assert_eq!(detail.title, "Digital Landscapes Redesign");
    assert_eq!(detail.organization, "Walmart · 2024–2025");
    let headings: Vec<&str> = detail.lists.iter().map(|list| list.heading).collect();
    assert_eq!(headings, ["Challenges", "Solution", "Impact"]);
    assert_eq!(detail.lists[2].items[0], "+10.8% adoption increase");
}

#[test]
fn collapsing_returns_to_grid() {
    let open = ExpansionState::new().toggle(id("webverify-expansion"));
    let closed = open.toggle(id("webverify-expansion"));
    let view = compose(ThemePreference::Dark, &closed, &ParallaxFrame::default());
    assert_eq!(view.case_studies.transition_key(), "grid-view");
    assert_eq!(view.chrome.theme_attr, "dark");
    assert_eq!(view.chrome.wave_fills[0], "#4a0e2b");
}

#[test]
fn summaries_follow_card_layout() {
    let cards = card_summaries();
    let feature = &cards[id("digital-landscapes").index()];
    assert_eq!(feature.layout_class, "card-feature");
    assert!(feature.summary.is_some());
    let compact = &cards[id("playlist-localization").index()];
    assert_eq!(compact.layout_class, "card-compact");
    assert_eq!(compact.summary, None);
    let wide = &cards[id("unified-auth").index()];
    assert_eq!(wide.layout_class, "card-wide");
    assert_eq!(
        wide.summary,
        Some("Streamlined authentication across multiple platforms and user types.")
    );
}

#[test]
fn cards_enter_in_catalog_order() {
    let delays: Vec<f64> = card_summaries()
        .iter()
        .map(|card| card.enter_delay_secs)
        .collect();
    for pair in delays.windows(2) {
        assert!(pair[0] < pair[1]);
    }
    assert!((delays[0] - 0.5).abs() < 1e-9);
}

#[test]
fn pointer_frame_only_moves_decoration() {
    let frame = ParallaxFrame {
        heading: PointerOffset::new(7.5, 6.0),
        rose: PointerOffset::new(1.0, -2.0),
        sky: PointerOffset::new(0.25, 0.0),
    };
    let still = compose(ThemePreference::Light, &ExpansionState::new(), &ParallaxFrame::default());
    let moved = compose(ThemePreference::Light, &ExpansionState::new(), &frame);
    assert_eq!(still.case_studies, moved.case_studies);
    assert_eq!(moved.layers.heading, "translate(7.50px, 6.00px)");
    assert_eq!(moved.layers.rose, "translate(1.00px, -2.00px) scale(0.8)");
}
