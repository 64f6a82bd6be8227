use crate::catalog::EntryId;
use crate::expansion::ExpansionState;
use crate::pointer::{ParallaxFrame, PointerOffset};
use crate::theme::ThemePreference;

const CARD_ENTER_DELAY_SECS: f64 = 0.5;
const CARD_ENTER_STAGGER_SECS: f64 = 0.1;
const ROSE_OVERLAY_SCALE: f64 = 0.8;
const SKY_OVERLAY_SCALE: f64 = 0.7;

const LIGHT_WAVE_FILLS: [&str; 3] = ["#fce7f3", "#f3e8ff", "#fdf2f8"];
const DARK_WAVE_FILLS: [&str; 3] = ["#4a0e2b", "#5c1a3a", "#701a47"];

#[derive(Clone, Debug, PartialEq)]
pub struct PortfolioView {
    pub theme: ThemePreference,
    pub chrome: ThemeChrome,
    pub layers: LayerTransforms,
    pub case_studies: CaseStudySection,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeChrome {
    /// Value for `body[data-theme]`.
    pub theme_attr: &'static str,
    pub toggle_glyph: &'static str,
    pub toggle_label: &'static str,
    /// Back, middle and front wave fills.
    pub wave_fills: [&'static str; 3],
}

#[derive(Clone, Debug, PartialEq)]
pub struct LayerTransforms {
    pub heading: String,
    pub rose: String,
    pub sky: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum CaseStudySection {
    Grid(Vec<CardSummary>),
    Detail(CardDetail),
}

impl CaseStudySection {
    pub fn is_detail(&self) -> bool {
        matches!(self, CaseStudySection::Detail(_))
    }

    /// Key for the flip transition between the two renderings.
    pub fn transition_key(&self) -> &'static str {
        match self {
            CaseStudySection::Grid(_) => "grid-view",
            CaseStudySection::Detail(_) => "detailed-view",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CardSummary {
    pub id: EntryId,
    pub title: &'static str,
    pub organization: &'static str,
    pub summary: Option<&'static str>,
    pub layout_class: &'static str,
    pub enter_delay_secs: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CardDetail {
    pub id: EntryId,
    pub title: &'static str,
    pub organization: &'static str,
    pub context: &'static str,
    pub lists: [DetailList; 3],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DetailList {
    pub heading: &'static str,
    pub items: &'static [&'static str],
}

pub fn theme_chrome(theme: ThemePreference) -> ThemeChrome {
    if theme.is_dark() {
        ThemeChrome {
            theme_attr: "dark",
            toggle_glyph: "☀️",
            toggle_label: "Switch to light mode",
            wave_fills: DARK_WAVE_FILLS,
        }
    } else {
        ThemeChrome {
            theme_attr: "light",
            toggle_glyph: "🌙",
            toggle_label: "Switch to dark mode",
            wave_fills: LIGHT_WAVE_FILLS,
        }
    }
}

pub fn translate(offset: PointerOffset) -> String {
    format!("translate({:.2}px, {:.2}px)", offset.x, offset.y)
}

fn translate_scaled(offset: PointerOffset, scale: f64) -> String {
    format!("{} scale({scale})", translate(offset))
}

pub fn layer_transforms(frame: &ParallaxFrame) -> LayerTransforms {
    LayerTransforms {
        heading: translate(frame.heading),
        rose: translate_scaled(frame.rose, ROSE_OVERLAY_SCALE),
        sky: translate_scaled(frame.sky, SKY_OVERLAY_SCALE),
    }
}

pub fn card_summaries() -> Vec<CardSummary> {
    EntryId::all()
        .enumerate()
        .map(|(position, id)| {
            let entry = id.entry();
            CardSummary {
                id,
                title: entry.title,
                organization: entry.organization,
                summary: entry.layout.shows_summary().then_some(entry.summary),
                layout_class: entry.layout.class(),
                enter_delay_secs: CARD_ENTER_DELAY_SECS
                    + CARD_ENTER_STAGGER_SECS * position as f64,
            }
        })
        .collect()
}

pub fn card_detail(id: EntryId) -> CardDetail {
    let entry = id.entry();
    CardDetail {
        id,
        title: entry.title,
        organization: entry.organization,
        context: entry.detail.context,
        lists: [
            DetailList {
                heading: "Challenges",
                items: entry.detail.challenges,
            },
            DetailList {
                heading: "Solution",
                items: entry.detail.solution,
            },
            DetailList {
                heading: "Impact",
                items: entry.detail.impact,
            },
        ],
    }
}

pub fn case_study_section(expansion: &ExpansionState) -> CaseStudySection {
    match expansion.expanded() {
        Some(id) => CaseStudySection::Detail(card_detail(id)),
        None => CaseStudySection::Grid(card_summaries()),
    }
}

/// Everything the home view needs for one render.
pub fn compose(
    theme: ThemePreference,
    expansion: &ExpansionState,
    frame: &ParallaxFrame,
) -> PortfolioView {
    PortfolioView {
        theme,
        chrome: theme_chrome(theme),
        layers: layer_transforms(frame),
        case_studies: case_study_section(expansion),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translate_rounds_to_two_places() {
        assert_eq!(
            translate(PointerOffset::new(7.5, -6.0)),
            "translate(7.50px, -6.00px)"
        );
    }

    #[test]
    fn overlays_keep_their_scale() {
        let transforms = layer_transforms(&ParallaxFrame::default());
        assert_eq!(transforms.rose, "translate(0.00px, 0.00px) scale(0.8)");
        assert_eq!(transforms.sky, "translate(0.00px, 0.00px) scale(0.7)");
    }

    #[test]
    fn chrome_glyph_shows_the_other_mode() {
        assert_eq!(theme_chrome(ThemePreference::Light).toggle_glyph, "🌙");
        assert_eq!(theme_chrome(ThemePreference::Dark).toggle_glyph, "☀️");
    }
}
