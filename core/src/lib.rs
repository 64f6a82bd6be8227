pub mod catalog;
pub mod expansion;
pub mod pointer;
pub mod route;
pub mod theme;
pub mod view;

pub use catalog::{
    case_study_by_slug, CardLayout, CaseStudyDetail, CaseStudyPage, CatalogEntry, EntryId,
    EntryIdError, CASE_STUDY_CATALOG, CASE_STUDY_COUNT,
};
pub use expansion::ExpansionState;
pub use pointer::{
    raw_target, ContainerBounds, ParallaxFrame, ParallaxRig, PointerOffset, Spring, SpringConfig,
};
pub use route::Route;
pub use theme::{
    initial_theme, persist_theme, MemoryStorage, PreferenceStorage, StorageError,
    ThemePreference, THEME_STORAGE_KEY,
};
pub use view::{compose, CardDetail, CardSummary, CaseStudySection, PortfolioView};
