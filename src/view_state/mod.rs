//! Derived view state.
//!
//! State a renderer needs on top of hydrated content. None of it fetches;
//! everything reads values that hydration already published.
//!
//! - [`Carousel`] / [`CarouselState`]: time-driven subtitle rotation
//! - [`CategoryFilter`]: skill category selection
//! - [`TabSelector`]: journey timeline tabs
//! - [`Accordion`]: about-section expansion

mod accordion;
mod carousel;
mod filter;
mod tabs;

pub use accordion::Accordion;
pub use carousel::{Carousel, CarouselReplacer, CarouselState};
pub use filter::{
    category_label, filter_skills, CategoryFilter, SkillCategory, ALL_CATEGORIES,
    SKILL_CATEGORIES,
};
pub use tabs::TabSelector;
