//! Onboarding item presenter
//!
//! Binds one [`OnboardingItem`] to an [`Environment`] and answers what the
//! tip template asks for: where to draw, which text to show, and how to
//! align it. Every call resamples the environment; nothing is cached between
//! render passes.

use crate::env::Environment;
use crate::layout::{compute_position, ItemStyle, Position};
use crate::models::OnboardingItem;
use crate::style::resolve_alignment_class;
use crate::text::{resolve_text, ResolvedText};

pub struct ItemPresenter<'a, E: Environment + ?Sized> {
    item: &'a OnboardingItem,
    env: &'a E,
}

impl<'a, E: Environment + ?Sized> ItemPresenter<'a, E> {
    pub fn new(item: &'a OnboardingItem, env: &'a E) -> Self {
        Self { item, env }
    }

    pub fn item(&self) -> &'a OnboardingItem {
        self.item
    }

    /// Position of the tip for the current layout of `target` and `container`
    pub fn position(&self, target: &E::Element, container: &E::Element) -> Position {
        let target_rect = self.env.rect(target);
        let container_size = self.env.rect(container).size();
        let viewport = self.env.viewport_size();
        compute_position(target_rect, container_size, viewport, self.item.position)
    }

    pub fn style(&self, target: &E::Element, container: &E::Element) -> ItemStyle {
        self.position(target, container).to_style()
    }

    /// Headline and details for the environment's locale
    pub fn text(&self) -> ResolvedText<'a> {
        let item = self.item;
        let locale = self.env.locale();
        resolve_text(&item.descriptions, &locale, &item.headline, &item.details)
    }

    pub fn headline(&self) -> &'a str {
        self.text().headline
    }

    pub fn details(&self) -> &'a str {
        self.text().details
    }

    pub fn text_align_class(&self) -> String {
        resolve_alignment_class(self.item.text_align.as_deref())
    }
}
