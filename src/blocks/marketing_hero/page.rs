//! Marketing Hero Page

use gpui::{
    ClickEvent, Context, EventEmitter, InteractiveElement, IntoElement, ParentElement, Render,
    SharedString, StatefulInteractiveElement, Styled, Window, div, prelude::*, px, rgba,
};

use crate::assets::Glyph;
use crate::blocks::marketing_hero::model::{Announcement, Feature, MarketingHeroProps};
use crate::components::layout::section::Section;
use crate::components::primitives::badge::Badge;
use crate::components::primitives::button::{Button, ButtonSize};
use crate::components::primitives::icon::glyph_icon;
use crate::eventing::BlockEvent;
use crate::theme::colors::CatalogColors;
use crate::theme::tone::Tone;

const FEATURES_PER_ROW: usize = 3;

/// Marketing hero page component
pub struct MarketingHeroPage {
    props: MarketingHeroProps,
}

impl EventEmitter<BlockEvent> for MarketingHeroPage {}

impl MarketingHeroPage {
    pub fn new(props: MarketingHeroProps, _cx: &mut Context<Self>) -> Self {
        Self { props }
    }

    fn render_announcement(announcement: &Announcement, cx: &mut Context<Self>) -> impl IntoElement + use<> {
        let href = announcement.href.clone();

        div()
            .id("hero-announcement")
            .flex()
            .items_center()
            .gap_2()
            .px_1()
            .pr_3()
            .py_1()
            .rounded_full()
            .bg(rgba(0xffffff1a))
            .text_sm()
            .text_color(CatalogColors::text_light())
            .cursor_pointer()
            .hover(|s| s.bg(rgba(0xffffff26)))
            .on_click(cx.listener(move |_this, _event: &ClickEvent, _window, cx| {
                cx.emit(BlockEvent::link(href.clone()));
            }))
            .child(Badge::new(announcement.badge.clone()).tone(Tone::Accent))
            .child(announcement.text.clone())
            .child(glyph_icon(Glyph::ArrowRight, 14.0, CatalogColors::text_light()))
    }

    fn render_hero(&self, cx: &mut Context<Self>) -> impl IntoElement + use<> {
        let announcement = self
            .props
            .announcement
            .as_ref()
            .map(|announcement| Self::render_announcement(announcement, cx));

        let ctas: Vec<_> = self
            .props
            .ctas()
            .into_iter()
            .enumerate()
            .map(|(ix, cta)| {
                let href = cta.href.clone();
                let button = if ix == 0 {
                    Button::secondary(SharedString::from(format!("hero-cta-{ix}")), cta.label.clone())
                        .glyph(Glyph::ArrowRight)
                } else {
                    Button::ghost(SharedString::from(format!("hero-cta-{ix}")), cta.label.clone())
                };
                button
                    .size(ButtonSize::Lg)
                    .on_click(cx.listener(move |_this, _event: &ClickEvent, _window, cx| {
                        cx.emit(BlockEvent::link(href.clone()));
                    }))
            })
            .collect();

        div()
            .w_full()
            .px_12()
            .py_16()
            .rounded_xl()
            .bg(CatalogColors::hero_bg())
            .flex()
            .flex_col()
            .items_center()
            .gap_6()
            .children(announcement)
            .child(
                div()
                    .max_w(px(720.0))
                    .text_center()
                    .text_3xl()
                    .font_weight(gpui::FontWeight::BOLD)
                    .text_color(CatalogColors::text_light())
                    .child(self.props.headline.clone())
                    .when_some(self.props.highlight.clone(), |el, highlight| {
                        el.child(div().text_color(rgba(0xc4b5fdff)).child(highlight))
                    }),
            )
            .child(
                div()
                    .max_w(px(600.0))
                    .text_center()
                    .text_lg()
                    .text_color(rgba(0xffffffb3))
                    .child(self.props.subheadline.clone()),
            )
            .child(div().flex().items_center().gap_3().children(ctas))
            .child(
                div()
                    .mt_6()
                    .w_full()
                    .pt_8()
                    .border_t_1()
                    .border_color(rgba(0xffffff1f))
                    .flex()
                    .justify_around()
                    .children(self.props.stats.iter().map(|stat| {
                        div()
                            .flex()
                            .flex_col()
                            .items_center()
                            .child(
                                div()
                                    .text_2xl()
                                    .font_weight(gpui::FontWeight::BOLD)
                                    .text_color(CatalogColors::text_light())
                                    .child(stat.value.clone()),
                            )
                            .child(
                                div()
                                    .text_sm()
                                    .text_color(rgba(0xffffff99))
                                    .child(stat.label.clone()),
                            )
                    })),
            )
    }

    fn render_feature(feature: &Feature) -> impl IntoElement {
        let accent = Tone::Accent.colors();

        div()
            .flex_1()
            .p_6()
            .rounded_lg()
            .border_1()
            .border_color(CatalogColors::border())
            .bg(CatalogColors::card_bg())
            .flex()
            .flex_col()
            .gap_3()
            .child(
                div()
                    .size(px(40.0))
                    .rounded_md()
                    .bg(accent.bg)
                    .flex()
                    .items_center()
                    .justify_center()
                    .child(glyph_icon(feature.glyph, 20.0, accent.fg)),
            )
            .child(
                div()
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .child(feature.title.clone()),
            )
            .child(
                div()
                    .text_sm()
                    .text_color(CatalogColors::text_secondary())
                    .child(feature.description.clone()),
            )
    }
}

impl Render for MarketingHeroPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let hero = self.render_hero(cx);
        let rows = self
            .props
            .feature_rows(FEATURES_PER_ROW)
            .into_iter()
            .map(|row| div().flex().gap_4().children(row.iter().map(Self::render_feature)));

        Section::new("marketing-hero")
            .title("Marketing Hero")
            .description("Landing page header with features and social proof")
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap_8()
                    .child(hero)
                    .child(div().flex().flex_col().gap_4().children(rows)),
            )
    }
}
