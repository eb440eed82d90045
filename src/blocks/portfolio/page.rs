//! Portfolio Page

use gpui::{
    ClickEvent, Context, EventEmitter, IntoElement, ParentElement, Render, SharedString, Styled,
    Window, div, prelude::*, px,
};

use crate::assets::Glyph;
use crate::blocks::portfolio::model::{PortfolioProps, Project};
use crate::components::composite::star_rating::StarRating;
use crate::components::composite::status_badge::StatusBadge;
use crate::components::layout::section::Section;
use crate::components::primitives::avatar::Avatar;
use crate::components::primitives::badge::Badge;
use crate::components::primitives::button::Button;
use crate::components::primitives::card::Card;
use crate::components::primitives::icon::glyph_icon;
use crate::components::primitives::link::Link;
use crate::components::primitives::progress::Progress;
use crate::domain::rating::RatingScale;
use crate::eventing::BlockEvent;
use crate::theme::colors::CatalogColors;
use crate::theme::tone::Tone;

/// Portfolio page component
pub struct PortfolioPage {
    props: PortfolioProps,
}

impl EventEmitter<BlockEvent> for PortfolioPage {}

impl PortfolioPage {
    pub fn new(props: PortfolioProps, _cx: &mut Context<Self>) -> Self {
        Self { props }
    }

    fn render_profile(&self, cx: &mut Context<Self>) -> impl IntoElement + use<> {
        let profile = &self.props.profile;
        let name = profile.name.clone();

        let links = self.props.links.iter().enumerate().map(|(ix, link)| {
            div()
                .flex()
                .items_center()
                .gap_1()
                .child(glyph_icon(link.glyph, 14.0, CatalogColors::link()))
                .child(
                    Link::new(
                        SharedString::from(format!("profile-link-{ix}")),
                        link.label.clone(),
                        link.href.clone(),
                    )
                    .on_click(cx.listener(|_this, href: &SharedString, _window, cx| {
                        cx.emit(BlockEvent::link(href.to_string()));
                    })),
                )
        });

        Card::new().child(
            div()
                .flex()
                .items_start()
                .gap_5()
                .child(Avatar::new(profile.name.clone()).image(profile.avatar.clone()).size(80.0))
                .child(
                    div()
                        .flex_1()
                        .flex()
                        .flex_col()
                        .gap_2()
                        .child(
                            div()
                                .flex()
                                .items_center()
                                .gap_2()
                                .child(
                                    div()
                                        .text_2xl()
                                        .font_weight(gpui::FontWeight::BOLD)
                                        .child(profile.name.clone()),
                                )
                                .when(profile.available, |el| {
                                    el.child(
                                        Badge::new("Available for work")
                                            .tone(Tone::Success)
                                            .glyph(Glyph::Circle),
                                    )
                                }),
                        )
                        .child(
                            div()
                                .text_color(CatalogColors::text_secondary())
                                .child(profile.role.clone()),
                        )
                        .child(
                            div()
                                .flex()
                                .items_center()
                                .gap_1()
                                .text_xs()
                                .text_color(CatalogColors::text_muted())
                                .child(glyph_icon(Glyph::MapPin, 12.0, CatalogColors::text_muted()))
                                .child(profile.location.clone()),
                        )
                        .child(div().text_sm().child(profile.bio.clone()))
                        .child(div().flex().gap_4().children(links)),
                )
                .child(
                    Button::new("hire", "Get in touch")
                        .glyph(Glyph::Mail)
                        .on_click(cx.listener(move |_this, _event: &ClickEvent, _window, cx| {
                            cx.emit(BlockEvent::action(format!("Contact {name}")));
                        })),
                ),
        )
    }

    fn render_project(project: &Project, cx: &mut Context<Self>) -> impl IntoElement + use<> {
        let link = project.url.clone().map(|url| {
            Link::new(
                SharedString::from(format!("project-{}", project.id)),
                "View project",
                url,
            )
            .external()
            .on_click(cx.listener(|_this, href: &SharedString, _window, cx| {
                cx.emit(BlockEvent::link(href.to_string()));
            }))
        });

        Card::new()
            .child(
                div()
                    .flex()
                    .items_start()
                    .justify_between()
                    .gap_3()
                    .child(
                        div()
                            .flex()
                            .flex_col()
                            .gap_1()
                            .child(
                                div()
                                    .font_weight(gpui::FontWeight::SEMIBOLD)
                                    .child(project.title.clone()),
                            )
                            .child(
                                div()
                                    .text_xs()
                                    .text_color(CatalogColors::text_muted())
                                    .child(project.year.to_string()),
                            ),
                    )
                    .child(StatusBadge::new(project.status)),
            )
            .child(
                div()
                    .text_sm()
                    .text_color(CatalogColors::text_secondary())
                    .child(project.summary.clone()),
            )
            .child(
                div()
                    .flex()
                    .flex_wrap()
                    .gap_1()
                    .children(project.tags.iter().map(|tag| Badge::secondary(tag.clone()))),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .justify_between()
                    .child(
                        StarRating::scaled(project.reviewer_score, RatingScale::TenPoint)
                            .size(14.0)
                            .caption(project.score_label()),
                    )
                    .children(link),
            )
    }

    fn render_skills(&self) -> impl IntoElement {
        Card::new()
            .title("Skills")
            .children(self.props.skills.iter().map(|skill| {
                div()
                    .flex()
                    .flex_col()
                    .gap_1()
                    .child(
                        div()
                            .flex()
                            .justify_between()
                            .text_sm()
                            .child(skill.name.clone())
                            .child(
                                div()
                                    .text_color(CatalogColors::text_muted())
                                    .child(format!("{:.0}%", skill.progress())),
                            ),
                    )
                    .child(Progress::new(skill.progress()).height(6.0))
            }))
    }
}

impl Render for PortfolioPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let profile = self.render_profile(cx);
        let projects: Vec<Project> = self.props.ranked_projects().into_iter().cloned().collect();
        let cards: Vec<_> = projects
            .iter()
            .map(|project| Self::render_project(project, cx))
            .collect();
        let average = self
            .props
            .average_score()
            .map(|score| format!("Average reviewer score {score:.1} / 10"));

        Section::new("portfolio")
            .title("Portfolio")
            .description("Profile, selected work and skills")
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap_6()
                    .child(profile)
                    .child(
                        div()
                            .flex()
                            .items_start()
                            .gap_6()
                            .child(
                                div()
                                    .flex_1()
                                    .flex()
                                    .flex_col()
                                    .gap_4()
                                    .when_some(average, |el, average| {
                                        el.child(
                                            div()
                                                .text_sm()
                                                .text_color(CatalogColors::text_muted())
                                                .child(average),
                                        )
                                    })
                                    .children(cards),
                            )
                            .child(div().w(px(300.0)).flex_shrink_0().child(self.render_skills())),
                    ),
            )
    }
}
