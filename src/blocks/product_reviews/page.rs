//! Product Reviews Page
//!
//! Rating summary with distribution bars beside a sortable review list.

use gpui::{
    ClickEvent, Context, EventEmitter, IntoElement, ParentElement, Render, SharedString, Styled,
    Window, div, prelude::*, px,
};

use crate::assets::Glyph;
use crate::blocks::product_reviews::model::{ProductReviewsProps, Review, ReviewSort};
use crate::components::composite::rating_breakdown::RatingBreakdown;
use crate::components::composite::star_rating::StarRating;
use crate::components::layout::section::Section;
use crate::components::primitives::avatar::Avatar;
use crate::components::primitives::badge::Badge;
use crate::components::primitives::button::{Button, ButtonSize};
use crate::components::primitives::card::Card;
use crate::components::primitives::separator::Separator;
use crate::components::primitives::tabs::Tabs;
use crate::domain::date::format_date;
use crate::eventing::BlockEvent;
use crate::theme::colors::CatalogColors;
use crate::theme::tone::Tone;
use crate::theme::typography::Typography;

/// Product reviews page component
pub struct ProductReviewsPage {
    props: ProductReviewsProps,
    sort: ReviewSort,
}

impl EventEmitter<BlockEvent> for ProductReviewsPage {}

impl ProductReviewsPage {
    pub fn new(props: ProductReviewsProps, _cx: &mut Context<Self>) -> Self {
        Self {
            props,
            sort: ReviewSort::default(),
        }
    }

    fn set_sort(&mut self, ix: usize, cx: &mut Context<Self>) {
        if let Some(sort) = ReviewSort::all().get(ix) {
            self.sort = *sort;
            cx.notify();
        }
    }

    fn render_summary(&self, cx: &mut Context<Self>) -> impl IntoElement + use<> {
        let average = self.props.average();

        Card::new()
            .gap(16.0)
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap_1()
                    .child(
                        div()
                            .text_size(px(Typography::TEXT_3XL + 6.0))
                            .font_weight(gpui::FontWeight::BOLD)
                            .text_color(CatalogColors::text_primary())
                            .child(format!("{average:.1}")),
                    )
                    .child(StarRating::new(average).size(20.0))
                    .child(
                        div()
                            .text_sm()
                            .text_color(CatalogColors::text_muted())
                            .child(format!("Based on {} reviews", self.props.total_reviews())),
                    ),
            )
            .child(RatingBreakdown::new(self.props.distribution))
            .child(Separator::horizontal())
            .child(
                div()
                    .text_sm()
                    .text_color(CatalogColors::text_secondary())
                    .child(format!(
                        "{}% of reviewers recommend this product",
                        self.props.recommend_percent()
                    )),
            )
            .child(
                Button::outline("write-review", "Write a review")
                    .glyph(Glyph::MessageSquare)
                    .full_width()
                    .on_click(cx.listener(|_this, _event: &ClickEvent, _window, cx| {
                        cx.emit(BlockEvent::action("Write a review"));
                    })),
            )
    }

    fn render_review(&self, review: &Review, cx: &mut Context<Self>) -> impl IntoElement + use<> {
        let title = review.title.clone();
        let helpful_id = SharedString::from(format!("helpful-{}", review.id));

        div()
            .flex()
            .flex_col()
            .gap_3()
            .py_5()
            .border_b_1()
            .border_color(CatalogColors::border())
            .child(
                div()
                    .flex()
                    .items_center()
                    .justify_between()
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap_3()
                            .child(Avatar::new(review.author.clone()).image(review.avatar.clone()).size(36.0))
                            .child(
                                div()
                                    .flex()
                                    .flex_col()
                                    .child(
                                        div()
                                            .flex()
                                            .items_center()
                                            .gap_2()
                                            .child(
                                                div()
                                                    .text_sm()
                                                    .font_weight(gpui::FontWeight::MEDIUM)
                                                    .child(review.author.clone()),
                                            )
                                            .when(review.verified, |el| {
                                                el.child(
                                                    Badge::new("Verified purchase")
                                                        .tone(Tone::Success)
                                                        .glyph(Glyph::CheckCircle),
                                                )
                                            }),
                                    )
                                    .child(
                                        div()
                                            .text_xs()
                                            .text_color(CatalogColors::text_muted())
                                            .child(format_date(review.date)),
                                    ),
                            ),
                    )
                    .child(StarRating::new(f32::from(review.rating)).size(14.0)),
            )
            .child(
                div()
                    .text_base()
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .child(review.title.clone()),
            )
            .child(
                div()
                    .text_sm()
                    .text_color(CatalogColors::text_secondary())
                    .child(review.body.clone()),
            )
            .when_some(review.merchant_reply.as_ref(), |el, reply| {
                el.child(
                    div()
                        .ml_6()
                        .p_4()
                        .rounded_md()
                        .bg(CatalogColors::secondary())
                        .border_l_2()
                        .border_color(CatalogColors::primary())
                        .flex()
                        .flex_col()
                        .gap_1()
                        .child(
                            div()
                                .flex()
                                .items_center()
                                .gap_2()
                                .text_xs()
                                .child(
                                    div()
                                        .font_weight(gpui::FontWeight::SEMIBOLD)
                                        .child(format!("Response from {}", reply.author)),
                                )
                                .child(
                                    div()
                                        .text_color(CatalogColors::text_muted())
                                        .child(format_date(reply.date)),
                                ),
                        )
                        .child(
                            div()
                                .text_sm()
                                .text_color(CatalogColors::text_secondary())
                                .child(reply.body.clone()),
                        ),
                )
            })
            .child(
                div().flex().child(
                    Button::ghost(helpful_id, format!("Helpful ({})", review.helpful_count))
                        .size(ButtonSize::Sm)
                        .glyph(Glyph::Heart)
                        .on_click(cx.listener(move |_this, _event: &ClickEvent, _window, cx| {
                            cx.emit(BlockEvent::action(format!("Mark helpful: {title}")));
                        })),
                ),
            )
    }
}

impl Render for ProductReviewsPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let selected = ReviewSort::all()
            .iter()
            .position(|sort| *sort == self.sort)
            .unwrap_or(0);

        let reviews: Vec<_> = self
            .props
            .sorted_reviews(self.sort)
            .into_iter()
            .map(|review| self.render_review(review, cx).into_any_element())
            .collect();
        let summary = self.render_summary(cx);

        Section::new("product-reviews")
            .title("Customer Reviews")
            .description(self.props.product_name.clone())
            .child(
                div()
                    .flex()
                    .items_start()
                    .gap_8()
                    .child(div().w(px(320.0)).flex_shrink_0().child(summary))
                    .child(
                        div()
                            .flex_1()
                            .flex()
                            .flex_col()
                            .child(
                                div()
                                    .flex()
                                    .items_center()
                                    .justify_between()
                                    .child(
                                        div()
                                            .text_lg()
                                            .font_weight(gpui::FontWeight::SEMIBOLD)
                                            .child(format!("{} reviews shown", reviews.len())),
                                    )
                                    .child(
                                        Tabs::new("review-sort")
                                            .labels(ReviewSort::all().iter().map(|s| s.label()))
                                            .selected(selected)
                                            .on_select(cx.listener(|this, ix: &usize, _window, cx| {
                                                this.set_sort(*ix, cx);
                                            })),
                                    ),
                            )
                            .when(reviews.is_empty(), |el| {
                                el.child(
                                    div()
                                        .py_8()
                                        .text_sm()
                                        .text_color(CatalogColors::text_muted())
                                        .child("No reviews yet."),
                                )
                            })
                            .children(reviews),
                    ),
            )
    }
}
