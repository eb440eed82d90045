//! Account Profile Page

use gpui::{
    ClickEvent, Context, EventEmitter, IntoElement, ParentElement, Render, SharedString, Styled,
    Window, div, prelude::*, px,
};

use crate::assets::Glyph;
use crate::blocks::account_profile::model::{AccountManager, AccountProfileProps, PreferenceGroup};
use crate::components::composite::dialog::Dialog;
use crate::components::layout::section::Section;
use crate::components::primitives::accordion::{Accordion, AccordionItem};
use crate::components::primitives::avatar::Avatar;
use crate::components::primitives::badge::Badge;
use crate::components::primitives::button::{Button, ButtonSize};
use crate::components::primitives::card::Card;
use crate::components::primitives::checkbox::Switch;
use crate::components::primitives::icon::glyph_icon;
use crate::components::primitives::input::Input;
use crate::components::primitives::link::Link;
use crate::components::primitives::separator::Separator;
use crate::domain::date::format_date;
use crate::eventing::BlockEvent;
use crate::theme::colors::CatalogColors;
use crate::theme::tone::Tone;

/// Account profile page component
pub struct AccountProfilePage {
    props: AccountProfileProps,
    open_group: Option<usize>,
    editing: bool,
}

impl EventEmitter<BlockEvent> for AccountProfilePage {}

impl AccountProfilePage {
    pub fn new(props: AccountProfileProps, _cx: &mut Context<Self>) -> Self {
        Self {
            props,
            open_group: Some(0),
            editing: false,
        }
    }

    fn render_profile(&self, cx: &mut Context<Self>) -> impl IntoElement + use<> {
        let props = &self.props;

        Card::new().child(
            div()
                .flex()
                .items_center()
                .gap_5()
                .child(Avatar::new(props.name.clone()).image(props.avatar.clone()).size(72.0))
                .child(
                    div()
                        .flex_1()
                        .flex()
                        .flex_col()
                        .gap_1()
                        .child(
                            div()
                                .flex()
                                .items_center()
                                .gap_2()
                                .child(
                                    div()
                                        .text_xl()
                                        .font_weight(gpui::FontWeight::SEMIBOLD)
                                        .child(props.name.clone()),
                                )
                                .child(Badge::new(props.tier.clone()).tone(Tone::Accent).glyph(Glyph::Star)),
                        )
                        .child(
                            div()
                                .text_sm()
                                .text_color(CatalogColors::text_secondary())
                                .child(props.email.clone()),
                        )
                        .child(
                            div()
                                .flex()
                                .items_center()
                                .gap_4()
                                .text_xs()
                                .text_color(CatalogColors::text_muted())
                                .when_some(props.location.clone(), |el, location| {
                                    el.child(
                                        div()
                                            .flex()
                                            .items_center()
                                            .gap_1()
                                            .child(glyph_icon(Glyph::MapPin, 12.0, CatalogColors::text_muted()))
                                            .child(location),
                                    )
                                })
                                .child(
                                    div()
                                        .flex()
                                        .items_center()
                                        .gap_1()
                                        .child(glyph_icon(Glyph::Calendar, 12.0, CatalogColors::text_muted()))
                                        .child(format!("Member since {}", format_date(props.member_since))),
                                ),
                        ),
                )
                .child(
                    Button::outline("edit-profile", "Edit profile").on_click(cx.listener(
                        |this, _event: &ClickEvent, _window, cx| {
                            this.editing = true;
                            cx.notify();
                        },
                    )),
                ),
        )
    }

    fn render_stats(&self) -> impl IntoElement {
        div().flex().gap_4().children(self.props.stats.iter().map(|stat| {
            div()
                .flex_1()
                .p_4()
                .rounded_lg()
                .border_1()
                .border_color(CatalogColors::border())
                .bg(CatalogColors::card_bg())
                .flex()
                .flex_col()
                .gap_1()
                .child(
                    div()
                        .text_xs()
                        .text_color(CatalogColors::text_muted())
                        .child(stat.label.clone()),
                )
                .child(
                    div()
                        .text_lg()
                        .font_weight(gpui::FontWeight::SEMIBOLD)
                        .child(stat.value.clone()),
                )
        }))
    }

    fn render_manager(manager: &AccountManager, cx: &mut Context<Self>) -> impl IntoElement + use<> {
        let email = format!("mailto:{}", manager.email);
        let name = manager.name.clone();

        Card::new()
            .title("Your account manager")
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_3()
                    .child(Avatar::new(manager.name.clone()).image(manager.avatar.clone()))
                    .child(
                        div()
                            .flex()
                            .flex_col()
                            .child(
                                div()
                                    .text_sm()
                                    .font_weight(gpui::FontWeight::MEDIUM)
                                    .child(manager.name.clone()),
                            )
                            .child(
                                div()
                                    .text_xs()
                                    .text_color(CatalogColors::text_muted())
                                    .child(manager.phone.clone()),
                            ),
                    ),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .justify_between()
                    .child(
                        Link::new("manager-email", manager.email.clone(), email).on_click(
                            cx.listener(|_this, href: &SharedString, _window, cx| {
                                cx.emit(BlockEvent::link(href.to_string()));
                            }),
                        ),
                    )
                    .child(
                        Button::secondary("book-call", "Book a call")
                            .size(ButtonSize::Sm)
                            .glyph(Glyph::Calendar)
                            .on_click(cx.listener(move |_this, _event: &ClickEvent, _window, cx| {
                                cx.emit(BlockEvent::action(format!("Book call with {name}")));
                            })),
                    ),
            )
    }

    fn render_group(group: &PreferenceGroup, cx: &mut Context<Self>) -> impl IntoElement + use<> {
        div()
            .flex()
            .flex_col()
            .gap_3()
            .children(group.preferences.iter().map(|pref| {
                let label = pref.label.clone();
                div()
                    .flex()
                    .items_center()
                    .justify_between()
                    .gap_4()
                    .child(
                        div()
                            .flex()
                            .flex_col()
                            .child(div().text_sm().child(pref.label.clone()))
                            .child(
                                div()
                                    .text_xs()
                                    .text_color(CatalogColors::text_muted())
                                    .child(pref.description.clone()),
                            ),
                    )
                    .child(
                        Switch::new(SharedString::from(format!("pref-{}", pref.key)))
                            .on(pref.enabled)
                            .on_change(cx.listener(move |_this, on: &bool, _window, cx| {
                                cx.emit(BlockEvent::toggled(label.clone(), *on));
                            })),
                    )
            }))
    }

    fn render_preferences(&self, cx: &mut Context<Self>) -> impl IntoElement + use<> {
        let items: Vec<AccordionItem> = self
            .props
            .preference_groups
            .iter()
            .enumerate()
            .map(|(ix, group)| {
                AccordionItem::new(group.title.clone(), Self::render_group(group, cx))
                    .subtitle(
                        div()
                            .text_xs()
                            .text_color(CatalogColors::text_muted())
                            .child(format!(
                                "{} of {} on",
                                group.enabled_count(),
                                group.preferences.len()
                            )),
                    )
                    .open(self.open_group == Some(ix))
            })
            .collect();

        Card::new().title("Preferences").child(
            Accordion::new("preferences")
                .items(items)
                .on_toggle(cx.listener(|this, ix: &usize, _window, cx| {
                    this.open_group = if this.open_group == Some(*ix) {
                        None
                    } else {
                        Some(*ix)
                    };
                    cx.notify();
                })),
        )
    }

    fn render_edit_dialog(&self, cx: &mut Context<Self>) -> Dialog {
        let props = &self.props;
        let mut location = Input::new("City, region").label("Location").glyph(Glyph::MapPin);
        if let Some(value) = props.location.clone() {
            location = location.value(value);
        }

        Dialog::new("Edit profile")
            .description("Changes are shown on your public reviews.")
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_3()
                    .child(Avatar::new(props.name.clone()).image(props.avatar.clone()).size(48.0))
                    .child(
                        Button::outline("change-photo", "Change photo")
                            .size(ButtonSize::Sm)
                            .on_click(cx.listener(|_this, _event: &ClickEvent, _window, cx| {
                                cx.emit(BlockEvent::action("Change photo"));
                            })),
                    ),
            )
            .child(Separator::horizontal())
            .child(Input::new("Full name").label("Name").value(props.name.clone()))
            .child(
                Input::new("you@example.com")
                    .label("Email")
                    .glyph(Glyph::Mail)
                    .value(props.email.clone()),
            )
            .child(location)
            .footer(
                div()
                    .flex()
                    .gap_2()
                    .child(Button::outline("cancel-edit", "Cancel").on_click(cx.listener(
                        |this, _event: &ClickEvent, _window, cx| {
                            this.editing = false;
                            cx.notify();
                        },
                    )))
                    .child(Button::new("save-profile", "Save changes").on_click(cx.listener(
                        |this, _event: &ClickEvent, _window, cx| {
                            this.editing = false;
                            cx.emit(BlockEvent::action("Save profile"));
                            cx.notify();
                        },
                    ))),
            )
            .on_close(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                this.editing = false;
                cx.notify();
            }))
    }
}

impl Render for AccountProfilePage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let profile = self.render_profile(cx);
        let preferences = self.render_preferences(cx);
        let manager = self
            .props
            .account_manager
            .clone()
            .map(|manager| Self::render_manager(&manager, cx));
        let dialog = self.editing.then(|| self.render_edit_dialog(cx));

        Section::new("account-profile")
            .title("Account")
            .description("Your profile, contacts and preferences")
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap_6()
                    .child(profile)
                    .child(self.render_stats())
                    .child(
                        div()
                            .flex()
                            .items_start()
                            .gap_6()
                            .child(div().flex_1().child(preferences))
                            .when(self.props.shows_account_manager(), |el| {
                                el.child(div().w(px(320.0)).flex_shrink_0().children(manager))
                            }),
                    ),
            )
            .overlay(dialog)
    }
}
