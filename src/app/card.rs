//! Card rendering - a thin view over the controller's presentation state.

use super::RatingCard;
use crate::constants::{
    CARD_BACKGROUND, CARD_RADIUS, CARD_SIZE, MAX_STARS, PAGE_BACKGROUND, STAR_EMPTY, STAR_FILLED,
    TEXT_COLOR,
};
use crate::types::StarDisplay;
use gpui::prelude::FluentBuilder;
use gpui::*;

impl Render for RatingCard {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        self.poll_next_item();

        let feedback = self.controller.feedback();
        let card_bg = feedback.tint.map_or(CARD_BACKGROUND, |tint| tint.rgb());
        let label = feedback.visible_label.map(|label| label.caption());
        let offset = self.controller.displacement();
        let (title, description): (SharedString, Option<SharedString>) =
            match self.controller.subject() {
                Some(subject) => (
                    subject.name.clone().into(),
                    subject.description.clone().map(Into::into),
                ),
                None => ("Waiting for the next item...".into(), None),
            };
        let controls = self.controller.subject().is_some().then(|| {
            let stars = self.controller.star_display();
            (render_stars(&stars, cx), render_skip_buttons(cx))
        });

        div()
            .id("rating-page")
            .size_full()
            .flex()
            .flex_col()
            .items_center()
            .justify_center()
            .gap(px(16.0))
            .bg(rgb(PAGE_BACKGROUND))
            .text_color(rgb(TEXT_COLOR))
            .child(
                div()
                    .id("rating-card")
                    .relative()
                    .left(px(offset))
                    .w(px(CARD_SIZE.0))
                    .h(px(CARD_SIZE.1))
                    .rounded(px(CARD_RADIUS))
                    .bg(rgb(card_bg))
                    .flex()
                    .flex_col()
                    .items_center()
                    .justify_center()
                    .gap(px(8.0))
                    .cursor(CursorStyle::OpenHand)
                    .on_mouse_down(MouseButton::Left, cx.listener(Self::handle_mouse_down))
                    .on_mouse_move(cx.listener(Self::handle_mouse_move))
                    .on_mouse_up(MouseButton::Left, cx.listener(Self::handle_mouse_up))
                    .on_hover(cx.listener(Self::handle_hover))
                    .child(div().text_xl().child(title))
                    .when_some(description, |d, text| d.child(div().text_sm().child(text)))
                    .when_some(label, |d, text| d.child(div().text_2xl().child(text))),
            )
            .when_some(controls, |d, (stars, buttons)| d.child(stars).child(buttons))
    }
}

/// Star row; a click submits directly, bypassing the drag machinery.
fn render_stars(display: &StarDisplay, cx: &mut Context<RatingCard>) -> Div {
    let mut row = div().flex().gap(px(4.0));
    for star in 1..=MAX_STARS {
        let color = if display.is_filled(star) {
            STAR_FILLED
        } else {
            STAR_EMPTY
        };
        row = row.child(
            div()
                .id(ElementId::Name(format!("star-{star}").into()))
                .cursor(CursorStyle::PointingHand)
                .text_2xl()
                .text_color(rgb(color))
                .on_click(cx.listener(move |this, _: &ClickEvent, _, cx| {
                    this.handle_star_click(star, cx);
                }))
                .on_hover(cx.listener(move |this, hovered: &bool, _, cx| {
                    this.handle_star_hover(star, *hovered, cx);
                }))
                .child("★"),
        );
    }
    row
}

fn render_skip_buttons(cx: &mut Context<RatingCard>) -> Div {
    div()
        .flex()
        .gap(px(12.0))
        .child(
            div()
                .id("dont-know")
                .px_3()
                .py_1()
                .rounded(px(4.0))
                .cursor(CursorStyle::PointingHand)
                .child("Don't know")
                .on_click(cx.listener(|this, _: &ClickEvent, _, cx| {
                    this.handle_dont_know(cx);
                })),
        )
        .child(
            div()
                .id("dont-care")
                .px_3()
                .py_1()
                .rounded(px(4.0))
                .cursor(CursorStyle::PointingHand)
                .child("Don't care")
                .on_click(cx.listener(|this, _: &ClickEvent, _, cx| {
                    this.handle_dont_care(cx);
                })),
        )
}
