// SPDX-License-Identifier: MPL-2.0
//! Rendering for the catalog screen: the create form, the status line and the
//! product list.

use super::messages::Message;
use super::state::{State, Status};
use crate::config::THUMBNAIL_SIZE;
use crate::domain::{DraftField, Product};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::theming::ColorScheme;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, container, text, text_input, Column, Container, Image, Row, Text},
    Border, Element, Length,
};

/// Contextual data needed to render the catalog screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: ColorScheme,
}

impl State {
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let mut content = Column::new()
            .width(Length::Fill)
            .spacing(spacing::LG)
            .push(view_form(self, &ctx));
        if let Some(status) = self.status() {
            content = content.push(view_status(status, &ctx));
        }
        content.push(view_list(self, &ctx)).into()
    }
}

fn view_form<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("catalog-form-title")).size(typography::TITLE_LG);

    let mut form = Column::new().spacing(spacing::SM).push(title);
    for field in DraftField::ALL {
        let input = text_input("", state.draft_field(field))
            .on_input(move |value| Message::FieldChanged(field, value))
            .on_submit(Message::Submit)
            .padding(spacing::XS)
            .size(typography::BODY);
        form = form.push(labeled_row(ctx.i18n.tr(field.label_key()), input.into()));
    }

    let file_name = state
        .draft()
        .image()
        .map(|upload| upload.file_name().to_string())
        .unwrap_or_else(|| ctx.i18n.tr("catalog-image-none"));
    let picker = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(
            button(text(ctx.i18n.tr("catalog-image-pick")).size(typography::BODY))
                .on_press(Message::PickImage),
        )
        .push(
            Text::new(file_name)
                .size(typography::CAPTION)
                .color(ctx.colors.text_secondary),
        );
    form = form.push(labeled_row(ctx.i18n.tr("catalog-field-image"), picker.into()));

    let submit_label = if state.is_creating() {
        ctx.i18n.tr("catalog-submitting")
    } else {
        ctx.i18n.tr("catalog-submit")
    };
    let submit = button(text(submit_label).size(typography::BODY))
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .style(button::primary);
    let submit = if state.can_submit() {
        submit.on_press(Message::Submit)
    } else {
        submit
    };

    form.push(submit).into()
}

fn labeled_row<'a>(label: String, control: Element<'a, Message>) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(
            Text::new(label)
                .size(typography::BODY)
                .width(Length::Fixed(sizing::LABEL_WIDTH)),
        )
        .push(Container::new(control).width(Length::Fill))
        .into()
}

fn view_status<'a>(status: &Status, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let color = if status.is_error() {
        ctx.colors.error
    } else {
        ctx.colors.success
    };

    let line = Column::new().spacing(spacing::XXS).push(
        Text::new(ctx.i18n.tr(status.message_key()))
            .size(typography::BODY)
            .color(color),
    );

    match status.cause_key() {
        Some(key) => line
            .push(
                Text::new(ctx.i18n.tr(key))
                    .size(typography::CAPTION)
                    .color(ctx.colors.text_secondary),
            )
            .into(),
        None => line.into(),
    }
}

fn view_list<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let reload = button(text(ctx.i18n.tr("catalog-reload")).size(typography::BODY))
        .style(button::secondary);
    let reload = if state.is_loading() {
        reload
    } else {
        reload.on_press(Message::Reload)
    };

    let header = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(
            Text::new(ctx.i18n.tr("catalog-list-title"))
                .size(typography::TITLE_LG)
                .width(Length::Fill),
        )
        .push(reload);

    let mut list = Column::new().spacing(spacing::SM).push(header);

    match state.products() {
        Some(products) if !products.is_empty() => {
            for product in products {
                list = list.push(view_product(state, product, ctx));
            }
        }
        _ => {
            let key = if state.is_loading() {
                "catalog-list-loading"
            } else {
                "catalog-list-empty"
            };
            list = list.push(
                Text::new(ctx.i18n.tr(key))
                    .size(typography::BODY)
                    .color(ctx.colors.text_secondary),
            );
        }
    }

    list.into()
}

fn view_product<'a>(
    state: &'a State,
    product: &'a Product,
    ctx: &ViewContext<'a>,
) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let picture: Element<'a, Message> = match state.thumbnail(product.id) {
        Some(handle) => Image::new(handle.clone())
            .width(Length::Fixed(THUMBNAIL_SIZE))
            .height(Length::Fixed(THUMBNAIL_SIZE))
            .into(),
        None => Text::new(i18n.tr("catalog-product-no-image"))
            .size(typography::CAPTION)
            .color(ctx.colors.text_secondary)
            .into(),
    };

    let details = Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fill)
        .push(Text::new(product.name.as_str()).size(typography::TITLE_SM))
        .push(
            Text::new(i18n.tr_with_args("catalog-product-price", &[("price", product.price.as_str())]))
                .size(typography::BODY),
        )
        .push(
            Text::new(i18n.tr_with_args("catalog-product-stock", &[("stock", product.stock.as_str())]))
                .size(typography::BODY),
        )
        .push(Text::new(i18n.tr("catalog-product-image")).size(typography::BODY))
        .push(picture);

    let deleting = state.is_deleting(product.id);
    let delete_label = if deleting {
        i18n.tr("catalog-deleting")
    } else {
        i18n.tr("catalog-delete")
    };
    let delete = button(text(delete_label).size(typography::BODY)).style(button::danger);
    let delete = if deleting {
        delete
    } else {
        delete.on_press(Message::Delete(product.id))
    };

    let background = ctx.colors.surface_card;
    Container::new(
        Row::new()
            .spacing(spacing::MD)
            .align_y(Vertical::Center)
            .push(details)
            .push(delete),
    )
    .padding(spacing::SM)
    .width(Length::Fill)
    .align_x(Horizontal::Left)
    .style(move |_theme| container::Style {
        background: Some(background.into()),
        border: Border {
            radius: radius::MD.into(),
            ..Border::default()
        },
        ..container::Style::default()
    })
    .into()
}
