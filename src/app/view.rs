// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application shell: header, settings warning and the
//! scrollable catalog screen.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::catalog;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::theming::{ColorScheme, ThemeMode};
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, scrollable, text, Column, Container, Row, Text},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub catalog: &'a catalog::State,
    pub theme_mode: ThemeMode,
    pub config_warning: Option<&'a str>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let colors = ctx.theme_mode.colors();

    let mut column = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(view_header(ctx.i18n, ctx.theme_mode, &colors));

    if let Some(key) = ctx.config_warning {
        column = column.push(view_warning(ctx.i18n, key, &colors));
    }

    let catalog_view = ctx
        .catalog
        .view(catalog::ViewContext {
            i18n: ctx.i18n,
            colors,
        })
        .map(Message::Catalog);
    column = column.push(catalog_view);

    let content = Container::new(column)
        .width(Length::Fill)
        .align_x(Horizontal::Center);

    Container::new(scrollable(content).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_header<'a>(i18n: &I18n, mode: ThemeMode, colors: &ColorScheme) -> Element<'a, Message> {
    let mode_label = i18n.tr(mode.label_key());
    let toggle = button(
        text(i18n.tr_with_args("theme-toggle", &[("mode", mode_label.as_str())])).size(typography::CAPTION),
    )
    .style(button::secondary)
    .on_press(Message::ToggleTheme);

    Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(
            Text::new(i18n.tr("window-title"))
                .size(typography::TITLE_MD)
                .color(colors.text_primary)
                .width(Length::Fill),
        )
        .push(toggle)
        .into()
}

fn view_warning<'a>(i18n: &I18n, key: &str, colors: &ColorScheme) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(
            Text::new(i18n.tr(key))
                .size(typography::CAPTION)
                .color(colors.error)
                .width(Length::Fill),
        )
        .push(
            button(text(i18n.tr("notification-dismiss")).size(typography::CAPTION))
                .style(button::text)
                .on_press(Message::DismissWarning),
        )
        .into()
}
