//! Pieces shared by the three screens.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Paragraph, Widget},
};

use super::utils::{inset_vertical, wrap_text};
use crate::presentation::theme::{StyleName, StyleSheet, Theme};
use crate::presentation::widgets::{LoadingIndicator, spinner_frame};

/// Read-only inputs every screen needs to draw itself.
#[derive(Debug, Clone, Copy)]
pub struct ScreenContext<'a> {
    pub styles: &'a StyleSheet,
    pub theme: &'a Theme,
    pub tick: usize,
    pub timestamp_format: &'a str,
}

/// Inner area of the `container` style.
pub(super) fn container(ctx: &ScreenContext<'_>, area: Rect, buf: &mut Buffer) -> Rect {
    let block = ctx.styles.get(StyleName::Container).block();
    let inner = block.inner(area);
    block.render(area, buf);
    inner
}

/// Rows taken by the `title_text` style.
pub(super) fn title_height(ctx: &ScreenContext<'_>) -> u16 {
    1 + 2 * ctx.styles.get(StyleName::TitleText).margin_y
}

pub(super) fn render_title(ctx: &ScreenContext<'_>, text: &str, area: Rect, buf: &mut Buffer) {
    let spec = ctx.styles.get(StyleName::TitleText);
    Paragraph::new(text)
        .style(spec.style)
        .alignment(spec.alignment)
        .render(inset_vertical(area, spec.margin_y), buf);
}

/// Rows the error banner needs at `width`.
pub(super) fn error_height(ctx: &ScreenContext<'_>, message: &str, width: u16) -> u16 {
    let spec = ctx.styles.get(StyleName::ErrorText);
    let inner = width.saturating_sub(spec.padding.left + spec.padding.right);
    let rows = u16::try_from(wrap_text(message, inner).len()).unwrap_or(u16::MAX);
    rows.saturating_add(2 * spec.margin_y)
}

pub(super) fn render_error(ctx: &ScreenContext<'_>, message: &str, area: Rect, buf: &mut Buffer) {
    let spec = ctx.styles.get(StyleName::ErrorText);
    let area = inset_vertical(area, spec.margin_y);
    let block = spec.block();
    let inner = block.inner(area);
    block.render(area, buf);

    let lines: Vec<Line> = wrap_text(message, inner.width)
        .into_iter()
        .map(Line::from)
        .collect();
    Paragraph::new(lines)
        .style(spec.style)
        .alignment(spec.alignment)
        .render(inner, buf);
}

pub(super) fn render_loading(ctx: &ScreenContext<'_>, message: &str, area: Rect, buf: &mut Buffer) {
    LoadingIndicator::new(message, ctx.tick)
        .style(ctx.styles.style(StyleName::LoadingContainer))
        .render(area, buf);
}

/// One-line refresh marker drawn above the content.
pub(super) fn render_refreshing(ctx: &ScreenContext<'_>, area: Rect, buf: &mut Buffer) {
    Paragraph::new(format!("{} Refreshing...", spinner_frame(ctx.tick)))
        .style(
            Style::default()
                .fg(ctx.theme.accent)
                .add_modifier(Modifier::ITALIC),
        )
        .alignment(ratatui::layout::Alignment::Center)
        .render(area, buf);
}

/// Muted centered text for "nothing here" states.
pub(super) fn render_placeholder(
    ctx: &ScreenContext<'_>,
    message: &str,
    area: Rect,
    buf: &mut Buffer,
) {
    Paragraph::new(message)
        .style(ctx.theme.dimmed_style)
        .alignment(ratatui::layout::Alignment::Center)
        .render(area, buf);
}
