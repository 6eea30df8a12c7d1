//! Paints the attempts-per-year chart layout into an egui panel.

use client_core::view::chart::{
    Bar, ChartLayout, BAR_CORNER_RADIUS, CHART_HEIGHT, CHART_WIDTH, LABEL_FONT_SIZE,
};
use eframe::egui::{self, Align2, CornerRadius, FontId, Pos2, Rect, Sense};

use crate::ui::theme::{lighten_color, AXIS_LABEL, BAR_FILL};

/// Maps chart coordinates onto `canvas`, stretching the fixed viewbox to fit.
pub fn to_screen(canvas: Rect, x: f32, y: f32) -> Pos2 {
    Pos2::new(
        canvas.min.x + x / CHART_WIDTH * canvas.width(),
        canvas.min.y + y / CHART_HEIGHT * canvas.height(),
    )
}

pub fn bar_screen_rect(canvas: Rect, bar: &Bar) -> Rect {
    let (x, y, width, height) = bar.rect();
    Rect::from_two_pos(
        to_screen(canvas, x, y),
        to_screen(canvas, x + width, y + height),
    )
}

pub fn show_attempts_chart(ui: &mut egui::Ui, layout: &ChartLayout) {
    let bars = match layout {
        ChartLayout::Placeholder(message) => {
            ui.label(*message);
            return;
        }
        ChartLayout::Bars(bars) => bars,
    };

    let width = ui.available_width().max(200.0);
    let size = egui::vec2(width, width * CHART_HEIGHT / CHART_WIDTH);
    let (response, painter) = ui.allocate_painter(size, Sense::hover());
    let canvas = response.rect;
    let hover = response.hover_pos();
    let radius = CornerRadius::same(BAR_CORNER_RADIUS as u8);

    let mut hovered: Option<&Bar> = None;
    for bar in bars {
        let rect = bar_screen_rect(canvas, bar);
        let slot = Rect::from_two_pos(
            to_screen(canvas, bar.x, 0.0),
            to_screen(canvas, bar.x + bar.width, CHART_HEIGHT),
        );
        let is_hovered = hover.is_some_and(|pos| slot.contains(pos));
        let fill = if is_hovered {
            hovered = Some(bar);
            lighten_color(BAR_FILL, 0.35)
        } else {
            BAR_FILL
        };
        painter.rect_filled(rect, radius, fill);

        if let Some(label) = &bar.label {
            painter.text(
                to_screen(canvas, label.x, label.y),
                Align2::CENTER_BOTTOM,
                &label.text,
                FontId::proportional(LABEL_FONT_SIZE),
                AXIS_LABEL,
            );
        }
    }

    if let Some(bar) = hovered {
        response.on_hover_text(format!("{}: {} attempts", bar.year, bar.count));
    }
}
