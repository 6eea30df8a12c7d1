use eframe::egui::{self, Color32};

pub const BAR_FILL: Color32 = Color32::from_rgb(0x25, 0x63, 0xeb);
pub const AXIS_LABEL: Color32 = Color32::from_rgb(0x52, 0x60, 0x6d);
pub const ERROR_TEXT: Color32 = Color32::from_rgb(0xdc, 0x26, 0x26);
pub const OK_TEXT: Color32 = Color32::from_rgb(0x16, 0xa3, 0x4a);
pub const METRIC_SIZE: f32 = 34.0;
pub const CARD_SPACING: f32 = 16.0;

pub fn lighten_color(c: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |channel: u8| -> u8 {
        let channel = channel as f32;
        (channel + (255.0 - channel) * t).round().clamp(0.0, 255.0) as u8
    };
    Color32::from_rgba_unmultiplied(mix(c.r()), mix(c.g()), mix(c.b()), c.a())
}

pub fn api_environment_label(api_base_url: &str) -> &'static str {
    let server = api_base_url.to_ascii_lowercase();
    if server.contains("127.0.0.1") || server.contains("localhost") {
        "Local"
    } else if server.contains("staging") {
        "Staging"
    } else if server.contains("dev") {
        "Development"
    } else {
        "Production"
    }
}

/// Framed section with a heading, matching the dashboard's card layout.
pub fn card<R>(ui: &mut egui::Ui, title: &str, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> R {
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.heading(title);
            ui.add_space(6.0);
            add_contents(ui)
        })
        .inner
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lighten_moves_channels_toward_white() {
        assert_eq!(lighten_color(BAR_FILL, 0.0), BAR_FILL);
        assert_eq!(lighten_color(BAR_FILL, 1.0), Color32::WHITE);
        let half = lighten_color(Color32::from_rgb(0, 100, 255), 0.5);
        assert_eq!((half.r(), half.g(), half.b()), (128, 178, 255));
    }

    #[test]
    fn labels_api_environment() {
        assert_eq!(api_environment_label("http://localhost:8000"), "Local");
        assert_eq!(api_environment_label("https://staging.launches.example"), "Staging");
        assert_eq!(api_environment_label("https://launches.example"), "Production");
    }
}
