//! Mausrad-Zoom über dem Canvas.

use crate::app::AppIntent;

/// Übersetzt Mausrad-Gesten über dem Canvas in `WheelScrolled`.
///
/// egui wandelt Ctrl/Cmd + Rad bereits in einen `zoom_delta` um; dieser wird
/// auf die Richtung eines modifizierten Rad-Schritts zurückgeführt.
pub fn collect_wheel_intents(ui: &egui::Ui, canvas: &egui::Response) -> Vec<AppIntent> {
    if !canvas.contains_pointer() {
        return Vec::new();
    }

    let (zoom_delta, scroll_y, modifiers) =
        ui.input(|i| (i.zoom_delta(), i.raw_scroll_delta.y, i.modifiers));

    if zoom_delta != 1.0 {
        // Rad nach oben (zoom_delta > 1) entspricht negativem delta_y
        let delta_y = if zoom_delta > 1.0 { -1.0 } else { 1.0 };
        return vec![AppIntent::WheelScrolled {
            delta_y,
            zoom_modifier: true,
        }];
    }

    if scroll_y == 0.0 {
        return Vec::new();
    }
    vec![AppIntent::WheelScrolled {
        delta_y: -scroll_y,
        zoom_modifier: modifiers.command || modifiers.ctrl,
    }]
}
