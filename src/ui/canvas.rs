//! Workspace: Kopfzeile, Canvas mit Knoten-Boxen, Drop-Ziel der Palette.

use super::connector::EguiConnector;
use super::editors::render_label_editor;
use super::input::collect_wheel_intents;
use super::palette::render_sidebar_handles;
use super::theme::node_color;
use super::{node_screen_rect, to_vec2};
use crate::app::{AppIntent, AppState};
use crate::core::{CanvasRect, FlowNode, PaletteItem};
use crate::shared::EditorOptions;
use egui::{Align2, Color32, CornerRadius, FontId, Rect, Sense, Stroke, StrokeKind, Vec2};

const HEADER_HEIGHT: f32 = 36.0;
const STRIPE_HEIGHT: f32 = 4.0;

/// Zeichnet eine Knoten-Box: weiße Fläche, Farbstreifen, Label und Typ.
fn paint_node(
    painter: &egui::Painter,
    node: &FlowNode,
    rect: Rect,
    zoom: f32,
    options: &EditorOptions,
    show_label: bool,
) {
    let color = node_color(node.color());
    painter.rect(
        rect,
        CornerRadius::same(6),
        Color32::WHITE,
        Stroke::new(1.0, Color32::from_gray(210)),
        StrokeKind::Inside,
    );
    painter.rect_filled(
        Rect::from_min_size(rect.min, Vec2::new(rect.width(), STRIPE_HEIGHT * zoom)),
        CornerRadius {
            nw: 6,
            ne: 6,
            sw: 0,
            se: 0,
        },
        color,
    );
    if show_label {
        painter.text(
            rect.center() - Vec2::new(0.0, 6.0 * zoom),
            Align2::CENTER_CENTER,
            node.label(),
            FontId::proportional(options.label_font_size * zoom),
            Color32::from_rgb(0x1f, 0x29, 0x37),
        );
    }
    painter.text(
        rect.center_bottom() - Vec2::new(0.0, 10.0 * zoom),
        Align2::CENTER_CENTER,
        node.kind().as_str(),
        FontId::proportional(options.type_font_size * zoom),
        Color32::from_gray(120),
    );
}

/// Rendert den Workspace und sammelt die Intents des Frames.
///
/// Reihenfolge: Verbindungen, Knoten-Boxen, Connector-Gesten, Label-Editor.
/// Die Boxen werden vor der Anmeldung beim Connector gezeichnet, damit
/// `register_node` im selben Frame ihr Visual findet.
pub fn render_workspace(
    ctx: &egui::Context,
    state: &mut AppState,
    connector: &mut EguiConnector,
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::CentralPanel::default()
        .frame(egui::Frame::new().fill(Color32::from_rgb(0xf3, 0xf4, 0xf6)))
        .show(ctx, |ui| {
            let workspace = ui.max_rect();
            events.extend(render_sidebar_handles(
                ui,
                workspace,
                &state.interaction.sidebar,
            ));

            ui.allocate_ui(Vec2::new(ui.available_width(), HEADER_HEIGHT), |ui| {
                ui.horizontal_centered(|ui| {
                    ui.add_space(28.0);
                    ui.heading("流程图工作台");
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.add_space(12.0);
                        ui.label(format!(
                            "{:.0}%",
                            state.view.viewport.zoom() * 100.0
                        ));
                    });
                });
            });

            let (canvas_rect, canvas) =
                ui.allocate_exact_size(ui.available_size(), Sense::click());
            let origin = canvas_rect.min;
            let viewport = state.view.viewport.clone();
            let zoom = viewport.zoom();
            let options = state.options.clone();
            let painter = ui.painter_at(canvas_rect);
            painter.rect_filled(canvas_rect, CornerRadius::ZERO, Color32::WHITE);

            if let Some(item) = canvas.dnd_release_payload::<PaletteItem>() {
                if let Some(pointer) = ui.input(|i| i.pointer.interact_pos()) {
                    events.push(AppIntent::PaletteItemDropped {
                        item: (*item).clone(),
                        screen_pos: to_vec2(pointer),
                        container: CanvasRect::from_min_max(
                            to_vec2(canvas_rect.min),
                            to_vec2(canvas_rect.max),
                        ),
                    });
                }
            }

            if state.diagram.is_empty() {
                painter.text(
                    canvas_rect.center(),
                    Align2::CENTER_CENTER,
                    "将左侧控件拖入此处",
                    FontId::proportional(16.0),
                    Color32::from_gray(160),
                );
            }

            connector.begin_frame();
            connector.paint_connections(&painter, origin, &options);

            let editing = state
                .interaction
                .label_editor()
                .map(|editor| editor.node_id.clone());
            for node in state.diagram.nodes_iter() {
                let rect = node_screen_rect(node.position(), origin, &viewport, &options);
                let show_label = editing.as_ref() != Some(node.id());
                paint_node(&painter, node, rect, zoom, &options, show_label);
                connector.mark_painted(node.id());
            }

            connector.interact(ui, &canvas, origin, &options);

            let editor_rect = editing
                .as_ref()
                .and_then(|id| state.diagram.node(id))
                .map(|node| {
                    let rect = node_screen_rect(node.position(), origin, &viewport, &options);
                    Rect::from_center_size(
                        rect.center() - Vec2::new(0.0, 6.0 * zoom),
                        Vec2::new(rect.width() - 12.0, 22.0 * zoom.max(1.0)),
                    )
                });
            if let (Some(rect), Some(editor)) =
                (editor_rect, state.interaction.label_editor_mut())
            {
                events.extend(render_label_editor(ui, rect, editor));
            }

            events.extend(collect_wheel_intents(ui, &canvas));
        });

    events
}
