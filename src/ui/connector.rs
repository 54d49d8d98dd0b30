//! egui-Backend des Connectors: Drag, Anker, Verbindungslinien und Overlays.

use super::theme::rgba_to_color32;
use super::{node_screen_rect, to_vec2};
use crate::connector::{ConnectionRole, Connector, ConnectorError, ConnectorEvent};
use crate::core::{Connection, ConnectionHandle, ConnectionKey, FlowNode, NodeId, Viewport};
use crate::shared::EditorOptions;
use egui::{Align2, Color32, FontId, Pos2, Rect, Sense, Shape, Stroke, Vec2 as EguiVec2};
use glam::Vec2;
use indexmap::IndexMap;
use std::collections::{HashMap, HashSet};

/// Laufender Verbindungs-Drag vom Anker eines Knotens
#[derive(Debug, Clone)]
struct PendingConnection {
    source: NodeId,
    pointer: Pos2,
}

/// Connector, der Knoten-Boxen zieh- und verbindbar macht.
///
/// Die Knoten-Boxen selbst zeichnet der Workspace; ein Knoten gilt erst als
/// anmeldbar, wenn seine Box im laufenden Frame gezeichnet wurde.
#[derive(Debug)]
pub struct EguiConnector {
    /// Angemeldete Knoten mit ihrer Canvas-Position
    nodes: IndexMap<NodeId, Vec2>,
    connections: IndexMap<ConnectionHandle, ConnectionKey>,
    overlays: HashMap<ConnectionHandle, String>,
    /// Im laufenden Frame gezeichnete Knoten-Boxen
    painted: HashSet<NodeId>,
    pending: Vec<ConnectorEvent>,
    drawing: Option<PendingConnection>,
    viewport: Viewport,
    repaint_requested: bool,
}

impl Default for EguiConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl EguiConnector {
    /// Erstellt einen leeren Connector mit Zoom 1.0
    pub fn new() -> Self {
        Self {
            nodes: IndexMap::new(),
            connections: IndexMap::new(),
            overlays: HashMap::new(),
            painted: HashSet::new(),
            pending: Vec::new(),
            drawing: None,
            viewport: Viewport::new(),
            repaint_requested: false,
        }
    }

    /// Beginnt einen Frame: vergisst die gezeichneten Boxen des Vorframes.
    pub fn begin_frame(&mut self) {
        self.painted.clear();
    }

    /// Meldet, dass die Box eines Knotens in diesem Frame gezeichnet wurde.
    pub fn mark_painted(&mut self, node_id: &NodeId) {
        self.painted.insert(node_id.clone());
    }

    /// Liefert und quittiert eine Neuzeichnen-Anforderung.
    pub fn take_repaint_request(&mut self) -> bool {
        std::mem::take(&mut self.repaint_requested)
    }

    fn zoom(&self) -> f32 {
        self.viewport.zoom()
    }

    fn node_rect(&self, origin: Pos2, position: Vec2, options: &EditorOptions) -> Rect {
        node_screen_rect(position, origin, &self.viewport, options)
    }

    fn anchor_center(rect: Rect) -> Pos2 {
        Pos2::new(rect.right(), rect.center().y)
    }

    /// Registrierter Knoten unter einer Screen-Position (oberster zuerst).
    fn node_at(&self, origin: Pos2, pos: Pos2, options: &EditorOptions) -> Option<&NodeId> {
        self.nodes
            .iter()
            .rev()
            .find(|(_, position)| self.node_rect(origin, **position, options).contains(pos))
            .map(|(id, _)| id)
    }

    /// Endpunkte einer Verbindung auf den Box-Rändern.
    fn connection_segment(
        &self,
        origin: Pos2,
        key: &ConnectionKey,
        options: &EditorOptions,
    ) -> Option<(Pos2, Pos2)> {
        let source = self.node_rect(origin, *self.nodes.get(&key.source)?, options);
        let target = self.node_rect(origin, *self.nodes.get(&key.target)?, options);
        let from = clip_to_rect(source, target.center());
        let to = clip_to_rect(target, source.center());
        Some((from, to))
    }

    /// Zeichnet Verbindungen, Pfeile und Beschreibungs-Overlays.
    pub fn paint_connections(&self, painter: &egui::Painter, origin: Pos2, options: &EditorOptions) {
        let color = rgba_to_color32(options.connection_color);
        let stroke = Stroke::new(options.connection_width * self.zoom().max(0.5), color);

        for (handle, key) in &self.connections {
            let Some((from, to)) = self.connection_segment(origin, key, options) else {
                continue;
            };
            painter.line_segment([from, to], stroke);
            painter.add(arrow_head(from, to, options.arrow_size * self.zoom(), color));

            if let Some(text) = self.overlays.get(handle) {
                let midpoint = from + (to - from) * 0.5;
                let galley = painter.layout_no_wrap(
                    text.clone(),
                    FontId::proportional(options.description_font_size * self.zoom()),
                    Color32::from_rgb(0x37, 0x41, 0x51),
                );
                let rect = Align2::CENTER_CENTER
                    .anchor_size(midpoint, galley.size())
                    .expand(3.0);
                painter.rect_filled(rect, 3.0, Color32::WHITE);
                painter.galley(rect.min + EguiVec2::splat(3.0), galley, Color32::BLACK);
            }
        }
    }

    /// Verarbeitet Drag, Anker und Rechtsklicks der registrierten Knoten und
    /// Verbindungen. Gesten landen als Events in der Warteschlange.
    pub fn interact(
        &mut self,
        ui: &mut egui::Ui,
        canvas: &egui::Response,
        origin: Pos2,
        options: &EditorOptions,
    ) {
        let mut node_hit = false;
        let ids: Vec<NodeId> = self.nodes.keys().cloned().collect();

        for node_id in ids {
            let Some(&position) = self.nodes.get(&node_id) else {
                continue;
            };
            let rect = self.node_rect(origin, position, options);

            let body = ui.interact(
                rect,
                ui.id().with(("flow_node", node_id.as_str())),
                Sense::click_and_drag(),
            );
            let delta = body.drag_delta();
            if body.dragged() && delta != EguiVec2::ZERO {
                let moved = position + Vec2::new(delta.x, delta.y) / self.zoom();
                self.nodes.insert(node_id.clone(), moved);
                self.pending.push(ConnectorEvent::NodeDragged {
                    node_id: node_id.clone(),
                    position: moved,
                });
            }
            if body.secondary_clicked() {
                node_hit = true;
                let screen_pos = body
                    .interact_pointer_pos()
                    .unwrap_or_else(|| rect.center());
                self.pending.push(ConnectorEvent::NodeContextMenu {
                    node_id: node_id.clone(),
                    screen_pos: to_vec2(screen_pos),
                });
            }

            let anchor = Self::anchor_center(rect);
            let radius = options.anchor_radius * self.zoom().max(0.5);
            let anchor_response = ui.interact(
                Rect::from_center_size(anchor, EguiVec2::splat(radius * 2.5)),
                ui.id().with(("flow_anchor", node_id.as_str())),
                Sense::drag(),
            );
            let anchor_color = if anchor_response.hovered() {
                Color32::from_rgb(0x37, 0x41, 0x51)
            } else {
                rgba_to_color32(options.connection_color)
            };
            ui.painter().circle_filled(anchor, radius, anchor_color);

            if anchor_response.drag_started() {
                self.drawing = Some(PendingConnection {
                    source: node_id.clone(),
                    pointer: anchor,
                });
            }
            if anchor_response.dragged() {
                if let (Some(drawing), Some(pointer)) =
                    (self.drawing.as_mut(), anchor_response.interact_pointer_pos())
                {
                    drawing.pointer = pointer;
                }
            }
            if anchor_response.drag_stopped() {
                self.finish_drawing(origin, options);
            }
        }

        if let Some(drawing) = &self.drawing {
            if let Some(&source_pos) = self.nodes.get(&drawing.source) {
                let from = Self::anchor_center(self.node_rect(origin, source_pos, options));
                ui.painter().line_segment(
                    [from, drawing.pointer],
                    Stroke::new(
                        options.connection_width,
                        rgba_to_color32(options.connection_color),
                    ),
                );
            }
        }

        if !node_hit && canvas.secondary_clicked() {
            if let Some(pointer) = canvas.interact_pointer_pos() {
                if let Some(handle) = self.connection_at(origin, pointer, options) {
                    self.pending.push(ConnectorEvent::ConnectionContextMenu {
                        handle,
                        screen_pos: to_vec2(pointer),
                    });
                }
            }
        }
    }

    fn finish_drawing(&mut self, origin: Pos2, options: &EditorOptions) {
        let Some(drawing) = self.drawing.take() else {
            return;
        };
        match self.node_at(origin, drawing.pointer, options).cloned() {
            Some(target) => self.pending.push(ConnectorEvent::ConnectionDrawn {
                from_id: drawing.source,
                to_id: target,
            }),
            None => log::debug!("Verbindung von {} ohne Ziel losgelassen", drawing.source),
        }
    }

    /// Verbindung innerhalb der Hit-Toleranz (nächste zuerst).
    fn connection_at(
        &self,
        origin: Pos2,
        pointer: Pos2,
        options: &EditorOptions,
    ) -> Option<ConnectionHandle> {
        self.connections
            .iter()
            .filter_map(|(handle, key)| {
                let (from, to) = self.connection_segment(origin, key, options)?;
                let distance = distance_to_segment(pointer, from, to);
                (distance <= options.connection_hit_tolerance_px).then_some((*handle, distance))
            })
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(handle, _)| handle)
    }
}

impl Connector for EguiConnector {
    fn register_node(&mut self, node: &FlowNode) -> Result<(), ConnectorError> {
        if !self.painted.contains(node.id()) {
            return Err(ConnectorError::MissingVisualElement(node.id().clone()));
        }
        self.nodes.insert(node.id().clone(), node.position());
        Ok(())
    }

    fn is_registered(&self, node_id: &NodeId) -> bool {
        self.nodes.contains_key(node_id)
    }

    fn refresh_node(&mut self, node: &FlowNode) {
        if let Some(position) = self.nodes.get_mut(node.id()) {
            *position = node.position();
        }
    }

    fn unregister_node(&mut self, node_id: &NodeId) {
        self.nodes.shift_remove(node_id);
        if self
            .drawing
            .as_ref()
            .is_some_and(|drawing| drawing.source == *node_id)
        {
            self.drawing = None;
        }
    }

    fn attach_connection(&mut self, connection: &Connection) {
        self.connections
            .insert(connection.handle(), connection.key().clone());
    }

    fn connections_of(&self, node_id: &NodeId, role: ConnectionRole) -> Vec<ConnectionHandle> {
        self.connections
            .iter()
            .filter(|(_, key)| match role {
                ConnectionRole::Source => key.source == *node_id,
                ConnectionRole::Target => key.target == *node_id,
            })
            .map(|(handle, _)| *handle)
            .collect()
    }

    fn remove_connection_visual(
        &mut self,
        handle: ConnectionHandle,
    ) -> Result<(), ConnectorError> {
        self.overlays.remove(&handle);
        self.connections
            .shift_remove(&handle)
            .map(|_| ())
            .ok_or(ConnectorError::UnknownConnection(handle))
    }

    fn remove_label_overlay(&mut self, handle: ConnectionHandle) -> Result<(), ConnectorError> {
        self.overlays.remove(&handle);
        Ok(())
    }

    fn add_label_overlay(
        &mut self,
        handle: ConnectionHandle,
        text: &str,
    ) -> Result<(), ConnectorError> {
        if !self.connections.contains_key(&handle) {
            return Err(ConnectorError::UnknownConnection(handle));
        }
        self.overlays.insert(handle, text.to_owned());
        Ok(())
    }

    fn set_zoom(&mut self, zoom: f32) {
        self.viewport = Viewport::from_zoom(zoom);
    }

    fn repaint_everything(&mut self) {
        self.repaint_requested = true;
    }

    fn drain_events(&mut self) -> Vec<ConnectorEvent> {
        std::mem::take(&mut self.pending)
    }

    fn destroy(&mut self) {
        self.nodes.clear();
        self.connections.clear();
        self.overlays.clear();
        self.pending.clear();
        self.drawing = None;
        self.painted.clear();
        log::debug!("Connector freigegeben");
    }
}

/// Schneidet den Strahl vom Rechteck-Zentrum Richtung `toward` am Rand ab.
fn clip_to_rect(rect: Rect, toward: Pos2) -> Pos2 {
    let center = rect.center();
    let dir = toward - center;
    if dir == EguiVec2::ZERO {
        return center;
    }
    let half = rect.size() * 0.5;
    let tx = if dir.x != 0.0 { half.x / dir.x.abs() } else { f32::INFINITY };
    let ty = if dir.y != 0.0 { half.y / dir.y.abs() } else { f32::INFINITY };
    center + dir * tx.min(ty).min(1.0)
}

/// Gefülltes Dreieck an der Zielspitze.
fn arrow_head(from: Pos2, to: Pos2, size: f32, color: Color32) -> Shape {
    let dir = (to - from).normalized();
    let normal = EguiVec2::new(-dir.y, dir.x);
    let base = to - dir * size;
    Shape::convex_polygon(
        vec![to, base + normal * size * 0.5, base - normal * size * 0.5],
        color,
        Stroke::NONE,
    )
}

/// Abstand eines Punktes zu einer Strecke.
fn distance_to_segment(p: Pos2, a: Pos2, b: Pos2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_sq();
    if len_sq == 0.0 {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn distance_to_segment_clamps_to_endpoints() {
        let a = Pos2::new(0.0, 0.0);
        let b = Pos2::new(10.0, 0.0);
        assert_relative_eq!(distance_to_segment(Pos2::new(5.0, 3.0), a, b), 3.0);
        assert_relative_eq!(distance_to_segment(Pos2::new(14.0, 3.0), a, b), 5.0);
    }

    #[test]
    fn clip_stops_at_box_border() {
        let rect = Rect::from_min_size(Pos2::new(0.0, 0.0), EguiVec2::new(100.0, 50.0));
        let clipped = clip_to_rect(rect, Pos2::new(300.0, 25.0));
        assert_relative_eq!(clipped.x, 100.0);
        assert_relative_eq!(clipped.y, 25.0);
    }

    #[test]
    fn unpainted_node_cannot_register() {
        let mut diagram = crate::core::Diagram::new();
        let item = crate::core::palette_item(crate::core::NodeKind::Start).expect("Vorlage");
        let node = diagram.add_node(&item, Vec2::ZERO).expect("ok").clone();
        let mut connector = EguiConnector::new();

        assert_eq!(
            connector.register_node(&node),
            Err(ConnectorError::MissingVisualElement(node.id().clone()))
        );
        connector.mark_painted(node.id());
        assert!(connector.register_node(&node).is_ok());
    }
}
