//! Shape rendering
//!
//! Filled quads are meshes, rebuilt whenever the shape list changes.
//! Outlines and handles are gizmos, drawn fresh every frame.

use bevy::prelude::*;
use bevy::render::mesh::{Indices, Mesh2d};
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::render_resource::PrimitiveTopology;
use bevy::sprite::{ColorMaterial, MeshMaterial2d};
use kurbo::Point;

use crate::core::config::QuadSettings;
use crate::core::state::{Shape, ShapeId, ShapeList};
use crate::editing::DragSession;
use crate::geometry::utilities::edge_midpoint;
use crate::geometry::{to_vec2, DragTarget, QUAD_CORNERS};

pub const OUTLINE_COLOR: Color = Color::srgb(0.85, 0.85, 0.85);
pub const SELECTED_OUTLINE_COLOR: Color = Color::srgb(1.0, 0.85, 0.2);
pub const ANCHOR_COLOR: Color = Color::srgb(0.6, 0.6, 0.6);
pub const HANDLE_COLOR: Color = Color::srgb(1.0, 0.0, 1.0);
pub const ACTIVE_HANDLE_COLOR: Color = Color::WHITE;

/// Fill opacity, so overlapping shapes stay readable
const FILL_ALPHA: f32 = 0.55;
/// Depth step between shapes, later shapes draw on top
const FILL_Z_STEP: f32 = 0.1;

/// Marks the fill mesh entity of one shape
#[derive(Component)]
pub struct ShapeFillMesh {
    pub shape: ShapeId,
}

/// Build a two-triangle fill mesh from four world-space corners
pub fn quad_fill_mesh(corners: &[Point; QUAD_CORNERS]) -> Mesh {
    let vertices: Vec<[f32; 3]> = corners
        .iter()
        .map(|p| [p.x as f32, p.y as f32, 0.0])
        .collect();
    let indices = vec![0, 1, 2, 0, 2, 3];
    let normals = vec![[0.0, 0.0, 1.0]; QUAD_CORNERS];

    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::RENDER_WORLD,
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, vertices);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh.insert_indices(Indices::U32(indices));
    mesh
}

/// System to respawn fill meshes after the shape list changes
pub fn render_shape_fills(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    shapes: Res<ShapeList>,
    existing_fills: Query<Entity, With<ShapeFillMesh>>,
) {
    if !shapes.is_changed() {
        return;
    }

    for entity in existing_fills.iter() {
        if let Ok(mut entity_commands) = commands.get_entity(entity) {
            entity_commands.despawn();
        }
    }

    for (index, shape) in shapes.iter().enumerate() {
        let color = shape.color.with_alpha(FILL_ALPHA);
        commands.spawn((
            ShapeFillMesh { shape: shape.id },
            Mesh2d(meshes.add(quad_fill_mesh(&shape.world_points()))),
            MeshMaterial2d(materials.add(ColorMaterial::from_color(color))),
            Transform::from_xyz(0.0, 0.0, index as f32 * FILL_Z_STEP),
        ));
    }
}

/// System to draw outlines, anchors and handles
pub fn render_shape_handles(
    mut gizmos: Gizmos,
    shapes: Res<ShapeList>,
    session: Res<DragSession>,
    settings: Res<QuadSettings>,
) {
    for shape in shapes.iter() {
        let active = session
            .active()
            .filter(|drag| drag.shape == shape.id)
            .map(|drag| drag.target);
        draw_outline(&mut gizmos, shape, shapes.is_selected(shape.id));
        draw_handles(&mut gizmos, shape, active, &settings);
    }
}

fn draw_outline(gizmos: &mut Gizmos, shape: &Shape, selected: bool) {
    let color = if selected {
        SELECTED_OUTLINE_COLOR
    } else {
        OUTLINE_COLOR
    };
    let corners = shape.world_points();
    let closed = corners
        .iter()
        .chain(corners.first())
        .map(|p| to_vec2(*p));
    gizmos.linestrip_2d(closed, color);
}

fn draw_handles(
    gizmos: &mut Gizmos,
    shape: &Shape,
    active: Option<DragTarget>,
    settings: &QuadSettings,
) {
    let pick = |target: DragTarget, idle: Color| {
        if active == Some(target) {
            ACTIVE_HANDLE_COLOR
        } else {
            idle
        }
    };

    let corners = shape.world_points();
    for i in 0..QUAD_CORNERS {
        gizmos.circle_2d(
            Isometry2d::from_translation(to_vec2(corners[i])),
            settings.corner_handle_radius,
            pick(DragTarget::Corner(i), HANDLE_COLOR),
        );
        gizmos.circle_2d(
            Isometry2d::from_translation(to_vec2(edge_midpoint(&corners, i))),
            settings.edge_handle_radius,
            pick(DragTarget::Edge(i), HANDLE_COLOR),
        );
    }

    let anchor = to_vec2(shape.anchor_world());
    let anchor_color = pick(DragTarget::Anchor, ANCHOR_COLOR);
    let r = settings.anchor_radius;
    gizmos.circle_2d(Isometry2d::from_translation(anchor), r, anchor_color);
    // Crosshair
    gizmos.line_2d(anchor - Vec2::X * r, anchor + Vec2::X * r, anchor_color);
    gizmos.line_2d(anchor - Vec2::Y * r, anchor + Vec2::Y * r, anchor_color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::render::mesh::VertexAttributeValues;

    #[test]
    fn test_fill_mesh_has_two_triangles_at_the_corners() {
        let corners = [
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(2.0, 1.0),
            Point::new(0.0, 1.0),
        ];
        let mesh = quad_fill_mesh(&corners);
        assert_eq!(mesh.indices().map(|i| i.len()), Some(6));
        match mesh.attribute(Mesh::ATTRIBUTE_POSITION) {
            Some(VertexAttributeValues::Float32x3(positions)) => {
                assert_eq!(positions[2], [2.0, 1.0, 0.0]);
            }
            other => panic!("unexpected positions: {other:?}"),
        }
    }
}
