//! Box room (floor, back wall, side walls, ceiling) sized around the placed
//! paintings. All meshes are emitted directly in world space.

use crate::constants::{FLOOR_COLOR, ROOM_FLOOR_DEPTH, ROOM_FRONT_WALL_Z, ROOM_PADDING, WALL_COLOR};
use crate::mesh::MeshData;
use glam::Vec3;

#[derive(Clone, Debug)]
pub struct RoomPart {
    pub name: &'static str,
    pub mesh: MeshData,
    pub color: [f32; 3],
}

/// Union of world-space boxes, `None` for an empty input.
pub fn union_bounds(boxes: impl IntoIterator<Item = (Vec3, Vec3)>) -> Option<(Vec3, Vec3)> {
    boxes
        .into_iter()
        .reduce(|(lo_a, hi_a), (lo_b, hi_b)| (lo_a.min(lo_b), hi_a.max(hi_b)))
}

/// Build the room around `paintings_bounds`. No paintings, no room.
pub fn build_room(paintings_bounds: Option<(Vec3, Vec3)>) -> Vec<RoomPart> {
    let Some((lo, hi)) = paintings_bounds else {
        log::warn!("[layout] no paintings placed, skipping room");
        return Vec::new();
    };
    let center = (lo + hi) * 0.5;
    let size = hi - lo;

    let width = size.x + ROOM_PADDING;
    let height = size.y + ROOM_PADDING;
    let depth = ROOM_FLOOR_DEPTH;
    let y_min = center.y - height * 0.5;
    let y_max = center.y + height * 0.5;
    let z_mid = ROOM_FRONT_WALL_Z + depth * 0.5;

    let (hw, hh, hd) = (width * 0.5, height * 0.5, depth * 0.5);

    vec![
        RoomPart {
            name: "floor",
            mesh: wall_quad(Vec3::new(center.x, y_min, z_mid), Vec3::X, Vec3::NEG_Z, hw, hd),
            color: FLOOR_COLOR,
        },
        RoomPart {
            name: "back_wall",
            mesh: wall_quad(Vec3::new(center.x, center.y, ROOM_FRONT_WALL_Z), Vec3::X, Vec3::Y, hw, hh),
            color: WALL_COLOR,
        },
        RoomPart {
            name: "left_wall",
            mesh: wall_quad(Vec3::new(center.x - hw, center.y, z_mid), Vec3::NEG_Z, Vec3::Y, hd, hh),
            color: WALL_COLOR,
        },
        RoomPart {
            name: "right_wall",
            mesh: wall_quad(Vec3::new(center.x + hw, center.y, z_mid), Vec3::Z, Vec3::Y, hd, hh),
            color: WALL_COLOR,
        },
        RoomPart {
            name: "ceiling",
            mesh: wall_quad(Vec3::new(center.x, y_max, z_mid), Vec3::X, Vec3::Z, hw, hd),
            color: WALL_COLOR,
        },
    ]
}

/// Rectangle centred on `c` spanning `±hu` along `u` and `±hv` along `v`,
/// facing `u × v`. UVs are in texture repeats (one per two metres).
fn wall_quad(c: Vec3, u: Vec3, v: Vec3, hu: f32, hv: f32) -> MeshData {
    let normal = u.cross(v).normalize_or_zero();
    let (ru, rv) = (hu, hv);
    let mut mesh = MeshData::empty();
    let a = mesh.push_vertex(c - u * hu + v * hv, normal, [0.0, 0.0]);
    let b = mesh.push_vertex(c - u * hu - v * hv, normal, [0.0, rv]);
    let cc = mesh.push_vertex(c + u * hu - v * hv, normal, [ru, rv]);
    let d = mesh.push_vertex(c + u * hu + v * hv, normal, [ru, 0.0]);
    mesh.push_quad_indices(a, b, cc, d);
    mesh
}
