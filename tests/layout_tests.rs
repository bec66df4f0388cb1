// Host-side tests for grid/spiral placement and the structure around it.

use gallery_core::room::{build_room, union_bounds};
use gallery_core::{fit_visual_size, GridParams, LayoutMode, SpiralParams};
use glam::{Vec2, Vec3};

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn twenty_three_items_in_rows_of_eleven() {
    let grid = GridParams {
        items_per_row: 11,
        item_width: 1.0,
        item_height: 0.8,
        spacing: 0.5,
    };
    assert_eq!(grid.num_rows(23), 3);

    let t = grid.transform(11, 23);
    assert!(approx(t.position.x, -7.5), "x = {}", t.position.x);
    // middle row sits half a painting above the origin
    assert!(approx(t.position.y, 0.4), "y = {}", t.position.y);
    assert_eq!(t.position.z, 0.0);
    assert_eq!(t.normal, Vec3::Z);

    let first = grid.transform(0, 23);
    assert!(approx(first.position.y, 1.3 + 0.4));
    let last = grid.transform(22, 23);
    assert!(approx(last.position.x, -7.5));
    assert!(approx(last.position.y, -1.3 + 0.4));
}

#[test]
fn grid_row_is_centred() {
    let grid = GridParams::default();
    let layout = LayoutMode::Grid(grid).layout(grid.items_per_row);
    let sum: f32 = layout.iter().map(|t| t.position.x).sum();
    assert!(sum.abs() < 1e-3);
    assert!(layout.iter().all(|t| approx(t.position.y, layout[0].position.y)));
}

#[test]
fn zero_per_row_does_not_divide_by_zero() {
    let grid = GridParams {
        items_per_row: 0,
        ..GridParams::default()
    };
    assert_eq!(grid.num_rows(3), 3);
    assert!(grid.transform(2, 3).position.is_finite());
}

#[test]
fn spiral_paintings_face_the_axis() {
    let spiral = SpiralParams::default();
    let n = 12;
    for t in LayoutMode::Spiral(spiral).layout(n) {
        assert!(approx(t.normal.length(), 1.0));
        assert!(approx(t.normal.y, 0.0));
        let outward = Vec3::new(t.position.x, 0.0, t.position.z);
        assert!(t.normal.dot(outward) < 0.0);
        let r = outward.length();
        assert!(approx(r, spiral.outer_radius - spiral.wall_inset));
    }
}

#[test]
fn spiral_paintings_climb_with_the_ramp() {
    let spiral = SpiralParams::default();
    let layout = LayoutMode::Spiral(spiral).layout(5);
    for pair in layout.windows(2) {
        assert!(pair[1].position.y > pair[0].position.y);
    }
    let first = layout[0].position.y - spiral.eye_height;
    assert!(approx(first, spiral.height_at(0.1)));
}

#[test]
fn spiral_surface_normals_are_unit_length() {
    let structure = SpiralParams::default().build_structure();
    for mesh in [&structure.ramp, &structure.outer_wall, &structure.inner_railing, &structure.light_band] {
        assert!(!mesh.is_empty());
        for n in &mesh.normals {
            assert!((Vec3::from(*n).length() - 1.0).abs() < 1e-3);
        }
    }
}

#[test]
fn spiral_surfaces_face_the_walkway() {
    let structure = SpiralParams::default().build_structure();
    for (p, n) in structure.ramp.positions.iter().zip(&structure.ramp.normals) {
        assert!(n[1] > 0.5, "ramp normal {:?} at {:?}", n, p);
    }
    for (p, n) in structure.outer_wall.positions.iter().zip(&structure.outer_wall.normals) {
        let radial = Vec3::new(p[0], 0.0, p[2]);
        assert!(Vec3::from(*n).dot(radial) < 0.0);
    }
    for (p, n) in structure.inner_railing.positions.iter().zip(&structure.inner_railing.normals) {
        let radial = Vec3::new(p[0], 0.0, p[2]);
        assert!(Vec3::from(*n).dot(radial) > 0.0);
    }
}

#[test]
fn spiral_mesh_sizes() {
    let spiral = SpiralParams {
        segments: 32,
        band_radial_segments: 6,
        ..SpiralParams::default()
    };
    let ramp = spiral.build_ramp();
    assert_eq!(ramp.vertex_count(), 2 * 33);
    assert_eq!(ramp.index_count(), 32 * 6);

    let band = spiral.build_light_band();
    assert_eq!(band.vertex_count(), 33 * 7);
    assert_eq!(band.index_count(), 32 * 6 * 6);
    let n = band.vertex_count() as u32;
    assert!(band.indices.iter().all(|&i| i < n));
}

#[test]
fn invalid_spiral_builds_nothing() {
    let spiral = SpiralParams {
        inner_radius: 5.0,
        outer_radius: 2.0,
        ..SpiralParams::default()
    };
    let s = spiral.build_structure();
    assert!(s.ramp.is_empty() && s.outer_wall.is_empty());
    assert!(s.inner_railing.is_empty() && s.light_band.is_empty());

    let no_segments = SpiralParams {
        segments: 0,
        ..SpiralParams::default()
    };
    assert!(no_segments.build_ramp().is_empty());
}

#[test]
fn room_absent_without_paintings() {
    assert!(build_room(None).is_empty());
    assert!(union_bounds(std::iter::empty()).is_none());
}

#[test]
fn room_wraps_painting_bounds() {
    let bounds = union_bounds([
        (Vec3::new(-2.0, 0.0, 0.0), Vec3::new(-1.0, 1.0, 0.05)),
        (Vec3::new(1.0, -0.5, 0.0), Vec3::new(2.0, 0.5, 0.05)),
    ]);
    assert_eq!(bounds, Some((Vec3::new(-2.0, -0.5, 0.0), Vec3::new(2.0, 1.0, 0.05))));

    let parts = build_room(bounds);
    let names: Vec<_> = parts.iter().map(|p| p.name).collect();
    assert_eq!(names, ["floor", "back_wall", "left_wall", "right_wall", "ceiling"]);

    let back = parts[1].mesh.bounds().unwrap();
    assert!(approx(back.0.z, -0.1) && approx(back.1.z, -0.1));
    assert!(approx(back.1.x - back.0.x, 4.0 + 2.0));
    assert!(approx(back.1.y - back.0.y, 1.5 + 2.0));

    let floor = parts[0].mesh.bounds().unwrap();
    assert!(approx(floor.1.z - floor.0.z, 5.0));
    assert!(parts[0].mesh.normals.iter().all(|n| approx(n[1], 1.0)));
    assert!(parts[4].mesh.normals.iter().all(|n| approx(n[1], -1.0)));
}

#[test]
fn visual_size_fits_inside_max() {
    let max = Vec2::new(1.0, 0.8);
    assert_eq!(fit_visual_size(2.0, max), Vec2::new(1.0, 0.5));
    let tall = fit_visual_size(0.5, max);
    assert!(approx(tall.x, 0.4) && approx(tall.y, 0.8));
    assert_eq!(fit_visual_size(0.0, max), max);
    assert_eq!(fit_visual_size(f32::NAN, max), max);
}
