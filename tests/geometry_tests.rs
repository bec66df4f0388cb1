// Host-side tests for frame geometry and box-projected UVs.

use gallery_core::{build_frame_geometry, build_plane, compute_uvs, dominant_axis, FrameProfile, FrameStyle, MeshData};
use glam::Vec3;

fn assert_indices_in_range(mesh: &MeshData) {
    let n = mesh.vertex_count() as u32;
    assert!(mesh.indices.iter().all(|&i| i < n), "index out of range");
}

#[test]
fn flat_frame_counts() {
    let mesh = build_frame_geometry(1.0, 0.8, 0.1, 0.005, FrameStyle::Flat);
    let per_side = FrameStyle::Flat.profile_vertices_per_side();
    assert_eq!(per_side, 4);

    let quads = 4 * per_side;
    assert_eq!(mesh.vertex_count(), quads * 4);
    assert_eq!(mesh.vertex_count() % (4 * per_side), 0);
    assert_eq!(mesh.index_count(), quads * 6);
    assert_eq!(mesh.normals.len(), mesh.vertex_count());
    assert_eq!(mesh.uvs.len(), mesh.vertex_count());
    assert_indices_in_range(&mesh);
}

#[test]
fn stepped_frame_counts() {
    for steps in 1..=4 {
        let style = FrameStyle::Stepped(steps);
        let per_side = style.profile_vertices_per_side();
        assert_eq!(per_side, 4 + 2 * steps);

        let profile = FrameProfile::new(1.2, 1.0, 0.04, 0.05, style);
        assert!(profile.is_uniform());
        assert_eq!(profile.vertices_per_side(), per_side);

        let mesh = build_frame_geometry(1.2, 1.0, 0.04, 0.05, style);
        assert_eq!(mesh.vertex_count(), 4 * per_side * 4);
        assert_eq!(mesh.index_count(), 4 * per_side * 6);
        assert_indices_in_range(&mesh);
    }
}

#[test]
fn counts_hold_across_sizes() {
    let sizes = [(0.3, 0.3), (1.0, 0.75), (2.5, 0.4), (10.0, 7.0)];
    for (w, h) in sizes {
        for style in [FrameStyle::Flat, FrameStyle::Stepped(2)] {
            let mesh = build_frame_geometry(w, h, 0.05, 0.02, style);
            let per_side = style.profile_vertices_per_side();
            assert_eq!(mesh.vertex_count() % (4 * per_side), 0);
            assert_eq!(mesh.index_count(), (mesh.vertex_count() / 4) * 6);
            assert_indices_in_range(&mesh);
        }
    }
}

#[test]
fn frame_normals_are_unit_length() {
    let mesh = build_frame_geometry(1.0, 0.8, 0.04, 0.05, FrameStyle::Stepped(2));
    for n in &mesh.normals {
        let len = Vec3::from(*n).length();
        assert!((len - 1.0).abs() < 1e-4, "normal length {}", len);
    }
}

#[test]
fn profile_is_a_staircase() {
    let depth = 0.05;
    let profile = FrameProfile::new(1.0, 1.0, 0.1, depth, FrameStyle::Stepped(2));
    let side = profile.side(0);
    let step = depth * 0.4 / 2.0;
    // inner-front, (xy1, 0), (xy1, -s), (xy2, -s), (xy2, -2s), outer-front, outer-back, inner-back
    assert_eq!(side[0].z, 0.0);
    assert!((side[2].z + step).abs() < 1e-6);
    assert!((side[4].z + 2.0 * step).abs() < 1e-6);
    assert!((side[5].z + 2.0 * step).abs() < 1e-6);
    assert!((side[6].z + depth).abs() < 1e-6);
    assert!((side[7].z + depth).abs() < 1e-6);
    // outer corner of the top-left side moved up-left by the thickness
    assert!((side[5].x + 0.6).abs() < 1e-6);
    assert!((side[5].y - 0.6).abs() < 1e-6);
}

#[test]
fn invalid_parameters_yield_empty_mesh() {
    assert!(build_frame_geometry(1.0, 1.0, 0.0, 0.05, FrameStyle::Flat).is_empty());
    assert!(build_frame_geometry(1.0, 1.0, 0.1, -1.0, FrameStyle::Flat).is_empty());
    assert!(build_frame_geometry(f32::NAN, 1.0, 0.1, 0.05, FrameStyle::Flat).is_empty());
    assert!(build_frame_geometry(1.0, f32::INFINITY, 0.1, 0.05, FrameStyle::Stepped(1)).is_empty());
    assert!(build_frame_geometry(-1.0, 1.0, 0.1, 0.05, FrameStyle::Flat).is_empty());
}

#[test]
fn uvs_swap_on_odd_sides() {
    // unit cube profile, every face looking down +Z so the projection is (x, y)
    let cube: Vec<Vec3> = (0..8)
        .map(|i| Vec3::new((i & 1) as f32, ((i >> 1) & 1) as f32, ((i >> 2) & 1) as f32))
        .collect();
    let vertices = vec![Vec3::new(1.0, 0.0, 0.0); 16];
    let normals = vec![Vec3::Z; 16];

    let uvs = compute_uvs(&cube, &vertices, &normals, 4);
    assert_eq!(uvs.len(), 16);
    for (i, uv) in uvs.iter().enumerate() {
        let side = i / 4;
        if side % 2 == 1 {
            assert_eq!(*uv, [0.0, 1.0], "vertex {} on side {}", i, side);
        } else {
            assert_eq!(*uv, [1.0, 0.0], "vertex {} on side {}", i, side);
        }
    }
}

#[test]
fn uvs_are_normalized_by_largest_extent() {
    let mesh = build_frame_geometry(1.0, 0.8, 0.1, 0.05, FrameStyle::Flat);
    // largest profile extent is the outer width: 1.0 + 2 * 0.1
    for uv in &mesh.uvs {
        assert!(uv[0] >= -1e-6 && uv[0] <= 1.0 + 1e-6);
        assert!(uv[1] >= -1e-6 && uv[1] <= 1.0 + 1e-6);
    }
}

#[test]
fn degenerate_bounds_use_unit_scale() {
    let p = Vec3::new(2.0, 3.0, 4.0);
    let uvs = compute_uvs(&[p, p], &[p + Vec3::new(0.5, 0.25, 0.0)], &[Vec3::Z], 4);
    assert_eq!(uvs, vec![[0.5, 0.25]]);
}

#[test]
fn mismatched_uv_inputs_are_rejected() {
    assert!(compute_uvs(&[Vec3::ONE], &[], &[], 4).is_empty());
    assert!(compute_uvs(&[Vec3::ONE], &[Vec3::ZERO, Vec3::ONE], &[Vec3::Z], 4).is_empty());
}

#[test]
fn dominant_axis_prefers_x_then_y_on_ties() {
    assert_eq!(dominant_axis(Vec3::new(-3.0, 1.0, 2.0)), 0);
    assert_eq!(dominant_axis(Vec3::new(0.0, -1.0, 0.5)), 1);
    assert_eq!(dominant_axis(Vec3::new(0.1, 0.2, -0.9)), 2);
    assert_eq!(dominant_axis(Vec3::new(1.0, 1.0, 1.0)), 0);
    assert_eq!(dominant_axis(Vec3::new(0.0, 1.0, 1.0)), 1);
}

#[test]
fn plane_faces_viewer() {
    let plane = build_plane(2.0, 1.0);
    assert_eq!(plane.vertex_count(), 4);
    assert_eq!(plane.triangle_count(), 2);
    assert!(plane.normals.iter().all(|n| *n == [0.0, 0.0, 1.0]));
    let (lo, hi) = plane.bounds().unwrap();
    assert_eq!(lo, Vec3::new(-1.0, -0.5, 0.0));
    assert_eq!(hi, Vec3::new(1.0, 0.5, 0.0));
}

#[test]
fn vertex_normals_average_shared_faces() {
    // two quads folded 90 degrees along a shared edge
    let mut mesh = MeshData::empty();
    let a = mesh.push_vertex(Vec3::new(0.0, 0.0, 0.0), Vec3::ZERO, [0.0, 0.0]);
    let b = mesh.push_vertex(Vec3::new(1.0, 0.0, 0.0), Vec3::ZERO, [0.0, 0.0]);
    let c = mesh.push_vertex(Vec3::new(1.0, 1.0, 0.0), Vec3::ZERO, [0.0, 0.0]);
    let d = mesh.push_vertex(Vec3::new(0.0, 1.0, 0.0), Vec3::ZERO, [0.0, 0.0]);
    let e = mesh.push_vertex(Vec3::new(1.0, 0.0, -1.0), Vec3::ZERO, [0.0, 0.0]);
    let f = mesh.push_vertex(Vec3::new(1.0, 1.0, -1.0), Vec3::ZERO, [0.0, 0.0]);
    mesh.push_quad_indices(a, b, c, d);
    mesh.push_quad_indices(b, e, f, c);
    mesh.compute_vertex_normals();

    let shared = Vec3::from(mesh.normals[b as usize]);
    assert!((shared.length() - 1.0).abs() < 1e-5);
    assert!(shared.x > 0.1 && shared.z > 0.1 && shared.y.abs() < 1e-5);
    assert_eq!(mesh.normals[a as usize], [0.0, 0.0, 1.0]);
}
