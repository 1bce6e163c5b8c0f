use approx::assert_abs_diff_eq;
use spincube::{
    Control, ControlState, CubeState, CubeVertices, Matrix3, TransformSteps, VERTEX_COUNT, Vector3,
};

fn assert_close(a: Vector3, b: Vector3) {
    assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-6);
    assert_abs_diff_eq!(a.y, b.y, epsilon = 1e-6);
    assert_abs_diff_eq!(a.z, b.z, epsilon = 1e-6);
}

#[test]
fn single_rotate_y_frame_matches_matrix() {
    let original = CubeVertices::new().positions();
    let mut cube = CubeState::default();

    cube.apply(&ControlState::new().with(Control::RotateYPos));

    let after = cube.vertices.positions();
    for (v, got) in original.iter().zip(after) {
        assert_eq!(got, Matrix3::rotation_y(0.001) * *v);
    }
}

#[test]
fn rotate_then_scale_in_declaration_order() {
    let original = CubeVertices::new().positions();
    let mut cube = CubeState::default();

    cube.apply(
        &ControlState::new()
            .with(Control::ScaleUp)
            .with(Control::RotateYPos),
    );

    let after = cube.vertices.positions();
    for (v, got) in original.iter().zip(after) {
        let expected = Matrix3::scale(1.0001) * (Matrix3::rotation_y(0.001) * *v);
        assert_eq!(got, expected);
    }
}

#[test]
fn every_rotation_control_uses_its_axis_and_sign() {
    let cases = [
        (Control::RotateYNeg, Matrix3::rotation_y(-0.001)),
        (Control::RotateYPos, Matrix3::rotation_y(0.001)),
        (Control::RotateXNeg, Matrix3::rotation_x(-0.001)),
        (Control::RotateXPos, Matrix3::rotation_x(0.001)),
        (Control::RotateZPos, Matrix3::rotation_z(0.001)),
        (Control::RotateZNeg, Matrix3::rotation_z(-0.001)),
        (Control::ScaleDown, Matrix3::scale(0.9999)),
        (Control::ScaleUp, Matrix3::scale(1.0001)),
    ];

    for (control, matrix) in cases {
        let original = CubeVertices::new().positions();
        let mut cube = CubeState::default();
        cube.apply(&ControlState::new().with(control));

        for (v, got) in original.iter().zip(cube.vertices.positions()) {
            assert_eq!(got, matrix * *v, "{control:?}");
        }
    }
}

#[test]
fn increments_compound_across_frames() {
    let mut cube = CubeState::default();
    let controls = ControlState::new().with(Control::RotateZPos);

    let frames = 1571; // ~ pi/2 at 0.001 rad per frame
    for _ in 0..frames {
        cube.apply(&controls);
    }

    let single = Matrix3::rotation_z(frames as f32 * 0.001);
    for (v, got) in CubeVertices::new()
        .positions()
        .iter()
        .zip(cube.vertices.positions())
    {
        // Same pose up to accumulated drift.
        let expected = single * *v;
        assert_abs_diff_eq!(got.x, expected.x, epsilon = 1e-3);
        assert_abs_diff_eq!(got.y, expected.y, epsilon = 1e-3);
        assert_abs_diff_eq!(got.z, expected.z, epsilon = 1e-3);
    }
}

#[test]
fn opposite_rotations_in_one_frame_nearly_cancel() {
    let mut cube = CubeState::default();
    cube.apply(
        &ControlState::new()
            .with(Control::RotateXNeg)
            .with(Control::RotateXPos),
    );

    for (v, got) in CubeVertices::new()
        .positions()
        .iter()
        .zip(cube.vertices.positions())
    {
        assert_close(got, *v);
    }
}

#[test]
fn buffer_keeps_eight_vertices() {
    let mut cube = CubeState::new(TransformSteps::default());
    let everything: ControlState = Control::ALL.into_iter().collect();

    for _ in 0..100 {
        cube.apply(&everything);
    }

    assert_eq!(cube.vertices.as_slice().len(), VERTEX_COUNT);
}

#[test]
fn translation_accumulates_outside_the_vertices() {
    let mut cube = CubeState::default();
    let up = ControlState::new().with(Control::TranslateUp);

    for _ in 0..10 {
        cube.apply(&up);
    }

    assert_eq!(cube.vertices, CubeVertices::new());
    assert_abs_diff_eq!(cube.offset.y, 0.01, epsilon = 1e-6);
    assert_eq!(cube.offset.x, 0.0);
}
