use bevy::input::mouse::MouseScrollUnit;
use bevy::{
    input::mouse::{MouseMotion, MouseWheel},
    prelude::*,
};
use constants::anatomy::SUPERIOR;

/// Orbit camera around a focus point. The anatomical frame is Z-up, so
/// yaw spins around world Z and pitch tilts toward the superior axis.
#[derive(Resource)]
pub struct ViewportCamera {
    pub focus_point: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub radius: f32,
}

impl ViewportCamera {
    /// Frame the camera on loaded scene bounds.
    pub fn framed_on(center: Vec3, size: Vec3) -> Self {
        Self {
            focus_point: center,
            yaw: 0.0,
            pitch: 0.35,
            radius: (size.length() * 0.9).max(50.0),
        }
    }

    fn orbit_rotation(&self) -> Quat {
        // Z-up frame: yaw about world Z, pitch about the local X axis,
        // then a base tilt so pitch 0 looks along -Y at the focus.
        Quat::from_rotation_z(self.yaw)
            * Quat::from_rotation_x(std::f32::consts::FRAC_PI_2 - self.pitch)
    }
}

impl Default for ViewportCamera {
    fn default() -> Self {
        Self {
            focus_point: Vec3::new(-56.0, -95.0, 900.0),
            yaw: 0.0,
            pitch: 0.2,
            radius: 600.0,
        }
    }
}

/// Viewport cursor position to a world-space pick ray.
pub fn cursor_ray(
    window: &Window,
    camera: &Camera,
    camera_transform: &GlobalTransform,
) -> Option<Ray3d> {
    let cursor_pos = window.cursor_position()?;
    camera.viewport_to_world(camera_transform, cursor_pos).ok()
}

pub fn camera_controller(
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
    mut viewport: ResMut<ViewportCamera>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
    keyboard: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
) {
    let Ok(mut camera_transform) = camera_query.single_mut() else {
        return;
    };

    let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();

    // Right-drag orbits around the focus point
    if mouse_button.pressed(MouseButton::Right) && mouse_delta != Vec2::ZERO {
        let yaw_sens = 0.0035;
        let pitch_sens = 0.0030;
        viewport.yaw += -mouse_delta.x * yaw_sens;
        viewport.pitch += -mouse_delta.y * pitch_sens;
        viewport.pitch = viewport.pitch.clamp(-1.45, 1.45);
    }

    // Mouse wheel scroll accumulation (pixel and line scroll)
    let mut scroll_accum = 0.0;
    for ev in scroll_events.read() {
        scroll_accum += match ev.unit {
            MouseScrollUnit::Line => ev.y * 1.0,
            MouseScrollUnit::Pixel => ev.y * 0.05,
        };
    }

    // Wheel dollies toward/away from the focus point
    if scroll_accum.abs() > f32::EPSILON {
        let dolly_speed = (viewport.radius * 0.1).clamp(1.0, 200.0);
        viewport.radius = (viewport.radius - scroll_accum * dolly_speed).clamp(20.0, 5000.0);
    }

    // Keyboard pan in the view plane
    let mut move_input = Vec3::ZERO;
    if keyboard.pressed(KeyCode::KeyW) {
        move_input.z += 1.0;
    }
    if keyboard.pressed(KeyCode::KeyS) {
        move_input.z -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) {
        move_input.x += 1.0;
    }
    if keyboard.pressed(KeyCode::KeyA) {
        move_input.x -= 1.0;
    }

    if move_input != Vec3::ZERO {
        let view_rot = viewport.orbit_rotation();
        let right = (view_rot * Vec3::X).normalize();
        let up = SUPERIOR;

        let mut speed = (viewport.radius * 0.4).clamp(10.0, 400.0);
        if keyboard.any_pressed([KeyCode::ShiftLeft, KeyCode::ShiftRight]) {
            speed *= 3.5;
        }

        let world_delta = right * move_input.x + up * move_input.z;
        viewport.focus_point += world_delta.normalize() * speed * time.delta_secs();
    }

    let target_rot = viewport.orbit_rotation();
    let target_pos = viewport.focus_point + target_rot * Vec3::Z * viewport.radius;

    let lerp_speed = (12.0 * time.delta_secs()).min(1.0);
    camera_transform.translation = camera_transform.translation.lerp(target_pos, lerp_speed);
    camera_transform.rotation = camera_transform.rotation.slerp(target_rot, lerp_speed);
}
