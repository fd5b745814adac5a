//! Input systems: spawning, selection, dragging, thrust, and toggles.
//!
//! These run before the physics step each frame and are the only place
//! body kinematics are mutated outside the step pipeline. Window
//! coordinates are top-left origin with y down and the window resolution
//! equals the simulation bounds, so cursor coordinates are simulation
//! coordinates.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::simulation::scenario::Sandbox;
use crate::simulation::states::NVec2;

/// Index of the currently selected body, if any.
#[derive(Resource, Default)]
pub struct ActiveBody(pub Option<usize>);

/// Pointer interaction state.
#[derive(Resource)]
pub struct DragState {
    pub dragging: bool,
    pub offset: NVec2, // grab point relative to the body center
    pub last_cursor: Option<NVec2>, // cursor position last frame, for the throw delta
}

impl Default for DragState {
    fn default() -> Self {
        Self {
            dragging: false,
            offset: NVec2::zeros(),
            last_cursor: None,
        }
    }
}

fn cursor_sim_position(window: &Window) -> Option<NVec2> {
    window
        .cursor_position()
        .map(|p| NVec2::new(p.x as f64, p.y as f64))
}

/// G toggles the gravity pass, Space pauses the whole physics pipeline.
pub fn toggle_system(keys: Res<ButtonInput<KeyCode>>, mut sandbox: ResMut<Sandbox>) {
    if keys.just_pressed(KeyCode::KeyG) {
        sandbox.engine.gravity_enabled = !sandbox.engine.gravity_enabled;
        info!("gravity enabled: {}", sandbox.engine.gravity_enabled);
    }
    if keys.just_pressed(KeyCode::Space) {
        sandbox.engine.paused = !sandbox.engine.paused;
        info!("paused: {}", sandbox.engine.paused);
    }
}

/// N spawns a material-weighted random body at the cursor, Z spawns the
/// preset orbital system around the cursor.
pub fn spawn_system(
    keys: Res<ButtonInput<KeyCode>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut sandbox: ResMut<Sandbox>,
    mut active: ResMut<ActiveBody>,
    mut drag: ResMut<DragState>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let Some(cursor) = cursor_sim_position(window) else {
        return;
    };

    if keys.just_pressed(KeyCode::KeyN) {
        let Sandbox {
            system, spawner, ..
        } = &mut *sandbox;
        let index = spawner.spawn_random(system, cursor);

        // Newly spawned body becomes active
        active.0 = Some(index);
        drag.dragging = false;
    }

    if keys.just_pressed(KeyCode::KeyZ) {
        let Sandbox {
            system,
            spawner,
            params,
            ..
        } = &mut *sandbox;
        spawner.spawn_orbital_system(system, cursor, params.g);
    }
}

/// Left click grabs the topmost body under the cursor and drags it; right
/// click teleports the active body; release keeps the throw velocity.
pub fn pointer_system(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut sandbox: ResMut<Sandbox>,
    mut active: ResMut<ActiveBody>,
    mut drag: ResMut<DragState>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let Some(cursor) = cursor_sim_position(window) else {
        drag.last_cursor = None;
        return;
    };

    // Grab: topmost body under the cursor, scanned in reverse spawn order
    if buttons.just_pressed(MouseButton::Left) {
        let hit = sandbox
            .system
            .bodies
            .iter()
            .enumerate()
            .rev()
            .find(|(_, b)| (cursor - b.x).norm_squared() <= b.radius * b.radius)
            .map(|(i, _)| i);

        if let Some(index) = hit {
            let body = &mut sandbox.system.bodies[index];
            drag.offset = body.x - cursor;
            drag.dragging = true;
            body.v = NVec2::zeros();
            active.0 = Some(index);
        }
    }

    // Release: the throw velocity persists as momentum
    if buttons.just_released(MouseButton::Left) {
        drag.dragging = false;
    }

    // Teleport the active body and kill its velocity
    if buttons.just_pressed(MouseButton::Right) {
        if let Some(index) = active.0 {
            let body = &mut sandbox.system.bodies[index];
            body.x = cursor;
            body.v = NVec2::zeros();
            drag.dragging = false;
        }
    }

    // Drag: pin the body to the pointer and set the throw velocity from
    // the per-frame pointer delta
    if drag.dragging {
        if let Some(index) = active.0 {
            let delta = drag
                .last_cursor
                .map_or_else(NVec2::zeros, |last| cursor - last);
            let throw_strength = sandbox.params.throw_strength;

            let body = &mut sandbox.system.bodies[index];
            body.x = cursor + drag.offset;
            body.v = delta * throw_strength;
        }
    }

    drag.last_cursor = Some(cursor);
}

/// Held directional keys push the active body with a constant thrust.
/// Suppressed while dragging.
pub fn thrust_system(
    keys: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    mut sandbox: ResMut<Sandbox>,
    active: Res<ActiveBody>,
    drag: Res<DragState>,
) {
    if drag.dragging {
        return;
    }
    let Some(index) = active.0 else {
        return;
    };

    let kick = sandbox.params.thrust * time.delta_seconds() as f64;
    let body = &mut sandbox.system.bodies[index];

    // y increases downward, so "up" is -y
    if keys.pressed(KeyCode::KeyW) || keys.pressed(KeyCode::ArrowUp) {
        body.v.y -= kick;
    }
    if keys.pressed(KeyCode::KeyS) || keys.pressed(KeyCode::ArrowDown) {
        body.v.y += kick;
    }
    if keys.pressed(KeyCode::KeyA) || keys.pressed(KeyCode::ArrowLeft) {
        body.v.x -= kick;
    }
    if keys.pressed(KeyCode::KeyD) || keys.pressed(KeyCode::ArrowRight) {
        body.v.x += kick;
    }
}
