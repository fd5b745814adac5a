use bevy::math::primitives::Circle;
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};

use crate::simulation::integrator::step;
use crate::simulation::params::Parameters;
use crate::simulation::scenario::Sandbox;
use crate::simulation::states::NVec2;
use crate::visualization::input::{
    pointer_system, spawn_system, thrust_system, toggle_system, ActiveBody, DragState,
};

#[derive(Component)]
struct BodyIndex(pub usize);

#[derive(Component)]
struct ActiveHighlight;

#[derive(Component)]
struct PausedLabel;

#[derive(Component)]
struct GravityLabel;

const HIGHLIGHT_MARGIN: f32 = 4.0;
const ID_FONT_SIZE: f32 = 16.0;
const STATUS_FONT_SIZE: f32 = 20.0;

pub fn run_sandbox(sandbox: Sandbox) {
    println!(
        "run_sandbox: starting Bevy viewer, bounds {} x {}",
        sandbox.params.width, sandbox.params.height
    );

    let background = sandbox.display.background;
    let title = sandbox.display.title.clone();
    let resolution = (sandbox.params.width as f32, sandbox.params.height as f32);

    App::new()
        .insert_resource(ClearColor(Color::srgb_u8(
            background[0],
            background[1],
            background[2],
        )))
        .insert_resource(sandbox)
        .init_resource::<ActiveBody>()
        .init_resource::<DragState>()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title,
                resolution: resolution.into(),
                resizable: false,
                ..Default::default()
            }),
            ..Default::default()
        }))
        .add_systems(Startup, setup_system)
        .add_systems(
            Update,
            (
                toggle_system,
                spawn_system,
                pointer_system,
                thrust_system,
                physics_step_system,
                sync_spawned_system,
                sync_transforms_system,
                highlight_system,
                status_text_system,
            )
                .chain(),
        )
        .run();
}

// Simulation space is top-left origin with y down; Bevy world space is
// centered with y up.
fn to_world(x: NVec2, params: &Parameters) -> Vec2 {
    Vec2::new(
        (x.x - params.width * 0.5) as f32,
        (params.height * 0.5 - x.y) as f32,
    )
}

// Later spawns draw on top of earlier ones
fn z_for(index: usize) -> f32 {
    1.0 + index as f32 * 0.01
}

fn setup_system(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    // 2D camera
    commands.spawn(Camera2dBundle::default());

    // Halo drawn behind the active body; unit circle scaled per frame
    commands.spawn((
        MaterialMesh2dBundle {
            mesh: Mesh2dHandle(meshes.add(Circle::new(1.0))),
            material: materials.add(ColorMaterial::from(Color::srgb_u8(200, 200, 200))),
            visibility: Visibility::Hidden,
            ..Default::default()
        },
        ActiveHighlight,
    ));

    commands.spawn((
        TextBundle::from_section(
            "PAUSED",
            TextStyle {
                font_size: STATUS_FONT_SIZE,
                color: Color::srgb_u8(255, 80, 80),
                ..Default::default()
            },
        )
        .with_style(Style {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            ..Default::default()
        }),
        PausedLabel,
    ));

    commands.spawn((
        TextBundle::from_section(
            "GRAVITY OFF",
            TextStyle {
                font_size: STATUS_FONT_SIZE,
                color: Color::srgb_u8(80, 180, 255),
                ..Default::default()
            },
        )
        .with_style(Style {
            position_type: PositionType::Absolute,
            top: Val::Px(34.0),
            left: Val::Px(10.0),
            ..Default::default()
        }),
        GravityLabel,
    ));
}

fn physics_step_system(time: Res<Time>, mut sandbox: ResMut<Sandbox>) {
    let dt = time.delta_seconds() as f64;

    // Split &mut Sandbox into &mut fields in one destructuring step
    let Sandbox {
        engine,
        params,
        gravity,
        contacts,
        system,
        ..
    } = &mut *sandbox;

    step(system, engine, gravity, contacts, params, dt);
}

/// Spawn a circle entity (with the id label as a child) for every body
/// added to the system since the last frame. Bodies are never removed, so
/// indices stay stable.
fn sync_spawned_system(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    sandbox: Res<Sandbox>,
    mut spawned: Local<usize>,
) {
    while *spawned < sandbox.system.bodies.len() {
        let index = *spawned;
        let body = &sandbox.system.bodies[index];
        let color = Color::srgb_u8(body.color[0], body.color[1], body.color[2]);
        let translation = to_world(body.x, &sandbox.params).extend(z_for(index));

        commands
            .spawn((
                MaterialMesh2dBundle {
                    mesh: Mesh2dHandle(meshes.add(Circle::new(body.radius as f32))),
                    material: materials.add(ColorMaterial::from(color)),
                    transform: Transform::from_translation(translation),
                    ..Default::default()
                },
                BodyIndex(index),
            ))
            .with_children(|parent| {
                parent.spawn(Text2dBundle {
                    text: Text::from_section(
                        body.id.to_string(),
                        TextStyle {
                            font_size: ID_FONT_SIZE,
                            color: Color::BLACK,
                            ..Default::default()
                        },
                    ),
                    transform: Transform::from_xyz(0.0, 0.0, 0.5),
                    ..Default::default()
                });
            });

        *spawned += 1;
    }
}

fn sync_transforms_system(sandbox: Res<Sandbox>, mut query: Query<(&BodyIndex, &mut Transform)>) {
    for (BodyIndex(i), mut transform) in &mut query {
        if let Some(b) = sandbox.system.bodies.get(*i) {
            let world = to_world(b.x, &sandbox.params);
            transform.translation.x = world.x;
            transform.translation.y = world.y;
        }
    }
}

fn highlight_system(
    sandbox: Res<Sandbox>,
    active: Res<ActiveBody>,
    mut query: Query<(&mut Transform, &mut Visibility), With<ActiveHighlight>>,
) {
    let Ok((mut transform, mut visibility)) = query.get_single_mut() else {
        return;
    };

    let selected = active
        .0
        .and_then(|i| sandbox.system.bodies.get(i).map(|b| (i, b)));

    match selected {
        Some((index, body)) => {
            let world = to_world(body.x, &sandbox.params);
            // Just below the active body, above everything spawned earlier
            transform.translation = world.extend(z_for(index) - 0.005);
            transform.scale = Vec3::splat(body.radius as f32 + HIGHLIGHT_MARGIN);
            *visibility = Visibility::Visible;
        }
        None => *visibility = Visibility::Hidden,
    }
}

fn status_text_system(
    sandbox: Res<Sandbox>,
    mut paused: Query<&mut Visibility, (With<PausedLabel>, Without<GravityLabel>)>,
    mut gravity: Query<&mut Visibility, (With<GravityLabel>, Without<PausedLabel>)>,
) {
    if let Ok(mut visibility) = paused.get_single_mut() {
        *visibility = if sandbox.engine.paused {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
    }
    if let Ok(mut visibility) = gravity.get_single_mut() {
        *visibility = if sandbox.engine.gravity_enabled {
            Visibility::Hidden
        } else {
            Visibility::Visible
        };
    }
}
