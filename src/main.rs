use bevy::{
    diagnostic::{FrameTimeDiagnosticsPlugin, LogDiagnosticsPlugin},
    prelude::*,
    window::WindowResolution,
};
use life_canvas::{
    camera::CamPlugin,
    canvas::CanvasPlugin,
    config::{ConfigError, LifeConfig},
    life::LifePlugin,
    prelude::{BOARD_SIZE, TICKS_PER_SECOND, WINDOW_SIZE_PX},
    state::GameState,
};

fn main() -> Result<(), ConfigError> {
    let config = LifeConfig::new(BOARD_SIZE, TICKS_PER_SECOND)?;

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(ImagePlugin::default_nearest())
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Game of Life".into(),
                        resizable: true,
                        focused: true,
                        present_mode: bevy::window::PresentMode::AutoVsync,
                        mode: bevy::window::WindowMode::Windowed,
                        resolution: WindowResolution::new(WINDOW_SIZE_PX, WINDOW_SIZE_PX),
                        ..default()
                    }),
                    ..default()
                }),
        )
        .add_plugins((FrameTimeDiagnosticsPlugin, LogDiagnosticsPlugin::default()))
        .init_state::<GameState>()
        .add_plugins((CamPlugin, LifePlugin { config }, CanvasPlugin))
        .run();

    Ok(())
}
