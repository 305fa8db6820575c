pub mod camera;
pub mod canvas;
pub mod config;
pub mod grid;
pub mod life;
pub mod neighbours;
pub mod state;
pub mod step;
pub mod tick;

pub mod prelude {
    use bevy::color::Color;

    pub const TICKS_PER_SECOND: u32 = 30;
    pub const BOARD_SIZE: usize = 200;

    pub const WINDOW_SIZE_PX: f32 = 1000.0;
    pub const BG_COLOR: Color = Color::srgb(0.0, 0.1, 0.3);
    pub const CELL_ALIVE_COLOR: Color = Color::srgb(0.2, 1.0, 0.2);
}
