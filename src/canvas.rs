use bevy::{
    color::ColorToPacked,
    prelude::*,
    render::{
        render_asset::RenderAssetUsages,
        render_resource::{Extent3d, TextureDimension, TextureFormat},
    },
    window::{PrimaryWindow, WindowResized},
};

use crate::{
    grid::Grid,
    life::{LifeSet, Simulation},
    prelude::{BG_COLOR, CELL_ALIVE_COLOR},
    state::GameState,
};

pub struct CanvasPlugin;

impl Plugin for CanvasPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Load), spawn_canvas)
            .add_systems(
                Update,
                (fit_canvas_to_window, draw_cells)
                    .chain()
                    .after(LifeSet)
                    .run_if(in_state(GameState::Running)),
            );
    }
}

/// Something living cells can be painted onto.
pub trait DrawSurface {
    /// wipe the whole surface back to the background
    fn clear(&mut self);
    /// paint a `side`x`side` square with its top-left corner at pixel `(px, py)`
    fn fill_square(&mut self, px: u32, py: u32, side: u32);
}

/// coordinates of every living cell, row by row
pub fn living_cells(grid: &Grid) -> impl Iterator<Item = (usize, usize)> + '_ {
    grid.coords().filter(move |&(x, y)| grid.is_alive(x, y))
}

/// Repaints `surface` with one square per living cell.
pub fn draw_grid<S: DrawSurface + ?Sized>(grid: &Grid, surface: &mut S, cell_px: u32) {
    surface.clear();
    if cell_px == 0 {
        return;
    }
    for (x, y) in living_cells(grid) {
        surface.fill_square(x as u32 * cell_px, y as u32 * cell_px, cell_px);
    }
}

/// largest whole pixel size that fits `grid_size` cells into the shorter side
#[inline]
pub fn cell_pixel_size(width: f32, height: f32, grid_size: usize) -> u32 {
    let shorter = width.min(height).max(0.0) as u32;
    shorter / grid_size as u32
}

/// edge length of the square canvas, never below a single pixel
#[inline]
fn canvas_side(cell_px: u32, grid_size: usize) -> u32 {
    (cell_px * grid_size as u32).max(1)
}

#[inline]
fn canvas_extent(side: u32) -> Extent3d {
    Extent3d {
        width: side,
        height: side,
        depth_or_array_layers: 1,
    }
}

/// sRGB bytes as stored in an `Rgba8UnormSrgb` image
#[inline]
fn to_rgba8(color: Color) -> [u8; 4] {
    color.to_srgba().to_u8_array()
}

/// A [`DrawSurface`] over the RGBA8 pixel buffer of an [`Image`].
pub struct ImageSurface<'a> {
    image: &'a mut Image,
    background: [u8; 4],
    foreground: [u8; 4],
}

impl<'a> ImageSurface<'a> {
    pub fn new(image: &'a mut Image) -> Self {
        Self {
            image,
            background: to_rgba8(BG_COLOR),
            foreground: to_rgba8(CELL_ALIVE_COLOR),
        }
    }
}

impl DrawSurface for ImageSurface<'_> {
    fn clear(&mut self) {
        for pixel in self.image.data.chunks_exact_mut(4) {
            pixel.copy_from_slice(&self.background);
        }
    }

    fn fill_square(&mut self, px: u32, py: u32, side: u32) {
        let (width, height) = (self.image.width(), self.image.height());
        // clip to the buffer
        let x_end = px.saturating_add(side).min(width);
        let y_end = py.saturating_add(side).min(height);
        if px >= x_end {
            return;
        }
        for row in py..y_end {
            let start = (row * width + px) as usize * 4;
            let end = (row * width + x_end) as usize * 4;
            for pixel in self.image.data[start..end].chunks_exact_mut(4) {
                pixel.copy_from_slice(&self.foreground);
            }
        }
    }
}

// ——> SYSTEMS

fn spawn_canvas(
    mut commands: Commands,
    mut images: ResMut<Assets<Image>>,
    mut next_state: ResMut<NextState<GameState>>,
    sim: Res<Simulation>,
    window: Query<&Window, With<PrimaryWindow>>,
) {
    let grid_size = sim.grid().size();
    let cell_px = match window.get_single() {
        Ok(window) => cell_pixel_size(window.width(), window.height(), grid_size),
        Err(_) => {
            warn!("no primary window, drawing cells one pixel wide");
            1
        }
    };
    let side = canvas_side(cell_px, grid_size);
    let image = images.add(Image::new_fill(
        canvas_extent(side),
        TextureDimension::D2,
        &to_rgba8(BG_COLOR),
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::MAIN_WORLD | RenderAssetUsages::RENDER_WORLD,
    ));
    debug!(cell_px, side, "canvas created");

    commands.spawn(Sprite::from_image(image.clone()));
    commands.insert_resource(Canvas { image, cell_px });
    next_state.set(GameState::Running);
}

/// recompute the cell size from the latest resize of the primary window
fn fit_canvas_to_window(
    mut resized: EventReader<WindowResized>,
    primary: Query<Entity, With<PrimaryWindow>>,
    mut canvas: ResMut<Canvas>,
    mut images: ResMut<Assets<Image>>,
    sim: Res<Simulation>,
) {
    let Ok(primary) = primary.get_single() else {
        return;
    };
    let Some(event) = resized.read().filter(|e| e.window == primary).last() else {
        return;
    };
    let grid_size = sim.grid().size();
    let cell_px = cell_pixel_size(event.width, event.height, grid_size);
    if cell_px == canvas.cell_px {
        return;
    }
    let side = canvas_side(cell_px, grid_size);
    if let Some(image) = images.get_mut(&canvas.image) {
        image.resize(canvas_extent(side));
    }
    canvas.cell_px = cell_px;
    debug!(cell_px, side, "canvas resized");
}

fn draw_cells(canvas: Res<Canvas>, sim: Res<Simulation>, mut images: ResMut<Assets<Image>>) {
    let Some(image) = images.get_mut(&canvas.image) else {
        return;
    };
    draw_grid(sim.grid(), &mut ImageSurface::new(image), canvas.cell_px);
}

// ——> RESOURCES

/// the image living cells are drawn into, and the current size of one cell
#[derive(Resource, Debug)]
pub struct Canvas {
    image: Handle<Image>,
    cell_px: u32,
}

#[cfg(test)]
mod test {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        clears: usize,
        squares: Vec<(u32, u32, u32)>,
    }

    impl DrawSurface for Recorder {
        fn clear(&mut self) {
            self.clears += 1;
            self.squares.clear();
        }

        fn fill_square(&mut self, px: u32, py: u32, side: u32) {
            self.squares.push((px, py, side));
        }
    }

    fn bg() -> [u8; 4] {
        to_rgba8(BG_COLOR)
    }

    fn alive() -> [u8; 4] {
        to_rgba8(CELL_ALIVE_COLOR)
    }

    fn blank_image(side: u32) -> Image {
        Image::new_fill(
            canvas_extent(side),
            TextureDimension::D2,
            &bg(),
            TextureFormat::Rgba8UnormSrgb,
            RenderAssetUsages::MAIN_WORLD,
        )
    }

    fn pixel(image: &Image, x: u32, y: u32) -> [u8; 4] {
        let i = (y * image.width() + x) as usize * 4;
        let mut out = [0; 4];
        out.copy_from_slice(&image.data[i..i + 4]);
        out
    }

    #[test]
    fn living_cells_lists_alive_coords() {
        let grid = Grid::with_alive(3, &[(2, 0), (0, 1)]);
        assert_eq!(vec![(2, 0), (0, 1)], living_cells(&grid).collect::<Vec<_>>());
    }

    #[test]
    fn draw_grid_paints_one_square_per_cell() {
        let grid = Grid::with_alive(4, &[(1, 0), (3, 2)]);
        let mut recorder = Recorder::default();
        draw_grid(&grid, &mut recorder, 5);
        assert_eq!(1, recorder.clears);
        assert_eq!(vec![(5, 0, 5), (15, 10, 5)], recorder.squares);

        // a redraw never keeps squares from the previous frame
        draw_grid(&Grid::empty(4), &mut recorder, 5);
        assert_eq!(2, recorder.clears);
        assert!(recorder.squares.is_empty());
    }

    #[test]
    fn zero_cell_size_only_clears() {
        let grid = Grid::with_alive(4, &[(1, 1)]);
        let mut recorder = Recorder::default();
        draw_grid(&grid, &mut recorder, 0);
        assert_eq!(1, recorder.clears);
        assert!(recorder.squares.is_empty());
    }

    #[test]
    fn cell_size_uses_shorter_side() {
        assert_eq!(5, cell_pixel_size(1000.0, 1000.0, 200));
        assert_eq!(3, cell_pixel_size(1920.0, 799.0, 200));
        assert_eq!(40, cell_pixel_size(800.0, 1200.0, 20));
        assert_eq!(0, cell_pixel_size(150.0, 900.0, 200));
        assert_eq!(1, canvas_side(0, 200));
        assert_eq!(1000, canvas_side(5, 200));
    }

    #[test]
    fn image_surface_fills_squares() {
        let mut image = blank_image(4);
        {
            let mut surface = ImageSurface::new(&mut image);
            surface.fill_square(2, 0, 2);
        }
        assert_eq!(alive(), pixel(&image, 2, 0));
        assert_eq!(alive(), pixel(&image, 3, 1));
        assert_eq!(bg(), pixel(&image, 1, 0));
        assert_eq!(bg(), pixel(&image, 2, 2));

        ImageSurface::new(&mut image).clear();
        assert!(image.data.chunks_exact(4).all(|p| p == bg()));
    }

    #[test]
    fn image_surface_clips_at_edge() {
        let mut image = blank_image(3);
        let mut surface = ImageSurface::new(&mut image);
        surface.fill_square(2, 2, 5);
        surface.fill_square(7, 0, 2);
        let painted = image
            .data
            .chunks_exact(4)
            .filter(|p| *p == alive())
            .count();
        assert_eq!(1, painted);
        assert_eq!(alive(), pixel(&image, 2, 2));
    }

    #[test]
    fn draw_grid_on_image() {
        let grid = Grid::with_alive(2, &[(1, 1)]);
        let mut image = blank_image(4);
        draw_grid(&grid, &mut ImageSurface::new(&mut image), 2);
        for (x, y) in [(2, 2), (3, 2), (2, 3), (3, 3)] {
            assert_eq!(alive(), pixel(&image, x, y));
        }
        assert_eq!(bg(), pixel(&image, 1, 1));
    }

    #[test]
    fn canvas_colours_come_from_prelude() {
        assert_eq!([51, 255, 51, 255], alive());
        assert_eq!(255, bg()[3]);
        assert_ne!(alive(), bg());

        let mut image = blank_image(2);
        let mut surface = ImageSurface::new(&mut image);
        surface.fill_square(0, 0, 1);
        assert_eq!(CELL_ALIVE_COLOR.to_srgba().to_u8_array(), pixel(&image, 0, 0));
        assert_eq!(BG_COLOR.to_srgba().to_u8_array(), pixel(&image, 1, 1));
    }
}
