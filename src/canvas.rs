//! Drawing surface
//!
//! The frame orchestrator draws through the [`Canvas`] trait. [`FrameCanvas`]
//! is the software implementation both hosts use: it composites into an
//! RGBA [`PixelFrame`] that the renderer uploads, and collects text into a
//! HUD list the host lays out itself.

use glam::Vec2;

use crate::error::AssetError;

/// One RGBA8 pixel
pub type Rgba = [u8; 4];

pub const BLACK: Rgba = [0, 0, 0, 255];

/// Which pre-loaded image to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sprite {
    Boat,
    Trash,
    GameOverOverlay,
}

/// Horizontal anchor for text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

/// A line of text queued for the host to display
#[derive(Debug, Clone, PartialEq)]
pub struct HudText {
    pub text: String,
    pub pos: Vec2,
    pub size: f32,
    pub align: TextAlign,
}

/// Host drawing surface
pub trait Canvas {
    /// Fill the whole surface and drop any queued text
    fn clear(&mut self, color: Rgba);
    /// Replace the surface contents with a full frame of pixels
    fn put_pixels(&mut self, frame: &PixelFrame);
    /// Draw a sprite centered at `center`, scaled to `size`
    fn draw_sprite(&mut self, sprite: Sprite, center: Vec2, size: Vec2);
    /// Draw white text anchored at `pos`
    fn draw_text(&mut self, text: &str, pos: Vec2, size: f32, align: TextAlign);
}

/// Row-major RGBA8 pixel buffer
#[derive(Debug, Clone, PartialEq)]
pub struct PixelFrame {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl PixelFrame {
    /// Opaque black frame
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, BLACK)
    }

    pub fn filled(width: u32, height: u32, color: Rgba) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [Rgba] {
        &mut self.pixels
    }

    /// Raw bytes for texture upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgba {
        self.pixels[(y * self.width + x) as usize]
    }

    pub fn fill(&mut self, color: Rgba) {
        self.pixels.fill(color);
    }
}

/// A decoded sprite image
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Rgba>,
}

impl SpriteImage {
    /// Decode a PNG file's bytes
    pub fn from_png(bytes: &[u8]) -> Result<Self, AssetError> {
        let image = image::load_from_memory_with_format(bytes, image::ImageFormat::Png)?.to_rgba8();
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(AssetError::Empty);
        }
        let pixels = image
            .into_raw()
            .chunks_exact(4)
            .map(|c| [c[0], c[1], c[2], c[3]])
            .collect();
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Single-color stand-in used when real art is unavailable
    pub fn solid(width: u32, height: u32, color: Rgba) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width as usize * height as usize],
        }
    }

    fn sample(&self, u: f32, v: f32) -> Rgba {
        let x = ((u * self.width as f32) as u32).min(self.width - 1);
        let y = ((v * self.height as f32) as u32).min(self.height - 1);
        self.pixels[(y * self.width + x) as usize]
    }
}

/// The three images the game draws
#[derive(Debug, Clone)]
pub struct Assets {
    pub boat: SpriteImage,
    pub trash: SpriteImage,
    pub game_over: SpriteImage,
}

impl Assets {
    pub fn get(&self, sprite: Sprite) -> &SpriteImage {
        match sprite {
            Sprite::Boat => &self.boat,
            Sprite::Trash => &self.trash,
            Sprite::GameOverOverlay => &self.game_over,
        }
    }

    /// Flat-colored stand-ins: blue boat, grey trash, dimmed overlay
    pub fn placeholder() -> Self {
        Self {
            boat: SpriteImage::solid(16, 16, [40, 60, 220, 255]),
            trash: SpriteImage::solid(16, 16, [120, 120, 110, 255]),
            game_over: SpriteImage::solid(4, 4, [0, 0, 0, 180]),
        }
    }
}

/// Source-over blend of `src` onto `dst`
#[inline]
fn blend(dst: Rgba, src: Rgba) -> Rgba {
    match src[3] {
        255 => src,
        0 => dst,
        a => {
            let a = a as u32;
            let inv = 255 - a;
            let mix = |s: u8, d: u8| ((s as u32 * a + d as u32 * inv + 127) / 255) as u8;
            [
                mix(src[0], dst[0]),
                mix(src[1], dst[1]),
                mix(src[2], dst[2]),
                255,
            ]
        }
    }
}

/// Software canvas compositing into a [`PixelFrame`]
pub struct FrameCanvas {
    frame: PixelFrame,
    assets: Assets,
    hud: Vec<HudText>,
}

impl FrameCanvas {
    pub fn new(width: u32, height: u32, assets: Assets) -> Self {
        Self {
            frame: PixelFrame::new(width, height),
            assets,
            hud: Vec::new(),
        }
    }

    /// Composited pixels for presentation
    pub fn frame(&self) -> &PixelFrame {
        &self.frame
    }

    /// Text queued since the last clear
    pub fn hud(&self) -> &[HudText] {
        &self.hud
    }
}

impl Canvas for FrameCanvas {
    fn clear(&mut self, color: Rgba) {
        self.frame.fill(color);
        self.hud.clear();
    }

    fn put_pixels(&mut self, frame: &PixelFrame) {
        if frame.width() == self.frame.width() && frame.height() == self.frame.height() {
            self.frame.pixels_mut().copy_from_slice(frame.pixels());
        } else {
            log::warn!(
                "Dropping {}x{} frame on {}x{} canvas",
                frame.width(),
                frame.height(),
                self.frame.width(),
                self.frame.height()
            );
        }
    }

    fn draw_sprite(&mut self, sprite: Sprite, center: Vec2, size: Vec2) {
        if size.x <= 0.0 || size.y <= 0.0 {
            return;
        }
        let image = self.assets.get(sprite);
        let (fw, fh) = (self.frame.width() as i64, self.frame.height() as i64);
        let min = center - size / 2.0;

        // Destination rectangle clipped to the frame
        let x0 = (min.x.round() as i64).max(0);
        let y0 = (min.y.round() as i64).max(0);
        let x1 = ((min.x + size.x).round() as i64).min(fw);
        let y1 = ((min.y + size.y).round() as i64).min(fh);

        let width = fw as usize;
        let pixels = self.frame.pixels_mut();
        for y in y0..y1 {
            let v = ((y as f32 + 0.5 - min.y) / size.y).clamp(0.0, 1.0);
            for x in x0..x1 {
                let u = ((x as f32 + 0.5 - min.x) / size.x).clamp(0.0, 1.0);
                let idx = y as usize * width + x as usize;
                pixels[idx] = blend(pixels[idx], image.sample(u, v));
            }
        }
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, size: f32, align: TextAlign) {
        self.hud.push(HudText {
            text: text.to_string(),
            pos,
            size,
            align,
        });
    }
}
