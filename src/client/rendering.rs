use ggez::{
    Context, GameResult,
    glam::Vec2,
    graphics::{self, Color, DrawMode, DrawParam, Image, Text, TextFragment},
};

/// Drawing primitives the game needs from a frame.
pub trait DrawTarget {
    type Sprite;

    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) -> GameResult;
    fn rect(&mut self, rect: graphics::Rect, color: Color) -> GameResult;
    fn circle(&mut self, center: Vec2, radius: f32, color: Color) -> GameResult;
    /// Draws `sprite` with its top-left at `dest`, stretched to `size`.
    fn sprite(&mut self, sprite: &Self::Sprite, dest: Vec2, size: Vec2) -> GameResult;
    fn text(&mut self, text: &str, dest: Vec2, color: Color) -> GameResult;
}

/// One frame's canvas. Call [`FrameCanvas::finish`] to present it.
pub struct FrameCanvas<'a> {
    ctx: &'a mut Context,
    canvas: graphics::Canvas,
}

impl<'a> FrameCanvas<'a> {
    pub fn new(ctx: &'a mut Context, clear: Color) -> Self {
        let canvas = graphics::Canvas::from_frame(&ctx.gfx, clear);
        Self { ctx, canvas }
    }

    pub fn finish(self) -> GameResult {
        self.canvas.finish(&mut self.ctx.gfx)
    }
}

impl DrawTarget for FrameCanvas<'_> {
    type Sprite = Image;

    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) -> GameResult {
        // ggez rejects degenerate lines
        if from == to {
            return Ok(());
        }
        let mesh = graphics::Mesh::new_line(&self.ctx.gfx, &[from, to], width, color)?;
        self.canvas.draw(&mesh, DrawParam::default());
        Ok(())
    }

    fn rect(&mut self, rect: graphics::Rect, color: Color) -> GameResult {
        let mesh = graphics::Mesh::new_rectangle(&self.ctx.gfx, DrawMode::fill(), rect, color)?;
        self.canvas.draw(&mesh, DrawParam::default());
        Ok(())
    }

    fn circle(&mut self, center: Vec2, radius: f32, color: Color) -> GameResult {
        let mesh = graphics::Mesh::new_circle(
            &self.ctx.gfx,
            DrawMode::fill(),
            center,
            radius,
            0.5,
            color,
        )?;
        self.canvas.draw(&mesh, DrawParam::default());
        Ok(())
    }

    fn sprite(&mut self, sprite: &Image, dest: Vec2, size: Vec2) -> GameResult {
        let (w, h) = (sprite.width() as f32, sprite.height() as f32);
        if w == 0.0 || h == 0.0 {
            return Ok(());
        }
        self.canvas.draw(
            sprite,
            DrawParam::default()
                .dest(dest)
                .scale(Vec2::new(size.x / w, size.y / h)),
        );
        Ok(())
    }

    fn text(&mut self, text: &str, dest: Vec2, color: Color) -> GameResult {
        let text = Text::new(TextFragment::new(text).color(color).scale(16.0));
        self.canvas.draw(&text, DrawParam::default().dest(dest).z(100));
        Ok(())
    }
}

/// Maps the logical playfield into a window, keeping its aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    pub scale: f32,
    pub translation: Vec2,
}

impl ViewTransform {
    pub fn fit(window: Vec2, playfield: Vec2) -> Self {
        if playfield.x <= 0.0 || playfield.y <= 0.0 {
            return Self::default();
        }
        let scale = (window.x / playfield.x).min(window.y / playfield.y);
        let translation = (window - playfield * scale) / 2.0;
        Self { scale, translation }
    }

    pub fn apply(&self, point: Vec2) -> Vec2 {
        point * self.scale + self.translation
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            scale: 1.0,
            translation: Vec2::ZERO,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_same_size_is_identity() {
        let view = ViewTransform::fit(Vec2::new(800.0, 600.0), Vec2::new(800.0, 600.0));
        assert_eq!(view, ViewTransform::default());
    }

    #[test]
    fn fit_letterboxes_wide_window() {
        let view = ViewTransform::fit(Vec2::new(1600.0, 600.0), Vec2::new(800.0, 600.0));
        assert_eq!(view.scale, 1.0);
        assert_eq!(view.translation, Vec2::new(400.0, 0.0));
        assert_eq!(view.apply(Vec2::new(10.0, 10.0)), Vec2::new(410.0, 10.0));
    }

    #[test]
    fn fit_scales_down() {
        let view = ViewTransform::fit(Vec2::new(400.0, 400.0), Vec2::new(800.0, 600.0));
        assert_eq!(view.scale, 0.5);
        assert_eq!(view.translation, Vec2::new(0.0, 50.0));
    }
}
