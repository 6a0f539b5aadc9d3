#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Largest size with the same aspect ratio that fits inside `bounds`.
    pub fn aspect_fit(&self, bounds: Size) -> Size {
        if self.is_empty() || bounds.is_empty() {
            return Size::default();
        }
        let scale = (bounds.width / self.width).min(bounds.height / self.height);
        Size::new(self.width * scale, self.height * scale)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height * 0.5
    }

    pub fn inset_horizontal(&self, inset: f32) -> Rect {
        Rect::new(self.x + inset, self.y, (self.width - 2.0 * inset).max(0.0), self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_fit_keeps_ratio() {
        let fitted = Size::new(400.0, 200.0).aspect_fit(Size::new(100.0, 1000.0));
        assert_eq!(fitted, Size::new(100.0, 50.0));
    }

    #[test]
    fn aspect_fit_of_empty_is_empty() {
        assert!(Size::default().aspect_fit(Size::new(10.0, 10.0)).is_empty());
    }

    #[test]
    fn inset_never_goes_negative() {
        let rect = Rect::new(0.0, 0.0, 30.0, 10.0).inset_horizontal(20.0);
        assert_eq!(rect.x, 20.0);
        assert_eq!(rect.width, 0.0);
    }
}
