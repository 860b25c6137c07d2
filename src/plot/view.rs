use crate::foundation::error::{EaseKitError, EaseKitResult};

pub use kurbo::{Point, Rect};

/// World-space window onto the plot plane.
///
/// `zoom` is in pixels per world unit, so a `W x H` pixel surface shows a `W/zoom x H/zoom`
/// rectangle centred on the focus point. World `y` grows downward, as in SVG.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct View {
    rect: Rect,
}

impl View {
    /// Window of a `width_px x height_px` surface centred on `focus`.
    pub fn centered(
        focus: Point,
        width_px: u32,
        height_px: u32,
        zoom: f64,
    ) -> EaseKitResult<Self> {
        if width_px == 0 || height_px == 0 {
            return Err(EaseKitError::validation("plot surface width/height must be > 0"));
        }
        if !zoom.is_finite() || zoom <= 0.0 {
            return Err(EaseKitError::validation(format!(
                "plot zoom must be finite and > 0, got {zoom}"
            )));
        }
        let w = f64::from(width_px) / zoom;
        let h = f64::from(height_px) / zoom;
        let x0 = focus.x - 0.5 * w;
        let y0 = focus.y - 0.5 * h;
        Ok(Self {
            rect: Rect::new(x0, y0, x0 + w, y0 + h),
        })
    }

    /// The window rectangle.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn left(&self) -> f64 {
        self.rect.x0
    }

    pub fn right(&self) -> f64 {
        self.rect.x1
    }

    pub fn top(&self) -> f64 {
        self.rect.y0
    }

    pub fn bottom(&self) -> f64 {
        self.rect.y1
    }

    pub fn width(&self) -> f64 {
        self.rect.width()
    }

    pub fn height(&self) -> f64 {
        self.rect.height()
    }

    /// SVG `viewBox` attribute value: `"x y width height"`.
    pub fn view_box(&self) -> String {
        format!(
            "{} {} {} {}",
            self.left(),
            self.top(),
            self.width(),
            self.height()
        )
    }
}
