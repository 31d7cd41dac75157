use eframe::egui::Color32;
use palette::Srgb;

// ---------------------------------------------------------------------------
// Purple–orange diverging interpolator
// ---------------------------------------------------------------------------

/// The 11-class PuOr scheme, dark orange → neutral → dark purple.
fn puor_stops() -> [Srgb<u8>; 11] {
    [
        Srgb::new(0x7f, 0x3b, 0x08),
        Srgb::new(0xb3, 0x58, 0x06),
        Srgb::new(0xe0, 0x82, 0x14),
        Srgb::new(0xfd, 0xb8, 0x63),
        Srgb::new(0xfe, 0xe0, 0xb6),
        Srgb::new(0xf7, 0xf7, 0xf7),
        Srgb::new(0xd8, 0xda, 0xeb),
        Srgb::new(0xb2, 0xab, 0xd2),
        Srgb::new(0x80, 0x73, 0xac),
        Srgb::new(0x54, 0x27, 0x88),
        Srgb::new(0x2d, 0x00, 0x4b),
    ]
}

/// Uniform cubic B-spline weight for one channel segment.
fn basis(t: f32, v0: f32, v1: f32, v2: f32, v3: f32) -> f32 {
    let t2 = t * t;
    let t3 = t2 * t;
    ((1.0 - 3.0 * t + 3.0 * t2 - t3) * v0
        + (4.0 - 6.0 * t2 + 3.0 * t3) * v1
        + (1.0 + 3.0 * t + 3.0 * t2 - 3.0 * t3) * v2
        + t3 * v3)
        / 6.0
}

/// Smoothly interpolate through `stops` for `t` in [0, 1] (clamped).
///
/// The curve passes near, not through, the interior stops; the end stops
/// are hit exactly by reflecting phantom control points.
fn spline(stops: &[Srgb<f32>], t: f64) -> Srgb<f32> {
    let n = stops.len() - 1;
    let t = t.clamp(0.0, 1.0) as f32;
    let i = if t >= 1.0 {
        n - 1
    } else {
        ((t * n as f32).floor() as usize).min(n - 1)
    };
    let v1 = stops[i];
    let v2 = stops[i + 1];
    let v0 = if i > 0 { stops[i - 1] } else { v1 * 2.0 - v2 };
    let v3 = if i < n - 1 { stops[i + 2] } else { v2 * 2.0 - v1 };
    let local = (t - i as f32 / n as f32) * n as f32;
    Srgb::new(
        basis(local, v0.red, v1.red, v2.red, v3.red),
        basis(local, v0.green, v1.green, v2.green, v3.green),
        basis(local, v0.blue, v1.blue, v2.blue, v3.blue),
    )
}

/// Evaluate the PuOr ramp at `t` in [0, 1].
pub fn interpolate_puor(t: f64) -> Srgb<u8> {
    let stops: Vec<Srgb<f32>> = puor_stops()
        .iter()
        .map(|c| c.into_format::<f32>())
        .collect();
    let c = spline(&stops, t);
    Srgb::new(
        c.red.clamp(0.0, 1.0),
        c.green.clamp(0.0, 1.0),
        c.blue.clamp(0.0, 1.0),
    )
    .into_format()
}

// ---------------------------------------------------------------------------
// Color scale: variance → colour
// ---------------------------------------------------------------------------

/// Sequential scale mapping a numeric domain onto the PuOr ramp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScale {
    min: f64,
    max: f64,
}

impl ColorScale {
    pub fn new(min: f64, max: f64) -> Self {
        ColorScale { min, max }
    }

    pub fn domain(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    /// Position of `value` along the ramp. A single-point domain maps
    /// everything to the neutral midpoint.
    pub fn normalize(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span.abs() < f64::EPSILON {
            return 0.5;
        }
        ((value - self.min) / span).clamp(0.0, 1.0)
    }

    pub fn color(&self, value: f64) -> Srgb<u8> {
        interpolate_puor(self.normalize(value))
    }
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

pub fn to_color32(c: Srgb<u8>) -> Color32 {
    Color32::from_rgb(c.red, c.green, c.blue)
}

/// `#rrggbb` form used by the exporters.
pub fn to_hex(c: Srgb<u8>) -> String {
    format!("#{:02x}{:02x}{:02x}", c.red, c.green, c.blue)
}
