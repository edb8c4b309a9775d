use image::{Rgba, RgbaImage};
use rand::{Rng, SeedableRng};

pub const MIN_SIZE: u32 = 16;
pub const MAX_SIZE: u32 = 512;

const BORDER_WIDTH: f32 = 0.08;
const BORDER_COLOR: Rgba<u8> = Rgba([229, 231, 235, 255]);
const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

const PALETTE: [[u8; 3]; 10] = [
    [99, 102, 241],
    [147, 51, 234],
    [45, 212, 191],
    [14, 165, 233],
    [244, 63, 94],
    [234, 179, 8],
    [34, 197, 94],
    [249, 115, 22],
    [236, 72, 153],
    [30, 41, 59],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Circle,
    Square,
    Diamond,
    Triangle,
    Ring,
    Bars,
}

const SHAPES: [Shape; 6] = [
    Shape::Circle,
    Shape::Square,
    Shape::Diamond,
    Shape::Triangle,
    Shape::Ring,
    Shape::Bars,
];

/// Visual identity glyph, a pure function of its key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identicon {
    pub background: Rgba<u8>,
    pub foreground: Rgba<u8>,
    pub shape: Shape,
    /// quarter turns
    pub rotation: u8,
}

/// FNV-1a, stable across builds and platforms unlike `DefaultHasher`
pub fn seed(key: &str) -> u64 {
    key.bytes().fold(0xcbf2_9ce4_8422_2325, |hash, byte| {
        (hash ^ u64::from(byte)).wrapping_mul(0x0100_0000_01b3)
    })
}

impl Identicon {
    pub fn for_key(key: &str) -> Self {
        let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(seed(key));

        let background = rng.gen_range(0..PALETTE.len());
        // never the same colour twice
        let foreground = (background + rng.gen_range(1..PALETTE.len())) % PALETTE.len();

        Self {
            background: opaque(PALETTE[background]),
            foreground: opaque(PALETTE[foreground]),
            shape: SHAPES[rng.gen_range(0..SHAPES.len())],
            rotation: rng.gen_range(0..4),
        }
    }

    /// Circular `size`x`size` image, transparent outside the circle
    pub fn render(&self, size: u32) -> RgbaImage {
        let size = size.clamp(MIN_SIZE, MAX_SIZE);
        let scale = size as f32 / 2.0;

        RgbaImage::from_fn(size, size, |px, py| {
            let x = (px as f32 + 0.5) / scale - 1.0;
            let y = (py as f32 + 0.5) / scale - 1.0;
            let radius = (x * x + y * y).sqrt();

            if radius > 1.0 {
                TRANSPARENT
            } else if radius > 1.0 - BORDER_WIDTH {
                BORDER_COLOR
            } else {
                let (x, y) = rotate(x, y, self.rotation);
                if self.shape.contains(x, y) {
                    self.foreground
                } else {
                    self.background
                }
            }
        })
    }
}

impl Shape {
    fn contains(self, x: f32, y: f32) -> bool {
        let radius = (x * x + y * y).sqrt();
        match self {
            Shape::Circle => radius < 0.45,
            Shape::Square => x.abs() < 0.38 && y.abs() < 0.38,
            Shape::Diamond => x.abs() + y.abs() < 0.55,
            Shape::Triangle => y > -0.45 && y < 0.4 && x.abs() < (y + 0.45) * 0.6,
            Shape::Ring => radius > 0.28 && radius < 0.5,
            Shape::Bars => x.abs() < 0.5 && y.abs() < 0.45 && ((x + 0.5) * 5.0) as u32 % 2 == 0,
        }
    }
}

fn rotate(x: f32, y: f32, quarter_turns: u8) -> (f32, f32) {
    match quarter_turns % 4 {
        0 => (x, y),
        1 => (-y, x),
        2 => (-x, -y),
        _ => (y, -x),
    }
}

fn opaque([r, g, b]: [u8; 3]) -> Rgba<u8> {
    Rgba([r, g, b, 255])
}

/// PNG bytes for `key`'s identicon
pub fn render_png(key: &str, size: u32) -> image::ImageResult<Vec<u8>> {
    let image = Identicon::for_key(key).render(size);

    let mut png = std::io::Cursor::new(Vec::new());
    image::DynamicImage::ImageRgba8(image).write_to(&mut png, image::ImageOutputFormat::Png)?;
    Ok(png.into_inner())
}
