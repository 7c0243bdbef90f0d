/// `Color` は 24 ビットの RGB カラーを表す.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl std::fmt::Debug for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// アルファ付きの色を受け取るが, キャンバスは不透明色しか扱わないのでアルファは捨てる.
    pub const fn rgba(r: u8, g: u8, b: u8, _alpha: u8) -> Self {
        Self { r, g, b }
    }

    /// 計算で求めた各チャンネルを [0, 255] に丸めて色を作る.
    pub fn clamped(r: i32, g: i32, b: i32) -> Self {
        let c = |v: i32| v.clamp(0, 255) as u8;
        Self {
            r: c(r),
            g: c(g),
            b: c(b),
        }
    }

    pub(crate) fn to_pixel(self) -> image::Rgb<u8> {
        image::Rgb([self.r, self.g, self.b])
    }

    pub(crate) fn from_pixel(image::Rgb([r, g, b]): image::Rgb<u8>) -> Self {
        Self { r, g, b }
    }
}

/// `Point` はキャンバス上の座標を表す. Y 軸は下向き.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// `self` を中心とした半径 `radius`, 角度 `degree` (X 軸正方向から時計回り) の点.
    pub fn polar(self, radius: f64, degree: f64) -> Self {
        let rad = degree.to_radians();
        Self {
            x: self.x + (radius * rad.cos()) as i32,
            y: self.y + (radius * rad.sin()) as i32,
        }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// `Rect` は両端を含む軸平行な矩形領域を表す. 楕円や円弧ではその外接矩形として使う.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Rect {
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        assert!(
            x0 <= x1 && y0 <= y1,
            "inverted bounding box: ({}, {}) - ({}, {})",
            x0,
            y0,
            x1,
            y1
        );
        Self { x0, y0, x1, y1 }
    }

    /// `center` を中心に半幅 `half_w`, 半高 `half_h` の矩形.
    pub fn around(center: Point, half_w: i32, half_h: i32) -> Self {
        Self::new(
            center.x - half_w,
            center.y - half_h,
            center.x + half_w,
            center.y + half_h,
        )
    }

    pub fn square(center: Point, radius: i32) -> Self {
        Self::around(center, radius, radius)
    }

    pub fn width(&self) -> i32 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> i32 {
        self.y1 - self.y0
    }

    pub fn center(&self) -> (f64, f64) {
        (
            (self.x0 + self.x1) as f64 / 2.0,
            (self.y0 + self.y1) as f64 / 2.0,
        )
    }
}

/// 拡大率 `scale` をかけた長さを最も近い整数にする.
pub fn scaled(length: i32, scale: f64) -> i32 {
    (length as f64 * scale).round() as i32
}

#[test]
fn test_color_clamped() {
    assert_eq!(Color::clamped(-3, 128, 300), Color::rgb(0, 128, 255));
    assert_eq!(Color::rgba(80, 60, 120, 50), Color::rgb(80, 60, 120));
}

#[test]
fn test_polar() {
    let c = Point::new(100, 100);
    assert_eq!(c.polar(50.0, 0.0), Point::new(150, 100));
    assert_eq!(c.polar(50.0, 90.0), Point::new(100, 150));
    assert_eq!(c.polar(50.0, 180.0), Point::new(50, 100));
}

#[test]
#[should_panic]
fn test_inverted_rect() {
    Rect::new(10, 0, 0, 10);
}
