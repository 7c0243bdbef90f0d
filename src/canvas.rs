use {
    crate::basis::{Color, Point, Rect},
    ab_glyph::{FontRef, PxScale},
    anyhow::{Context as _, Result},
    image::{ImageFormat, RgbImage},
    imageproc::drawing::{
        draw_filled_circle_mut, draw_filled_ellipse_mut, draw_filled_rect_mut,
        draw_hollow_ellipse_mut, draw_hollow_rect_mut, draw_line_segment_mut, draw_polygon_mut,
        draw_text_mut,
    },
    log::warn,
    std::{
        fs,
        path::{Path, PathBuf},
    },
};


/// `text` で描く文字の高さ (px).
pub const TEXT_SIZE: f32 = 28.0;

/// 円弧を折れ線で近似するときの刻み (度).
const ARC_STEP: f64 = 1.0;

static FONT_DATA: &[u8] = include_bytes!("../assets/DejaVuSans-Bold.ttf");

fn font() -> FontRef<'static> {
    FontRef::try_from_slice(FONT_DATA).expect("bundled font must be a valid TrueType file")
}

/// `Canvas` は描画先のラスタ画像を表す. はみ出した描画は黙って切り捨てる.
///
/// 図形のラスタライズは `imageproc` に任せ, ここでは外接矩形での指定, 枠の太さ, 角丸, 円弧の角度範囲だけを扱う.
pub struct Canvas {
    buffer: RgbImage,
}

impl std::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Canvas({}x{})", self.buffer.width(), self.buffer.height())
    }
}

impl Canvas {
    /// 黒で埋められた `width` x `height` のキャンバスを作る.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            buffer: RgbImage::new(width, height),
        }
    }

    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        if 0 <= x && 0 <= y && (x as u32) < self.width() && (y as u32) < self.height() {
            Some(Color::from_pixel(*self.buffer.get_pixel(x as u32, y as u32)))
        } else {
            None
        }
    }

    pub fn as_image(&self) -> &RgbImage {
        &self.buffer
    }

    /// 点列 `points` を順に結ぶ折れ線を描く.
    pub fn line(&mut self, points: &[Point], color: Color, width: u32) {
        assert!(points.len() >= 2, "a line needs at least 2 points");

        for segment in points.windows(2) {
            if width <= 1 {
                draw_line_segment_mut(
                    &mut self.buffer,
                    (segment[0].x as f32, segment[0].y as f32),
                    (segment[1].x as f32, segment[1].y as f32),
                    color.to_pixel(),
                );
            } else {
                self.thick_segment(segment[0], segment[1], color, width);
            }
        }
    }

    /// 線分の両側に `(width - 1) / 2` ずつ広げた四角形として太線を塗る.
    fn thick_segment(&mut self, from: Point, to: Point, color: Color, width: u32) {
        let half = (width as f64 - 1.0) / 2.0;
        let (dx, dy) = ((to.x - from.x) as f64, (to.y - from.y) as f64);
        let len = dx.hypot(dy);

        if len == 0.0 {
            let h = half.round() as i32;
            self.rectangle(Rect::square(from, h), Some(color), None, 0);
            return;
        }

        let (nx, ny) = (-dy / len * half, dx / len * half);
        let corner = |p: Point, sign: f64| {
            Point::new(
                (p.x as f64 + nx * sign).round() as i32,
                (p.y as f64 + ny * sign).round() as i32,
            )
        };

        self.polygon(
            &[
                corner(from, 1.0),
                corner(to, 1.0),
                corner(to, -1.0),
                corner(from, -1.0),
            ],
            color,
        );
    }

    /// `rect` に内接する楕円を描く. `fill` と `outline` のどちらも無ければ何もしない.
    ///
    /// 中心と半径は整数に切り捨てる. 枠は楕円の内側に `outline_width` の太さで描く.
    pub fn ellipse(
        &mut self,
        rect: Rect,
        fill: Option<Color>,
        outline: Option<Color>,
        outline_width: u32,
    ) {
        let center = (rect.x0 + rect.width() / 2, rect.y0 + rect.height() / 2);
        let (rx, ry) = (rect.width() / 2, rect.height() / 2);
        let w = outline_width as i32;

        match (fill, outline) {
            (None, None) => {}
            (Some(fill), None) => {
                draw_filled_ellipse_mut(&mut self.buffer, center, rx, ry, fill.to_pixel());
            }
            (Some(fill), Some(outline)) => {
                let (fill, outline) = (fill.to_pixel(), outline.to_pixel());
                draw_filled_ellipse_mut(&mut self.buffer, center, rx, ry, outline);
                if rx > w && ry > w {
                    draw_filled_ellipse_mut(&mut self.buffer, center, rx - w, ry - w, fill);
                }
            }
            (None, Some(outline)) => {
                let outline = outline.to_pixel();
                for k in 0..w.min(rx.min(ry) + 1) {
                    draw_hollow_ellipse_mut(&mut self.buffer, center, rx - k, ry - k, outline);
                }
            }
        }
    }

    /// 頂点列 `vertices` で囲まれた領域を辺も含めて塗る.
    pub fn polygon(&mut self, vertices: &[Point], fill: Color) {
        assert!(
            vertices.len() >= 3,
            "a polygon needs at least 3 vertices, but got {}",
            vertices.len()
        );

        let mut poly = vertices
            .iter()
            .map(|p| imageproc::point::Point::new(p.x, p.y))
            .collect::<Vec<_>>();
        poly.dedup();
        // imageproc は始点と終点が同じ多角形を受け付けない
        while poly.len() > 1 && poly.first() == poly.last() {
            poly.pop();
        }

        if poly.len() < 3 {
            // 潰れて線か点になった
            let (a, b) = (poly[0], poly[poly.len() - 1]);
            draw_line_segment_mut(
                &mut self.buffer,
                (a.x as f32, a.y as f32),
                (b.x as f32, b.y as f32),
                fill.to_pixel(),
            );
            return;
        }
        draw_polygon_mut(&mut self.buffer, &poly, fill.to_pixel());
    }

    /// 軸平行な矩形を描く. 枠は矩形の内側に `outline_width` の太さで描く.
    pub fn rectangle(
        &mut self,
        rect: Rect,
        fill: Option<Color>,
        outline: Option<Color>,
        outline_width: u32,
    ) {
        if let Some(fill) = fill {
            draw_filled_rect_mut(&mut self.buffer, to_imageproc_rect(rect), fill.to_pixel());
        }
        if let Some(outline) = outline {
            for k in 0..outline_width as i32 {
                match inset(rect, k) {
                    Some(ring) => draw_hollow_rect_mut(
                        &mut self.buffer,
                        to_imageproc_rect(ring),
                        outline.to_pixel(),
                    ),
                    None => break,
                }
            }
        }
    }

    /// 四隅を半径 `radius` の円弧で丸めた矩形を `fill` で塗り, 枠を内側に描く.
    pub fn rounded_rectangle(
        &mut self,
        rect: Rect,
        radius: i32,
        fill: Color,
        outline: Option<Color>,
        outline_width: u32,
    ) {
        let w = match outline {
            Some(outline) => {
                self.rounded_block(rect, radius, outline);
                outline_width as i32
            }
            None => 0,
        };
        if let Some(inner) = inset(rect, w) {
            self.rounded_block(inner, radius - w, fill);
        }
    }

    /// 角丸矩形を 2 本の帯と四隅の円で塗りつぶす.
    fn rounded_block(&mut self, rect: Rect, radius: i32, color: Color) {
        let r = radius.clamp(0, rect.width().min(rect.height()) / 2);
        let pixel = color.to_pixel();
        if r == 0 {
            draw_filled_rect_mut(&mut self.buffer, to_imageproc_rect(rect), pixel);
            return;
        }

        let bands = [
            Rect::new(rect.x0, rect.y0 + r, rect.x1, rect.y1 - r),
            Rect::new(rect.x0 + r, rect.y0, rect.x1 - r, rect.y1),
        ];
        for band in bands.iter() {
            draw_filled_rect_mut(&mut self.buffer, to_imageproc_rect(*band), pixel);
        }
        for &(x, y) in [
            (rect.x0 + r, rect.y0 + r),
            (rect.x1 - r, rect.y0 + r),
            (rect.x0 + r, rect.y1 - r),
            (rect.x1 - r, rect.y1 - r),
        ]
        .iter()
        {
            draw_filled_circle_mut(&mut self.buffer, (x, y), r, pixel);
        }
    }

    /// `rect` に内接する楕円のうち角度 `[start, end]` の部分を太さ `width` で描く.
    /// 角度は度数法で X 軸正方向から時計回りに測り, `end < start` なら 0 度をまたぐ.
    ///
    /// 半画素ずつ縮めた楕円を `ARC_STEP` 刻みの折れ線で重ねて太さを出す.
    pub fn arc(&mut self, rect: Rect, start: f64, end: f64, color: Color, width: u32) {
        let span = if end - start >= 360.0 {
            360.0
        } else {
            (end - start).rem_euclid(360.0)
        };
        let steps = (span / ARC_STEP).ceil().max(1.0) as usize;

        let (cx, cy) = rect.center();
        let (a, b) = (rect.width() as f64 / 2.0, rect.height() as f64 / 2.0);

        for ring in 0..2 * width {
            let inset = ring as f64 / 2.0;
            let (ra, rb) = (a - inset, b - inset);
            if ra < 0.0 || rb < 0.0 {
                break;
            }
            let at = |i: usize| {
                let rad = (start + span * i as f64 / steps as f64).to_radians();
                (
                    (cx + ra * rad.cos()).round() as f32,
                    (cy + rb * rad.sin()).round() as f32,
                )
            };
            for i in 0..steps {
                draw_line_segment_mut(&mut self.buffer, at(i), at(i + 1), color.to_pixel());
            }
        }
    }

    /// `position` を左上として `text` を同梱のフォントで描く.
    pub fn text(&mut self, position: Point, text: &str, color: Color) {
        draw_text_mut(
            &mut self.buffer,
            color.to_pixel(),
            position.x,
            position.y,
            PxScale::from(TEXT_SIZE),
            &font(),
            text,
        );
    }

    /// PNG として `path` に書き出す. 一時ファイルに書いてから置き換えるので, 失敗しても壊れたファイルは残らない.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let tmp = temporary_path(path)?;

        let result = self
            .buffer
            .save_with_format(&tmp, ImageFormat::Png)
            .with_context(|| format!("failed to encode png into {}", tmp.display()))
            .and_then(|()| {
                fs::rename(&tmp, path).with_context(|| {
                    format!("failed to move {} to {}", tmp.display(), path.display())
                })
            });

        if result.is_err() && tmp.exists() {
            if let Err(e) = fs::remove_file(&tmp) {
                warn!("failed to remove temporary file {}: {}", tmp.display(), e);
            }
        }
        result
    }
}

fn temporary_path(path: &Path) -> Result<PathBuf> {
    let name = path
        .file_name()
        .with_context(|| format!("output path has no file name: {}", path.display()))?;
    let mut tmp_name = std::ffi::OsString::from(".");
    tmp_name.push(name);
    tmp_name.push(".tmp");
    Ok(path.with_file_name(tmp_name))
}

/// 四辺を `by` だけ内側に寄せた矩形. 潰れてしまうなら `None`.
fn inset(rect: Rect, by: i32) -> Option<Rect> {
    if rect.width() < 2 * by || rect.height() < 2 * by {
        return None;
    }
    Some(Rect::new(
        rect.x0 + by,
        rect.y0 + by,
        rect.x1 - by,
        rect.y1 - by,
    ))
}

fn to_imageproc_rect(rect: Rect) -> imageproc::rect::Rect {
    imageproc::rect::Rect::at(rect.x0, rect.y0)
        .of_size((rect.width() + 1) as u32, (rect.height() + 1) as u32)
}
