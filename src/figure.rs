//! 人物を描くための部品. どれも中心座標と拡大率だけで位置を決めるので, 好きな組み合わせで呼べる.

use crate::{
    basis::{scaled, Color, Point, Rect},
    canvas::Canvas,
};

#[cfg(test)]
mod tests;

pub const HEAD_RADIUS: i32 = 60;
pub const EYE_OFFSET_X: i32 = 20;
pub const EYE_OFFSET_Y: i32 = -5;
const EYE_RADIUS: i32 = 8;
const MOUTH_COLOR: Color = Color::rgb(180, 100, 100);

/// 頭と髪を描いて頭の半径を返す.
///
/// 髪は頭の上半分を覆う半円の多角形と, 額の上の生え際の楕円でできている.
pub fn head(canvas: &mut Canvas, center: Point, skin: Color, hair: Color, scale: f64) -> i32 {
    let radius = scaled(HEAD_RADIUS, scale);
    canvas.ellipse(Rect::square(center, radius), Some(skin), Some(skin), 1);

    let hair_points = (180..=360)
        .map(|degree| center.polar((radius + 5) as f64, degree as f64))
        .collect::<Vec<_>>();
    canvas.polygon(&hair_points, hair);

    canvas.ellipse(
        Rect::new(
            center.x - radius - 5,
            center.y - radius - 15,
            center.x + radius + 5,
            center.y - 10,
        ),
        Some(hair),
        None,
        0,
    );

    radius
}

/// 左右の目の中心.
pub fn eye_centers(center: Point, scale: f64) -> [Point; 2] {
    let dx = scaled(EYE_OFFSET_X, scale);
    let dy = scaled(EYE_OFFSET_Y, scale);
    [center.offset(-dx, dy), center.offset(dx, dy)]
}

/// 白目と `eye_color` の瞳からなる両目を描く.
pub fn eyes(canvas: &mut Canvas, center: Point, eye_color: Color, scale: f64) {
    let radius = scaled(EYE_RADIUS, scale);

    for eye in eye_centers(center, scale).iter() {
        canvas.ellipse(Rect::square(*eye, radius), Some(Color::WHITE), None, 0);
        canvas.ellipse(Rect::square(*eye, radius / 2), Some(eye_color), None, 0);
    }
}

/// 目の下に口角の上がった口を描く.
pub fn smile(canvas: &mut Canvas, center: Point, scale: f64) {
    let mouth = center.offset(0, scaled(25, scale));
    canvas.arc(
        Rect::around(mouth, scaled(20, scale), scaled(15, scale)),
        0.0,
        180.0,
        MOUTH_COLOR,
        3,
    );
}

/// 両目を囲む四角い眼鏡とブリッジを描く.
pub fn glasses(canvas: &mut Canvas, center: Point, scale: f64, frame: Color) {
    let half_w = scaled(25, scale);
    let half_h = scaled(18, scale);
    let [left, right] = eye_centers(center, scale);

    canvas.rectangle(Rect::around(left, half_w, half_h), None, Some(frame), 3);
    canvas.rectangle(Rect::around(right, half_w, half_h), None, Some(frame), 3);
    canvas.line(
        &[left.offset(half_w, 0), right.offset(-half_w, 0)],
        frame,
        3,
    );
}

/// `Badge` は画像下部に置くタイプ名入りの札の配色を表す.
#[derive(Debug, Clone, Copy)]
pub struct Badge {
    pub fill: Color,
    pub outline: Color,
    pub text: Color,
    /// 文字の左端をキャンバス中央からどれだけ左に置くか.
    pub text_dx: i32,
}

impl Badge {
    pub const HALF_WIDTH: i32 = 80;
    const CORNER_RADIUS: i32 = 12;

    /// キャンバス下部中央に札を描き, `label` を書く.
    pub fn draw(&self, canvas: &mut Canvas, label: &str) {
        let (width, height) = (canvas.width() as i32, canvas.height() as i32);
        let mid = width / 2;

        canvas.rounded_rectangle(
            Rect::new(
                mid - Self::HALF_WIDTH,
                height - 120,
                mid + Self::HALF_WIDTH,
                height - 60,
            ),
            Self::CORNER_RADIUS,
            self.fill,
            Some(self.outline),
            3,
        );
        canvas.text(Point::new(mid - self.text_dx, height - 110), label, self.text);
    }
}
