use crate::{
    basis::{Color, Point},
    canvas::Canvas,
};

/// `n` 本の走査線のうち `i` 本目の色. `from` から `to` へ `i / n` の割合で線形補間する.
pub fn gradient_color(from: Color, to: Color, i: u32, n: u32) -> Color {
    debug_assert!(n > 0 && i < n);
    let ratio = i as f64 / n as f64;
    let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * ratio).round() as i32;
    Color::clamped(lerp(from.r, to.r), lerp(from.g, to.g), lerp(from.b, to.b))
}

/// キャンバス全体を `from` から `to` へのグラデーションで塗る.
/// `vertical` なら上から下へ行ごとに, そうでなければ左から右へ列ごとに色を変える.
pub fn linear_gradient(canvas: &mut Canvas, from: Color, to: Color, vertical: bool) {
    let (width, height) = (canvas.width() as i32, canvas.height() as i32);
    let n = if vertical { height } else { width };

    for i in 0..n {
        let color = gradient_color(from, to, i as u32, n as u32);
        let ends = if vertical {
            [Point::new(0, i), Point::new(width, i)]
        } else {
            [Point::new(i, 0), Point::new(i, height)]
        };
        canvas.line(&ends, color, 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channels(c: Color) -> [i32; 3] {
        [c.r as i32, c.g as i32, c.b as i32]
    }

    fn assert_close(actual: Color, expected: Color) {
        for (a, e) in channels(actual).iter().zip(channels(expected).iter()) {
            assert!((a - e).abs() <= 1, "{:?} != {:?}", actual, expected);
        }
    }

    const PAIRS: [(Color, Color); 4] = [
        (Color::rgb(20, 20, 60), Color::rgb(60, 20, 80)),
        (Color::rgb(255, 150, 100), Color::rgb(255, 120, 180)),
        (Color::rgb(0, 0, 0), Color::rgb(255, 255, 255)),
        (Color::rgb(255, 0, 255), Color::rgb(0, 255, 0)),
    ];

    // line n - 1 stops short of `to` by |to - from| / n, which is within 1 only when n >= 255
    #[test]
    fn endpoints() {
        for &n in &[800, 1000] {
            for &(a, b) in &PAIRS {
                assert_eq!(gradient_color(a, b, 0, n), a);
                assert_close(gradient_color(a, b, n - 1, n), b);
            }
        }
    }

    #[test]
    fn last_line_falls_short_on_few_lines() {
        let (a, b) = (Color::BLACK, Color::WHITE);
        assert_eq!(gradient_color(a, b, 1, 2), Color::rgb(128, 128, 128));
        assert_eq!(gradient_color(a, b, 3, 4), Color::rgb(191, 191, 191));
        assert_close(gradient_color(a, b, 254, 255), Color::rgb(254, 254, 254));
    }

    #[test]
    fn monotonic() {
        let n = 1000;
        for &(a, b) in &PAIRS {
            let mut prev = channels(gradient_color(a, b, 0, n));
            for i in 1..n {
                let cur = channels(gradient_color(a, b, i, n));
                for ((p, c), (start, end)) in prev
                    .iter()
                    .zip(cur.iter())
                    .zip(channels(a).iter().zip(channels(b).iter()))
                {
                    if start <= end {
                        assert!(p <= c);
                    } else {
                        assert!(p >= c);
                    }
                }
                prev = cur;
            }
        }
    }

    #[test]
    fn fills_rows_when_vertical() {
        let (a, b) = (Color::rgb(0, 0, 0), Color::rgb(200, 100, 0));
        let mut canvas = Canvas::new(30, 100);
        linear_gradient(&mut canvas, a, b, true);

        for y in 0..100 {
            let expected = gradient_color(a, b, y as u32, 100);
            assert_eq!(canvas.pixel(0, y), Some(expected));
            assert_eq!(canvas.pixel(29, y), Some(expected));
        }
    }

    #[test]
    fn fills_columns_when_horizontal() {
        let (a, b) = (Color::rgb(10, 200, 30), Color::rgb(90, 20, 250));
        let mut canvas = Canvas::new(50, 20);
        linear_gradient(&mut canvas, a, b, false);

        assert_eq!(canvas.pixel(0, 19), Some(a));
        for x in 0..50 {
            assert_eq!(
                canvas.pixel(x, 7),
                Some(gradient_color(a, b, x as u32, 50))
            );
        }
    }
}
