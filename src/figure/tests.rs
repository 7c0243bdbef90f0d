use super::{eye_centers, eyes, glasses, head, Badge};
use crate::{
    basis::{scaled, Color, Point},
    canvas::Canvas,
};

const SKIN: Color = Color::rgb(255, 220, 185);
const HAIR: Color = Color::rgb(40, 30, 30);
const BACKGROUND: Color = Color::rgb(0, 0, 0);

#[test]
fn head_radius_follows_scale() {
    for &scale in &[0.5, 1.0, 1.25, 1.5] {
        let mut canvas = Canvas::new(400, 400);
        let center = Point::new(200, 200);
        let r = head(&mut canvas, center, SKIN, HAIR, scale);
        assert_eq!(r, scaled(60, scale));

        // below the hairline the head is a plain skin disc
        assert_eq!(canvas.pixel(center.x, center.y + r), Some(SKIN));
        assert_eq!(canvas.pixel(center.x, center.y + r + 1), Some(BACKGROUND));
        assert_eq!(canvas.pixel(center.x - r, center.y + 2), Some(SKIN));
        assert_eq!(canvas.pixel(center.x + r, center.y + 2), Some(SKIN));
        assert_eq!(canvas.pixel(center.x + r + 1, center.y + 2), Some(BACKGROUND));
        assert_eq!(canvas.pixel(center.x, center.y + r / 2), Some(SKIN));

        // hair covers the top of the head
        assert_eq!(canvas.pixel(center.x, center.y - r), Some(HAIR));
        assert_eq!(canvas.pixel(center.x, center.y - r / 2), Some(HAIR));
    }
}

#[test]
fn eyes_are_white_with_iris() {
    let mut canvas = Canvas::new(200, 200);
    let center = Point::new(100, 100);
    let iris = Color::rgb(30, 30, 50);
    eyes(&mut canvas, center, iris, 1.0);

    let [left, right] = eye_centers(center, 1.0);
    assert_eq!(left, Point::new(80, 95));
    assert_eq!(right, Point::new(120, 95));
    for eye in [left, right].iter() {
        assert_eq!(canvas.pixel(eye.x, eye.y), Some(iris));
        assert_eq!(canvas.pixel(eye.x + 6, eye.y), Some(Color::WHITE));
        assert_eq!(canvas.pixel(eye.x + 10, eye.y), Some(BACKGROUND));
    }
    assert_eq!(canvas.pixel(center.x, center.y), Some(BACKGROUND));
}

#[test]
fn glasses_are_symmetric() {
    let frame = Color::rgb(40, 40, 40);
    for &scale in &[1.0, 1.3] {
        let mut canvas = Canvas::new(300, 300);
        let center = Point::new(150, 150);
        glasses(&mut canvas, center, scale, frame);

        let half_w = scaled(25, scale);
        let [left, right] = eye_centers(center, scale);
        assert_eq!(center.x - left.x, right.x - center.x);

        let y = left.y;
        for (lens, outer_x) in [(left, left.x - half_w), (right, right.x + half_w)].iter() {
            assert_eq!(canvas.pixel(*outer_x, y), Some(frame));
            let outside = if outer_x < &lens.x { outer_x - 1 } else { outer_x + 1 };
            assert_eq!(canvas.pixel(outside, y), Some(BACKGROUND));
            // lens inside is left open
            assert_eq!(canvas.pixel(lens.x, y), Some(BACKGROUND));
        }

        for dy in -40..=40 {
            for dx in 0..=100 {
                assert_eq!(
                    canvas.pixel(center.x - dx, center.y + dy),
                    canvas.pixel(center.x + dx, center.y + dy),
                    "asymmetric at dx={} dy={}",
                    dx,
                    dy
                );
            }
        }
    }
}

#[test]
fn badge_sits_at_bottom_center() {
    let mut canvas = Canvas::new(800, 1000);
    let badge = Badge {
        fill: Color::rgb(60, 40, 100),
        outline: Color::rgb(120, 100, 180),
        text: Color::rgb(220, 220, 255),
        text_dx: 40,
    };
    badge.draw(&mut canvas, "INTJ");

    assert_eq!(canvas.pixel(400, 881), Some(badge.outline));
    assert_eq!(canvas.pixel(321, 930), Some(badge.outline));
    assert_eq!(canvas.pixel(470, 925), Some(badge.fill));
    assert_eq!(canvas.pixel(400, 870), Some(BACKGROUND));

    // the label is drawn in the text color somewhere right of its anchor
    let near_text = |c: Color| {
        let d = |a: u8, b: u8| (a as i32 - b as i32).abs();
        d(c.r, badge.text.r) + d(c.g, badge.text.g) + d(c.b, badge.text.b) <= 6
    };
    let label = (885..925)
        .flat_map(|y| (360..460).map(move |x| (x, y)))
        .filter(|&(x, y)| canvas.pixel(x, y).map_or(false, near_text))
        .count();
    assert!(label > 50, "only {} label pixels", label);
    // nothing of the label left of its anchor
    for y in 885..925 {
        assert_eq!(canvas.pixel(350, y), Some(badge.fill));
    }
}
