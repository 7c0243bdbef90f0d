//! 提唱者: 紫の夢のような背景に, ローブをまとった神秘的な人物.

use {
    super::{new_canvas, Scatter, H, W},
    crate::{
        basis::{Color, Point, Rect},
        canvas::Canvas,
        figure::{self, Badge, EYE_OFFSET_X, EYE_OFFSET_Y},
        gradient::linear_gradient,
    },
    rand::{rngs::StdRng, Rng, SeedableRng},
};

pub(super) const SEED: u64 = 789;

const SKIN: Color = Color::rgb(250, 225, 200);
const HAIR: Color = Color::rgb(30, 20, 40);
const ROBE: Color = Color::rgb(70, 40, 100);
const ROBE_FOLD: Color = Color::rgb(60, 35, 90);
const SCLERA: Color = Color::rgb(50, 30, 70);
const HIGHLIGHT: Color = Color::rgb(200, 200, 255);
const SYMBOL: Color = Color::rgb(180, 150, 220);

const BADGE: Badge = Badge {
    fill: Color::rgb(80, 50, 110),
    outline: Color::rgb(150, 120, 180),
    text: Color::rgb(230, 210, 255),
    text_dx: 35,
};

pub(super) fn compose() -> Canvas {
    let mut canvas = new_canvas();
    linear_gradient(
        &mut canvas,
        Color::rgb(80, 40, 120),
        Color::rgb(40, 20, 80),
        true,
    );

    let mut rng = StdRng::seed_from_u64(SEED);
    Scatter {
        count: 50,
        xs: 20..=W - 20,
        ys: 20..=H - 20,
        radii: 1..=4,
    }
    .draw(&mut canvas, &mut rng, |rng| {
        let brightness = rng.gen_range(150..=255);
        Color::clamped(brightness, brightness, brightness + 50)
    });

    let c = Point::new(W / 2, 380);

    // aura, largest ring first
    for r in (60..=200).rev().step_by(20) {
        canvas.ellipse(
            Rect::square(c.offset(0, 50), r),
            Some(Color::clamped(100 + r / 4, 60, 140 + r / 5)),
            None,
            0,
        );
    }

    canvas.polygon(
        &[
            c.offset(-100, 70),
            c.offset(100, 70),
            c.offset(180, 450),
            c.offset(-180, 450),
        ],
        ROBE,
    );
    for i in 0..3 {
        let x = -60 + i * 60;
        canvas.polygon(
            &[
                c.offset(x, 100),
                c.offset(x + 20, 400),
                c.offset(x + 40, 400),
                c.offset(x + 20, 100),
            ],
            ROBE_FOLD,
        );
    }
    // hood
    canvas.arc(
        Rect::new(c.x - 100, c.y - 80, c.x + 100, c.y + 100),
        200.0,
        340.0,
        Color::rgb(50, 30, 70),
        25,
    );
    // crossed arms in the sleeves
    canvas.ellipse(
        Rect::new(c.x - 70, c.y + 150, c.x + 70, c.y + 220),
        Some(ROBE),
        None,
        0,
    );

    figure::head(&mut canvas, c, SKIN, HAIR, 1.0);

    // dark eyes with a small reflection instead of figure::eyes
    for &side in &[-1, 1] {
        let eye = c.offset(side * EYE_OFFSET_X, EYE_OFFSET_Y);
        canvas.ellipse(Rect::square(eye, 10), Some(SCLERA), None, 0);
        canvas.ellipse(
            Rect::new(eye.x - 3, eye.y - 5, eye.x + 1, eye.y - 1),
            Some(HIGHLIGHT),
            None,
            0,
        );
    }

    canvas.arc(
        Rect::new(c.x - 15, c.y + 20, c.x + 15, c.y + 40),
        0.0,
        180.0,
        Color::rgb(200, 150, 150),
        2,
    );

    // third eye
    canvas.ellipse(
        Rect::new(c.x - 8, c.y - 45, c.x + 8, c.y - 30),
        Some(Color::rgb(150, 100, 180)),
        Some(Color::rgb(200, 150, 220)),
        2,
    );

    for &degree in &[45.0_f64, 135.0, 225.0, 315.0] {
        let rad = degree.to_radians();
        let s = Point::new(
            c.x + (150.0 * rad.cos()) as i32,
            c.y - 50 + (100.0 * rad.sin()) as i32,
        );
        canvas.polygon(
            &[
                s.offset(0, -15),
                s.offset(10, 0),
                s.offset(0, 15),
                s.offset(-10, 0),
            ],
            SYMBOL,
        );
    }

    BADGE.draw(&mut canvas, "INFJ");
    canvas
}
