//! 運動家: オレンジからピンクの背景に, 両手を挙げてはしゃぐ人物.

use {
    super::{new_canvas, Dot, Scatter, H, W},
    crate::{
        basis::{Color, Point, Rect},
        canvas::Canvas,
        figure::{self, Badge},
        gradient::linear_gradient,
    },
    rand::{rngs::StdRng, Rng, SeedableRng},
};

pub(super) const SEED: u64 = 42;

const SKIN: Color = Color::rgb(255, 210, 180);
const HAIR: Color = Color::rgb(255, 180, 100);
const OUTFIT: Color = Color::rgb(255, 200, 100);
const STRIPE: Color = Color::rgb(255, 100, 150);
const CHEEK: Color = Color::rgb(255, 180, 180);
const EXCITEMENT: Color = Color::rgb(255, 255, 150);

const BADGE: Badge = Badge {
    fill: Color::rgb(255, 150, 120),
    outline: Color::rgb(255, 200, 180),
    text: Color::WHITE,
    text_dx: 40,
};

pub(super) fn sparkles(canvas: &mut Canvas, rng: &mut StdRng) -> Vec<Dot> {
    Scatter {
        count: 30,
        xs: 50..=W - 50,
        ys: 50..=H - 50,
        radii: 5..=20,
    }
    .draw(canvas, rng, |rng| {
        let alpha = rng.gen_range(100..=200);
        Color::rgba(255, 255, 255, alpha)
    })
}

pub(super) fn compose() -> Canvas {
    let mut canvas = new_canvas();
    linear_gradient(
        &mut canvas,
        Color::rgb(255, 150, 100),
        Color::rgb(255, 120, 180),
        true,
    );

    let mut rng = StdRng::seed_from_u64(SEED);
    sparkles(&mut canvas, &mut rng);

    let c = Point::new(W / 2, 380);

    canvas.polygon(
        &[
            c.offset(-80, 80),
            c.offset(80, 80),
            c.offset(100, 350),
            c.offset(-100, 350),
        ],
        OUTFIT,
    );
    for i in 0..5 {
        let y = 120 + i * 50;
        canvas.line(&[c.offset(-70, y), c.offset(70, y)], STRIPE, 8);
    }

    // both arms up, hands above the head
    for &side in &[-1, 1] {
        canvas.polygon(
            &[
                c.offset(side * 80, 80),
                c.offset(side * 150, -100),
                c.offset(side * 100, -120),
                c.offset(side * 60, 60),
            ],
            SKIN,
        );
        canvas.ellipse(
            Rect::square(c.offset(side * 130, -120), 30),
            Some(SKIN),
            None,
            0,
        );
    }

    figure::head(&mut canvas, c, SKIN, HAIR, 1.0);
    figure::eyes(&mut canvas, c, Color::rgb(100, 60, 30), 1.0);
    figure::smile(&mut canvas, c, 1.0);

    for &side in &[-1, 1] {
        canvas.ellipse(
            Rect::square(c.offset(side * 40, 15), 10),
            Some(CHEEK),
            None,
            0,
        );
    }

    let above = c.offset(0, -60);
    for &degree in &[30.0, 60.0, 120.0, 150.0] {
        canvas.line(
            &[above.polar(90.0, degree), above.polar(120.0, degree)],
            EXCITEMENT,
            4,
        );
    }

    BADGE.draw(&mut canvas, "ENFP");
    canvas
}
