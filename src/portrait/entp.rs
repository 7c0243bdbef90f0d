//! 討論者: 暗い背景で, 光る電球を掲げてにやりと笑う人物.

use {
    super::{new_canvas, Scatter, W},
    crate::{
        basis::{Color, Point, Rect},
        canvas::Canvas,
        figure::{self, Badge},
        gradient::linear_gradient,
    },
    rand::{rngs::StdRng, SeedableRng},
};

pub(super) const SEED: u64 = 123;

const SKIN: Color = Color::rgb(240, 200, 170);
const HAIR: Color = Color::rgb(60, 40, 30);
const OUTFIT: Color = Color::rgb(60, 60, 80);
const RAY: Color = Color::rgb(255, 255, 150);
const SOCKET_LINE: Color = Color::rgb(150, 150, 150);

const BADGE: Badge = Badge {
    fill: Color::rgb(50, 50, 70),
    outline: Color::rgb(100, 100, 150),
    text: Color::rgb(200, 200, 255),
    text_dx: 40,
};

/// 電球と光を描く. 外側ほど青みの強い同心円を大きい順に重ねて, 中心に近いほど白く見せる.
fn light_bulb(canvas: &mut Canvas, bulb: Point) {
    for r in (30..=80).rev().step_by(10) {
        let glow = Color::clamped(255, 255, 150 + r);
        canvas.ellipse(Rect::square(bulb, r), Some(glow), None, 0);
    }

    canvas.ellipse(
        Rect::new(bulb.x - 35, bulb.y - 45, bulb.x + 35, bulb.y + 25),
        Some(Color::rgb(255, 255, 200)),
        None,
        0,
    );
    canvas.rectangle(
        Rect::new(bulb.x - 15, bulb.y + 20, bulb.x + 15, bulb.y + 45),
        Some(Color::rgb(180, 180, 180)),
        None,
        0,
    );
    for &dy in &[28, 36] {
        canvas.line(
            &[bulb.offset(-15, dy), bulb.offset(15, dy)],
            SOCKET_LINE,
            2,
        );
    }

    for degree in (0..360).step_by(45) {
        let degree = degree as f64;
        canvas.line(
            &[bulb.polar(50.0, degree), bulb.polar(70.0, degree)],
            RAY,
            3,
        );
    }
}

pub(super) fn compose() -> Canvas {
    let mut canvas = new_canvas();
    linear_gradient(
        &mut canvas,
        Color::rgb(25, 25, 35),
        Color::rgb(40, 35, 50),
        true,
    );

    let mut rng = StdRng::seed_from_u64(SEED);
    Scatter {
        count: 15,
        xs: 50..=W - 50,
        ys: 50..=250,
        radii: 3..=8,
    }
    .draw(&mut canvas, &mut rng, |_| Color::rgb(100, 100, 150));

    let c = Point::new(W / 2, 400);

    canvas.polygon(
        &[
            c.offset(-90, 80),
            c.offset(90, 80),
            c.offset(110, 380),
            c.offset(-110, 380),
        ],
        OUTFIT,
    );
    canvas.polygon(
        &[
            c.offset(-25, 80),
            c.offset(25, 80),
            c.offset(15, 130),
            c.offset(-15, 130),
        ],
        Color::rgb(80, 80, 100),
    );
    // left arm down
    canvas.polygon(
        &[
            c.offset(-90, 80),
            c.offset(-140, 280),
            c.offset(-100, 290),
            c.offset(-70, 120),
        ],
        OUTFIT,
    );
    // right arm up toward the bulb
    canvas.polygon(
        &[
            c.offset(90, 80),
            c.offset(180, -50),
            c.offset(140, -70),
            c.offset(70, 60),
        ],
        OUTFIT,
    );
    canvas.ellipse(
        Rect::new(c.x + 150, c.y - 100, c.x + 200, c.y - 50),
        Some(SKIN),
        None,
        0,
    );

    light_bulb(&mut canvas, c.offset(175, -180));

    figure::head(&mut canvas, c, SKIN, HAIR, 1.0);
    figure::eyes(&mut canvas, c, Color::rgb(40, 40, 60), 1.0);

    // smirk
    canvas.arc(
        Rect::new(c.x - 25, c.y + 15, c.x + 25, c.y + 40),
        10.0,
        170.0,
        Color::rgb(180, 120, 120),
        3,
    );

    // right eyebrow raised
    canvas.line(&[c.offset(10, -25), c.offset(35, -35)], HAIR, 4);
    canvas.line(&[c.offset(-35, -25), c.offset(-10, -25)], HAIR, 4);

    BADGE.draw(&mut canvas, "ENTP");
    canvas
}
