//! 建築家: 濃い青紫の背景に, 眼鏡をかけたスーツ姿の人物.

use super::{new_canvas, W};
use crate::{
    basis::{Color, Point},
    canvas::Canvas,
    figure::{self, Badge},
    gradient::linear_gradient,
};

const SKIN: Color = Color::rgb(255, 220, 185);
const HAIR: Color = Color::rgb(40, 30, 30);
const SUIT: Color = Color::rgb(30, 30, 50);
const SHIRT: Color = Color::rgb(240, 240, 250);
const TIE: Color = Color::rgb(100, 50, 50);

const BADGE: Badge = Badge {
    fill: Color::rgb(60, 40, 100),
    outline: Color::rgb(120, 100, 180),
    text: Color::rgb(220, 220, 255),
    text_dx: 40,
};

pub(super) fn compose() -> Canvas {
    let mut canvas = new_canvas();
    linear_gradient(
        &mut canvas,
        Color::rgb(20, 20, 60),
        Color::rgb(60, 20, 80),
        true,
    );

    // faint grid lines
    for i in 0..5 {
        let y = 150 + i * 180;
        canvas.line(
            &[Point::new(50, y), Point::new(W - 50, y)],
            Color::rgba(80, 60, 120, 50),
            1,
        );
    }

    let c = Point::new(W / 2, 350);

    // torso
    canvas.polygon(
        &[
            c.offset(-120, 80),
            c.offset(120, 80),
            c.offset(150, 400),
            c.offset(-150, 400),
        ],
        SUIT,
    );
    // collar
    canvas.polygon(
        &[
            c.offset(-30, 80),
            c.offset(30, 80),
            c.offset(15, 160),
            c.offset(-15, 160),
        ],
        SHIRT,
    );
    canvas.polygon(
        &[
            c.offset(-15, 110),
            c.offset(15, 110),
            c.offset(8, 250),
            c.offset(-8, 250),
        ],
        TIE,
    );
    for &side in &[-1, 1] {
        canvas.polygon(
            &[
                c.offset(side * 120, 80),
                c.offset(side * 150, 300),
                c.offset(side * 100, 300),
                c.offset(side * 80, 120),
            ],
            SUIT,
        );
    }

    figure::head(&mut canvas, c, SKIN, HAIR, 1.0);
    figure::eyes(&mut canvas, c, Color::rgb(30, 30, 50), 1.0);
    figure::glasses(&mut canvas, c, 1.0, Color::rgb(40, 40, 40));

    // closed mouth
    canvas.line(
        &[c.offset(-15, 30), c.offset(15, 30)],
        Color::rgb(180, 120, 120),
        3,
    );

    BADGE.draw(&mut canvas, "INTJ");
    canvas
}
