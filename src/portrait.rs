use {
    crate::{
        basis::{Color, Point, Rect},
        canvas::Canvas,
    },
    anyhow::Result,
    log::{debug, info},
    rand::Rng,
    std::{
        ops::RangeInclusive,
        path::{Path, PathBuf},
    },
};

mod enfp;
mod entp;
mod infj;
mod intj;

pub const CANVAS_WIDTH: u32 = 800;
pub const CANVAS_HEIGHT: u32 = 1000;

const W: i32 = CANVAS_WIDTH as i32;
const H: i32 = CANVAS_HEIGHT as i32;

/// `Portrait` は生成する 4 枚の画像のタイプコードを表す.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Portrait {
    Intj,
    Enfp,
    Entp,
    Infj,
}

impl Portrait {
    /// 生成する順番.
    pub const ALL: [Portrait; 4] = [
        Portrait::Intj,
        Portrait::Enfp,
        Portrait::Entp,
        Portrait::Infj,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Portrait::Intj => "intj",
            Portrait::Enfp => "enfp",
            Portrait::Entp => "entp",
            Portrait::Infj => "infj",
        }
    }

    pub fn file_name(self) -> String {
        format!("mbti_{}.png", self.code())
    }

    /// 新しいキャンバスに絵を描いて返す. 乱数はそれぞれ固定のシードで作るので毎回同じ絵になる.
    pub fn compose(self) -> Canvas {
        debug!("composing {}", self.code());
        match self {
            Portrait::Intj => intj::compose(),
            Portrait::Enfp => enfp::compose(),
            Portrait::Entp => entp::compose(),
            Portrait::Infj => infj::compose(),
        }
    }

    /// 絵を描いて `out_dir` に保存し, 書き出したパスを返す.
    pub fn generate(self, out_dir: &Path) -> Result<PathBuf> {
        let canvas = self.compose();
        let path = out_dir.join(self.file_name());
        canvas.save(&path)?;
        info!("generated {}", path.display());
        Ok(path)
    }
}

fn new_canvas() -> Canvas {
    Canvas::new(CANVAS_WIDTH, CANVAS_HEIGHT)
}

/// `Dot` は背景に散らす円の位置と半径.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dot {
    pub center: Point,
    pub radius: i32,
}

/// `Scatter` は背景に散らす円の個数と範囲.
pub struct Scatter {
    pub count: usize,
    pub xs: RangeInclusive<i32>,
    pub ys: RangeInclusive<i32>,
    pub radii: RangeInclusive<i32>,
}

impl Scatter {
    /// `rng` で位置と半径を決めた円を `count` 個描く. 色は円ごとに `paint` で決める.
    pub fn draw<R: Rng>(
        &self,
        canvas: &mut Canvas,
        rng: &mut R,
        mut paint: impl FnMut(&mut R) -> Color,
    ) -> Vec<Dot> {
        let mut dots = Vec::with_capacity(self.count);
        for _ in 0..self.count {
            let center = Point::new(rng.gen_range(self.xs.clone()), rng.gen_range(self.ys.clone()));
            let radius = rng.gen_range(self.radii.clone());
            let color = paint(rng);
            canvas.ellipse(Rect::square(center, radius), Some(color), None, 0);
            dots.push(Dot { center, radius });
        }
        dots
    }
}
