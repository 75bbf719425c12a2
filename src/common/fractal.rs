//! エスケープタイム法によるフラクタル計算

use super::constants::*;
use num_complex::Complex;
use std::fmt;

/// マンデルブロ集合の反復回数を計算
///
/// z を更新してから |z|^2 > 4 を判定するため、
/// 最初の更新で発散した点は 0 を返す。
#[inline]
pub fn mandelbrot_iter(c: Complex<Real>, max_iter: u32) -> u32 {
    let mut z = Complex::new(0.0, 0.0);

    for i in 0..max_iter {
        z = z * z + c;
        if z.norm_sqr() > ESCAPE_RADIUS_SQR {
            return i;
        }
    }
    max_iter
}

/// マルチブロ集合 (z^d + c) の反復回数を計算
#[inline]
pub fn multibrot_iter(c: Complex<Real>, d: Real, max_iter: u32) -> u32 {
    let mut z = Complex::new(0.0, 0.0);

    for i in 0..max_iter {
        z = z.powf(d) + c;
        if z.norm_sqr() > ESCAPE_RADIUS_SQR {
            return i;
        }
    }
    max_iter
}

/// 反復上限をフレームごとに 0 → 511 → 0 と変化させるマンデルブロ集合
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Mandelbrot {
    max_iter: u32,
}

impl Mandelbrot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_iterations(&self) -> u32 {
        self.max_iter
    }

    pub fn escape_time(&self, x0: Real, y0: Real) -> u32 {
        mandelbrot_iter(Complex::new(x0, y0), self.max_iter)
    }

    pub fn step_parameter(&mut self) {
        self.max_iter += 1;
        if self.max_iter >= MAX_ESCAPE_TIME {
            self.max_iter = 0;
        }
    }
}

/// 指数 d をフレームごとに 0.5 → 5.0 → 0.5 と変化させるマルチブロ集合
///
/// d は刻み数 `step` から毎回計算し、加算誤差の蓄積を避ける。
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Multibrot {
    step: u32,
}

impl Multibrot {
    /// d の取りうる値の個数 (0.5, 0.6, ..., 5.0)
    const STEPS: u32 = 46;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn d(&self) -> Real {
        MULTIBROT_MIN_D + self.step as Real * MULTIBROT_D_STEP
    }

    pub fn max_iterations(&self) -> u32 {
        MULTIBROT_MAX_ITER
    }

    pub fn escape_time(&self, x0: Real, y0: Real) -> u32 {
        multibrot_iter(Complex::new(x0, y0), self.d(), MULTIBROT_MAX_ITER)
    }

    pub fn step_parameter(&mut self) {
        self.step = (self.step + 1) % Self::STEPS;
    }
}

/// 描画対象のフラクタル
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Fractal {
    Mandelbrot(Mandelbrot),
    Multibrot(Multibrot),
}

impl Default for Fractal {
    fn default() -> Self {
        Fractal::Mandelbrot(Mandelbrot::new())
    }
}

impl Fractal {
    /// 1点の反復回数（0..=max_iterations()）
    ///
    /// フレーム描画ではこれを画素ごとに呼ばず、
    /// `render` 側で一度だけ分岐してから各実装を直接使う。
    pub fn escape_time(&self, x0: Real, y0: Real) -> u32 {
        match self {
            Fractal::Mandelbrot(m) => m.escape_time(x0, y0),
            Fractal::Multibrot(m) => m.escape_time(x0, y0),
        }
    }

    pub fn max_iterations(&self) -> u32 {
        let n = match self {
            Fractal::Mandelbrot(m) => m.max_iterations(),
            Fractal::Multibrot(m) => m.max_iterations(),
        };
        debug_assert!(n < MAX_ESCAPE_TIME);
        n
    }

    /// フレームごとのパラメータ更新（描画の前後でのみ呼ぶ）
    pub fn step_parameter(&mut self) {
        match self {
            Fractal::Mandelbrot(m) => m.step_parameter(),
            Fractal::Multibrot(m) => m.step_parameter(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Fractal::Mandelbrot(_) => "Mandelbrot",
            Fractal::Multibrot(_) => "Multibrot",
        }
    }

    pub fn parameter_description(&self) -> String {
        match self {
            Fractal::Mandelbrot(m) => format!("max_iterations={}", m.max_iterations()),
            Fractal::Multibrot(m) => format!("d={:.1}", m.d()),
        }
    }

    /// 次の種類へ切り替え（パラメータは初期値から）
    pub fn next_kind(&self) -> Fractal {
        match self {
            Fractal::Mandelbrot(_) => Fractal::Multibrot(Multibrot::new()),
            Fractal::Multibrot(_) => Fractal::Mandelbrot(Mandelbrot::new()),
        }
    }
}

impl fmt::Display for Fractal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.parameter_description())
    }
}
