//! 起動時の設定（コマンドライン引数）

use super::constants::*;
use super::fractal::{Fractal, Mandelbrot, Multibrot};
use super::viewport::Viewport;
use clap::{Parser, ValueEnum};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("texture size must be non-zero: {width}x{height}")]
    EmptyTexture { width: usize, height: usize },
    #[error("target fps must be non-zero")]
    ZeroFps,
    #[error("zoom must be positive and finite: {0}")]
    InvalidZoom(Real),
    #[error("center must be finite: ({0}, {1})")]
    InvalidCenter(Real, Real),
    #[error("must provide >= 1 thread")]
    NoThreads,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum FractalKind {
    #[default]
    Mandelbrot,
    Multibrot,
}

impl FractalKind {
    pub fn build(self) -> Fractal {
        match self {
            FractalKind::Mandelbrot => Fractal::Mandelbrot(Mandelbrot::new()),
            FractalKind::Multibrot => Fractal::Multibrot(Multibrot::new()),
        }
    }
}

/// マンデルブロ集合 / マルチブロ集合のアニメーションビューア
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// テクスチャの幅（ピクセル）
    #[arg(long, default_value_t = TEXTURE_WIDTH)]
    pub width: usize,

    /// テクスチャの高さ（ピクセル）
    #[arg(long, default_value_t = TEXTURE_HEIGHT)]
    pub height: usize,

    /// 目標フレームレート
    #[arg(long, default_value_t = TARGET_FPS)]
    pub fps: u32,

    /// 初期ズーム（表示半幅 = 3.5 * zoom）
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    pub zoom: Real,

    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub center_x: Real,

    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub center_y: Real,

    /// 最初に表示するフラクタル
    #[arg(long, value_enum, default_value_t = FractalKind::Mandelbrot)]
    pub fractal: FractalKind,

    /// 描画スレッド数（省略時は rayon の既定値）
    #[arg(long)]
    pub threads: Option<usize>,
}

/// 検証済みの設定
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub texture_width: usize,
    pub texture_height: usize,
    pub target_fps: u32,
    pub initial_viewport: Viewport,
    pub initial_fractal: FractalKind,
    pub threads: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            texture_width: TEXTURE_WIDTH,
            texture_height: TEXTURE_HEIGHT,
            target_fps: TARGET_FPS,
            initial_viewport: Viewport::default(),
            initial_fractal: FractalKind::Mandelbrot,
            threads: None,
        }
    }
}

impl Config {
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.texture_width == 0 || self.texture_height == 0 {
            return Err(ConfigError::EmptyTexture {
                width: self.texture_width,
                height: self.texture_height,
            });
        }
        if self.target_fps == 0 {
            return Err(ConfigError::ZeroFps);
        }
        let Viewport {
            zoom,
            center_x,
            center_y,
        } = self.initial_viewport;
        if !(zoom.is_finite() && zoom > 0.0) {
            return Err(ConfigError::InvalidZoom(zoom));
        }
        if !(center_x.is_finite() && center_y.is_finite()) {
            return Err(ConfigError::InvalidCenter(center_x, center_y));
        }
        if self.threads == Some(0) {
            return Err(ConfigError::NoThreads);
        }
        Ok(self)
    }
}

impl TryFrom<Args> for Config {
    type Error = ConfigError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        Config {
            texture_width: args.width,
            texture_height: args.height,
            target_fps: args.fps,
            initial_viewport: Viewport::new(args.zoom, args.center_x, args.center_y),
            initial_fractal: args.fractal,
            threads: args.threads,
        }
        .validate()
    }
}
