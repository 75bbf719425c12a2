//! 色の型と線形補間

use super::constants::Real;
use bytemuck::{Pod, Zeroable};

/// RGBA 各8bitの色（メモリ上も R, G, B, A の順）
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

pub const WHITE: Colour = Colour::rgb(255, 255, 255);
pub const BLACK: Colour = Colour::rgb(0, 0, 0);
pub const RED: Colour = Colour::rgb(255, 0, 0);
pub const GREEN: Colour = Colour::rgb(0, 255, 0);
pub const BLUE: Colour = Colour::rgb(0, 0, 255);
pub const MAGENTA: Colour = Colour::rgb(255, 0, 255);

impl Colour {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// 不透明色
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// 2色間の線形補間（t は [0, 1] を想定、範囲外は外挿）
    pub fn lerp(from: Colour, to: Colour, t: Real) -> Colour {
        Colour::rgba(
            lerp_channel(from.r, to.r, t),
            lerp_channel(from.g, to.g, t),
            lerp_channel(from.b, to.b, t),
            lerp_channel(from.a, to.a, t),
        )
    }

    /// ウィンドウ用の 0xRRGGBB 形式
    pub fn to_0rgb(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }
}

/// (1 - t) * v0 + t * v1 の形なので t = 1 で必ず v1 になる
#[inline]
fn lerp_channel(v0: u8, v1: u8, t: Real) -> u8 {
    ((1.0 - t) * v0 as Real + t * v1 as Real).round() as u8
}
