//! 反復回数から色への変換（4点のグラデーション）

use super::colors::{Colour, BLACK, BLUE, GREEN, MAGENTA, RED};
use super::constants::Real;

const C_BAD: Colour = RED;
const C_OK: Colour = GREEN;
const C_GOOD: Colour = BLUE;
const C_BEST: Colour = MAGENTA;

const BAD: Real = 0.25;
const GOOD: Real = 0.75;
const BEST: Real = 0.90;

/// value を [lo, hi] から [0, 1] へ写す
#[inline]
pub fn rescale(value: Real, lo: Real, hi: Real) -> Real {
    (value - lo) / (hi - lo)
}

/// 反復回数 n（上限 max_n）に対応する色
///
/// スコア n / max_n が BEST 以上なら集合の内側とみなして黒。
/// max_n = 0 のときスコアは 0 とする。
pub fn colour_for(max_n: u32, n: u32) -> Colour {
    let n = n.min(max_n);
    let score = if max_n == 0 {
        0.0
    } else {
        n as Real / max_n as Real
    };

    if score <= BAD {
        Colour::lerp(C_BAD, C_OK, rescale(score, 0.0, BAD))
    } else if score <= GOOD {
        Colour::lerp(C_OK, C_GOOD, rescale(score, BAD, GOOD))
    } else if score < BEST {
        Colour::lerp(C_GOOD, C_BEST, rescale(score, GOOD, BEST))
    } else {
        BLACK
    }
}
