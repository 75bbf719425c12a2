//! 入力の意図（1ティック分のスナップショット）

/// キー状態から読み取った操作意図
///
/// 移動とズームは押している間ずっと有効、
/// reset / next_fractal は押した瞬間だけ true になる。
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Intents {
    pub move_left: bool,
    pub move_right: bool,
    pub move_up: bool,
    pub move_down: bool,
    pub zoom_in: bool,
    pub zoom_out: bool,
    pub reset: bool,
    pub next_fractal: bool,
    pub quit: bool,
}

impl Intents {
    /// 表示領域を変える入力があるか
    pub fn moves_viewport(&self) -> bool {
        self.move_left
            || self.move_right
            || self.move_up
            || self.move_down
            || self.zoom_in
            || self.zoom_out
    }
}
