//! ピクセル座標と複素平面の対応

use super::constants::*;
use super::input::Intents;

/// ピクセル座標を複素平面上の座標に変換
///
/// 0..pixel_extent を [center - 3.5 * zoom, center + 3.5 * zoom] へ線形に写す。
/// x, y とも同じ zoom を使うので、平面上では常に正方形の領域になる。
#[inline]
pub fn to_plane(pixel_coord: usize, pixel_extent: usize, zoom: Real, center: Real) -> Real {
    center + zoom * PLANE_HALF_EXTENT * (2.0 * pixel_coord as Real / pixel_extent as Real - 1.0)
}

/// 表示領域 (zoom, 中心座標)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub zoom: Real,
    pub center_x: Real,
    pub center_y: Real,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            center_x: 0.0,
            center_y: 0.0,
        }
    }
}

impl Viewport {
    pub fn new(zoom: Real, center_x: Real, center_y: Real) -> Self {
        Self {
            zoom,
            center_x,
            center_y,
        }
    }

    /// 画素 (x, y) の複素平面上の座標
    #[inline]
    pub fn pixel_to_plane(&self, x: usize, y: usize, width: usize, height: usize) -> (Real, Real) {
        (
            to_plane(x, width, self.zoom, self.center_x),
            to_plane(y, height, self.zoom, self.center_y),
        )
    }

    /// 入力の意図を1ティック分反映する
    ///
    /// パンは 0.1 * zoom、ズームは 1.25 倍。逆向きの入力は打ち消し合う。
    pub fn apply(&mut self, intents: &Intents) {
        let step = PAN_STEP * self.zoom;
        if intents.move_left {
            self.center_x -= step;
        }
        if intents.move_right {
            self.center_x += step;
        }
        // 画素の行 0 が center_y - 3.5 * zoom に対応する
        if intents.move_up {
            self.center_y -= step;
        }
        if intents.move_down {
            self.center_y += step;
        }
        if intents.zoom_in {
            self.zoom /= ZOOM_STEP;
        }
        if intents.zoom_out {
            self.zoom *= ZOOM_STEP;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_map_to_half_extent() {
        for width in [1, 2, 3, 640, 1023] {
            assert_eq!(to_plane(0, width, 1.0, 0.0), -3.5);
            assert_eq!(to_plane(width, width, 1.0, 0.0), 3.5);
        }
    }

    #[test]
    fn middle_maps_to_center() {
        assert_eq!(to_plane(320, 640, 0.5, -0.75), -0.75);
        assert_eq!(to_plane(0, 640, 0.5, -0.75), -0.75 - 1.75);
    }

    #[test]
    fn same_scale_on_both_axes() {
        let v = Viewport::new(2.0, 1.0, -1.0);
        let (x, y) = v.pixel_to_plane(0, 0, 640, 480);
        assert_eq!(x, 1.0 - 7.0);
        assert_eq!(y, -1.0 - 7.0);
        let (x, y) = v.pixel_to_plane(640, 480, 640, 480);
        assert_eq!(x, 1.0 + 7.0);
        assert_eq!(y, -1.0 + 7.0);
    }

    #[test]
    fn apply_pans_relative_to_zoom() {
        let mut v = Viewport::new(2.0, 0.0, 0.0);
        v.apply(&Intents {
            move_right: true,
            move_up: true,
            ..Intents::default()
        });
        assert!((v.center_x - 0.2).abs() < 1e-12);
        assert!((v.center_y + 0.2).abs() < 1e-12);
        assert_eq!(v.zoom, 2.0);
    }

    #[test]
    fn apply_zooms_by_factor() {
        let mut v = Viewport::default();
        v.apply(&Intents {
            zoom_in: true,
            ..Intents::default()
        });
        assert!((v.zoom - 0.8).abs() < 1e-12);
        v.apply(&Intents {
            zoom_out: true,
            ..Intents::default()
        });
        assert!((v.zoom - 1.0).abs() < 1e-12);
    }

    #[test]
    fn opposite_intents_cancel() {
        let mut v = Viewport::new(1.0, 0.5, 0.5);
        v.apply(&Intents {
            move_left: true,
            move_right: true,
            move_up: true,
            move_down: true,
            ..Intents::default()
        });
        assert!((v.center_x - 0.5).abs() < 1e-12);
        assert!((v.center_y - 0.5).abs() < 1e-12);
    }
}
