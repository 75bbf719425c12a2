//! フレームバッファへの並列描画
//!
//! 各画素は (x, y, 表示領域, フラクタルのパラメータ) だけで決まるので、
//! 行単位で rayon に分配する。書き込み先の行は互いに重ならない。

use super::colors::Colour;
use super::constants::Real;
use super::fractal::Fractal;
use super::palette::colour_for;
use super::viewport::{to_plane, Viewport};
use rayon::prelude::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("buffer size mismatch: {len} != {width} * {height}")]
    BufferSize {
        len: usize,
        width: usize,
        height: usize,
    },
    #[error("thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
    #[error("must provide >= 1 thread")]
    NoThreads,
}

/// 呼び出し側が所有する行優先のフレームバッファ
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Colour>,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Colour::default(); width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[Colour] {
        &self.pixels
    }

    pub fn pixel(&self, x: usize, y: usize) -> Colour {
        debug_assert!(x < self.width && y < self.height);
        self.pixels[y * self.width + x]
    }

    /// 1画素4バイト (RGBA) の生データ
    pub fn as_rgba_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// ウィンドウ用バッファ (0xRRGGBB) へ書き出す
    pub fn write_0rgb(&self, out: &mut Vec<u32>) {
        out.clear();
        out.extend(self.pixels.iter().map(|c| c.to_0rgb()));
    }
}

/// グローバルスレッドプールで1フレーム描画
pub fn render(buffer: &mut FrameBuffer, viewport: &Viewport, fractal: &Fractal) {
    let FrameBuffer {
        width,
        height,
        pixels,
    } = buffer;
    fill(pixels, *width, *height, viewport, fractal);
}

/// スライスを直接受け取る版。長さが width * height でなければエラー
pub fn render_into(
    pixels: &mut [Colour],
    width: usize,
    height: usize,
    viewport: &Viewport,
    fractal: &Fractal,
) -> Result<(), RenderError> {
    if pixels.len() != width * height {
        return Err(RenderError::BufferSize {
            len: pixels.len(),
            width,
            height,
        });
    }
    fill(pixels, width, height, viewport, fractal);
    Ok(())
}

/// 指定スレッド数の専用プールで描画（結果はスレッド数に依らず同一）
pub fn render_with_threads(
    buffer: &mut FrameBuffer,
    viewport: &Viewport,
    fractal: &Fractal,
    threads: usize,
) -> Result<(), RenderError> {
    let pool = build_pool(threads)?;
    pool.install(|| render(buffer, viewport, fractal));
    Ok(())
}

/// 描画用スレッドプールを作る
pub fn build_pool(threads: usize) -> Result<rayon::ThreadPool, RenderError> {
    if threads < 1 {
        return Err(RenderError::NoThreads);
    }
    Ok(rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|i| format!("render-{i}"))
        .build()?)
}

fn fill(pixels: &mut [Colour], width: usize, height: usize, viewport: &Viewport, fractal: &Fractal) {
    if width == 0 || height == 0 {
        return;
    }
    // 種類の分岐はフレームごとに1回だけ
    let max_n = fractal.max_iterations();
    match fractal {
        Fractal::Mandelbrot(m) => fill_with(pixels, width, height, viewport, max_n, |x, y| {
            m.escape_time(x, y)
        }),
        Fractal::Multibrot(m) => fill_with(pixels, width, height, viewport, max_n, |x, y| {
            m.escape_time(x, y)
        }),
    }
}

fn fill_with<F>(
    pixels: &mut [Colour],
    width: usize,
    height: usize,
    viewport: &Viewport,
    max_n: u32,
    escape_time: F,
) where
    F: Fn(Real, Real) -> u32 + Sync,
{
    let Viewport {
        zoom,
        center_x,
        center_y,
    } = *viewport;

    pixels
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(row, row_pixels)| {
            let y0 = to_plane(row, height, zoom, center_y);
            for (col, pixel) in row_pixels.iter_mut().enumerate() {
                let x0 = to_plane(col, width, zoom, center_x);
                *pixel = colour_for(max_n, escape_time(x0, y0));
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::colors::{BLACK, RED};
    use crate::common::fractal::{Mandelbrot, Multibrot};

    fn stepped(mut fractal: Fractal, steps: usize) -> Fractal {
        for _ in 0..steps {
            fractal.step_parameter();
        }
        fractal
    }

    #[test]
    fn zero_sized_is_noop() {
        let f = Fractal::default();
        let v = Viewport::default();
        let mut empty = FrameBuffer::new(0, 0);
        render(&mut empty, &v, &f);
        assert!(empty.pixels().is_empty());

        let mut pixels: Vec<Colour> = Vec::new();
        assert!(render_into(&mut pixels, 0, 10, &v, &f).is_ok());
        assert!(render_into(&mut pixels, 10, 0, &v, &f).is_ok());
    }

    #[test]
    fn rejects_wrong_length() {
        let mut pixels = vec![Colour::default(); 5];
        let err = render_into(&mut pixels, 2, 3, &Viewport::default(), &Fractal::default());
        assert!(matches!(
            err,
            Err(RenderError::BufferSize {
                len: 5,
                width: 2,
                height: 3
            })
        ));
    }

    #[test]
    fn rejects_zero_threads() {
        let mut buffer = FrameBuffer::new(4, 4);
        let res = render_with_threads(&mut buffer, &Viewport::default(), &Fractal::default(), 0);
        assert!(matches!(res, Err(RenderError::NoThreads)));
    }

    #[test]
    fn writes_every_pixel() {
        // 既定値 (全チャンネル0) は描画結果に現れない（アルファは常に255）
        let f = stepped(Fractal::Mandelbrot(Mandelbrot::new()), 40);
        let mut buffer = FrameBuffer::new(37, 23);
        render(&mut buffer, &Viewport::default(), &f);
        assert!(buffer.pixels().iter().all(|c| *c != Colour::default()));
        assert!(buffer.pixels().iter().all(|c| c.a == 255));
    }

    #[test]
    fn pixel_matches_pointwise_evaluation() {
        let f = stepped(Fractal::Multibrot(Multibrot::new()), 15);
        let v = Viewport::new(0.5, -0.5, 0.25);
        let (w, h) = (31, 17);
        let mut buffer = FrameBuffer::new(w, h);
        render(&mut buffer, &v, &f);
        for y in 0..h {
            for x in 0..w {
                let (x0, y0) = v.pixel_to_plane(x, y, w, h);
                let expected = colour_for(f.max_iterations(), f.escape_time(x0, y0));
                assert_eq!(buffer.pixel(x, y), expected, "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn center_of_set_is_black() {
        let f = stepped(Fractal::default(), 100);
        let mut buffer = FrameBuffer::new(64, 64);
        render(&mut buffer, &Viewport::default(), &f);
        // 画素 (32, 32) は原点
        assert_eq!(buffer.pixel(32, 32), BLACK);
        // 角は (-3.5, -3.5) ですぐ発散する
        assert_eq!(buffer.pixel(0, 0), RED);
    }

    #[test]
    fn thread_count_does_not_change_output() {
        let f = stepped(Fractal::default(), 200);
        let v = Viewport::new(0.3, -0.6, 0.1);
        let mut single = FrameBuffer::new(50, 40);
        render_with_threads(&mut single, &v, &f, 1).unwrap();
        for threads in [2, 3, 8] {
            let mut multi = FrameBuffer::new(50, 40);
            render_with_threads(&mut multi, &v, &f, threads).unwrap();
            assert_eq!(single, multi, "threads = {threads}");
        }
    }

    #[test]
    fn rgba_bytes_view() {
        let mut buffer = FrameBuffer::new(3, 2);
        render(&mut buffer, &Viewport::default(), &Fractal::default());
        let bytes = buffer.as_rgba_bytes();
        assert_eq!(bytes.len(), 3 * 2 * 4);
        let c = buffer.pixel(2, 1);
        // (x, y) = (2, 1) は5番目の画素
        assert_eq!(&bytes[5 * 4..6 * 4], &[c.r, c.g, c.b, c.a]);

        let mut out = Vec::new();
        buffer.write_0rgb(&mut out);
        assert_eq!(out.len(), 6);
        assert_eq!(out[5], c.to_0rgb());
    }
}
