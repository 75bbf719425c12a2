//! ビューアの状態（表示領域・フラクタル・フレームバッファ）

use super::config::Config;
use super::fractal::Fractal;
use super::input::Intents;
use super::render::{build_pool, render, FrameBuffer, RenderError};
use super::viewport::Viewport;

/// 1ティックごとに入力を反映し、1フレーム描画する
pub struct Session {
    initial_viewport: Viewport,
    viewport: Viewport,
    fractal: Fractal,
    buffer: FrameBuffer,
    pool: Option<rayon::ThreadPool>,
}

impl Session {
    pub fn new(config: &Config) -> Result<Self, RenderError> {
        let pool = config.threads.map(build_pool).transpose()?;
        Ok(Self {
            initial_viewport: config.initial_viewport,
            viewport: config.initial_viewport,
            fractal: config.initial_fractal.build(),
            buffer: FrameBuffer::new(config.texture_width, config.texture_height),
            pool,
        })
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn fractal(&self) -> &Fractal {
        &self.fractal
    }

    pub fn buffer(&self) -> &FrameBuffer {
        &self.buffer
    }

    /// 入力を反映する（描画の前に呼ぶ）
    pub fn apply(&mut self, intents: &Intents) {
        if intents.reset {
            self.viewport = self.initial_viewport;
            tracing::info!("リセット");
        }
        if intents.next_fractal {
            self.fractal = self.fractal.next_kind();
            tracing::info!("切替: {}", self.fractal.name());
        }
        self.viewport.apply(intents);
    }

    /// 現在のパラメータで1フレーム描画し、その後パラメータを進める
    ///
    /// 描画中はパラメータを変更しないので、1フレーム内の反復上限は一定。
    pub fn render_frame(&mut self) -> &FrameBuffer {
        let Self {
            viewport,
            fractal,
            buffer,
            pool,
            ..
        } = self;
        match pool {
            Some(pool) => pool.install(|| render(buffer, viewport, fractal)),
            None => render(buffer, viewport, fractal),
        }
        self.fractal.step_parameter();
        &self.buffer
    }

    /// ウィンドウタイトル
    pub fn title(&self) -> String {
        format!(
            "{} [{}] zoom={:.3e} center=({:.6}, {:.6})",
            self.fractal.name(),
            self.fractal.parameter_description(),
            self.viewport.zoom,
            self.viewport.center_x,
            self.viewport.center_y,
        )
    }
}
