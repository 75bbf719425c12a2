//! マンデルブロ集合 / マルチブロ集合アニメーションビューア
//!
//! フレームごとにパラメータ（反復上限 / 指数 d）を進めながら描画する。
//!
//! 操作方法:
//!   - 矢印キー / WASD / テンキー 4,6,8,2: 移動（パン）
//!   - テンキー + / E / PageUp: 拡大
//!   - テンキー - / Q / PageDown: 縮小
//!   - Tab: マンデルブロ ⇔ マルチブロ 切替
//!   - R キー: 初期表示にリセット
//!   - Escape キー: 終了

use anyhow::Context;
use clap::Parser;
use minifb::{Key, KeyRepeat, Window, WindowOptions};
use multibrot::common::{
    config::{Args, Config},
    input::Intents,
    session::Session,
    timing::FramePacer,
};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

const LEFT_KEYS: [Key; 3] = [Key::Left, Key::A, Key::NumPad4];
const RIGHT_KEYS: [Key; 3] = [Key::Right, Key::D, Key::NumPad6];
const UP_KEYS: [Key; 3] = [Key::Up, Key::W, Key::NumPad8];
const DOWN_KEYS: [Key; 3] = [Key::Down, Key::S, Key::NumPad2];
const ZOOM_IN_KEYS: [Key; 3] = [Key::NumPadPlus, Key::E, Key::PageUp];
const ZOOM_OUT_KEYS: [Key; 3] = [Key::NumPadMinus, Key::Q, Key::PageDown];

fn any_down(window: &Window, keys: &[Key]) -> bool {
    keys.iter().any(|&key| window.is_key_down(key))
}

/// 現在のキー状態を読み取る
fn poll_intents(window: &Window) -> Intents {
    Intents {
        move_left: any_down(window, &LEFT_KEYS),
        move_right: any_down(window, &RIGHT_KEYS),
        move_up: any_down(window, &UP_KEYS),
        move_down: any_down(window, &DOWN_KEYS),
        zoom_in: any_down(window, &ZOOM_IN_KEYS),
        zoom_out: any_down(window, &ZOOM_OUT_KEYS),
        reset: window.is_key_pressed(Key::R, KeyRepeat::No),
        next_fractal: window.is_key_pressed(Key::Tab, KeyRepeat::No),
        quit: !window.is_open() || window.is_key_down(Key::Escape),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::try_from(Args::parse()).context("設定が不正です")?;

    println!("操作方法:");
    println!("  - 矢印キー / WASD: 移動");
    println!("  - E / PageUp: 拡大, Q / PageDown: 縮小");
    println!("  - Tab: フラクタル切替");
    println!("  - R キー: 初期表示にリセット");
    println!("  - Escape キー: 終了");
    println!();

    let (width, height) = (config.texture_width, config.texture_height);
    let mut session = Session::new(&config).context("描画スレッドプールの作成に失敗しました")?;

    let mut window = Window::new(
        &session.title(),
        width,
        height,
        WindowOptions {
            resize: true,
            ..WindowOptions::default()
        },
    )
    .context("ウィンドウの作成に失敗しました")?;

    tracing::info!(
        "開始: {}x{} @ {}fps, {}",
        width,
        height,
        config.target_fps,
        session.fractal()
    );

    let mut pacer = FramePacer::new(config.target_fps);
    let mut pixels: Vec<u32> = Vec::with_capacity(width * height);
    let mut dropped: u64 = 0;

    loop {
        pacer.begin();

        let intents = poll_intents(&window);
        if intents.quit {
            break;
        }
        session.apply(&intents);

        // タイトルは描画に使うパラメータで作る
        let title = session.title();
        let start = Instant::now();
        session.render_frame().write_0rgb(&mut pixels);
        tracing::debug!("描画: {:.2?} | {}", start.elapsed(), title);

        window.set_title(&title);
        if let Err(err) = window.update_with_buffer(&pixels, width, height) {
            tracing::error!("バッファの更新に失敗しました: {}", err);
            return Err(err).context("バッファの更新に失敗しました");
        }

        if pacer.finish().is_some() {
            dropped += 1;
        }
    }

    tracing::info!("終了しました (フレーム落ち {} 回)", dropped);
    Ok(())
}
