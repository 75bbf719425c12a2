//! マンデルブロ集合 / マルチブロ集合のエスケープタイム描画エンジン
//!
//! 表示領域 (zoom, 中心) から各画素の反復回数を求め、
//! 4色グラデーションで色を付けてフレームバッファを埋める。

pub mod common;
