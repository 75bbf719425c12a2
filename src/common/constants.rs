//! 共通定数

/// 計算に使う浮動小数点型（ビルド全体で統一）
pub type Real = f64;

/// 反復回数の安全上限（これ未満に収める）
pub const MAX_ESCAPE_TIME: u32 = 512;

/// 発散判定の閾値（|z|^2 > 4 で発散）
pub const ESCAPE_RADIUS_SQR: Real = 4.0;

/// 表示領域の半幅（zoom = 1 のとき）
pub const PLANE_HALF_EXTENT: Real = 3.5;

/// テクスチャ（フレームバッファ）のデフォルト幅
pub const TEXTURE_WIDTH: usize = 640;
/// テクスチャ（フレームバッファ）のデフォルト高さ
pub const TEXTURE_HEIGHT: usize = 480;

/// 目標フレームレート
pub const TARGET_FPS: u32 = 15;

/// 1ティックあたりのパン量（zoom に対する比率）
pub const PAN_STEP: Real = 0.1;

/// 1ティックあたりのズーム倍率
pub const ZOOM_STEP: Real = 1.25;

/// マルチブロ集合の固定反復回数
pub const MULTIBROT_MAX_ITER: u32 = 64;

/// マルチブロ集合の指数 d の範囲と刻み
pub const MULTIBROT_MIN_D: Real = 0.5;
pub const MULTIBROT_MAX_D: Real = 5.0;
pub const MULTIBROT_D_STEP: Real = 0.1;
