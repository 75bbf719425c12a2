//! 固定フレームレートのためのタイミング調整

use std::time::{Duration, Instant};

/// 1フレームの時間予算を管理する
#[derive(Debug)]
pub struct FramePacer {
    frame_time: Duration,
    start: Instant,
}

impl FramePacer {
    pub fn new(target_fps: u32) -> Self {
        Self {
            frame_time: Duration::from_secs(1) / target_fps.max(1),
            start: Instant::now(),
        }
    }

    pub fn frame_time(&self) -> Duration {
        self.frame_time
    }

    /// フレーム開始時刻を記録
    pub fn begin(&mut self) {
        self.start = Instant::now();
    }

    /// 予算の残りを返す。超過していれば None
    pub fn remaining(&self) -> Option<Duration> {
        self.frame_time.checked_sub(self.start.elapsed())
    }

    /// 予算の残りだけ待つ。超過した場合は待たずに超過時間を返す
    pub fn finish(&self) -> Option<Duration> {
        let elapsed = self.start.elapsed();
        match self.frame_time.checked_sub(elapsed) {
            Some(rest) => {
                std::thread::sleep(rest);
                None
            }
            None => {
                tracing::warn!(
                    "フレーム落ち: {:.2?} (予算 {:.2?})",
                    elapsed,
                    self.frame_time
                );
                Some(elapsed - self.frame_time)
            }
        }
    }
}
