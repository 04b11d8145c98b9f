use tracing::trace;

use crate::transform::ViewTransform;
use crate::unit::{LayerSideOffsets2D, LayerVector2D};

/// ViewTransform ビルダー
///
/// 恒等ビュー（オフセット 0、拡大率 1.0、マージンなし）から開始する。
/// `build()` は検証を行わず、常に成功する。
#[derive(Clone, Copy, Debug, Default)]
pub struct ViewTransformBuilder {
    transform: ViewTransform,
}

impl ViewTransformBuilder {
    /// 新しいビルダーを作成
    pub fn new() -> Self {
        Self::default()
    }

    /// 水平オフセットを設定
    pub fn x(mut self, x: f32) -> Self {
        self.transform.x = x;
        self
    }

    /// 垂直オフセットを設定
    pub fn y(mut self, y: f32) -> Self {
        self.transform.y = y;
        self
    }

    /// オフセットをまとめて設定
    pub fn offset(mut self, offset: LayerVector2D) -> Self {
        self.transform.set_offset(offset);
        self
    }

    /// 拡大率を設定
    pub fn scale(mut self, scale: f32) -> Self {
        self.transform.scale = scale;
        self
    }

    pub fn fixed_layer_margin_left(mut self, margin: f32) -> Self {
        self.transform.fixed_layer_margin_left = margin;
        self
    }

    pub fn fixed_layer_margin_top(mut self, margin: f32) -> Self {
        self.transform.fixed_layer_margin_top = margin;
        self
    }

    pub fn fixed_layer_margin_right(mut self, margin: f32) -> Self {
        self.transform.fixed_layer_margin_right = margin;
        self
    }

    pub fn fixed_layer_margin_bottom(mut self, margin: f32) -> Self {
        self.transform.fixed_layer_margin_bottom = margin;
        self
    }

    /// 固定レイヤーマージンを一括設定
    pub fn fixed_layer_margins(mut self, margins: LayerSideOffsets2D) -> Self {
        self.transform.set_fixed_layer_margins(margins);
        self
    }

    /// ViewTransform を構築
    pub fn build(self) -> ViewTransform {
        trace!(transform = %self.transform, "ViewTransform built");
        self.transform
    }
}
