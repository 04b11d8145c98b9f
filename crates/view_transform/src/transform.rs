use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::builder::ViewTransformBuilder;
use crate::unit::{LayerSideOffsets2D, LayerVector2D};

/// ビュー変換（平行移動・拡大率・固定レイヤーマージン）
///
/// 全フィールドは公開されており、呼び出し側が自由に読み書きする。
/// 値の制約（`scale > 0`、マージン非負など）は一切検証しない。
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct ViewTransform {
    /// ビュー原点の水平オフセット
    pub x: f32,
    /// ビュー原点の垂直オフセット
    pub y: f32,
    /// 拡大率
    pub scale: f32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub fixed_layer_margin_left: f32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub fixed_layer_margin_top: f32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub fixed_layer_margin_right: f32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub fixed_layer_margin_bottom: f32,
}

/// 恒等ビュー: オフセット (0, 0)、拡大率 1.0、マージンなし
impl Default for ViewTransform {
    fn default() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }
}

impl ViewTransform {
    /// 新しいビュー変換を作成（固定レイヤーマージンはすべて 0）
    pub fn new(x: f32, y: f32, scale: f32) -> Self {
        Self {
            x,
            y,
            scale,
            fixed_layer_margin_left: 0.0,
            fixed_layer_margin_top: 0.0,
            fixed_layer_margin_right: 0.0,
            fixed_layer_margin_bottom: 0.0,
        }
    }

    /// 恒等ビューから始まるビルダーを作成
    pub fn builder() -> ViewTransformBuilder {
        ViewTransformBuilder::new()
    }

    /// ビュー原点のオフセット `(x, y)`
    pub fn offset(&self) -> LayerVector2D {
        LayerVector2D::new(self.x, self.y)
    }

    pub fn set_offset(&mut self, offset: LayerVector2D) {
        self.x = offset.x;
        self.y = offset.y;
    }

    /// 固定レイヤーマージン（euclid の top, right, bottom, left 順）
    pub fn fixed_layer_margins(&self) -> LayerSideOffsets2D {
        LayerSideOffsets2D::new(
            self.fixed_layer_margin_top,
            self.fixed_layer_margin_right,
            self.fixed_layer_margin_bottom,
            self.fixed_layer_margin_left,
        )
    }

    /// 固定レイヤーマージンを一括設定（オフセット・拡大率は変更しない）
    pub fn set_fixed_layer_margins(&mut self, margins: LayerSideOffsets2D) {
        self.fixed_layer_margin_left = margins.left;
        self.fixed_layer_margin_top = margins.top;
        self.fixed_layer_margin_right = margins.right;
        self.fixed_layer_margin_bottom = margins.bottom;
        trace!(
            left = margins.left,
            top = margins.top,
            right = margins.right,
            bottom = margins.bottom,
            "fixed layer margins set"
        );
    }

    pub fn clear_fixed_layer_margins(&mut self) {
        self.set_fixed_layer_margins(LayerSideOffsets2D::zero());
    }

    /// いずれかの辺に 0 以外のマージンがあるか（NaN も「あり」とみなす）
    pub fn has_fixed_layer_margins(&self) -> bool {
        self.fixed_layer_margin_left != 0.0
            || self.fixed_layer_margin_top != 0.0
            || self.fixed_layer_margin_right != 0.0
            || self.fixed_layer_margin_bottom != 0.0
    }

    pub fn with_offset(mut self, offset: LayerVector2D) -> Self {
        self.set_offset(offset);
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_fixed_layer_margins(mut self, margins: LayerSideOffsets2D) -> Self {
        self.set_fixed_layer_margins(margins);
        self
    }
}

impl fmt::Display for ViewTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ViewTransform(x={}, y={}, scale={}, margins=[l={}, t={}, r={}, b={}])",
            self.x,
            self.y,
            self.scale,
            self.fixed_layer_margin_left,
            self.fixed_layer_margin_top,
            self.fixed_layer_margin_right,
            self.fixed_layer_margin_bottom
        )
    }
}

impl From<ViewTransform> for LayerVector2D {
    fn from(t: ViewTransform) -> Self {
        t.offset()
    }
}

impl From<ViewTransform> for LayerSideOffsets2D {
    fn from(t: ViewTransform) -> Self {
        t.fixed_layer_margins()
    }
}
