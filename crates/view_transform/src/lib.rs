//! # view_transform — コンポジタ向けビュー変換値
//!
//! ビューポートの平行移動量・拡大率と、固定レイヤー（スクロールしないツールバー等）
//! のために各辺に確保するマージンを保持するだけの値型を提供する。
//! 行列演算や補間は行わない。値の意味付けと検証は利用側のレンダリング層が担う。

mod builder;
mod transform;
mod unit;

pub use builder::ViewTransformBuilder;
pub use transform::ViewTransform;
pub use unit::{LayerPixel, LayerSideOffsets2D, LayerVector2D};
