use euclid::{SideOffsets2D, Vector2D};

/// コンポジタのレイヤー座標系（ピクセル単位）を表す単位タグ
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct LayerPixel;

/// レイヤー座標系の2Dベクトル（ビュー原点のオフセット）
pub type LayerVector2D = Vector2D<f32, LayerPixel>;

/// レイヤー座標系の上下左右オフセット（固定レイヤーマージン）
pub type LayerSideOffsets2D = SideOffsets2D<f32, LayerPixel>;
