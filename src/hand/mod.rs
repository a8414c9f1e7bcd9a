// 手牌の和了形までの距離(向聴数)を計算するモジュール
mod distance;
mod meld;
mod vector;

pub use self::{
    distance::{
        effective_draws, get_distance, seven_pairs_distance, standard_distance,
        try_get_distance, Distance, DISTANCE_INF,
    },
    meld::{meld_shapes, MeldShape, MeldShapeType},
    vector::{build_hand_vector, build_remainder_vector, TileVector},
};
