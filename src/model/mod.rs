// 麻雀のデータモデル
mod action;
mod define;
mod player;
mod stage;
mod tile;

use std::fmt;

use anyhow::{bail, ensure};
use serde::{Deserialize, Serialize};

use crate::util::misc::Res;

pub use action::*;
pub use define::*;
pub use player::*;
pub use stage::*;
pub use tile::*;
