use std::fmt;

use anyhow::anyhow;

use super::misc::Res;

#[derive(Debug, Clone, PartialEq)]
pub enum Variant {
    Int(i64),
}

impl Variant {
    pub fn as_int(&self) -> i64 {
        match self {
            Self::Int(v) => *v,
        }
    }

    // 自身と同じ型として文字列をパース
    pub fn parse_as(&self, value: &str) -> Res<Variant> {
        Ok(match self {
            Self::Int(_) => Self::Int(value.parse::<i64>().map_err(|e| anyhow!("{}", e))?),
        })
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{}", v),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Arg {
    pub name: String,
    pub value: Variant,
}

impl Arg {
    pub fn int(name: &str, value: i64) -> Self {
        Self {
            name: name.to_string(),
            value: Variant::Int(value),
        }
    }
}

#[test]
fn test_parse_as() {
    let v = Variant::Int(0).parse_as("-12").unwrap();
    assert_eq!(v.as_int(), -12);
    assert!(Variant::Int(0).parse_as("true").is_err());
}
