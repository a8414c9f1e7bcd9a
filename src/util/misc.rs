use std::fmt;

use anyhow::{anyhow, Context};

pub type Res<T = ()> = anyhow::Result<T>;

// コマンドライン引数のオプション値を取り出してパース
pub fn next_value<T>(it: &mut std::slice::Iter<'_, String>, opt: &str) -> Res<T>
where
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    let n = it.next().ok_or_else(|| anyhow!("{}: value missing", opt))?;
    n.parse()
        .map_err(|e| anyhow!("{}: {} '{}'", opt, e, n))
}

pub fn read_to_string(file_path: &str) -> Res<String> {
    std::fs::read_to_string(file_path).with_context(|| format!("failed to read '{}'", file_path))
}

pub fn vec_count<T: PartialEq>(v: &[T], e: &T) -> usize {
    v.iter().filter(|&n| n == e).count()
}

pub fn vec_to_string<T: fmt::Display>(v: &[T]) -> String {
    let vs: Vec<String> = v.iter().map(|x| format!("{}", x)).collect();
    "[".to_string() + &vs.join(", ") + "]"
}

#[test]
fn test_next_value() {
    let args: Vec<String> = vec!["3".to_string(), "x".to_string()];
    let mut it = args.iter();
    assert_eq!(next_value::<usize>(&mut it, "-m").unwrap(), 3);
    assert!(next_value::<usize>(&mut it, "-m").is_err());
    assert!(next_value::<usize>(&mut it, "-m").is_err());
}
