use crate::conf::AnalyzerConfig;
use serde::Serialize;

pub fn dump(cfg: &AnalyzerConfig, compact: bool) -> anyhow::Result<()> {
    println!("{}", render_json(cfg, compact)?);
    Ok(())
}

pub fn render_json<T: Serialize>(value: &T, compact: bool) -> anyhow::Result<String> {
    let s = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    Ok(s)
}
