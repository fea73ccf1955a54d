use std::path::Path;
use std::time::UNIX_EPOCH;

use indexmap::IndexMap;
use serde::Serialize;

use crate::value::Value;

/// Modification stamps per audio asset set, keyed by file stem. The page
/// uses these for cache busting.
#[derive(Debug, Default, Serialize)]
pub struct AudioVersions {
    pub chimes: IndexMap<String, u64>,
    pub names: IndexMap<String, u64>,
    pub descriptions: IndexMap<String, u64>,
    pub types: IndexMap<String, u64>,
    pub moves: IndexMap<String, u64>,
}

/// Scan the public audio tree. Missing directories yield empty sets.
pub fn scan_audio_versions(public_dir: &Path) -> AudioVersions {
    let audio = public_dir.join("audio");
    AudioVersions {
        chimes: version_map(&audio.join("chimes"), "ogg"),
        names: version_map(&audio.join("de").join("species"), "mp3"),
        descriptions: version_map(&audio.join("de").join("descriptions"), "mp3"),
        types: version_map(&audio.join("de").join("types"), "mp3"),
        moves: version_map(&audio.join("de").join("moves"), "mp3"),
    }
}

fn version_map(dir: &Path, ext: &str) -> IndexMap<String, u64> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return IndexMap::new();
    };
    let mut stamped: Vec<(String, u64)> = entries
        .flatten()
        .filter_map(|entry| {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(ext) {
                return None;
            }
            let stem = path.file_stem()?.to_str()?.to_string();
            let modified = entry.metadata().ok()?.modified().ok()?;
            let millis = modified.duration_since(UNIX_EPOCH).ok()?.as_millis() as u64;
            Some((stem, millis))
        })
        .collect();
    stamped.sort();
    stamped.into_iter().collect()
}

/// Display name and color for one type, as the page consumes it.
#[derive(Debug, Clone, Serialize)]
pub struct TypeInfo {
    pub name: String,
    pub color: String,
}

/// Everything the page needs at load time, serialized into the HTML
/// template.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    pub type_info: IndexMap<String, TypeInfo>,
    pub type_names: Vec<String>,
    pub move_slugs: Vec<String>,
    pub audio_versions: AudioVersions,
    pub asset_version: String,
}

pub fn build_client_config(
    types: &[Value],
    moves: &[Value],
    audio_versions: AudioVersions,
    asset_version: &str,
) -> ClientConfig {
    let mut type_info = IndexMap::new();
    for t in types {
        let Some(slug) = t.get("slug").and_then(Value::as_str) else {
            continue;
        };
        let name = t
            .get("name")
            .and_then(|n| n.get("de"))
            .and_then(Value::as_str)
            .or_else(|| t.get("name").and_then(Value::as_str))
            .unwrap_or(slug)
            .to_string();
        let color = t
            .get("color")
            .and_then(Value::as_str)
            .unwrap_or("#ccc")
            .to_string();
        type_info.insert(slug.to_string(), TypeInfo { name, color });
    }

    ClientConfig {
        type_info,
        type_names: slugs_of(types),
        move_slugs: slugs_of(moves),
        audio_versions,
        asset_version: asset_version.to_string(),
    }
}

fn slugs_of(records: &[Value]) -> Vec<String> {
    records
        .iter()
        .filter_map(|r| r.get("slug").and_then(Value::as_str))
        .map(str::to_string)
        .collect()
}

/// One background rule per colored type record.
pub fn type_css(types: &[Value]) -> String {
    types
        .iter()
        .filter_map(|t| {
            let slug = t.get("slug").and_then(Value::as_str)?;
            let color = t.get("color").and_then(Value::as_str)?;
            let class = slug
                .split_whitespace()
                .collect::<Vec<_>>()
                .join("-")
                .to_lowercase();
            Some(format!(
                ".type-{} {{ background: {}; color: #111; }}",
                class, color
            ))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Substitute the asset version and client config into the page template.
pub fn render_page(template: &str, config_json: &str, asset_version: &str) -> String {
    template
        .replace("__ASSET_VERSION__", asset_version)
        .replace("__CATALOG_CONFIG_JSON__", config_json)
}
