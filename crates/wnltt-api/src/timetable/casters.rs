//! Caster directory.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Display name used for caster codes missing from the directory.
const UNKNOWN_CASTER: &str = "-";

/// Caster code → display name. Loaded once, read-only thereafter.
static CASTER_LIST: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("ailin", "山岸愛梨"),
        ("hiyama2018", "檜山沙耶"),
        ("kawabata", "川畑玲"),
        ("komaki2018", "駒木結衣"),
        ("ohshima", "大島璃音"),
        ("sayane", "江川清音"),
        ("shirai", "白井ゆかり"),
        ("takayama", "高山奈々"),
        ("tokita", "戸北美月"),
        ("yuki", "内田侑希"),
        ("kobayashi", "小林李衣奈"),
        ("ogawa", "小川千奈"),
        ("uozumi", "魚住茉由"),
    ])
});

/// Resolves a caster code to its on-air display name.
///
/// Codes absent from the directory (including the empty string) resolve to
/// `"-"`.
#[must_use]
pub fn resolve_caster(caster_id: &str) -> &'static str {
    CASTER_LIST.get(caster_id).copied().unwrap_or(UNKNOWN_CASTER)
}
