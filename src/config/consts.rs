// src/config/consts.rs

// Local files
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "result";

// GUI
pub const WINDOW_TITLE: &str = "Kazemai Parser";
pub const WINDOW_W: u32 = 1100;
pub const WINDOW_H: u32 = 700;

// Page layout
pub const ACCORDION_HEADERS: &str = ".accordion > dt";
pub const OPEN_CLASS: &str = "open";
pub const ITEM_CELL: &str = "div.itemST";
pub const ITEM_LABEL_ATTR: &str = "title";
pub const MATERIAL_SEP: char = '/';
pub const PROJECT_PREFIX: &str = "Project ";

/// Captures the "3 A" part of a project header. ASCII digits only; full-width
/// digits in the title are ordinary text.
pub const PROJECT_ID_PATTERN: &str = r"^[^0-9]*([0-9]+ [A-C]).*$";

/// Which blocks a farming pass opens, and which resources it keeps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FarmingPreset {
    pub blocks: &'static [&'static str],
    pub exclude: bool,
    pub resources: &'static [&'static str],
}

// Summer 2018, part 1
pub const SUMMER1_FARMING: FarmingPreset = FarmingPreset {
    blocks: &["主線關卡", "漂流物發現！", "耀眼夏日", "開拓計畫"],
    exclude: true,
    resources: &["water", "food", "wood", "stone", "iron"],
};
pub const SUMMER1_PROJECTS_BLOCK: &str = "開拓計畫";

// Summer 2018, part 2 (note 劃 vs 畫 in the projects block)
pub const SUMMER2_FARMING: FarmingPreset = FarmingPreset {
    blocks: &["開拓計劃", "耀眼夏日", "埋沒物發現！", "主線關卡"],
    exclude: true,
    resources: &["cement", "oil", "blue", "silver", "gold"],
};
pub const SUMMER2_PROJECTS_BLOCK: &str = "開拓計劃";

// TSV import
pub const TSV_SKIP_PREFIX: &str = "Your Bonus:";
pub const TSV_CURRENCIES: &[&str] = &["water", "wood", "iron", "stone", "food"];
pub const TSV_ROUND_DIGITS: i32 = 5;
