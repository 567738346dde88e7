//! Numeric id lookup tables.
//!
//! Blizzard and WarcraftLogs number playable classes differently (Blizzard by release
//! order, WarcraftLogs alphabetically), so each service gets its own table.

const UNKNOWN: &str = "Unknown";

/// Blizzard `playable_class` id to class name.
pub fn blizzard_class_name(id: u64) -> &'static str {
    match id {
        1 => "Warrior",
        2 => "Paladin",
        3 => "Hunter",
        4 => "Rogue",
        5 => "Priest",
        6 => "Death Knight",
        7 => "Shaman",
        8 => "Mage",
        9 => "Warlock",
        10 => "Monk",
        11 => "Druid",
        12 => "Demon Hunter",
        13 => "Evoker",
        _ => UNKNOWN,
    }
}

/// Blizzard `playable_race` id to race name.
pub fn blizzard_race_name(id: u64) -> &'static str {
    match id {
        1 => "Human",
        2 => "Orc",
        3 => "Dwarf",
        4 => "Night Elf",
        5 => "Undead",
        6 => "Tauren",
        7 => "Gnome",
        8 => "Troll",
        9 => "Goblin",
        10 => "Blood Elf",
        11 => "Draenei",
        22 => "Worgen",
        24..=26 => "Pandaren",
        27 => "Nightborne",
        28 => "Highmountain Tauren",
        29 => "Void Elf",
        30 => "Lightforged Draenei",
        31 => "Zandalari Troll",
        32 => "Kul Tiran",
        34 => "Dark Iron Dwarf",
        35 => "Vulpera",
        36 => "Mag'har Orc",
        37 => "Mechagnome",
        52 | 70 => "Dracthyr",
        84 | 85 => "Earthen",
        _ => UNKNOWN,
    }
}

/// WarcraftLogs `classID` to class name.
pub fn warcraft_logs_class_name(id: u32) -> &'static str {
    match id {
        1 => "Death Knight",
        2 => "Druid",
        3 => "Hunter",
        4 => "Mage",
        5 => "Monk",
        6 => "Paladin",
        7 => "Priest",
        8 => "Rogue",
        9 => "Shaman",
        10 => "Warlock",
        11 => "Warrior",
        12 => "Demon Hunter",
        13 => "Evoker",
        _ => UNKNOWN,
    }
}
