//! Cargo payment constants (OpenTTD temperate, sub-arctic, sub-tropical and toyland cargos)

use cargopay_domain::model::CargoKind;
use cargopay_types::CalcError;
use std::collections::HashMap;
use std::sync::LazyLock;

/// (name, base_pay, days1, days2)
const CARGO_TABLE: [(&str, u32, u32, u32); 32] = [
    ("Batteries", 4322, 2, 30),
    ("Bubbles", 5077, 20, 80),
    ("Candyfloss", 5005, 10, 25),
    ("Coal", 5916, 7, 255),
    ("Cola", 4892, 5, 75),
    ("Copper_Ore", 4892, 12, 255),
    ("Diamonds", 5802, 10, 255),
    ("Fizzy_Drinks", 6250, 30, 50),
    ("Food", 5688, 0, 30),
    ("Fruit", 4209, 0, 15),
    ("Gold", 5802, 10, 40),
    ("Goods", 6144, 5, 28),
    ("Grain", 4778, 4, 40),
    ("Iron_Ore", 5120, 9, 255),
    ("Livestock", 4322, 4, 18),
    ("Mail", 4550, 20, 90),
    ("Maize", 4322, 4, 40),
    ("Oil", 4437, 25, 255),
    ("Oil_subtropical", 4892, 25, 255),
    ("Paper", 5461, 7, 60),
    ("Passengers", 3185, 0, 24),
    ("Plastic", 4664, 30, 255),
    ("Rubber", 4437, 2, 20),
    ("Steel", 5688, 7, 255),
    ("Sugar", 4437, 20, 255),
    ("Sweets", 6144, 8, 40),
    ("Toffee", 4778, 14, 60),
    ("Toys", 5574, 25, 255),
    ("Valuables", 7509, 1, 32),
    ("Water", 4664, 20, 80),
    ("Wood", 5005, 15, 255),
    ("Wood_subtropical", 7964, 15, 255),
];

/// Names that resolve to another entry with identical constants
pub const CARGO_ALIASES: [(&str, &str); 1] = [("Wheat", "Grain")];

static CARGO_KINDS: LazyLock<Vec<CargoKind>> = LazyLock::new(|| {
    CARGO_TABLE
        .iter()
        .map(|&(name, base_pay, days1, days2)| CargoKind::new(name, base_pay, days1, days2))
        .collect()
});

/// Normalized name (and alias) -> index into `CARGO_KINDS`
static CARGO_INDEX: LazyLock<HashMap<String, usize>> = LazyLock::new(|| {
    let mut index: HashMap<String, usize> = CARGO_TABLE
        .iter()
        .enumerate()
        .map(|(i, (name, ..))| (normalize_name(name), i))
        .collect();

    for (alias, target) in CARGO_ALIASES {
        if let Some(&i) = index.get(&normalize_name(target)) {
            index.insert(normalize_name(alias), i);
        }
    }
    index
});

fn normalize_name(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| if c == ' ' || c == '-' { '_' } else { c })
        .collect::<String>()
        .to_lowercase()
}

/// Every cargo kind in catalog order
pub fn all_cargos() -> &'static [CargoKind] {
    &CARGO_KINDS
}

/// Cargo names in catalog order, aliases excluded
pub fn cargo_names() -> impl Iterator<Item = &'static str> {
    CARGO_KINDS.iter().map(|c| c.name.as_str())
}

/// Get cargo by name
///
/// Exact names match first; otherwise the lookup ignores case and treats
/// spaces and hyphens as underscores ("copper ore" -> `Copper_Ore`).
pub fn lookup_cargo(name: &str) -> Result<&'static CargoKind, CalcError> {
    if let Some(cargo) = CARGO_KINDS.iter().find(|c| c.name == name) {
        return Ok(cargo);
    }

    CARGO_INDEX
        .get(&normalize_name(name))
        .map(|&i| &CARGO_KINDS[i])
        .ok_or_else(|| CalcError::UnknownCargo(name.to_string()))
}
