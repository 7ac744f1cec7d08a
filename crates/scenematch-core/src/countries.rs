//! Country names and the abbreviations release groups use for them.
//!
//! The table is immutable reference data. The reverse direction
//! (abbreviation → name) is computed on lookup rather than stored.

use phf::phf_ordered_map;

/// Full country name → abbreviation, in lookup order.
pub static COUNTRIES: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "Australia" => "AU",
    "Canada" => "CA",
    "America" => "US",
};

/// All abbreviations, in table order.
pub fn abbreviations() -> impl Iterator<Item = &'static str> {
    COUNTRIES.values().copied()
}

/// Every token paired with the other half of its name/abbreviation pair:
/// full names first, then abbreviations.
pub fn bidirectional() -> impl Iterator<Item = (&'static str, &'static str)> {
    let forward = COUNTRIES.entries().map(|(name, abbrev)| (*name, *abbrev));
    let backward = COUNTRIES.entries().map(|(name, abbrev)| (*abbrev, *name));
    forward.chain(backward)
}
