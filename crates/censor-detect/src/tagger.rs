//! Built-in rule-based US address tagger.
//!
//! A compact stand-in for a full postal grammar: whitespace tokens are
//! labelled with structural roles by scanning for a house number
//! followed by a street suffix, then tagging the trailing place, state,
//! zip and occupancy tokens. Every token of the text appears in the
//! output stream, in document order, so the detector's rolling cursor
//! stays aligned.

use censor_core::AddressRole;

use crate::address::{AddressTagger, AddressToken};

const STREET_SUFFIXES: [&str; 24] = [
    "street", "st", "avenue", "ave", "boulevard", "blvd", "road", "rd", "lane", "ln", "drive",
    "dr", "court", "ct", "place", "pl", "terrace", "ter", "way", "circle", "cir", "parkway",
    "pkwy", "hwy",
];

const DIRECTIONALS: [&str; 16] = [
    "n", "s", "e", "w", "ne", "nw", "se", "sw", "north", "south", "east", "west", "northeast",
    "northwest", "southeast", "southwest",
];

const STATE_ABBREVS: [&str; 50] = [
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "FL", "GA", "HI", "ID", "IL", "IN", "IA",
    "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH", "NJ",
    "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT",
    "VA", "WA", "WV", "WI", "WY",
];

const OCCUPANCY_TYPES: [&str; 8] = [
    "apt", "apartment", "suite", "ste", "unit", "rm", "room", "floor",
];

/// How many tokens after the street suffix may still be address words.
const PLACE_BUDGET: usize = 2;

/// Window (in tokens) between a house number and its street suffix.
const SUFFIX_WINDOW: usize = 5;

pub struct UsAddressTagger;

impl AddressTagger for UsAddressTagger {
    fn tag(&self, text: &str) -> Vec<AddressToken> {
        let words: Vec<&str> = text
            .split_whitespace()
            .map(trim_punctuation)
            .filter(|w| !w.is_empty())
            .collect();
        let mut roles = vec![AddressRole::Unknown; words.len()];

        let mut i = 0;
        while i < words.len() {
            let lower = words[i].to_lowercase();

            if (lower == "po" || lower == "p.o")
                && words.get(i + 1).is_some_and(|w| w.eq_ignore_ascii_case("box"))
            {
                roles[i] = AddressRole::PoBoxType;
                roles[i + 1] = AddressRole::PoBoxType;
                i += 2;
                if words.get(i).is_some_and(|w| is_number(w)) {
                    roles[i] = AddressRole::PoBoxId;
                    i += 1;
                }
                i = tag_trailer(&words, &mut roles, i);
                continue;
            }

            if is_house_number(words[i]) {
                let window_end = (i + SUFFIX_WINDOW).min(words.len() - 1);
                if let Some(suffix) =
                    (i + 1..=window_end).find(|&j| is_street_suffix(words[j]))
                {
                    roles[i] = AddressRole::StreetNumber;
                    for j in i + 1..suffix {
                        roles[j] = if is_directional(words[j]) {
                            AddressRole::PreDirectional
                        } else {
                            AddressRole::StreetName
                        };
                    }
                    roles[suffix] = AddressRole::StreetSuffix;
                    i = tag_trailer(&words, &mut roles, suffix + 1);
                    continue;
                }
            }

            i += 1;
        }

        words
            .into_iter()
            .zip(roles)
            .map(|(text, role)| AddressToken::new(text, role))
            .collect()
    }
}

/// Tag what follows a street core or PO box: place names, state, zip and
/// occupancy. Stops at the first token that is none of those.
fn tag_trailer(words: &[&str], roles: &mut [AddressRole], mut i: usize) -> usize {
    let mut place_budget = PLACE_BUDGET;
    while i < words.len() {
        let lower = words[i].to_lowercase();
        if OCCUPANCY_TYPES.contains(&lower.as_str()) {
            roles[i] = AddressRole::OccupancyType;
            i += 1;
            if words.get(i).is_some_and(|w| w.chars().all(|c| c.is_alphanumeric())) {
                roles[i] = AddressRole::OccupancyId;
                i += 1;
            }
            continue;
        }
        if is_zip(words[i]) {
            roles[i] = AddressRole::ZipCode;
            i += 1;
            continue;
        }
        if STATE_ABBREVS.contains(&words[i]) {
            roles[i] = AddressRole::StateName;
            i += 1;
            continue;
        }
        if place_budget > 0 && is_capitalized_word(words[i]) {
            roles[i] = AddressRole::PlaceName;
            place_budget -= 1;
            i += 1;
            continue;
        }
        break;
    }
    i
}

fn trim_punctuation(word: &str) -> &str {
    word.trim_matches(|c: char| !c.is_alphanumeric())
}

fn is_number(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|c| c.is_ascii_digit())
}

fn is_house_number(word: &str) -> bool {
    is_number(word) && word.len() <= 6
}

fn is_zip(word: &str) -> bool {
    match word.split_once('-') {
        Some((a, b)) => a.len() == 5 && is_number(a) && b.len() == 4 && is_number(b),
        None => word.len() == 5 && is_number(word),
    }
}

fn is_street_suffix(word: &str) -> bool {
    STREET_SUFFIXES.contains(&word.to_lowercase().as_str())
}

fn is_directional(word: &str) -> bool {
    DIRECTIONALS.contains(&word.to_lowercase().as_str())
}

fn is_capitalized_word(word: &str) -> bool {
    let mut chars = word.chars();
    chars.next().is_some_and(|c| c.is_uppercase()) && chars.all(|c| c.is_alphabetic())
}
