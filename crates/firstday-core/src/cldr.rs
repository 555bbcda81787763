use tracing::trace;

use crate::locale::LocaleTag;

const MONDAY: u8 = 1;
const FRIDAY: u8 = 5;
const SATURDAY: u8 = 6;
const SUNDAY: u8 = 7;

pub fn first_day(tag: &LocaleTag) -> Option<u8> {
    let region = match tag.region() {
        Some(region) => region.to_ascii_uppercase(),
        None => default_region(tag.language())?.to_string(),
    };
    let day = region_first_day(&region);
    trace!(locale = %tag, region = %region, day, "static locale table answered");
    Some(day)
}

// CLDR supplemental weekData firstDay, ISO-8601 weekday encoding
// (1=Monday .. 7=Sunday). Regions not listed use the world default
// of Monday.
fn region_first_day(region: &str) -> u8 {
    match region {
        "MV" => FRIDAY,
        "AE" | "AF" | "BH" | "DJ" | "DZ" | "EG" | "IQ" | "IR" | "JO" | "KW" | "LY" | "OM"
        | "QA" | "SD" | "SY" => SATURDAY,
        "AG" | "AS" | "BD" | "BR" | "BS" | "BT" | "BW" | "BZ" | "CA" | "CN" | "CO" | "DM"
        | "DO" | "ET" | "GT" | "GU" | "HK" | "HN" | "ID" | "IL" | "IN" | "JM" | "JP" | "KE"
        | "KH" | "KR" | "LA" | "MH" | "MM" | "MO" | "MT" | "MX" | "MZ" | "NI" | "NP" | "PA"
        | "PE" | "PH" | "PK" | "PR" | "PT" | "PY" | "SA" | "SG" | "SV" | "TH" | "TT" | "TW"
        | "UM" | "US" | "VE" | "VI" | "WS" | "YE" | "ZA" | "ZW" => SUNDAY,
        _ => MONDAY,
    }
}

// Likely region for language-only tags, after CLDR likely-subtags.
fn default_region(language: &str) -> Option<&'static str> {
    let lowered = language.to_ascii_lowercase();
    let region = match lowered.as_str() {
        "am" => "ET",
        "ar" => "EG",
        "bn" => "BD",
        "cs" => "CZ",
        "da" => "DK",
        "de" => "DE",
        "el" => "GR",
        "en" => "US",
        "es" => "ES",
        "fa" => "IR",
        "fi" => "FI",
        "fr" => "FR",
        "he" => "IL",
        "hi" => "IN",
        "hu" => "HU",
        "id" => "ID",
        "it" => "IT",
        "ja" => "JP",
        "ko" => "KR",
        "ms" => "MY",
        "nb" | "nn" | "no" => "NO",
        "nl" => "NL",
        "pl" => "PL",
        "pt" => "BR",
        "ro" => "RO",
        "ru" => "RU",
        "sv" => "SE",
        "sw" => "TZ",
        "ta" => "IN",
        "th" => "TH",
        "tr" => "TR",
        "uk" => "UA",
        "ur" => "PK",
        "vi" => "VN",
        "zh" => "CN",
        _ => return None,
    };
    Some(region)
}
