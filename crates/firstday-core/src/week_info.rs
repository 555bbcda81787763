use icu::calendar::week::{WeekInformation, WeekPreferences};
use icu::locale::Locale;
use tracing::debug;

use crate::locale::LocaleTag;

pub fn first_day(tag: &LocaleTag) -> Option<u8> {
    let locale = parse_locale(tag)?;
    match WeekInformation::try_new(WeekPreferences::from(&locale)) {
        Ok(info) => {
            // icu reports the ISO-8601 weekday, Monday=1 .. Sunday=7.
            let day = info.first_weekday as u8;
            debug!(locale = %tag, day, "native week info answered");
            Some(day)
        }
        Err(err) => {
            debug!(locale = %tag, error = %err, "no native week info for locale");
            None
        }
    }
}

fn parse_locale(tag: &LocaleTag) -> Option<Locale> {
    if let Ok(locale) = Locale::try_from_str(tag.as_str()) {
        return Some(locale);
    }

    // Language-only retry, e.g. "en" from "en-US-whatever".
    let language = tag.language();
    match Locale::try_from_str(language) {
        Ok(locale) => {
            debug!(locale = %tag, language, "full tag unparsable, using language only");
            Some(locale)
        }
        Err(err) => {
            debug!(locale = %tag, error = %err, "locale tag not parsable");
            None
        }
    }
}
