use tracing::{
  debug,
  warn
};

use crate::cldr;
use crate::locale::LocaleTag;
use crate::settings::WeekStartPreference;
use crate::week_info;
use crate::weekday::WeekdayIndex;

#[derive(
  Debug, Clone, Copy, PartialEq, Eq
)]
pub enum WeekStartSource {
  Preference,
  NativeWeekInfo,
  LocaleTable,
  Default
}

impl WeekStartSource {
  pub fn as_str(
    self
  ) -> &'static str {
    match self {
      | Self::Preference => {
        "preference"
      }
      | Self::NativeWeekInfo => {
        "native-week-info"
      }
      | Self::LocaleTable => {
        "locale-table"
      }
      | Self::Default => "default"
    }
  }
}

#[derive(Debug, Clone, Copy)]
pub struct Resolution {
  pub day:    WeekdayIndex,
  pub source: WeekStartSource
}

pub fn resolve_first_day(
  preference: WeekStartPreference,
  locale: Option<&LocaleTag>
) -> WeekdayIndex {
  resolve_first_day_detailed(
    preference, locale
  )
  .day
}

#[tracing::instrument(skip(locale))]
pub fn resolve_first_day_detailed(
  preference: WeekStartPreference,
  locale: Option<&LocaleTag>
) -> Resolution {
  resolve_with_lookups(
    preference,
    locale,
    week_info::first_day,
    cldr::first_day
  )
}

fn resolve_with_lookups<N, T>(
  preference: WeekStartPreference,
  locale: Option<&LocaleTag>,
  native: N,
  table: T
) -> Resolution
where
  N: Fn(&LocaleTag) -> Option<u8>,
  T: Fn(&LocaleTag) -> Option<u8>
{
  if let Some(day) =
    preference.fixed_day()
  {
    debug!(
      ?preference,
      day = day.get(),
      "explicit week-start preference"
    );
    return Resolution {
      day,
      source:
        WeekStartSource::Preference
    };
  }

  let Some(tag) = locale else {
    debug!(
      "no locale available; week \
       starts on sunday"
    );
    return Resolution {
      day:    WeekdayIndex::SUNDAY,
      source: WeekStartSource::Default
    };
  };

  if let Some(day) = native(tag)
    .and_then(
      WeekdayIndex::from_iso_first_day
    )
  {
    debug!(
      locale = %tag,
      day = day.get(),
      "week start from native week info"
    );
    return Resolution {
      day,
      source:
        WeekStartSource::NativeWeekInfo
    };
  }

  if let Some(day) = table(tag)
    .and_then(
      WeekdayIndex::from_iso_first_day
    )
  {
    debug!(
      locale = %tag,
      day = day.get(),
      "week start from static locale table"
    );
    return Resolution {
      day,
      source:
        WeekStartSource::LocaleTable
    };
  }

  warn!(
    locale = %tag,
    "no week-start answer for locale; using sunday"
  );
  Resolution {
    day:    WeekdayIndex::SUNDAY,
    source: WeekStartSource::Default
  }
}

#[cfg(test)]
mod tests {
  use super::{
    WeekStartSource,
    resolve_first_day,
    resolve_with_lookups
  };
  use crate::cldr;
  use crate::locale::LocaleTag;
  use crate::settings::WeekStartPreference;

  fn tag(raw: &str) -> LocaleTag {
    LocaleTag::new(raw)
      .expect("usable tag")
  }

  fn no_answer(
    _tag: &LocaleTag
  ) -> Option<u8> {
    None
  }

  #[test]
  fn explicit_preferences_ignore_locale()
  {
    let gb = tag("en-GB");
    for (pref, expected) in [
      (
        WeekStartPreference::Saturday,
        6
      ),
      (WeekStartPreference::Sunday, 0),
      (WeekStartPreference::Monday, 1)
    ] {
      let with_locale =
        resolve_first_day(
          pref,
          Some(&gb)
        );
      let without_locale =
        resolve_first_day(pref, None);
      assert_eq!(
        with_locale.get(),
        expected
      );
      assert_eq!(
        without_locale.get(),
        expected
      );
    }
  }

  #[test]
  fn native_week_info_wins_for_automatic()
  {
    let resolution =
      resolve_with_lookups(
        WeekStartPreference::Automatic,
        Some(&tag("en-GB")),
        |_| Some(1),
        no_answer
      );
    assert_eq!(
      resolution.day.get(),
      1
    );
    assert_eq!(
      resolution.source,
      WeekStartSource::NativeWeekInfo
    );
  }

  #[test]
  fn table_fallback_when_native_unavailable()
  {
    let resolution =
      resolve_with_lookups(
        WeekStartPreference::Automatic,
        Some(&tag("en-US")),
        no_answer,
        cldr::first_day
      );
    assert_eq!(
      resolution.day.get(),
      0
    );
    assert_eq!(
      resolution.source,
      WeekStartSource::LocaleTable
    );
  }

  #[test]
  fn no_locale_defaults_to_sunday() {
    let resolution =
      resolve_with_lookups(
        WeekStartPreference::Automatic,
        None,
        |_| Some(1),
        |_| Some(1)
      );
    assert_eq!(
      resolution.day.get(),
      0
    );
    assert_eq!(
      resolution.source,
      WeekStartSource::Default
    );
  }

  #[test]
  fn iso_sunday_normalizes_to_zero() {
    let resolution =
      resolve_with_lookups(
        WeekStartPreference::Automatic,
        Some(&tag("en-US")),
        |_| Some(7),
        no_answer
      );
    assert_eq!(
      resolution.day.get(),
      0
    );
    assert_eq!(
      resolution.source,
      WeekStartSource::NativeWeekInfo
    );
  }

  #[test]
  fn out_of_range_native_values_fall_through()
  {
    for bad in [0_u8, 8, 200] {
      let resolution =
        resolve_with_lookups(
          WeekStartPreference::Automatic,
          Some(&tag("en-GB")),
          move |_| Some(bad),
          |_| Some(1)
        );
      assert_eq!(
        resolution.source,
        WeekStartSource::LocaleTable
      );
      assert_eq!(
        resolution.day.get(),
        1
      );
    }
  }

  #[test]
  fn chain_exhaustion_defaults_to_sunday()
  {
    let resolution =
      resolve_with_lookups(
        WeekStartPreference::Automatic,
        Some(&tag("xx")),
        no_answer,
        |_| Some(9)
      );
    assert_eq!(
      resolution.day.get(),
      0
    );
    assert_eq!(
      resolution.source,
      WeekStartSource::Default
    );
  }

  #[test]
  fn resolver_is_idempotent() {
    let gb = tag("en-GB");
    let first = resolve_first_day(
      WeekStartPreference::Automatic,
      Some(&gb)
    );
    let second = resolve_first_day(
      WeekStartPreference::Automatic,
      Some(&gb)
    );
    assert_eq!(first, second);
  }

  #[test]
  fn automatic_uses_real_locale_data()
  {
    let day = resolve_first_day(
      WeekStartPreference::Automatic,
      Some(&tag("en-GB"))
    );
    assert_eq!(day.get(), 1);

    let day = resolve_first_day(
      WeekStartPreference::Automatic,
      Some(&tag("en-US"))
    );
    assert_eq!(day.get(), 0);
  }
}
