pub mod cldr;
pub mod cli;
pub mod locale;
pub mod resolve;
pub mod settings;
pub mod week_info;
pub mod weekday;

use std::ffi::OsString;

use anyhow::anyhow;
use clap::Parser;
use tracing::info;

#[tracing::instrument(skip_all)]
pub fn run(
  raw_args: Vec<OsString>
) -> anyhow::Result<()> {
  let cli = cli::GlobalCli::parse_from(
    raw_args
  );

  cli::init_tracing(
    cli.verbose,
    cli.quiet
  )?;

  info!(
    verbose = cli.verbose,
    quiet = cli.quiet,
    "starting firstday CLI"
  );

  let preference = match cli
    .week_starts_on
    .as_deref()
  {
    | Some(raw) => {
      settings::WeekStartPreference::parse(raw)
        .ok_or_else(|| {
          anyhow!(
            "unrecognized week-start \
             preference: {raw}"
          )
        })?
    }
    | None => {
      settings::UserSettings::load(
        cli.settings.as_deref()
      )
      .week_starts_on
    }
  };

  let locale =
    match cli.locale.as_deref() {
      | Some(raw) => Some(
        locale::LocaleTag::new(raw)
          .ok_or_else(|| {
            anyhow!(
              "unusable locale tag: \
               {raw}"
            )
          })?
      ),
      | None => locale::detect()
    };

  let resolution =
    resolve::resolve_first_day_detailed(
      preference,
      locale.as_ref()
    );

  if cli.json {
    let payload = serde_json::json!({
      "first_day": resolution.day.get(),
      "weekday": resolution.day.name(),
      "locale": locale
        .as_ref()
        .map(locale::LocaleTag::as_str),
      "source": resolution.source.as_str(),
    });
    println!("{payload}");
  } else {
    println!(
      "week starts on {} ({})",
      resolution.day,
      resolution.day.get()
    );
  }

  info!("done");
  Ok(())
}
