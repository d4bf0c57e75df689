use crate::{extension::TomlTableExt, state::State};
use tracing_subscriber::filter::EnvFilter;

/// Initializes the tracing subscriber with the `[tracing]` config of the state.
///
/// The `RUST_LOG` environment variable takes precedence over the `filter` key.
/// Returns `false` if a global subscriber has already been installed.
pub fn init_tracing(state: &State) -> bool {
    let app_env = state.env();
    let in_dev_mode = app_env.is_dev();
    let mut event_format = if in_dev_mode { "pretty" } else { "json" };
    let mut env_filter = if in_dev_mode {
        "info,classdeck_core=debug,classdeck_dioxus=debug"
    } else {
        "warn,classdeck_core=info,classdeck_dioxus=info"
    };
    let mut ansi_terminal = true;
    let mut display_target = true;
    if let Some(config) = state.get_config("tracing") {
        if let Some(format) = config.get_str("format") {
            event_format = format;
        }
        if let Some(filter) = config.get_str("filter").or_else(|| config.get_str("level")) {
            env_filter = filter;
        }
        ansi_terminal = config.get_bool("ansi").unwrap_or(true);
        display_target = config.get_bool("display-target").unwrap_or(true);
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::try_new(env_filter).unwrap_or_else(|err| {
            eprintln!("invalid tracing filter `{env_filter}`: {err}");
            EnvFilter::new("info")
        })
    });
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(ansi_terminal)
        .with_target(display_target);
    let result = match event_format {
        "json" => builder.json().try_init(),
        "compact" => builder.compact().try_init(),
        _ => builder.pretty().try_init(),
    };
    match result {
        Ok(()) => {
            tracing::info!(env = app_env.as_str(), event_format, "tracing subscriber initialized");
            true
        }
        Err(err) => {
            tracing::warn!("tracing subscriber has already been initialized: {err}");
            false
        }
    }
}
