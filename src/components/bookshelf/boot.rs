//! Library loading.
//!
//! Runs the configured data source once at start-up and again on every
//! manual refresh, then hands the outcome to [`AppContext::apply_outcome`].

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::config;
use crate::core::error::{ConfigError, LoadError};
use crate::core::{DataSource, LoadOutcome};
use crate::models::Library;
use crate::utils::CachePolicy;

fn configured_source() -> Result<DataSource, ConfigError> {
    config::settings().data_source()
}

/// Whether the refresh control should be offered.
pub fn can_refresh() -> bool {
    configured_source().is_ok_and(|s| s.is_refreshable())
}

/// Start a load. Ignored while another load is in flight.
pub fn run(ctx: AppContext, cache: CachePolicy) {
    if cache == CachePolicy::Reload && ctx.status.with_untracked(|s| s.is_loading()) {
        return;
    }
    ctx.begin_load();

    let source = match configured_source() {
        Ok(source) => source,
        Err(err) => {
            tracing::error!(%err, "no usable data source");
            ctx.apply_outcome(LoadOutcome {
                library: Library::empty(),
                error: Some(LoadError::Config(err.to_string())),
            });
            return;
        }
    };

    spawn_local(async move {
        let outcome = source.load(cache).await;
        ctx.apply_outcome(outcome);
    });
}
