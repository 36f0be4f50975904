//! Logging configuration for the crate's diagnostic channel.
//!
//! The crate never installs a subscriber on its own, so events are discarded
//! until a host calls [`setup_logging`]. The channel is a process-global,
//! lazily initialized registry carrying a reloadable set of sinks behind a
//! reloadable per-target severity filter.

use std::sync::OnceLock;

use tracing_subscriber::{
    filter::Targets, layer::SubscriberExt, reload, util::SubscriberInitExt, Layer, Registry,
};

pub use tracing::level_filters::LevelFilter;

/// Target prefix under which every event of this crate is emitted.
///
/// Hosts routing the channel through their own subscriber can filter on this
/// prefix, e.g. a `Targets` or `EnvFilter` directive `greeter=debug`.
pub const LOG_TARGET: &str = "greeter";

/// An output destination attachable to the crate's channel.
pub type Sink = Box<dyn Layer<Registry> + Send + Sync>;

struct Channel {
    sinks: reload::Handle<Vec<Sink>, Registry>,
    threshold: reload::Handle<Targets, Registry>,
}

static CHANNEL: OnceLock<Option<Channel>> = OnceLock::new();

fn channel() -> Option<&'static Channel> {
    CHANNEL
        .get_or_init(|| {
            let (sinks, sinks_handle) = reload::Layer::new(Vec::<Sink>::new());
            let (threshold, threshold_handle) =
                reload::Layer::new(Targets::new().with_target(LOG_TARGET, LevelFilter::INFO));

            // Fails when the host already installed a global subscriber; the
            // host then owns dispatch for this channel as well.
            tracing_subscriber::registry()
                .with(sinks.with_filter(threshold))
                .try_init()
                .ok()
                .map(|_| Channel {
                    sinks: sinks_handle,
                    threshold: threshold_handle,
                })
        })
        .as_ref()
}

/// Make the crate's diagnostics visible.
///
/// Sets the channel's severity threshold to `level` and attaches `sink`, or
/// a compact timestamp+target+level+message sink on stderr when none is
/// given. Calling this twice attaches two sinks and duplicates output per
/// event; the threshold follows the last call.
pub fn setup_logging(level: LevelFilter, sink: Option<Sink>) {
    let Some(channel) = channel() else {
        return;
    };

    let sink = sink.unwrap_or_else(console_sink);
    let _ = channel
        .threshold
        .modify(|targets| *targets = Targets::new().with_target(LOG_TARGET, level));
    let _ = channel.sinks.modify(|sinks| sinks.push(sink));
}

fn console_sink() -> Sink {
    Box::new(
        tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_writer(std::io::stderr)
            .compact(),
    )
}
