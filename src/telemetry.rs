use tracing::{subscriber::{set_global_default, SetGlobalDefaultError}, Subscriber};
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::{fmt::MakeWriter, layer::SubscriberExt, EnvFilter, Registry};

/// Composes the bunyan formatted subscriber used for all diagnostic output.
///
/// `RUST_LOG` takes precedence over `env_filter` when it is set. `sink` decides
/// where the JSON lines end up (stdout for the binary, a sink or buffer in tests).
pub fn get_subscriber<Sink>(
    name: String,
    env_filter: String,
    sink: Sink
) -> impl Subscriber + Send + Sync
where
    Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let env_filter = EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new(env_filter));
    let formatting_layer = BunyanFormattingLayer::new(name, sink);

    Registry::default()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(formatting_layer)
}

// Register subscriber as the global default, once per process
pub fn init_subscriber(subscriber: impl Subscriber + Send + Sync) -> Result<(), SetGlobalDefaultError>{
    set_global_default(subscriber)
}
