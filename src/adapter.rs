//! Adapter: one wrapped API behind a uniform call interface
//!
//! An [`Adapter`] ties a catalogue to a dispatcher. A call looks up the
//! operation, builds its request (or answers it locally) and returns a
//! [`ResultValue`]; nothing escapes as an `Err`.

use std::sync::Arc;

use crate::config::{AdapterConfig, AdapterKind, Config};
use crate::dispatch::{Dispatcher, ResultValue};
use crate::params::{self, Arguments, Prepared};
use crate::tools::{self, time, Operation};
use crate::transport::{HttpTransport, Transport};
use crate::{Error, Result};

pub struct Adapter {
    kind: AdapterKind,
    dispatcher: Dispatcher,
}

impl Adapter {
    pub fn new(kind: AdapterKind, transport: Arc<dyn Transport>) -> Self {
        Self {
            kind,
            dispatcher: Dispatcher::new(transport),
        }
    }

    /// Build the adapter with a real HTTP client, reading its key from the environment
    pub fn from_config(kind: AdapterKind, config: &Config) -> Result<Self> {
        let adapter_config = AdapterConfig::from_env(kind, config)?;
        let transport = HttpTransport::new(&adapter_config)?;
        tracing::info!(
            adapter = %kind,
            base_url = %adapter_config.root,
            operations = tools::catalogue(kind).len(),
            "Adapter ready"
        );
        Ok(Self::new(kind, Arc::new(transport)))
    }

    pub fn kind(&self) -> AdapterKind {
        self.kind
    }

    pub fn operations(&self) -> &'static [Operation] {
        tools::catalogue(self.kind)
    }

    /// Invoke an operation by name
    pub async fn call(&self, name: &str, args: &Arguments) -> ResultValue {
        let Some(op) = tools::find(self.kind, name) else {
            return self.reject(name, Error::UnknownOperation(name.to_string()));
        };

        match params::build(op, args) {
            Ok(Prepared::Request(request)) => {
                tracing::debug!(adapter = %self.kind, operation = name, "Calling remote API");
                self.dispatcher.dispatch(&request).await
            }
            Ok(Prepared::Local(local, inputs)) => match time::run(local, &inputs) {
                Ok(text) => ResultValue::Text(text),
                Err(e) => self.reject(name, e),
            },
            Err(e) => self.reject(name, e),
        }
    }

    fn reject(&self, name: &str, error: Error) -> ResultValue {
        if error.is_local() {
            tracing::info!(adapter = %self.kind, operation = name, error = %error, "Rejected call");
        } else {
            tracing::warn!(adapter = %self.kind, operation = name, error = %error, "Call failed");
        }
        ResultValue::Failure(error)
    }

    /// Invoke an operation and render the outcome as caller-facing text
    pub async fn call_text(&self, name: &str, args: &Arguments) -> (String, bool) {
        let result = self.call(name, args).await;
        (result.render(self.kind.failure_style()), result.is_failure())
    }
}
