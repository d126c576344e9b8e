//! Ansible binary-module plumbing: args file in, one JSON result out.

use std::path::Path;

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, error};

use crate::ensure::ensure_release;
use crate::error::ModuleError;
use crate::logging;
use crate::model::{FailureReport, ModuleResult, ReleaseParams};
use crate::remote::{BodhiClient, ConnectOptions, ReleaseApi};

/// One parsed module invocation.
#[derive(Clone, Debug)]
pub struct ModuleInvocation {
    pub params: ReleaseParams,
    pub check_mode: bool,
    pub verbosity: u8,
}

impl ModuleInvocation {
    pub fn from_args_file(path: &Path) -> Result<Self, ModuleError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ModuleError::ArgsFile {
            path: path.display().to_string(),
            source,
        })?;
        let value: Value = serde_json::from_str(&raw)?;
        Self::from_json(value)
    }

    /// Accepts the parameters at top level or nested under `ANSIBLE_MODULE_ARGS`.
    pub fn from_json(value: Value) -> Result<Self, ModuleError> {
        let Value::Object(mut root) = value else {
            return Err(ModuleError::InvalidArguments(
                "module arguments must be a JSON object".to_string(),
            ));
        };

        let args: Map<String, Value> = match root.remove("ANSIBLE_MODULE_ARGS") {
            Some(Value::Object(inner)) => inner,
            Some(_) => {
                return Err(ModuleError::InvalidArguments(
                    "ANSIBLE_MODULE_ARGS must be a JSON object".to_string(),
                ));
            }
            None => root,
        };

        let check_mode = args
            .get("_ansible_check_mode")
            .and_then(Value::as_bool)
            .unwrap_or(false);
        let verbosity = args
            .get("_ansible_verbosity")
            .and_then(Value::as_u64)
            .map(|v| u8::try_from(v).unwrap_or(u8::MAX))
            .unwrap_or(0);

        let params = ReleaseParams::from_args(&args)?;
        Ok(Self {
            params,
            check_mode,
            verbosity,
        })
    }
}

/// What the module prints on stdout.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ModuleResponse {
    Exit(ModuleResult),
    Fail(FailureReport),
}

impl ModuleResponse {
    pub fn failed(err: &ModuleError) -> Self {
        ModuleResponse::Fail(FailureReport::new(err.failure_message()))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, ModuleResponse::Fail(_))
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            r#"{"failed":true,"changed":false,"msg":"failed to serialize module result"}"#
                .to_string()
        })
    }
}

/// Connects with `connect`, then ensures the release.
///
/// A connect failure ends the run before any request is made.
pub fn run_module<C, F>(invocation: &ModuleInvocation, connect: F) -> ModuleResponse
where
    C: ReleaseApi,
    F: FnOnce(&ConnectOptions) -> Result<C, ModuleError>,
{
    let outcome = connect(&invocation.params.connect_options()).and_then(|client| {
        ensure_release(&client, &invocation.params, invocation.check_mode)
    });

    match outcome {
        Ok(result) => ModuleResponse::Exit(result),
        Err(err) => {
            error!(release = %invocation.params.name, "{:#}", err);
            ModuleResponse::failed(&err)
        }
    }
}

pub fn connect_bodhi(options: &ConnectOptions) -> Result<BodhiClient, ModuleError> {
    debug!(url = %options.base_url, user = %options.username, "connecting to bodhi");
    BodhiClient::new(options).map_err(|e| ModuleError::ClientUnavailable(format!("{:#}", e)))
}

/// Full module run for the args file Ansible handed over.
pub fn execute(args_path: &Path) -> ModuleResponse {
    let invocation = match ModuleInvocation::from_args_file(args_path) {
        Ok(invocation) => invocation,
        Err(err) => {
            logging::init(logging::LOG_ENV, "warn");
            error!("{}", err);
            return ModuleResponse::failed(&err);
        }
    };

    logging::init(
        logging::LOG_ENV,
        logging::verbosity_directive(invocation.verbosity),
    );
    run_module(&invocation, connect_bodhi)
}

#[cfg(test)]
#[path = "tests/module_runtime_tests.rs"]
mod tests;
