// Dynamic method table for hosts with an untyped calling convention

use log::debug;
use serde_json::Value;

use super::args::CallArgs;
use super::DrumKit;
use crate::config::EngineConfig;
use crate::engine::{DirectoryEngine, DrumKitEngine};
use crate::error::{log_binding_error, BindingError, EngineError};

/// Name the facade class is registered under in the host.
pub const CLASS_NAME: &str = "DrumKit";

/// Instance methods exposed to the host, keyed by their host-side names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Start,
    Stop,
    IsStarted,
    GetDataLocation,
    GetVersion,
    EnableMetronome,
    ChangeClickVolume,
    GetKitsNames,
}

impl Method {
    pub const ALL: [Method; 8] = [
        Method::Start,
        Method::Stop,
        Method::IsStarted,
        Method::GetDataLocation,
        Method::GetVersion,
        Method::EnableMetronome,
        Method::ChangeClickVolume,
        Method::GetKitsNames,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Method::Start => "start",
            Method::Stop => "stop",
            Method::IsStarted => "isStarted",
            Method::GetDataLocation => "getDataLocation",
            Method::GetVersion => "getVersion",
            Method::EnableMetronome => "enableMetronome",
            Method::ChangeClickVolume => "changeClickVolume",
            Method::GetKitsNames => "getKitsNames",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|method| method.name() == name)
    }
}

impl DrumKit {
    /// Construct from untyped host arguments using the default engine.
    ///
    /// Expects one string argument (the data location).
    pub fn construct(args: &[Value], config: &EngineConfig) -> Result<Self, BindingError> {
        Self::construct_with(args, |data_location| {
            DirectoryEngine::new(data_location, config)
        })
    }

    /// Construct from untyped host arguments with a caller-provided engine factory.
    ///
    /// The factory only runs once the arguments have been validated.
    pub fn construct_with<E, F>(args: &[Value], factory: F) -> Result<Self, BindingError>
    where
        E: DrumKitEngine + 'static,
        F: FnOnce(&str) -> Result<E, EngineError>,
    {
        let result = CallArgs::new(CLASS_NAME, args)
            .string(0)
            .and_then(|data_location| Ok(factory(data_location)?));

        match result {
            Ok(engine) => Ok(Self::with_engine(Box::new(engine))),
            Err(err) => {
                log_binding_error(&err, CLASS_NAME);
                Err(err)
            }
        }
    }

    /// Call `method` with untyped host arguments.
    ///
    /// Returns `Value::Null` for operations without a result.
    pub fn invoke(&mut self, method: &str, args: &[Value]) -> Result<Value, BindingError> {
        debug!("[DrumKit] invoke {} with {} argument(s)", method, args.len());

        let result = match Method::from_name(method) {
            Some(resolved) => self.call(resolved, &CallArgs::new(method, args)),
            None => Err(BindingError::UnknownMethod {
                method: method.to_string(),
            }),
        };

        if let Err(err) = &result {
            log_binding_error(err, method);
        }
        result
    }

    fn call(&mut self, method: Method, args: &CallArgs<'_>) -> Result<Value, BindingError> {
        match method {
            Method::Start => self.start().map(|_| Value::Null),
            Method::Stop => self.stop().map(|_| Value::Null),
            Method::IsStarted => Ok(Value::Bool(self.is_started())),
            Method::GetDataLocation => Ok(Value::String(self.get_data_location())),
            Method::GetVersion => Ok(Value::String(self.get_version())),
            Method::EnableMetronome => {
                let enabled = args.boolean(0)?;
                self.enable_metronome(enabled).map(|_| Value::Null)
            }
            Method::ChangeClickVolume => {
                let level = args.number(0)?;
                self.change_click_volume(level).map(|_| Value::Null)
            }
            Method::GetKitsNames => {
                let names = self.get_kits_names()?;
                Ok(Value::Array(names.into_iter().map(Value::String).collect()))
            }
        }
    }
}
