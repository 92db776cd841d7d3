//! A part assembled from module specs given on the command line.
//!
//! A spec is `id[:capability=value][,field=value[@exposure]]...`, for example
//! `fuel:scalar=7.5` or `m1,threshold=5@static,rate=2@dynamic`. Fields are
//! static unless tagged otherwise. An empty `id` gives a module without an
//! identifier.

use std::rc::Rc;

use lumen_parser::{parse_color, parse_number};
use lumen_part::{
    Color, ColorSource, Field, FieldExposure, FieldTable, Module, Part, Scalar, Toggle,
    find_module,
};
use lumen_shared::error::{AsLumenError, Context};
use thiserror::Error;
use tracing::debug;

const SPEC_GRAMMAR: &str = "module specs are written \
                            `id[:capability=value][,field=value[@static|@dynamic|@hidden]]...`";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpecError {
    #[error("unknown capability `{capability}`")]
    UnknownCapability { spec: String, capability: String },
    #[error("`{value}` is not a valid {expected}")]
    InvalidValue {
        spec: String,
        value: String,
        expected: &'static str,
    },
    #[error("field `{field}` is not written as `name=value`")]
    InvalidField { spec: String, field: String },
    #[error("unknown field exposure `{exposure}`")]
    UnknownExposure { spec: String, exposure: String },
    #[error("no module has the identifier `{identifier}`")]
    UnknownOwner { identifier: String },
}

impl SpecError {
    /// The command line argument the error was found in.
    pub fn source_text(&self) -> &str {
        match self {
            Self::UnknownCapability { spec, .. }
            | Self::InvalidValue { spec, .. }
            | Self::InvalidField { spec, .. }
            | Self::UnknownExposure { spec, .. } => spec,
            Self::UnknownOwner { identifier } => identifier,
        }
    }
}

impl AsLumenError for SpecError {
    fn message(&self) -> String {
        self.to_string()
    }

    fn context(&self) -> Vec<Context> {
        match self {
            Self::UnknownCapability { .. } => vec![
                Context::Note("capabilities are `toggle`, `scalar` and `color`".to_string()),
                Context::Help(SPEC_GRAMMAR.to_string()),
            ],
            Self::InvalidValue { .. } | Self::InvalidField { .. } => {
                vec![Context::Help(SPEC_GRAMMAR.to_string())]
            }
            Self::UnknownExposure { .. } => vec![Context::Note(
                "exposures are `static`, `dynamic` and `hidden`".to_string(),
            )],
            Self::UnknownOwner { .. } => vec![Context::Help(
                "pass the owner's spec with `--module`".to_string(),
            )],
        }
    }
}

/// A module described on the command line. Its values never change.
#[derive(Debug, Default)]
pub struct CliModule {
    identifier: Option<String>,
    fields: FieldTable,
    toggle: Option<bool>,
    scalar: Option<f64>,
    color: Option<Color>,
}

impl CliModule {
    pub fn parse(spec: &str) -> Result<Self, SpecError> {
        let mut segments = spec.split(',');
        let head = segments.next().unwrap_or_default();

        let (identifier, capability) = match head.split_once(':') {
            Some((identifier, capability)) => (identifier, Some(capability)),
            None => (head, None),
        };

        let identifier = identifier.trim();
        let mut module = Self {
            identifier: (!identifier.is_empty()).then(|| identifier.to_string()),
            ..Self::default()
        };

        if let Some(capability) = capability {
            module.set_capability(spec, capability)?;
        }

        for field in segments {
            module.add_field(spec, field)?;
        }

        debug!(spec, module = ?module, "parsed module spec");
        Ok(module)
    }

    fn set_capability(&mut self, spec: &str, capability: &str) -> Result<(), SpecError> {
        let invalid_value = |value: &str, expected| SpecError::InvalidValue {
            spec: spec.to_string(),
            value: value.to_string(),
            expected,
        };

        let (name, value) = capability.split_once('=').unwrap_or((capability, ""));
        let value = value.trim();

        match name.trim() {
            "toggle" => {
                let status = value
                    .parse()
                    .map_err(|_| invalid_value(value, "toggle status"))?;
                self.toggle = Some(status);
            }
            "scalar" => {
                let number = parse_number(value).ok_or_else(|| invalid_value(value, "number"))?;
                self.scalar = Some(number);
            }
            "color" => {
                let channels = parse_color(value).ok_or_else(|| invalid_value(value, "color"))?;
                self.color = Some(Color::from_rgba8(channels));
            }
            name => {
                return Err(SpecError::UnknownCapability {
                    spec: spec.to_string(),
                    capability: name.to_string(),
                });
            }
        }

        Ok(())
    }

    fn add_field(&mut self, spec: &str, field: &str) -> Result<(), SpecError> {
        let (name, value) = field
            .split_once('=')
            .ok_or_else(|| SpecError::InvalidField {
                spec: spec.to_string(),
                field: field.to_string(),
            })?;

        let (value, exposure) = match value.split_once('@') {
            Some((value, exposure)) => (value, parse_exposure(spec, exposure)?),
            None => (value, FieldExposure::Static),
        };

        let number = parse_number(value).ok_or_else(|| SpecError::InvalidValue {
            spec: spec.to_string(),
            value: value.to_string(),
            expected: "number",
        })?;

        self.fields
            .insert(name.trim(), Field::new(exposure, move || number));
        Ok(())
    }
}

fn parse_exposure(spec: &str, exposure: &str) -> Result<FieldExposure, SpecError> {
    match exposure.trim() {
        "static" => Ok(FieldExposure::Static),
        "dynamic" => Ok(FieldExposure::Dynamic),
        "hidden" => Ok(FieldExposure::Hidden),
        exposure => Err(SpecError::UnknownExposure {
            spec: spec.to_string(),
            exposure: exposure.to_string(),
        }),
    }
}

impl Module for CliModule {
    fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }

    fn fields(&self) -> Option<&FieldTable> {
        Some(&self.fields)
    }

    fn as_toggle(self: Rc<Self>) -> Option<Rc<dyn Toggle>> {
        self.toggle.is_some().then(|| self as Rc<dyn Toggle>)
    }

    fn as_scalar(self: Rc<Self>) -> Option<Rc<dyn Scalar>> {
        self.scalar.is_some().then(|| self as Rc<dyn Scalar>)
    }

    fn as_color_source(self: Rc<Self>) -> Option<Rc<dyn ColorSource>> {
        self.color.is_some().then(|| self as Rc<dyn ColorSource>)
    }
}

impl Toggle for CliModule {
    fn toggle_status(&self) -> bool {
        self.toggle.unwrap_or_default()
    }
}

impl Scalar for CliModule {
    fn scalar_value(&self) -> f64 {
        self.scalar.unwrap_or_default()
    }
}

impl ColorSource for CliModule {
    fn output_color(&self) -> Color {
        self.color.unwrap_or_default()
    }
}

/// The modules given with `--module`, in command line order.
#[derive(Debug, Default)]
pub struct CliPart {
    modules: Vec<Rc<dyn Module>>,
}

impl CliPart {
    pub fn from_specs(specs: &[String]) -> Result<Self, SpecError> {
        let modules = specs
            .iter()
            .map(|spec| CliModule::parse(spec).map(|module| Rc::new(module) as Rc<dyn Module>))
            .collect::<Result<_, _>>()?;
        Ok(Self { modules })
    }

    /// Returns the module with `identifier`, or the first module if no
    /// identifier is given. A part without modules is owned by an empty
    /// module.
    pub fn owner(&self, identifier: Option<&str>) -> Result<Rc<dyn Module>, SpecError> {
        match identifier {
            Some(identifier) => {
                find_module(self, identifier).ok_or_else(|| SpecError::UnknownOwner {
                    identifier: identifier.to_string(),
                })
            }
            None => Ok(self
                .modules
                .first()
                .map_or_else(|| Rc::new(CliModule::default()) as Rc<dyn Module>, Rc::clone)),
        }
    }
}

impl Part for CliPart {
    fn part_name(&self) -> &str {
        "command line part"
    }

    fn modules(&self) -> &[Rc<dyn Module>] {
        &self.modules
    }
}
