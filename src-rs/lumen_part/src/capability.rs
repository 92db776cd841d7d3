//! Capabilities that modules may offer and that expression trees produce.

use std::{fmt, rc::Rc};

use crate::{Color, FieldTable};

/// Something that reports a boolean status, re-read on every call.
pub trait Toggle: fmt::Debug {
    /// Returns the current status.
    fn toggle_status(&self) -> bool;
}

/// Something that reports a number, re-read on every call.
pub trait Scalar: fmt::Debug {
    /// Returns the current value.
    fn scalar_value(&self) -> f64;
}

/// Something that reports a color, re-read on every call.
pub trait ColorSource: fmt::Debug {
    /// Returns the current color.
    fn output_color(&self) -> Color;
}

/// A module on a part, as seen by the identifier resolver.
///
/// Capabilities are opt-in: a module that reports a boolean status overrides
/// [`Module::as_toggle`] to return itself, and so on. The methods take
/// `Rc<Self>` so that expression trees can keep a shared handle to the
/// module they read from.
pub trait Module: fmt::Debug {
    /// The identifier configuration strings use to name this module.
    ///
    /// Modules without an identifier can still be found by a blank lookup.
    fn identifier(&self) -> Option<&str> {
        None
    }

    /// The numeric fields this module registers for `static(...)` and
    /// `scalar(...)` references.
    fn fields(&self) -> Option<&FieldTable> {
        None
    }

    /// Returns this module as a toggle, if it is one.
    fn as_toggle(self: Rc<Self>) -> Option<Rc<dyn Toggle>> {
        None
    }

    /// Returns this module as a scalar, if it is one.
    fn as_scalar(self: Rc<Self>) -> Option<Rc<dyn Scalar>> {
        None
    }

    /// Returns this module as a color source, if it is one.
    fn as_color_source(self: Rc<Self>) -> Option<Rc<dyn ColorSource>> {
        None
    }
}

/// A capability the resolver can search a part for.
///
/// Implemented for the trait objects `dyn Toggle`, `dyn Scalar`,
/// `dyn ColorSource`, and `dyn Module` (any module at all).
pub trait Capability {
    /// The capability name used in diagnostics.
    const NAME: &'static str;

    /// Returns the module viewed as this capability, if it has it.
    fn extract(module: &Rc<dyn Module>) -> Option<Rc<Self>>;
}

impl Capability for dyn Module {
    const NAME: &'static str = "module";

    fn extract(module: &Rc<dyn Module>) -> Option<Rc<Self>> {
        Some(Rc::clone(module))
    }
}

impl Capability for dyn Toggle {
    const NAME: &'static str = "toggle";

    fn extract(module: &Rc<dyn Module>) -> Option<Rc<Self>> {
        Rc::clone(module).as_toggle()
    }
}

impl Capability for dyn Scalar {
    const NAME: &'static str = "scalar";

    fn extract(module: &Rc<dyn Module>) -> Option<Rc<Self>> {
        Rc::clone(module).as_scalar()
    }
}

impl Capability for dyn ColorSource {
    const NAME: &'static str = "color source";

    fn extract(module: &Rc<dyn Module>) -> Option<Rc<Self>> {
        Rc::clone(module).as_color_source()
    }
}
