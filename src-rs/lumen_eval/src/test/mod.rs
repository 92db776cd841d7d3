//! Host doubles for evaluator tests.

use std::{cell::Cell, rc::Rc};

use lumen_part::{Color, ColorSource, FieldExposure, FieldTable, Module, Part, Scalar, Toggle};

#[derive(Debug, Default)]
pub struct TestPart {
    modules: Vec<Rc<dyn Module>>,
}

impl TestPart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `module` to the end of the part and returns a handle for
    /// changing its live values.
    pub fn add(&mut self, module: TestModule) -> Rc<TestModule> {
        let module = Rc::new(module);
        self.modules.push(Rc::clone(&module) as Rc<dyn Module>);
        module
    }
}

impl Part for TestPart {
    fn part_name(&self) -> &str {
        "test part"
    }

    fn modules(&self) -> &[Rc<dyn Module>] {
        &self.modules
    }
}

/// A module whose capabilities are chosen by the test.
#[derive(Debug)]
pub struct TestModule {
    identifier: Option<String>,
    fields: FieldTable,
    toggle: Option<Cell<bool>>,
    scalar: Option<Cell<f64>>,
    color: Option<Color>,
}

impl TestModule {
    pub fn new(identifier: &str) -> Self {
        Self {
            identifier: Some(identifier.to_string()),
            ..Self::anonymous()
        }
    }

    pub fn anonymous() -> Self {
        Self {
            identifier: None,
            fields: FieldTable::new(),
            toggle: None,
            scalar: None,
            color: None,
        }
    }

    pub fn with_toggle(mut self, status: bool) -> Self {
        self.toggle = Some(Cell::new(status));
        self
    }

    pub fn with_scalar(mut self, value: f64) -> Self {
        self.scalar = Some(Cell::new(value));
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Registers a field with a fixed value.
    pub fn with_value(self, name: &str, exposure: FieldExposure, value: f64) -> Self {
        self.with_field(name, exposure, move || value)
    }

    /// Registers a field read through `reader`.
    pub fn with_field(
        mut self,
        name: &str,
        exposure: FieldExposure,
        reader: impl Fn() -> f64 + 'static,
    ) -> Self {
        self.fields = self.fields.with(name, exposure, reader);
        self
    }

    pub fn set_toggle(&self, status: bool) {
        if let Some(toggle) = &self.toggle {
            toggle.set(status);
        }
    }

    pub fn set_scalar(&self, value: f64) {
        if let Some(scalar) = &self.scalar {
            scalar.set(value);
        }
    }
}

impl Module for TestModule {
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

impl Toggle for TestModule {
    fn toggle_status(&self) -> bool {
        self.toggle.as_ref().is_some_and(Cell::get)
    }
}

impl Scalar for TestModule {
    fn scalar_value(&self) -> f64 {
        self.scalar.as_ref().map_or(0.0, Cell::get)
    }
}

impl ColorSource for TestModule {
    fn output_color(&self) -> Color {
        self.color.unwrap_or_default()
    }
}

/// A dynamic field value the test can change after parsing.
pub fn live_value(initial: f64) -> (Rc<Cell<f64>>, impl Fn() -> f64 + 'static) {
    let value = Rc::new(Cell::new(initial));
    let reader = {
        let value = Rc::clone(&value);
        move || value.get()
    };
    (value, reader)
}
