use std::fmt;

use lumen_parser::{Config, ParsedExpression, strip_whitespace};
use lumen_part::{Field, FieldExposure, Module, Part, find_module};

use crate::{EvalError, FieldProblem, function::Arity};

/// What a configuration string is parsed against.
///
/// `part` is searched for identifiers, `owner` is the module the string
/// belongs to (its fields are what `static(field)` and `scalar(field)` read),
/// and `config` bounds nesting.
#[derive(Clone, Copy)]
pub struct Scope<'a> {
    part: &'a dyn Part,
    owner: &'a dyn Module,
    config: Config,
    depth: usize,
}

impl<'a> Scope<'a> {
    /// Creates a scope with the default configuration.
    #[must_use]
    pub fn new(part: &'a dyn Part, owner: &'a dyn Module) -> Self {
        Self {
            part,
            owner,
            config: Config::default(),
            depth: 0,
        }
    }

    /// Returns a copy of this scope using `config`.
    #[must_use]
    pub const fn with_config(self, config: Config) -> Self {
        Self { config, ..self }
    }

    /// The part identifiers are resolved in.
    #[must_use]
    pub fn part(&self) -> &'a dyn Part {
        self.part
    }

    /// The module the configuration string belongs to.
    #[must_use]
    pub fn owner(&self) -> &'a dyn Module {
        self.owner
    }

    /// The parser configuration.
    #[must_use]
    pub const fn config(&self) -> Config {
        self.config
    }

    /// Returns the scope for the arguments of a call or the operand of `!`.
    pub(crate) const fn nested(self) -> Result<Self, EvalError> {
        let max_depth = self.config.max_depth;
        if self.depth >= max_depth {
            return Err(EvalError::TooDeep { max_depth });
        }
        Ok(Self {
            depth: self.depth + 1,
            ..self
        })
    }

    /// Resolves `static(field[, module])` or `scalar(field[, module])`.
    ///
    /// The field must be registered with exactly the `expected` exposure.
    pub(crate) fn field(
        &self,
        call: &ParsedExpression,
        expected: FieldExposure,
    ) -> Result<Field, EvalError> {
        let arguments = call.arguments();
        Arity::between(1, 2).check(call.function_name(), arguments.len())?;

        let name = strip_whitespace(&arguments[0]);
        let module_identifier = arguments.get(1).map(|module| strip_whitespace(module));

        let error = |problem| EvalError::InvalidFieldReference {
            field: name.clone(),
            module: module_identifier.clone(),
            problem,
        };

        let field = match &module_identifier {
            Some(identifier) => {
                let module = find_module(self.part, identifier)
                    .ok_or_else(|| error(FieldProblem::ModuleNotFound))?;
                module.fields().and_then(|fields| fields.get(&name)).cloned()
            }
            None => self.owner.fields().and_then(|fields| fields.get(&name)).cloned(),
        };
        let field = field.ok_or_else(|| error(FieldProblem::Missing))?;

        match field.exposure() {
            found if found == expected => Ok(field),
            FieldExposure::Hidden => Err(error(FieldProblem::NotExposed)),
            found => Err(error(FieldProblem::WrongExposure { expected, found })),
        }
    }
}

impl fmt::Debug for Scope<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scope")
            .field("part", &self.part.part_name())
            .field("owner", &self.owner)
            .field("config", &self.config)
            .field("depth", &self.depth)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use lumen_parser::ParsedExpression;

    use super::*;
    use crate::test::{TestModule, TestPart};

    fn call(text: &str) -> ParsedExpression {
        ParsedExpression::try_parse(text).expect("text should be a call")
    }

    fn part() -> (TestPart, std::rc::Rc<TestModule>) {
        let mut part = TestPart::new();
        let owner = part.add(
            TestModule::new("owner")
                .with_value("threshold", FieldExposure::Static, 5.0)
                .with_value("rate", FieldExposure::Dynamic, 2.0)
                .with_value("secret", FieldExposure::Hidden, 1.0),
        );
        part.add(TestModule::new("m2").with_value("limit", FieldExposure::Static, 9.0));
        (part, owner)
    }

    #[test]
    fn owner_field() {
        let (part, owner) = part();
        let scope = Scope::new(&part, &*owner);

        let field = scope
            .field(&call("static(threshold)"), FieldExposure::Static)
            .expect("field should resolve");
        assert_eq!(field.read(), 5.0);
    }

    #[test]
    fn other_module_field() {
        let (part, owner) = part();
        let scope = Scope::new(&part, &*owner);

        let field = scope
            .field(&call("static(limit, m2)"), FieldExposure::Static)
            .expect("field should resolve");
        assert_eq!(field.read(), 9.0);
    }

    #[test]
    fn field_problems() {
        let (part, owner) = part();
        let scope = Scope::new(&part, &*owner);

        let problem = |text: &str, expected| match scope.field(&call(text), expected) {
            Err(EvalError::InvalidFieldReference { problem, .. }) => problem,
            other => panic!("expected a field error, got {other:?}"),
        };

        assert_eq!(
            problem("static(missing)", FieldExposure::Static),
            FieldProblem::Missing
        );
        assert_eq!(
            problem("static(secret)", FieldExposure::Static),
            FieldProblem::NotExposed
        );
        assert_eq!(
            problem("static(rate)", FieldExposure::Static),
            FieldProblem::WrongExposure {
                expected: FieldExposure::Static,
                found: FieldExposure::Dynamic,
            }
        );
        assert_eq!(
            problem("scalar(limit, nowhere)", FieldExposure::Dynamic),
            FieldProblem::ModuleNotFound
        );
    }

    #[test]
    fn field_arity() {
        let (part, owner) = part();
        let scope = Scope::new(&part, &*owner);

        assert_eq!(
            scope
                .field(&call("static(a, b, c)"), FieldExposure::Static)
                .map(|field| field.read()),
            Err(EvalError::ArityMismatch {
                function: "static".to_string(),
                arity: Arity::between(1, 2),
                found: 3,
            })
        );
    }

    #[test]
    fn nesting_is_bounded() {
        let (part, owner) = part();
        let scope = Scope::new(&part, &*owner).with_config(Config::new().with_max_depth(2));

        let nested = scope
            .nested()
            .and_then(Scope::nested)
            .expect("two levels should be allowed");
        assert_eq!(
            nested.nested().map(|_| ()),
            Err(EvalError::TooDeep { max_depth: 2 })
        );
    }
}
