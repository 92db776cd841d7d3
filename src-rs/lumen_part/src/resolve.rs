//! Identifier resolution against the modules of a part.

use std::rc::Rc;

use tracing::warn;

use crate::{Capability, Module, Part};

/// Finds the first module of `part` that has capability `T` and matches
/// `identifier`.
///
/// A blank identifier matches any module; otherwise the identifier must equal
/// the module's identifier exactly. Modules are searched in part order.
///
/// Logs a warning when nothing matches.
pub fn find_first<T: Capability + ?Sized>(part: &dyn Part, identifier: &str) -> Option<Rc<T>> {
    let found = part
        .modules()
        .iter()
        .filter(|module| matches_identifier(module, identifier))
        .find_map(T::extract);

    if found.is_none() {
        warn!(
            part = part.part_name(),
            capability = T::NAME,
            identifier,
            "no matching module found"
        );
    }

    found
}

/// Finds every module of `part` that has capability `T` and matches
/// `identifier`, in part order.
///
/// Returns an empty list (and logs a warning) when nothing matches.
pub fn find_all<T: Capability + ?Sized>(part: &dyn Part, identifier: &str) -> Vec<Rc<T>> {
    let found: Vec<_> = part
        .modules()
        .iter()
        .filter(|module| matches_identifier(module, identifier))
        .filter_map(T::extract)
        .collect();

    if found.is_empty() {
        warn!(
            part = part.part_name(),
            capability = T::NAME,
            identifier,
            "no matching modules found"
        );
    }

    found
}

/// Finds the first module of `part` matching `identifier`, whatever its
/// capabilities.
pub fn find_module(part: &dyn Part, identifier: &str) -> Option<Rc<dyn Module>> {
    find_first::<dyn Module>(part, identifier)
}

fn matches_identifier(module: &Rc<dyn Module>, identifier: &str) -> bool {
    identifier.trim().is_empty() || module.identifier() == Some(identifier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Scalar, Toggle};

    #[derive(Debug)]
    struct Light {
        id: Option<&'static str>,
        on: bool,
    }

    impl Module for Light {
        fn identifier(&self) -> Option<&str> {
            self.id
        }

        fn as_toggle(self: Rc<Self>) -> Option<Rc<dyn Toggle>> {
            Some(self)
        }
    }

    impl Toggle for Light {
        fn toggle_status(&self) -> bool {
            self.on
        }
    }

    #[derive(Debug)]
    struct Gauge {
        id: &'static str,
        value: f64,
    }

    impl Module for Gauge {
        fn identifier(&self) -> Option<&str> {
            Some(self.id)
        }

        fn as_scalar(self: Rc<Self>) -> Option<Rc<dyn Scalar>> {
            Some(self)
        }
    }

    impl Scalar for Gauge {
        fn scalar_value(&self) -> f64 {
            self.value
        }
    }

    fn part() -> Vec<Rc<dyn Module>> {
        vec![
            Rc::new(Gauge {
                id: "fuel",
                value: 7.5,
            }),
            Rc::new(Light { id: None, on: true }),
            Rc::new(Light {
                id: Some("fuel"),
                on: false,
            }),
            Rc::new(Light {
                id: Some("gear"),
                on: true,
            }),
        ]
    }

    #[test]
    fn blank_identifier_matches_first_with_capability() {
        let part = part();
        let toggle = find_first::<dyn Toggle>(&part, "").expect("toggle should be found");
        assert!(toggle.toggle_status());

        let toggle = find_first::<dyn Toggle>(&part, "   ").expect("toggle should be found");
        assert!(toggle.toggle_status());
    }

    #[test]
    fn identifier_must_match_exactly() {
        let part = part();
        let toggle = find_first::<dyn Toggle>(&part, "fuel").expect("toggle should be found");
        assert!(!toggle.toggle_status());

        assert!(find_first::<dyn Toggle>(&part, "Fuel").is_none());
        assert!(find_first::<dyn Toggle>(&part, "fue").is_none());
    }

    #[test]
    fn capability_filters_candidates() {
        let part = part();
        let scalar = find_first::<dyn Scalar>(&part, "fuel").expect("scalar should be found");
        assert_eq!(scalar.scalar_value(), 7.5);

        assert!(find_first::<dyn Scalar>(&part, "gear").is_none());
    }

    #[test]
    fn find_all_keeps_part_order() {
        let part = part();
        let statuses: Vec<_> = find_all::<dyn Toggle>(&part, "")
            .iter()
            .map(|toggle| toggle.toggle_status())
            .collect();
        assert_eq!(statuses, [true, false, true]);
    }

    #[test]
    fn find_all_is_empty_on_miss() {
        let part = part();
        assert!(find_all::<dyn Toggle>(&part, "missing").is_empty());
        assert!(find_all::<dyn Scalar>(&part, "gear").is_empty());
    }

    #[test]
    fn find_module_ignores_capabilities() {
        let part = part();
        let module = find_module(&part, "fuel").expect("module should be found");
        assert!(Rc::ptr_eq(&module, &part[0]));
    }

    #[test]
    fn resolved_handle_is_the_module_itself() {
        let part = part();
        let module = find_module(&part, "gear").expect("module should be found");
        let toggle = find_first::<dyn Toggle>(&part, "gear").expect("toggle should be found");
        assert!(std::ptr::addr_eq(Rc::as_ptr(&module), Rc::as_ptr(&toggle)));
    }
}
