use std::rc::Rc;

use crate::Module;

/// A container of modules, searched in order by the identifier resolver.
///
/// The resolver never keeps the slice; it clones the `Rc` of whatever it
/// returns.
pub trait Part {
    /// A name for the part, used in diagnostics.
    fn part_name(&self) -> &str {
        "part"
    }

    /// The modules of the part, in enumeration order.
    fn modules(&self) -> &[Rc<dyn Module>];
}

impl Part for Vec<Rc<dyn Module>> {
    fn modules(&self) -> &[Rc<dyn Module>] {
        self
    }
}
