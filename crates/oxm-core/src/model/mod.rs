pub mod class;
pub mod dependency;
pub mod document;
pub mod style;

pub use class::{UmlAttribute, UmlClass};
pub use dependency::{Dependency, DependencyKind};
pub use document::{ModelDocument, Package, RootClass};
pub use style::{AttributeStyle, CompositionKind};
