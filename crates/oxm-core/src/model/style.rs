use std::fmt;

/// Composition combinator keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompositionKind {
    OneOf,
    AllOf,
    AnyOf,
}

impl CompositionKind {
    pub const ALL: [CompositionKind; 3] = [
        CompositionKind::OneOf,
        CompositionKind::AllOf,
        CompositionKind::AnyOf,
    ];

    pub fn keyword(self) -> &'static str {
        match self {
            CompositionKind::OneOf => "oneOf",
            CompositionKind::AllOf => "allOf",
            CompositionKind::AnyOf => "anyOf",
        }
    }
}

impl fmt::Display for CompositionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Extended type information carried by an attribute (or as a class-level
/// alias) beyond what the declared base type can express.
///
/// The underlying document format has no native union or array-of-reference
/// type, so this is encoded textually in the `style` tagged value. The
/// variants exist so the engine never does string surgery internally; text
/// appears only at the document boundary via [`render`](Self::render) and
/// [`parse`](Self::parse).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeStyle {
    /// Free text passed through unchanged: the declared `format`, a bare
    /// type-name fallback, or empty.
    Plain(String),
    /// A reference to another class by name.
    Reference(String),
    /// Array element type, a class name or a primitive.
    ArrayOf(String),
    /// Composition member class names, order-preserving.
    Composition(CompositionKind, Vec<String>),
    /// A bounded-length string.
    BoundedString(u64),
}

impl AttributeStyle {
    /// An empty pass-through style.
    pub fn empty() -> Self {
        AttributeStyle::Plain(String::new())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, AttributeStyle::Plain(text) if text.is_empty())
    }

    /// Serialize to the textual grammar.
    pub fn render(&self) -> String {
        match self {
            AttributeStyle::Plain(text) => text.clone(),
            AttributeStyle::Reference(name) => name.clone(),
            AttributeStyle::ArrayOf(element) => format!("Array of {element}"),
            AttributeStyle::Composition(kind, names) => {
                format!("{} {}", kind.keyword(), names.join(", "))
            }
            AttributeStyle::BoundedString(n) => format!("string({n})"),
        }
    }

    /// Parse the textual grammar. Total: text matching none of the shaped
    /// forms comes back as `Plain`; whether a plain token names a class is
    /// for the consumer to resolve against its registry.
    pub fn parse(text: &str) -> AttributeStyle {
        let text = text.trim();
        for kind in CompositionKind::ALL {
            if let Some(rest) = text.strip_prefix(kind.keyword()) {
                let names = rest
                    .split(',')
                    .map(|token| token.trim().to_string())
                    .filter(|token| !token.is_empty())
                    .collect();
                return AttributeStyle::Composition(kind, names);
            }
        }
        if let Some(rest) = text.strip_prefix("Array of ") {
            return AttributeStyle::ArrayOf(rest.trim().to_string());
        }
        if let Some(n) = text
            .strip_prefix("string(")
            .and_then(|rest| rest.strip_suffix(')'))
            .and_then(|digits| digits.parse::<u64>().ok())
        {
            return AttributeStyle::BoundedString(n);
        }
        AttributeStyle::Plain(text.to_string())
    }
}
