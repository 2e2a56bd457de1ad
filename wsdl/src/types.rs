use std::collections::BTreeMap;

/// The literal `maxOccurs` value for an open upper bound.
pub const UNBOUNDED: &str = "unbounded";

/// A `prefix:local` name as written in the document. Prefixes are kept
/// verbatim and never resolved against namespace declarations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QualifiedName<'a> {
    pub prefix: Option<&'a str>,
    pub local: &'a str,
}

/// A decoded WSDL document, rooted at `definitions`.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub name: String,
    pub target_namespace: String,
    pub soap_env: String,
    pub soap_enc: String,
    /// Namespace declarations on the root element, keyed by prefix. The
    /// default namespace uses the empty prefix.
    pub namespaces: BTreeMap<String, String>,
    pub service: Service,
    pub imports: Vec<Import>,
    pub schema: Schema,
    pub messages: Vec<Message>,
    pub port_type: PortType,
    pub binding: Binding,
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Service {
    pub doc: String,
    pub ports: Vec<Port>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Port {
    pub name: String,
    pub binding: String,
    pub address: Address,
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub location: String,
}

/// A document-level `import`.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Import {
    pub namespace: String,
    pub location: String,
}

/// A schema-level `import`; `location` comes from `schemaLocation`.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct ImportSchema {
    pub namespace: String,
    pub location: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    pub imports: Vec<ImportSchema>,
    pub simple_types: Vec<SimpleType>,
    pub complex_types: Vec<ComplexType>,
    pub elements: Vec<Element>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct SimpleType {
    pub name: String,
    pub union: Option<Union>,
    pub restriction: Option<Restriction>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Union {
    /// Member type names, unsplit.
    pub member_types: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Restriction {
    pub base: String,
    pub enumeration: Vec<Enum>,
    pub attribute: Option<RestrictionAttr>,
}

/// The populated half of a [`Restriction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestrictionContent<'a> {
    Enumeration(&'a [Enum]),
    Attribute(&'a RestrictionAttr),
    Empty,
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Enum {
    pub value: String,
}

/// An `<attribute ref="...">` under a restriction. `key` is the local
/// part of `ref`; `value` is the element's own attribute named `key`.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct RestrictionAttr {
    pub reference: String,
    pub key: String,
    pub value: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct ComplexType {
    pub name: String,
    pub is_abstract: bool,
    pub doc: String,
    pub all_elements: Vec<Element>,
    pub complex_content: Option<ComplexContent>,
    pub sequence: Option<Sequence>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct ComplexContent {
    pub extension: Option<Extension>,
    pub restriction: Option<Restriction>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Extension {
    pub base: String,
    pub sequence: Option<Sequence>,
}

/// Children of a `sequence` in declaration order.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    pub items: Vec<SequenceItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceItem {
    ComplexType(ComplexType),
    Element(Element),
    Any(AnyElement),
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub reference: String,
    pub ty: String,
    pub min: u32,
    /// `maxOccurs` as written: digits, [`UNBOUNDED`], or empty when absent.
    pub max: String,
    pub nillable: bool,
    pub complex_type: Option<Box<ComplexType>>,
}

/// Which declaration form an [`Element`] uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind<'a> {
    Ref(&'a str),
    Typed(&'a str),
    Inline(&'a ComplexType),
    Untyped,
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct AnyElement {
    pub min: u32,
    pub max: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub name: String,
    pub parts: Vec<Part>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Part {
    pub name: String,
    pub ty: String,
    pub element: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct PortType {
    pub name: String,
    pub operations: Vec<Operation>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    pub name: String,
    pub parameter_order: String,
    pub doc: String,
    pub input: Option<Io>,
    pub output: Option<Io>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Io {
    pub message: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub name: String,
    pub ty: String,
    pub soap_binding: Option<SoapBinding>,
    pub operations: Vec<BindingOperation>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct SoapBinding {
    pub style: String,
    pub transport: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct BindingOperation {
    pub name: String,
    pub operation: Option<SoapOperation>,
    pub input: Option<BindingIo>,
    pub output: Option<BindingIo>,
}

/// Some SOAP servers route on `soapAction` in addition to the body.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct SoapOperation {
    pub soap_action: String,
    pub style: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct BindingIo {
    pub parts: String,
    pub body_use: String,
}

impl<'a> QualifiedName<'a> {
    pub fn parse(prefixed_name: &'a str) -> Self {
        match prefixed_name.rsplit_once(':') {
            Some((prefix, local)) => Self {
                prefix: Some(prefix),
                local,
            },
            None => Self {
                prefix: None,
                local: prefixed_name,
            },
        }
    }
}

impl Restriction {
    pub fn content(&self) -> RestrictionContent<'_> {
        if let Some(attribute) = &self.attribute {
            RestrictionContent::Attribute(attribute)
        } else if !self.enumeration.is_empty() {
            RestrictionContent::Enumeration(&self.enumeration)
        } else {
            RestrictionContent::Empty
        }
    }
}

impl Sequence {
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.items.iter().filter_map(|item| match item {
            SequenceItem::Element(element) => Some(element),
            _ => None,
        })
    }
}

impl Element {
    /// `ref` wins over `type`, which wins over an inline complex type.
    pub fn kind(&self) -> ElementKind<'_> {
        if !self.reference.is_empty() {
            ElementKind::Ref(&self.reference)
        } else if !self.ty.is_empty() {
            ElementKind::Typed(&self.ty)
        } else if let Some(complex_type) = &self.complex_type {
            ElementKind::Inline(complex_type)
        } else {
            ElementKind::Untyped
        }
    }

    pub fn is_unbounded(&self) -> bool {
        self.max == UNBOUNDED
    }

    pub fn max_bound(&self) -> Option<u32> {
        max_bound(&self.max)
    }
}

impl AnyElement {
    pub fn is_unbounded(&self) -> bool {
        self.max == UNBOUNDED
    }

    pub fn max_bound(&self) -> Option<u32> {
        max_bound(&self.max)
    }
}

fn max_bound(max: &str) -> Option<u32> {
    max.trim().parse().ok()
}

impl Document {
    pub fn complex_type(&self, name: &str) -> Option<&ComplexType> {
        self.schema
            .complex_types
            .iter()
            .find(|complex_type| complex_type.name == name)
    }

    pub fn message(&self, name: &str) -> Option<&Message> {
        self.messages.iter().find(|message| message.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qualified_name_splits_on_last_colon() {
        assert_eq!(
            QualifiedName::parse("tns:arrayType"),
            QualifiedName {
                prefix: Some("tns"),
                local: "arrayType"
            }
        );
        assert_eq!(QualifiedName::parse("a:b:c").local, "c");
        assert_eq!(QualifiedName::parse("plain").prefix, None);
    }

    #[test]
    fn element_kind_prefers_ref() {
        let element = Element {
            reference: "tns:Item".into(),
            ty: "xsd:string".into(),
            ..Default::default()
        };
        assert_eq!(element.kind(), ElementKind::Ref("tns:Item"));

        let inline = Element {
            complex_type: Some(Box::default()),
            ..Default::default()
        };
        assert!(matches!(inline.kind(), ElementKind::Inline(_)));
        assert_eq!(Element::default().kind(), ElementKind::Untyped);
    }

    #[test]
    fn max_bound_keeps_sentinel_unbounded() {
        let element = Element {
            max: UNBOUNDED.into(),
            ..Default::default()
        };
        assert!(element.is_unbounded());
        assert_eq!(element.max_bound(), None);

        let any = AnyElement {
            min: 1,
            max: "5".into(),
        };
        assert!(!any.is_unbounded());
        assert_eq!(any.max_bound(), Some(5));
    }

    #[test]
    fn restriction_content_reports_populated_half() {
        let mut restriction = Restriction::default();
        assert_eq!(restriction.content(), RestrictionContent::Empty);

        restriction.enumeration.push(Enum { value: "A".into() });
        assert!(matches!(
            restriction.content(),
            RestrictionContent::Enumeration([Enum { value }]) if value == "A"
        ));
    }
}
