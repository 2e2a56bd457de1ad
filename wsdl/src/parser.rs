use quick_xml::{
    events::{BytesStart, Event},
    Reader,
};
use std::io::BufRead;
use tracing::{debug, trace, warn};

use super::{
    error::{self, ErrorKind},
    options::{DecodeOptions, MissingRefPolicy},
    resolver::resolve_restriction_attr,
    types::{
        Address, AnyElement, Binding, BindingIo, BindingOperation, ComplexContent, ComplexType,
        Document, Element, Enum, Extension, Import, ImportSchema, Io, Message, Operation, Part,
        Port, PortType, QualifiedName, Restriction, RestrictionAttr, Schema, Sequence,
        SequenceItem, Service, SimpleType, SoapBinding, SoapOperation, Union,
    },
};

/// One child of the element currently being decoded.
enum Node {
    Element {
        name: String,
        start: BytesStart<'static>,
    },
    Text(String),
}

struct Parser<B: BufRead> {
    reader: Reader<B>,
    buffer: Vec<u8>,
    options: DecodeOptions,
    depth: usize,
}

fn parse_occurs(element: &str, value: &str) -> u32 {
    value.trim().parse().unwrap_or_else(|_| {
        warn!(element, value, "unreadable minOccurs, using 0");
        0
    })
}

fn parse_bool(element: &str, attribute: &str, value: &str) -> bool {
    match value.trim() {
        "true" | "1" => true,
        "false" | "0" => false,
        other => {
            warn!(element, attribute, value = other, "unreadable boolean, using false");
            false
        }
    }
}

impl<B: BufRead> Parser<B> {
    fn new(input: B, options: &DecodeOptions) -> Self {
        let mut reader = Reader::from_reader(input);
        reader.config_mut().expand_empty_elements = true;

        Self {
            reader,
            buffer: Vec::new(),
            options: options.clone(),
            depth: 0,
        }
    }

    /// A failure reported by the reader itself while reading an event.
    fn read_error(&self, source: quick_xml::Error) -> error::Error {
        error::Error::XmlParseError {
            position: self.reader.error_position() as u64,
            source,
        }
    }

    /// A failure decoding the event just read (names, attributes, text).
    /// Reported at the end of that event.
    fn syntax<E: Into<quick_xml::Error>>(&self, source: E) -> error::Error {
        error::Error::XmlParseError {
            position: self.reader.buffer_position() as u64,
            source: source.into(),
        }
    }

    fn local_name(&self, start: &BytesStart<'_>) -> Result<String, error::Error> {
        self.reader
            .decoder()
            .decode(start.local_name().as_ref())
            .map(|name| name.into_owned())
            .map_err(|err| self.syntax(err))
    }

    fn next_event(&mut self) -> Result<Event<'static>, error::Error> {
        let result = self
            .reader
            .read_event_into(&mut self.buffer)
            .map(Event::into_owned);
        self.buffer.clear();

        result.map_err(|err| self.read_error(err))
    }

    /// Consumes the rest of `start`'s subtree, including its end tag.
    fn skip(&mut self, start: &BytesStart<'_>) -> Result<(), error::Error> {
        let result = self.reader.read_to_end_into(start.name(), &mut self.buffer);
        self.buffer.clear();

        result.map(|_| ()).map_err(|err| self.read_error(err))
    }

    fn skip_unmodeled(
        &mut self,
        parent: &'static str,
        name: &str,
        start: &BytesStart<'_>,
    ) -> Result<(), error::Error> {
        trace!("FOUND {} INSIDE {} BLOCK, skipping", name, parent);
        self.skip(start)
    }

    /// Feeds each child of the open element `element` to `visit`, returning
    /// once its end tag is read. `visit` must consume every child element
    /// it is given.
    ///
    /// Every entity decoder descends through here, so this is where nesting
    /// is bounded by `max_depth`.
    fn children<F>(&mut self, element: &'static str, visit: F) -> Result<(), error::Error>
    where
        F: FnMut(&mut Self, Node) -> Result<(), error::Error>,
    {
        if self.depth >= self.options.max_depth {
            return Err(error::Error::DepthLimitExceeded {
                element: element.to_owned(),
                limit: self.options.max_depth,
            });
        }

        self.depth += 1;
        let result = self.visit_children(element, visit);
        self.depth -= 1;

        result
    }

    fn visit_children<F>(
        &mut self,
        element: &'static str,
        mut visit: F,
    ) -> Result<(), error::Error>
    where
        F: FnMut(&mut Self, Node) -> Result<(), error::Error>,
    {
        loop {
            match self.next_event()? {
                Event::Start(start) => {
                    let name = self.local_name(&start)?;
                    visit(self, Node::Element { name, start })?
                }

                Event::Text(text) => {
                    let text = text.unescape().map_err(|err| self.syntax(err))?;
                    visit(self, Node::Text(text.into_owned()))?
                }

                Event::CData(data) => {
                    let bytes = data.into_inner();
                    let text = self
                        .reader
                        .decoder()
                        .decode(&bytes)
                        .map_err(|err| self.syntax(err))?
                        .into_owned();
                    visit(self, Node::Text(text))?
                }

                Event::End(_) => return Ok(()),
                Event::Eof => return Err(error::Error::UnexpectedEof(element.to_owned())),

                _ => (),
            }
        }
    }

    /// Like [`Parser::children`] for elements whose only modeled content
    /// is text. Nested elements are skipped.
    fn text(&mut self, element: &'static str) -> Result<String, error::Error> {
        let mut result = String::new();

        self.children(element, |parser, node| match node {
            Node::Text(text) => {
                result.push_str(&text);
                Ok(())
            }
            Node::Element { name, start } => parser.skip_unmodeled(element, &name, &start),
        })?;

        Ok(result)
    }

    /// All attributes of `start` as `(qualified name, value)` pairs.
    fn attribute_pairs(&self, start: &BytesStart<'_>) -> Result<Vec<(String, String)>, error::Error> {
        let mut result = Vec::new();

        for attribute in start.attributes() {
            let attribute = attribute.map_err(|err| self.syntax(err))?;
            let key = self
                .reader
                .decoder()
                .decode(attribute.key.as_ref())
                .map_err(|err| self.syntax(err))?
                .into_owned();
            let value = attribute
                .unescape_value()
                .map_err(|err| self.syntax(err))?
                .into_owned();

            result.push((key, value));
        }

        Ok(result)
    }

    /// Looks up attributes by local name; the last occurrence wins.
    fn get_attributes<const N: usize>(
        &self,
        start: &BytesStart<'_>,
        names: [&'static str; N],
    ) -> Result<[Option<String>; N], error::Error> {
        const INIT: Option<String> = None;
        let mut result = [INIT; N];

        for (key, value) in self.attribute_pairs(start)? {
            let key = QualifiedName::parse(&key).local;

            for (index, name) in names.iter().enumerate() {
                if key == *name {
                    result[index] = Some(value);
                    break;
                }
            }
        }

        Ok(result)
    }

    fn parse(mut self) -> Result<Document, error::Error> {
        debug!("decoding WSDL document");

        let start = loop {
            match self.next_event()? {
                Event::Start(start) => break start,
                Event::Eof => return Err(error::Error::UnexpectedEof("definitions".to_owned())),
                _ => (),
            }
        };

        let name = self.local_name(&start)?;
        if name != "definitions" {
            return Err(error::Error::UnexpectedRootElement(name));
        }

        let mut document = Document::default();
        self.decode_definitions(start, &mut document)?;

        debug!(
            messages = document.messages.len(),
            simple_types = document.schema.simple_types.len(),
            complex_types = document.schema.complex_types.len(),
            "finished decoding WSDL document"
        );

        Ok(document)
    }

    fn decode_definitions(
        &mut self,
        start: BytesStart<'static>,
        document: &mut Document,
    ) -> Result<(), error::Error> {
        for (key, value) in self.attribute_pairs(&start)? {
            let QualifiedName { prefix, local } = QualifiedName::parse(&key);

            match (prefix, local) {
                (None, "xmlns") => {
                    document.namespaces.insert(String::new(), value.clone());
                }
                (Some("xmlns"), prefix) => {
                    document.namespaces.insert(prefix.to_owned(), value.clone());
                }
                _ => (),
            }

            match local {
                "name" => document.name = value,
                "targetNamespace" => document.target_namespace = value,
                "SOAP-ENV" => document.soap_env = value,
                "SOAP-ENC" => document.soap_enc = value,
                _ => (),
            }
        }

        self.children("definitions", |parser, node| {
            let (name, start) = match node {
                Node::Element { name, start } => (name, start),
                Node::Text(_) => return Ok(()),
            };

            match name.as_str() {
                "import" => {
                    let [namespace, location] =
                        parser.get_attributes(&start, ["namespace", "location"])?;

                    document.imports.push(Import {
                        namespace: namespace.unwrap_or_default(),
                        location: location.unwrap_or_default(),
                    });
                    parser.skip(&start)
                }

                "types" => parser.children("types", |parser, node| match node {
                    Node::Element { name, .. } if name == "schema" => {
                        parser.decode_schema(&mut document.schema)
                    }
                    Node::Element { name, start } => parser.skip_unmodeled("types", &name, &start),
                    Node::Text(_) => Ok(()),
                }),

                "message" => {
                    let mut message = Message::default();
                    parser.decode_message(start, &mut message)?;
                    document.messages.push(message);
                    Ok(())
                }

                "portType" => parser.decode_port_type(start, &mut document.port_type),
                "binding" => parser.decode_binding(start, &mut document.binding),
                "service" => parser.decode_service(&mut document.service),

                _ => parser.skip_unmodeled("definitions", &name, &start),
            }
        })
    }

    fn decode_schema(&mut self, schema: &mut Schema) -> Result<(), error::Error> {
        self.children("schema", |parser, node| {
            let (name, start) = match node {
                Node::Element { name, start } => (name, start),
                Node::Text(_) => return Ok(()),
            };

            match name.as_str() {
                "import" => {
                    let [namespace, location] =
                        parser.get_attributes(&start, ["namespace", "schemaLocation"])?;

                    schema.imports.push(ImportSchema {
                        namespace: namespace.unwrap_or_default(),
                        location: location.unwrap_or_default(),
                    });
                    parser.skip(&start)
                }

                "simpleType" => {
                    let mut simple_type = SimpleType::default();
                    parser.decode_simple_type(start, &mut simple_type)?;
                    schema.simple_types.push(simple_type);
                    Ok(())
                }

                "complexType" => {
                    let mut complex_type = ComplexType::default();
                    parser.decode_complex_type(start, &mut complex_type)?;
                    schema.complex_types.push(complex_type);
                    Ok(())
                }

                "element" => {
                    let mut element = Element::default();
                    parser.decode_element(start, &mut element)?;
                    schema.elements.push(element);
                    Ok(())
                }

                _ => parser.skip_unmodeled("schema", &name, &start),
            }
        })
    }

    fn decode_simple_type(
        &mut self,
        start: BytesStart<'static>,
        simple_type: &mut SimpleType,
    ) -> Result<(), error::Error> {
        let [name] = self.get_attributes(&start, ["name"])?;
        if let Some(name) = name {
            simple_type.name = name;
        }

        self.children("simpleType", |parser, node| {
            let (name, start) = match node {
                Node::Element { name, start } => (name, start),
                Node::Text(_) => return Ok(()),
            };

            match name.as_str() {
                "union" => {
                    let [member_types] = parser.get_attributes(&start, ["memberTypes"])?;
                    let union = simple_type.union.get_or_insert_with(Union::default);

                    if let Some(member_types) = member_types {
                        union.member_types = member_types;
                    }
                    parser.skip(&start)
                }

                "restriction" => {
                    let restriction = simple_type
                        .restriction
                        .get_or_insert_with(Restriction::default);
                    parser.decode_restriction(start, restriction)
                }

                _ => parser.skip_unmodeled("simpleType", &name, &start),
            }
        })
    }

    fn decode_restriction(
        &mut self,
        start: BytesStart<'static>,
        restriction: &mut Restriction,
    ) -> Result<(), error::Error> {
        let [base] = self.get_attributes(&start, ["base"])?;
        if let Some(base) = base {
            restriction.base = base;
        }

        self.children("restriction", |parser, node| {
            let (name, start) = match node {
                Node::Element { name, start } => (name, start),
                Node::Text(_) => return Ok(()),
            };

            match name.as_str() {
                "enumeration" => {
                    let [value] = parser.get_attributes(&start, ["value"])?;

                    restriction.enumeration.push(Enum {
                        value: value.unwrap_or_default(),
                    });
                    parser.skip(&start)
                }

                "attribute" => {
                    parser.decode_restriction_attr(&start, &mut restriction.attribute)?;
                    parser.skip(&start)
                }

                _ => parser.skip_unmodeled("restriction", &name, &start),
            }
        })
    }

    /// Hands the element's attribute set to the resolver. The caller skips
    /// the subtree whatever the outcome.
    fn decode_restriction_attr(
        &mut self,
        start: &BytesStart<'_>,
        attribute: &mut Option<RestrictionAttr>,
    ) -> Result<(), error::Error> {
        let pairs: Vec<(String, String)> = self
            .attribute_pairs(start)?
            .into_iter()
            .map(|(key, value)| (QualifiedName::parse(&key).local.to_owned(), value))
            .collect();

        match resolve_restriction_attr(&pairs) {
            Ok(resolved) => {
                *attribute = Some(resolved);
                Ok(())
            }

            Err(err)
                if err.kind() == ErrorKind::MissingRequiredAttribute
                    && self.options.missing_ref == MissingRefPolicy::Skip =>
            {
                warn!("dropping <attribute> without a usable ref inside restriction");
                Ok(())
            }

            Err(err) => Err(err),
        }
    }

    fn decode_complex_type(
        &mut self,
        start: BytesStart<'static>,
        complex_type: &mut ComplexType,
    ) -> Result<(), error::Error> {
        let [name, is_abstract] = self.get_attributes(&start, ["name", "abstract"])?;
        if let Some(name) = name {
            complex_type.name = name;
        }
        if let Some(is_abstract) = is_abstract {
            complex_type.is_abstract = parse_bool("complexType", "abstract", &is_abstract);
        }

        self.children("complexType", |parser, node| {
            let (name, start) = match node {
                Node::Element { name, start } => (name, start),
                Node::Text(_) => return Ok(()),
            };

            match name.as_str() {
                "annotation" => parser.children("annotation", |parser, node| match node {
                    Node::Element { name, .. } if name == "documentation" => {
                        complex_type.doc = parser.text("documentation")?;
                        Ok(())
                    }
                    Node::Element { name, start } => {
                        parser.skip_unmodeled("annotation", &name, &start)
                    }
                    Node::Text(_) => Ok(()),
                }),

                "all" => parser.children("all", |parser, node| match node {
                    Node::Element { name, start } if name == "element" => {
                        let mut element = Element::default();
                        parser.decode_element(start, &mut element)?;
                        complex_type.all_elements.push(element);
                        Ok(())
                    }
                    Node::Element { name, start } => parser.skip_unmodeled("all", &name, &start),
                    Node::Text(_) => Ok(()),
                }),

                "complexContent" => {
                    let content = complex_type
                        .complex_content
                        .get_or_insert_with(ComplexContent::default);
                    parser.decode_complex_content(content)
                }

                "sequence" => {
                    let sequence = complex_type.sequence.get_or_insert_with(Sequence::default);
                    parser.decode_sequence(sequence)
                }

                _ => parser.skip_unmodeled("complexType", &name, &start),
            }
        })
    }

    fn decode_complex_content(
        &mut self,
        content: &mut ComplexContent,
    ) -> Result<(), error::Error> {
        self.children("complexContent", |parser, node| {
            let (name, start) = match node {
                Node::Element { name, start } => (name, start),
                Node::Text(_) => return Ok(()),
            };

            match name.as_str() {
                "extension" => {
                    let extension = content.extension.get_or_insert_with(Extension::default);
                    parser.decode_extension(start, extension)
                }

                "restriction" => {
                    let restriction = content.restriction.get_or_insert_with(Restriction::default);
                    parser.decode_restriction(start, restriction)
                }

                _ => parser.skip_unmodeled("complexContent", &name, &start),
            }
        })
    }

    fn decode_extension(
        &mut self,
        start: BytesStart<'static>,
        extension: &mut Extension,
    ) -> Result<(), error::Error> {
        let [base] = self.get_attributes(&start, ["base"])?;
        if let Some(base) = base {
            extension.base = base;
        }

        self.children("extension", |parser, node| match node {
            Node::Element { name, .. } if name == "sequence" => {
                let sequence = extension.sequence.get_or_insert_with(Sequence::default);
                parser.decode_sequence(sequence)
            }
            Node::Element { name, start } => parser.skip_unmodeled("extension", &name, &start),
            Node::Text(_) => Ok(()),
        })
    }

    fn decode_sequence(&mut self, sequence: &mut Sequence) -> Result<(), error::Error> {
        self.children("sequence", |parser, node| {
            let (name, start) = match node {
                Node::Element { name, start } => (name, start),
                Node::Text(_) => return Ok(()),
            };

            match name.as_str() {
                "complexType" => {
                    let mut complex_type = ComplexType::default();
                    parser.decode_complex_type(start, &mut complex_type)?;
                    sequence.items.push(SequenceItem::ComplexType(complex_type));
                    Ok(())
                }

                "element" => {
                    let mut element = Element::default();
                    parser.decode_element(start, &mut element)?;
                    sequence.items.push(SequenceItem::Element(element));
                    Ok(())
                }

                "any" => {
                    let [min, max] = parser.get_attributes(&start, ["minOccurs", "maxOccurs"])?;

                    sequence.items.push(SequenceItem::Any(AnyElement {
                        min: min.map_or(0, |min| parse_occurs("any", &min)),
                        max: max.unwrap_or_default(),
                    }));
                    parser.skip(&start)
                }

                _ => parser.skip_unmodeled("sequence", &name, &start),
            }
        })
    }

    fn decode_element(
        &mut self,
        start: BytesStart<'static>,
        element: &mut Element,
    ) -> Result<(), error::Error> {
        let [name, reference, ty, min, max, nillable] = self.get_attributes(
            &start,
            ["name", "ref", "type", "minOccurs", "maxOccurs", "nillable"],
        )?;

        if let Some(name) = name {
            element.name = name;
        }
        if let Some(reference) = reference {
            element.reference = reference;
        }
        if let Some(ty) = ty {
            element.ty = ty;
        }
        if let Some(min) = min {
            element.min = parse_occurs("element", &min);
        }
        if let Some(max) = max {
            element.max = max;
        }
        if let Some(nillable) = nillable {
            element.nillable = parse_bool("element", "nillable", &nillable);
        }

        self.children("element", |parser, node| match node {
            Node::Element { name, start } if name == "complexType" => {
                let complex_type = element
                    .complex_type
                    .get_or_insert_with(Box::<ComplexType>::default);
                parser.decode_complex_type(start, complex_type)
            }
            Node::Element { name, start } => parser.skip_unmodeled("element", &name, &start),
            Node::Text(_) => Ok(()),
        })
    }

    fn decode_message(
        &mut self,
        start: BytesStart<'static>,
        message: &mut Message,
    ) -> Result<(), error::Error> {
        let [name] = self.get_attributes(&start, ["name"])?;
        if let Some(name) = name {
            message.name = name;
        }

        self.children("message", |parser, node| match node {
            Node::Element { name, start } if name == "part" => {
                let [name, ty, element] =
                    parser.get_attributes(&start, ["name", "type", "element"])?;

                message.parts.push(Part {
                    name: name.unwrap_or_default(),
                    ty: ty.unwrap_or_default(),
                    element: element.unwrap_or_default(),
                });
                parser.skip(&start)
            }
            Node::Element { name, start } => parser.skip_unmodeled("message", &name, &start),
            Node::Text(_) => Ok(()),
        })
    }

    fn decode_port_type(
        &mut self,
        start: BytesStart<'static>,
        port_type: &mut PortType,
    ) -> Result<(), error::Error> {
        let [name] = self.get_attributes(&start, ["name"])?;
        if let Some(name) = name {
            port_type.name = name;
        }

        self.children("portType", |parser, node| match node {
            Node::Element { name, start } if name == "operation" => {
                let mut operation = Operation::default();
                parser.decode_operation(start, &mut operation)?;
                port_type.operations.push(operation);
                Ok(())
            }
            Node::Element { name, start } => parser.skip_unmodeled("portType", &name, &start),
            Node::Text(_) => Ok(()),
        })
    }

    fn decode_operation(
        &mut self,
        start: BytesStart<'static>,
        operation: &mut Operation,
    ) -> Result<(), error::Error> {
        let [name, parameter_order] = self.get_attributes(&start, ["name", "parameterOrder"])?;
        if let Some(name) = name {
            operation.name = name;
        }
        if let Some(parameter_order) = parameter_order {
            operation.parameter_order = parameter_order;
        }

        self.children("operation", |parser, node| {
            let (name, start) = match node {
                Node::Element { name, start } => (name, start),
                Node::Text(_) => return Ok(()),
            };

            match name.as_str() {
                "documentation" => {
                    operation.doc = parser.text("documentation")?;
                    Ok(())
                }

                "input" | "output" => {
                    let [message] = parser.get_attributes(&start, ["message"])?;
                    let io = if name == "input" {
                        operation.input.get_or_insert_with(Io::default)
                    } else {
                        operation.output.get_or_insert_with(Io::default)
                    };

                    if let Some(message) = message {
                        io.message = message;
                    }
                    parser.skip(&start)
                }

                _ => parser.skip_unmodeled("operation", &name, &start),
            }
        })
    }

    fn decode_binding(
        &mut self,
        start: BytesStart<'static>,
        binding: &mut Binding,
    ) -> Result<(), error::Error> {
        let [name, ty] = self.get_attributes(&start, ["name", "type"])?;
        if let Some(name) = name {
            binding.name = name;
        }
        if let Some(ty) = ty {
            binding.ty = ty;
        }

        self.children("binding", |parser, node| {
            let (name, start) = match node {
                Node::Element { name, start } => (name, start),
                Node::Text(_) => return Ok(()),
            };

            match name.as_str() {
                "binding" => {
                    let [style, transport] = parser.get_attributes(&start, ["style", "transport"])?;
                    let soap_binding = binding.soap_binding.get_or_insert_with(SoapBinding::default);

                    if let Some(style) = style {
                        soap_binding.style = style;
                    }
                    if let Some(transport) = transport {
                        soap_binding.transport = transport;
                    }
                    parser.skip(&start)
                }

                "operation" => {
                    let mut operation = BindingOperation::default();
                    parser.decode_binding_operation(start, &mut operation)?;
                    binding.operations.push(operation);
                    Ok(())
                }

                _ => parser.skip_unmodeled("binding", &name, &start),
            }
        })
    }

    fn decode_binding_operation(
        &mut self,
        start: BytesStart<'static>,
        operation: &mut BindingOperation,
    ) -> Result<(), error::Error> {
        let [name] = self.get_attributes(&start, ["name"])?;
        if let Some(name) = name {
            operation.name = name;
        }

        self.children("operation", |parser, node| {
            let (name, start) = match node {
                Node::Element { name, start } => (name, start),
                Node::Text(_) => return Ok(()),
            };

            match name.as_str() {
                "operation" => {
                    let [soap_action, style] =
                        parser.get_attributes(&start, ["soapAction", "style"])?;
                    let soap = operation.operation.get_or_insert_with(SoapOperation::default);

                    if let Some(soap_action) = soap_action {
                        soap.soap_action = soap_action;
                    }
                    if let Some(style) = style {
                        soap.style = style;
                    }
                    parser.skip(&start)
                }

                "input" => parser.decode_binding_body("input", &mut operation.input),
                "output" => parser.decode_binding_body("output", &mut operation.output),

                _ => parser.skip_unmodeled("operation", &name, &start),
            }
        })
    }

    /// Reads the `body` child of a binding `input`/`output`. Without one
    /// the target stays unset.
    fn decode_binding_body(
        &mut self,
        element: &'static str,
        target: &mut Option<BindingIo>,
    ) -> Result<(), error::Error> {
        self.children(element, |parser, node| match node {
            Node::Element { name, start } if name == "body" => {
                let [parts, body_use] = parser.get_attributes(&start, ["parts", "use"])?;
                let io = target.get_or_insert_with(BindingIo::default);

                if let Some(parts) = parts {
                    io.parts = parts;
                }
                if let Some(body_use) = body_use {
                    io.body_use = body_use;
                }
                parser.skip(&start)
            }
            Node::Element { name, start } => parser.skip_unmodeled(element, &name, &start),
            Node::Text(_) => Ok(()),
        })
    }

    fn decode_service(&mut self, service: &mut Service) -> Result<(), error::Error> {
        self.children("service", |parser, node| {
            let (name, start) = match node {
                Node::Element { name, start } => (name, start),
                Node::Text(_) => return Ok(()),
            };

            match name.as_str() {
                "documentation" => {
                    service.doc = parser.text("documentation")?;
                    Ok(())
                }

                "port" => {
                    let mut port = Port::default();
                    parser.decode_port(start, &mut port)?;
                    service.ports.push(port);
                    Ok(())
                }

                _ => parser.skip_unmodeled("service", &name, &start),
            }
        })
    }

    fn decode_port(&mut self, start: BytesStart<'static>, port: &mut Port) -> Result<(), error::Error> {
        let [name, binding] = self.get_attributes(&start, ["name", "binding"])?;
        if let Some(name) = name {
            port.name = name;
        }
        if let Some(binding) = binding {
            port.binding = binding;
        }

        self.children("port", |parser, node| match node {
            Node::Element { name, start } if name == "address" => {
                let [location] = parser.get_attributes(&start, ["location"])?;

                port.address = Address {
                    location: location.unwrap_or_default(),
                };
                parser.skip(&start)
            }
            Node::Element { name, start } => parser.skip_unmodeled("port", &name, &start),
            Node::Text(_) => Ok(()),
        })
    }
}

pub fn parse<B: BufRead>(input: B, options: &DecodeOptions) -> Result<Document, error::Error> {
    Parser::new(input, options).parse()
}
