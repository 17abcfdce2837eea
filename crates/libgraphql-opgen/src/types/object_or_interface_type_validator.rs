use crate::schema::TypeValidationError;
use crate::types::GraphQLType;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;

pub(super) struct ObjectOrInterfaceTypeValidator<'a> {
    errors: Vec<TypeValidationError>,
    type_: &'a ObjectOrInterfaceTypeData,
    types_map: &'a IndexMap<String, GraphQLType>,
}
impl<'a> ObjectOrInterfaceTypeValidator<'a> {
    pub fn new(
        type_: &'a ObjectOrInterfaceTypeData,
        types_map: &'a IndexMap<String, GraphQLType>,
    ) -> Self {
        Self {
            errors: vec![],
            type_,
            types_map,
        }
    }

    pub fn validate(mut self) -> Vec<TypeValidationError> {
        self.validate_field_types();
        self.validate_implemented_interfaces();
        self.errors
    }

    fn validate_field_types(&mut self) {
        let type_name = self.type_.name();
        for (field_name, field) in self.type_.fields() {
            let field_type_name = innermost_type_name(field.type_annotation());
            match self.types_map.get(field_type_name) {
                // A reference to a type that never gets defined is left for
                // the consumer of the schema to deal with.
                None => tracing::warn!(
                    "`{type_name}.{field_name}` references an undefined type \
                    `{field_type_name}` ({})",
                    field.def_location(),
                ),

                Some(field_type) if !field_type.is_output_type() =>
                    self.errors.push(
                        TypeValidationError::InvalidOutputFieldWithInputType {
                            def_location: field.def_location().to_owned(),
                            field_name: field_name.to_string(),
                            input_type_name: field_type_name.to_string(),
                            parent_type_name: type_name.to_string(),
                        }
                    ),

                Some(_) => (),
            }

            for (param_name, param) in field.parameters() {
                let param_type_name = innermost_type_name(param.type_annotation());
                match self.types_map.get(param_type_name) {
                    None => tracing::warn!(
                        "The `{param_name}` parameter of `{type_name}.{field_name}` \
                        references an undefined type `{param_type_name}` ({})",
                        param.def_location(),
                    ),

                    Some(param_type) if !param_type.is_input_type() =>
                        self.errors.push(
                            TypeValidationError::InvalidParameterWithOutputOnlyType {
                                def_location: param.def_location().to_owned(),
                                parameter_name: param_name.to_string(),
                                outputonly_type_name: param_type_name.to_string(),
                            }
                        ),

                    Some(_) => (),
                }
            }
        }
    }

    fn validate_implemented_interfaces(&mut self) {
        let type_name = self.type_.name();
        for iface_name in self.type_.interface_names() {
            // Verify that this implemented interface name is actually a defined
            // type.
            let iface_type =
                if let Some(iface_type) = self.types_map.get(iface_name) {
                    iface_type
                } else {
                    self.errors.push(
                        TypeValidationError::ImplementsUndefinedInterface {
                            type_name: type_name.to_string(),
                            undefined_interface_name: iface_name.to_string(),
                            loc: self.type_.def_location().to_owned(),
                        }
                    );
                    continue;
                };

            // Verify that the defined type being implemented is an interface
            // type.
            let iface =
                if let Some(iface) = iface_type.as_interface() {
                    iface
                } else {
                    self.errors.push(
                        TypeValidationError::ImplementsNonInterfaceType {
                            type_name: type_name.to_string(),
                            non_interface_type_name: iface_type.name().to_string(),
                            loc: self.type_.def_location().to_owned(),
                        }
                    );
                    continue;
                };

            // The implementing type must also explicitly implement each of the
            // interfaces that this interface implements.
            //
            // https://spec.graphql.org/October2021/#IsValidImplementation()
            for transitive_iface_name in iface.interface_names() {
                if !self.type_.implements_interface(transitive_iface_name) {
                    self.errors.push(
                        TypeValidationError::MissingRecursiveInterfaceImplementation {
                            def_location: self.type_.def_location().to_owned(),
                            interface_name: iface_name.to_string(),
                            missing_recursive_interface_name:
                                transitive_iface_name.to_string(),
                            type_name: type_name.to_string(),
                        }
                    );
                }
            }

            // Every field of the interface must be present on the
            // implementing type.
            for field_name in iface.fields().keys() {
                if !self.type_.fields().contains_key(field_name) {
                    self.errors.push(
                        TypeValidationError::MissingInterfaceSpecifiedField {
                            def_location: self.type_.def_location().to_owned(),
                            field_name: field_name.to_string(),
                            interface_name: iface_name.to_string(),
                            type_name: type_name.to_string(),
                        }
                    );
                }
            }
        }
    }
}

fn innermost_type_name(annotation: &TypeAnnotation) -> &str {
    annotation.innermost_named_type_annotation().graphql_type_name()
}
