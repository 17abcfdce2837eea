use crate::generator::VariableDefinition;
use crate::types::TypeAnnotation;
use std::collections::HashMap;
use std::collections::HashSet;

/// Hands out collision-free operation variable names for hoisted field
/// arguments.
///
/// The first argument allocated under a given name keeps that name. Later
/// ones get a numeric suffix counting up from 1 (`language`, `language1`,
/// `language2`, ...). A suffixed candidate that was already handed out (say,
/// to an argument literally named `language1`) is skipped.
#[derive(Clone, Debug, Default)]
pub struct VariableRegistry {
    counters: HashMap<String, usize>,
    definitions: Vec<VariableDefinition>,
    used_names: HashSet<String>,
}
impl VariableRegistry {
    /// Allocate a variable for an argument and record its declaration.
    /// Returns the variable's name (without the `$` sigil).
    pub fn allocate(
        &mut self,
        argument_name: &str,
        argument_type: &TypeAnnotation,
    ) -> String {
        let counter = self.counters.entry(argument_name.to_string()).or_insert(0);
        let variable_name = loop {
            let candidate =
                if *counter == 0 {
                    argument_name.to_string()
                } else {
                    format!("{argument_name}{counter}")
                };
            *counter += 1;
            if self.used_names.insert(candidate.to_owned()) {
                break candidate;
            }
        };

        self.definitions.push(VariableDefinition {
            name: variable_name.to_owned(),
            type_annotation: argument_type.to_owned(),
        });
        variable_name
    }

    /// Declarations in the order their variables were allocated.
    pub fn definitions(&self) -> &[VariableDefinition] {
        self.definitions.as_slice()
    }

    pub fn into_definitions(self) -> Vec<VariableDefinition> {
        self.definitions
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn new() -> Self {
        Self::default()
    }
}
