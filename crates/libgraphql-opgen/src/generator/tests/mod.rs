mod document_assembler_tests;
mod generator_config_tests;
mod operation_formatter_tests;
mod property_tests;
