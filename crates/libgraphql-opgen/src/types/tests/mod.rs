mod object_type_builder_tests;
mod test_utils;
mod union_type_builder_tests;
