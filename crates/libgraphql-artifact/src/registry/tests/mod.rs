mod document_registry_builder_tests;
mod document_registry_tests;
