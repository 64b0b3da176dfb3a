use crate::registry::DocumentRegistry;
use crate::registry::DocumentRegistryBuilder;
use crate::tests::utils::GUEST_LOG_IN_JSON;
use std::sync::Arc;

#[test]
fn empty_registry_is_shared() {
    let empty = DocumentRegistry::empty();
    assert!(empty.is_empty());
    assert_eq!(empty.len(), 0);
    assert!(std::ptr::eq(empty, DocumentRegistry::empty()));
}

/// Lookups hand out the same allocation rather than copies.
#[test]
fn lookups_share_one_document() {
    let mut builder = DocumentRegistryBuilder::new();
    builder.add_from_str(GUEST_LOG_IN_JSON, None).unwrap();
    let registry = builder.build();

    let first = registry.get("guestLogIn").unwrap();
    let second = registry.get("guestLogIn").unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    assert!(Arc::ptr_eq(&first, &registry.documents()["guestLogIn"]));
}
