use team_manager_be::auth::{hash_password, verify_password};

#[test]
fn test_hash_then_verify_round_trip() {
    let stored = hash_password("correct horse battery staple");

    assert!(verify_password("correct horse battery staple", &stored));
    assert!(!verify_password("wrong password", &stored));
}

#[test]
fn test_same_password_hashes_differently() {
    // Per-account salts mean two signups with the same password must
    // not produce the same stored value.
    let a = hash_password("hunter2");
    let b = hash_password("hunter2");

    assert_ne!(a, b);
    assert!(verify_password("hunter2", &a));
    assert!(verify_password("hunter2", &b));
}

#[test]
fn test_malformed_stored_value_never_verifies() {
    assert!(!verify_password("anything", "not-a-hash"));
    assert!(!verify_password("anything", "missing$padding!!!"));
    assert!(!verify_password("anything", ""));
}
