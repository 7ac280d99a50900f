pub const DEFAULT_ATTRIBUTES: &[&str] = &[
    "data-test-id"
];
