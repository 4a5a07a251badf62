//! Integration tests for `mpint` live in `tests/`
