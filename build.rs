fn main() {
    // Generates OUT_DIR/built.rs with GIT_COMMIT_HASH and friends.
    if let Err(err) = built::write_built_file() {
        panic!("Failed to acquire build-time information: {err}");
    }
}
