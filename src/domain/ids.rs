//! Identifier and timestamp conventions.
//!
//! Entity ids are opaque strings. Freshly minted ids follow the
//! `<prefix>_<millis>` shape so that records exported by older builds and
//! records created here look alike.

/// Milliseconds since the Unix epoch.
pub type Timestamp = i64;

/// Id prefix for projects.
pub const PROJECT_PREFIX: &str = "proj";
/// Id prefix for templates.
pub const TEMPLATE_PREFIX: &str = "tmpl";
/// Id prefix for template-declared inputs.
pub const INPUT_PREFIX: &str = "input";
/// Id prefix for template steps.
pub const STEP_PREFIX: &str = "step";
/// Id prefix for project-local inputs.
pub const LOCAL_PREFIX: &str = "local";

/// Mint an id `<prefix>_<now>` that `taken` does not already claim.
///
/// Two ids minted within the same millisecond get `_1`, `_2`, ... suffixes.
pub fn fresh_id<F>(prefix: &str, now: Timestamp, taken: F) -> String
where
    F: Fn(&str) -> bool,
{
    let base = format!("{}_{}", prefix, now);
    if !taken(&base) {
        return base;
    }
    let mut n = 1u32;
    loop {
        let candidate = format!("{}_{}", base, n);
        if !taken(&candidate) {
            return candidate;
        }
        n += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_plain_timestamp_when_free() {
        assert_eq!(fresh_id(PROJECT_PREFIX, 42, |_| false), "proj_42");
    }

    #[test]
    fn appends_counter_on_collision() {
        let existing = ["local_7", "local_7_1"];
        let id = fresh_id(LOCAL_PREFIX, 7, |c| existing.contains(&c));
        assert_eq!(id, "local_7_2");
    }
}
